pub mod config;
pub mod constants;
pub mod contact;
pub mod hover;
pub mod reveal;
pub mod theme;
pub mod typewriter;

pub use config::*;
pub use contact::*;
pub use hover::*;
pub use reveal::*;
pub use theme::*;
pub use typewriter::*;

//! Contact form rules: endpoint guard, response classification and the status
//! line shown to the visitor.
//!
//! ERROR HANDLING
//! ==============
//! Every failure ends up as inline status text. `SubmitError` keeps the cause
//! for logging; `StatusMessage::for_outcome` decides what the visitor reads.

use crate::config::Messages;
use serde::Deserialize;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("form action still contains placeholder `{token}`")]
    Misconfigured { token: String },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{}", .0.join(", "))]
    Rejected(Vec<String>),
    #[error("endpoint answered {0} without a usable error list")]
    Failed(u16),
}

/// Refuse to submit while the action URL still carries the placeholder.
pub fn check_endpoint(action: &str, placeholder: &str) -> Result<(), SubmitError> {
    if action.contains(placeholder) {
        return Err(SubmitError::Misconfigured {
            token: placeholder.to_owned(),
        });
    }
    Ok(())
}

#[derive(Deserialize)]
struct ErrorBody {
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize)]
struct ErrorEntry {
    message: String,
}

/// Map an HTTP status and body to the submission outcome.
///
/// Non-2xx bodies shaped like `{"errors":[{"message":..}]}` become
/// [`SubmitError::Rejected`]; any other body (including an empty list) is a
/// plain [`SubmitError::Failed`].
pub fn classify_response(status: u16, body: &str) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.errors.is_empty() => Err(SubmitError::Rejected(
            parsed.errors.into_iter().map(|e| e.message).collect(),
        )),
        _ => Err(SubmitError::Failed(status)),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMethod {
    Get,
    #[default]
    Post,
}

impl FormMethod {
    /// Forms report their method in lower case; anything but GET posts.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("get") {
            FormMethod::Get
        } else {
            FormMethod::Post
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Warning,
    Pending,
    Success,
    Error,
}

impl StatusTone {
    pub fn css_color(self) -> &'static str {
        match self {
            StatusTone::Warning => "orange",
            StatusTone::Pending => "var(--text-secondary)",
            StatusTone::Success => "green",
            StatusTone::Error => "red",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub tone: StatusTone,
    pub text: String,
}

impl StatusMessage {
    pub fn pending(messages: &Messages) -> Self {
        Self {
            tone: StatusTone::Pending,
            text: messages.sending.clone(),
        }
    }

    pub fn for_outcome(outcome: &Result<(), SubmitError>, messages: &Messages) -> Self {
        match outcome {
            Ok(()) => Self {
                tone: StatusTone::Success,
                text: messages.success.clone(),
            },
            Err(SubmitError::Misconfigured { .. }) => Self {
                tone: StatusTone::Warning,
                text: messages.misconfigured.clone(),
            },
            Err(err @ SubmitError::Rejected(_)) => Self {
                tone: StatusTone::Error,
                text: err.to_string(),
            },
            Err(SubmitError::Transport(_) | SubmitError::Failed(_)) => Self {
                tone: StatusTone::Error,
                text: messages.failure.clone(),
            },
        }
    }
}

use std::str::CharIndices;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeTiming {
    pub start_delay: Duration,
    pub step: Duration,
}

/// One tick of the typewriter: wait `delay`, then show `text`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeStep<'a> {
    pub delay: Duration,
    pub text: &'a str,
}

/// Character-by-character reveal of a fixed tagline.
///
/// The first character lands after `start_delay`, each following one `step`
/// later. Steps split on `char` boundaries so multi-byte glyphs stay whole.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    timing: TypeTiming,
}

impl Typewriter {
    pub fn new(text: &str, timing: TypeTiming) -> Self {
        Self {
            text: text.trim().to_owned(),
            timing,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Time from start until the full text is shown.
    pub fn total_duration(&self) -> Duration {
        match self.char_count() {
            0 => Duration::ZERO,
            n => self.timing.start_delay + self.timing.step * (n as u32 - 1),
        }
    }

    pub fn steps(&self) -> Steps<'_> {
        Steps {
            text: &self.text,
            chars: self.text.char_indices(),
            timing: self.timing,
            started: false,
        }
    }
}

pub struct Steps<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
    timing: TypeTiming,
    started: bool,
}

impl<'a> Iterator for Steps<'a> {
    type Item = TypeStep<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (idx, ch) = self.chars.next()?;
        let delay = if self.started {
            self.timing.step
        } else {
            self.started = true;
            self.timing.start_delay
        };
        Some(TypeStep {
            delay,
            text: &self.text[..idx + ch.len_utf8()],
        })
    }
}

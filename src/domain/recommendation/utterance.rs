//! Utterance value object

use std::fmt;

use crate::domain::error::EmptyUtteranceError;

/// Natural-language text describing the user's mood, typed or transcribed.
///
/// Guaranteed to contain at least one non-whitespace character. The text is
/// kept exactly as supplied; validation never trims or rewrites it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    text: String,
}

impl Utterance {
    pub fn parse(text: impl Into<String>) -> Result<Self, EmptyUtteranceError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(EmptyUtteranceError);
        }
        Ok(Self { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters, for logging
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Utterance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Utterance {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

//! Speech-to-text provider selection

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidProviderError;

/// All selectable transcription providers
pub const ALL_PROVIDERS: &[TranscriptionProvider] =
    &[TranscriptionProvider::OpenAi, TranscriptionProvider::Gemini];

/// Which remote speech-to-text capability handles `/voice` uploads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TranscriptionProvider {
    #[default]
    OpenAi,
    Gemini,
}

impl TranscriptionProvider {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
        }
    }

    /// Transcription-capable model used when none is configured
    pub const fn default_model(&self) -> &'static str {
        match self {
            Self::OpenAi => "whisper-1",
            Self::Gemini => "gemini-2.5-flash",
        }
    }
}

impl FromStr for TranscriptionProvider {
    type Err = InvalidProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" | "whisper" => Ok(Self::OpenAi),
            "gemini" | "google" => Ok(Self::Gemini),
            _ => Err(InvalidProviderError {
                input: s.to_string(),
                valid: ALL_PROVIDERS
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

impl fmt::Display for TranscriptionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Domain error types

use std::fmt;

use thiserror::Error;

/// Coarse classification shared by every error the gateway can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Empty or missing text input
    InvalidInput,
    /// Missing or empty audio upload
    NoAudioProvided,
    /// Missing credential or invalid setting
    ConfigurationError,
    /// Transport or provider-side failure from an external capability
    UpstreamUnavailable,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::NoAudioProvided => "no_audio_provided",
            Self::ConfigurationError => "configuration_error",
            Self::UpstreamUnavailable => "upstream_unavailable",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when parsing a duration string
#[derive(Debug, Clone, Error)]
#[error("Invalid duration format: \"{input}\". Expected format: <number>s, <number>m, or <number>m<number>s (e.g., 30s, 1m, 2m30s)")]
pub struct DurationParseError {
    pub input: String,
}

/// Error when an utterance is empty or whitespace-only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Input text must not be empty")]
pub struct EmptyUtteranceError;

/// Error when an unknown transcription provider is named
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid transcription provider: \"{input}\". Valid providers are: {valid}")]
pub struct InvalidProviderError {
    pub input: String,
    pub valid: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Missing {key}. Set {env} or run 'moodcart config set {key} <value>'")]
    MissingCredential { key: &'static str, env: &'static str },

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

impl ConfigError {
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::ConfigurationError
    }
}

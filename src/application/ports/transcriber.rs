//! Transcription port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::error::ErrorKind;
use crate::domain::transcription::AudioData;

/// Transcription errors
#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    #[error("No audio received")]
    EmptyAudio,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty transcription response")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

impl TranscriptionError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyAudio => ErrorKind::NoAudioProvided,
            _ => ErrorKind::UpstreamUnavailable,
        }
    }
}

/// Port for audio transcription
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe audio data to text.
    ///
    /// Implementations must reject empty audio with [`TranscriptionError::EmptyAudio`]
    /// before making any network call, and return the transcript without
    /// altering whitespace or casing.
    async fn transcribe(&self, audio: &AudioData) -> Result<String, TranscriptionError>;
}

/// Blanket implementation for boxed transcriber types
#[async_trait]
impl Transcriber for Box<dyn Transcriber> {
    async fn transcribe(&self, audio: &AudioData) -> Result<String, TranscriptionError> {
        self.as_ref().transcribe(audio).await
    }
}

//! Mood recommendation use case
//!
//! Two request pipelines share one recommender:
//!
//! - text:  `Received -> Completed`
//! - voice: `Received -> Transcribed -> Completed`
//!
//! Any failure moves straight to `Failed` and stops; nothing is retried and no
//! later stage runs after an earlier one fails.

use std::fmt;
use std::time::Instant;

use thiserror::Error;

use crate::domain::error::{EmptyUtteranceError, ErrorKind};
use crate::domain::recommendation::Utterance;
use crate::domain::transcription::AudioData;

use super::ports::{RecommendationError, Recommender, Transcriber, TranscriptionError};

/// Stages a request moves through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Received,
    Transcribed,
    Completed,
    Failed,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Received => "received",
            Self::Transcribed => "transcribed",
            Self::Completed => "completed",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Errors from the recommendation pipelines
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    InvalidInput(#[from] EmptyUtteranceError),

    #[error("No audio received")]
    NoAudioProvided,

    #[error("No speech detected in audio")]
    NoSpeechDetected,

    #[error("Transcription failed: {0}")]
    Transcription(#[from] TranscriptionError),

    #[error("Recommendation failed: {0}")]
    Recommendation(#[from] RecommendationError),
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) | Self::NoSpeechDetected => ErrorKind::InvalidInput,
            Self::NoAudioProvided => ErrorKind::NoAudioProvided,
            Self::Transcription(e) => e.kind(),
            Self::Recommendation(e) => e.kind(),
        }
    }
}

/// Stateless orchestration over injected adapters.
/// One instance is shared by every request.
pub struct MoodPipeline<T, R>
where
    T: Transcriber,
    R: Recommender,
{
    transcriber: T,
    recommender: R,
}

impl<T, R> MoodPipeline<T, R>
where
    T: Transcriber,
    R: Recommender,
{
    pub fn new(transcriber: T, recommender: R) -> Self {
        Self {
            transcriber,
            recommender,
        }
    }

    /// Text path: validate, then ask the recommender exactly once.
    pub async fn recommend_text(&self, text: &str) -> Result<String, PipelineError> {
        let utterance = Utterance::parse(text)?;
        tracing::debug!(
            stage = %PipelineStage::Received,
            chars = utterance.char_count(),
            "Text request accepted"
        );

        self.recommend(&utterance).await
    }

    /// Voice path: transcribe, then recommend from exactly the transcript.
    ///
    /// The audio buffer is consumed and dropped as soon as transcription ends.
    pub async fn recommend_voice(&self, audio: Option<AudioData>) -> Result<String, PipelineError> {
        let audio = match audio {
            Some(a) if !a.is_empty() => a,
            _ => return Err(PipelineError::NoAudioProvided),
        };

        tracing::debug!(
            stage = %PipelineStage::Received,
            size = %audio.human_readable_size(),
            mime_type = %audio.mime_type(),
            "Voice request accepted"
        );

        let started = Instant::now();
        let transcript = self.transcriber.transcribe(&audio).await.map_err(|e| {
            tracing::warn!(
                stage = %PipelineStage::Failed,
                after = %PipelineStage::Received,
                error = %e,
                "Transcription failed"
            );
            e
        })?;
        drop(audio);

        tracing::info!(
            stage = %PipelineStage::Transcribed,
            chars = transcript.chars().count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Audio transcribed"
        );
        tracing::debug!(transcript = %transcript, "User said");

        let utterance = Utterance::parse(transcript.as_str()).map_err(|_| {
            tracing::info!(
                stage = %PipelineStage::Failed,
                after = %PipelineStage::Transcribed,
                "No speech detected"
            );
            PipelineError::NoSpeechDetected
        })?;
        self.recommend(&utterance).await
    }

    async fn recommend(&self, utterance: &Utterance) -> Result<String, PipelineError> {
        let started = Instant::now();
        let answer = self.recommender.recommend(utterance).await.map_err(|e| {
            tracing::warn!(stage = %PipelineStage::Failed, error = %e, "Recommendation failed");
            e
        })?;

        tracing::info!(
            stage = %PipelineStage::Completed,
            chars = answer.chars().count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Recommendation received"
        );

        Ok(answer)
    }
}

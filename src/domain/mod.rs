//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod duration;
pub mod error;
pub mod recommendation;
pub mod transcription;

// Re-export common types
pub use config::{AppConfig, ServerSettings};
pub use duration::Duration;
pub use error::*;
pub use recommendation::{RecommendationPrompt, Utterance};
pub use transcription::{AudioData, AudioMimeType, TranscriptionProvider};

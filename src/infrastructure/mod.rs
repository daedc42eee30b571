//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with Gemini, OpenAI, the config file and logging.

pub mod config;
pub mod gemini;
pub mod observability;
pub mod recommendation;
pub mod transcription;

// Re-export adapters
pub use config::XdgConfigStore;
pub use recommendation::GeminiRecommender;
pub use transcription::{create_transcriber, GeminiTranscriber, OpenAiTranscriber};

use crate::domain::duration::Duration;

/// Shared outbound HTTP client with an explicit per-request deadline
pub fn http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(timeout.as_std()).build()
}

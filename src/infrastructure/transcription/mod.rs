//! Transcription adapters
//!
//! OpenAI's transcription endpoint is the default; Gemini can transcribe too,
//! which lets a deployment run on a single credential.

mod gemini;
mod openai;

pub use gemini::GeminiTranscriber;
pub use openai::{OpenAiTranscriber, OPENAI_BASE_URL};

use crate::application::ports::Transcriber;
use crate::domain::config::TranscriptionSettings;
use crate::domain::transcription::TranscriptionProvider;
use crate::infrastructure::gemini::GeminiClient;

/// Create the transcriber selected by configuration
pub fn create_transcriber(
    settings: &TranscriptionSettings,
    http: reqwest::Client,
) -> Box<dyn Transcriber> {
    match settings.provider {
        TranscriptionProvider::OpenAi => Box::new(OpenAiTranscriber::new(
            http,
            settings.api_key.clone(),
            settings.model.clone(),
        )),
        TranscriptionProvider::Gemini => Box::new(GeminiTranscriber::from_client(
            GeminiClient::new(http, settings.api_key.clone(), settings.model.clone()),
        )),
    }
}

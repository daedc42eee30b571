//! Gemini API transcriber adapter

use async_trait::async_trait;

use crate::application::ports::{Transcriber, TranscriptionError};
use crate::domain::duration::Duration;
use crate::domain::transcription::{AudioData, TranscriptionProvider};
use crate::infrastructure::gemini::{
    GeminiClient, GeminiError, GenerateContentRequest, GenerationConfig, Part,
    SystemInstruction, ThinkingConfig,
};
use crate::infrastructure::http_client;

/// Verbatim transcription, no clean-up
const TRANSCRIBE_INSTRUCTION: &str = r#"You are a speech-to-text engine.

Instructions:
- Transcribe the spoken words in the audio exactly as spoken
- Output ONLY the transcript as plain text
- Do NOT add timestamps, speaker labels, commentary, or formatting
- If the audio contains no speech, output nothing"#;

impl From<GeminiError> for TranscriptionError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::InvalidApiKey => Self::InvalidApiKey,
            GeminiError::RateLimited => Self::RateLimited,
            GeminiError::EmptyResponse => Self::EmptyResponse,
            GeminiError::RequestFailed(m) => Self::RequestFailed(m),
            GeminiError::ParseError(m) => Self::ParseError(m),
            GeminiError::ApiError(m) => Self::ApiError(m),
        }
    }
}

/// Gemini API transcriber (inline base64 audio)
#[derive(Debug, Clone)]
pub struct GeminiTranscriber {
    client: GeminiClient,
}

impl GeminiTranscriber {
    /// Create a new Gemini transcriber with the given API key and the default request timeout
    pub fn new(api_key: impl Into<String>) -> reqwest::Result<Self> {
        let http = http_client(Duration::default_request_timeout())?;
        Ok(Self::from_client(GeminiClient::new(
            http,
            api_key,
            TranscriptionProvider::Gemini.default_model(),
        )))
    }

    pub fn from_client(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Build the request body
    fn build_request(audio: &AudioData) -> GenerateContentRequest {
        let mut request = GenerateContentRequest::user(vec![Part::inline(
            audio.mime_type().as_str(),
            audio.to_base64(),
        )]);
        request.system_instruction = Some(SystemInstruction {
            parts: vec![Part::text(TRANSCRIBE_INSTRUCTION)],
        });
        request.generation_config = Some(GenerationConfig {
            thinking_config: Some(ThinkingConfig {
                thinking_budget: 0, // Disable thinking for faster response
            }),
        });
        request
    }
}

#[async_trait]
impl Transcriber for GeminiTranscriber {
    async fn transcribe(&self, audio: &AudioData) -> Result<String, TranscriptionError> {
        if audio.is_empty() {
            return Err(TranscriptionError::EmptyAudio);
        }

        let body = Self::build_request(audio);

        tracing::debug!(
            model = %self.client.model(),
            size = %audio.human_readable_size(),
            "Sending audio to Gemini"
        );

        match self.client.generate(&body).await {
            Ok(text) => Ok(text),
            // Silence: the model was told to output nothing
            Err(GeminiError::EmptyResponse) => Ok(String::new()),
            Err(e) => {
                tracing::warn!(error = %e, "Gemini transcription failed");
                Err(TranscriptionError::from(e))
            }
        }
    }
}

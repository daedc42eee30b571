//! OpenAI audio transcription adapter

use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{Transcriber, TranscriptionError};
use crate::domain::duration::Duration;
use crate::domain::transcription::{AudioData, TranscriptionProvider};
use crate::infrastructure::http_client;

/// OpenAI API base URL
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Speech-to-text via `POST /audio/transcriptions` with a plain-text response
#[derive(Clone)]
pub struct OpenAiTranscriber {
    api_key: String,
    model: String,
    base_url: String,
    http: reqwest::Client,
}

impl OpenAiTranscriber {
    pub fn new(http: reqwest::Client, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: OPENAI_BASE_URL.to_string(),
            http,
        }
    }

    /// Transcriber using `whisper-1` and the default request timeout
    pub fn with_default_model(api_key: impl Into<String>) -> reqwest::Result<Self> {
        let http = http_client(Duration::default_request_timeout())?;
        Ok(Self::new(
            http,
            api_key,
            TranscriptionProvider::OpenAi.default_model(),
        ))
    }

    /// Point the transcriber at a different API root (used against mock servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn api_url(&self) -> String {
        format!("{}/audio/transcriptions", self.base_url)
    }

    fn build_form(&self, audio: &AudioData) -> Result<multipart::Form, TranscriptionError> {
        let file_part = multipart::Part::bytes(audio.data().to_vec())
            .file_name(audio.file_name())
            .mime_str(audio.mime_type().as_str())
            .map_err(|e| TranscriptionError::RequestFailed(format!("mime: {}", e)))?;

        Ok(multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "text")
            .part("file", file_part))
    }
}

impl std::fmt::Debug for OpenAiTranscriber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiTranscriber")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transcriber for OpenAiTranscriber {
    async fn transcribe(&self, audio: &AudioData) -> Result<String, TranscriptionError> {
        if audio.is_empty() {
            return Err(TranscriptionError::EmptyAudio);
        }

        let form = self.build_form(audio)?;

        tracing::debug!(
            model = %self.model,
            size = %audio.human_readable_size(),
            mime_type = %audio.mime_type(),
            "Sending audio to OpenAI transcription API"
        );

        let response = self
            .http
            .post(self.api_url())
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(e.without_url().to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(TranscriptionError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranscriptionError::RateLimited);
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            tracing::warn!(%status, "OpenAI transcription rejected");
            return Err(TranscriptionError::ApiError(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        response
            .text()
            .await
            .map_err(|e| TranscriptionError::ParseError(e.without_url().to_string()))
    }
}

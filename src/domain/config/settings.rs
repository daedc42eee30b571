//! Validated runtime settings

use crate::domain::duration::Duration;
use crate::domain::error::ConfigError;
use crate::domain::transcription::TranscriptionProvider;

use super::app_config::AppConfig;

/// Credential and model for the speech-to-text capability
#[derive(Clone, PartialEq, Eq)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProvider,
    pub api_key: String,
    pub model: String,
}

/// Fully resolved settings, read once at startup and never reloaded.
#[derive(Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub transcription: TranscriptionSettings,
    pub request_timeout: Duration,
    pub json_logs: bool,
}

impl ServerSettings {
    /// Resolve a merged config, failing when a required credential is absent.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let gemini_api_key = require(
            config.gemini_api_key.as_deref(),
            "gemini_api_key",
            "GEMINI_API_KEY",
        )?;

        let provider = match config.transcription_provider.as_deref() {
            Some(raw) => raw
                .parse::<TranscriptionProvider>()
                .map_err(|e| ConfigError::ValidationError {
                    key: "transcription_provider".to_string(),
                    message: e.to_string(),
                })?,
            None => TranscriptionProvider::default(),
        };

        let transcription_key = match provider {
            TranscriptionProvider::OpenAi => require(
                config.openai_api_key.as_deref(),
                "openai_api_key",
                "OPENAI_API_KEY",
            )?,
            TranscriptionProvider::Gemini => gemini_api_key.clone(),
        };

        let transcription_model = config
            .transcription_model
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(provider.default_model())
            .to_string();

        let request_timeout = match config.request_timeout.as_deref() {
            Some(raw) => raw
                .parse::<Duration>()
                .map_err(|e| ConfigError::ValidationError {
                    key: "request_timeout".to_string(),
                    message: e.to_string(),
                })?,
            None => Duration::default_request_timeout(),
        };

        Ok(Self {
            host: config.host_or_default().to_string(),
            port: config.port_or_default(),
            gemini_api_key,
            gemini_model: config.gemini_model_or_default().to_string(),
            transcription: TranscriptionSettings {
                provider,
                api_key: transcription_key,
                model: transcription_model,
            },
            request_timeout,
            json_logs: config.json_logs_or_default(),
        })
    }

    /// `host:port` for binding the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn require(
    value: Option<&str>,
    key: &'static str,
    env: &'static str,
) -> Result<String, ConfigError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(ConfigError::MissingCredential { key, env })
}

// Credentials stay out of logs and panic messages.
impl std::fmt::Debug for ServerSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("gemini_api_key", &"<redacted>")
            .field("gemini_model", &self.gemini_model)
            .field("transcription", &self.transcription)
            .field("request_timeout", &self.request_timeout)
            .field("json_logs", &self.json_logs)
            .finish()
    }
}

impl std::fmt::Debug for TranscriptionSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranscriptionSettings")
            .field("provider", &self.provider)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .finish()
    }
}

//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::duration::Duration;
use crate::domain::transcription::TranscriptionProvider;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Default generative-text model
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub gemini_model: Option<String>,
    pub transcription_provider: Option<String>,
    pub transcription_model: Option<String>,
    pub request_timeout: Option<String>,
    pub json_logs: Option<bool>,
}

impl AppConfig {
    /// Create config with default values (credentials are never defaulted)
    pub fn defaults() -> Self {
        Self {
            gemini_api_key: None,
            openai_api_key: None,
            host: Some(DEFAULT_HOST.to_string()),
            port: Some(DEFAULT_PORT),
            gemini_model: Some(DEFAULT_GEMINI_MODEL.to_string()),
            transcription_provider: Some(TranscriptionProvider::default().to_string()),
            transcription_model: None,
            request_timeout: Some(Duration::default_request_timeout().to_string()),
            json_logs: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            gemini_api_key: other.gemini_api_key.or(self.gemini_api_key),
            openai_api_key: other.openai_api_key.or(self.openai_api_key),
            host: other.host.or(self.host),
            port: other.port.or(self.port),
            gemini_model: other.gemini_model.or(self.gemini_model),
            transcription_provider: other.transcription_provider.or(self.transcription_provider),
            transcription_model: other.transcription_model.or(self.transcription_model),
            request_timeout: other.request_timeout.or(self.request_timeout),
            json_logs: other.json_logs.or(self.json_logs),
        }
    }

    pub fn host_or_default(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn gemini_model_or_default(&self) -> &str {
        self.gemini_model.as_deref().unwrap_or(DEFAULT_GEMINI_MODEL)
    }

    pub fn json_logs_or_default(&self) -> bool {
        self.json_logs.unwrap_or(false)
    }
}

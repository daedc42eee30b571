//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::config::AppConfig;
use crate::domain::transcription::TranscriptionProvider;

/// MoodCart - mood-based product recommendations over HTTP
#[derive(Parser, Debug)]
#[command(name = "moodcart")]
#[command(version)]
#[command(about = "Mood-based product recommendation gateway using Google Gemini")]
#[command(long_about = None)]
pub struct Cli {
    /// Address to bind
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short = 'p', long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Config file to use instead of the XDG default
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Gemini model for recommendations
    #[arg(long, value_name = "MODEL")]
    pub gemini_model: Option<String>,

    /// Speech-to-text provider for /voice
    #[arg(long, value_name = "PROVIDER")]
    pub transcription_provider: Option<ProviderArg>,

    /// Transcription model (defaults to the provider's transcription model)
    #[arg(long, value_name = "MODEL")]
    pub transcription_model: Option<String>,

    /// Deadline for each outbound provider call (e.g., 30s, 1m)
    #[arg(long, value_name = "TIME")]
    pub request_timeout: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Config layer contributed by command-line flags.
    /// Credentials are never accepted on the command line.
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            gemini_api_key: None,
            openai_api_key: None,
            host: self.host.clone(),
            port: self.port,
            gemini_model: self.gemini_model.clone(),
            transcription_provider: self
                .transcription_provider
                .map(|p| TranscriptionProvider::from(p).to_string()),
            transcription_model: self.transcription_model.clone(),
            request_timeout: self.request_timeout.clone(),
            json_logs: if self.json_logs { Some(true) } else { None },
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Provider argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    Openai,
    Gemini,
}

impl From<ProviderArg> for TranscriptionProvider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Openai => TranscriptionProvider::OpenAi,
            ProviderArg::Gemini => TranscriptionProvider::Gemini,
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "gemini_api_key",
    "openai_api_key",
    "host",
    "port",
    "gemini_model",
    "transcription_provider",
    "transcription_model",
    "request_timeout",
    "json_logs",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

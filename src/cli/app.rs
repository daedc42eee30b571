//! Server runner: configuration loading, wiring, serving

use std::env;
use std::process::ExitCode;

use axum::Router;
use tokio::net::TcpListener;

use crate::application::ports::ConfigStore;
use crate::application::MoodPipeline;
use crate::domain::config::{AppConfig, ServerSettings};
use crate::domain::error::ConfigError;
use crate::infrastructure::gemini::GeminiClient;
use crate::infrastructure::observability::init_tracing;
use crate::infrastructure::{create_transcriber, http_client, GeminiRecommender};
use crate::server::{create_router, AppState};

use super::presenter::Presenter;
use super::signals::shutdown_signal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Config layer read from environment variables.
/// Empty values count as unset.
pub fn env_config() -> AppConfig {
    let var = |name: &str| env::var(name).ok().filter(|s| !s.trim().is_empty());

    AppConfig {
        gemini_api_key: var("GEMINI_API_KEY"),
        openai_api_key: var("OPENAI_API_KEY"),
        host: var("MOODCART_HOST"),
        port: var("PORT").and_then(|p| p.trim().parse().ok()),
        gemini_model: var("GEMINI_MODEL"),
        transcription_provider: var("TRANSCRIPTION_PROVIDER"),
        transcription_model: var("TRANSCRIPTION_MODEL"),
        request_timeout: var("REQUEST_TIMEOUT"),
        json_logs: var("JSON_LOGS").and_then(|v| parse_bool(&v).ok()),
    }
}

/// Load and merge configuration: defaults < file < env < cli
pub async fn load_merged_config<S: ConfigStore>(
    store: &S,
    cli_config: AppConfig,
) -> Result<AppConfig, ConfigError> {
    let file_config = store.load().await?;

    Ok(AppConfig::defaults()
        .merge(file_config)
        .merge(env_config())
        .merge(cli_config))
}

/// Wire adapters into the router. Adapters are built once and shared by every request.
pub fn build_router(settings: &ServerSettings) -> Result<Router, reqwest::Error> {
    let http = http_client(settings.request_timeout)?;

    let recommender = GeminiRecommender::from_client(GeminiClient::new(
        http.clone(),
        settings.gemini_api_key.clone(),
        settings.gemini_model.clone(),
    ));
    let transcriber = create_transcriber(&settings.transcription, http);

    Ok(create_router(AppState::new(MoodPipeline::new(
        transcriber,
        recommender,
    ))))
}

/// Validate configuration, then serve until SIGINT/SIGTERM.
pub async fn run_server(config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    // Fail fast: a missing credential would fail every request identically
    let settings = match ServerSettings::from_config(&config) {
        Ok(s) => s,
        Err(e) => {
            presenter.config_error(&e, None);
            return ExitCode::from(startup_exit_code(&e));
        }
    };

    init_tracing(settings.json_logs);

    let router = match build_router(&settings) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build HTTP client");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let address = settings.bind_address();
    let listener = match TcpListener::bind(&address).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%address, error = %e, "Failed to bind");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    tracing::info!(
        %address,
        gemini_model = %settings.gemini_model,
        transcription_provider = %settings.transcription.provider,
        transcription_model = %settings.transcription.model,
        request_timeout = %settings.request_timeout,
        "Server listening"
    );

    match axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        Ok(()) => {
            tracing::info!("Server stopped");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            tracing::error!(error = %e, "Server error");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Invalid values are usage errors; missing credentials and I/O failures are not.
pub fn startup_exit_code(error: &ConfigError) -> u8 {
    match error {
        ConfigError::ValidationError { .. } => EXIT_USAGE_ERROR,
        _ => EXIT_ERROR,
    }
}

/// Parse a boolean value
pub fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

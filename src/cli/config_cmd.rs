//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::duration::Duration;
use crate::domain::error::ConfigError;
use crate::domain::transcription::TranscriptionProvider;

use super::app::parse_bool;
use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::{Presenter, NOT_SET};

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;
    store.save(&config).await?;

    let shown = if is_secret(key) {
        mask_api_key(value)
    } else {
        value.to_string()
    };
    presenter.success(&format!("{} = {}", key, shown));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;
    presenter.output(display_value(&config, key).as_deref().unwrap_or(NOT_SET));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    let width = VALID_CONFIG_KEYS.iter().map(|k| k.len()).max().unwrap_or(0);
    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, display_value(&config, key).as_deref(), width);
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

fn is_secret(key: &str) -> bool {
    key.ends_with("_api_key")
}

/// Validate a value and store it under `key`
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "gemini_api_key" | "openai_api_key" | "host" | "gemini_model" | "transcription_model" => {
            if value.trim().is_empty() {
                return Err(invalid("Value must not be empty".to_string()));
            }
            let value = Some(value.to_string());
            match key {
                "gemini_api_key" => config.gemini_api_key = value,
                "openai_api_key" => config.openai_api_key = value,
                "host" => config.host = value,
                "gemini_model" => config.gemini_model = value,
                _ => config.transcription_model = value,
            }
        }
        "port" => {
            let port = value
                .trim()
                .parse::<u16>()
                .ok()
                .filter(|p| *p > 0)
                .ok_or_else(|| invalid(format!("Invalid port '{}'. Use 1-65535", value)))?;
            config.port = Some(port);
        }
        "transcription_provider" => {
            let provider = value
                .parse::<TranscriptionProvider>()
                .map_err(|e| invalid(e.to_string()))?;
            config.transcription_provider = Some(provider.to_string());
        }
        "request_timeout" => {
            let timeout = value
                .parse::<Duration>()
                .map_err(|e| invalid(e.to_string()))?;
            config.request_timeout = Some(timeout.to_string());
        }
        "json_logs" => {
            let enabled = parse_bool(value)
                .map_err(|_| invalid("Value must be 'true' or 'false'".to_string()))?;
            config.json_logs = Some(enabled);
        }
        _ => return Err(invalid("Unknown key".to_string())),
    }

    Ok(())
}

/// Value of `key` as shown to the user, with credentials masked
fn display_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "gemini_api_key" => config.gemini_api_key.as_deref().map(mask_api_key),
        "openai_api_key" => config.openai_api_key.as_deref().map(mask_api_key),
        "host" => config.host.clone(),
        "port" => config.port.map(|p| p.to_string()),
        "gemini_model" => config.gemini_model.clone(),
        "transcription_provider" => config.transcription_provider.clone(),
        "transcription_model" => config.transcription_model.clone(),
        "request_timeout" => config.request_timeout.clone(),
        "json_logs" => config.json_logs.map(|b| b.to_string()),
        _ => None,
    }
}

/// Mask API key for display (show first 4 and last 4 chars)
fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

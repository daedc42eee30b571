//! Terminal output for the CLI surface (config commands, startup failures)

use std::path::Path;

use colored::*;

use crate::domain::error::ConfigError;

/// Placeholder shown for unset config keys
pub const NOT_SET: &str = "(not set)";

/// Formats human-facing CLI output. Server logs go through `tracing` instead.
#[derive(Debug, Default)]
pub struct Presenter;

impl Presenter {
    pub fn new() -> Self {
        Self
    }

    /// Confirmation line on stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Report a configuration problem, pointing at the file when one is involved
    pub fn config_error(&self, error: &ConfigError, config_path: Option<&Path>) {
        self.error(&error.to_string());
        match error {
            ConfigError::ReadError(_) | ConfigError::ParseError(_) | ConfigError::WriteError(_) => {
                if let Some(path) = config_path {
                    eprintln!("  {} {}", "file:".dimmed(), path.display());
                }
            }
            ConfigError::MissingCredential { .. } => {
                eprintln!(
                    "  {} keys can also be placed in a .env file in the working directory",
                    "hint:".dimmed()
                );
            }
            _ => {}
        }
    }

    /// Plain value on stdout, suitable for scripting
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// One `config list` row; keys are padded to `width` and unset values dimmed
    pub fn key_value(&self, key: &str, value: Option<&str>, width: usize) {
        let value = match value {
            Some(v) => v.normal(),
            None => NOT_SET.dimmed(),
        };
        let key = format!("{:width$}", key, width = width);
        println!("{}  {}", key.cyan(), value);
    }
}

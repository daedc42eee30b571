//! Configuration file port

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Persistent layer of the config merge. Holds credentials, so implementations
/// must keep the stored file private to the current user.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read the stored layer; an absent file yields `AppConfig::empty()`.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Replace the stored layer.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Where the layer lives, for `config path` and error messages.
    fn path(&self) -> PathBuf;

    /// Write `AppConfig::defaults()`, refusing to clobber an existing file.
    async fn init(&self) -> Result<(), ConfigError>;
}

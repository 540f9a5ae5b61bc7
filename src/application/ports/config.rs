//! Configuration port interface

use async_trait::async_trait;
use std::path::Path;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for storing the CLI's default planning options.
///
/// The planning engine itself keeps no state; this port only backs the
/// `config` subcommand and the defaults merged under CLI flags.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the stored config. A missing file is not an error: it loads
    /// as an empty config with every field unset.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Persist `config`, creating the parent directory if needed.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Write a fresh config file populated with defaults.
    /// Fails if a file is already present.
    async fn init(&self) -> Result<(), ConfigError>;

    /// Where this store reads and writes.
    fn path(&self) -> &Path;

    /// Whether a config file is present.
    fn exists(&self) -> bool;
}

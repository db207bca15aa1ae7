//! Configuration loader

use rulebook_core::RuleError;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::RulebookConfig;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File not found
    #[error("config file not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error, including tier lists rejected while deserializing
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Validation error
    #[error("validation error: {0}")]
    Validation(String),

    /// A rule parameter set was rejected by its engine
    #[error("invalid rule parameters: {0}")]
    Rule(#[from] RuleError),
}

/// Loaded and validated configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: RulebookConfig,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create loader with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let mut loader = Self::load_str(&content)?;
        loader.config_path = Some(path.to_path_buf());

        tracing::info!(path = %path.display(), "configuration loaded");
        Ok(loader)
    }

    /// Load configuration from string
    pub fn load_str(content: &str) -> Result<Self, ConfigError> {
        let config: RulebookConfig = toml::from_str(content)?;
        Self::validate(&config)?;

        Ok(Self {
            config,
            config_path: None,
        })
    }

    /// Get current configuration
    pub fn get(&self) -> &RulebookConfig {
        &self.config
    }

    /// Source file, if loaded from disk
    pub fn path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Take ownership of the configuration
    pub fn into_config(self) -> RulebookConfig {
        self.config
    }

    /// Validate configuration
    fn validate(config: &RulebookConfig) -> Result<(), ConfigError> {
        // Fee tiers are checked by FeeSchedule's deserializer
        config.eligibility.validate()?;

        if config.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.level must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

//! Rulebook Config - Configuration management
//!
//! Loads the tunable rule parameters (fee tiers, eligibility thresholds,
//! search latency, log level) from TOML. Every section is optional.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::{CatalogConfig, LoggingConfig, RulebookConfig};

//! Configuration types

use rulebook_core::{EligibilityPolicy, FeeSchedule, DEFAULT_SEARCH_LATENCY};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RulebookConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Cumulative late-fee tiers
    #[serde(default)]
    pub late_fees: FeeSchedule,

    /// Exam, pass and rank thresholds
    #[serde(default)]
    pub eligibility: EligibilityPolicy,

    /// Catalog search simulation
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Catalog configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Simulated search latency in milliseconds
    #[serde(default = "default_search_latency_ms")]
    pub search_latency_ms: u64,
}

fn default_search_latency_ms() -> u64 {
    DEFAULT_SEARCH_LATENCY.as_millis() as u64
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            search_latency_ms: default_search_latency_ms(),
        }
    }
}

impl CatalogConfig {
    /// Search latency as a Duration
    pub fn search_latency(&self) -> Duration {
        Duration::from_millis(self.search_latency_ms)
    }
}

//! # Catalog Module
//!
//! Product record with a simulated slow search call.

use crate::error::{RuleError, RuleResult};
use crate::latency::Sleeper;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Latency of [`CatalogRecord::fetch_search_results`]
pub const DEFAULT_SEARCH_LATENCY: Duration = Duration::from_millis(1000);

/// A product listing.
///
/// Setters do not validate: a negative price is accepted as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    name: String,
    price: Decimal,
    in_stock: bool,
}

impl CatalogRecord {
    pub fn new(name: impl Into<String>, price: Decimal, in_stock: bool) -> Self {
        Self {
            name: name.into(),
            price,
            in_stock,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn set_price(&mut self, price: Decimal) {
        self.price = price;
    }

    pub fn is_in_stock(&self) -> bool {
        self.in_stock
    }

    pub fn set_in_stock(&mut self, in_stock: bool) {
        self.in_stock = in_stock;
    }

    /// Simulate a search call taking [`DEFAULT_SEARCH_LATENCY`].
    pub fn fetch_search_results<S: Sleeper + ?Sized>(&self, sleeper: &S) -> RuleResult<()> {
        self.fetch_search_results_within(sleeper, DEFAULT_SEARCH_LATENCY)
    }

    /// Simulate a search call taking `latency`. Returns nothing on success;
    /// an interrupted wait is reported as [`RuleError::OperationInterrupted`].
    pub fn fetch_search_results_within<S: Sleeper + ?Sized>(
        &self,
        sleeper: &S,
        latency: Duration,
    ) -> RuleResult<()> {
        debug!(product = %self.name, ?latency, "search started");
        sleeper.sleep(latency).map_err(|_| {
            warn!(product = %self.name, "search interrupted");
            RuleError::OperationInterrupted(format!("search for '{}'", self.name))
        })?;
        debug!(product = %self.name, "search finished");
        Ok(())
    }
}

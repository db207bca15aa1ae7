//! # Rulebook Core
//!
//! Validated business-rule engines. Each module is a standalone leaf:
//!
//! - [`ledger`]: account balance with validated deposit/withdraw
//! - [`fees`]: tiered late-fee schedule
//! - [`arithmetic`]: protected integer arithmetic
//! - [`catalog`]: product record with a simulated-latency search
//! - [`eligibility`]: threshold-based student classification
//!
//! No state is shared between engines. A [`Ledger`] or [`CatalogRecord`] has
//! no internal synchronization; callers sharing one across threads must
//! serialize access themselves.

pub mod arithmetic;
pub mod catalog;
pub mod eligibility;
pub mod error;
pub mod fees;
pub mod latency;
pub mod ledger;

pub use arithmetic::{ArithmeticService, DivisionError};
pub use catalog::{CatalogRecord, DEFAULT_SEARCH_LATENCY};
pub use eligibility::{EligibilityEvaluator, EligibilityPolicy, Rank, RankThresholds};
pub use error::{RuleError, RuleResult};
pub use fees::{FeeSchedule, FeeTier, LateFeeRecord};
pub use latency::{InterruptHandle, Interrupted, InterruptibleSleeper, Sleeper};
pub use ledger::Ledger;

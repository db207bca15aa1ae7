//! # Arithmetic Module
//!
//! Stateless integer calculator over `i64` operands. Results never wrap:
//! anything outside the `i64` range is reported instead.

use crate::error::{RuleError, RuleResult};
use thiserror::Error;
use tracing::warn;

/// Division failure.
///
/// Carries no cause on purpose: divide-by-zero and any other fault during
/// division are reported identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid input: division failed")]
pub struct DivisionError;

impl From<DivisionError> for RuleError {
    fn from(_: DivisionError) -> Self {
        RuleError::DivisionError
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticService;

impl ArithmeticService {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: i64, b: i64) -> RuleResult<i64> {
        a.checked_add(b)
            .ok_or(RuleError::Overflow { operation: "add" })
    }

    /// Non-negative difference: only defined when `a >= b`.
    pub fn subtract(&self, a: i64, b: i64) -> RuleResult<i64> {
        if a < b {
            warn!(a, b, "rejected subtraction with a < b");
            return Err(RuleError::invalid("Invalid input"));
        }
        a.checked_sub(b)
            .ok_or(RuleError::Overflow { operation: "subtract" })
    }

    /// Integer division truncating toward zero.
    pub fn divide(&self, a: i64, b: i64) -> Result<i64, DivisionError> {
        // checked_div covers both b == 0 and i64::MIN / -1
        a.checked_div(b).ok_or_else(|| {
            warn!(a, b, "division failed");
            DivisionError
        })
    }
}

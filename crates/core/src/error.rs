//! # Error Module
//!
//! Domain errors for the rule engines, built with thiserror.

use thiserror::Error;

/// Rule evaluation errors.
///
/// Every failure is synchronous and leaves the target value untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// Caller supplied a value outside the accepted domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Result does not fit in the operand width
    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },

    /// Division failed; the underlying fault is not kept
    #[error("Invalid input: division failed")]
    DivisionError,

    /// A simulated-latency wait was interrupted before completion
    #[error("Operation interrupted: {0}")]
    OperationInterrupted(String),
}

/// Result type alias with RuleError
pub type RuleResult<T> = Result<T, RuleError>;

impl RuleError {
    /// Shorthand for [`RuleError::InvalidArgument`]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RuleError::InvalidArgument(_))
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, RuleError::Overflow { .. })
    }

    pub fn is_division_error(&self) -> bool {
        matches!(self, RuleError::DivisionError)
    }

    pub fn is_interrupted(&self) -> bool {
        matches!(self, RuleError::OperationInterrupted(_))
    }
}

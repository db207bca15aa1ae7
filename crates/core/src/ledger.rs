//! # Ledger Module
//!
//! Account balance with validated deposit and withdraw. Balances use
//! `rust_decimal::Decimal` so arithmetic is exact.

use crate::error::{RuleError, RuleResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// An account balance that never goes negative.
///
/// Mutation only happens through `&mut self` methods, and a rejected call
/// leaves the balance exactly as it was.
///
/// # Examples
/// ```
/// use rulebook_core::Ledger;
/// use rust_decimal::Decimal;
///
/// let mut ledger = Ledger::new(Decimal::from(10_000)).unwrap();
/// ledger.deposit(Decimal::from(5_000)).unwrap();
/// assert_eq!(ledger.balance(), Decimal::from(15_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LedgerRecord")]
pub struct Ledger {
    balance: Decimal,
}

/// Unchecked wire form; converted through [`Ledger::new`] on deserialize.
#[derive(Deserialize)]
struct LedgerRecord {
    balance: Decimal,
}

impl TryFrom<LedgerRecord> for Ledger {
    type Error = RuleError;

    fn try_from(record: LedgerRecord) -> Result<Self, Self::Error> {
        Ledger::new(record.balance)
    }
}

impl Ledger {
    /// Open a ledger with a non-negative starting balance
    pub fn new(initial_balance: Decimal) -> RuleResult<Self> {
        if initial_balance < Decimal::ZERO {
            warn!(%initial_balance, "rejected negative initial balance");
            return Err(RuleError::invalid("Initial balance cannot be negative"));
        }
        Ok(Self {
            balance: initial_balance,
        })
    }

    /// Add a strictly positive amount
    pub fn deposit(&mut self, amount: Decimal) -> RuleResult<()> {
        if amount <= Decimal::ZERO {
            warn!(%amount, "rejected non-positive deposit");
            return Err(RuleError::invalid("Deposit amount must be positive"));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(RuleError::Overflow { operation: "deposit" })?;
        debug!(%amount, balance = %self.balance, "deposit applied");
        Ok(())
    }

    /// Remove a strictly positive amount no larger than the balance
    pub fn withdraw(&mut self, amount: Decimal) -> RuleResult<()> {
        if amount <= Decimal::ZERO || amount > self.balance {
            warn!(%amount, balance = %self.balance, "rejected withdrawal");
            return Err(RuleError::invalid("Invalid withdrawal amount"));
        }
        self.balance -= amount;
        debug!(%amount, balance = %self.balance, "withdrawal applied");
        Ok(())
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "balance {}", self.balance)
    }
}

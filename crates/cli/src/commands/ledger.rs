//! Ledger operations: open, deposit, withdraw

use anyhow::{bail, Result};
use rulebook_core::Ledger;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use std::str::FromStr;

use super::emit;

/// A single ledger operation given as `deposit=N` or `withdraw=N`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", content = "amount", rename_all = "lowercase")]
pub enum LedgerOp {
    Deposit(Decimal),
    Withdraw(Decimal),
}

impl FromStr for LedgerOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, amount) = s
            .split_once('=')
            .ok_or_else(|| format!("expected deposit=N or withdraw=N, got '{}'", s))?;
        let amount = Decimal::from_str(amount.trim())
            .map_err(|e| format!("invalid amount '{}': {}", amount, e))?;
        match kind.trim().to_lowercase().as_str() {
            "deposit" => Ok(LedgerOp::Deposit(amount)),
            "withdraw" => Ok(LedgerOp::Withdraw(amount)),
            other => Err(format!("unknown ledger operation '{}'", other)),
        }
    }
}

/// Apply `ops` in order, stopping at the first rejection
pub fn run(initial: Decimal, ops: &[LedgerOp], json: bool) -> Result<()> {
    let mut ledger = Ledger::new(initial)?;

    for (index, op) in ops.iter().enumerate() {
        let applied = match op {
            LedgerOp::Deposit(amount) => ledger.deposit(*amount),
            LedgerOp::Withdraw(amount) => ledger.withdraw(*amount),
        };
        if let Err(err) = applied {
            emit(
                json,
                json!({ "ok": false, "failed_op": index, "op": op, "error": err.to_string(), "balance": ledger.balance() }),
                &format!("❌ Operation #{} rejected: {}\n   Balance: {}", index + 1, err, ledger.balance()),
            );
            bail!("ledger operation #{} rejected", index + 1);
        }
    }

    emit(
        json,
        json!({ "ok": true, "applied": ops.len(), "balance": ledger.balance() }),
        &format!("✅ Applied {} operation(s)\n   Balance: {}", ops.len(), ledger.balance()),
    );
    Ok(())
}

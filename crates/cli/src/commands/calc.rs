//! Calculator commands

use anyhow::Result;
use rulebook_core::{ArithmeticService, RuleError};
use serde_json::json;

use super::emit;
use crate::CalcAction;

pub fn run(action: CalcAction, json: bool) -> Result<()> {
    let calc = ArithmeticService::new();

    let (symbol, a, b, result) = match action {
        CalcAction::Add { a, b } => ("+", a, b, calc.add(a, b)?),
        CalcAction::Sub { a, b } => ("-", a, b, calc.subtract(a, b)?),
        CalcAction::Div { a, b } => ("/", a, b, calc.divide(a, b).map_err(RuleError::from)?),
    };

    emit(
        json,
        json!({ "a": a, "b": b, "op": symbol, "result": result }),
        &format!("{} {} {} = {}", a, symbol, b, result),
    );
    Ok(())
}

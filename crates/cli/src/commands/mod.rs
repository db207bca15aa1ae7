//! Command handlers, one module per rule engine

pub mod calc;
pub mod catalog;
pub mod fees;
pub mod ledger;
pub mod student;

/// Print either the JSON value or the human-readable text
pub(crate) fn emit(json: bool, value: serde_json::Value, human: &str) {
    if json {
        println!("{}", value);
    } else {
        println!("{}", human);
    }
}

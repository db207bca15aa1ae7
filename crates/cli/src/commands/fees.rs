//! Late-fee lookup

use anyhow::Result;
use rulebook_core::{FeeSchedule, LateFeeRecord};
use serde_json::json;

use super::emit;

pub fn run(schedule: &FeeSchedule, title: &str, days: i32, json: bool) -> Result<()> {
    let record = LateFeeRecord::new(title, days);
    let fee = record.late_fee_with(schedule)?;

    emit(
        json,
        json!({ "title": record.title(), "days_late": record.days_late(), "fee": fee }),
        &format!("📚 {} - {} day(s) late\n   Fee: {}", record.title(), record.days_late(), fee),
    );
    Ok(())
}

//! # Fees Module
//!
//! Tiered late-fee schedule. Each tier charges its own per-day rate for the
//! days that fall inside it, and lower tiers are accumulated before higher
//! ones apply.
//!
//! The standard schedule:
//!
//! | Days late | Fee                        |
//! |-----------|----------------------------|
//! | 0         | 0                          |
//! | 1 - 5     | 2 × days                   |
//! | 6 - 10    | 10 + 3 × (days − 5)        |
//! | > 10      | 25 + 5 × (days − 10)       |

use crate::error::{RuleError, RuleResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One band of the schedule.
///
/// `up_to` is the inclusive last day billed at `rate`; `None` means the band
/// is open-ended and must be the final one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeTier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up_to: Option<u32>,
    pub rate: Decimal,
}

impl FeeTier {
    pub fn bounded(up_to: u32, rate: Decimal) -> Self {
        Self {
            up_to: Some(up_to),
            rate,
        }
    }

    pub fn open(rate: Decimal) -> Self {
        Self { up_to: None, rate }
    }
}

/// Validated, ordered list of cumulative fee tiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FeeTier>", into = "Vec<FeeTier>")]
pub struct FeeSchedule {
    tiers: Vec<FeeTier>,
}

impl FeeSchedule {
    /// Build a schedule, checking that bounds strictly increase, rates are
    /// non-negative and only the last tier is open-ended.
    pub fn new(tiers: Vec<FeeTier>) -> RuleResult<Self> {
        let Some(last) = tiers.last() else {
            return Err(RuleError::invalid("Fee schedule needs at least one tier"));
        };
        if last.up_to.is_some() {
            return Err(RuleError::invalid("Last fee tier must be open-ended"));
        }

        let mut previous = 0u32;
        for (index, tier) in tiers.iter().enumerate() {
            if tier.rate < Decimal::ZERO {
                return Err(RuleError::invalid(format!(
                    "Fee tier {} has a negative rate: {}",
                    index, tier.rate
                )));
            }
            match tier.up_to {
                Some(bound) if bound <= previous => {
                    return Err(RuleError::invalid(format!(
                        "Fee tier {} bound {} must exceed {}",
                        index, bound, previous
                    )));
                }
                Some(bound) => previous = bound,
                None if index + 1 != tiers.len() => {
                    return Err(RuleError::invalid(format!(
                        "Fee tier {} is open-ended but is not the last tier",
                        index
                    )));
                }
                None => {}
            }
        }

        Ok(Self { tiers })
    }

    /// 2/day for days 1-5, 3/day for days 6-10, 5/day after that
    pub fn standard() -> Self {
        Self {
            tiers: vec![
                FeeTier::bounded(5, Decimal::from(2)),
                FeeTier::bounded(10, Decimal::from(3)),
                FeeTier::open(Decimal::from(5)),
            ],
        }
    }

    pub fn tiers(&self) -> &[FeeTier] {
        &self.tiers
    }

    /// Fee owed for `days_late` days. Negative input is rejected, and a fee
    /// beyond the `Decimal` range is reported as overflow.
    pub fn calculate_late_fee(&self, days_late: i32) -> RuleResult<Decimal> {
        if days_late < 0 {
            warn!(days_late, "rejected negative days late");
            return Err(RuleError::invalid("Days late cannot be negative"));
        }
        let days = days_late as u32;

        let mut fee = Decimal::ZERO;
        let mut billed = 0u32;
        for tier in &self.tiers {
            if days <= billed {
                break;
            }
            let upper = tier.up_to.map_or(days, |bound| bound.min(days));
            fee = Decimal::from(upper - billed)
                .checked_mul(tier.rate)
                .and_then(|charge| fee.checked_add(charge))
                .ok_or(RuleError::Overflow {
                    operation: "late_fee",
                })?;
            billed = upper;
        }

        debug!(days_late, %fee, "late fee computed");
        Ok(fee)
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<FeeTier>> for FeeSchedule {
    type Error = RuleError;

    fn try_from(tiers: Vec<FeeTier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<FeeSchedule> for Vec<FeeTier> {
    fn from(schedule: FeeSchedule) -> Self {
        schedule.tiers
    }
}

/// A borrowed item and how many days it is overdue.
///
/// `days_late` may be set negative; the fee calculation rejects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateFeeRecord {
    title: String,
    days_late: i32,
}

impl LateFeeRecord {
    pub fn new(title: impl Into<String>, days_late: i32) -> Self {
        Self {
            title: title.into(),
            days_late,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn days_late(&self) -> i32 {
        self.days_late
    }

    pub fn set_days_late(&mut self, days_late: i32) {
        self.days_late = days_late;
    }

    /// Fee under the standard schedule
    pub fn calculate_late_fee(&self) -> RuleResult<Decimal> {
        self.late_fee_with(&FeeSchedule::standard())
    }

    pub fn late_fee_with(&self, schedule: &FeeSchedule) -> RuleResult<Decimal> {
        schedule.calculate_late_fee(self.days_late)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_tier_boundaries() {
        let schedule = FeeSchedule::standard();
        let cases = [
            (0, dec!(0)),
            (1, dec!(2)),
            (5, dec!(10)),
            (6, dec!(13)),
            (8, dec!(19)),
            (10, dec!(25)),
            (11, dec!(30)),
            (15, dec!(50)),
        ];
        for (days, expected) in cases {
            assert_eq!(
                schedule.calculate_late_fee(days).unwrap(),
                expected,
                "days = {}",
                days
            );
        }
    }

    #[test]
    fn test_negative_days_rejected() {
        let err = FeeSchedule::standard().calculate_late_fee(-1).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_large_days_stay_exact() {
        let fee = FeeSchedule::standard().calculate_late_fee(i32::MAX).unwrap();
        let expected = dec!(25) + Decimal::from(i32::MAX as i64 - 10) * dec!(5);
        assert_eq!(fee, expected);
    }

    #[test]
    fn test_oversized_rate_reports_overflow() {
        let schedule = FeeSchedule::new(vec![FeeTier::open(Decimal::MAX)]).unwrap();
        assert_eq!(schedule.calculate_late_fee(1).unwrap(), Decimal::MAX);
        assert!(schedule.calculate_late_fee(2).unwrap_err().is_overflow());

        let schedule = FeeSchedule::new(vec![
            FeeTier::bounded(1, Decimal::MAX),
            FeeTier::open(dec!(1)),
        ])
        .unwrap();
        assert!(schedule.calculate_late_fee(2).unwrap_err().is_overflow());
    }

    #[test]
    fn test_custom_schedule() {
        let schedule = FeeSchedule::new(vec![
            FeeTier::bounded(3, dec!(0.50)),
            FeeTier::open(dec!(1.25)),
        ])
        .unwrap();
        assert_eq!(schedule.calculate_late_fee(3).unwrap(), dec!(1.50));
        assert_eq!(schedule.calculate_late_fee(5).unwrap(), dec!(4.00));
    }

    #[test]
    fn test_single_open_tier() {
        let schedule = FeeSchedule::new(vec![FeeTier::open(dec!(1))]).unwrap();
        assert_eq!(schedule.calculate_late_fee(7).unwrap(), dec!(7));
    }

    #[test]
    fn test_invalid_schedules() {
        assert!(FeeSchedule::new(vec![]).is_err());
        assert!(FeeSchedule::new(vec![FeeTier::bounded(5, dec!(1))]).is_err());
        assert!(FeeSchedule::new(vec![
            FeeTier::bounded(5, dec!(1)),
            FeeTier::bounded(5, dec!(2)),
            FeeTier::open(dec!(3)),
        ])
        .is_err());
        assert!(FeeSchedule::new(vec![
            FeeTier::open(dec!(1)),
            FeeTier::open(dec!(2)),
        ])
        .is_err());
        assert!(FeeSchedule::new(vec![FeeTier::bounded(0, dec!(1)), FeeTier::open(dec!(1))]).is_err());
        assert!(FeeSchedule::new(vec![FeeTier::open(dec!(-1))]).is_err());
    }

    #[test]
    fn test_record_accessors() {
        let mut record = LateFeeRecord::new("Atomic Habits", 5);
        assert_eq!(record.title(), "Atomic Habits");
        assert_eq!(record.calculate_late_fee().unwrap(), dec!(10));

        record.set_days_late(-3);
        assert!(record.calculate_late_fee().is_err());

        record.set_title("Deep Work");
        assert_eq!(record.title(), "Deep Work");
    }

    #[test]
    fn test_schedule_deserialize_validates() {
        let json = r#"[{"up_to":5,"rate":"2"},{"rate":"4"}]"#;
        let schedule: FeeSchedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.calculate_late_fee(6).unwrap(), dec!(14));

        let bad = r#"[{"up_to":5,"rate":"2"}]"#;
        assert!(serde_json::from_str::<FeeSchedule>(bad).is_err());
    }
}

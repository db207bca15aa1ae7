//! # Eligibility Module
//!
//! Threshold-based student classification: exam eligibility, pass/fail and
//! CGPA rank. All checks are pure; the evaluator only holds its thresholds.

use crate::error::{RuleError, RuleResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Rank classification, highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "Topper")]
    Topper,
    #[serde(rename = "First Class")]
    FirstClass,
    #[serde(rename = "Second Class")]
    SecondClass,
    #[serde(rename = "fail")]
    Fail,
}

impl Rank {
    /// Fixed display label
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Topper => "Topper",
            Rank::FirstClass => "First Class",
            Rank::SecondClass => "Second Class",
            Rank::Fail => "fail",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Lower CGPA bound (inclusive) of each rank above `fail`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankThresholds {
    pub topper: f64,
    pub first_class: f64,
    pub second_class: f64,
}

impl Default for RankThresholds {
    fn default() -> Self {
        Self {
            topper: 9.0,
            first_class: 7.5,
            second_class: 6.0,
        }
    }
}

/// Thresholds used by [`EligibilityEvaluator`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EligibilityPolicy {
    /// Attendance percentage that alone grants exam eligibility
    pub min_attendance_percentage: i32,
    /// Lecture count that alone grants exam eligibility
    pub min_lectures_attended: i32,
    pub pass_mark: i32,
    pub ranks: RankThresholds,
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            min_attendance_percentage: 75,
            min_lectures_attended: 60,
            pass_mark: 50,
            ranks: RankThresholds::default(),
        }
    }
}

impl EligibilityPolicy {
    /// Rank cut-offs must be finite and strictly descending.
    pub fn validate(&self) -> RuleResult<()> {
        let RankThresholds {
            topper,
            first_class,
            second_class,
        } = self.ranks;
        if ![topper, first_class, second_class].iter().all(|t| t.is_finite()) {
            return Err(RuleError::invalid("Rank thresholds must be finite"));
        }
        if !(topper > first_class && first_class > second_class) {
            return Err(RuleError::invalid(format!(
                "Rank thresholds must be strictly descending: {} > {} > {}",
                topper, first_class, second_class
            )));
        }
        Ok(())
    }
}

/// Stateless student rule set.
///
/// Inputs are not range-checked; negative or out-of-range values are simply
/// compared against the thresholds.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEvaluator {
    policy: EligibilityPolicy,
}

impl EligibilityEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: EligibilityPolicy) -> RuleResult<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &EligibilityPolicy {
        &self.policy
    }

    /// Eligible when either the attendance or the lecture threshold is met
    pub fn is_eligible_for_exam(
        &self,
        attendance_percentage: i32,
        total_lectures_attended: i32,
    ) -> bool {
        let eligible = attendance_percentage >= self.policy.min_attendance_percentage
            || total_lectures_attended >= self.policy.min_lectures_attended;
        debug!(
            attendance_percentage,
            total_lectures_attended, eligible, "exam eligibility evaluated"
        );
        eligible
    }

    pub fn has_passed(&self, marks: i32) -> bool {
        marks >= self.policy.pass_mark
    }

    /// Highest rank whose lower bound `cgpa` reaches. NaN ranks as `fail`.
    pub fn get_rank(&self, cgpa: f64) -> Rank {
        let ranks = &self.policy.ranks;
        if cgpa >= ranks.topper {
            Rank::Topper
        } else if cgpa >= ranks.first_class {
            Rank::FirstClass
        } else if cgpa >= ranks.second_class {
            Rank::SecondClass
        } else {
            Rank::Fail
        }
    }
}

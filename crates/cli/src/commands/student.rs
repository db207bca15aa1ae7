//! Student rule commands

use anyhow::Result;
use rulebook_core::{EligibilityEvaluator, EligibilityPolicy};
use serde_json::json;

use super::emit;
use crate::StudentAction;

pub fn run(policy: &EligibilityPolicy, action: StudentAction, json: bool) -> Result<()> {
    let evaluator = EligibilityEvaluator::with_policy(*policy)?;

    match action {
        StudentAction::Eligible {
            attendance,
            lectures,
        } => {
            let eligible = evaluator.is_eligible_for_exam(attendance, lectures);
            emit(
                json,
                json!({ "attendance": attendance, "lectures": lectures, "eligible": eligible }),
                &format!(
                    "Attendance {}%, {} lecture(s): {}",
                    attendance,
                    lectures,
                    if eligible { "eligible" } else { "not eligible" }
                ),
            );
        }
        StudentAction::Passed { marks } => {
            let passed = evaluator.has_passed(marks);
            emit(
                json,
                json!({ "marks": marks, "passed": passed }),
                &format!("Marks {}: {}", marks, if passed { "passed" } else { "failed" }),
            );
        }
        StudentAction::Rank { cgpa } => {
            let rank = evaluator.get_rank(cgpa);
            emit(
                json,
                json!({ "cgpa": cgpa, "rank": rank }),
                &format!("CGPA {}: {}", cgpa, rank),
            );
        }
    }
    Ok(())
}

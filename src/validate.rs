//! Startup data-integrity validation
//!
//! Partitions the full roster three independent ways and checks that each
//! partition's bucket counts sum exactly to the population. A miss means the
//! input file is corrupt (for example an unrecognized status label) and the
//! process must not run any test.

use crate::conditions::{
    self, is_esl, is_female, is_gifted, is_male, is_normal, is_remedial, scored_400_to_499,
    scored_above_499, scored_below_400, Condition,
};
use crate::error::DataIntegrityError;
use crate::student::Student;

fn count(students: &[&Student], condition: Condition) -> usize {
    conditions::filter(students, &[condition]).len()
}

fn check_partition(
    students: &[&Student],
    partition: &'static str,
    buckets: &[Condition],
) -> Result<(), DataIntegrityError> {
    let counted: usize = buckets.iter().map(|&b| count(students, b)).sum();
    if counted != students.len() {
        return Err(DataIntegrityError {
            partition,
            counted,
            total: students.len(),
        });
    }
    Ok(())
}

/// Check that status, sex, and score-bucket partitions each exhaust the roster
pub fn validate(students: &[&Student]) -> Result<(), DataIntegrityError> {
    check_partition(
        students,
        "status",
        &[is_esl, is_remedial, is_gifted, is_normal],
    )?;
    check_partition(students, "sex", &[is_male, is_female])?;
    check_partition(
        students,
        "score bucket",
        &[scored_below_400, scored_400_to_499, scored_above_499],
    )?;
    tracing::debug!(total = students.len(), "data integrity checks passed");
    Ok(())
}

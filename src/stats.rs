//! Descriptive statistics over a selected numeric field
//!
//! Only the two statistics the hypothesis tests need: arithmetic mean and
//! Bessel-corrected sample standard deviation.

use crate::error::DomainError;
use crate::student::Student;

/// Arithmetic mean of the selected field
///
/// Returns `DomainError::EmptySample` for an empty collection; callers must
/// guarantee non-empty input.
pub fn mean<F>(students: &[&Student], field: F) -> Result<f64, DomainError>
where
    F: Fn(&Student) -> f64,
{
    if students.is_empty() {
        return Err(DomainError::EmptySample);
    }
    let sum: f64 = students.iter().map(|s| field(s)).sum();
    Ok(sum / students.len() as f64)
}

/// Sample standard deviation with the Bessel-corrected (n-1) denominator
///
/// Returns `DomainError::SingleObservation` when fewer than 2 records are
/// given.
pub fn sample_std_dev<F>(students: &[&Student], field: F) -> Result<f64, DomainError>
where
    F: Fn(&Student) -> f64,
{
    let n = students.len();
    if n < 2 {
        return Err(DomainError::SingleObservation { actual: n });
    }
    let mean = mean(students, &field)?;
    let sum_diff_squares: f64 = students.iter().map(|s| (field(s) - mean).powi(2)).sum();
    Ok((sum_diff_squares / (n - 1) as f64).sqrt())
}

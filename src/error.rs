//! Error types shared across the statistics engine

use thiserror::Error;

/// Computation precondition violations
///
/// These indicate programmer misuse (e.g. asking for a larger sample than
/// the population provides). The test engine's min-N guardrails keep the
/// normal insufficient-sample path out of this taxonomy entirely: that path
/// is a reported outcome, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Cannot sample {requested} records from a population of {available}")]
    SampleLargerThanPopulation { requested: usize, available: usize },

    #[error("Mean is undefined over an empty collection")]
    EmptySample,

    #[error("Sample standard deviation requires at least 2 records, got {actual}")]
    SingleObservation { actual: usize },
}

/// Fatal data-integrity failure raised by the startup validator
///
/// A partition of the full record set failed to exhaust the population,
/// which means the input dataset is corrupt or malformed. There is no
/// recovery path: the driver propagates this out of `main`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Data integrity check failed: {partition} partition covers {counted} of {total} records")]
pub struct DataIntegrityError {
    /// Which partition failed (status, sex, or score bucket)
    pub partition: &'static str,
    /// Sum of the partition's bucket counts
    pub counted: usize,
    /// Total record count
    pub total: usize,
}

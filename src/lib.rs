//! Solstat - hypothesis testing over student SOL score datasets
//!
//! This library loads student records from a delimited file, filters them by
//! categorical predicates, draws seeded random samples, and runs one-sample
//! proportion z-tests and mean t-tests against stated population parameters.

pub mod cli;
pub mod conditions;
pub mod dedup;
pub mod error;
pub mod hypothesis;
pub mod report;
pub mod sampler;
pub mod stats;
pub mod student;
pub mod validate;

//! CLI argument parsing for solstat

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for test reports
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "solstat")]
#[command(version)]
#[command(about = "Hypothesis testing over student SOL score datasets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the full hypothesis-test report sequence over a score file
    Report {
        /// CSV file of student records (id,sex,teacher,status,score)
        file: PathBuf,

        /// Random seed; a fixed seed reproduces identical samples and reports
        #[arg(long = "seed", value_name = "SEED", default_value = "0")]
        seed: u64,

        /// Significance threshold applied to every test in the sequence
        #[arg(long = "alpha", value_name = "ALPHA", default_value = "0.01")]
        alpha: f64,

        /// Output format (text or json)
        #[arg(long = "format", value_enum, default_value = "text")]
        format: OutputFormat,

        /// Enable debug logging to stderr
        #[arg(long = "debug")]
        debug: bool,
    },
    /// Deduplicate a companion CSV by id and report missing ids
    Dedup {
        /// CSV file keyed by the same id field; rewritten in place
        file: PathBuf,

        /// Upper bound of the known contiguous id range [1, MAX]
        #[arg(long = "max-id", value_name = "MAX", default_value = "997")]
        max_id: u32,

        /// Enable debug logging to stderr
        #[arg(long = "debug")]
        debug: bool,
    },
}

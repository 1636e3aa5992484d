use anyhow::Result;
use clap::Parser;
use solstat::cli::{Cli, Command, OutputFormat};
use solstat::conditions::{
    all_students, is_esl, is_female, is_gifted, is_male, is_remedial, scored_400_to_499,
    scored_above_499, scored_below_400, Condition,
};
use solstat::hypothesis::{self, TestConfig};
use solstat::sampler::Sampler;
use solstat::student::Student;
use solstat::{dedup, report, student, validate};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// One entry in the fixed report sequence
enum NamedTest {
    /// Population-mean t-test against a stated state average
    Mean {
        title: &'static str,
        population_mean: f64,
        conditions: &'static [Condition],
    },
    /// Population-proportion z-test against a stated statewide proportion
    Proportion {
        title: &'static str,
        population_proportion: f64,
        conditions: &'static [Condition],
    },
}

/// The fixed sequence of test invocations, with the statewide parameters
/// they are tested against.
fn report_sequence() -> Vec<NamedTest> {
    vec![
        // The overall state average math SOL score is 467.78.
        NamedTest::Mean {
            title: "Overall Average Math Score",
            population_mean: 467.78,
            conditions: &[all_students],
        },
        // The state average for ESL students is 404.56.
        NamedTest::Mean {
            title: "Average for ESL Students",
            population_mean: 404.56,
            conditions: &[is_esl],
        },
        // The state average for remedial students is 419.31.
        NamedTest::Mean {
            title: "Average for Remedial Students",
            population_mean: 419.31,
            conditions: &[is_remedial],
        },
        // The state average for gifted students is 562.39.
        NamedTest::Mean {
            title: "Average for Gifted Students",
            population_mean: 562.39,
            conditions: &[is_gifted],
        },
        // The proportion of all students statewide who score 399 or below is 8.47%.
        NamedTest::Proportion {
            title: "Proportion less than 400",
            population_proportion: 0.0847,
            conditions: &[scored_below_400],
        },
        // The proportion of all students statewide who score between 400 - 499 is 61.05%.
        NamedTest::Proportion {
            title: "Proportion in range [400, 500)",
            population_proportion: 0.6105,
            conditions: &[scored_400_to_499],
        },
        // The proportion of all students statewide who score between 500 - 600 is 30.48%.
        NamedTest::Proportion {
            title: "Proportion greater than or equal to 500",
            population_proportion: 0.3048,
            conditions: &[scored_above_499],
        },
        // The state average score for males is 470.56.
        NamedTest::Mean {
            title: "Average Male SOL Score",
            population_mean: 470.56,
            conditions: &[is_male],
        },
        // The state average score for females is 465.22.
        NamedTest::Mean {
            title: "Average Female SOL Score",
            population_mean: 465.22,
            conditions: &[is_female],
        },
    ]
}

/// Load, validate, and run the full report sequence
fn run_reports(file: &Path, seed: u64, alpha: f64, format: OutputFormat) -> Result<()> {
    let students = student::load_students(file)?;
    let roster: Vec<&Student> = students.iter().collect();
    validate::validate(&roster)?;

    let mut sampler = Sampler::seeded(seed);
    let mut json_reports = Vec::new();

    for test in report_sequence() {
        match test {
            NamedTest::Mean {
                title,
                population_mean,
                conditions,
            } => {
                let cfg = TestConfig::mean().with_alpha(alpha).with_title(title);
                let outcome =
                    hypothesis::mean_test(population_mean, &roster, conditions, &cfg, &mut sampler)?;
                match format {
                    OutputFormat::Text => {
                        println!("{}", report::render_mean_text(cfg.title.as_deref(), &outcome));
                        println!("\n\n");
                    }
                    OutputFormat::Json => {
                        json_reports.push(report::mean_json(cfg.title.as_deref(), &outcome)?);
                    }
                }
            }
            NamedTest::Proportion {
                title,
                population_proportion,
                conditions,
            } => {
                let cfg = TestConfig::proportion().with_alpha(alpha).with_title(title);
                let outcome = hypothesis::proportion_test(
                    population_proportion,
                    &roster,
                    conditions,
                    &cfg,
                    &mut sampler,
                )?;
                match format {
                    OutputFormat::Text => {
                        println!(
                            "{}",
                            report::render_proportion_text(cfg.title.as_deref(), &outcome)
                        );
                        println!("\n\n");
                    }
                    OutputFormat::Json => {
                        json_reports.push(report::proportion_json(cfg.title.as_deref(), &outcome)?);
                    }
                }
            }
        }
    }

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&json_reports)?);
    }
    Ok(())
}

/// Run the companion-file dedup pass and print its summary
fn run_dedup(file: &Path, max_id: u32) -> Result<()> {
    let summary = dedup::dedup_file(file, max_id)?;
    println!(
        "Kept {} rows, removed {} duplicates.",
        summary.kept, summary.removed
    );
    println!("Missing data on IDs:");
    println!("{:?}", summary.missing_ids);
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    match args.command {
        Command::Report {
            file,
            seed,
            alpha,
            format,
            debug,
        } => {
            init_tracing(debug);
            if alpha <= 0.0 || alpha >= 1.0 {
                anyhow::bail!("Invalid value for --alpha: {} (must be in (0, 1))", alpha);
            }
            run_reports(&file, seed, alpha, format)?;
        }
        Command::Dedup {
            file,
            max_id,
            debug,
        } => {
            init_tracing(debug);
            run_dedup(&file, max_id)?;
        }
    }

    Ok(())
}

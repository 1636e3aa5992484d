//! Report rendering for hypothesis-test outcomes
//!
//! Builds the per-test plain-text report (and a JSON value for
//! `--format json`) from a test outcome; computation stays in `hypothesis`
//! so the text layout is unit-testable as strings.

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Write;

use crate::hypothesis::{MeanOutcome, ProportionOutcome};

fn push_title(out: &mut String, title: Option<&str>) {
    if let Some(title) = title {
        let _ = writeln!(out, "{title}");
        let _ = writeln!(out, "{}", "-".repeat(title.len()));
    }
}

fn push_conclusion(out: &mut String, reject_null: bool) {
    if reject_null {
        out.push_str(
            "Because the p-value is less than alpha, we reject the null hypothesis \
             in favor of the alternative hypothesis.",
        );
    } else {
        out.push_str("Because the p-value is not less than alpha, we fail to reject the null hypothesis.");
    }
}

/// Render a proportion z-test outcome as a plain-text report
pub fn render_proportion_text(title: Option<&str>, outcome: &ProportionOutcome) -> String {
    let mut out = String::new();
    push_title(&mut out, title);
    match outcome {
        ProportionOutcome::InsufficientSample {
            matched,
            sample_size,
        } => {
            let _ = write!(
                out,
                "Insufficient sample size. Only {matched} of {sample_size} met condition."
            );
        }
        ProportionOutcome::Completed(report) => {
            let _ = writeln!(out, "IDs of sampled students: {:?}", report.sampled_ids);
            let _ = writeln!(out, "Null Hypothesis: p = \u{3c0}");
            let _ = writeln!(out, "Alternative Hypothesis: p \u{2260} \u{3c0}");
            let _ = writeln!(out, "Sample size = {}", report.sample_size);
            let _ = writeln!(out, "x = {}", report.matched);
            let _ = writeln!(out, "\u{3c0} = {}", report.population_proportion);
            let _ = writeln!(out, "p = {}", report.sample_proportion);
            let _ = writeln!(out, "Z score = {}", report.z_score);
            let _ = writeln!(out, "P Value = {}", report.p_value);
            let _ = writeln!(out, "Alpha = {}", report.alpha);
            push_conclusion(&mut out, report.reject_null);
        }
    }
    out
}

/// Render a mean t-test outcome as a plain-text report
pub fn render_mean_text(title: Option<&str>, outcome: &MeanOutcome) -> String {
    let mut out = String::new();
    push_title(&mut out, title);
    match outcome {
        MeanOutcome::InsufficientSample { n } => {
            let _ = write!(out, "Insufficient sample size ({n}).");
        }
        MeanOutcome::Completed(report) => {
            let _ = writeln!(out, "IDs of sampled students: {:?}", report.sampled_ids);
            let _ = writeln!(out, "Null Hypothesis: x\u{304} = \u{3bc}");
            let _ = writeln!(out, "Alternative Hypothesis: x\u{304} \u{2260} \u{3bc}");
            let _ = writeln!(out, "n = {}", report.n);
            let _ = writeln!(out, "\u{3bc} = {}", report.population_mean);
            let _ = writeln!(out, "x\u{304} = {}", report.sample_mean);
            let _ = writeln!(out, "Sx = {}", report.sample_std_dev);
            match report.t_statistic {
                Some(t) => {
                    let _ = writeln!(out, "T statistic = {t}");
                }
                None => {
                    let _ = writeln!(out, "T statistic = undefined (zero sample variance)");
                }
            }
            let _ = writeln!(out, "P Value = {}", report.p_value);
            let _ = writeln!(out, "Alpha = {}", report.alpha);
            push_conclusion(&mut out, report.reject_null);
        }
    }
    out
}

#[derive(Serialize)]
struct TitledOutcome<'a, T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    test: &'static str,
    #[serde(flatten)]
    result: &'a T,
}

/// Build the JSON value for a proportion z-test outcome
pub fn proportion_json(title: Option<&str>, outcome: &ProportionOutcome) -> Result<Value> {
    Ok(serde_json::to_value(TitledOutcome {
        title,
        test: "population_proportion",
        result: outcome,
    })?)
}

/// Build the JSON value for a mean t-test outcome
pub fn mean_json(title: Option<&str>, outcome: &MeanOutcome) -> Result<Value> {
    Ok(serde_json::to_value(TitledOutcome {
        title,
        test: "population_mean",
        result: outcome,
    })?)
}

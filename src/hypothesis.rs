//! Hypothesis test engine
//!
//! Two one-sample procedures against a stated population parameter:
//!
//! - **Proportion z-test**: samples from the full roster, counts how many
//!   sampled students meet the conditions, and tests that proportion against
//!   a population proportion π using the standard normal distribution.
//! - **Mean t-test**: filters the roster by the conditions first, samples
//!   from the matching students, and tests the sample mean against a
//!   population mean μ using Student's t distribution with n-1 degrees of
//!   freedom.
//!
//! Both are two-tailed and decide reject/fail-to-reject at a significance
//! threshold alpha. Each applies a minimum-count guardrail before computing
//! anything; a guardrail miss is a normal, reported outcome rather than an
//! error.

use anyhow::{Context, Result};
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

use crate::conditions::{self, Condition};
use crate::sampler::Sampler;
use crate::stats;
use crate::student::Student;

/// Per-invocation test configuration
///
/// The min-N defaults differ between the two tests (10 for the proportion
/// test, 30 for the mean test); the asymmetry is deliberate per-test
/// calibration and is kept as-is.
#[derive(Debug, Clone)]
pub struct TestConfig {
    /// Number of records to draw
    pub sample_size: usize,
    /// Significance threshold for the reject decision
    pub alpha: f64,
    /// Minimum category count below which the test aborts as insufficient
    pub min_n: usize,
    /// Optional report title
    pub title: Option<String>,
}

impl TestConfig {
    /// Defaults for the population-proportion test
    pub fn proportion() -> Self {
        Self {
            sample_size: 30,
            alpha: 0.01,
            min_n: 10,
            title: None,
        }
    }

    /// Defaults for the population-mean test
    pub fn mean() -> Self {
        Self {
            sample_size: 30,
            alpha: 0.01,
            min_n: 30,
            title: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

/// Outcome of a proportion z-test invocation
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProportionOutcome {
    Completed(ProportionReport),
    /// Too few (or too many) sampled students met the conditions for the
    /// normal approximation to hold; no statistic was computed.
    InsufficientSample { matched: usize, sample_size: usize },
}

/// Computed results of a proportion z-test
#[derive(Debug, Clone, Serialize)]
pub struct ProportionReport {
    /// IDs of the sampled students that met the conditions
    pub sampled_ids: Vec<u32>,
    pub sample_size: usize,
    /// Count of sampled students meeting the conditions (x)
    pub matched: usize,
    /// Population proportion π asserted by the null hypothesis
    pub population_proportion: f64,
    /// Observed sample proportion x/n
    pub sample_proportion: f64,
    pub z_score: f64,
    pub p_value: f64,
    pub alpha: f64,
    /// True iff p < alpha
    pub reject_null: bool,
}

/// Outcome of a mean t-test invocation
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MeanOutcome {
    Completed(MeanReport),
    InsufficientSample { n: usize },
}

/// Computed results of a mean t-test
#[derive(Debug, Clone, Serialize)]
pub struct MeanReport {
    /// IDs of the sampled students
    pub sampled_ids: Vec<u32>,
    pub n: usize,
    /// Population mean μ asserted by the null hypothesis
    pub population_mean: f64,
    pub sample_mean: f64,
    pub sample_std_dev: f64,
    /// None when the sample standard deviation is zero, which leaves the
    /// statistic undefined
    pub t_statistic: Option<f64>,
    pub p_value: f64,
    pub alpha: f64,
    pub reject_null: bool,
}

/// One-sample proportion z-test
///
/// H0: p = π, H1: p ≠ π. The sample is drawn from the FULL roster and the
/// conditions are evaluated on the sampled records.
pub fn proportion_test(
    population_proportion: f64,
    students: &[&Student],
    test_conditions: &[Condition],
    cfg: &TestConfig,
    sampler: &mut Sampler,
) -> Result<ProportionOutcome> {
    let sample = sampler
        .sample(students, cfg.sample_size)
        .context("Drawing proportion-test sample")?;
    let of_interest = conditions::filter(&sample, test_conditions);
    let matched = of_interest.len();

    if matched < cfg.min_n || cfg.sample_size - matched < cfg.min_n {
        tracing::debug!(matched, sample_size = cfg.sample_size, "guardrail abort");
        return Ok(ProportionOutcome::InsufficientSample {
            matched,
            sample_size: cfg.sample_size,
        });
    }

    let sample_proportion = matched as f64 / cfg.sample_size as f64;
    let standard_error =
        (population_proportion * (1.0 - population_proportion) / cfg.sample_size as f64).sqrt();
    let z_score = (sample_proportion - population_proportion) / standard_error;

    let normal = Normal::new(0.0, 1.0).context("Constructing standard normal distribution")?;
    let p_value = 2.0 * (1.0 - normal.cdf(z_score.abs()));

    Ok(ProportionOutcome::Completed(ProportionReport {
        sampled_ids: of_interest.iter().map(|s| s.id).collect(),
        sample_size: cfg.sample_size,
        matched,
        population_proportion,
        sample_proportion,
        z_score,
        p_value,
        alpha: cfg.alpha,
        reject_null: p_value < cfg.alpha,
    }))
}

/// One-sample mean t-test
///
/// H0: x̄ = μ, H1: x̄ ≠ μ. The roster is filtered by the conditions first and
/// the sample is drawn from the matching students; a `DomainError` surfaces
/// through the returned `Result` when fewer than `sample_size` match.
pub fn mean_test(
    population_mean: f64,
    students: &[&Student],
    test_conditions: &[Condition],
    cfg: &TestConfig,
    sampler: &mut Sampler,
) -> Result<MeanOutcome> {
    let eligible = conditions::filter(students, test_conditions);
    let sample = sampler
        .sample(&eligible, cfg.sample_size)
        .context("Drawing mean-test sample")?;
    let n = sample.len();

    // n always equals sample_size here; the guardrail is kept anyway as
    // deliberate per-test calibration.
    if n < cfg.min_n {
        tracing::debug!(n, min_n = cfg.min_n, "guardrail abort");
        return Ok(MeanOutcome::InsufficientSample { n });
    }

    let sample_mean = stats::mean(&sample, Student::sol_score)?;
    let sample_std_dev = stats::sample_std_dev(&sample, Student::sol_score)?;

    if sample_std_dev == 0.0 {
        // Zero variance leaves T undefined; report it as such instead of
        // dividing by zero. The sample carries no evidence against H0.
        return Ok(MeanOutcome::Completed(MeanReport {
            sampled_ids: sample.iter().map(|s| s.id).collect(),
            n,
            population_mean,
            sample_mean,
            sample_std_dev,
            t_statistic: None,
            p_value: 1.0,
            alpha: cfg.alpha,
            reject_null: false,
        }));
    }

    let standard_error = sample_std_dev / (n as f64).sqrt();
    let t_statistic = (sample_mean - population_mean) / standard_error;

    let t_dist = StudentsT::new(0.0, 1.0, (n - 1) as f64)
        .context("Constructing Student's t distribution")?;
    let p_value = 2.0 * (1.0 - t_dist.cdf(t_statistic.abs()));

    Ok(MeanOutcome::Completed(MeanReport {
        sampled_ids: sample.iter().map(|s| s.id).collect(),
        n,
        population_mean,
        sample_mean,
        sample_std_dev,
        t_statistic: Some(t_statistic),
        p_value,
        alpha: cfg.alpha,
        reject_null: p_value < cfg.alpha,
    }))
}

//! Multi-restart comparison of search strategies.
//!
//! [`compare`] runs several independent restarts of each optimizer and
//! summarizes the distribution of the best makespans they reach, keeping
//! the top-N values per algorithm label for display.

use crate::driver::{Driver, RunConfig};
use crate::error::{FlowShopError, Result};
use crate::models::Instance;
use crate::search::Optimizer;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration of a comparison.
#[derive(Debug, Clone)]
pub struct ComparisonConfig {
    /// Independent runs per optimizer.
    pub restarts: usize,

    /// Best makespans kept per optimizer.
    pub top_n: usize,

    /// Budget of each run. Restart `r` is seeded with `seed + r`; a `None`
    /// seed draws one random base seed for the whole comparison.
    pub run: RunConfig,

    /// Whether to run restarts in parallel using rayon.
    pub parallel: bool,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            restarts: 10,
            top_n: 10,
            run: RunConfig::default(),
            parallel: true,
        }
    }
}

impl ComparisonConfig {
    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
        self
    }

    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    pub fn with_run(mut self, run: RunConfig) -> Self {
        self.run = run;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.restarts == 0 {
            return Err("restarts must be at least 1".into());
        }
        if self.top_n == 0 {
            return Err("top_n must be at least 1".into());
        }
        self.run.validate()
    }
}

/// Distribution of best makespans for one algorithm.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AlgorithmSummary {
    /// Optimizer label.
    pub label: String,
    /// Best makespans, ascending, at most `top_n` entries.
    pub makespans: Vec<f64>,
    /// Number of runs summarized.
    pub runs: usize,
    /// Lowest makespan over all runs.
    pub best: f64,
    /// Highest makespan over all runs.
    pub worst: f64,
    /// Mean over all runs.
    pub mean: f64,
    /// Population standard deviation over all runs.
    pub std_dev: f64,
}

/// Summarizes a set of per-run makespans.
///
/// Statistics cover every value; only the `top_n` lowest are kept in
/// `makespans`. Returns `None` for an empty input.
pub fn summarize(label: &str, values: &[f64], top_n: usize) -> Option<AlgorithmSummary> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len() as f64;
    let mean = sorted.iter().sum::<f64>() / n;
    let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    let best = sorted[0];
    let worst = sorted[sorted.len() - 1];
    sorted.truncate(top_n);

    Some(AlgorithmSummary {
        label: label.to_string(),
        makespans: sorted,
        runs: values.len(),
        best,
        worst,
        mean,
        std_dev: variance.sqrt(),
    })
}

/// Runs every optimizer `config.restarts` times and summarizes each.
///
/// Summaries come back in the order of `optimizers`.
///
/// # Errors
/// [`FlowShopError::InvalidConfig`] for an invalid configuration or empty
/// optimizer list, or the first error raised by any run.
pub fn compare(
    instance: &Instance,
    optimizers: &[Optimizer],
    config: &ComparisonConfig,
) -> Result<Vec<AlgorithmSummary>> {
    config.validate().map_err(FlowShopError::InvalidConfig)?;
    if optimizers.is_empty() {
        return Err(FlowShopError::InvalidConfig("no optimizers to compare".into()));
    }

    let base_seed = config.run.seed.unwrap_or_else(rand::random);

    let mut summaries = Vec::with_capacity(optimizers.len());
    for optimizer in optimizers {
        let values = run_restarts(instance, optimizer, config, base_seed)?;
        let summary = summarize(optimizer.label(), &values, config.top_n).ok_or_else(|| {
            FlowShopError::InvalidConfig(format!("no runs for '{}'", optimizer.label()))
        })?;
        log::info!(
            "{}: best {} / mean {:.3} over {} runs",
            summary.label,
            summary.best,
            summary.mean,
            summary.runs
        );
        summaries.push(summary);
    }
    Ok(summaries)
}

/// Best makespan of each restart, in restart order.
fn run_restarts(
    instance: &Instance,
    optimizer: &Optimizer,
    config: &ComparisonConfig,
    base_seed: u64,
) -> Result<Vec<f64>> {
    let run_one = |restart: usize| -> Result<f64> {
        let run = config
            .run
            .clone()
            .with_seed(base_seed.wrapping_add(restart as u64));
        let result = Driver::run(optimizer, instance, &run)?;
        result.best_makespan().ok_or_else(|| {
            FlowShopError::InvalidConfig(format!(
                "restart {restart} of '{}' produced no schedule",
                optimizer.label()
            ))
        })
    };

    #[cfg(feature = "parallel")]
    if config.parallel {
        return (0..config.restarts).into_par_iter().map(run_one).collect();
    }

    (0..config.restarts).map(run_one).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::LocalBackend;
    use crate::ga::GaConfig;
    use crate::sa::SaConfig;

    fn instance() -> Instance {
        Instance::from_stage_major(
            5,
            2,
            vec![2, 1],
            vec![vec![4.0, 9.0, 2.0, 7.0, 5.0], vec![6.0, 3.0, 8.0, 1.0, 4.0]],
        )
        .unwrap()
    }

    fn optimizers() -> Vec<Optimizer> {
        vec![
            Optimizer::Genetic(
                GaConfig::default()
                    .with_population_size(10)
                    .with_parallel(false),
            ),
            Optimizer::Annealing(SaConfig::default()),
            Optimizer::HillClimbing,
            Optimizer::backend(LocalBackend::new("random"), 10),
        ]
    }

    fn config() -> ComparisonConfig {
        ComparisonConfig::default()
            .with_restarts(4)
            .with_top_n(3)
            .with_run(RunConfig::default().with_max_iterations(15).with_seed(42))
            .with_parallel(false)
    }

    #[test]
    fn test_summarize() {
        let summary = summarize("x", &[4.0, 2.0, 6.0, 8.0], 2).unwrap();
        assert_eq!(summary.makespans, vec![2.0, 4.0]);
        assert_eq!(summary.runs, 4);
        assert_eq!(summary.best, 2.0);
        assert_eq!(summary.worst, 8.0);
        assert!((summary.mean - 5.0).abs() < 1e-12);
        assert!((summary.std_dev - 5.0f64.sqrt()).abs() < 1e-12);

        assert!(summarize("x", &[], 3).is_none());
    }

    #[test]
    fn test_compare_all_strategies() {
        let inst = instance();
        let summaries = compare(&inst, &optimizers(), &config()).unwrap();

        let labels: Vec<&str> = summaries.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["genetic", "annealing", "hill-climbing", "random"]);

        for summary in &summaries {
            assert_eq!(summary.runs, 4);
            assert_eq!(summary.makespans.len(), 3);
            assert!(summary.makespans.windows(2).all(|w| w[0] <= w[1]));
            assert!(summary.best >= inst.max_job_work());
            assert!(summary.best <= summary.mean && summary.mean <= summary.worst);
        }
    }

    #[test]
    fn test_compare_reproducible_and_parallel_safe() {
        let inst = instance();
        let sequential = compare(&inst, &optimizers(), &config()).unwrap();
        let parallel = compare(&inst, &optimizers(), &config().with_parallel(true)).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_compare_rejects_bad_input() {
        let inst = instance();
        assert!(compare(&inst, &[], &config()).is_err());
        assert!(compare(&inst, &optimizers(), &config().with_restarts(0)).is_err());
        assert!(compare(&inst, &optimizers(), &config().with_top_n(0)).is_err());
    }
}

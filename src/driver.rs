//! Driving loop.
//!
//! [`Driver`] repeatedly steps an [`Optimizer`] within an iteration
//! budget, honors cancellation between steps, records the per-step
//! makespan trace and keeps the global best schedule.

use crate::error::{FlowShopError, Result};
use crate::models::{Instance, ScheduleResult};
use crate::random::create_rng;
use crate::search::Optimizer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound on trace slots reserved up front.
const TRACE_PREALLOC: usize = 4096;

/// Budget and seed of one driven run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Maximum number of steps (>= 1).
    pub max_iterations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            seed: None,
        }
    }
}

impl RunConfig {
    /// Sets the step budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        Ok(())
    }
}

/// Makespan reported by one step, for convergence plots.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TracePoint {
    /// Zero-based step index.
    pub iteration: usize,
    /// Makespan reported by that step.
    pub makespan: f64,
}

/// Outcome of a driven run.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Lowest-makespan schedule over all steps, tagged with the step that
    /// produced it. `None` only if the run was cancelled before its first
    /// step.
    pub best: Option<ScheduleResult>,

    /// One entry per executed step.
    pub trace: Vec<TracePoint>,

    /// Number of steps executed.
    pub iterations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

impl RunResult {
    /// Makespan of the best schedule, if any.
    pub fn best_makespan(&self) -> Option<f64> {
        self.best.as_ref().map(|b| b.makespan)
    }
}

/// Executes a search run.
///
/// # Usage
///
/// ```
/// use u_flowshop::driver::{Driver, RunConfig};
/// use u_flowshop::models::Instance;
/// use u_flowshop::search::Optimizer;
///
/// let instance = Instance::from_stage_major(
///     3, 2, vec![1, 1],
///     vec![vec![3.0, 1.0, 2.0], vec![2.0, 4.0, 1.0]],
/// ).unwrap();
/// let config = RunConfig::default().with_max_iterations(20).with_seed(42);
///
/// let result = Driver::run(&Optimizer::HillClimbing, &instance, &config).unwrap();
/// assert_eq!(result.trace.len(), 20);
/// assert!(result.best_makespan().unwrap() >= 7.0);
/// ```
pub struct Driver;

impl Driver {
    /// Runs `optimizer` for `config.max_iterations` steps.
    pub fn run(
        optimizer: &Optimizer,
        instance: &Instance,
        config: &RunConfig,
    ) -> Result<RunResult> {
        Self::run_with_cancel(optimizer, instance, config, None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// The flag is checked before every step; once set, the run stops and
    /// returns what it has so far. The search state is always left at a
    /// step boundary.
    ///
    /// # Errors
    /// [`FlowShopError::InvalidConfig`] for an invalid run configuration,
    /// or the first error raised by a step. No step is retried.
    pub fn run_with_cancel(
        optimizer: &Optimizer,
        instance: &Instance,
        config: &RunConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RunResult> {
        config.validate().map_err(FlowShopError::InvalidConfig)?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut state = optimizer.init(instance, &mut rng)?;
        let mut best: Option<ScheduleResult> = None;
        let mut trace = Vec::with_capacity(config.max_iterations.min(TRACE_PREALLOC));
        let mut cancelled = false;

        for iteration in 0..config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let (next, result) = optimizer.step(instance, &state, &mut rng)?;
            state = next;

            trace.push(TracePoint {
                iteration,
                makespan: result.makespan,
            });

            if best.as_ref().is_none_or(|b| result.makespan < b.makespan) {
                best = Some(result.with_generation(iteration));
            }
        }

        if cancelled {
            log::warn!(
                "{} run cancelled after {} iterations",
                optimizer.label(),
                trace.len()
            );
        }
        log::info!(
            "{} run finished: {} iterations, best makespan {:?}",
            optimizer.label(),
            trace.len(),
            best.as_ref().map(|b| b.makespan)
        );

        Ok(RunResult {
            best,
            iterations: trace.len(),
            trace,
            cancelled,
        })
    }
}

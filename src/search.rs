//! Algorithm-agnostic search interface.
//!
//! [`Optimizer`] names one search strategy with its configuration and
//! exposes a single capability: advance one step from a [`SearchState`],
//! returning the successor state and the step's schedule. Callers hold
//! the state between steps; only one step may be in flight per state.

use crate::backend::{OptimizeRequest, SimulationBackend};
use crate::engine::validate_permutation;
use crate::error::{FlowShopError, Result};
use crate::ga::{GaConfig, GaRunner, GaState};
use crate::hc::{HcRunner, HcState};
use crate::models::{Instance, ScheduleResult};
use crate::sa::{SaConfig, SaRunner, SaState};
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// A search strategy and its parameters.
///
/// # Example
///
/// ```
/// use u_flowshop::ga::GaConfig;
/// use u_flowshop::models::Instance;
/// use u_flowshop::random::create_rng;
/// use u_flowshop::search::Optimizer;
///
/// let instance = Instance::from_stage_major(
///     3, 1, vec![2], vec![vec![4.0, 2.0, 3.0]],
/// ).unwrap();
/// let optimizer = Optimizer::Genetic(GaConfig::default().with_population_size(8));
/// let mut rng = create_rng(42);
///
/// let mut state = optimizer.init(&instance, &mut rng).unwrap();
/// for _ in 0..3 {
///     let (next, result) = optimizer.step(&instance, &state, &mut rng).unwrap();
///     assert!(result.makespan >= 4.0);
///     state = next;
/// }
/// ```
#[derive(Clone)]
pub enum Optimizer {
    /// Genetic search.
    Genetic(GaConfig),
    /// Simulated annealing.
    Annealing(SaConfig),
    /// Stochastic hill-climbing.
    HillClimbing,
    /// A whole-request engine; each step submits one request.
    Backend {
        /// The engine to call.
        backend: Arc<dyn SimulationBackend>,
        /// Budget sent with each request.
        max_iterations: usize,
    },
}

impl fmt::Debug for Optimizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optimizer::Genetic(config) => f.debug_tuple("Genetic").field(config).finish(),
            Optimizer::Annealing(config) => f.debug_tuple("Annealing").field(config).finish(),
            Optimizer::HillClimbing => f.write_str("HillClimbing"),
            Optimizer::Backend {
                backend,
                max_iterations,
            } => f
                .debug_struct("Backend")
                .field("backend", &backend.name())
                .field("max_iterations", max_iterations)
                .finish(),
        }
    }
}

/// State carried between steps; the variant matches the [`Optimizer`].
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    /// Population of the genetic search.
    Genetic(GaState),
    /// Current permutation and temperature.
    Annealing(SaState),
    /// Current permutation.
    HillClimbing(HcState),
    /// Backends keep no state between requests.
    Backend,
}

impl Optimizer {
    /// Wraps a backend.
    pub fn backend(backend: impl SimulationBackend + 'static, max_iterations: usize) -> Self {
        Optimizer::Backend {
            backend: Arc::new(backend),
            max_iterations,
        }
    }

    /// Label used in logs and comparison summaries.
    pub fn label(&self) -> &str {
        match self {
            Optimizer::Genetic(_) => "genetic",
            Optimizer::Annealing(_) => "annealing",
            Optimizer::HillClimbing => "hill-climbing",
            Optimizer::Backend { backend, .. } => backend.name(),
        }
    }

    /// Creates a random starting state.
    ///
    /// # Errors
    /// [`FlowShopError::InvalidConfig`] if the configuration is invalid.
    pub fn init<R: Rng>(&self, instance: &Instance, rng: &mut R) -> Result<SearchState> {
        match self {
            Optimizer::Genetic(config) => {
                config.validate().map_err(FlowShopError::InvalidConfig)?;
                Ok(SearchState::Genetic(GaState::random(
                    instance,
                    config.population_size,
                    rng,
                )))
            }
            Optimizer::Annealing(config) => {
                config.validate().map_err(FlowShopError::InvalidConfig)?;
                Ok(SearchState::Annealing(SaState::random(instance, config, rng)))
            }
            Optimizer::HillClimbing => Ok(SearchState::HillClimbing(HcState::random(instance, rng))),
            Optimizer::Backend { .. } => Ok(SearchState::Backend),
        }
    }

    /// Advances one step.
    ///
    /// # Errors
    /// - [`FlowShopError::InvalidConfig`] if `state` belongs to a different
    ///   strategy, or the step rejects its configuration
    /// - [`FlowShopError::Backend`] if a backend answers with a schedule
    ///   that does not fit the instance
    /// - any error raised by the engine or the backend
    pub fn step<R: Rng>(
        &self,
        instance: &Instance,
        state: &SearchState,
        rng: &mut R,
    ) -> Result<(SearchState, ScheduleResult)> {
        match (self, state) {
            (Optimizer::Genetic(config), SearchState::Genetic(s)) => {
                let (next, result) = GaRunner::step(instance, config, s, rng)?;
                Ok((SearchState::Genetic(next), result))
            }
            (Optimizer::Annealing(config), SearchState::Annealing(s)) => {
                let (next, result) = SaRunner::step(instance, config, s, rng)?;
                Ok((SearchState::Annealing(next), result))
            }
            (Optimizer::HillClimbing, SearchState::HillClimbing(s)) => {
                let (next, result) = HcRunner::step(instance, s, rng)?;
                Ok((SearchState::HillClimbing(next), result))
            }
            (
                Optimizer::Backend {
                    backend,
                    max_iterations,
                },
                SearchState::Backend,
            ) => {
                let request = OptimizeRequest::new(instance.clone())
                    .with_max_iterations(*max_iterations)
                    .with_random_seed(rng.random());
                let result = backend.optimize(&request).inspect_err(|e| {
                    log::warn!("backend '{}' failed: {e}", backend.name());
                })?;
                check_backend_result(instance, &result)?;
                Ok((SearchState::Backend, result))
            }
            _ => Err(FlowShopError::InvalidConfig(format!(
                "search state does not belong to the '{}' optimizer",
                self.label()
            ))),
        }
    }
}

/// Rejects a backend answer that cannot be a schedule of `instance`.
fn check_backend_result(instance: &Instance, result: &ScheduleResult) -> Result<()> {
    let expected = instance.num_jobs() * instance.num_stages();
    if result.schedule.len() != expected {
        return Err(FlowShopError::Backend(format!(
            "response has {} operations, expected {expected}",
            result.schedule.len()
        )));
    }
    if !(result.makespan.is_finite() && result.makespan >= 0.0) {
        return Err(FlowShopError::Backend(format!(
            "response makespan {} is not a valid time",
            result.makespan
        )));
    }
    validate_permutation(&result.permutation, instance.num_jobs())
        .map_err(|e| FlowShopError::Backend(format!("response permutation: {e}")))
}

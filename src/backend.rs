//! Simulation backends.
//!
//! A backend takes a whole [`OptimizeRequest`] and answers with one
//! [`ScheduleResult`]. Out-of-process engines reached over a
//! request/response boundary implement [`SimulationBackend`] in the
//! application; [`LocalBackend`] answers in-process with a seeded random
//! search.
//!
//! Backends do not retry. A failure reaches the caller as a single
//! [`FlowShopError::Backend`](crate::error::FlowShopError::Backend) (or the
//! validation error that caused it); retry policy belongs to the driving
//! loop.

use crate::baseline::random_search;
use crate::error::Result;
use crate::models::{Instance, ScheduleResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default evaluation budget of a request.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Default seed of a request.
pub const DEFAULT_RANDOM_SEED: u64 = 42;

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

fn default_random_seed() -> u64 {
    DEFAULT_RANDOM_SEED
}

/// A request to optimize one instance.
///
/// On the wire the instance fields sit at the top level next to
/// `maxIterations` and `randomSeed`, both optional.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OptimizeRequest {
    /// The problem to solve.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub instance: Instance,
    /// Evaluation budget.
    #[cfg_attr(feature = "serde", serde(default = "default_max_iterations"))]
    pub max_iterations: usize,
    /// Seed for the backend's random source.
    #[cfg_attr(feature = "serde", serde(default = "default_random_seed"))]
    pub random_seed: u64,
}

impl OptimizeRequest {
    /// Creates a request with the default budget and seed.
    pub fn new(instance: Instance) -> Self {
        Self {
            instance,
            max_iterations: default_max_iterations(),
            random_seed: default_random_seed(),
        }
    }

    /// Sets the evaluation budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }
}

/// An engine that answers a whole optimization request at once.
///
/// Implementations must be shareable across threads: independent runs
/// may call the same backend concurrently.
pub trait SimulationBackend: Send + Sync {
    /// Display name, used as the algorithm label.
    fn name(&self) -> &str;

    /// Optimizes the request's instance and returns the best schedule found.
    fn optimize(&self, request: &OptimizeRequest) -> Result<ScheduleResult>;
}

/// In-process backend: best of `max_iterations` seeded random orderings.
#[derive(Debug, Clone)]
pub struct LocalBackend {
    name: String,
}

impl LocalBackend {
    /// Creates a backend labelled `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for LocalBackend {
    fn default() -> Self {
        Self::new("local")
    }
}

impl SimulationBackend for LocalBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn optimize(&self, request: &OptimizeRequest) -> Result<ScheduleResult> {
        request.instance.validate()?;
        random_search(&request.instance, request.max_iterations, request.random_seed)
    }
}

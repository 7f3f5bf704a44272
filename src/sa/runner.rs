//! One simulated-annealing step.

use super::config::SaConfig;
use super::types::SaState;
use crate::engine::schedule;
use crate::error::{FlowShopError, Result};
use crate::models::{Instance, ScheduleResult};
use crate::operators::swap_mutation;
use rand::Rng;

/// Metropolis acceptance probability for a cost change `delta` at
/// `temperature`.
///
/// Improvements (`delta < 0`) are always accepted; otherwise the
/// probability is `exp(-delta / temperature)`, which tends to 0 for
/// worse moves as the temperature tends to 0.
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta < 0.0 {
        1.0
    } else {
        (-delta / temperature).exp()
    }
}

/// Executes simulated-annealing steps.
pub struct SaRunner;

impl SaRunner {
    /// Runs one step: evaluate, propose a swap neighbor, apply the
    /// Metropolis criterion, cool.
    ///
    /// The reported result is the permutation just accepted (current or
    /// neighbor), not a running best; tracking the global best across
    /// steps is the caller's job.
    ///
    /// # Errors
    /// - [`FlowShopError::InvalidConfig`] for an invalid configuration or a
    ///   state temperature that is not strictly positive
    /// - any engine error for an invalid current permutation
    pub fn step<R: Rng>(
        instance: &Instance,
        config: &SaConfig,
        state: &SaState,
        rng: &mut R,
    ) -> Result<(SaState, ScheduleResult)> {
        config.validate().map_err(FlowShopError::InvalidConfig)?;
        if !(state.temperature.is_finite() && state.temperature > 0.0) {
            return Err(FlowShopError::InvalidConfig(format!(
                "temperature must be positive, got {}",
                state.temperature
            )));
        }

        let temperature = state.temperature.max(config.min_temperature);

        let current = schedule(instance, &state.current)?;
        let neighbor = schedule(instance, &swap_mutation(&state.current, rng))?;
        let delta = neighbor.makespan - current.makespan;

        // Metropolis acceptance criterion
        let accept = if delta < 0.0 {
            true
        } else {
            rng.random_range(0.0..1.0) < acceptance_probability(delta, temperature)
        };

        let next_temperature =
            (temperature * (1.0 - config.cooling_rate)).max(config.min_temperature);

        log::debug!(
            "sa step: current {}, neighbor {}, accepted {accept}, temperature {temperature}",
            current.makespan,
            neighbor.makespan
        );

        let accepted = if accept { neighbor } else { current };
        let next = SaState::new(accepted.permutation.clone(), next_temperature);
        Ok((next, accepted))
    }
}

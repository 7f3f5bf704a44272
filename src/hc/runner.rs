//! One hill-climbing step.

use super::types::HcState;
use crate::engine::schedule;
use crate::error::Result;
use crate::models::{Instance, ScheduleResult};
use crate::operators::swap_mutation;
use rand::Rng;

/// Executes hill-climbing steps.
pub struct HcRunner;

impl HcRunner {
    /// Runs one step and reports the makespan of the permutation kept.
    ///
    /// The reported makespan never exceeds the makespan of
    /// `state.current`.
    pub fn step<R: Rng>(
        instance: &Instance,
        state: &HcState,
        rng: &mut R,
    ) -> Result<(HcState, ScheduleResult)> {
        let current = schedule(instance, &state.current)?;
        let neighbor = schedule(instance, &swap_mutation(&state.current, rng))?;

        let accept = neighbor.makespan <= current.makespan;
        log::debug!(
            "hc step: current {}, neighbor {}, accepted {accept}",
            current.makespan,
            neighbor.makespan
        );

        let kept = if accept { neighbor } else { current };
        Ok((HcState::new(kept.permutation.clone()), kept))
    }
}

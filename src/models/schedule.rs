//! Schedule (solution) model.
//!
//! A [`ScheduleResult`] is the complete, time-stamped output of the
//! scheduling engine for one job ordering.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One operation: a job processed at one stage on one machine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TaskLog {
    /// Job id.
    pub job_id: usize,
    /// Stage index.
    pub stage_id: usize,
    /// Machine index local to the stage.
    pub machine_id: usize,
    /// Machine index flattened across all stages.
    pub global_machine_id: usize,
    /// Start time.
    pub start_time: f64,
    /// End time (`>= start_time`).
    pub end_time: f64,
}

impl TaskLog {
    /// Processing duration.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// Output of one engine evaluation.
///
/// `schedule` is ordered stage by stage, and within a stage in the order
/// jobs were visited, so consumers can render deterministically.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScheduleResult {
    /// Completion time of the last job at the last stage.
    pub makespan: f64,
    /// All operations, `num_jobs * num_stages` entries.
    pub schedule: Vec<TaskLog>,
    /// The stage-0 job ordering that produced this schedule.
    pub permutation: Vec<usize>,
    /// Search iteration that produced this result, if tagged by a caller.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub generation: Option<usize>,
}

impl ScheduleResult {
    /// Tags the result with the iteration that produced it.
    pub fn with_generation(mut self, generation: usize) -> Self {
        self.generation = Some(generation);
        self
    }

    /// Operations of one job, in stage order.
    pub fn tasks_for_job(&self, job_id: usize) -> Vec<&TaskLog> {
        self.schedule.iter().filter(|t| t.job_id == job_id).collect()
    }

    /// Operations on one machine (global id), in processing order.
    pub fn tasks_for_machine(&self, global_machine_id: usize) -> Vec<&TaskLog> {
        self.schedule
            .iter()
            .filter(|t| t.global_machine_id == global_machine_id)
            .collect()
    }

    /// Busy time of a machine divided by the makespan.
    ///
    /// Returns `None` if the makespan is zero.
    pub fn machine_utilization(&self, global_machine_id: usize) -> Option<f64> {
        if self.makespan <= 0.0 {
            return None;
        }
        let busy: f64 = self
            .tasks_for_machine(global_machine_id)
            .iter()
            .map(|t| t.duration())
            .sum();
        Some(busy / self.makespan)
    }
}

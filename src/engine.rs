//! Discrete-event scheduling engine.
//!
//! Maps a job ordering to a complete, time-stamped schedule.
//!
//! # Algorithm
//!
//! Stages are simulated in order. At stage 0 jobs are visited in the
//! given permutation; at every later stage they are visited by ascending
//! completion time at the previous stage (stable on ties), i.e. FIFO by
//! physical arrival. Each job takes the first-available machine (smallest
//! free time, lowest index on ties) and starts at
//! `max(job ready, machine free)`.
//!
//! # Complexity
//! O(s * (n log n + n * m)) where s=stages, n=jobs, m=machines per stage.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 6: Flexible Flow Shops

use crate::error::{FlowShopError, Result};
use crate::models::{Instance, ScheduleResult, TaskLog};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Schedules `permutation` on `instance`.
///
/// Pure: identical inputs always produce identical output, so any
/// number of evaluations may run concurrently.
///
/// # Errors
/// - [`FlowShopError::InvalidInstance`] if the instance fails validation
///   (e.g. a stage with zero machines), or if completion times overflow
///   to infinity; no partial schedule is returned
/// - [`FlowShopError::InvalidPermutation`] if `permutation` is not a
///   permutation of `0..num_jobs`
///
/// # Example
///
/// ```
/// use u_flowshop::engine::schedule;
/// use u_flowshop::models::Instance;
///
/// let instance = Instance::from_stage_major(2, 1, vec![1], vec![vec![3.0, 5.0]]).unwrap();
/// let result = schedule(&instance, &[0, 1]).unwrap();
/// assert_eq!(result.makespan, 8.0);
/// assert_eq!(result.schedule[1].start_time, 3.0);
/// ```
pub fn schedule(instance: &Instance, permutation: &[usize]) -> Result<ScheduleResult> {
    instance.validate()?;
    validate_permutation(permutation, instance.num_jobs())?;

    let n = instance.num_jobs();
    let mut job_free = vec![0.0_f64; n];
    let mut order = permutation.to_vec();
    let mut logs = Vec::with_capacity(n * instance.num_stages());
    let mut offset = 0usize;

    for (stage, &machines) in instance.machines_per_stage.iter().enumerate() {
        let mut machine_free = vec![0.0_f64; machines];

        for &job in &order {
            let machine = first_available(&machine_free);
            let start_time = job_free[job].max(machine_free[machine]);
            let end_time = start_time + instance.processing_time(job, stage);
            if !end_time.is_finite() {
                return Err(FlowShopError::InvalidInstance(format!(
                    "processing times overflow the time horizon at job {job}, stage {stage}"
                )));
            }

            machine_free[machine] = end_time;
            job_free[job] = end_time;

            logs.push(TaskLog {
                job_id: job,
                stage_id: stage,
                machine_id: machine,
                global_machine_id: offset + machine,
                start_time,
                end_time,
            });
        }

        // Next stage visits jobs by arrival. `sort_by` is stable, so equal
        // completion times keep this stage's visiting order.
        order.sort_by(|&a, &b| job_free[a].total_cmp(&job_free[b]));
        offset += machines;
    }

    let makespan = job_free.iter().copied().fold(0.0, f64::max);

    Ok(ScheduleResult {
        makespan,
        schedule: logs,
        permutation: permutation.to_vec(),
        generation: None,
    })
}

/// Makespan of `permutation`, without keeping the schedule around.
pub fn makespan(instance: &Instance, permutation: &[usize]) -> Result<f64> {
    schedule(instance, permutation).map(|r| r.makespan)
}

/// Evaluates many orderings, preserving input order.
///
/// When `parallel` is set and the `parallel` feature is enabled, the
/// evaluations are spread over rayon's thread pool. The first error
/// encountered is returned.
pub fn evaluate_all(
    instance: &Instance,
    permutations: &[Vec<usize>],
    parallel: bool,
) -> Result<Vec<ScheduleResult>> {
    #[cfg(feature = "parallel")]
    if parallel {
        return permutations
            .par_iter()
            .map(|perm| schedule(instance, perm))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    permutations
        .iter()
        .map(|perm| schedule(instance, perm))
        .collect()
}

/// Checks that `permutation` contains every id in `0..num_jobs` exactly once.
pub fn validate_permutation(permutation: &[usize], num_jobs: usize) -> Result<()> {
    if permutation.len() != num_jobs {
        return Err(FlowShopError::InvalidPermutation(format!(
            "length {} does not match {num_jobs} jobs",
            permutation.len()
        )));
    }
    let mut seen = vec![false; num_jobs];
    for &job in permutation {
        if job >= num_jobs {
            return Err(FlowShopError::InvalidPermutation(format!(
                "job id {job} out of range 0..{num_jobs}"
            )));
        }
        if seen[job] {
            return Err(FlowShopError::InvalidPermutation(format!(
                "job id {job} appears more than once"
            )));
        }
        seen[job] = true;
    }
    Ok(())
}

/// Index of the machine with the smallest free time; lowest index wins ties.
fn first_available(machine_free: &[f64]) -> usize {
    let mut best = 0;
    for (m, &free) in machine_free.iter().enumerate().skip(1) {
        if free < machine_free[best] {
            best = m;
        }
    }
    best
}

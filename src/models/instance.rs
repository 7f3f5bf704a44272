//! Problem instance model.
//!
//! An [`Instance`] describes a hybrid flow shop: a fixed sequence of
//! stages, each with one or more identical parallel machines, and a set
//! of jobs that visit every stage in order.
//!
//! # Reference
//! Ruiz & Vázquez-Rodríguez (2010), "The hybrid flow shop scheduling
//! problem", European Journal of Operational Research 205(1)

use crate::error::{FlowShopError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A job and its per-stage processing times.
///
/// `processing_times[s]` is the time the job occupies any one machine at
/// stage `s`, independent of which machine is chosen.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Job {
    /// Job identifier in `0..num_jobs`.
    pub id: usize,
    /// Processing time per stage.
    pub processing_times: Vec<f64>,
}

impl Job {
    /// Creates a job.
    pub fn new(id: usize, processing_times: Vec<f64>) -> Self {
        Self {
            id,
            processing_times,
        }
    }

    /// Sum of processing times over all stages.
    ///
    /// A lower bound on the job's completion time in any schedule.
    pub fn total_work(&self) -> f64 {
        self.processing_times.iter().sum()
    }
}

/// Immutable description of a hybrid flow shop problem.
///
/// Build it with [`Instance::new`] or [`Instance::from_stage_major`],
/// both of which validate. After construction, `jobs[j].id == j`.
///
/// # Example
///
/// ```
/// use u_flowshop::models::Instance;
///
/// // 2 jobs, 2 stages; stage 1 has two parallel machines.
/// let instance = Instance::from_stage_major(
///     2,
///     2,
///     vec![1, 2],
///     vec![vec![3.0, 5.0], vec![2.0, 4.0]],
/// )
/// .unwrap();
/// assert_eq!(instance.total_machines(), 3);
/// assert_eq!(instance.jobs[1].processing_times, vec![5.0, 4.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Instance {
    /// Number of jobs.
    pub num_jobs: usize,
    /// Number of stages.
    pub num_stages: usize,
    /// Identical parallel machines per stage (each >= 1).
    pub machines_per_stage: Vec<usize>,
    /// Jobs, indexed by id.
    pub jobs: Vec<Job>,
}

impl Instance {
    /// Creates and validates an instance.
    ///
    /// Jobs may be given in any order; they are stored sorted by id.
    pub fn new(machines_per_stage: Vec<usize>, mut jobs: Vec<Job>) -> Result<Self> {
        jobs.sort_by_key(|j| j.id);
        let instance = Self {
            num_jobs: jobs.len(),
            num_stages: machines_per_stage.len(),
            machines_per_stage,
            jobs,
        };
        instance.validate()?;
        Ok(instance)
    }

    /// Builds an instance from a stage-major processing-time matrix.
    ///
    /// `matrix[s][j]` is the processing time of job `j` at stage `s`
    /// (rows are stages, columns are jobs). Any length mismatch against
    /// `num_jobs` / `num_stages` is rejected.
    pub fn from_stage_major(
        num_jobs: usize,
        num_stages: usize,
        machines_per_stage: Vec<usize>,
        matrix: Vec<Vec<f64>>,
    ) -> Result<Self> {
        if machines_per_stage.len() != num_stages {
            return Err(FlowShopError::InvalidInstance(format!(
                "expected {num_stages} machine counts, got {}",
                machines_per_stage.len()
            )));
        }
        if matrix.len() != num_stages {
            return Err(FlowShopError::InvalidInstance(format!(
                "expected {num_stages} processing-time rows, got {}",
                matrix.len()
            )));
        }
        if let Some((s, row)) = matrix.iter().enumerate().find(|(_, r)| r.len() != num_jobs) {
            return Err(FlowShopError::InvalidInstance(format!(
                "stage {s} row has {} entries, expected {num_jobs}",
                row.len()
            )));
        }

        let jobs = (0..num_jobs)
            .map(|j| Job::new(j, matrix.iter().map(|row| row[j]).collect()))
            .collect();

        let instance = Self {
            num_jobs,
            num_stages,
            machines_per_stage,
            jobs,
        };
        instance.validate()?;
        Ok(instance)
    }

    /// Checks structural integrity.
    ///
    /// Rejects zero jobs or stages, count/length mismatches, stages with no
    /// machines, ids that are out of range, duplicated or out of position,
    /// and negative or non-finite processing times.
    pub fn validate(&self) -> Result<()> {
        if self.num_jobs == 0 {
            return Err(FlowShopError::InvalidInstance("no jobs".into()));
        }
        if self.num_stages == 0 {
            return Err(FlowShopError::InvalidInstance("no stages".into()));
        }
        if self.machines_per_stage.len() != self.num_stages {
            return Err(FlowShopError::InvalidInstance(format!(
                "machines_per_stage has {} entries, expected {}",
                self.machines_per_stage.len(),
                self.num_stages
            )));
        }
        if let Some(s) = self.machines_per_stage.iter().position(|&m| m == 0) {
            return Err(FlowShopError::InvalidInstance(format!(
                "stage {s} has no machines"
            )));
        }
        if self.jobs.len() != self.num_jobs {
            return Err(FlowShopError::InvalidInstance(format!(
                "{} jobs given, expected {}",
                self.jobs.len(),
                self.num_jobs
            )));
        }

        for (idx, job) in self.jobs.iter().enumerate() {
            if job.id != idx {
                return Err(FlowShopError::InvalidInstance(format!(
                    "job ids must be unique and cover 0..{}; found id {} at position {idx}",
                    self.num_jobs, job.id
                )));
            }
            if job.processing_times.len() != self.num_stages {
                return Err(FlowShopError::InvalidInstance(format!(
                    "job {} has {} processing times, expected {}",
                    job.id,
                    job.processing_times.len(),
                    self.num_stages
                )));
            }
            if let Some(s) = job
                .processing_times
                .iter()
                .position(|t| !t.is_finite() || *t < 0.0)
            {
                return Err(FlowShopError::InvalidInstance(format!(
                    "job {} has invalid processing time {} at stage {s}",
                    job.id, job.processing_times[s]
                )));
            }
        }

        Ok(())
    }

    /// Number of jobs.
    #[inline]
    pub fn num_jobs(&self) -> usize {
        self.num_jobs
    }

    /// Number of stages.
    #[inline]
    pub fn num_stages(&self) -> usize {
        self.num_stages
    }

    /// Machines across all stages.
    pub fn total_machines(&self) -> usize {
        self.machines_per_stage.iter().sum()
    }

    /// Global id of machine 0 at `stage` (machines flattened across stages).
    pub fn stage_offset(&self, stage: usize) -> usize {
        self.machines_per_stage[..stage].iter().sum()
    }

    /// Processing time of `job` at `stage`.
    #[inline]
    pub fn processing_time(&self, job: usize, stage: usize) -> f64 {
        self.jobs[job].processing_times[stage]
    }

    /// Largest single-job total work: a lower bound on the makespan.
    pub fn max_job_work(&self) -> f64 {
        self.jobs.iter().map(Job::total_work).fold(0.0, f64::max)
    }
}

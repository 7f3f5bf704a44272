//! Domain models.
//!
//! - [`Instance`] / [`Job`]: the immutable problem description
//! - [`ScheduleResult`] / [`TaskLog`]: the engine's output

mod instance;
mod schedule;

pub use instance::{Instance, Job};
pub use schedule::{ScheduleResult, TaskLog};

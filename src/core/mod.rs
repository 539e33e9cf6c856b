//! Core abstractions: task identity, the scheduler contract, and resource
//! vector accounting.

pub mod error;
pub mod resource;
pub mod scheduler;
pub mod task;

pub use error::{AppResult, ScheduleError};
pub use resource::{ResourceLease, ResourceRequest, ResourceVectorPool};
pub use scheduler::{Partitioner, ResourceCalculator, Route, Scheduler, SchedulerFactory};
pub use task::{ScheduledTask, Task};

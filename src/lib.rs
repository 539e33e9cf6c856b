//! # Taskweave
//!
//! Composable task-scheduling primitives.
//!
//! Three schedulers share one contract and nest arbitrarily, so fairness,
//! prioritization, and admission-control policies are assembled rather than
//! hand-written:
//!
//! - [`FifoScheduler`] - strict insertion-order retrieval
//! - [`PartitionedScheduler`] - priority levels drained highest first,
//!   round-robin across partitions within a level
//! - [`ResourceManagedScheduler`] - admits tasks only as fast as a
//!   [`ResourceVectorPool`] can cover their demand
//!
//! ## Examples
//!
//! ### FIFO lane
//!
//! ```
//! use taskweave::{FifoScheduler, Scheduler, Task};
//!
//! struct Job(String);
//!
//! impl Task for Job {
//!     fn id(&self) -> &str {
//!         &self.0
//!     }
//! }
//!
//! let mut lane = FifoScheduler::new();
//! lane.put(Job("a".to_string()));
//! lane.put(Job("b".to_string()));
//! assert_eq!(lane.next().unwrap().id(), "a");
//! assert_eq!(lane.next().unwrap().id(), "b");
//! assert!(lane.next().is_none());
//! ```
//!
//! ### Fair admission across users
//!
//! One slot in the pool, a FIFO lane per user: users alternate no matter
//! how their tasks arrive, and a task leaves only when the previous one is
//! closed.
//!
//! ```
//! use taskweave::{
//!     FifoScheduler, PartitionedScheduler, ResourceManagedScheduler, ResourceRequest,
//!     ResourceVectorPool, Route, Scheduler, Task,
//! };
//!
//! struct Job {
//!     id: String,
//!     user: u32,
//! }
//!
//! impl Task for Job {
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//! }
//!
//! let by_user = PartitionedScheduler::new(|job: &Job| Route {
//!     key: job.user.to_string(),
//!     priority: 0,
//!     factory: Box::new(|| Box::new(FifoScheduler::new())),
//! });
//! let pool = ResourceVectorPool::new(vec![1]);
//! let mut fair = ResourceManagedScheduler::new(by_user, pool, |_: &Job| {
//!     ResourceRequest::new(vec![1])
//! });
//!
//! for (id, user) in [("a", 1), ("x", 2), ("b", 1), ("y", 2)] {
//!     fair.put(Job { id: id.to_string(), user });
//! }
//!
//! let mut order = Vec::new();
//! while let Some(mut scheduled) = fair.next() {
//!     order.push(scheduled.id().to_string());
//!     scheduled.close();
//! }
//! assert_eq!(order, ["a", "x", "b", "y"]);
//! ```

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod builders;
pub mod config;
pub mod core;
pub mod sched;
pub mod sim;
pub mod util;

// Re-export main types for convenience
pub use crate::core::{
    AppResult, Partitioner, ResourceCalculator, ResourceLease, ResourceRequest,
    ResourceVectorPool, Route, ScheduleError, ScheduledTask, Scheduler, SchedulerFactory, Task,
};
pub use sched::{FifoScheduler, PartitionedScheduler, ResourceManagedScheduler};

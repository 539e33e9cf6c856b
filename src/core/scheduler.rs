//! The scheduler contract and the capability types used to compose
//! scheduler instances.

use crate::core::resource::ResourceRequest;
use crate::core::task::{ScheduledTask, Task};

/// An ordered container of tasks.
///
/// Every implementation upholds the same contract so variants are freely
/// interchangeable at sub-scheduler positions:
///
/// - no two contained tasks share an identifier; duplicate puts are dropped
///   silently,
/// - `contains`/`size` reflect exactly the tasks reachable from the
///   scheduler (a parked task counts),
/// - `next` is consuming and never blocks: exhaustion and resource
///   starvation both surface as `None`.
///
/// Operations are synchronous and not re-entrant on a single instance.
pub trait Scheduler<T: Task> {
    /// True iff a task with the same identifier is present.
    fn contains(&self, task: &T) -> bool;

    /// Insert a task. If a task with the same identifier is already
    /// present, the insert is silently ignored.
    fn put(&mut self, task: T);

    /// Insert tasks in argument order, applying the same duplicate
    /// suppression as [`put`](Scheduler::put).
    fn put_all(&mut self, tasks: Vec<T>) {
        for task in tasks {
            self.put(task);
        }
    }

    /// Remove and return the next admissible task, or `None` if the
    /// scheduler is exhausted or cannot admit one right now.
    fn next(&mut self) -> Option<ScheduledTask<T>>;

    /// Number of tasks currently held.
    fn size(&self) -> usize;

    /// Remove the task with the given identifier, returning it if present.
    fn remove(&mut self, id: &str) -> Option<T>;
}

impl<T: Task> Scheduler<T> for Box<dyn Scheduler<T>> {
    fn contains(&self, task: &T) -> bool {
        (**self).contains(task)
    }

    fn put(&mut self, task: T) {
        (**self).put(task);
    }

    fn put_all(&mut self, tasks: Vec<T>) {
        (**self).put_all(tasks);
    }

    fn next(&mut self) -> Option<ScheduledTask<T>> {
        (**self).next()
    }

    fn size(&self) -> usize {
        (**self).size()
    }

    fn remove(&mut self, id: &str) -> Option<T> {
        (**self).remove(id)
    }
}

/// Builds a fresh sub-scheduler for a partition the first time a task is
/// routed to it.
pub type SchedulerFactory<T> = Box<dyn Fn() -> Box<dyn Scheduler<T>>>;

/// Where a task belongs inside a partitioned scheduler: the partition key,
/// the priority level, and a factory for the partition's sub-scheduler.
///
/// The factory is invoked at most once per `(priority, key)` pair.
pub struct Route<T> {
    /// Partition key within the priority level.
    pub key: String,
    /// Priority level; higher values are served first.
    pub priority: u32,
    /// Factory producing the partition's sub-scheduler on first use.
    pub factory: SchedulerFactory<T>,
}

/// Maps a task to its [`Route`]. Must be deterministic on task identity:
/// the same task yields the same key and priority on every call.
pub type Partitioner<T> = Box<dyn Fn(&T) -> Route<T>>;

/// Estimates the resources a task needs to run. The returned request is not
/// attached to any pool; a resource-managed scheduler presents it to its
/// pool on the task's behalf.
pub type ResourceCalculator<T> = Box<dyn Fn(&T) -> ResourceRequest>;

//! Resource-managed scheduler: admission control over any sub-scheduler.

use std::sync::Arc;

use tracing::debug;

use crate::core::{
    ResourceCalculator, ResourceRequest, ResourceVectorPool, ScheduledTask, Scheduler, Task,
};

/// A wrapper that releases tasks from an underlying scheduler only as fast
/// as a resource pool can supply their demand.
///
/// `next` draws one task from the underlying scheduler, asks the
/// caller-supplied calculator for its demand, and presents that request to
/// the pool. On a grant the task leaves wrapped with its lease; on a denial
/// the task is parked locally and `next` returns `None`. The parked task is
/// retried first on every subsequent `next` until the pool grants it or it
/// is removed.
///
/// Parking holds at most one task: the underlying scheduler's `next` is
/// consuming, and handing a drawn task back would violate its interior
/// ordering. The cost of the single slot is that a large-demand parked task
/// can block smaller tasks queued behind it even when the pool could admit
/// them; layering a partitioned scheduler underneath bounds how unfair that
/// gets.
pub struct ResourceManagedScheduler<T, S> {
    parked: Option<T>,
    underlying: S,
    pool: Arc<ResourceVectorPool>,
    calculator: ResourceCalculator<T>,
}

impl<T: Task, S: Scheduler<T>> ResourceManagedScheduler<T, S> {
    /// Wrap `underlying` with admission control against `pool`, using
    /// `calculator` to estimate each task's demand.
    pub fn new(
        underlying: S,
        pool: Arc<ResourceVectorPool>,
        calculator: impl Fn(&T) -> ResourceRequest + 'static,
    ) -> Self {
        Self {
            parked: None,
            underlying,
            pool,
            calculator: Box::new(calculator),
        }
    }
}

impl<T: Task, S: Scheduler<T>> Scheduler<T> for ResourceManagedScheduler<T, S> {
    fn contains(&self, task: &T) -> bool {
        self.parked.as_ref().is_some_and(|p| p.id() == task.id())
            || self.underlying.contains(task)
    }

    fn put(&mut self, task: T) {
        self.underlying.put(task);
    }

    fn next(&mut self) -> Option<ScheduledTask<T>> {
        if let Some(parked) = self.parked.take() {
            let request = (self.calculator)(&parked);
            return match self.pool.request(&request) {
                Some(lease) => {
                    debug!(id = parked.id(), "parked task admitted");
                    Some(ScheduledTask::with_lease(parked, lease))
                }
                None => {
                    self.parked = Some(parked);
                    None
                }
            };
        }
        let task = self.underlying.next()?.into_task();
        let request = (self.calculator)(&task);
        match self.pool.request(&request) {
            Some(lease) => Some(ScheduledTask::with_lease(task, lease)),
            None => {
                debug!(id = task.id(), "pool denied request, parking task");
                self.parked = Some(task);
                None
            }
        }
    }

    fn size(&self) -> usize {
        self.underlying.size() + usize::from(self.parked.is_some())
    }

    fn remove(&mut self, id: &str) -> Option<T> {
        if self.parked.as_ref().is_some_and(|p| p.id() == id) {
            return self.parked.take();
        }
        self.underlying.remove(id)
    }
}

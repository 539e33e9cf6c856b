//! Task identity and the scheduled-task wrapper.

use crate::core::resource::ResourceLease;

/// A unit of work with a stable string identifier.
///
/// Identity across the library is identifier equality: two tasks with the
/// same id are the same task as far as any scheduler is concerned, and a
/// scheduler never holds two of them at once.
pub trait Task {
    /// Stable identifier for this task.
    fn id(&self) -> &str;
}

/// A task leaving a scheduler, together with any resource lease granted to
/// admit it.
///
/// Call [`close`](ScheduledTask::close) when the work completes so the lease
/// returns to its pool. Dropping the wrapper releases the lease as well, so
/// a forgotten wrapper cannot strand pool capacity.
#[derive(Debug)]
pub struct ScheduledTask<T> {
    task: T,
    lease: Option<ResourceLease>,
}

impl<T: Task> ScheduledTask<T> {
    pub(crate) fn bare(task: T) -> Self {
        Self { task, lease: None }
    }

    pub(crate) fn with_lease(task: T, lease: ResourceLease) -> Self {
        Self {
            task,
            lease: Some(lease),
        }
    }

    /// Identifier of the wrapped task.
    #[must_use]
    pub fn id(&self) -> &str {
        self.task.id()
    }

    /// Borrow the wrapped task.
    #[must_use]
    pub fn task(&self) -> &T {
        &self.task
    }

    /// Release the attached lease, if any, back to its pool. Idempotent:
    /// only the first call returns capacity.
    pub fn close(&mut self) {
        self.lease = None;
    }

    /// Unwrap the task, releasing any attached lease.
    #[must_use]
    pub fn into_task(self) -> T {
        self.task
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Job(String);

    impl Task for Job {
        fn id(&self) -> &str {
            &self.0
        }
    }

    #[test]
    fn wrapper_exposes_task_identity() {
        let mut scheduled = ScheduledTask::bare(Job("j-1".to_string()));
        assert_eq!(scheduled.id(), "j-1");
        assert_eq!(scheduled.task().0, "j-1");
        scheduled.close();
        scheduled.close();
        assert_eq!(scheduled.into_task().0, "j-1");
    }
}

//! Discrete-event simulation of a scheduler draining a synthetic workload.
//!
//! The simulator puts every task into the scheduler up front, then
//! alternates between draining all currently admissible tasks and advancing
//! the clock to the earliest completion. Closing a completed task returns
//! its resources, which is what lets a throttled policy admit the next
//! batch. The result is a per-user latency report rather than printed
//! output; rendering is left to the caller.

use std::collections::BTreeMap;
use std::fmt;

use tracing::trace;

use crate::core::{ScheduledTask, Scheduler, Task};

/// A synthetic task: a numeric identity, an owning user, and a modeled
/// runtime.
#[derive(Debug, Clone)]
pub struct SimTask {
    id: String,
    identifier: u32,
    user_id: u32,
    runtime_ms: u32,
}

impl SimTask {
    /// Create a simulation task.
    #[must_use]
    pub fn new(identifier: u32, user_id: u32, runtime_ms: u32) -> Self {
        Self {
            id: identifier.to_string(),
            identifier,
            user_id,
            runtime_ms,
        }
    }

    /// Numeric identity backing [`Task::id`].
    #[must_use]
    pub fn identifier(&self) -> u32 {
        self.identifier
    }

    /// The user this task belongs to.
    #[must_use]
    pub fn user_id(&self) -> u32 {
        self.user_id
    }

    /// Modeled runtime in milliseconds.
    #[must_use]
    pub fn runtime_ms(&self) -> u32 {
        self.runtime_ms
    }
}

impl Task for SimTask {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Latency outcomes for a single user.
#[derive(Debug, Clone)]
pub struct UserStats {
    /// The user these figures describe.
    pub user_id: u32,
    /// Number of tasks that ran to completion.
    pub tasks_completed: usize,
    /// Wall-clock time at which the user's last task finished.
    pub clock_time_ms: u64,
    /// Completed tasks per second of wall-clock time.
    pub throughput_per_sec: f64,
}

/// Per-user results of a simulation run, ordered by user id.
#[derive(Debug, Clone)]
pub struct SimReport {
    /// Stats for every user that completed at least one task.
    pub users: Vec<UserStats>,
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stats in &self.users {
            writeln!(f, "user {}:", stats.user_id)?;
            writeln!(f, "\tclock time:\t\t\t {} ms", stats.clock_time_ms)?;
            writeln!(
                f,
                "\tthroughput (tasks / sec):\t {:.6}",
                stats.throughput_per_sec
            )?;
        }
        Ok(())
    }
}

/// Run `tasks` through `scheduler` and report per-user clock time and
/// throughput.
///
/// Tasks the policy can never admit (demand permanently exceeding pool
/// capacity) are left in the scheduler and excluded from the report rather
/// than hanging the simulation.
pub fn simulate<S: Scheduler<SimTask>>(scheduler: &mut S, tasks: Vec<SimTask>) -> SimReport {
    scheduler.put_all(tasks);

    let mut now_ms: u64 = 0;
    let mut running: Vec<(ScheduledTask<SimTask>, u64)> = Vec::new();
    let mut completions: BTreeMap<u32, Vec<u64>> = BTreeMap::new();

    while scheduler.size() > 0 || !running.is_empty() {
        while let Some(scheduled) = scheduler.next() {
            let done_at = now_ms + u64::from(scheduled.task().runtime_ms());
            trace!(id = scheduled.id(), done_at, "task admitted");
            running.push((scheduled, done_at));
        }

        let Some(&earliest) = running.iter().map(|(_, done_at)| done_at).min() else {
            // Nothing is running and nothing can be admitted: the rest of
            // the workload is starved. Stop instead of spinning.
            break;
        };
        now_ms = earliest;

        let mut idx = 0;
        while idx < running.len() {
            if running[idx].1 == earliest {
                let (mut scheduled, done_at) = running.swap_remove(idx);
                completions
                    .entry(scheduled.task().user_id())
                    .or_default()
                    .push(done_at);
                scheduled.close();
            } else {
                idx += 1;
            }
        }
    }

    let users = completions
        .into_iter()
        .map(|(user_id, times)| {
            let clock_time_ms = times.iter().copied().max().unwrap_or(0);
            let tasks_completed = times.len();
            let throughput_per_sec = if clock_time_ms == 0 {
                0.0
            } else {
                tasks_completed as f64 / clock_time_ms as f64 * 1000.0
            };
            UserStats {
                user_id,
                tasks_completed,
                clock_time_ms,
                throughput_per_sec,
            }
        })
        .collect();

    SimReport { users }
}

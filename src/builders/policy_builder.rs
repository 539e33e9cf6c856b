//! Builders to assemble scheduler compositions from configuration.

use crate::config::{PolicyConfig, WorkloadConfig};
use crate::core::{ResourceRequest, ResourceVectorPool, Route, Scheduler, SchedulerFactory};
use crate::sched::{FifoScheduler, PartitionedScheduler, ResourceManagedScheduler};
use crate::sim::SimTask;

fn fifo_factory() -> SchedulerFactory<SimTask> {
    Box::new(|| Box::new(FifoScheduler::new()))
}

/// Route a task to its owning user's partition, all at one priority, with a
/// FIFO lane per user.
#[must_use]
pub fn user_route(task: &SimTask) -> Route<SimTask> {
    Route {
        key: task.user_id().to_string(),
        priority: 0,
        factory: fifo_factory(),
    }
}

/// A calculator that charges one unit of every pool component per task.
pub fn unit_request(dims: usize) -> impl Fn(&SimTask) -> ResourceRequest {
    move |_| ResourceRequest::new(vec![1; dims])
}

/// Route tasks into a fast or a slow lane by runtime, each lane a
/// single-slot throttle over a per-user round robin.
pub fn lane_route(threshold_ms: u32) -> impl Fn(&SimTask) -> Route<SimTask> {
    move |task| {
        let key = if task.runtime_ms() >= threshold_ms {
            "slow"
        } else {
            "fast"
        };
        Route {
            key: key.to_string(),
            priority: 0,
            factory: Box::new(|| {
                Box::new(ResourceManagedScheduler::new(
                    PartitionedScheduler::new(user_route),
                    ResourceVectorPool::new(vec![1]),
                    unit_request(1),
                ))
            }),
        }
    }
}

/// Assemble the scheduler composition a [`PolicyConfig`] describes.
#[must_use]
pub fn build_policy(policy: &PolicyConfig) -> Box<dyn Scheduler<SimTask>> {
    match policy {
        PolicyConfig::Fifo => Box::new(FifoScheduler::new()),
        PolicyConfig::ThrottledFifo { capacity } => Box::new(ResourceManagedScheduler::new(
            FifoScheduler::new(),
            ResourceVectorPool::new(capacity.clone()),
            unit_request(capacity.len()),
        )),
        PolicyConfig::ThrottledRoundRobin { capacity } => Box::new(ResourceManagedScheduler::new(
            PartitionedScheduler::new(user_route),
            ResourceVectorPool::new(capacity.clone()),
            unit_request(capacity.len()),
        )),
        PolicyConfig::DualLane { threshold_ms } => {
            Box::new(PartitionedScheduler::new(lane_route(*threshold_ms)))
        }
    }
}

/// Expand workloads into submission-ordered tasks, interleaving users
/// round-robin so no user's whole batch arrives ahead of another's.
#[must_use]
pub fn build_tasks(workloads: &[WorkloadConfig]) -> Vec<SimTask> {
    let longest = workloads
        .iter()
        .map(|w| w.runtimes_ms.len())
        .max()
        .unwrap_or(0);
    let mut tasks = Vec::new();
    let mut identifier = 0;
    for slot in 0..longest {
        for workload in workloads {
            if let Some(&runtime_ms) = workload.runtimes_ms.get(slot) {
                identifier += 1;
                tasks.push(SimTask::new(identifier, workload.user_id, runtime_ms));
            }
        }
    }
    tasks
}

//! Priority-aware round-robin scheduler over caller-defined partitions.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::core::{Partitioner, Route, ScheduledTask, Scheduler, Task};

struct Partition<T> {
    key: String,
    scheduler: Box<dyn Scheduler<T>>,
    // Mirrors the identifiers held by `scheduler`, including any task a
    // resource-managed sub-scheduler has parked.
    members: HashSet<String>,
}

struct PriorityLevel<T> {
    priority: u32,
    partitions: Vec<Partition<T>>,
    cursor: usize,
}

impl<T> PriorityLevel<T> {
    fn new(priority: u32) -> Self {
        Self {
            priority,
            partitions: Vec::new(),
            cursor: 0,
        }
    }
}

/// A scheduler that routes tasks to an arbitrary number of sub-schedulers
/// and drains them highest priority first, round-robin within a priority.
///
/// The caller-supplied [`Partitioner`] decides, per task, the partition key,
/// the priority level, and how to build the partition's sub-scheduler on
/// first use. Levels are created lazily and kept in descending priority
/// order; partitions within a level are kept in insertion order and are
/// never discarded, so an emptied partition keeps its round-robin slot.
///
/// Insertion leaves the round-robin cursor alone; only a successful
/// retrieval advances it, to the partition after the one that served. A
/// burst of puts therefore cannot skew fairness between partitions.
pub struct PartitionedScheduler<T> {
    partitioner: Partitioner<T>,
    levels: Vec<PriorityLevel<T>>,
}

impl<T: Task> PartitionedScheduler<T> {
    /// Create a partitioned scheduler with the given routing function.
    pub fn new(partitioner: impl Fn(&T) -> Route<T> + 'static) -> Self {
        Self {
            partitioner: Box::new(partitioner),
            levels: Vec::new(),
        }
    }

    fn level_index(&mut self, priority: u32) -> usize {
        // Levels are strictly descending, so the first level at or below the
        // requested priority is either the match or the insertion point.
        match self.levels.iter().position(|l| l.priority <= priority) {
            Some(i) if self.levels[i].priority == priority => i,
            Some(i) => {
                debug!(priority, "materializing priority level");
                self.levels.insert(i, PriorityLevel::new(priority));
                i
            }
            None => {
                debug!(priority, "materializing priority level");
                self.levels.push(PriorityLevel::new(priority));
                self.levels.len() - 1
            }
        }
    }
}

impl<T: Task> Scheduler<T> for PartitionedScheduler<T> {
    fn contains(&self, task: &T) -> bool {
        self.levels.iter().any(|level| {
            level
                .partitions
                .iter()
                .any(|p| p.members.contains(task.id()))
        })
    }

    fn put(&mut self, task: T) {
        // Uniqueness is global across every level and partition.
        if self.contains(&task) {
            trace!(id = task.id(), "duplicate put ignored");
            return;
        }
        let route = (self.partitioner)(&task);
        let level_idx = self.level_index(route.priority);
        let level = &mut self.levels[level_idx];
        let idx = match level.partitions.iter().position(|p| p.key == route.key) {
            Some(i) => i,
            None => {
                debug!(key = %route.key, priority = route.priority, "materializing partition");
                level.partitions.push(Partition {
                    key: route.key,
                    scheduler: (route.factory)(),
                    members: HashSet::new(),
                });
                level.partitions.len() - 1
            }
        };
        let partition = &mut level.partitions[idx];
        partition.members.insert(task.id().to_owned());
        partition.scheduler.put(task);
    }

    fn next(&mut self) -> Option<ScheduledTask<T>> {
        for level in &mut self.levels {
            let count = level.partitions.len();
            for probe in 0..count {
                let idx = (level.cursor + probe) % count;
                if let Some(scheduled) = level.partitions[idx].scheduler.next() {
                    level.partitions[idx].members.remove(scheduled.id());
                    level.cursor = (idx + 1) % count;
                    return Some(scheduled);
                }
            }
        }
        None
    }

    fn size(&self) -> usize {
        self.levels
            .iter()
            .flat_map(|level| level.partitions.iter())
            .map(|p| p.scheduler.size())
            .sum()
    }

    fn remove(&mut self, id: &str) -> Option<T> {
        for level in &mut self.levels {
            for partition in &mut level.partitions {
                if let Some(task) = partition.scheduler.remove(id) {
                    partition.members.remove(id);
                    return Some(task);
                }
            }
        }
        None
    }
}

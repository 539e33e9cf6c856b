//! Simulation configuration structures.
//!
//! A [`SimConfig`] describes one or more scenarios: a scheduling policy plus
//! the per-user workloads to push through it. The library core is
//! constructor-driven and needs no configuration of its own; these types
//! exist for the simulation driver and for tests.

use serde::{Deserialize, Serialize};

use crate::core::ScheduleError;

/// Scheduling policy selection for a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyConfig {
    /// A single FIFO lane with no admission control.
    Fifo,
    /// A FIFO lane behind a resource throttle with the given capacity.
    ThrottledFifo {
        /// Pool capacity vector.
        capacity: Vec<u32>,
    },
    /// Round-robin across users, behind a resource throttle.
    ThrottledRoundRobin {
        /// Pool capacity vector.
        capacity: Vec<u32>,
    },
    /// Fast and slow lanes split at a runtime threshold. Each lane is its
    /// own single-slot throttle over a per-user round robin, so one
    /// long-running task cannot starve the short ones.
    DualLane {
        /// Tasks at or above this runtime are routed to the slow lane.
        threshold_ms: u32,
    },
}

/// Tasks submitted by a single user within a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Owning user.
    pub user_id: u32,
    /// Runtime of each task, in submission order.
    pub runtimes_ms: Vec<u32>,
}

/// One simulation scenario: a named policy and its workloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Scenario name, used in reports.
    pub name: String,
    /// The scheduling policy to assemble.
    pub policy: PolicyConfig,
    /// Per-user workloads, interleaved round-robin at submission.
    pub workloads: Vec<WorkloadConfig>,
}

/// Root simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Scenarios to run in order.
    pub scenarios: Vec<ScenarioConfig>,
}

impl PolicyConfig {
    fn validate(&self) -> Result<(), String> {
        match self {
            Self::Fifo => Ok(()),
            Self::ThrottledFifo { capacity } | Self::ThrottledRoundRobin { capacity } => {
                if capacity.is_empty() {
                    return Err("capacity vector must not be empty".into());
                }
                if capacity.iter().all(|&c| c == 0) {
                    return Err("capacity vector must have a nonzero component".into());
                }
                Ok(())
            }
            Self::DualLane { threshold_ms } => {
                if *threshold_ms == 0 {
                    return Err("threshold_ms must be greater than 0".into());
                }
                Ok(())
            }
        }
    }
}

impl ScenarioConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("scenario name must not be empty".into());
        }
        self.policy.validate()?;
        if self.workloads.is_empty() {
            return Err("at least one workload must be defined".into());
        }
        let mut seen = std::collections::HashSet::new();
        for workload in &self.workloads {
            if !seen.insert(workload.user_id) {
                return Err(format!("duplicate workload for user {}", workload.user_id));
            }
            if workload.runtimes_ms.is_empty() {
                return Err(format!("user {} has no tasks", workload.user_id));
            }
        }
        Ok(())
    }
}

impl Default for SimConfig {
    /// The canned demo scenarios: two users pushing ten tasks each through
    /// progressively fairer policies.
    fn default() -> Self {
        let short: Vec<u32> = (1..=10).collect();
        let long: Vec<u32> = (1..=10).map(|n| n * 10).collect();
        let two_users = |a: &[u32], b: &[u32]| {
            vec![
                WorkloadConfig {
                    user_id: 1,
                    runtimes_ms: a.to_vec(),
                },
                WorkloadConfig {
                    user_id: 2,
                    runtimes_ms: b.to_vec(),
                },
            ]
        };
        Self {
            scenarios: vec![
                ScenarioConfig {
                    name: "fifo, unlimited resources".to_string(),
                    policy: PolicyConfig::Fifo,
                    workloads: vec![WorkloadConfig {
                        user_id: 1,
                        runtimes_ms: short.clone(),
                    }],
                },
                ScenarioConfig {
                    name: "fifo, one task at a time".to_string(),
                    policy: PolicyConfig::ThrottledFifo { capacity: vec![1] },
                    workloads: two_users(&short, &short),
                },
                ScenarioConfig {
                    name: "round-robin over users, one task at a time".to_string(),
                    policy: PolicyConfig::ThrottledRoundRobin { capacity: vec![1] },
                    workloads: two_users(&short, &short),
                },
                ScenarioConfig {
                    name: "round-robin over users, two tasks at a time".to_string(),
                    policy: PolicyConfig::ThrottledRoundRobin { capacity: vec![2] },
                    workloads: two_users(&short, &long),
                },
                ScenarioConfig {
                    name: "fast/slow lanes, slow tasks quarantined".to_string(),
                    policy: PolicyConfig::DualLane { threshold_ms: 50 },
                    workloads: two_users(&short, &long),
                },
            ],
        }
    }
}

impl SimConfig {
    /// Validate all scenarios and ensure at least one exists.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.scenarios.is_empty() {
            return Err(ScheduleError::InvalidConfig(
                "at least one scenario must be defined".into(),
            ));
        }
        for scenario in &self.scenarios {
            scenario.validate().map_err(|e| {
                ScheduleError::InvalidConfig(format!("scenario `{}` invalid: {e}", scenario.name))
            })?;
        }
        Ok(())
    }

    /// Parse a simulation configuration from a JSON string and validate it.
    pub fn from_json_str(input: &str) -> Result<Self, ScheduleError> {
        let cfg: Self = serde_json::from_str(input)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

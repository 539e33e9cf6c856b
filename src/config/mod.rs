//! Configuration models for simulation workloads and policies.

pub mod sim;

pub use sim::{PolicyConfig, ScenarioConfig, SimConfig, WorkloadConfig};

//! Builders to construct scheduler compositions from configuration.

pub mod policy_builder;

pub use policy_builder::{build_policy, build_tasks, lane_route, unit_request, user_route};

//! Simulation driver: run scheduling scenarios and print latency reports.
//!
//! With no arguments the canned demo scenarios run; pass a path to a JSON
//! [`SimConfig`] to run your own.

use std::env;
use std::fs;

use anyhow::Context;
use taskweave::builders::{build_policy, build_tasks};
use taskweave::config::SimConfig;
use taskweave::core::AppResult;
use taskweave::sim::simulate;
use taskweave::util::init_tracing;

fn main() -> AppResult<()> {
    init_tracing();

    let config = match env::args().nth(1) {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("reading config from {path}"))?;
            SimConfig::from_json_str(&raw)?
        }
        None => SimConfig::default(),
    };

    for scenario in &config.scenarios {
        let mut scheduler = build_policy(&scenario.policy);
        let tasks = build_tasks(&scenario.workloads);
        tracing::debug!(scenario = %scenario.name, tasks = tasks.len(), "running scenario");

        let report = simulate(&mut scheduler, tasks);
        println!("*** {}", scenario.name);
        print!("{report}");
        println!();
    }

    Ok(())
}

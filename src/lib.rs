// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod trace;

use std::fs;

use anyhow::{Result, bail};
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::loader::{load_trace, load_workflow};
use crate::dag::{TaskGraph, schedule};
use crate::trace::validate_trace;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - workflow / trace loading
/// - graph construction + HEFT scheduling
/// - trace consistency validation
pub fn run(args: CliArgs) -> Result<()> {
    match args.command {
        Command::Schedule { workflow, output } => run_schedule(&workflow, output.as_deref()),
        Command::Validate { trace } => run_validate(&trace),
    }
}

fn run_schedule(workflow_path: &str, output: Option<&str>) -> Result<()> {
    let workflow = load_workflow(workflow_path)?;
    let graph = TaskGraph::from_workflow(&workflow)?;

    info!(
        tasks = graph.len(),
        processors = graph.num_processors(),
        "workflow loaded; running HEFT"
    );

    let sched = schedule(&graph)?;
    info!(makespan = sched.makespan(), "schedule complete");

    let json = serde_json::to_string_pretty(&sched)?;
    match output {
        Some(path) => {
            fs::write(path, json)?;
            debug!(path, "schedule written");
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn run_validate(trace_path: &str) -> Result<()> {
    let trace = load_trace(trace_path)?;
    let discrepancies = validate_trace(&trace)?;

    for d in &discrepancies {
        println!(
            "validation failed for {}: expected end {}, observed {}",
            d.task, d.expected_end, d.observed_end
        );
    }

    if discrepancies.is_empty() {
        info!("trace is consistent");
        Ok(())
    } else {
        bail!("trace validation found {} discrepancies", discrepancies.len());
    }
}

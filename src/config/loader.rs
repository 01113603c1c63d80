// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::{RawWorkflow, Workflow};
use crate::errors::Result;
use crate::trace::model::TraceFile;

/// Load a workflow file from a given path and return the raw `RawWorkflow`.
///
/// This only performs JSON deserialization; it does **not** perform
/// semantic validation (reference resolution, DAG correctness, etc.).
/// Use [`load_workflow`] for that.
pub fn load_raw_workflow(path: impl AsRef<Path>) -> Result<RawWorkflow> {
    let contents = fs::read_to_string(path.as_ref())?;
    let raw: RawWorkflow = serde_json::from_str(&contents)?;
    Ok(raw)
}

/// Load a workflow file from path and run validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads JSON.
/// - Checks for:
///   - unknown / self / duplicate parent references,
///   - cost vectors not matching the processor count,
///   - negative costs,
///   - DAG cycles.
pub fn load_workflow(path: impl AsRef<Path>) -> Result<Workflow> {
    let raw = load_raw_workflow(&path)?;
    let workflow = Workflow::try_from(raw)?;
    Ok(workflow)
}

/// Load an execution trace (YAML) for consistency validation.
///
/// Only deserializes; edge-key and record checks happen inside the
/// validator itself, which reports structural problems as errors and
/// duration mismatches as a collected report.
pub fn load_trace(path: impl AsRef<Path>) -> Result<TraceFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    let trace: TraceFile = serde_yaml::from_str(&contents)?;
    Ok(trace)
}

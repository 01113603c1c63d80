// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WfschedError {
    /// Structural problem in the workflow input: unknown task reference,
    /// cycle, or an incomplete computation-cost table. Aborts the run
    /// before any scheduling happens.
    #[error("Malformed workflow graph: {0}")]
    MalformedGraph(String),

    #[error("Processor set is empty; cannot schedule")]
    EmptyProcessorSet,

    /// Internal invariant violation: a task was visited before all of its
    /// predecessors had schedule entries. With a validated DAG and rank
    /// ordering this is unreachable; hitting it signals a scheduler bug.
    #[error("Task '{task}' scheduled before its predecessor '{predecessor}'")]
    UnscheduledPredecessor { task: String, predecessor: String },

    #[error("Trace has no compute record for task '{0}'")]
    MissingComputeRecord(String),

    #[error("Malformed trace edge key '{0}' (expected exactly one '->')")]
    MalformedEdgeKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, WfschedError>;

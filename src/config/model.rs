// src/config/model.rs

//! Serde models for the workflow input document.
//!
//! A workflow file is a JSON document describing the task DAG:
//!
//! ```json
//! {
//!   "processors": 2,
//!   "tasks": [
//!     { "name": "A", "costs": [14.0, 16.0], "parents": [] },
//!     { "name": "B", "costs": [13.0, 19.0],
//!       "parents": [ { "name": "A", "comm_cost": 18.0 } ] }
//!   ]
//! }
//! ```
//!
//! Each task lists its per-processor computation costs and its parents;
//! the communication cost of an edge lives on the child's parent
//! reference. Children lists are derived, not declared.

use serde::Deserialize;

/// Reference from a task to one of its parents, carrying the
/// communication cost of the edge `parent -> task`.
///
/// The cost is the transfer delay paid only when the two tasks end up on
/// different processors; co-located tasks communicate for free.
#[derive(Debug, Clone, Deserialize)]
pub struct ParentRef {
    pub name: String,
    #[serde(default)]
    pub comm_cost: f64,
}

/// One task as it appears in the workflow file.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskSpec {
    pub name: String,
    /// Per-processor computation costs; length must equal the workflow's
    /// `processors` count.
    pub costs: Vec<f64>,
    #[serde(default)]
    pub parents: Vec<ParentRef>,
}

/// Workflow document straight out of deserialization, before semantic
/// validation.
///
/// Use `Workflow::try_from` (see [`crate::config::validate`]) to obtain a
/// validated [`Workflow`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawWorkflow {
    /// Number of processors in the target platform.
    pub processors: usize,
    pub tasks: Vec<TaskSpec>,
}

/// A validated workflow.
///
/// Guarantees: task names are unique, every parent reference resolves to
/// an earlier-declared-or-later task (no self edges, no duplicates), every
/// cost vector has exactly `processors` non-negative entries, and the
/// dependency graph is acyclic.
#[derive(Debug, Clone)]
pub struct Workflow {
    processors: usize,
    tasks: Vec<TaskSpec>,
}

impl Workflow {
    /// Construct without re-validating. Only `config::validate` should
    /// call this.
    pub(crate) fn new_unchecked(processors: usize, tasks: Vec<TaskSpec>) -> Self {
        Self { processors, tasks }
    }

    pub fn processors(&self) -> usize {
        self.processors
    }

    /// Tasks in file (insertion) order. This order is the deterministic
    /// secondary key for rank ties during scheduling.
    pub fn tasks(&self) -> &[TaskSpec] {
        &self.tasks
    }
}

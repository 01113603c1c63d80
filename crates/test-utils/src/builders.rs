#![allow(dead_code)]

use wfsched::config::{ParentRef, RawWorkflow, TaskSpec, Workflow};
use wfsched::trace::{Interval, TraceFile};

/// Builder for `Workflow` to simplify test setup.
///
/// Tasks are added in insertion order, which is also the deterministic
/// rank tie-break order used by the scheduler.
pub struct WorkflowBuilder {
    raw: RawWorkflow,
}

impl WorkflowBuilder {
    pub fn new(processors: usize) -> Self {
        Self {
            raw: RawWorkflow {
                processors,
                tasks: Vec::new(),
            },
        }
    }

    /// Add a task with no parents.
    pub fn task(self, name: &str, costs: &[f64]) -> Self {
        self.task_with_parents(name, costs, &[])
    }

    /// Add a task with `(parent name, communication cost)` edges.
    pub fn task_with_parents(mut self, name: &str, costs: &[f64], parents: &[(&str, f64)]) -> Self {
        self.raw.tasks.push(TaskSpec {
            name: name.to_string(),
            costs: costs.to_vec(),
            parents: parents
                .iter()
                .map(|(p, comm_cost)| ParentRef {
                    name: p.to_string(),
                    comm_cost: *comm_cost,
                })
                .collect(),
        });
        self
    }

    pub fn build(self) -> Workflow {
        Workflow::try_from(self.raw).expect("Failed to build valid workflow from builder")
    }

    /// Raw document, for tests exercising validation failures.
    pub fn build_raw(self) -> RawWorkflow {
        self.raw
    }
}

/// Builder for `TraceFile`.
pub struct TraceBuilder {
    trace: TraceFile,
}

impl TraceBuilder {
    pub fn new() -> Self {
        Self {
            trace: TraceFile::default(),
        }
    }

    /// Record a read interval for the edge key `src->dst` (or any raw key,
    /// for malformed-key tests).
    pub fn read(mut self, key: &str, start: i64, end: i64) -> Self {
        self.trace
            .comm_name_read_offsets
            .insert(key.to_string(), Interval::new(start, end));
        self
    }

    pub fn write(mut self, key: &str, start: i64, end: i64) -> Self {
        self.trace
            .comm_name_write_offsets
            .insert(key.to_string(), Interval::new(start, end));
        self
    }

    pub fn compute(mut self, task: &str, start: i64, end: i64) -> Self {
        self.trace
            .exec_name_compute_offsets
            .insert(task.to_string(), Interval::new(start, end));
        self
    }

    pub fn total(mut self, task: &str, start: i64, end: i64) -> Self {
        self.trace
            .exec_name_total_offsets
            .insert(task.to_string(), Interval::new(start, end));
        self
    }

    pub fn build(self) -> TraceFile {
        self.trace
    }
}

impl Default for TraceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

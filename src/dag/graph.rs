// src/dag/graph.rs

//! Arena representation of the task DAG.
//!
//! Tasks are addressed by dense `TaskId` indices assigned in workflow
//! (insertion) order; adjacency lists carry the communication cost on each
//! edge. String names only appear at the boundary (construction, lookups,
//! reporting) so the EST/EFT hot loop never hashes a string.

use std::collections::HashMap;

use crate::config::model::Workflow;
use crate::errors::{Result, WfschedError};

/// Dense index of a task within a [`TaskGraph`].
pub type TaskId = usize;

/// Internal node structure: name, per-processor costs and adjacency.
#[derive(Debug, Clone)]
struct TaskNode {
    name: String,
    costs: Vec<f64>,
    /// Outgoing edges as `(successor, communication cost)`.
    succs: Vec<(TaskId, f64)>,
    /// Incoming edges as `(predecessor, communication cost)`.
    preds: Vec<(TaskId, f64)>,
}

/// Immutable in-memory DAG built from a validated [`Workflow`].
///
/// Construction caches a topological order (Kahn pass over the arena);
/// the graph is read-only for the duration of a scheduling run.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    nodes: Vec<TaskNode>,
    num_processors: usize,
    topo_order: Vec<TaskId>,
    name_to_id: HashMap<String, TaskId>,
}

impl TaskGraph {
    /// Build the arena from a validated workflow.
    ///
    /// Validation already guarantees resolvable references and acyclicity,
    /// so the topological sort failing here would be a bug; it is still
    /// surfaced as [`WfschedError::MalformedGraph`] rather than assumed away.
    pub fn from_workflow(workflow: &Workflow) -> Result<Self> {
        let specs = workflow.tasks();

        let mut name_to_id: HashMap<String, TaskId> = HashMap::with_capacity(specs.len());
        for (id, spec) in specs.iter().enumerate() {
            name_to_id.insert(spec.name.clone(), id);
        }

        let mut nodes: Vec<TaskNode> = specs
            .iter()
            .map(|spec| TaskNode {
                name: spec.name.clone(),
                costs: spec.costs.clone(),
                succs: Vec::new(),
                preds: Vec::new(),
            })
            .collect();

        for (id, spec) in specs.iter().enumerate() {
            for parent in spec.parents.iter() {
                let parent_id = *name_to_id.get(&parent.name).ok_or_else(|| {
                    WfschedError::MalformedGraph(format!(
                        "task '{}' references unknown parent '{}'",
                        spec.name, parent.name
                    ))
                })?;
                nodes[parent_id].succs.push((id, parent.comm_cost));
                nodes[id].preds.push((parent_id, parent.comm_cost));
            }
        }

        let topo_order = kahn_topological_order(&nodes)?;

        Ok(Self {
            nodes,
            num_processors: workflow.processors(),
            topo_order,
            name_to_id,
        })
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn num_processors(&self) -> usize {
        self.num_processors
    }

    pub fn name(&self, task: TaskId) -> &str {
        &self.nodes[task].name
    }

    pub fn task_by_name(&self, name: &str) -> Option<TaskId> {
        self.name_to_id.get(name).copied()
    }

    /// Outgoing edges of a task as `(successor, communication cost)`.
    pub fn successors(&self, task: TaskId) -> &[(TaskId, f64)] {
        &self.nodes[task].succs
    }

    /// Incoming edges of a task as `(predecessor, communication cost)`.
    pub fn predecessors(&self, task: TaskId) -> &[(TaskId, f64)] {
        &self.nodes[task].preds
    }

    pub fn computation_cost(&self, task: TaskId, processor: usize) -> f64 {
        self.nodes[task].costs[processor]
    }

    /// Communication cost of the edge `src -> dst`, or `None` if there is
    /// no such edge.
    pub fn communication_cost(&self, src: TaskId, dst: TaskId) -> Option<f64> {
        self.nodes[src]
            .succs
            .iter()
            .find(|(s, _)| *s == dst)
            .map(|(_, cost)| *cost)
    }

    /// Arithmetic mean of the per-processor computation costs.
    ///
    /// This average (not the minimum) is the computation term of the
    /// upward rank, per the classic HEFT definition.
    pub fn avg_computation_cost(&self, task: TaskId) -> f64 {
        let costs = &self.nodes[task].costs;
        costs.iter().sum::<f64>() / costs.len() as f64
    }

    pub fn is_root(&self, task: TaskId) -> bool {
        self.nodes[task].preds.is_empty()
    }

    pub fn is_leaf(&self, task: TaskId) -> bool {
        self.nodes[task].succs.is_empty()
    }

    /// Cached topological order (producers before consumers).
    pub fn topological_order(&self) -> &[TaskId] {
        &self.topo_order
    }
}

/// Kahn topological sort over the arena.
///
/// Ready tasks are processed in ascending `TaskId` order, so the result is
/// deterministic for a given workflow.
fn kahn_topological_order(nodes: &[TaskNode]) -> Result<Vec<TaskId>> {
    let mut in_degree: Vec<usize> = nodes.iter().map(|n| n.preds.len()).collect();

    let mut queue: Vec<TaskId> = (0..nodes.len()).filter(|&id| in_degree[id] == 0).collect();
    let mut order: Vec<TaskId> = Vec::with_capacity(nodes.len());

    let mut head = 0;
    while head < queue.len() {
        let id = queue[head];
        head += 1;
        order.push(id);

        for &(succ, _) in nodes[id].succs.iter() {
            in_degree[succ] -= 1;
            if in_degree[succ] == 0 {
                queue.push(succ);
            }
        }
    }

    if order.len() != nodes.len() {
        let stuck = (0..nodes.len())
            .find(|&id| in_degree[id] > 0)
            .map(|id| nodes[id].name.clone())
            .unwrap_or_default();
        return Err(WfschedError::MalformedGraph(format!(
            "cycle detected in task DAG involving task '{stuck}'"
        )));
    }

    Ok(order)
}

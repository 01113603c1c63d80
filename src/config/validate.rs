// src/config/validate.rs

use std::collections::HashSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::config::model::{RawWorkflow, Workflow};
use crate::errors::{Result, WfschedError};

impl TryFrom<RawWorkflow> for Workflow {
    type Error = crate::errors::WfschedError;

    fn try_from(raw: RawWorkflow) -> std::result::Result<Self, Self::Error> {
        validate_raw_workflow(&raw)?;
        Ok(Workflow::new_unchecked(raw.processors, raw.tasks))
    }
}

fn validate_raw_workflow(raw: &RawWorkflow) -> Result<()> {
    ensure_has_processors(raw)?;
    validate_task_names(raw)?;
    validate_cost_tables(raw)?;
    validate_parent_references(raw)?;
    validate_dag(raw)?;
    Ok(())
}

fn ensure_has_processors(raw: &RawWorkflow) -> Result<()> {
    if raw.processors == 0 {
        return Err(WfschedError::MalformedGraph(
            "workflow declares zero processors".to_string(),
        ));
    }
    Ok(())
}

fn validate_task_names(raw: &RawWorkflow) -> Result<()> {
    let mut seen = HashSet::new();
    for task in raw.tasks.iter() {
        if !seen.insert(task.name.as_str()) {
            return Err(WfschedError::MalformedGraph(format!(
                "duplicate task name '{}'",
                task.name
            )));
        }
    }
    Ok(())
}

fn validate_cost_tables(raw: &RawWorkflow) -> Result<()> {
    for task in raw.tasks.iter() {
        if task.costs.len() != raw.processors {
            return Err(WfschedError::MalformedGraph(format!(
                "task '{}' has {} computation costs but the workflow declares {} processors",
                task.name,
                task.costs.len(),
                raw.processors
            )));
        }
        if let Some(cost) = task.costs.iter().find(|c| **c < 0.0) {
            return Err(WfschedError::MalformedGraph(format!(
                "task '{}' has negative computation cost {}",
                task.name, cost
            )));
        }
    }
    Ok(())
}

fn validate_parent_references(raw: &RawWorkflow) -> Result<()> {
    let names: HashSet<&str> = raw.tasks.iter().map(|t| t.name.as_str()).collect();

    for task in raw.tasks.iter() {
        let mut seen_parents = HashSet::new();
        for parent in task.parents.iter() {
            if !names.contains(parent.name.as_str()) {
                return Err(WfschedError::MalformedGraph(format!(
                    "task '{}' has unknown parent '{}'",
                    task.name, parent.name
                )));
            }
            if parent.name == task.name {
                return Err(WfschedError::MalformedGraph(format!(
                    "task '{}' cannot be its own parent",
                    task.name
                )));
            }
            if !seen_parents.insert(parent.name.as_str()) {
                return Err(WfschedError::MalformedGraph(format!(
                    "task '{}' lists parent '{}' more than once",
                    task.name, parent.name
                )));
            }
            if parent.comm_cost < 0.0 {
                return Err(WfschedError::MalformedGraph(format!(
                    "edge '{}' -> '{}' has negative communication cost {}",
                    parent.name, task.name, parent.comm_cost
                )));
            }
        }
    }
    Ok(())
}

fn validate_dag(raw: &RawWorkflow) -> Result<()> {
    // Build a simple petgraph graph from the tasks and their parents.
    //
    // Edge direction: parent -> task, so a topological sort orders
    // producers before consumers. The sort fails iff there is a cycle.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for task in raw.tasks.iter() {
        graph.add_node(task.name.as_str());
    }

    for task in raw.tasks.iter() {
        for parent in task.parents.iter() {
            graph.add_edge(parent.name.as_str(), task.name.as_str(), ());
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => {
            let node = cycle.node_id();
            Err(WfschedError::MalformedGraph(format!(
                "cycle detected in task DAG involving task '{}'",
                node
            )))
        }
    }
}

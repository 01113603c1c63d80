// tests/graph_validation.rs

use std::io::Write;

use tempfile::NamedTempFile;
use wfsched::config::{Workflow, load_workflow};
use wfsched::errors::WfschedError;
use wfsched_test_utils::builders::WorkflowBuilder;

fn write_workflow(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_dag_cycle_returns_structured_error() {
    let file = write_workflow(
        r#"{
  "processors": 1,
  "tasks": [
    { "name": "A", "costs": [1.0], "parents": [ { "name": "B", "comm_cost": 0.0 } ] },
    { "name": "B", "costs": [1.0], "parents": [ { "name": "A", "comm_cost": 0.0 } ] }
  ]
}"#,
    );

    let result = load_workflow(file.path());

    match result {
        Err(WfschedError::MalformedGraph(msg)) => {
            assert!(msg.contains("cycle detected"));
            assert!(msg.contains("A") || msg.contains("B"));
        }
        Err(e) => panic!("Expected MalformedGraph error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_unknown_parent_returns_structured_error() {
    let file = write_workflow(
        r#"{
  "processors": 1,
  "tasks": [
    { "name": "A", "costs": [1.0], "parents": [ { "name": "NonExistent", "comm_cost": 2.0 } ] }
  ]
}"#,
    );

    let result = load_workflow(file.path());

    match result {
        Err(WfschedError::MalformedGraph(msg)) => {
            assert!(msg.contains("unknown parent"));
            assert!(msg.contains("NonExistent"));
        }
        Err(e) => panic!("Expected MalformedGraph error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_cost_table_arity_mismatch_rejected() {
    let file = write_workflow(
        r#"{
  "processors": 2,
  "tasks": [
    { "name": "A", "costs": [1.0], "parents": [] }
  ]
}"#,
    );

    let result = load_workflow(file.path());

    match result {
        Err(WfschedError::MalformedGraph(msg)) => {
            assert!(msg.contains("2 processors"));
            assert!(msg.contains("A"));
        }
        Err(e) => panic!("Expected MalformedGraph error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_zero_processors_rejected() {
    let raw = WorkflowBuilder::new(0).task("A", &[]).build_raw();

    match Workflow::try_from(raw) {
        Err(WfschedError::MalformedGraph(msg)) => {
            assert!(msg.contains("zero processors"));
        }
        other => panic!("Expected MalformedGraph error, got: {:?}", other),
    }
}

#[test]
fn test_duplicate_task_name_rejected() {
    let raw = WorkflowBuilder::new(1)
        .task("A", &[1.0])
        .task("A", &[2.0])
        .build_raw();

    match Workflow::try_from(raw) {
        Err(WfschedError::MalformedGraph(msg)) => {
            assert!(msg.contains("duplicate task name"));
        }
        other => panic!("Expected MalformedGraph error, got: {:?}", other),
    }
}

#[test]
fn test_self_parent_rejected() {
    let raw = WorkflowBuilder::new(1)
        .task_with_parents("A", &[1.0], &[("A", 0.0)])
        .build_raw();

    match Workflow::try_from(raw) {
        Err(WfschedError::MalformedGraph(msg)) => {
            assert!(msg.contains("own parent"));
        }
        other => panic!("Expected MalformedGraph error, got: {:?}", other),
    }
}

#[test]
fn test_negative_cost_rejected() {
    let raw = WorkflowBuilder::new(2).task("A", &[1.0, -3.0]).build_raw();

    match Workflow::try_from(raw) {
        Err(WfschedError::MalformedGraph(msg)) => {
            assert!(msg.contains("negative computation cost"));
        }
        other => panic!("Expected MalformedGraph error, got: {:?}", other),
    }
}

#[test]
fn test_valid_workflow_loads() {
    let file = write_workflow(
        r#"{
  "processors": 2,
  "tasks": [
    { "name": "A", "costs": [14.0, 16.0], "parents": [] },
    { "name": "B", "costs": [13.0, 19.0], "parents": [ { "name": "A", "comm_cost": 18.0 } ] }
  ]
}"#,
    );

    let workflow = load_workflow(file.path()).unwrap();
    assert_eq!(workflow.processors(), 2);
    assert_eq!(workflow.tasks().len(), 2);
    assert_eq!(workflow.tasks()[1].parents[0].comm_cost, 18.0);
}

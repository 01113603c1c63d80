// tests/trace_validator.rs

use std::collections::HashSet;

use wfsched::dag::{Schedule, TaskGraph, schedule};
use wfsched::errors::WfschedError;
use wfsched::trace::{TaskRole, classify_role, validate_trace};
use wfsched_test_utils::builders::{TraceBuilder, WorkflowBuilder};
use wfsched_test_utils::init_tracing;

#[test]
fn test_key_without_separator_is_malformed() {
    init_tracing();
    let trace = TraceBuilder::new()
        .read("TaskA-TaskB", 0, 5)
        .compute("TaskB", 0, 5)
        .total("TaskB", 0, 10)
        .build();

    match validate_trace(&trace) {
        Err(WfschedError::MalformedEdgeKey(key)) => assert_eq!(key, "TaskA-TaskB"),
        other => panic!("Expected MalformedEdgeKey, got: {:?}", other),
    }
}

#[test]
fn test_key_with_two_separators_is_malformed() {
    init_tracing();
    let trace = TraceBuilder::new().write("A->B->C", 0, 5).build();

    match validate_trace(&trace) {
        Err(WfschedError::MalformedEdgeKey(key)) => assert_eq!(key, "A->B->C"),
        other => panic!("Expected MalformedEdgeKey, got: {:?}", other),
    }
}

#[test]
fn test_key_with_empty_side_is_malformed() {
    init_tracing();
    // An empty source or destination must not flow into role
    // classification as a phantom task name.
    for key in ["A->", "->B", "->"] {
        let trace = TraceBuilder::new()
            .read(key, 0, 5)
            .compute("A", 0, 5)
            .total("A", 0, 5)
            .build();

        match validate_trace(&trace) {
            Err(WfschedError::MalformedEdgeKey(bad)) => assert_eq!(bad, key),
            other => panic!("Expected MalformedEdgeKey for {key:?}, got: {:?}", other),
        }
    }
}

#[test]
fn test_malformed_key_fails_even_when_no_task_reads_it() {
    init_tracing();
    // The bad key belongs to no validated task; it must still fail the
    // run rather than be silently skipped.
    let trace = TraceBuilder::new()
        .read("broken", 0, 1)
        .compute("X", 0, 2)
        .total("X", 0, 2)
        .build();

    assert!(matches!(
        validate_trace(&trace),
        Err(WfschedError::MalformedEdgeKey(_))
    ));
}

#[test]
fn test_missing_compute_record_is_fatal() {
    init_tracing();
    let trace = TraceBuilder::new().total("A", 0, 10).build();

    match validate_trace(&trace) {
        Err(WfschedError::MissingComputeRecord(task)) => assert_eq!(task, "A"),
        other => panic!("Expected MissingComputeRecord, got: {:?}", other),
    }
}

#[test]
fn test_root_task_uses_only_compute_and_write_terms() {
    init_tracing();
    // Root task: compute 0->5, one outgoing write of duration 3.
    // Expected end = 0 + 5 + 3 = 8; the recorded 10 must be reported.
    let trace = TraceBuilder::new()
        .write("R->X", 0, 3)
        .compute("R", 0, 5)
        .total("R", 0, 10)
        .build();

    let report = validate_trace(&trace).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].task, "R");
    assert_eq!(report[0].expected_end, 8);
    assert_eq!(report[0].observed_end, 10);
}

#[test]
fn test_consistent_root_task_passes() {
    init_tracing();
    let trace = TraceBuilder::new()
        .write("R->X", 0, 3)
        .compute("R", 0, 5)
        .total("R", 0, 8)
        .build();

    assert!(validate_trace(&trace).unwrap().is_empty());
}

#[test]
fn test_end_task_uses_max_read_duration() {
    init_tracing();
    let trace = TraceBuilder::new()
        .read("A->E", 27, 36) // duration 9
        .read("B->E", 30, 34) // duration 4
        .compute("E", 36, 44)
        .total("E", 27, 44) // 27 + 9 + 8 = 44
        .build();

    assert!(validate_trace(&trace).unwrap().is_empty());
}

#[test]
fn test_all_mismatches_reported_in_one_pass() {
    init_tracing();
    let trace = TraceBuilder::new()
        .compute("A", 0, 5)
        .total("A", 0, 99)
        .compute("B", 0, 7)
        .total("B", 0, 99)
        .build();

    let report = validate_trace(&trace).unwrap();
    assert_eq!(report.len(), 2);
    assert_eq!(report[0].task, "A");
    assert_eq!(report[0].expected_end, 5);
    assert_eq!(report[1].task, "B");
    assert_eq!(report[1].expected_end, 7);
}

#[test]
fn test_isolated_task_classifies_as_root() {
    init_tracing();
    let empty = HashSet::new();
    assert_eq!(classify_role("only", &empty, &empty), TaskRole::Root);

    // No reads, no writes: total must equal the compute duration alone.
    let trace = TraceBuilder::new()
        .compute("only", 0, 3)
        .total("only", 0, 3)
        .build();
    assert!(validate_trace(&trace).unwrap().is_empty());
}

/// Decompose a schedule into a consistent trace: each edge's read and
/// write intervals last exactly the incurred transfer delay (zero when
/// co-located), compute intervals are the scheduled intervals, and each
/// total is start + max_read + compute + max_write.
fn trace_from_schedule(graph: &TaskGraph, sched: &Schedule) -> wfsched::trace::TraceFile {
    let mut builder = TraceBuilder::new();

    for task in 0..graph.len() {
        let entry = sched.entry(task);

        let mut read_term = 0i64;
        for &(pred, comm_cost) in graph.predecessors(task) {
            let pred_entry = sched.entry(pred);
            let incurred = if pred_entry.processor == entry.processor {
                0i64
            } else {
                comm_cost as i64
            };
            let key = format!("{}->{}", pred_entry.task, entry.task);
            builder = builder
                .read(&key, 0, incurred)
                .write(&key, 0, incurred);
            read_term = read_term.max(incurred);
        }

        let start = entry.start as i64;
        let compute = (entry.finish - entry.start) as i64;
        builder = builder.compute(&entry.task, start, start + compute);

        let mut write_term = 0i64;
        for &(succ, comm_cost) in graph.successors(task) {
            let succ_entry = sched.entry(succ);
            let incurred = if succ_entry.processor == entry.processor {
                0i64
            } else {
                comm_cost as i64
            };
            write_term = write_term.max(incurred);
        }

        // Roots pay no read term, end tasks no write term; for everything
        // else the decomposition above matches the validator's model.
        let read_term = if graph.is_root(task) { 0 } else { read_term };
        let write_term = if graph.is_leaf(task) { 0 } else { write_term };

        builder = builder.total(&entry.task, start, start + read_term + compute + write_term);
    }

    builder.build()
}

#[test]
fn test_schedule_derived_trace_validates_cleanly() {
    init_tracing();
    let workflow = WorkflowBuilder::new(2)
        .task("A", &[14.0, 16.0])
        .task_with_parents("B", &[13.0, 19.0], &[("A", 18.0)])
        .task_with_parents("C", &[11.0, 13.0], &[("A", 0.0)])
        .task_with_parents("D", &[13.0, 8.0], &[("B", 9.0), ("C", 11.0)])
        .build();
    let graph = TaskGraph::from_workflow(&workflow).unwrap();
    let sched = schedule(&graph).unwrap();

    let trace = trace_from_schedule(&graph, &sched);
    let report = validate_trace(&trace).unwrap();

    assert!(report.is_empty(), "unexpected discrepancies: {report:?}");
}

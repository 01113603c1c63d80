// src/trace/validator.rs

//! Timing-consistency validation of an execution trace.
//!
//! For each task with a recorded total interval, the validator re-derives
//! the expected duration from the dependency data:
//!
//! ```text
//! expected = max_read_duration + compute_duration + max_write_duration
//! ```
//!
//! where the read term is elided for roots and the write term for end
//! tasks, and checks `total.start + expected == total.end` exactly.
//! Duration mismatches are collected, not fatal: a validation pass reports
//! every failing task. Structural problems (malformed edge keys, missing
//! compute records) abort the run.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::errors::{Result, WfschedError};
use crate::trace::model::{Interval, TraceFile};

/// Topological role of a task, inferred from the trace alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskRole {
    /// Never the destination of a read edge.
    Root,
    /// Both reads in and writes out.
    Intermediate,
    /// Never the source of a write edge.
    End,
}

/// One failed task check: the recorded total end disagrees with the
/// model-predicted end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discrepancy {
    pub task: String,
    pub expected_end: i64,
    pub observed_end: i64,
}

/// Classify a task from the read-destination and write-source name sets.
///
/// Root is checked before end, matching the original validator: a task
/// with neither reads nor writes (a single-task trace) classifies as
/// `Root`, and both its read and write terms come out zero anyway.
pub fn classify_role(
    task: &str,
    read_destinations: &HashSet<&str>,
    write_sources: &HashSet<&str>,
) -> TaskRole {
    if !read_destinations.contains(task) {
        TaskRole::Root
    } else if !write_sources.contains(task) {
        TaskRole::End
    } else {
        TaskRole::Intermediate
    }
}

/// Validate every task in the trace's total-offset map.
///
/// Returns the list of discrepancies in task-name order; an empty list
/// means the trace is consistent.
pub fn validate_trace(trace: &TraceFile) -> Result<Vec<Discrepancy>> {
    // Parse all edge keys upfront so a malformed key fails the run even
    // when no task check would have touched it.
    let read_edges = parse_edges(&trace.comm_name_read_offsets)?;
    let write_edges = parse_edges(&trace.comm_name_write_offsets)?;

    let read_destinations: HashSet<&str> = read_edges.iter().map(|e| e.dst).collect();
    let write_sources: HashSet<&str> = write_edges.iter().map(|e| e.src).collect();

    let mut discrepancies = Vec::new();

    for (task, total) in trace.exec_name_total_offsets.iter() {
        let role = classify_role(task, &read_destinations, &write_sources);

        let read_term = match role {
            TaskRole::Root => 0,
            TaskRole::Intermediate | TaskRole::End => max_duration(
                read_edges.iter().filter(|e| e.dst == task.as_str()),
            ),
        };

        let compute = trace
            .exec_name_compute_offsets
            .get(task)
            .ok_or_else(|| WfschedError::MissingComputeRecord(task.clone()))?;

        let write_term = match role {
            TaskRole::End => 0,
            TaskRole::Root | TaskRole::Intermediate => max_duration(
                write_edges.iter().filter(|e| e.src == task.as_str()),
            ),
        };

        let expected_end = total.start + read_term + compute.duration() + write_term;

        trace!(
            task = %task,
            ?role,
            read_term,
            compute_term = compute.duration(),
            write_term,
            expected_end,
            observed_end = total.end,
            "task checked"
        );

        if expected_end != total.end {
            discrepancies.push(Discrepancy {
                task: task.clone(),
                expected_end,
                observed_end: total.end,
            });
        }
    }

    debug!(
        tasks = trace.exec_name_total_offsets.len(),
        failed = discrepancies.len(),
        "trace validation pass complete"
    );

    Ok(discrepancies)
}

struct TraceEdge<'a> {
    src: &'a str,
    dst: &'a str,
    interval: Interval,
}

/// Split every `source->destination` key of a communication map.
///
/// A key with anything other than exactly one `->` separator, or with an
/// empty side, is a [`WfschedError::MalformedEdgeKey`]. An empty side
/// would otherwise leak a phantom task name into role classification.
fn parse_edges(
    offsets: &std::collections::BTreeMap<String, Interval>,
) -> Result<Vec<TraceEdge<'_>>> {
    let mut edges = Vec::with_capacity(offsets.len());

    for (key, interval) in offsets.iter() {
        let (src, dst) = key
            .split_once("->")
            .ok_or_else(|| WfschedError::MalformedEdgeKey(key.clone()))?;
        if dst.contains("->") || src.is_empty() || dst.is_empty() {
            return Err(WfschedError::MalformedEdgeKey(key.clone()));
        }
        edges.push(TraceEdge {
            src,
            dst,
            interval: *interval,
        });
    }

    Ok(edges)
}

/// Longest interval duration among the given edges; 0 when there are none
/// (absence of matching edges is not an error).
fn max_duration<'a, 'b: 'a>(edges: impl Iterator<Item = &'a TraceEdge<'b>>) -> i64 {
    edges.map(|e| e.interval.duration()).max().unwrap_or(0)
}

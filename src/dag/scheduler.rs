// src/dag/scheduler.rs

//! Non-insertion HEFT list scheduling.
//!
//! Tasks are ordered by descending upward rank (ties broken by insertion
//! index) and each is placed on the processor with the earliest finish
//! time, accounting for cross-processor communication delay. Processor
//! availability only ever advances: idle gaps before the availability
//! time are never backfilled. This is a documented policy choice, not a
//! missing feature; the insertion-based HEFT variant is a different
//! algorithm.

use tracing::{debug, info};

use crate::dag::graph::{TaskGraph, TaskId};
use crate::dag::rank::upward_ranks;
use crate::dag::schedule::{Schedule, ScheduleEntry};
use crate::errors::{Result, WfschedError};

/// Schedule every task in `graph` onto its processor set.
///
/// Deterministic: the same graph and cost table always produce the same
/// schedule. Rank ties resolve by insertion index; EFT ties resolve by
/// lowest processor index.
pub fn schedule(graph: &TaskGraph) -> Result<Schedule> {
    let num_processors = graph.num_processors();
    if num_processors == 0 {
        return Err(WfschedError::EmptyProcessorSet);
    }

    let ranks = upward_ranks(graph);

    let mut order: Vec<TaskId> = (0..graph.len()).collect();
    order.sort_by(|a, b| ranks[*b].total_cmp(&ranks[*a]).then(a.cmp(b)));

    debug!(tasks = order.len(), num_processors, "rank ordering computed");

    let mut availability = vec![0.0f64; num_processors];
    let mut entries: Vec<Option<ScheduleEntry>> = vec![None; graph.len()];
    let mut lanes: Vec<Vec<TaskId>> = vec![Vec::new(); num_processors];

    for &task in order.iter() {
        // Rank ordering places predecessors first on any valid DAG, but
        // that is an invariant to verify, not assume.
        let pred_placements = placed_predecessors(graph, &entries, task)?;

        let mut best: Option<(usize, f64, f64)> = None;

        for proc in 0..num_processors {
            let mut est = availability[proc];
            for &(finish, pred_proc, comm_cost) in pred_placements.iter() {
                let data_ready = if pred_proc == proc {
                    finish
                } else {
                    finish + comm_cost
                };
                est = est.max(data_ready);
            }

            let eft = est + graph.computation_cost(task, proc);

            // Strict `<` keeps the lowest processor index on EFT ties.
            let better = match best {
                None => true,
                Some((_, _, best_eft)) => eft < best_eft,
            };
            if better {
                best = Some((proc, est, eft));
            }
        }

        let (proc, start, finish) = best.ok_or(WfschedError::EmptyProcessorSet)?;

        debug!(
            task = %graph.name(task),
            rank = ranks[task],
            processor = proc,
            start,
            finish,
            "task placed"
        );

        entries[task] = Some(ScheduleEntry {
            task: graph.name(task).to_string(),
            processor: proc,
            start,
            finish,
        });
        availability[proc] = finish;
        lanes[proc].push(task);
    }

    let entries: Vec<ScheduleEntry> = entries
        .into_iter()
        .enumerate()
        .map(|(id, entry)| {
            entry.ok_or_else(|| {
                WfschedError::MalformedGraph(format!(
                    "task '{}' was never scheduled",
                    graph.name(id)
                ))
            })
        })
        .collect::<Result<_>>()?;

    let sched = Schedule::new(entries, lanes);
    info!(makespan = sched.makespan(), "HEFT schedule produced");
    Ok(sched)
}

/// Collect `(finish, processor, comm_cost)` for every predecessor of
/// `task`, failing with [`WfschedError::UnscheduledPredecessor`] if any
/// predecessor has no entry yet.
fn placed_predecessors(
    graph: &TaskGraph,
    entries: &[Option<ScheduleEntry>],
    task: TaskId,
) -> Result<Vec<(f64, usize, f64)>> {
    let mut placements = Vec::with_capacity(graph.predecessors(task).len());

    for &(pred, comm_cost) in graph.predecessors(task) {
        match entries[pred].as_ref() {
            Some(entry) => placements.push((entry.finish, entry.processor, comm_cost)),
            None => {
                return Err(WfschedError::UnscheduledPredecessor {
                    task: graph.name(task).to_string(),
                    predecessor: graph.name(pred).to_string(),
                });
            }
        }
    }

    Ok(placements)
}

// src/dag/schedule.rs

//! Schedule output types.

use serde::Serialize;

use crate::dag::graph::TaskId;

/// Final placement of one task. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleEntry {
    pub task: String,
    pub processor: usize,
    pub start: f64,
    pub finish: f64,
}

/// Complete mapping from every task to exactly one [`ScheduleEntry`],
/// plus per-processor assignment lanes in assignment order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    /// One entry per task, indexed by `TaskId`.
    entries: Vec<ScheduleEntry>,
    /// Tasks assigned to each processor, in assignment order. Start times
    /// along a lane are non-decreasing and intervals never overlap.
    #[serde(skip)]
    lanes: Vec<Vec<TaskId>>,
}

impl Schedule {
    pub(crate) fn new(entries: Vec<ScheduleEntry>, lanes: Vec<Vec<TaskId>>) -> Self {
        Self { entries, lanes }
    }

    pub fn entry(&self, task: TaskId) -> &ScheduleEntry {
        &self.entries[task]
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Tasks assigned to `processor`, in assignment order.
    pub fn lane(&self, processor: usize) -> &[TaskId] {
        &self.lanes[processor]
    }

    pub fn num_processors(&self) -> usize {
        self.lanes.len()
    }

    /// Latest finish time across all tasks; 0 for an empty schedule.
    pub fn makespan(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.finish)
            .fold(0.0f64, f64::max)
    }
}

// src/dag/mod.rs

//! DAG representation, ranking and HEFT scheduling.
//!
//! - [`graph`] holds the arena-based task DAG with per-processor
//!   computation costs and per-edge communication costs.
//! - [`rank`] computes upward ranks via a reverse-topological pass.
//! - [`scheduler`] runs non-insertion HEFT over the ranked tasks.
//! - [`schedule`] defines the schedule output types.

pub mod graph;
pub mod rank;
pub mod schedule;
pub mod scheduler;

pub use graph::{TaskGraph, TaskId};
pub use rank::upward_ranks;
pub use schedule::{Schedule, ScheduleEntry};
pub use scheduler::schedule;

// src/dag/rank.rs

//! Upward-rank computation.
//!
//! The upward rank of a task is its critical-path-to-exit estimate:
//!
//! ```text
//! rank(t) = avg_cost(t) + max over successors s of (comm(t, s) + rank(s))
//! ```
//!
//! with `rank(t) = avg_cost(t)` for leaves. Walking the cached topological
//! order in reverse fills a dense array in O(V+E) with no recursion, so
//! large graphs cannot blow the stack and every rank is computed exactly
//! once regardless of in-degree.

use crate::dag::graph::TaskGraph;

/// Compute the upward rank of every task, indexed by `TaskId`.
pub fn upward_ranks(graph: &TaskGraph) -> Vec<f64> {
    let mut ranks = vec![0.0f64; graph.len()];

    for &task in graph.topological_order().iter().rev() {
        let mut max_successor = 0.0f64;
        for &(succ, comm_cost) in graph.successors(task) {
            max_successor = max_successor.max(comm_cost + ranks[succ]);
        }
        ranks[task] = graph.avg_computation_cost(task) + max_successor;
    }

    ranks
}

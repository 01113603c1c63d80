// src/trace/model.rs

//! Serde models for the execution-trace document.
//!
//! The trace is produced by an external execution/simulation engine and is
//! a YAML document with four named mappings:
//!
//! ```yaml
//! comm_name_read_offsets:
//!   "A->B": { start: 14, end: 14 }
//! comm_name_write_offsets:
//!   "A->B": { start: 14, end: 14 }
//! exec_name_compute_offsets:
//!   A: { start: 0, end: 14 }
//! exec_name_total_offsets:
//!   A: { start: 0, end: 14 }
//! ```
//!
//! Communication maps are keyed by `source->destination` edge names;
//! execution maps are keyed by task name. Offsets are integer time units
//! (microseconds in the original traces); the validator's equality check
//! is exact, so no float type appears here.

use std::collections::BTreeMap;

use serde::Deserialize;

/// A recorded `{start, end}` interval with `end >= start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// A full execution trace.
///
/// `BTreeMap` keeps iteration (and therefore the discrepancy report)
/// in a deterministic order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TraceFile {
    /// Read intervals keyed by `source->destination`.
    pub comm_name_read_offsets: BTreeMap<String, Interval>,
    /// Write intervals keyed by `source->destination`.
    pub comm_name_write_offsets: BTreeMap<String, Interval>,
    /// Compute intervals keyed by task name.
    pub exec_name_compute_offsets: BTreeMap<String, Interval>,
    /// Observed total intervals keyed by task name.
    pub exec_name_total_offsets: BTreeMap<String, Interval>,
}

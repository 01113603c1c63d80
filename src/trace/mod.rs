// src/trace/mod.rs

//! Execution-trace model and timing-consistency validation.
//!
//! - [`model`] holds the serde types for the trace document (four interval
//!   maps keyed by edge or task name).
//! - [`validator`] classifies each task's topological role and checks that
//!   the recorded total interval is explained by the read/compute/write
//!   decomposition.

pub mod model;
pub mod validator;

pub use model::{Interval, TraceFile};
pub use validator::{Discrepancy, TaskRole, classify_role, validate_trace};

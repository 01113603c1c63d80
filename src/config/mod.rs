// src/config/mod.rs

//! Input documents and their validation.
//!
//! - [`model`] holds the serde models for the workflow document.
//! - [`loader`] reads workflow (JSON) and trace (YAML) files.
//! - [`validate`] turns a [`model::RawWorkflow`] into a validated
//!   [`model::Workflow`] (reference resolution, cost-table arity, cycles).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_trace, load_workflow};
pub use model::{ParentRef, RawWorkflow, TaskSpec, Workflow};

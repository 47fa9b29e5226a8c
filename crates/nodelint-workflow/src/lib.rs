//! Nodelint Workflow
//!
//! This crate checks a loaded workflow document for structural
//! well-formedness and computes summary statistics over its connection graph.
//!
//! Checks run in a fixed order and stop at the first failure:
//! - Top-level shape (`name`, `nodes`, `connections`)
//! - Nodes (required fields, unique ids and names, position format)
//! - Connections (known source, `main` array, known targets)
//!
//! Trigger, orphan and isolated node statistics are informational and never
//! fail validation.

mod error;
mod graph;
mod summary;
mod validate;

pub use error::{ErrorKind, ValidationError};
pub use graph::Graph;
pub use summary::ValidationSummary;
pub use validate::{check, validate};

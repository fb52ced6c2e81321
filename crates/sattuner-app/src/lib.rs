//! Use case orchestration for sattuner.
//!
//! This crate provides the application layer: one use case per CLI
//! operation, coordinating the domain engines with the store adapters and
//! assembling the report envelope. It is intentionally thin and delegates
//! heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod apply;
mod audit;
mod explain;
mod report;
mod restore;

#[cfg(test)]
pub(crate) mod test_support;

pub use apply::{run_apply, run_ultra};
pub use audit::{run_audit, run_security};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use report::{runtime_error_envelope, status_exit_code};
pub use restore::run_restore;

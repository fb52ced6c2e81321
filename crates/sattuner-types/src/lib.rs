//! Stable DTOs and IDs used across the sattuner workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report envelope and findings
//! - stable rule IDs
//! - explain registry for remediation guidance
//!
//! Everything here serializes to the single JSON object the CLI writes to
//! stdout; nothing here performs I/O or evaluates rules.

#![forbid(unsafe_code)]

pub mod envelope;
pub mod explain;
pub mod ids;
pub mod report;

pub use envelope::{Envelope, RunStatus};
pub use explain::{Explanation, lookup_explanation};
pub use report::{
    ApplyData, AuditData, AuditFinding, AuditStatus, LoaderData, RestoreData, SecurityData,
    SecurityFinding, SecuritySeverity,
};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of a single audit rule. Serialized uppercase to match the wire
/// format consumed by operator tooling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditStatus {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuditFinding {
    pub status: AuditStatus,
    pub message: String,

    /// One-line remediation hint; present only on non-passing findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

/// Payload of the `audit` operation.
///
/// `score` starts at 100 and loses each failing rule's weight; it is clamped
/// to [0, 100] so adding rules can never wrap it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct AuditData {
    pub report: BTreeMap<String, AuditFinding>,
    pub score: u8,
}

/// Severity tags for the heuristic security scan. Informational only; the
/// scan carries no score and no remediation action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SecuritySeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SecurityFinding {
    pub severity: SecuritySeverity,
    pub message: String,
}

/// Payload of the `security` operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct SecurityData {
    pub issues: Vec<SecurityFinding>,
}

/// Payload of the `apply` operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct ApplyData {
    /// Human-readable change log; also the commit label, joined by comma.
    pub changes: Vec<String>,

    /// Best-effort reload failures. A non-empty list means the configuration
    /// was persisted but the live system may not reflect it yet.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reload_warnings: Vec<String>,
}

/// Payload of the `ultra` operation (boot-time loader tunables).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct LoaderData {
    pub changes: Vec<String>,
}

/// Payload of the `restore` operation. `restored_at` is only present on
/// success; error envelopes carry an empty object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct RestoreData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restored_at: Option<String>,
}

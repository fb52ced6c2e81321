use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `sattuner.toml` schema v1.
///
/// This is a *user-facing* config model: every field is optional so a
/// partial (or absent) file keeps working as the schema grows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SattunerConfigV1 {
    /// Optional schema string for tooling (`sattuner.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Root directory of the configuration store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_root: Option<String>,

    /// Per-file loader configuration directory (modern hosts).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loader_dir: Option<String>,

    /// Shared loader file (classic hosts, used when `loader_dir` is absent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classic_loader_path: Option<String>,

    /// Utility used to apply runtime tunables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sysctl_cmd: Option<String>,

    /// Optional shell command that re-runs WAN interface configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wan_reload_cmd: Option<String>,
}

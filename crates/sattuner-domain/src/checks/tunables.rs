use crate::catalog;
use crate::model::ConfigTree;
use sattuner_types::{AuditFinding, AuditStatus, ids};
use serde_json::Value;
use std::collections::BTreeMap;

const SYSCTL_ITEMS: &str = "sysctl.item";

pub fn run(tree: &ConfigTree, out: &mut BTreeMap<String, AuditFinding>) -> u32 {
    let total = catalog::SYSCTL_RULES.len();
    // A missing or non-list tunables section counts as zero matches.
    let items: &[Value] = tree
        .get_array(SYSCTL_ITEMS)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let applied = catalog::SYSCTL_RULES
        .iter()
        .filter(|(tunable, value)| {
            items.iter().any(|item| {
                item.get("tunable").and_then(Value::as_str) == Some(*tunable)
                    && item.get("value").and_then(Value::as_str) == Some(*value)
            })
        })
        .count();

    if applied < total {
        out.insert(
            ids::RULE_SYSTEM_TUNABLES.to_string(),
            AuditFinding {
                status: AuditStatus::Warn,
                message: format!("{applied} of {total} recommended network tunables applied"),
                fix: Some("Apply the recommended system tunables".to_string()),
            },
        );
        catalog::PENALTY_TUNABLES
    } else {
        out.insert(
            ids::RULE_SYSTEM_TUNABLES.to_string(),
            AuditFinding {
                status: AuditStatus::Pass,
                message: "All recommended network tunables are applied".to_string(),
                fix: None,
            },
        );
        0
    }
}

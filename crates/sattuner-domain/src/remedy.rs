use crate::catalog;
use crate::model::ConfigTree;
use serde_json::{Value, json};

/// Apply the fixes implied by the rule catalog to the tree, in place.
///
/// Returns the change log for this run. The caller owns the safety
/// protocol around this call: back up the tree *before* invoking, persist
/// and reload *after*. Each mutation is conditional on current state, so
/// consecutive runs converge to the same tree; only the tunables step
/// records its aggregate line unconditionally.
pub fn remediate(tree: &mut ConfigTree) -> Vec<String> {
    let mut changes = Vec::new();

    // 1. Clear private-network blocking on WAN.
    if tree.remove("interfaces.wan.blockpriv").is_some() {
        changes.push("WAN: disabled blocking of private networks".to_string());
    }

    // 2. Reject leases from the terminal's DHCP server.
    let current = tree
        .get_str("interfaces.wan.rejectleasesfrom")
        .unwrap_or("")
        .to_string();
    if !current.contains(catalog::TERMINAL_DHCP_SERVER) {
        let next = if current.is_empty() {
            catalog::TERMINAL_DHCP_SERVER.to_string()
        } else {
            format!("{current} {}", catalog::TERMINAL_DHCP_SERVER)
        };
        tree.set("interfaces.wan.rejectleasesfrom", Value::String(next));
        changes.push(format!(
            "WAN: added {} to rejected DHCP servers",
            catalog::TERMINAL_DHCP_SERVER
        ));
    }

    // 3. Install or refresh the runtime tunables. One aggregate change line
    // for the whole step, however many entries were touched.
    let items = tree.ensure_array("sysctl.item");
    for (tunable, value) in catalog::SYSCTL_RULES {
        let existing = items
            .iter_mut()
            .find(|item| item.get("tunable").and_then(Value::as_str) == Some(*tunable));
        match existing {
            Some(item) => {
                if let Some(entry) = item.as_object_mut() {
                    entry.insert("value".to_string(), json!(value));
                    entry.insert("descr".to_string(), json!(catalog::TUNABLE_DESCR));
                }
            }
            None => items.push(json!({
                "tunable": tunable,
                "value": value,
                "descr": catalog::TUNABLE_DESCR,
            })),
        }
    }
    changes.push("system: network tunables applied".to_string());

    changes
}

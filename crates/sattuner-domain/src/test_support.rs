use crate::catalog;
use crate::model::ConfigTree;
use serde_json::{Value, json};

pub fn tree(value: Value) -> ConfigTree {
    ConfigTree::from_value(value)
}

/// A configuration missing every optimization: private-network blocking on,
/// no rejected lease servers, no tunables.
pub fn untuned_tree() -> ConfigTree {
    tree(json!({
        "interfaces": {"wan": {"if": "igc0", "blockpriv": ""}},
        "system": {"user": [{"name": "admin"}]}
    }))
}

/// A configuration with every optimization already in place.
pub fn tuned_tree() -> ConfigTree {
    tree(json!({
        "interfaces": {"wan": {
            "if": "igc0",
            "rejectleasesfrom": catalog::TERMINAL_DHCP_SERVER
        }},
        "sysctl": {"item": tunable_items(catalog::SYSCTL_RULES)}
    }))
}

pub fn tunable_items(rules: &[(&str, &str)]) -> Vec<Value> {
    rules
        .iter()
        .map(|(tunable, value)| {
            json!({"tunable": tunable, "value": value, "descr": catalog::TUNABLE_DESCR})
        })
        .collect()
}

/// An any-to-any WAN filter rule, optionally disabled.
pub fn wan_any_rule(disabled: bool) -> Value {
    let mut rule = json!({
        "interface": "wan",
        "source": {"any": ""},
        "destination": {"any": ""}
    });
    if disabled {
        rule["disabled"] = json!("");
    }
    rule
}

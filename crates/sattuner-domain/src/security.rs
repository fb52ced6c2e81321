//! Heuristic scan for common gateway misconfigurations.
//!
//! Unlike the tuning rules, these findings carry no score and no automatic
//! remediation; they are read-only diagnostics. Every path read is
//! null-guarded: an absent path means "feature disabled" or "default
//! value", never an error.

use crate::model::{ConfigTree, port_value};
use sattuner_types::{SecurityFinding, SecuritySeverity, ids};
use serde_json::Value;

/// A single heuristic check: id, severity tag, and a probe that returns one
/// message per hit (most checks return zero or one; the WAN rule check
/// returns one per matching rule).
pub struct SecurityCheck {
    pub id: &'static str,
    pub severity: SecuritySeverity,
    pub run: fn(&ConfigTree) -> Vec<String>,
}

pub const SECURITY_CHECKS: &[SecurityCheck] = &[
    SecurityCheck {
        id: ids::CHECK_SECURITY_DEFAULT_ADMIN,
        severity: SecuritySeverity::High,
        run: default_admin_present,
    },
    SecurityCheck {
        id: ids::CHECK_SECURITY_SSH_PORT,
        severity: SecuritySeverity::Medium,
        run: ssh_on_standard_port,
    },
    SecurityCheck {
        id: ids::CHECK_SECURITY_WEBGUI_PORT,
        severity: SecuritySeverity::Low,
        run: webgui_on_standard_port,
    },
    SecurityCheck {
        id: ids::CHECK_SECURITY_WAN_ANY_RULE,
        severity: SecuritySeverity::Critical,
        run: wan_any_rules,
    },
];

/// Run every security check in table order, accumulating findings.
pub fn scan(tree: &ConfigTree) -> Vec<SecurityFinding> {
    let mut issues = Vec::new();
    for check in SECURITY_CHECKS {
        for message in (check.run)(tree) {
            issues.push(SecurityFinding {
                severity: check.severity,
                message,
            });
        }
    }
    issues
}

fn default_admin_present(tree: &ConfigTree) -> Vec<String> {
    let users: &[Value] = tree
        .get_array("system.user")
        .map(Vec::as_slice)
        .unwrap_or_default();
    let has_admin = users
        .iter()
        .any(|user| user.get("name").and_then(Value::as_str) == Some("admin"));
    if has_admin {
        // Password strength is not verifiable from the tree; presence of the
        // well-known name is finding enough.
        vec![
            "The default 'admin' account exists; create a personal administrator \
             account and disable it"
                .to_string(),
        ]
    } else {
        Vec::new()
    }
}

fn ssh_on_standard_port(tree: &ConfigTree) -> Vec<String> {
    let port = tree
        .get("system.ssh.port")
        .and_then(port_value)
        .unwrap_or(22);
    if port == 22 {
        vec!["SSH listens on the standard port 22; consider moving it".to_string()]
    } else {
        Vec::new()
    }
}

fn webgui_on_standard_port(tree: &ConfigTree) -> Vec<String> {
    // Unset means the GUI sits on a standard port.
    let standard = match tree.get("system.webgui.port").and_then(port_value) {
        None => true,
        Some(port) => port == 80 || port == 443,
    };
    if standard {
        vec![
            "The web management interface uses a standard port (80/443); a \
             non-standard port cuts probe noise"
                .to_string(),
        ]
    } else {
        Vec::new()
    }
}

fn wan_any_rules(tree: &ConfigTree) -> Vec<String> {
    let rules: &[Value] = tree
        .get_array("filter.rule")
        .map(Vec::as_slice)
        .unwrap_or_default();
    rules
        .iter()
        .filter(|rule| rule.get("interface").and_then(Value::as_str) == Some("wan"))
        .filter(|rule| rule.get("disabled").is_none())
        .filter(|rule| {
            // Presence of the `any` key marks the open endpoint.
            rule.pointer("/source/any").is_some() && rule.pointer("/destination/any").is_some()
        })
        .map(|_| {
            "An enabled any-to-any rule is active on WAN; this passes all inbound \
             traffic"
                .to_string()
        })
        .collect()
}

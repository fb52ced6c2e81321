use crate::catalog;
use crate::model::ConfigTree;
use sattuner_types::{AuditFinding, AuditStatus, ids};
use std::collections::BTreeMap;

const WAN_BLOCKPRIV: &str = "interfaces.wan.blockpriv";

pub fn run(tree: &ConfigTree, out: &mut BTreeMap<String, AuditFinding>) -> u32 {
    // Presence of the key means the flag is enabled.
    if tree.contains(WAN_BLOCKPRIV) {
        out.insert(
            ids::RULE_WAN_BLOCK_PRIVATE.to_string(),
            AuditFinding {
                status: AuditStatus::Fail,
                message: "WAN blocks private networks; this drops the carrier-grade NAT \
                          ranges the satellite uplink assigns"
                    .to_string(),
                fix: Some(
                    "Disable 'Block private networks and loopback addresses' on WAN".to_string(),
                ),
            },
        );
        catalog::PENALTY_BLOCK_PRIVATE
    } else {
        out.insert(
            ids::RULE_WAN_BLOCK_PRIVATE.to_string(),
            AuditFinding {
                status: AuditStatus::Pass,
                message: "Private network blocking is disabled on WAN".to_string(),
                fix: None,
            },
        );
        0
    }
}

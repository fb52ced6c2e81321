use crate::catalog;
use crate::model::ConfigTree;
use sattuner_types::{AuditFinding, AuditStatus, ids};
use std::collections::BTreeMap;

const WAN_REJECT_LEASES: &str = "interfaces.wan.rejectleasesfrom";

pub fn run(tree: &ConfigTree, out: &mut BTreeMap<String, AuditFinding>) -> u32 {
    // The field is a space-delimited string list; an absent field is empty.
    let reject_leases = tree.get_str(WAN_REJECT_LEASES).unwrap_or("");
    if reject_leases.contains(catalog::TERMINAL_DHCP_SERVER) {
        out.insert(
            ids::RULE_WAN_REJECT_LEASES.to_string(),
            AuditFinding {
                status: AuditStatus::Pass,
                message: format!(
                    "Leases from {} are rejected on WAN",
                    catalog::TERMINAL_DHCP_SERVER
                ),
                fix: None,
            },
        );
        0
    } else {
        out.insert(
            ids::RULE_WAN_REJECT_LEASES.to_string(),
            AuditFinding {
                status: AuditStatus::Fail,
                message: format!(
                    "Leases from {} are not rejected; the terminal's DHCP server can \
                     displace the real upstream lease",
                    catalog::TERMINAL_DHCP_SERVER
                ),
                fix: Some(format!(
                    "Add {} to 'Reject leases from' on WAN",
                    catalog::TERMINAL_DHCP_SERVER
                )),
            },
        );
        catalog::PENALTY_REJECT_LEASES
    }
}

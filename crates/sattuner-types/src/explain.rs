//! Explain registry for audit rules and security checks.
//!
//! Maps rule IDs to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a rule or security check.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule.
    pub title: &'static str,
    /// What the rule checks and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
}

/// Look up an explanation by rule ID.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::RULE_WAN_BLOCK_PRIVATE => Some(explain_block_private()),
        ids::RULE_WAN_REJECT_LEASES => Some(explain_reject_leases()),
        ids::RULE_SYSTEM_TUNABLES => Some(explain_tunables()),
        ids::CHECK_SECURITY_DEFAULT_ADMIN => Some(explain_default_admin()),
        ids::CHECK_SECURITY_SSH_PORT => Some(explain_ssh_port()),
        ids::CHECK_SECURITY_WEBGUI_PORT => Some(explain_webgui_port()),
        ids::CHECK_SECURITY_WAN_ANY_RULE => Some(explain_wan_any_rule()),
        _ => None,
    }
}

/// List all known rule IDs.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_WAN_BLOCK_PRIVATE,
        ids::RULE_WAN_REJECT_LEASES,
        ids::RULE_SYSTEM_TUNABLES,
        ids::CHECK_SECURITY_DEFAULT_ADMIN,
        ids::CHECK_SECURITY_SSH_PORT,
        ids::CHECK_SECURITY_WEBGUI_PORT,
        ids::CHECK_SECURITY_WAN_ANY_RULE,
    ]
}

fn explain_block_private() -> Explanation {
    Explanation {
        title: "WAN must not block private networks",
        description: "\
The satellite uplink hands out carrier-grade NAT addresses (100.64.0.0/10 and
neighbouring ranges). With 'Block private networks' enabled on the WAN
interface, the gateway drops traffic from exactly the address space the
carrier uses, which breaks connectivity in ways that are hard to diagnose.",
        remediation: "\
Disable 'Block private networks and loopback addresses' on the WAN interface,
or run `sattuner apply` to clear the flag with a backup taken first.",
    }
}

fn explain_reject_leases() -> Explanation {
    Explanation {
        title: "Reject DHCP leases from the satellite terminal",
        description: "\
The link terminal runs its own DHCP server at 192.168.100.1. When the dish is
rebooting or obstructed, the terminal answers DHCP before the carrier does; if
the WAN client accepts that lease it loses the real upstream address until the
lease expires.",
        remediation: "\
Add 192.168.100.1 to the WAN interface's 'Reject leases from' list (space
separated), or run `sattuner apply`.",
    }
}

fn explain_tunables() -> Explanation {
    Explanation {
        title: "High-bandwidth-delay network tunables",
        description: "\
A satellite path combines high bandwidth with high latency, so default TCP
buffer ceilings and interrupt queue depths cap throughput well below the link
rate. Six runtime tunables raise the receive/send buffer maxima and
increments, deepen the interrupt queue, and pin the default maximum segment
size.",
        remediation: "\
Run `sattuner apply` to install all six tunables, or add them manually under
the system tunables list with the recommended values.",
    }
}

fn explain_default_admin() -> Explanation {
    Explanation {
        title: "Default administrative account present",
        description: "\
An account named 'admin' exists. Password strength cannot be verified from
the configuration tree, but the well-known name alone invites credential
stuffing.",
        remediation: "Create a personal administrator account and disable 'admin'.",
    }
}

fn explain_ssh_port() -> Explanation {
    Explanation {
        title: "Remote shell on the standard port",
        description: "\
The SSH service listens on port 22 (the default when no port is configured).
Scanners try 22 first; moving the port does not add real security but cuts
log noise dramatically.",
        remediation: "Move the SSH service to a non-standard port.",
    }
}

fn explain_webgui_port() -> Explanation {
    Explanation {
        title: "Web management interface on a standard port",
        description: "\
The web GUI listens on 80 or 443 (an unset port means a standard one). Like
SSH, a non-standard port reduces drive-by probe noise.",
        remediation: "Move the web GUI to a non-standard port.",
    }
}

fn explain_wan_any_rule() -> Explanation {
    Explanation {
        title: "Any-to-any firewall rule active on WAN",
        description: "\
An enabled WAN rule whose source and destination are both 'any' passes all
inbound traffic. On an internet-facing interface this exposes every internal
service.",
        remediation: "Disable or scope the rule; WAN rules should name explicit hosts or ports.",
    }
}

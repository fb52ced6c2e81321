//! Stable identifiers for audit rules and security checks.
//!
//! Rule IDs are dotted namespaces; they key the audit report map and the
//! explain registry.

// Audit rules
pub const RULE_WAN_BLOCK_PRIVATE: &str = "wan.block_private";
pub const RULE_WAN_REJECT_LEASES: &str = "wan.reject_leases";
pub const RULE_SYSTEM_TUNABLES: &str = "system.tunables";

// Security checks (informational; never scored)
pub const CHECK_SECURITY_DEFAULT_ADMIN: &str = "security.default_admin";
pub const CHECK_SECURITY_SSH_PORT: &str = "security.ssh_port";
pub const CHECK_SECURITY_WEBGUI_PORT: &str = "security.webgui_port";
pub const CHECK_SECURITY_WAN_ANY_RULE: &str = "security.wan_any_rule";

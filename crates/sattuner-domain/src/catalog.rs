//! The static rule catalog: known-good settings for a satellite WAN uplink.
//!
//! Pure data, no behavior. The audit, remediation, and loader paths all read
//! from here so the expected values exist exactly once.

/// DHCP server of the satellite link terminal. Leases from it must be
/// rejected on the WAN interface or the gateway can lose its real upstream
/// address while the dish is rebooting or obstructed.
pub const TERMINAL_DHCP_SERVER: &str = "192.168.100.1";

/// Description stamped on tunable entries this tool creates or overwrites.
pub const TUNABLE_DESCR: &str = "Managed by sattuner";

/// Runtime network tunables for a high-bandwidth, high-latency path:
/// TCP receive/send buffer maxima and increments, interrupt queue depth,
/// and the default maximum segment size.
pub const SYSCTL_RULES: &[(&str, &str)] = &[
    ("net.inet.tcp.recvbuf_max", "4194304"),
    ("net.inet.tcp.sendbuf_max", "4194304"),
    ("net.inet.tcp.recvbuf_inc", "65536"),
    ("net.inet.tcp.sendbuf_inc", "65536"),
    ("net.inet.ip.intr_queue_maxlen", "2048"),
    ("net.inet.tcp.mssdflt", "1460"),
];

/// WAN quality-monitor thresholds (milliseconds / percent / milliseconds).
/// Declared alongside the tunables but not evaluated by any audit or apply
/// path yet; the gateway monitor that would consume them is not wired up.
pub const GATEWAY_RULES: &[(&str, &str)] = &[
    ("latency_low", "200"),
    ("latency_high", "400"),
    ("loss_low", "10"),
    ("loss_high", "20"),
    ("interval", "2000"),
];

/// Boot-time kernel tunables. These have no runtime equivalent; a full
/// system restart is required for them to take effect.
pub const LOADER_TUNABLES: &[(&str, &str)] = &[
    ("kern.ipc.nmbclusters", "1000000"),
    ("kern.ipc.maxsockbuf", "16777216"),
    ("net.isr.defaultqlimit", "2048"),
    // Disabling TCP segmentation offload smooths out latency spikes on
    // satellite paths.
    ("net.inet.tcp.tso", "0"),
];

// Score weights per audit rule. The score starts at 100.
pub const PENALTY_BLOCK_PRIVATE: u32 = 20;
pub const PENALTY_REJECT_LEASES: u32 = 20;
pub const PENALTY_TUNABLES: u32 = 10;

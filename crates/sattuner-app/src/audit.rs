//! The read-only use cases: `audit` and `security`.

use anyhow::Context;
use sattuner_store::FsConfigStore;
use sattuner_types::{AuditData, Envelope, SecurityData};

/// Evaluate the tuning rules against the stored configuration.
pub fn run_audit(store: &FsConfigStore) -> anyhow::Result<Envelope<AuditData>> {
    let tree = store.load().context("load configuration store")?;
    let data = sattuner_domain::audit(&tree);
    Ok(Envelope::success("audit completed", data))
}

/// Run the heuristic security scan against the stored configuration.
pub fn run_security(store: &FsConfigStore) -> anyhow::Result<Envelope<SecurityData>> {
    let tree = store.load().context("load configuration store")?;
    let issues = sattuner_domain::scan(&tree);
    Ok(Envelope::success(
        "security scan completed",
        SecurityData { issues },
    ))
}

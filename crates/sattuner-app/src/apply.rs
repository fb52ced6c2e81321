//! The side-effecting use cases: `apply` (config store) and `ultra`
//! (boot loader files).

use anyhow::Context;
use sattuner_domain::catalog;
use sattuner_store::{FsConfigStore, LoaderTuningWriter, Reloader};
use sattuner_types::{ApplyData, Envelope, LoaderData};
use time::OffsetDateTime;
use time::macros::format_description;

const BACKUP_LABEL_PREFIX: &str = "pre-tuning backup ";
const COMMIT_LABEL_PREFIX: &str = "applied satellite WAN tuning: ";

const STAMP_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year][month][day]-[hour][minute][second]");

/// Remediate the stored configuration.
///
/// Protocol, in order: back up the current tree (abort on failure, nothing
/// mutated), apply the catalog fixes in memory, persist under a commit
/// label naming every change, then reload the running system best-effort.
/// Reload failures never fail the operation; they surface as warnings in
/// the payload.
pub fn run_apply(
    store: &FsConfigStore,
    reloader: &dyn Reloader,
) -> anyhow::Result<Envelope<ApplyData>> {
    let mut tree = store.load().context("load configuration store")?;

    let now = OffsetDateTime::now_utc();
    let stamp = now.format(&STAMP_FORMAT).context("format timestamp")?;
    store
        .save(
            &tree,
            &format!("{BACKUP_LABEL_PREFIX}{stamp}"),
            now.unix_timestamp(),
        )
        .context("create pre-apply backup")?;

    let changes = sattuner_domain::remediate(&mut tree);

    store
        .save(
            &tree,
            &format!("{COMMIT_LABEL_PREFIX}{}", changes.join(", ")),
            now.unix_timestamp(),
        )
        .context("persist tuned configuration")?;

    let mut reload_warnings = Vec::new();
    if let Err(err) = reloader.apply_runtime_tunables(catalog::SYSCTL_RULES) {
        reload_warnings.push(format!("runtime tunables not reloaded: {err:#}"));
    }
    if let Err(err) = reloader.reconfigure_wan() {
        reload_warnings.push(format!("WAN interface not reconfigured: {err:#}"));
    }

    Ok(Envelope::success(
        "changes applied",
        ApplyData {
            changes,
            reload_warnings,
        },
    ))
}

/// Write the boot-time loader tunables. The store is loaded first as a
/// host-detection precondition even though `ultra` never mutates it.
pub fn run_ultra(
    store: &FsConfigStore,
    writer: &LoaderTuningWriter,
) -> anyhow::Result<Envelope<LoaderData>> {
    store.load().context("load configuration store")?;
    let changes = writer.apply().context("write loader tunables")?;
    Ok(Envelope::success(
        "boot-time tuning applied; a system restart is required",
        LoaderData { changes },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seeded_store, untuned_value};
    use sattuner_store::NoopReloader;
    use sattuner_types::RunStatus;

    struct FailingReloader;

    impl Reloader for FailingReloader {
        fn apply_runtime_tunables(&self, _tunables: &[(&str, &str)]) -> anyhow::Result<()> {
            anyhow::bail!("sysctl unavailable")
        }

        fn reconfigure_wan(&self) -> anyhow::Result<()> {
            anyhow::bail!("no wan hook")
        }
    }

    #[test]
    fn apply_then_audit_scores_100() {
        let (_dir, store) = seeded_store(untuned_value());
        let envelope = run_apply(&store, &NoopReloader).expect("run apply");
        assert_eq!(envelope.status, RunStatus::Success);
        assert_eq!(envelope.data.changes.len(), 3);
        assert!(envelope.data.reload_warnings.is_empty());

        let audited = crate::run_audit(&store).expect("run audit");
        assert_eq!(audited.data.score, 100);
    }

    #[test]
    fn apply_twice_leaves_an_identical_tree() {
        let (_dir, store) = seeded_store(untuned_value());
        run_apply(&store, &NoopReloader).expect("first apply");
        let after_first = store.load().expect("load");
        let second = run_apply(&store, &NoopReloader).expect("second apply");
        let after_second = store.load().expect("load");

        assert_eq!(after_first, after_second);
        // The tunables step still reports its aggregate line, and each run
        // still costs a pair of backups.
        assert_eq!(second.data.changes.len(), 1);
        assert_eq!(store.list_backups().expect("list").len(), 4);
    }

    #[test]
    fn every_apply_backup_carries_the_label_prefix() {
        let (_dir, store) = seeded_store(untuned_value());
        run_apply(&store, &NoopReloader).expect("run apply");
        let backups = store.list_backups().expect("list");
        assert_eq!(backups.len(), 2);
        // Newest first: the commit label, then the pre-apply backup label.
        assert!(backups[0].label.starts_with(COMMIT_LABEL_PREFIX));
        assert!(backups[1].label.starts_with(BACKUP_LABEL_PREFIX));
    }

    #[test]
    fn reload_failures_become_warnings_not_errors() {
        let (_dir, store) = seeded_store(untuned_value());
        let envelope = run_apply(&store, &FailingReloader).expect("run apply");
        assert_eq!(envelope.status, RunStatus::Success);
        assert_eq!(envelope.data.reload_warnings.len(), 2);

        // The configuration was still persisted.
        let audited = crate::run_audit(&store).expect("run audit");
        assert_eq!(audited.data.score, 100);
    }

    #[test]
    fn apply_on_a_missing_store_mutates_nothing() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = camino::Utf8Path::from_path(dir.path()).expect("utf8 path");
        let store = FsConfigStore::new(root.join("nope"));
        assert!(run_apply(&store, &NoopReloader).is_err());
        assert!(!root.join("nope").exists());
    }

    #[test]
    fn ultra_requires_the_store_but_does_not_touch_it() {
        let (_dir, store) = seeded_store(untuned_value());
        let before = store.load().expect("load");

        let loader_dir = tempfile::tempdir().expect("create temp dir");
        let loader_root = camino::Utf8Path::from_path(loader_dir.path()).expect("utf8 path");
        let writer = LoaderTuningWriter::new(
            loader_root.join("missing-dir"),
            loader_root.join("loader.conf.local"),
        );

        let envelope = run_ultra(&store, &writer).expect("run ultra");
        assert_eq!(envelope.status, RunStatus::Success);
        assert_eq!(envelope.data.changes.len(), 2);

        assert_eq!(store.load().expect("load"), before);
        assert!(store.list_backups().expect("list").is_empty());
    }
}

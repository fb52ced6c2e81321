//! The `restore` use case: roll back to the most recent backup.

use anyhow::Context;
use sattuner_store::FsConfigStore;
use sattuner_types::{Envelope, RestoreData};
use time::OffsetDateTime;
use time::macros::format_description;

const RESTORED_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Restore the single most recent backup as the active configuration.
///
/// Always the literal latest entry: after an `apply` that is the pre-apply
/// snapshot, after a manual save it is whatever the operator saved last.
/// An empty history and a history whose newest file has gone missing report
/// the same not-found error.
pub fn run_restore(store: &FsConfigStore) -> anyhow::Result<Envelope<RestoreData>> {
    let backups = store.list_backups().context("list backups")?;
    let Some(latest) = backups.first() else {
        return Ok(Envelope::error("no backups found", RestoreData::default()));
    };

    let path = store.backup_path(latest.time);
    if !path.is_file() {
        return Ok(Envelope::error("no backups found", RestoreData::default()));
    }

    match store.restore_from(&path) {
        Ok(_) => {
            let restored_at = format_backup_time(latest.time);
            Ok(Envelope::success(
                format!("configuration restored to backup from {restored_at}"),
                RestoreData {
                    restored_at: Some(restored_at),
                },
            ))
        }
        Err(_) => Ok(Envelope::error(
            "failed to restore the configuration",
            RestoreData::default(),
        )),
    }
}

fn format_backup_time(time: i64) -> String {
    OffsetDateTime::from_unix_timestamp(time)
        .ok()
        .and_then(|t| t.format(&RESTORED_FORMAT).ok())
        .unwrap_or_else(|| time.to_string())
}

//! Host adapters: the persisted configuration store, boot loader tunable
//! files, and best-effort runtime reloads.
//!
//! This crate is allowed to do filesystem IO and spawn processes. Rule
//! evaluation stays in `sattuner-domain`; callers hand trees in and out.

#![forbid(unsafe_code)]

mod fs;
mod loader;
mod reload;

pub use fs::{BackupRecord, FsConfigStore, StoreError};
pub use loader::{LoaderTuningWriter, MANAGED_LOADER_FILE};
pub use reload::{ExecReloader, NoopReloader, Reloader};

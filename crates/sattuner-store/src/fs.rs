use camino::{Utf8Path, Utf8PathBuf};
use sattuner_domain::model::ConfigTree;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

const ACTIVE_CONFIG_FILE: &str = "config.json";
const BACKUP_DIR: &str = "backup";
const BACKUP_INDEX_FILE: &str = "backups.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The active configuration is absent; the root is not a usable store.
    #[error("no configuration store at {0}")]
    Missing(Utf8PathBuf),

    #[error("no backups found")]
    NoBackups,

    #[error("read {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write {path}")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parse {path}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One entry of the backup history, newest first in the index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupRecord {
    /// Unix timestamp; also names the backup file.
    pub time: i64,
    pub label: String,
}

/// Filesystem-backed configuration store.
///
/// Layout under the root directory:
/// - `config.json`: the active tree
/// - `backup/config-<time>.json`: full snapshots
/// - `backup/backups.json`: `[{time, label}]`, newest first
///
/// `save` follows the host convention: the *previous* on-disk revision is
/// rotated into the backup history before the new tree lands. Restoring
/// the most recent backup immediately after a save therefore yields the
/// pre-save configuration.
#[derive(Clone, Debug)]
pub struct FsConfigStore {
    root: Utf8PathBuf,
}

impl FsConfigStore {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn active_path(&self) -> Utf8PathBuf {
        self.root.join(ACTIVE_CONFIG_FILE)
    }

    fn backup_dir(&self) -> Utf8PathBuf {
        self.root.join(BACKUP_DIR)
    }

    fn index_path(&self) -> Utf8PathBuf {
        self.backup_dir().join(BACKUP_INDEX_FILE)
    }

    pub fn backup_path(&self, time: i64) -> Utf8PathBuf {
        self.backup_dir().join(format!("config-{time}.json"))
    }

    /// Seed a fresh store with an active configuration and no history.
    pub fn init(&self, tree: &ConfigTree) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|source| StoreError::Write {
            path: self.root.clone(),
            source,
        })?;
        write_json(&self.active_path(), tree)
    }

    /// Load the active configuration. A missing active file is a
    /// precondition failure, not an empty tree.
    pub fn load(&self) -> Result<ConfigTree, StoreError> {
        let path = self.active_path();
        if !path.is_file() {
            return Err(StoreError::Missing(self.root.clone()));
        }
        read_json(&path)
    }

    /// Persist `tree` as the active configuration, rotating the previous
    /// revision into the backup history under `label`.
    ///
    /// Saves landing in the same second are nudged forward so each backup
    /// file name stays unique.
    pub fn save(
        &self,
        tree: &ConfigTree,
        label: &str,
        now: i64,
    ) -> Result<BackupRecord, StoreError> {
        let active = self.active_path();
        if !active.is_file() {
            return Err(StoreError::Missing(self.root.clone()));
        }
        let previous = fs::read(&active).map_err(|source| StoreError::Read {
            path: active.clone(),
            source,
        })?;

        fs::create_dir_all(self.backup_dir()).map_err(|source| StoreError::Write {
            path: self.backup_dir(),
            source,
        })?;

        let mut time = now;
        while self.backup_path(time).is_file() {
            time += 1;
        }
        let backup_file = self.backup_path(time);
        fs::write(&backup_file, &previous).map_err(|source| StoreError::Write {
            path: backup_file,
            source,
        })?;

        let record = BackupRecord {
            time,
            label: label.to_string(),
        };
        let mut index = self.list_backups()?;
        index.insert(0, record.clone());
        write_json(&self.index_path(), &index)?;

        write_json(&active, tree)?;
        Ok(record)
    }

    /// Backup history, newest first. A store with no index has no backups.
    pub fn list_backups(&self) -> Result<Vec<BackupRecord>, StoreError> {
        let path = self.index_path();
        if !path.is_file() {
            return Ok(Vec::new());
        }
        read_json(&path)
    }

    /// Install the backup at `path` as the active configuration. No new
    /// backup record is created for the replaced revision.
    pub fn restore_from(&self, path: &Utf8Path) -> Result<ConfigTree, StoreError> {
        let tree: ConfigTree = read_json(path)?;
        write_json(&self.active_path(), &tree)?;
        Ok(tree)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Utf8Path) -> Result<T, StoreError> {
    let text = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| StoreError::Parse {
        path: path.to_owned(),
        source,
    })
}

fn write_json<T: Serialize>(path: &Utf8Path, value: &T) -> Result<(), StoreError> {
    let mut text = serde_json::to_string_pretty(value).map_err(|source| StoreError::Parse {
        path: path.to_owned(),
        source,
    })?;
    text.push('\n');
    fs::write(path, text).map_err(|source| StoreError::Write {
        path: path.to_owned(),
        source,
    })
}

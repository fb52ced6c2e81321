use camino::Utf8Path;
use sattuner_domain::model::ConfigTree;
use sattuner_store::FsConfigStore;
use serde_json::{Value, json};

/// A store seeded with `value` as the active configuration.
pub fn seeded_store(value: Value) -> (tempfile::TempDir, FsConfigStore) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let root = Utf8Path::from_path(dir.path()).expect("utf8 path").to_owned();
    let store = FsConfigStore::new(root);
    store
        .init(&ConfigTree::from_value(value))
        .expect("seed store");
    (dir, store)
}

/// A configuration missing every optimization.
pub fn untuned_value() -> Value {
    json!({
        "interfaces": {"wan": {"if": "igc0", "blockpriv": ""}},
        "system": {"user": [{"name": "admin"}]}
    })
}

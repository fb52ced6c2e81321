//! End-to-end tests over the sattuner binary: seeded stores on disk, one
//! JSON envelope per invocation, exit codes per the output contract.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

#[allow(deprecated)]
fn sattuner_cmd() -> Command {
    Command::cargo_bin("sattuner").unwrap()
}

/// Seed a store root with an active configuration.
fn seed_store(root: &Path, tree: &Value) {
    fs::create_dir_all(root).expect("create store root");
    fs::write(
        root.join("config.json"),
        serde_json::to_string_pretty(tree).expect("serialize tree"),
    )
    .expect("write active config");
}

/// Settings file pinning the reload command so tests never depend on a
/// host sysctl.
fn seed_settings(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("sattuner.toml");
    fs::write(&path, "sysctl_cmd = \"true\"\n").expect("write settings");
    path
}

fn untuned_tree() -> Value {
    json!({
        "interfaces": {"wan": {"if": "igc0", "blockpriv": ""}},
        "system": {"user": [{"name": "admin"}]}
    })
}

fn load_active(root: &Path) -> Value {
    let text = fs::read_to_string(root.join("config.json")).expect("read active config");
    serde_json::from_str(&text).expect("parse active config")
}

fn parse_stdout(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout is one JSON object")
}

#[test]
fn audit_scores_an_untuned_store_at_50() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path().join("conf");
    seed_store(&root, &untuned_tree());

    let assert = sattuner_cmd()
        .args(["--store-root", root.to_str().unwrap(), "audit"])
        .assert()
        .success();

    let envelope = parse_stdout(&assert.get_output().stdout);
    assert_eq!(envelope["status"], "success");
    assert_eq!(envelope["data"]["score"], 50);
    assert_eq!(envelope["data"]["report"]["wan.block_private"]["status"], "FAIL");
    assert_eq!(envelope["data"]["report"]["wan.reject_leases"]["status"], "FAIL");
    assert_eq!(envelope["data"]["report"]["system.tunables"]["status"], "WARN");
}

#[test]
fn audit_without_a_store_exits_1_with_an_error_envelope() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path().join("missing");

    let assert = sattuner_cmd()
        .args(["--store-root", root.to_str().unwrap(), "audit"])
        .assert()
        .failure()
        .code(1);

    let envelope = parse_stdout(&assert.get_output().stdout);
    assert_eq!(envelope["status"], "error");
    assert!(envelope["data"].is_object());
}

#[test]
fn apply_then_audit_scores_100() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path().join("conf");
    seed_store(&root, &untuned_tree());
    let settings = seed_settings(dir.path());

    let assert = sattuner_cmd()
        .args(["--config", settings.to_str().unwrap()])
        .args(["--store-root", root.to_str().unwrap(), "apply"])
        .assert()
        .success();
    let envelope = parse_stdout(&assert.get_output().stdout);
    assert_eq!(envelope["status"], "success");
    assert_eq!(envelope["data"]["changes"].as_array().map(Vec::len), Some(3));

    let assert = sattuner_cmd()
        .args(["--store-root", root.to_str().unwrap(), "audit"])
        .assert()
        .success();
    let envelope = parse_stdout(&assert.get_output().stdout);
    assert_eq!(envelope["data"]["score"], 100);

    // reject-leases contract on the stored tree itself
    let active = load_active(&root);
    assert_eq!(
        active["interfaces"]["wan"]["rejectleasesfrom"],
        "192.168.100.1"
    );
    assert!(active["interfaces"]["wan"].get("blockpriv").is_none());
}

#[test]
fn apply_twice_converges_to_the_same_tree() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path().join("conf");
    seed_store(&root, &untuned_tree());
    let settings = seed_settings(dir.path());

    for _ in 0..2 {
        sattuner_cmd()
            .args(["--config", settings.to_str().unwrap()])
            .args(["--store-root", root.to_str().unwrap(), "apply"])
            .assert()
            .success();
    }
    let after_two = load_active(&root);

    sattuner_cmd()
        .args(["--config", settings.to_str().unwrap()])
        .args(["--store-root", root.to_str().unwrap(), "apply"])
        .assert()
        .success();

    assert_eq!(load_active(&root), after_two);
}

#[test]
fn apply_appends_to_an_existing_reject_leases_list() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path().join("conf");
    let mut tree = untuned_tree();
    tree["interfaces"]["wan"]["rejectleasesfrom"] = json!("10.0.0.1");
    seed_store(&root, &tree);
    let settings = seed_settings(dir.path());

    sattuner_cmd()
        .args(["--config", settings.to_str().unwrap()])
        .args(["--store-root", root.to_str().unwrap(), "apply"])
        .assert()
        .success();

    let active = load_active(&root);
    assert_eq!(
        active["interfaces"]["wan"]["rejectleasesfrom"],
        "10.0.0.1 192.168.100.1"
    );
}

#[test]
fn restore_without_backups_is_a_business_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path().join("conf");
    seed_store(&root, &untuned_tree());

    let assert = sattuner_cmd()
        .args(["--store-root", root.to_str().unwrap(), "restore"])
        .assert()
        .failure()
        .code(1);

    let envelope = parse_stdout(&assert.get_output().stdout);
    assert_eq!(envelope["status"], "error");
    assert_eq!(envelope["message"], "no backups found");
    // Nothing was mutated.
    assert_eq!(load_active(&root), untuned_tree());
}

#[test]
fn restore_after_apply_recovers_the_pre_apply_tree() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path().join("conf");
    seed_store(&root, &untuned_tree());
    let settings = seed_settings(dir.path());

    sattuner_cmd()
        .args(["--config", settings.to_str().unwrap()])
        .args(["--store-root", root.to_str().unwrap(), "apply"])
        .assert()
        .success();
    assert_ne!(load_active(&root), untuned_tree());

    let assert = sattuner_cmd()
        .args(["--store-root", root.to_str().unwrap(), "restore"])
        .assert()
        .success();
    let envelope = parse_stdout(&assert.get_output().stdout);
    assert_eq!(envelope["status"], "success");
    assert!(envelope["data"]["restored_at"].is_string());

    assert_eq!(load_active(&root), untuned_tree());
}

#[test]
fn security_scan_flags_and_unflags_a_wan_any_rule() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path().join("conf");
    let mut tree = json!({
        "system": {"ssh": {"port": "2222"}, "webgui": {"port": "8443"}},
        "filter": {"rule": [{
            "interface": "wan",
            "source": {"any": ""},
            "destination": {"any": ""}
        }]}
    });
    seed_store(&root, &tree);

    let assert = sattuner_cmd()
        .args(["--store-root", root.to_str().unwrap(), "security"])
        .assert()
        .success();
    let envelope = parse_stdout(&assert.get_output().stdout);
    let issues = envelope["data"]["issues"].as_array().expect("issues");
    assert!(issues.iter().any(|i| i["severity"] == "CRITICAL"));

    tree["filter"]["rule"][0]["disabled"] = json!("");
    seed_store(&root, &tree);

    let assert = sattuner_cmd()
        .args(["--store-root", root.to_str().unwrap(), "security"])
        .assert()
        .success();
    let envelope = parse_stdout(&assert.get_output().stdout);
    let issues = envelope["data"]["issues"].as_array().expect("issues");
    assert!(issues.iter().all(|i| i["severity"] != "CRITICAL"));
}

#[test]
fn ultra_writes_the_dedicated_loader_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path().join("conf");
    seed_store(&root, &untuned_tree());
    let loader_dir = dir.path().join("loader.conf.d");
    fs::create_dir(&loader_dir).expect("create loader dir");

    sattuner_cmd()
        .args(["--store-root", root.to_str().unwrap()])
        .args(["--loader-dir", loader_dir.to_str().unwrap(), "ultra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("restart"));

    let content =
        fs::read_to_string(loader_dir.join("starlink.conf")).expect("read managed loader file");
    assert!(content.contains("kern.ipc.nmbclusters=\"1000000\""));
    assert!(content.contains("net.inet.tcp.tso=\"0\""));
}

#[test]
fn ultra_on_the_classic_path_is_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path().join("conf");
    seed_store(&root, &untuned_tree());
    let classic = dir.path().join("loader.conf.local");
    fs::write(&classic, "autoboot_delay=\"3\"\n").expect("seed classic file");
    let missing_dir = dir.path().join("no-loader-dir");

    for _ in 0..2 {
        sattuner_cmd()
            .args(["--store-root", root.to_str().unwrap()])
            .args(["--loader-dir", missing_dir.to_str().unwrap()])
            .args(["--classic-loader-path", classic.to_str().unwrap(), "ultra"])
            .assert()
            .success();
    }

    let content = fs::read_to_string(&classic).expect("read classic file");
    assert!(content.contains("autoboot_delay=\"3\""));
    assert_eq!(content.matches("kern.ipc.maxsockbuf").count(), 1);
}

#[test]
fn explain_prints_remediation_guidance() {
    sattuner_cmd()
        .args(["explain", "wan.reject_leases"])
        .assert()
        .success()
        .stdout(predicate::str::contains("192.168.100.1"));
}

#[test]
fn explain_unknown_rule_exits_1() {
    sattuner_cmd()
        .args(["explain", "wan.bogus"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Available rule IDs"));
}

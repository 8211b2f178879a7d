//! End-to-end tests for the uaspace binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the user's config file
fn uaspace(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("uaspace").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("UASPACE_CONFIG")
        .arg("--config")
        .arg(dir.path().join("config.toml"));
    cmd
}

#[test]
fn test_browse_root_table() {
    let dir = TempDir::new().unwrap();
    uaspace(&dir)
        .args(["browse", "RootFolder"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HasTypeDefinition"))
        .stdout(predicate::str::contains("Objects"))
        .stdout(predicate::str::contains("i=87"));
}

#[test]
fn test_browse_root_by_object_type_json() {
    let dir = TempDir::new().unwrap();
    let output = uaspace(&dir)
        .args(["browse", "i=84", "--node-class", "ObjectType", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let refs: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let refs = refs.as_array().unwrap();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0]["node_id"], "i=61");
    assert_eq!(refs[0]["reference_type_id"], "i=40");
}

#[test]
fn test_browse_with_subtypes() {
    let dir = TempDir::new().unwrap();
    let output = uaspace(&dir)
        .args([
            "browse",
            "References",
            "--reference-type",
            "HasSubtype",
            "--include-subtypes",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let refs: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let targets: Vec<&str> = refs
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["node_id"].as_str().unwrap())
        .collect();
    assert_eq!(targets, vec!["i=33", "i=32"]);
}

#[test]
fn test_browse_unknown_node_is_empty() {
    let dir = TempDir::new().unwrap();
    uaspace(&dir)
        .args(["browse", "ns=2;s=Pump", "--direction", "both"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No references found."));
}

#[test]
fn test_browse_rejects_bad_node_id() {
    let dir = TempDir::new().unwrap();
    uaspace(&dir)
        .args(["browse", "x=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid node id"));
}

#[test]
fn test_read_hit_and_miss() {
    let dir = TempDir::new().unwrap();
    uaspace(&dir)
        .args(["read", "RootFolder", "DisplayName", "Value"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Good"))
        .stdout(predicate::str::contains("root"))
        .stdout(predicate::str::contains("BadNotReadable"));
}

#[test]
fn test_read_without_root_attributes() {
    let dir = TempDir::new().unwrap();
    uaspace(&dir)
        .args(["--no-root-attributes", "read", "RootFolder", "DisplayName"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BadNotReadable"))
        .stdout(predicate::str::contains("Good").not());
}

#[test]
fn test_write_is_not_supported() {
    let dir = TempDir::new().unwrap();
    uaspace(&dir)
        .args(["write", "RootFolder", "DisplayName", "renamed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BadWriteNotSupported"));
}

#[test]
fn test_dump_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let first = uaspace(&dir).arg("dump").output().unwrap();
    let second = uaspace(&dir).arg("dump").output().unwrap();

    assert!(first.status.success());
    assert!(!first.stdout.is_empty());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_config_controls_format() {
    let dir = TempDir::new().unwrap();
    uaspace(&dir)
        .args(["config", "set", "format", "json"])
        .assert()
        .success();

    uaspace(&dir)
        .args(["config", "get", "format"])
        .assert()
        .success()
        .stdout("json\n");

    let output = uaspace(&dir).args(["browse", "TypesFolder"]).output().unwrap();
    let refs: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(refs.as_array().unwrap().len(), 2);
}

#[test]
fn test_config_init_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    uaspace(&dir).args(["config", "init"]).assert().success();
    uaspace(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    uaspace(&dir).args(["config", "init", "--force"]).assert().success();
}

#[test]
fn test_completions_written_to_directory() {
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("completions");
    uaspace(&dir)
        .args(["completions", "bash", "--out-dir"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let script = std::fs::read_to_string(out_dir.join("uaspace.bash")).unwrap();
    assert!(script.contains("uaspace"));
    assert!(script.contains("browse"));
}

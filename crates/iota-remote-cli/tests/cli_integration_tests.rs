//! CLI integration tests
//!
//! Only commands that fail before or without reaching a node are exercised
//! here, so no network is needed.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::process::Command;
use tempfile::TempDir;

const TX_LEN: usize = 2673;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_iota-remote"))
}

fn tx_string(fill: char) -> String {
    std::iter::repeat(fill).take(TX_LEN).collect()
}

#[test]
fn test_persist_writes_action_and_prints_cache_key() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("action.json");

    let output = cli()
        .args(["persist", &tx_string('A'), &tx_string('9'), "--output"])
        .arg(&out)
        .output()
        .expect("Failed to execute CLI");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let key = String::from_utf8(output.stdout).unwrap();
    let key = key.trim();
    assert_eq!(key.len(), 64);
    assert!(key.chars().all(|c| c.is_ascii_hexdigit()));

    let persisted: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(persisted["command"], "broadcastTransactions");
    assert_eq!(persisted["transactions"].as_array().unwrap().len(), 2);
    assert_eq!(persisted["transactions"][0]["trytes"], tx_string('A'));
    assert_eq!(persisted["transactions"][1]["trytes"], tx_string('9'));
}

#[test]
fn test_persist_rejects_invalid_trytes() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("action.json");

    let output = cli()
        .args(["persist", &tx_string('A'), "not-trytes", "-o"])
        .arg(&out)
        .output()
        .expect("Failed to execute CLI");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("entry 1"), "stderr: {}", stderr);
    assert!(!out.exists());
}

#[test]
fn test_replay_rejects_unknown_command() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("action.json");
    fs::write(&file, r#"{"command":"getNodeInfo"}"#).unwrap();

    let output = cli()
        .arg("replay")
        .arg(&file)
        .output()
        .expect("Failed to execute CLI");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown command: getNodeInfo"), "stderr: {}", stderr);
}

#[test]
fn test_replay_rejects_bad_node_url() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("action.json");
    fs::write(&file, r#"{"command":"interruptAttachingToTangle"}"#).unwrap();

    let output = cli()
        .arg("replay")
        .arg(&file)
        .args(["--node", "localhost:14265"])
        .output()
        .expect("Failed to execute CLI");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration error"), "stderr: {}", stderr);
}

#[test]
fn test_config_file_is_read() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("node.toml");
    fs::write(&config, "timeout_secs = 0\n").unwrap();

    let output = cli()
        .args(["interrupt", "--config"])
        .arg(&config)
        .env_remove("IOTA_NODE_TIMEOUT_SECS")
        .output()
        .expect("Failed to execute CLI");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("timeout_secs"), "stderr: {}", stderr);
}

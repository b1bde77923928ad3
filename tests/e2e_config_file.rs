/// End-to-end tests for config file handling
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_explicit_config_file_not_found() {
    cargo_bin_cmd!("sysmon-api")
        .args(["--config", "/nonexistent/sysmon-api.config.yml"])
        .assert()
        .code(1)
        .stderr(contains("Failed to read config file"));
}

#[test]
fn test_explicit_config_file_invalid_yaml() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("broken.yml");
    fs::write(&config_path, "data_path: [[[broken").unwrap();

    cargo_bin_cmd!("sysmon-api")
        .args(["--config", config_path.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(contains("Failed to parse config file"));
}

#[test]
fn test_config_file_with_bad_bind_address() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("sysmon-api.config.yml");
    fs::write(&config_path, "bind_addr: not-an-address\n").unwrap();

    cargo_bin_cmd!("sysmon-api")
        .args(["--config", config_path.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(contains("Invalid bind address"));
}

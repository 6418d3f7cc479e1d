//! # Error Handling Integration Tests / 错误处理集成测试
//!
//! This module contains integration tests for error handling scenarios,
//! testing malformed inputs and configurations that do not match the catalog.
//!
//! 此模块包含错误处理场景的集成测试，
//! 测试格式错误的输入以及与目录不匹配的配置。

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Helper function to write a matrix file next to a copy of the fixture catalog
/// 在示例目录副本旁写入矩阵文件的辅助函数
fn write_matrix(temp_dir: &TempDir, content: &str) -> PathBuf {
    fs::copy(
        "tests/fixtures/expand_catalog.json",
        temp_dir.path().join("catalog.json"),
    )
    .unwrap();
    let matrix_path = temp_dir.path().join("DeviceMatrix.toml");
    fs::write(&matrix_path, content).unwrap();
    matrix_path
}

fn expand(matrix: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("device-matrix").unwrap();
    cmd.env("NO_COLOR", "1")
        .arg("--lang")
        .arg("en")
        .arg("expand")
        .arg("--config")
        .arg(matrix);
    cmd
}

#[test]
fn test_invalid_toml() {
    let temp_dir = TempDir::new().unwrap();
    let matrix = write_matrix(
        &temp_dir,
        r#"
catalog = "catalog.json"
# Invalid TOML - missing closing bracket
[[configurations]
name = "broken"
"#,
    );

    expand(&matrix)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse matrix file"));
}

#[test]
fn test_unknown_device_names_the_configuration_and_id() {
    let temp_dir = TempDir::new().unwrap();
    let matrix = write_matrix(
        &temp_dir,
        r#"
catalog = "catalog.json"

[[configurations]]
name = "Typo"
devices = ["Nexus55"]
"#,
    );

    expand(&matrix)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Configuration 'Typo' does not match the catalog",
        ))
        .stderr(predicate::str::contains("unknown device type 'Nexus55'"));
}

#[test]
fn test_unknown_api_level() {
    let temp_dir = TempDir::new().unwrap();
    let matrix = write_matrix(
        &temp_dir,
        r#"
catalog = "catalog.json"

[[configurations]]
name = "Future"
api_levels = ["99"]
"#,
    );

    expand(&matrix)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown API level type '99'"));
}

#[test]
fn test_missing_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let matrix = temp_dir.path().join("DeviceMatrix.toml");
    fs::write(&matrix, "catalog = \"nowhere.json\"\n").unwrap();

    expand(&matrix)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read device catalog"));
}

#[test]
fn test_malformed_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let matrix = write_matrix(&temp_dir, "catalog = \"catalog.json\"\n");
    fs::write(temp_dir.path().join("catalog.json"), "{ not json").unwrap();

    expand(&matrix)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse device catalog"));
}

#[test]
fn test_empty_matrix_file_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let matrix = write_matrix(&temp_dir, "catalog = \"catalog.json\"\n");

    expand(&matrix)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The matrix file defines no configurations.",
        ));
}

#[test]
fn test_zero_total_runners() {
    let temp_dir = TempDir::new().unwrap();
    let matrix = write_matrix(
        &temp_dir,
        r#"
catalog = "catalog.json"

[[configurations]]
name = "One"
devices = ["Nexus5"]
api_levels = ["19"]
languages = ["en"]
orientations = ["portrait"]
"#,
    );

    expand(&matrix)
        .arg("--total-runners")
        .arg("0")
        .arg("--runner-index")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Total runners must be at least 1."));
}

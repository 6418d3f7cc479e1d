use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn device_matrix() -> Command {
    let mut cmd = Command::cargo_bin("device-matrix").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// This test expands the fixture matrix file. It asserts that every
/// configuration is listed and that combinations come out in dispatch order.
///
/// 这个测试展开示例矩阵文件。它断言每个配置都被列出，并且组合按调度顺序输出。
#[test]
fn test_expand_lists_combinations_in_order() {
    let mut cmd = device_matrix();
    cmd.arg("expand")
        .arg("--config")
        .arg("tests/fixtures/expand_matrix.toml");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Loading test matrix from:"))
        .stdout(predicate::str::contains("== Nexus smoke =="))
        .stdout(predicate::str::contains(
            "2 devices × 2 API levels × 3 languages × 1 orientation = 12 combinations",
        ))
        .stdout(predicate::str::contains(
            "[ 1/12] Google Nexus5 | Android 4.4 - KitKat (API 19) | German (de) | Portrait",
        ))
        .stdout(predicate::str::contains(
            "[12/12] Google Nexus7 | Android 4.3 - Jelly Bean (API 18) | French (fr) | Portrait",
        ))
        .stdout(predicate::str::contains("== Landscape only (1) =="));
}

/// A configuration with an empty dimension is reported, not treated as an error.
///
/// 存在空维度的配置会被报告，而不会被视为错误。
#[test]
fn test_expand_reports_empty_configuration() {
    let mut cmd = device_matrix();
    cmd.arg("expand")
        .arg("--config")
        .arg("tests/fixtures/expand_matrix.toml");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("== Nothing enabled =="))
        .stdout(predicate::str::contains(
            "No combinations: at least one dimension has nothing enabled.",
        ));
}

/// Device/API pairs missing from the catalog's supported list are warned
/// about but still expanded.
///
/// 目录中未列出的设备/API 组合会发出警告，但仍会被展开。
#[test]
fn test_expand_warns_about_unsupported_pairs() {
    let mut cmd = device_matrix();
    cmd.arg("expand")
        .arg("--config")
        .arg("tests/fixtures/expand_matrix.toml");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Google Nexus5 does not list API 18 as supported; the farm may reject these runs.",
        ))
        .stdout(predicate::str::contains(
            "Google Nexus5 | Android 4.3 - Jelly Bean (API 18) | English (en) | Portrait",
        ));
}

#[test]
fn test_expand_filters_by_display_name() {
    let mut cmd = device_matrix();
    cmd.arg("expand")
        .arg("--config")
        .arg("tests/fixtures/expand_matrix.toml")
        .arg("--name")
        .arg("Landscape only (1)");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "[1/1] Google Nexus7 | Android 4.4 - KitKat (API 19) | English (en) | Landscape",
        ))
        .stdout(predicate::str::contains("Nexus smoke").not());
}

#[test]
fn test_expand_unknown_name_fails() {
    let mut cmd = device_matrix();
    cmd.arg("expand")
        .arg("--config")
        .arg("tests/fixtures/expand_matrix.toml")
        .arg("--name")
        .arg("Missing");

    cmd.assert().failure().stderr(predicate::str::contains(
        "No configuration named 'Missing' in the matrix file",
    ));
}

/// Each runner prints only its own share, numbered by position in the full expansion.
///
/// 每个运行器只打印属于自己的部分，编号为其在完整展开中的位置。
#[test]
fn test_expand_sharded_across_runners() {
    let mut cmd = device_matrix();
    cmd.arg("expand")
        .arg("--config")
        .arg("tests/fixtures/expand_matrix.toml")
        .arg("--name")
        .arg("Nexus smoke")
        .arg("--total-runners")
        .arg("5")
        .arg("--runner-index")
        .arg("2");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "This runner dispatches 2 of 12 combinations.",
        ))
        .stdout(predicate::str::contains("[ 3/12]"))
        .stdout(predicate::str::contains("[ 8/12]"))
        .stdout(predicate::str::contains("[ 1/12]").not());
}

#[test]
fn test_expand_runner_index_requires_total() {
    let mut cmd = device_matrix();
    cmd.arg("expand")
        .arg("--config")
        .arg("tests/fixtures/expand_matrix.toml")
        .arg("--runner-index")
        .arg("0");

    cmd.assert().failure();
}

#[test]
fn test_expand_json_output() {
    let mut cmd = device_matrix();
    cmd.arg("expand")
        .arg("--config")
        .arg("tests/fixtures/expand_matrix.toml")
        .arg("--format")
        .arg("json");

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 3);

    assert_eq!(reports[0]["name"], "Nexus smoke");
    assert_eq!(reports[0]["summary"]["total"], 12);
    assert!(reports[0].get("total_combinations").is_none());
    let first = &reports[0]["combinations"][0];
    assert_eq!(first["device"], "Nexus5");
    assert_eq!(first["api"], "19");
    assert_eq!(first["language"], "de");
    assert_eq!(
        first["label"],
        "Google Nexus5 | Android 4.4 - KitKat (API 19) | German (de) | Portrait"
    );

    assert_eq!(reports[1]["display_name"], "Landscape only (1)");
    assert_eq!(reports[2]["combinations"].as_array().unwrap().len(), 0);
}

#[test]
fn test_expand_writes_html_report() {
    let dir = tempdir().unwrap();
    let report = dir.path().join("matrix.html");

    let mut cmd = device_matrix();
    cmd.arg("expand")
        .arg("--config")
        .arg("tests/fixtures/expand_matrix.toml")
        .arg("--html")
        .arg(&report);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("HTML report written to:"));

    let html = fs::read_to_string(&report).unwrap();
    assert!(html.contains("Nexus smoke"));
    assert!(html.contains("Landscape only (1)"));
    assert!(html.contains("Jelly Bean"));
}

#[test]
fn test_expand_missing_matrix_file_fails() {
    let mut cmd = device_matrix();
    cmd.arg("expand")
        .arg("--config")
        .arg("tests/fixtures/does_not_exist.toml");

    cmd.assert().failure().stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_defaults_prints_both_presets() {
    let mut cmd = device_matrix();
    cmd.arg("--lang")
        .arg("en")
        .arg("defaults")
        .arg("--catalog")
        .arg("tests/fixtures/sample_catalog.json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("== Sample Spark configuration (4) =="))
        .stdout(predicate::str::contains("== Sample configuration (18) =="))
        .stdout(predicate::str::contains("6.0 - Marshmallow"));
}

#[test]
fn test_defaults_json_output() {
    let mut cmd = device_matrix();
    cmd.arg("--lang")
        .arg("en")
        .arg("defaults")
        .arg("--catalog")
        .arg("tests/fixtures/sample_catalog.json")
        .arg("--format")
        .arg("json");

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(reports[0]["display_name"], "Sample Spark configuration (4)");
    assert_eq!(reports[0]["combinations"], 4);
    assert_eq!(reports[0]["devices"], serde_json::json!(["Nexus9", "shamu"]));
    assert_eq!(reports[1]["api_levels"], serde_json::json!(["23", "22", "21"]));
}

/// A catalog that cannot fill the presets fails instead of producing a smaller matrix.
///
/// 无法满足预设的目录会直接失败，而不是生成更小的矩阵。
#[test]
fn test_defaults_insufficient_catalog_fails() {
    let mut cmd = device_matrix();
    cmd.arg("--lang")
        .arg("en")
        .arg("defaults")
        .arg("--catalog")
        .arg("tests/fixtures/expand_catalog.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "Cannot generate default configurations from this catalog",
        ))
        .stderr(predicate::str::contains("sample preset needs 2"));
}

/// `init` writes a matrix file that `expand` can read back.
///
/// `init` 写入的矩阵文件可以被 `expand` 读取。
#[test]
fn test_init_then_expand() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("DeviceMatrix.toml");
    let catalog = fs::canonicalize("tests/fixtures/sample_catalog.json").unwrap();

    let mut init = device_matrix();
    init.arg("--lang")
        .arg("en")
        .arg("init")
        .arg("--catalog")
        .arg(&catalog)
        .arg("--output")
        .arg(&output)
        .arg("--non-interactive");

    init.assert()
        .success()
        .stdout(predicate::str::contains("Created"))
        .stdout(predicate::str::contains("Sample Spark configuration (4)"));

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("language = \"en\""));
    assert!(content.contains("name = \"Sample Spark configuration\""));

    let mut expand = device_matrix();
    expand.arg("expand").arg("--config").arg(&output);

    expand
        .assert()
        .success()
        .stdout(predicate::str::contains("== Sample Spark configuration (4) =="))
        .stdout(predicate::str::contains("== Sample configuration (18) =="))
        .stdout(predicate::str::contains("[18/18]"));
}

#[test]
fn test_init_does_not_overwrite_without_force() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("DeviceMatrix.toml");
    fs::write(&output, "# keep me\n").unwrap();

    let mut cmd = device_matrix();
    cmd.arg("--lang")
        .arg("en")
        .arg("init")
        .arg("--catalog")
        .arg("tests/fixtures/sample_catalog.json")
        .arg("--output")
        .arg(&output)
        .arg("--non-interactive");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("File already exists"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "# keep me\n");
}

#[test]
fn test_init_force_overwrites() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("DeviceMatrix.toml");
    fs::write(&output, "# stale\n").unwrap();

    let mut cmd = device_matrix();
    cmd.arg("--lang")
        .arg("en")
        .arg("init")
        .arg("--catalog")
        .arg("tests/fixtures/sample_catalog.json")
        .arg("--output")
        .arg(&output)
        .arg("--non-interactive")
        .arg("--force");

    cmd.assert().success();
    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("[[configurations]]"));
}

#[test]
fn test_chinese_help() {
    let mut cmd = device_matrix();
    cmd.arg("--lang").arg("zh-CN").arg("--help");

    cmd.assert().success().stdout(predicate::str::contains("--lang"));
}

#[test]
fn test_no_subcommand_prints_help() {
    let mut cmd = device_matrix();
    cmd.arg("--lang").arg("en");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("expand"))
        .stdout(predicate::str::contains("defaults"));
}

/// The HTML report of a sharded run lists the same share as the console.
///
/// 拆分运行的 HTML 报告与控制台列出相同的部分。
#[test]
fn test_expand_html_report_follows_shard() {
    let dir = tempdir().unwrap();
    let report = dir.path().join("shard.html");

    let mut cmd = device_matrix();
    cmd.arg("expand")
        .arg("--config")
        .arg("tests/fixtures/expand_matrix.toml")
        .arg("--name")
        .arg("Nexus smoke")
        .arg("--total-runners")
        .arg("5")
        .arg("--runner-index")
        .arg("2")
        .arg("--html")
        .arg(&report);

    cmd.assert().success();

    let html = fs::read_to_string(&report).unwrap();
    assert!(html.contains("This runner dispatches 2 of 12 combinations."));
    // Positions 3 and 8: Nexus5/19/fr and Nexus7/19/en.
    assert_eq!(html.matches("<tr>").count(), 3);
    assert!(html.contains("French (fr)"));
    assert!(html.contains("Google Nexus7"));
    assert!(!html.contains("German (de)"));
}

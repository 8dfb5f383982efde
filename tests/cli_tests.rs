//! CLI integration tests using assert_cmd.
//!
//! None of these need network access; `serve` is only checked through
//! `--help`.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn showcase() -> Command {
    let mut cmd = Command::cargo_bin("showcase").unwrap();
    cmd.env_remove("SHOWCASE_CATALOG").env("RUST_LOG", "warn");
    cmd
}

// --- Help ---

#[test]
fn help_shows_all_subcommands() {
    showcase().arg("--help").assert().success().stdout(
        predicate::str::contains("list")
            .and(predicate::str::contains("export"))
            .and(predicate::str::contains("serve"))
            .and(predicate::str::contains("--catalog")),
    );
}

#[test]
fn help_serve_shows_args() {
    showcase()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--port").and(predicate::str::contains("--static-dir")));
}

#[test]
fn missing_subcommand_fails() {
    showcase().assert().failure();
}

// --- list ---

#[test]
fn list_prints_embedded_projects_in_order() {
    let output = showcase().arg("list").assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    let bfsio = text.find("BFSIO").expect("BFSIO listed");
    let foster = text.find("Foster Academy").expect("Foster Academy listed");
    assert!(bfsio < foster);
    assert!(text.contains("link:  https://bfsio.net/"));
}

#[test]
fn list_reads_catalog_file() {
    let file = common::write_catalog(common::THREE_PROJECT_TOML);
    showcase()
        .arg("--catalog")
        .arg(file.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sketchbook"));
}

#[test]
fn catalog_file_from_env() {
    let file = common::write_catalog(common::THREE_PROJECT_TOML);
    showcase()
        .env("SHOWCASE_CATALOG", file.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sketchbook"));
}

#[test]
fn missing_catalog_file_fails_with_path() {
    showcase()
        .args(["--catalog", "/nonexistent/showcase.toml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/showcase.toml"));
}

#[test]
fn malformed_catalog_file_fails() {
    let file = common::write_catalog("[[projects]]\ntitle = \"No description\"\n");
    showcase()
        .arg("--catalog")
        .arg(file.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("description"));
}

// --- export ---

#[test]
fn export_writes_json_array_to_stdout() {
    let output = showcase().arg("export").assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["title"], "BFSIO");
    assert_eq!(entries[1]["title"], "Foster Academy");
}

#[test]
fn export_pretty_is_multiline() {
    showcase()
        .args(["export", "--pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  {\n"));
}

#[test]
fn export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("projects.json");
    showcase()
        .arg("export")
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json[0]["imgSrc"], "/static/images/bfsio.png");
}

#[test]
fn export_catalog_file_preserves_order() {
    let file = common::write_catalog(common::THREE_PROJECT_TOML);
    let output = showcase()
        .arg("--catalog")
        .arg(file.path())
        .arg("export")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["BFSIO", "Foster Academy", "Sketchbook"]);
}

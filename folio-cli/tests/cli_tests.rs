//! Integration tests for the Folio CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Create a markdown file for testing
fn create_test_markdown(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("folio-cli").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("folio-cli").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn test_import_help() {
    let mut cmd = Command::cargo_bin("folio-cli").unwrap();
    cmd.args(["import", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Import a markdown file"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn test_import_missing_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_markdown(&temp_dir, "note.md", "# Test\n\nContent");

    let mut cmd = Command::cargo_bin("folio-cli").unwrap();
    cmd.args(["import", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output"));
}

#[test]
fn test_import_nonexistent_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("note.json");

    let mut cmd = Command::cargo_bin("folio-cli").unwrap();
    cmd.args([
        "import",
        "/nonexistent/note.md",
        "--output",
        output.to_str().unwrap(),
    ])
    .assert()
    .failure();
}

#[test]
fn test_import_then_export_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let markdown = "# Title\n\nA paragraph.\n\n> A quote";
    let input = create_test_markdown(&temp_dir, "note.md", markdown);
    let json_path = temp_dir.path().join("note.json");
    let md_path = temp_dir.path().join("out.md");

    let mut cmd = Command::cargo_bin("folio-cli").unwrap();
    cmd.args([
        "import",
        input.to_str().unwrap(),
        "--output",
        json_path.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Imported 3 blocks"));

    let mut cmd = Command::cargo_bin("folio-cli").unwrap();
    cmd.args([
        "export",
        json_path.to_str().unwrap(),
        "--output",
        md_path.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Exported 3 blocks"));

    let exported = fs::read_to_string(&md_path).unwrap();
    assert_eq!(exported, markdown);
}

#[test]
fn test_info_reports_kind_counts() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_markdown(&temp_dir, "note.md", "# Title\n\nBody one.\n\nBody two.");
    let json_path = temp_dir.path().join("note.json");

    Command::cargo_bin("folio-cli")
        .unwrap()
        .args([
            "import",
            input.to_str().unwrap(),
            "--output",
            json_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let mut cmd = Command::cargo_bin("folio-cli").unwrap();
    cmd.args(["info", json_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 blocks"))
        .stdout(predicate::str::contains("heading"))
        .stdout(predicate::str::contains("text"));
}

#[test]
fn test_info_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_markdown(&temp_dir, "note.md", "Body.");
    let json_path = temp_dir.path().join("note.json");

    Command::cargo_bin("folio-cli")
        .unwrap()
        .args([
            "import",
            input.to_str().unwrap(),
            "--output",
            json_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let mut cmd = Command::cargo_bin("folio-cli").unwrap();
    cmd.args(["info", json_path.to_str().unwrap(), "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"blocks\": 1"));
}

#[test]
fn test_validate_accepts_imported_note() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_markdown(&temp_dir, "note.md", "# Title\n\nBody.");
    let json_path = temp_dir.path().join("note.json");

    Command::cargo_bin("folio-cli")
        .unwrap()
        .args([
            "import",
            input.to_str().unwrap(),
            "--output",
            json_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let mut cmd = Command::cargo_bin("folio-cli").unwrap();
    cmd.args(["validate", json_path.to_str().unwrap(), "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid blocks: 0"));
}

#[test]
fn test_validate_rejects_malformed_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{not json").unwrap();

    let mut cmd = Command::cargo_bin("folio-cli").unwrap();
    cmd.args(["validate", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode"));
}

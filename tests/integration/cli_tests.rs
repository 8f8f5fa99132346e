//! CLI integration tests
//!
//! These tests run the lombok-strip binary against scratch copies of the
//! fixtures.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn copy_dir(from: &Path, to: &Path) {
    std::fs::create_dir_all(to).unwrap();
    for entry in std::fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            std::fs::copy(entry.path(), &target).unwrap();
        }
    }
}

fn scratch_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    copy_dir(&fixtures_path().join("java"), &dir.path().join("src"));
    dir
}

/// Command running in `dir`, with colors and the roots env var cleared
fn cli(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lombok-strip").unwrap();
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("LOMBOK_STRIP_ROOTS");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    cli(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lombok-strip"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--profile"));
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    cli(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lombok-strip"));
}

// ============================================================================
// Rewrite Tests
// ============================================================================

#[test]
fn test_cli_default_root_is_src() {
    let dir = scratch_tree();
    cli(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated: "))
        .stdout(predicate::str::contains("User.java"))
        .stdout(predicate::str::contains("Updated 3 of 5 files"))
        .stdout(predicate::str::contains("Clean.java").not());

    let user = std::fs::read_to_string(dir.path().join("src/model/User.java")).unwrap();
    assert!(!user.contains("lombok"));
}

#[test]
fn test_cli_explicit_root() {
    let dir = scratch_tree();
    cli(dir.path())
        .arg("src/service")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 1 of 2 files"));
}

#[test]
fn test_cli_roots_from_env() {
    let dir = scratch_tree();
    cli(dir.path())
        .env("LOMBOK_STRIP_ROOTS", "src/service,src/missing")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 1 of 2 files"));
}

#[test]
fn test_cli_positional_root_with_comma_is_not_split() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("a,b");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("User.java"), "@Data\npublic class User {}\n").unwrap();

    cli(dir.path())
        .arg("a,b")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 1 of 1 files"));

    let user = std::fs::read_to_string(root.join("User.java")).unwrap();
    assert_eq!(user, "public class User {}\n");
}

#[test]
fn test_cli_positional_root_overrides_env() {
    let dir = scratch_tree();
    cli(dir.path())
        .env("LOMBOK_STRIP_ROOTS", "src/model")
        .arg("src/service")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 1 of 2 files"));
}

#[test]
fn test_cli_exclude_prefix_keeps_similar_directory() {
    let dir = TempDir::new().unwrap();
    for rel in ["src/build/Gen.java", "src/buildSrc/Plugin.java"] {
        let path = dir.path().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "@Data\nclass A {}\n").unwrap();
    }

    cli(dir.path())
        .args(["--exclude", "build/**"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 1 of 1 files"));

    let generated = std::fs::read_to_string(dir.path().join("src/build/Gen.java")).unwrap();
    assert!(generated.contains("@Data"));
}

#[test]
fn test_cli_invalid_exclude_is_fatal() {
    let dir = scratch_tree();
    cli(dir.path())
        .args(["--exclude", "src/["])
        .assert()
        .failure();
}

#[test]
fn test_cli_missing_root_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    cli(dir.path())
        .arg("does/not/exist")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 0 of 0 files"));
}

#[test]
fn test_cli_second_run_is_noop() {
    let dir = scratch_tree();
    cli(dir.path()).assert().success();
    cli(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 0 of 5 files"))
        .stdout(predicate::str::contains("Updated: ").not());
}

#[test]
fn test_cli_dry_run() {
    let dir = scratch_tree();
    cli(dir.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Would update: "))
        .stdout(predicate::str::contains("Would update 3 of 5 files"));

    let user = std::fs::read_to_string(dir.path().join("src/model/User.java")).unwrap();
    assert!(user.contains("@Data"));
}

#[test]
fn test_cli_minimal_profile() {
    let dir = scratch_tree();
    cli(dir.path())
        .args(["--profile", "minimal"])
        .assert()
        .success();

    let boatman = std::fs::read_to_string(dir.path().join("src/model/Boatman.java")).unwrap();
    assert!(boatman.contains("@EqualsAndHashCode(callSuper = false)"));
}

#[test]
fn test_cli_exclude() {
    let dir = scratch_tree();
    cli(dir.path())
        .args(["--exclude", "**/service/**"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 2 of 3 files"));
}

// ============================================================================
// Failure Handling
// ============================================================================

#[test]
fn test_cli_read_error_reported_and_run_completes() {
    let dir = scratch_tree();
    std::fs::write(dir.path().join("src/model/Broken.java"), b"@Data\n\xff\n").unwrap();

    cli(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: "))
        .stdout(predicate::str::contains("Broken.java"))
        .stdout(predicate::str::contains("Updated 3 of 6 files"));
}

#[test]
fn test_cli_strict_fails_on_read_error() {
    let dir = scratch_tree();
    std::fs::write(dir.path().join("src/model/Broken.java"), b"@Data\n\xff\n").unwrap();

    cli(dir.path())
        .arg("--strict")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Updated 3 of 6 files"));
}

#[test]
fn test_cli_strict_succeeds_without_errors() {
    let dir = scratch_tree();
    cli(dir.path()).arg("--strict").assert().success();
}

// ============================================================================
// Output Formats and Config
// ============================================================================

#[test]
fn test_cli_json_output() {
    let dir = scratch_tree();
    let output = cli(dir.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["discovered"], 5);
    assert_eq!(value["summary"]["updated"], 3);
    assert_eq!(value["files"].as_array().unwrap().len(), 3);
}

#[test]
fn test_cli_json_to_file() {
    let dir = scratch_tree();
    cli(dir.path())
        .args(["--format", "json", "--output", "report.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to: report.json"));

    let json = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
    assert!(json.contains("\"updated\": 3"));
}

#[test]
fn test_cli_reads_default_config_file() {
    let dir = scratch_tree();
    std::fs::write(
        dir.path().join(".lombok-strip.yml"),
        "roots:\n  - src/model\nrewrite:\n  dry_run: true\n",
    )
    .unwrap();

    cli(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would update 2 of 3 files"));
}

#[test]
fn test_cli_explicit_config_file() {
    let dir = scratch_tree();
    std::fs::write(dir.path().join("strip.toml"), "roots = [\"src/service\"]\n").unwrap();

    cli(dir.path())
        .args(["--config", "strip.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 1 of 2 files"));
}

#[test]
fn test_cli_bad_config_is_fatal() {
    let dir = scratch_tree();
    std::fs::write(dir.path().join("strip.toml"), "profile = \"everything\"\n").unwrap();

    cli(dir.path())
        .args(["--config", "strip.toml"])
        .assert()
        .failure();
}

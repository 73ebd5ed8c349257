//! Tests for error handling and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;

fn cleanstart() -> Command {
    let mut cmd = Command::cargo_bin("cleanstart").unwrap();
    cmd.args(["--config", "/nonexistent/cleanstart-test.toml"]);
    cmd
}

#[test]
fn unsupported_package_manager_is_a_usage_error() {
    cleanstart()
        .args(["setup", "--package-manager", "pnpm", "--project-type", "node"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value"))
        .stderr(predicate::str::contains("npm"))
        .stderr(predicate::str::contains("yarn"));
}

#[test]
fn unsupported_project_type_is_a_usage_error() {
    cleanstart()
        .args(["setup", "--project-type", "angular"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("node"))
        .stderr(predicate::str::contains("react"));
}

#[test]
fn quiet_and_verbose_conflict() {
    cleanstart()
        .args(["--quiet", "--verbose", "list"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn missing_bundle_dir_fails_with_suggestions() {
    let temp = tempfile::TempDir::new().unwrap();

    cleanstart()
        .current_dir(temp.path())
        .args([
            "setup",
            "--package-manager",
            "npm",
            "--project-type",
            "node",
            "--bundle-dir",
            "/nonexistent/bundles",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Suggestions:"))
        .stderr(predicate::str::contains("--bundle-dir"));
}

#[test]
fn dry_run_with_missing_bundle_dir_also_fails() {
    // Bundle resolution runs even on --dry-run, so a broken bundle dir is
    // reported instead of printing a bogus plan.
    cleanstart()
        .args([
            "setup",
            "--package-manager",
            "npm",
            "--project-type",
            "node",
            "--dry-run",
            "--bundle-dir",
            "/nonexistent/bundles",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

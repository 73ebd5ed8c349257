//! Integration tests for cleanstart-cli.
//!
//! Nothing here shells out to a real package manager: tests drive the
//! non-interactive flag paths and stop before the install phase (`--dry-run`,
//! `--skip-install`) or fail before it (broken `--bundle-dir`).

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cleanstart() -> Command {
    let mut cmd = Command::cargo_bin("cleanstart").unwrap();
    // Hermetic config: point at a path that never exists so machine-local
    // config files cannot leak into assertions.
    cmd.args(["--config", "/nonexistent/cleanstart-test.toml"]);
    cmd
}

#[test]
fn help_lists_subcommands() {
    cleanstart()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("setup"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_prints_cargo_version() {
    cleanstart()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn list_defaults_to_node_base_set() {
    cleanstart()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("eslint @ 8.33.0"))
        .stdout(predicate::str::contains("prettier @ 2.8.3"))
        .stdout(predicate::str::contains("6 packages"));
}

#[test]
fn list_react_in_list_format_prints_nine_specs() {
    let output = cleanstart()
        .args(["list", "--project-type", "react", "--format", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "eslint@8.33.0");
    assert!(lines.contains(&"eslint-plugin-react@7.32.2"));
    assert!(lines.contains(&"eslint-plugin-jsx-a11y@6.7.1"));
}

#[test]
fn list_json_is_parseable() {
    let output = cleanstart()
        .args(["list", "--project-type", "react", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["projectType"], "react");
    assert_eq!(value["dependencies"].as_array().unwrap().len(), 9);
    assert_eq!(value["dependencies"][0]["spec"], "eslint@8.33.0");
}

// ── setup ─────────────────────────────────────────────────────────────────────

#[test]
fn dry_run_describes_without_writing() {
    let temp = TempDir::new().unwrap();

    cleanstart()
        .current_dir(temp.path())
        .args([
            "setup",
            "--package-manager",
            "npm",
            "--project-type",
            "node",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains(".eslintrc.json"))
        .stdout(predicate::str::contains("eslint@8.33.0"));

    assert!(!temp.path().join(".eslintrc.json").exists());
}

#[test]
fn skip_install_copies_the_node_bundle() {
    let temp = TempDir::new().unwrap();

    cleanstart()
        .current_dir(temp.path())
        .args([
            "setup",
            "--package-manager",
            "npm",
            "--project-type",
            "node",
            "--skip-install",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config files copied!"));

    for file in [
        ".eslintrc.json",
        ".eslintignore",
        ".prettierrc",
        ".prettierignore",
        ".editorconfig",
    ] {
        assert!(temp.path().join(file).exists(), "missing {file}");
    }
}

#[test]
fn react_bundle_carries_react_eslint_config() {
    let temp = TempDir::new().unwrap();

    cleanstart()
        .current_dir(temp.path())
        .args([
            "setup",
            "--package-manager",
            "yarn",
            "--project-type",
            "react",
            "--skip-install",
        ])
        .assert()
        .success();

    let eslintrc = std::fs::read_to_string(temp.path().join(".eslintrc.json")).unwrap();
    assert!(eslintrc.contains("react-hooks"));
}

#[test]
fn second_run_overwrites_without_error() {
    let temp = TempDir::new().unwrap();
    let args = [
        "setup",
        "--package-manager",
        "npm",
        "--project-type",
        "node",
        "--skip-install",
    ];

    cleanstart()
        .current_dir(temp.path())
        .args(args)
        .assert()
        .success();
    cleanstart()
        .current_dir(temp.path())
        .args(args)
        .assert()
        .success();

    assert!(temp.path().join(".eslintrc.json").exists());
}

#[test]
fn copy_failure_aborts_before_install() {
    let temp = TempDir::new().unwrap();

    // Missing bundle dir: the copy phase fails, so the install phase must
    // never start (no package manager is ever invoked).
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
        .stdout(predicate::str::contains("Error while copying config files!"))
        .stdout(predicate::str::contains("Installing dev dependencies").not())
        .stderr(predicate::str::contains("Config copy failed"));

    assert!(!temp.path().join(".eslintrc.json").exists());
}

#[test]
fn custom_bundle_dir_is_copied_verbatim() {
    let bundles = TempDir::new().unwrap();
    let node = bundles.path().join("node");
    std::fs::create_dir_all(&node).unwrap();
    std::fs::write(node.join(".eslintrc.json"), "{\"root\": true}").unwrap();

    let temp = TempDir::new().unwrap();
    cleanstart()
        .current_dir(temp.path())
        .args([
            "setup",
            "--package-manager",
            "npm",
            "--project-type",
            "node",
            "--skip-install",
            "--bundle-dir",
        ])
        .arg(bundles.path())
        .assert()
        .success();

    let copied = std::fs::read_to_string(temp.path().join(".eslintrc.json")).unwrap();
    assert_eq!(copied, "{\"root\": true}");
}

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
fn init_local_writes_config_file() {
    let temp = TempDir::new().unwrap();

    cleanstart()
        .current_dir(temp.path())
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));

    let config = std::fs::read_to_string(temp.path().join(".cleanstart.toml")).unwrap();
    assert!(config.contains("package_manager"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();

    cleanstart()
        .current_dir(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();

    cleanstart()
        .current_dir(temp.path())
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn completions_bash_mentions_binary_name() {
    cleanstart()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cleanstart"));
}

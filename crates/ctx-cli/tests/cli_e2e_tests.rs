//! End-to-end tests that invoke the compiled `ctx` binary.

use assert_cmd::Command;
use ctx_test_utils::TestRepo;
use predicates::prelude::*;

/// Get a Command for the ctx binary, rooted at `repo`
fn ctx_cmd(repo: &TestRepo) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ctx"));
    cmd.arg("-C").arg(repo.root()).env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn test_help_output() {
    Command::new(assert_cmd::cargo::cargo_bin!("ctx"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Context Sync - Mirror"))
        .stdout(predicate::str::contains("Command-line interface").not());
}

#[test]
fn test_no_command_shows_help_hint() {
    let repo = TestRepo::new();
    ctx_cmd(&repo)
        .assert()
        .success()
        .stdout(predicate::str::contains("ctx --help"));
}

// ============================================================================
// init
// ============================================================================

#[test]
fn test_init_then_rerun_keeps_files() {
    let repo = TestRepo::new();

    ctx_cmd(&repo)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("update-docs.md"));
    repo.assert_file_exists(".context/agents");
    repo.write(".context/commands/update-docs.md", "# Mine\n");

    ctx_cmd(&repo)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("(exists)"));
    assert_eq!(repo.read(".context/commands/update-docs.md"), "# Mine\n");
}

// ============================================================================
// sync
// ============================================================================

#[test]
fn test_sync_mirrors_commands() {
    let repo = TestRepo::with_context();
    repo.write_source("commands", "run-tests.md", "# Run tests\n");

    ctx_cmd(&repo)
        .args(["sync", "--skip-docs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Synchronization complete"));

    repo.assert_file_exists(".cursor/commands/run-tests.md");
    repo.assert_file_contains(".agent/workflows/run_tests.md", "description: Run tests");
}

#[test]
fn test_sync_dry_run_writes_nothing() {
    let repo = TestRepo::with_context();
    repo.write_source("agents", "reviewer.md", "# Reviewer\n");

    ctx_cmd(&repo)
        .args(["sync", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("would write"));

    repo.assert_file_not_exists(".claude");
    repo.assert_file_not_exists(".github");
}

#[test]
fn test_sync_empty_list_skips_category() {
    let repo = TestRepo::with_context();
    repo.write_source("agents", "reviewer.md", "# Reviewer\n");

    ctx_cmd(&repo)
        .args(["sync", "--agents", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("no targets selected"));

    repo.assert_file_not_exists(".claude/agents");
}

#[test]
fn test_sync_unknown_target_fails() {
    let repo = TestRepo::with_context();
    repo.write_source("commands", "a.md", "# A\n");

    ctx_cmd(&repo)
        .args(["sync", "--commands", "vim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown commands target: vim"));

    repo.assert_file_not_exists(".claude");
}

#[test]
fn test_sync_reads_manifest_selection() {
    let repo = TestRepo::with_context();
    repo.write_source("commands", "a.md", "# A\n");
    repo.write(".context/config.toml", "[sync]\ncommands = [\"claude\"]\n");

    ctx_cmd(&repo).args(["sync", "--skip-docs"]).assert().success();

    repo.assert_file_exists(".claude/commands/a.md");
    repo.assert_file_not_exists(".cursor");
}

#[test]
fn test_sync_json_output() {
    let repo = TestRepo::with_context();
    repo.write_source("commands", "a.md", "# A\n");

    let output = ctx_cmd(&repo)
        .args(["sync", "--json", "--commands", "cursor"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["commands_synced"], 1);
    assert_eq!(json["passes"][2]["pass"], "commands");
    assert_eq!(json["passes"][2]["outcome"], "synced");
}

#[test]
fn test_sync_write_failure_exits_nonzero() {
    let repo = TestRepo::with_context();
    repo.write_source("commands", "a.md", "# A\n");
    repo.write(".cursor/commands/a.md/blocker", "x");

    ctx_cmd(&repo)
        .args(["sync", "--commands", "cursor"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("commands: a.md -> cursor:"))
        .stderr(predicate::str::contains("1 error(s)"));
}

// ============================================================================
// status, mark-generated, targets
// ============================================================================

#[test]
fn test_status_unknown_then_fresh() {
    let repo = TestRepo::new();

    ctx_cmd(&repo)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown"));

    ctx_cmd(&repo).arg("mark-generated").assert().success();

    ctx_cmd(&repo)
        .args(["status", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""freshness": "fresh""#));
}

#[test]
fn test_targets_lists_builtins() {
    let repo = TestRepo::new();

    ctx_cmd(&repo)
        .arg("targets")
        .assert()
        .success()
        .stdout(predicate::str::contains(".agent/workflows"))
        .stdout(predicate::str::contains("editors"));

    ctx_cmd(&repo)
        .args(["targets", "--category", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid content category"));
}

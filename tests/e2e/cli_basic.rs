//! Basic CLI tests for dirtree
//!
//! Help and version output, argument errors and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;

fn dirtree() -> Command {
    Command::cargo_bin("dirtree").unwrap()
}

// =============================================================================
// Help and Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    dirtree()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("dirtree [OPTIONS] [PATH]"));
}

#[test]
fn version_flag_shows_version() {
    dirtree()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// Invalid Arguments (Exit Code 2)
// =============================================================================

#[test]
fn unknown_option_returns_exit_code_2() {
    dirtree()
        .arg("--depth")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown option"));
}

#[test]
fn two_paths_return_exit_code_2() {
    dirtree()
        .args(["a", "b"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unexpected argument"));
}

// =============================================================================
// Traversal Errors (Exit Code 1)
// =============================================================================

#[test]
fn nonexistent_path_returns_exit_code_1() {
    dirtree()
        .arg("/nonexistent/path/that/does/not/exist")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Error: stat /nonexistent/path/that/does/not/exist"))
        .stdout(predicate::str::contains("├──").not())
        .stderr(predicate::str::is_empty());
}

#[test]
fn parent_dir_root_is_unknown_node_type() {
    dirtree()
        .arg("..")
        .assert()
        .code(1)
        .stdout("Error: unknown node type: ..\n");
}

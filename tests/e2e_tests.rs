//! End-to-end tests for the merge-package-versions CLI
//!
//! These tests verify:
//! - Usage errors print to stdout and exit with status 1
//! - Merged output files are sorted, deduplicated and most restrictive
//! - Merging is idempotent
//! - Malformed input aborts without writing output
//! - Dry-run and JSON output modes

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Command for the compiled binary with colors disabled
fn merge_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_merge-package-versions"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Write a deps file into the temp directory
fn write_deps(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write deps file");
    path
}

fn run_merge(output: &Path, inputs: &[&Path]) {
    merge_cmd()
        .arg(output)
        .args(inputs)
        .assert()
        .success();
}

mod usage_tests {
    use super::*;

    #[test]
    fn test_no_arguments_prints_usage() {
        merge_cmd()
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Usage:"))
            .stdout(predicate::str::contains("output_deps_file"));
    }

    #[test]
    fn test_output_without_inputs_prints_usage() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("out.deps");

        merge_cmd()
            .arg(&output)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Usage:"));

        assert!(!output.exists(), "Usage error must not create the output");
    }

    #[test]
    fn test_conflicting_flags() {
        merge_cmd()
            .args(["--quiet", "--verbose", "out", "in"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("conflicting options"));
    }
}

mod merge_tests {
    use super::*;

    #[test]
    fn test_merge_two_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let a = write_deps(
            &temp_dir,
            "a.deps",
            "libc6 (>= 2.14)\nlibx11-6\nlibglib2.0-0 (>= 2.39.4)\n",
        );
        let b = write_deps(
            &temp_dir,
            "b.deps",
            "libc6 (>= 2.17)\nlibx11-6 (>= 2:1.4.99.1)\nlibnss3 (>= 2:3.26)\n",
        );
        let output = temp_dir.path().join("out.deps");

        merge_cmd()
            .arg(&output)
            .arg(&a)
            .arg(&b)
            .assert()
            .success();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "libc6 (>= 2.17)\n\
             libglib2.0-0 (>= 2.39.4)\n\
             libnss3 (>= 2:3.26)\n\
             libx11-6 (>= 2:1.4.99.1)\n"
        );
    }

    #[test]
    fn test_narrower_constraint_is_kept() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = write_deps(&temp_dir, "in.deps", "foo (>= 1.0)\nfoo (>= 2.0)\n");
        let output = temp_dir.path().join("out.deps");

        run_merge(&output, &[&input]);

        assert_eq!(fs::read_to_string(&output).unwrap(), "foo (>= 2.0)\n");
    }

    #[test]
    fn test_merge_is_idempotent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let a = write_deps(
            &temp_dir,
            "a.deps",
            "foo (>= 1.0)\nbar (<< 3.0)\nbaz\nqux (= 1:0.9-2)\n",
        );
        let b = write_deps(
            &temp_dir,
            "b.deps",
            "foo (>= 2.0, << 2.5)\nbar (>= 1.0)\nbaz (>= 0~git20200101)\n",
        );
        let first = temp_dir.path().join("first.deps");
        let second = temp_dir.path().join("second.deps");

        run_merge(&first, &[&a, &b]);
        run_merge(&second, &[&first]);

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn test_comments_and_blank_lines_are_ignored() {
        let temp_dir = tempfile::tempdir().unwrap();
        let plain = write_deps(&temp_dir, "plain.deps", "libc6 (>= 2.17)\nlibdrm2 (>= 2.4.38)\n");
        let commented = write_deps(
            &temp_dir,
            "commented.deps",
            "# dependencies of chrome\n\nlibc6 (>= 2.17)\n\n  # indented comment\nlibdrm2 (>= 2.4.38)\n\n",
        );
        let plain_out = temp_dir.path().join("plain.out");
        let commented_out = temp_dir.path().join("commented.out");

        run_merge(&plain_out, &[&plain]);
        run_merge(&commented_out, &[&commented]);

        assert_eq!(
            fs::read(&plain_out).unwrap(),
            fs::read(&commented_out).unwrap()
        );
    }

    #[test]
    fn test_output_is_overwritten() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = write_deps(&temp_dir, "in.deps", "libc6 (>= 2.17)\n");
        let output = write_deps(&temp_dir, "out.deps", "stale content\nmore stale content\n");

        run_merge(&output, &[&input]);

        assert_eq!(fs::read_to_string(&output).unwrap(), "libc6 (>= 2.17)\n");
    }

    #[test]
    fn test_empty_input_writes_empty_output() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = write_deps(&temp_dir, "in.deps", "# nothing here\n\n");
        let output = temp_dir.path().join("out.deps");

        run_merge(&output, &[&input]);

        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }
}

mod error_tests {
    use super::*;

    #[test]
    fn test_malformed_line_aborts() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = write_deps(&temp_dir, "in.deps", "libc6 (>= 2.17)\nlibfoo (~> 1.0)\n");
        let output = temp_dir.path().join("out.deps");

        merge_cmd()
            .arg(&output)
            .arg(&input)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("in.deps:2"))
            .stderr(predicate::str::contains("unknown operator"));

        assert!(!output.exists(), "No output may be written after a parse error");
    }

    #[test]
    fn test_invalid_epoch_aborts() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = write_deps(&temp_dir, "in.deps", "libfoo (>= a:1.0)\n");
        let output = temp_dir.path().join("out.deps");

        merge_cmd()
            .arg(&output)
            .arg(&input)
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid epoch"));
    }

    #[test]
    fn test_missing_input_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("out.deps");
        let missing = temp_dir.path().join("missing.deps");

        merge_cmd()
            .arg(&output)
            .arg(&missing)
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read"));

        assert!(!output.exists());
    }
}

mod output_mode_tests {
    use super::*;

    #[test]
    fn test_dry_run_prints_result_without_writing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = write_deps(&temp_dir, "in.deps", "foo (>= 1.0)\nfoo (>= 2.0)\n");
        let output = temp_dir.path().join("out.deps");

        merge_cmd()
            .arg("--dry-run")
            .arg(&output)
            .arg(&input)
            .assert()
            .success()
            .stdout(predicate::str::contains("(dry-run)"))
            .stdout(predicate::str::ends_with("foo (>= 2.0)\n"));

        assert!(!output.exists(), "Dry-run must not write the output");
    }

    #[test]
    fn test_quiet_prints_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = write_deps(&temp_dir, "in.deps", "libc6 (>= 2.17)\n");
        let output = temp_dir.path().join("out.deps");

        merge_cmd()
            .arg("-q")
            .arg(&output)
            .arg(&input)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn test_json_summary() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = write_deps(&temp_dir, "in.deps", "foo (>= 1.0)\nfoo (>= 2.0)\nbar\n");
        let output = temp_dir.path().join("out.deps");

        let assert = merge_cmd()
            .arg("--json")
            .arg(&output)
            .arg(&input)
            .assert()
            .success();

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");

        assert_eq!(json["written"], true);
        assert_eq!(json["summary"]["added"], 2);
        assert_eq!(json["summary"]["replaced"], 1);
        assert_eq!(json["summary"]["discarded"], 0);
        assert_eq!(json["lines"], serde_json::json!(["bar", "foo (>= 2.0)"]));
    }
}

//! End-to-end tests for the treesum binary

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn treesum() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_treesum"));
    cmd.env_remove("RUST_LOG").env_remove("TREESUM_CONCURRENCY");
    cmd
}

#[test]
fn test_prints_sorted_tab_separated_table() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir(temp.path().join("b")).unwrap();
    fs::write(temp.path().join("b/c"), "y").unwrap();
    fs::write(temp.path().join("a"), "x").unwrap();

    let output = treesum().arg(temp.path()).output().expect("Failed to run treesum");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        format!("9dd4e461268c8034f5c8564e155c67a6\t{}", temp.path().join("a").display())
    );
    assert!(lines[1].ends_with("b/c"));
}

#[test]
fn test_concurrency_flag_does_not_change_output() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    for i in 0..30 {
        fs::write(temp.path().join(format!("f{i}")), format!("{i}")).unwrap();
    }

    let serial = treesum().arg(temp.path()).args(["-j", "1"]).output().unwrap();
    let parallel = treesum().arg(temp.path()).args(["-j", "50"]).output().unwrap();

    assert!(serial.status.success());
    assert_eq!(serial.stdout, parallel.stdout);
}

#[test]
fn test_missing_root_fails_without_table() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    let output = treesum()
        .arg(temp.path().join("missing"))
        .output()
        .expect("Failed to run treesum");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing"));
}

#[test]
fn test_logs_go_to_stderr() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp.path().join("a"), "x").unwrap();

    let output = treesum().arg(temp.path()).arg("-v").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(!String::from_utf8_lossy(&output.stderr).is_empty());
}

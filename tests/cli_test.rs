// tests/cli_test.rs
use std::process::Command;

#[test]
fn test_cli_help() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "git-latest-release", "--", "--help"])
        .env_remove("GITHUB_REPOSITORY")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("git-latest-release"));
    assert!(stdout.contains("--search-scope"));
}

#[test]
fn test_cli_rejects_invalid_scope_before_any_network_access() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--bin",
            "git-latest-release",
            "--",
            "--repository",
            "octo/widget",
            "--search-scope",
            "everything",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Configuration error"));
    assert!(stderr.contains("everything"));
}

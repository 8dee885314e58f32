//! Integration tests for CLI argument validation and output behavior
//!
//! Argument-shape errors (wrong arity, wrong type, invalid regex) must be
//! rejected before any OS call, so these tests are deterministic on every
//! platform. The default behavior is quiet (no logs on stderr).

use std::process::Command;

fn run_winctl(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_winctl"))
        .args(args)
        .output()
        .expect("Failed to execute winctl")
}

#[test]
fn test_help_lists_all_subcommands() {
    let output = run_winctl(&["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for subcommand in ["list", "focus", "focus-handle", "active", "move", "resize"] {
        assert!(
            stdout.contains(subcommand),
            "help should mention '{}', got: {}",
            subcommand,
            stdout
        );
    }
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    let output = run_winctl(&[]);
    assert!(!output.status.success());
    // clap reserves exit code 2 for usage errors
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_regex_is_rejected_before_any_window_call() {
    let output = run_winctl(&["focus", "(", "--regex"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid regex pattern"),
        "expected a pattern error on stderr, got: {}",
        stderr
    );
}

#[test]
fn test_regex_metacharacters_are_inert_without_regex_flag() {
    // A literal "(" is a valid substring pattern; the command must get past
    // argument validation (it may still soft-fail with no matching window).
    let output = run_winctl(&["focus", "("]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("Invalid regex pattern"),
        "literal mode must not parse the pattern as a regex, got: {}",
        stderr
    );
}

#[test]
fn test_non_integer_handle_is_usage_error() {
    let output = run_winctl(&["focus-handle", "notahandle"]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid value"),
        "expected clap's type error, got: {}",
        stderr
    );
}

#[test]
fn test_move_missing_coordinate_is_usage_error() {
    let output = run_winctl(&["move", "1024", "10"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_resize_missing_dimension_is_usage_error() {
    let output = run_winctl(&["resize", "1024"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_help_stdout_has_no_json_logs() {
    let output = run_winctl(&["--help"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );
}

#[test]
fn test_completions_generates_script() {
    let output = run_winctl(&["completions", "bash"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("winctl"),
        "completion script should reference the binary name"
    );
}

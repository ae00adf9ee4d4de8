//! Integration tests for stringfmt CLI

use std::process::Command;

fn run_stringfmt(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-p", "stringfmt", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_stringfmt(&["--help"]);

    assert!(success);
    assert!(stdout.contains("stringfmt"));
    assert!(stdout.contains("int"));
    assert!(stdout.contains("pad"));
    assert!(stdout.contains("opt"));
    assert!(stdout.contains("plural"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_stringfmt(&["--version"]);

    assert!(success);
    assert!(stdout.contains("stringfmt"));
}

#[test]
fn test_int_hex_prefix_bytewise() {
    let (stdout, _, success) = run_stringfmt(&["int", "15", "--radix", "hex"]);
    assert!(success);
    assert_eq!(stdout.trim_end(), "F");

    let (stdout, _, success) =
        run_stringfmt(&["int", "15", "--radix", "hex", "--prefix", "--bytewise"]);
    assert!(success);
    assert_eq!(stdout.trim_end(), "0x0F");
}

#[test]
fn test_int_octal_min_digits() {
    let (stdout, _, success) =
        run_stringfmt(&["int", "1234", "--radix", "octal", "--min-digits", "5"]);
    assert!(success);
    assert_eq!(stdout.trim_end(), "02322");
}

#[test]
fn test_int_rejects_non_integer() {
    let (_, stderr, success) = run_stringfmt(&["int", "fifteen"]);
    assert!(!success);
    assert!(stderr.contains("value must be an integer"));
}

#[test]
fn test_pad_alignments() {
    let (stdout, _, success) = run_stringfmt(&["pad", "23", "--width", "5"]);
    assert!(success);
    assert_eq!(stdout.trim_end_matches('\n'), "   23");

    let (stdout, _, success) =
        run_stringfmt(&["pad", "23", "--width", "7", "--align", "center", "--fill", "-"]);
    assert!(success);
    assert_eq!(stdout.trim_end_matches('\n'), "---23--");
}

#[test]
fn test_opt_styles() {
    let (stdout, _, success) = run_stringfmt(&["opt", "23", "--style", "descriptive"]);
    assert!(success);
    assert_eq!(stdout.trim_end(), "Optional(23)");

    let (stdout, _, success) = run_stringfmt(&["opt", "--style", "descriptive"]);
    assert!(success);
    assert_eq!(stdout.trim_end(), "Optional(nil)");

    let (stdout, _, success) = run_stringfmt(&["opt", "--absent", "none"]);
    assert!(success);
    assert_eq!(stdout.trim_end(), "none");
}

#[test]
fn test_plural_buckets() {
    for (count, expected) in [("0", "ZERO"), ("1", "ONE"), ("2", "MANY"), ("-5", "MANY")] {
        let (stdout, _, success) = run_stringfmt(&[
            "plural", count, "--zero", "ZERO", "--one", "ONE", "--many", "MANY",
        ]);
        assert!(success);
        assert_eq!(stdout.trim_end(), expected);
    }
}

#[test]
fn test_json_output() {
    let (stdout, _, success) = run_stringfmt(&["int", "15", "--radix", "hex", "--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value =
        serde_json::from_str(stdout.trim_end()).expect("Invalid JSON output");
    assert_eq!(parsed["formatted"], "F");
}

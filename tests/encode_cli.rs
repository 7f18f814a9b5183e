use assert_cmd::Command;
use predicates::prelude::*;

fn cargo_bin() -> Command { Command::cargo_bin("bf-echo").unwrap() }

fn line(value: usize) -> String {
    format!("{}.>\n", "+".repeat(value))
}

#[test]
fn test_single_char_is_one_line() {
    cargo_bin()
        .arg("A")
        .assert()
        .success()
        .stdout(line(65))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_lines_follow_input_order() {
    cargo_bin()
        .arg("ab")
        .assert()
        .success()
        .stdout(format!("{}{}", line(97), line(98)));
}

#[test]
fn test_newline_escape() {
    cargo_bin()
        .arg("\\n")
        .assert()
        .success()
        .stdout(line(10));
}

#[test]
fn test_empty_text_prints_nothing() {
    cargo_bin()
        .arg("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_trailing_backslash_is_ignored() {
    cargo_bin()
        .arg("a\\")
        .assert()
        .success()
        .stdout(line(97));
}

#[test]
fn test_text_starting_with_hyphen() {
    cargo_bin()
        .arg("-5")
        .assert()
        .success()
        .stdout(line(53));

    cargo_bin()
        .arg("-x")
        .assert()
        .success()
        .stdout(format!("{}{}", line(45), line(120)));
}

#[test]
fn test_short_help_still_works() {
    cargo_bin()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_unsupported_escape_fails_without_output() {
    cargo_bin()
        .arg("tab\\there")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("unsupported escape code '\\t'")
                .and(predicate::str::contains("at position 4"))
                .and(predicate::str::contains("^")),
        );
}

#[test]
fn test_missing_text_is_usage_error() {
    cargo_bin()
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_extra_positional_is_rejected() {
    cargo_bin()
        .args(["one", "two"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_help_exits_zero() {
    cargo_bin()
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::contains("Usage:").and(predicate::str::contains("\\n")));
}

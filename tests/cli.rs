#![cfg(feature = "cli")]
#![allow(deprecated)] // cargo_bin deprecation - still works fine

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PASSWORDS: &str =
    "1234567890\nPassword\nHeslo123\nMojevelmidlouhehesloscislem0\nIZP2021:fit@vut.cz\n";

fn cmd() -> Command {
    Command::cargo_bin("pwcheck").expect("binary should exist")
}

fn check(args: &[&str], expected: &str) {
    cmd()
        .args(args)
        .write_stdin(PASSWORDS)
        .assert()
        .success()
        .stdout(expected.to_string());
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn level_one_param_one() {
    check(
        &["1", "1"],
        "Password\nHeslo123\nMojevelmidlouhehesloscislem0\nIZP2021:fit@vut.cz\n",
    );
}

#[test]
fn level_two_param_three() {
    check(
        &["2", "3"],
        "Heslo123\nMojevelmidlouhehesloscislem0\nIZP2021:fit@vut.cz\n",
    );
}

#[test]
fn level_three_param_two() {
    check(
        &["3", "2"],
        "Heslo123\nMojevelmidlouhehesloscislem0\nIZP2021:fit@vut.cz\n",
    );
}

#[test]
fn level_four_param_two() {
    check(&["4", "2"], "Heslo123\nIZP2021:fit@vut.cz\n");
}

#[test]
fn level_two_param_four_with_stats() {
    check(
        &["2", "4", "--stats"],
        "IZP2021:fit@vut.cz\nStatistika:\nRuznych znaku: 36\nMinimalni delka: 8\nPrumerna delka: 14.4\n",
    );
}

#[test]
fn flag_form_matches_positional_form() {
    check(&["-l", "4", "-p", "2"], "Heslo123\nIZP2021:fit@vut.cz\n");
}

#[test]
fn single_empty_line_with_stats() {
    cmd()
        .args(["1", "1", "--stats"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout("Statistika:\nRuznych znaku: 0\nMinimalni delka: 0\nPrumerna delka: 0.0\n");
}

#[test]
fn empty_input_with_stats_reports_zeroes() {
    cmd()
        .args(["1", "1", "--stats"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("Statistika:\nRuznych znaku: 0\nMinimalni delka: 0\nPrumerna delka: 0.0\n");
}

#[test]
fn crlf_input_reports_same_statistics() {
    cmd()
        .args(["2", "4", "--stats"])
        .write_stdin(PASSWORDS.replace('\n', "\r\n"))
        .assert()
        .success()
        .stdout("IZP2021:fit@vut.cz\r\nStatistika:\nRuznych znaku: 36\nMinimalni delka: 8\nPrumerna delka: 14.4\n");
}

#[test]
fn reads_from_file_redirect() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("hesla.txt");
    fs::write(&input, PASSWORDS).unwrap();

    cmd()
        .args(["4", "2"])
        .pipe_stdin(&input)
        .unwrap()
        .assert()
        .success()
        .stdout("Heslo123\nIZP2021:fit@vut.cz\n");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn level_out_of_range_fails() {
    cmd()
        .args(["5", "1"])
        .write_stdin(PASSWORDS)
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Level must be an integer between 0 and 4"));
}

#[test]
fn non_positive_param_fails() {
    cmd()
        .args(["1", "0"])
        .write_stdin(PASSWORDS)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Param must be a positive integer"));
}

#[test]
fn non_numeric_level_is_a_usage_error() {
    cmd()
        .args(["abc", "1"])
        .write_stdin(PASSWORDS)
        .assert()
        .failure()
        .code(2);
}

#[test]
fn max_length_aborts_on_long_line() {
    cmd()
        .args(["1", "1", "--max-length", "20"])
        .write_stdin(PASSWORDS)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Line 4 is too long"));
}

//! End-to-end tests for the `estimate` binary

#![allow(deprecated)] // Command::cargo_bin

use assert_cmd::Command;
use predicates::prelude::*;

fn estimate() -> Command {
    Command::cargo_bin("estimate").expect("estimate binary should exist")
}

#[test]
fn test_prints_estimate() {
    estimate()
        .args(["--weight", "70", "--sex", "Male", "--activity", "Low"])
        .assert()
        .success()
        .stdout("1334\n");
}

#[test]
fn test_accepts_form_literals() {
    estimate()
        .args(["--weight", "60", "--sex", "Nainen", "--activity", "Korkea"])
        .assert()
        .success()
        .stdout("2005\n");
}

#[test]
fn test_activity_with_space() {
    estimate()
        .args(["--weight", "70", "--sex", "Mies", "--activity", "Erittäin korkea"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+\n$").unwrap());
}

#[test]
fn test_invalid_weight_exits_one() {
    estimate()
        .args(["--weight", "abc", "--sex", "Male", "--activity", "Low"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_invalid_sex_exits_one() {
    estimate()
        .args(["--weight", "70", "--sex", "Other", "--activity", "Matala"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_invalid_activity_exits_one() {
    estimate()
        .args(["--weight", "70", "--sex", "Mies", "--activity", "Unknown"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_negative_weight_is_accepted() {
    estimate()
        .args(["--weight", "-50", "--sex", "Male", "--activity", "Low"])
        .assert()
        .success();
}

#[test]
fn test_json_output() {
    estimate()
        .args(["--weight", "70", "--sex", "Male", "--activity", "Low", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kcal\": 1334.0"));
}

#[test]
fn test_list_levels() {
    estimate()
        .arg("--list-levels")
        .assert()
        .success()
        .stdout(predicate::str::contains("VeryHigh"))
        .stdout(predicate::str::contains("Keskitaso"));
}

#[test]
fn test_missing_argument_exits_one() {
    estimate()
        .args(["--weight", "70"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--sex"));
}

#[test]
fn test_unknown_flag_exits_one() {
    estimate()
        .args(["--weight", "70", "--sex", "Male", "--activity", "Low", "--height", "180"])
        .assert()
        .code(1);
}

#[test]
fn test_help_exits_zero() {
    estimate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--weight"));
}

#[test]
fn test_version_exits_zero() {
    estimate()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_overflowing_weight_exits_one() {
    estimate()
        .args(["--weight", "1e307", "--sex", "Male", "--activity", "VeryHigh"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid input"));
}

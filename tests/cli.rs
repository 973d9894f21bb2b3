//! End-to-end tests of the line-oriented driver.

use assert_cmd::Command;
use predicates::prelude::*;

fn solver() -> Command {
    Command::cargo_bin("connect4-solver").expect("binary exists")
}

#[test]
fn valid_lines_report_score_nodes_and_time() {
    solver()
        .write_stdin("112233\n")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^112233 18 \d+ \d+\n$").unwrap())
        .stderr(predicate::str::is_empty());
}

#[test]
fn lost_positions_report_negative_scores() {
    solver()
        .write_stdin("41526\n")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^41526 -18 \d+ \d+\n$").unwrap());
}

#[test]
fn weak_flag_reports_only_the_sign() {
    solver()
        .arg("-w")
        .write_stdin("41526\n")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^41526 -1 \d+ \d+\n$").unwrap());
}

#[test]
fn out_of_range_columns_are_diagnosed() {
    solver()
        .write_stdin("8\n")
        .assert()
        .success()
        .stdout("\n")
        .stderr(predicate::str::contains("Line 1: Invalid move 1 \"8\""));
}

#[test]
fn overfilled_columns_are_diagnosed() {
    solver()
        .write_stdin("1111111\n")
        .assert()
        .success()
        .stdout("\n")
        .stderr(predicate::str::contains(
            "Line 1: Invalid move 7 \"1111111\"",
        ));
}

#[test]
fn playing_past_a_win_is_diagnosed() {
    // the seventh move completes the first player's alignment
    solver()
        .write_stdin("11223344\n")
        .assert()
        .success()
        .stdout("\n")
        .stderr(predicate::str::contains(
            "Line 1: Invalid move 7 \"11223344\"",
        ));
}

#[test]
fn invalid_lines_do_not_stop_the_run() {
    solver()
        .write_stdin("8\n41526\n")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\n41526 -18 \d+ \d+\n$").unwrap())
        .stderr(predicate::str::contains("Line 1: Invalid move 1 \"8\""));
}

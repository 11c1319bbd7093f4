use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn validate_only_reports_and_exits() {
    Command::cargo_bin("whist-bench")
        .unwrap()
        .args(["--validate-only", "--run-id", "cli_smoke", "--tricks", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'cli_smoke' is valid (5 tricks)"));
}

#[test]
fn small_run_prints_a_summary() {
    Command::cargo_bin("whist-bench")
        .unwrap()
        .args(["--tricks", "4", "--seed", "9", "--trumps", "none"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Played 4 tricks"))
        .stdout(predicate::str::contains("North"));
}

#[test]
fn bad_trump_mode_is_rejected() {
    Command::cargo_bin("whist-bench")
        .unwrap()
        .args(["--trumps", "notrump"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown trump mode"));
}

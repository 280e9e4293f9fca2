//! Schedule command integration tests

mod common;

use common::{CRONTAB_FILE, TestWorkspace};
use predicates::prelude::*;

fn crontab_line(workspace: &TestWorkspace, expression: &str) -> String {
    format!("{expression} cd {} && true\n", workspace.path.display())
}

#[test]
fn test_show_schedule() {
    let workspace = TestWorkspace::with_samples();
    workspace
        .cmd()
        .arg("schedule")
        .assert()
        .success()
        .stdout(predicate::str::contains("Schedule: 0 * * * * (Every hour)"));
}

#[test]
fn test_show_missing_crontab() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .args(["schedule", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn test_presets_listing() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .args(["schedule", "presets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("every-30-minutes"))
        .stdout(predicate::str::contains("0 */12 * * *"));
}

#[test]
fn test_set_preset() {
    let workspace = TestWorkspace::with_samples();
    workspace
        .cmd()
        .args(["schedule", "set", "every-4-hours"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restart the container"));
    assert_eq!(
        workspace.read_file(CRONTAB_FILE),
        crontab_line(&workspace, "0 */4 * * *")
    );
}

#[test]
fn test_set_custom_expression() {
    let workspace = TestWorkspace::with_samples();
    workspace
        .cmd()
        .args(["schedule", "set", "15 */3 * * 1-5"])
        .assert()
        .success();
    assert_eq!(
        workspace.read_file(CRONTAB_FILE),
        crontab_line(&workspace, "15 */3 * * 1-5")
    );
}

#[test]
fn test_set_empty_expression_fails() {
    let workspace = TestWorkspace::with_samples();
    workspace
        .cmd()
        .args(["schedule", "set", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cron expression is empty"));
    assert_eq!(
        workspace.read_file(CRONTAB_FILE),
        crontab_line(&workspace, "0 * * * *")
    );
}

#[test]
fn test_daily() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .args(["schedule", "daily", "08:30"])
        .assert()
        .success();
    assert_eq!(
        workspace.read_file(CRONTAB_FILE),
        crontab_line(&workspace, "30 8 * * *")
    );
    workspace
        .cmd()
        .args(["schedule", "daily", "7"])
        .assert()
        .success();
    assert_eq!(
        workspace.read_file(CRONTAB_FILE),
        crontab_line(&workspace, "0 7 * * *")
    );
}

#[test]
fn test_daily_rejects_bad_time() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .args(["schedule", "daily", "24:00"])
        .assert()
        .failure();
    assert!(!workspace.file_exists(CRONTAB_FILE));
}

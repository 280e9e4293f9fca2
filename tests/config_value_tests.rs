//! Scalar key, notification and push window integration tests

mod common;

use common::{CONFIG_FILE, SAMPLE_CONFIG, TestWorkspace};
use predicates::prelude::*;

#[test]
fn test_config_get() {
    let workspace = TestWorkspace::with_samples();
    workspace
        .cmd()
        .args(["config", "get", "push_window.time_range.start"])
        .assert()
        .success()
        .stdout("20:00\n");
    workspace
        .cmd()
        .args(["config", "get", "version_check_url"])
        .assert()
        .success()
        .stdout("https://example.com/version\n");
}

#[test]
fn test_config_get_missing_key() {
    let workspace = TestWorkspace::with_samples();
    workspace
        .cmd()
        .args(["config", "get", "slack_url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Key 'slack_url' not found"));
}

#[test]
fn test_config_set_bool_keeps_comment() {
    let workspace = TestWorkspace::with_samples();
    workspace
        .cmd()
        .args(["config", "set", "enable_notification", "no", "--bool"])
        .assert()
        .success();
    let expected = SAMPLE_CONFIG.replace(
        "  enable_notification: true  # master switch",
        "  enable_notification: false  # master switch",
    );
    assert_eq!(workspace.read_file(CONFIG_FILE), expected);
}

#[test]
fn test_config_set_text() {
    let workspace = TestWorkspace::with_samples();
    workspace
        .cmd()
        .args(["config", "set", "crawler.request_interval", "2000"])
        .assert()
        .success();
    assert!(workspace
        .read_file(CONFIG_FILE)
        .contains("\n  request_interval: \"2000\"\n"));
}

#[test]
fn test_config_set_missing_key_leaves_file() {
    let workspace = TestWorkspace::with_samples();
    workspace
        .cmd()
        .args(["config", "set", "push_window.feishu_url", "x"])
        .assert()
        .failure();
    assert_eq!(workspace.read_file(CONFIG_FILE), SAMPLE_CONFIG);
}

#[test]
fn test_notify_status_and_toggle() {
    let workspace = TestWorkspace::with_samples();
    workspace
        .cmd()
        .arg("notify")
        .assert()
        .success()
        .stdout(predicate::str::contains("[on]  master switch"))
        .stdout(predicate::str::contains("Feishu     not configured"));

    workspace
        .cmd()
        .args(["notify", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notifications disabled"));
    assert!(workspace
        .read_file(CONFIG_FILE)
        .contains("  enable_notification: false  # master switch\n"));
}

#[test]
fn test_notify_set_channel_and_clear() {
    let workspace = TestWorkspace::with_samples();
    workspace
        .cmd()
        .args(["notify", "set", "ntfy", "trend-alerts"])
        .assert()
        .success();
    assert!(workspace
        .read_file(CONFIG_FILE)
        .contains("    ntfy_topic: \"trend-alerts\"\n"));
    workspace
        .cmd()
        .arg("notify")
        .assert()
        .success()
        .stdout(predicate::str::contains("ntfy       configured"));

    workspace
        .cmd()
        .args(["notify", "set", "ntfy", "clear"])
        .assert()
        .success();
    assert_eq!(workspace.read_file(CONFIG_FILE), SAMPLE_CONFIG);
}

#[test]
fn test_notify_set_unknown_channel() {
    let workspace = TestWorkspace::with_samples();
    workspace
        .cmd()
        .args(["notify", "set", "slack", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown channel 'slack'"));
}

#[test]
fn test_notify_email_masks_password() {
    let workspace = TestWorkspace::with_samples();
    workspace
        .cmd()
        .args(["notify", "set", "email_password", "hunter2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hunter2").not());
    workspace
        .cmd()
        .args(["notify", "email"])
        .assert()
        .success()
        .stdout(predicate::str::contains("********"))
        .stdout(predicate::str::contains("(auto-detect)"))
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn test_window_show_toggle_and_times() {
    let workspace = TestWorkspace::with_samples();
    workspace
        .cmd()
        .arg("window")
        .assert()
        .success()
        .stdout(predicate::str::contains("20:00 - 22:00"));

    workspace.cmd().args(["window", "toggle"]).assert().success();
    workspace.cmd().args(["window", "start", "8:05"]).assert().success();
    workspace.cmd().args(["window", "end", "23:30"]).assert().success();

    let content = workspace.read_file(CONFIG_FILE);
    assert!(content.contains(
        "  push_window:\n    enabled: true\n    time_range:\n      start: \"08:05\"\n      end: \"23:30\"\n"
    ));
    // master switch shares the `enabled` suffix but is untouched
    assert!(content.contains("  enable_notification: true  # master switch\n"));
}

#[test]
fn test_window_rejects_bad_time() {
    let workspace = TestWorkspace::with_samples();
    workspace
        .cmd()
        .args(["window", "start", "25:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid time"));
    assert_eq!(workspace.read_file(CONFIG_FILE), SAMPLE_CONFIG);
}

#[test]
fn test_window_json() {
    let workspace = TestWorkspace::with_samples();
    let output = workspace
        .cmd()
        .args(["window", "show", "--json"])
        .output()
        .expect("run trendctl");
    let window: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(window["enabled"], false);
    assert_eq!(window["start"], "20:00");
}

/// Black-box tests for the cyclecal binary: calendar rendering from a
/// snapshot file, rule previews, configuration and error output.
use predicates::prelude::*;

mod helpers;
use helpers::{assertions, CliTestHarness, USER};

#[test]
fn test_cli_help_and_version() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["--help"])
        .stdout(predicate::str::contains("calendar"))
        .stdout(predicate::str::contains("preview"));

    harness
        .run_success(&["--version"])
        .stdout(predicate::str::contains("cyclecal"));

    harness
        .run_failure(&["invalid-command"])
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_preview_every_third_day() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&[
            "preview", "--every", "days", "--distance", "3", "--from", "2024-01-01", "--until", "2024-01-10",
        ])
        .stdout(predicate::str::contains("2024-01-04"))
        .stdout(predicate::str::contains("2024-01-07"))
        .stdout(predicate::str::contains("2024-01-10"))
        .stdout(predicate::str::contains("2024-01-13").not())
        .stdout(predicate::str::contains("2024-01-01").not());
}

#[test]
fn test_preview_weekly_on_selected_days() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&[
            "preview", "--every", "weeks", "--on", "tue,thu", "--from", "2024-01-01", "--until", "2024-01-14",
        ])
        .stdout(predicate::str::contains("1. 2024-01-02 Tue"))
        .stdout(predicate::str::contains("2. 2024-01-04 Thu"))
        .stdout(predicate::str::contains("3. 2024-01-09 Tue"))
        .stdout(predicate::str::contains("4. 2024-01-11 Thu"))
        .stdout(predicate::str::contains("5.").not());
}

#[test]
fn test_preview_count_limits_output() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&[
            "preview", "--every", "days", "--from", "2024-01-01", "--until", "2024-01-31", "--count", "3",
        ])
        .stdout(predicate::str::contains("3. 2024-01-04"))
        .stdout(predicate::str::contains("... and 27 more"));
}

#[test]
fn test_preview_end_before_anchor() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&[
            "preview", "--every", "months", "--from", "2024-05-01", "--until", "2024-01-01",
        ])
        .stdout(predicate::str::contains("No occurrences"));
}

#[test]
fn test_preview_rejects_invalid_rules() {
    let harness = CliTestHarness::new();

    harness
        .run_failure(&[
            "preview", "--every", "days", "--distance", "0", "--from", "2024-01-01", "--until", "2024-01-10",
        ])
        .stderr(assertions::has_error())
        .stderr(predicate::str::contains("distance"));

    harness
        .run_failure(&["preview", "--every", "hours", "--from", "2024-01-01", "--until", "2024-01-10"])
        .stderr(predicate::str::contains("error"));

    harness
        .run_failure(&[
            "preview", "--every", "weeks", "--on", "9", "--from", "2024-01-01", "--until", "2024-01-10",
        ])
        .stderr(assertions::has_error());
}

#[test]
fn test_calendar_table_output() {
    let harness = CliTestHarness::new();
    let snapshot = harness.snapshot_path().to_string_lossy().to_string();

    harness
        .run_success(&["--snapshot", &snapshot, "calendar", "--user", USER])
        .stdout(assertions::has_event_table_headers())
        .stdout(predicate::str::contains("Water plants:Home"))
        .stdout(predicate::str::contains("Lecture:Course"))
        .stdout(predicate::str::contains("3 recurring definitions, 0 excluded"))
        .stderr(predicate::str::contains("Warning:"))
        .stderr(predicate::str::contains("HOURS"));
}

#[test]
fn test_calendar_json_output() {
    let harness = CliTestHarness::new();
    let snapshot = harness.snapshot_path().to_string_lossy().to_string();

    let output = harness
        .command()
        .args(["--snapshot", &snapshot, "calendar", "--user", USER, "--kind", "all", "--json"])
        .output()
        .expect("Failed to run cyclecal");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    let events = json["events"].as_array().expect("events array");
    // 3 daily + 4 weekly occurrences and one dated task
    assert_eq!(events.len(), 8);
    assert_eq!(events[0]["start"], "2024-01-02T00:00:00Z");
    assert_eq!(events[0]["allDay"], false);
    assert_eq!(json["diagnostics"].as_array().map(Vec::len), Some(1));

    let starts: Vec<&str> = events.iter().filter_map(|e| e["start"].as_str()).collect();
    let mut sorted = starts.clone();
    sorted.sort();
    assert_eq!(starts, sorted);
}

#[test]
fn test_calendar_uses_config_defaults() {
    let harness = CliTestHarness::new();
    std::fs::write(
        harness.dir().join("cyclecal.toml"),
        format!("snapshot_path = \"calendar.json\"\ndefault_user = \"{}\"\ndefault_kind = \"tasks\"\n", USER),
    )
    .expect("Failed to write config");

    harness
        .run_success(&["calendar"])
        .stdout(predicate::str::contains("Home"))
        .stdout(predicate::str::contains("task"))
        .stdout(predicate::str::contains("Water plants").not());
}

#[test]
fn test_calendar_env_overrides() {
    let harness = CliTestHarness::new();

    harness
        .command()
        .env("CYCLECAL_SNAPSHOT_PATH", harness.snapshot_path())
        .env("CYCLECAL_DEFAULT_USER", USER)
        .args(["calendar", "--kind", "subtasks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No events found."));
}

#[test]
fn test_calendar_errors() {
    let harness = CliTestHarness::new();

    harness
        .run_failure(&["--snapshot", "missing.json", "calendar", "--user", USER])
        .stderr(predicate::str::contains("Cannot read calendar data"));

    harness
        .run_failure(&["calendar", "--user", "not-a-uuid"])
        .stderr(predicate::str::contains("not a valid user ID"));

    harness
        .run_failure(&["calendar"])
        .stderr(predicate::str::contains("No user given"));

    std::fs::write(harness.dir().join("broken.json"), "[1, 2").expect("Failed to write file");
    harness
        .run_failure(&["--snapshot", "broken.json", "calendar", "--user", USER])
        .stderr(predicate::str::contains("malformed"));
}

#[test]
fn test_diagnostics_are_logged_at_warn_by_default() {
    let harness = CliTestHarness::new();
    let snapshot = harness.snapshot_path().to_string_lossy().to_string();

    harness
        .run_success(&["--snapshot", &snapshot, "calendar", "--user", USER])
        .stderr(predicate::str::contains("WARN"))
        .stderr(predicate::str::contains("skipped: unknown cycle period 'HOURS'"));

    harness
        .command()
        .env("RUST_LOG", "error")
        .args(["--snapshot", &snapshot, "calendar", "--user", USER])
        .assert()
        .success()
        .stderr(predicate::str::contains("WARN").not());
}

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const USER: &str = "0190a6a4-0000-7000-8000-00000000aaaa";

/// Test harness running the CLI inside a temporary directory
pub struct CliTestHarness {
    temp_dir: TempDir,
    snapshot_path: PathBuf,
}

impl CliTestHarness {
    /// Create a harness with the sample snapshot written to disk
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let snapshot_path = temp_dir.path().join("calendar.json");
        std::fs::write(&snapshot_path, TestFixtures::snapshot_json()).expect("Failed to write snapshot");

        Self {
            temp_dir,
            snapshot_path,
        }
    }

    /// Get a Command instance isolated from any local configuration
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cyclecal").expect("Failed to find cyclecal binary");
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("CYCLECAL_CONFIG");
        cmd
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }
}

/// Common test fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// One daily, one weekly-with-days and one invalid definition, plus a dated task
    pub fn snapshot_json() -> String {
        format!(
            r##"{{
  "recurringEvents": [
    {{
      "id": "0190a6a4-0000-7000-8000-000000000101",
      "user": "{USER}",
      "cyclePeriod": "DAYS",
      "distance": 3,
      "endOfCycle": "2024-01-10T00:00:00Z",
      "subtask": {{
        "id": "0190a6a4-0000-7000-8000-000000000201",
        "name": "Water plants",
        "date": "2024-01-01T00:00:00Z",
        "task": {{
          "id": "0190a6a4-0000-7000-8000-000000000301",
          "user": "{USER}",
          "name": "Home",
          "category": {{ "id": "0190a6a4-0000-7000-8000-000000000401", "name": "Chores", "color": "#336699" }}
        }}
      }}
    }},
    {{
      "id": "0190a6a4-0000-7000-8000-000000000102",
      "user": "{USER}",
      "cyclePeriod": "WEEKS",
      "distance": 1,
      "days": [2, 4],
      "endOfCycle": "2024-01-14T00:00:00Z",
      "subtask": {{
        "id": "0190a6a4-0000-7000-8000-000000000202",
        "name": "Lecture",
        "date": "2024-01-01T00:00:00Z",
        "time": true,
        "task": {{ "id": "0190a6a4-0000-7000-8000-000000000302", "user": "{USER}", "name": "Course" }}
      }}
    }},
    {{
      "id": "0190a6a4-0000-7000-8000-000000000103",
      "user": "{USER}",
      "cyclePeriod": "HOURS",
      "distance": 1,
      "endOfCycle": "2024-01-10T00:00:00Z",
      "subtask": {{
        "id": "0190a6a4-0000-7000-8000-000000000203",
        "name": "Hourly",
        "date": "2024-01-01T00:00:00Z",
        "task": {{ "id": "0190a6a4-0000-7000-8000-000000000303", "user": "{USER}", "name": "Misc" }}
      }}
    }}
  ],
  "tasks": [
    {{
      "id": "0190a6a4-0000-7000-8000-000000000301",
      "user": "{USER}",
      "name": "Home",
      "date": "2024-01-05T00:00:00Z"
    }}
  ]
}}"##
        )
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check if output contains the event table headers
    pub fn has_event_table_headers() -> impl Predicate<str> {
        predicate::str::contains("Start")
            .and(predicate::str::contains("Title"))
            .and(predicate::str::contains("Kind"))
    }

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error")
    }
}

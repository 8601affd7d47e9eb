use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Color used for events whose task has no category.
pub const DEFAULT_EVENT_COLOR: &str = "lightBlue";

/// Calendar unit a recurring event advances by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum CyclePeriod {
    Days,
    Weeks,
    Months,
    Years,
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid cycle period: {0}")]
pub struct ParseCyclePeriodError(pub String);

impl CyclePeriod {
    /// Parses the exact persisted name (`DAYS`, `WEEKS`, `MONTHS`, `YEARS`).
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "DAYS" => Some(CyclePeriod::Days),
            "WEEKS" => Some(CyclePeriod::Weeks),
            "MONTHS" => Some(CyclePeriod::Months),
            "YEARS" => Some(CyclePeriod::Years),
            _ => None,
        }
    }
}

impl FromStr for CyclePeriod {
    type Err = ParseCyclePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "days" | "day" => Ok(CyclePeriod::Days),
            "weeks" | "week" => Ok(CyclePeriod::Weeks),
            "months" | "month" => Ok(CyclePeriod::Months),
            "years" | "year" => Ok(CyclePeriod::Years),
            _ => Err(ParseCyclePeriodError(s.to_string())),
        }
    }
}

impl fmt::Display for CyclePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CyclePeriod::Days => "DAYS",
            CyclePeriod::Weeks => "WEEKS",
            CyclePeriod::Months => "MONTHS",
            CyclePeriod::Years => "YEARS",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskState {
    #[default]
    Open,
    Done,
    Paused,
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid task state: {0}")]
pub struct ParseTaskStateError(String);

impl FromStr for TaskState {
    type Err = ParseTaskStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(TaskState::Open),
            "done" => Ok(TaskState::Done),
            "paused" => Ok(TaskState::Paused),
            _ => Err(ParseTaskStateError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: Uuid,
    pub user: Uuid,
    pub name: String,
    #[serde(default)]
    pub state: TaskState,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Populated category, if the task has one
    #[serde(default)]
    pub category: Option<Category>,
    /// Populated subtasks; empty when the caller did not load them
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

impl Task {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.state == TaskState::Open
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subtask {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Whether `date` carries a meaningful time of day
    #[serde(default)]
    pub time: bool,
    /// Populated owning task (recurring definitions only)
    #[serde(default)]
    pub task: Option<Task>,
}

/// A recurring event definition exactly as the persistence layer stores it.
///
/// Fields are kept raw so a malformed definition still deserializes and can be
/// reported instead of failing the whole fetch. Use
/// [`RecurrenceRule::from_event`](crate::recurrence::RecurrenceRule::from_event)
/// to obtain the validated form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurringEvent {
    pub id: Uuid,
    pub user: Uuid,
    pub cycle_period: String,
    pub distance: i64,
    /// ISO weekdays (1 = Monday .. 7 = Sunday); only used for WEEKS
    #[serde(default)]
    pub days: Vec<i64>,
    pub end_of_cycle: DateTime<Utc>,
    /// Populated anchor subtask with its task and category
    #[serde(default)]
    pub subtask: Option<Subtask>,
}

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::{RecurringEvent, Task};

pub mod memory;
pub mod snapshot;

pub use memory::InMemorySource;
pub use snapshot::SnapshotFileSource;

/// Read side of the persistence layer the calendar is computed from.
///
/// Implementations return fully populated records: recurring events carry
/// their subtask, its task and the task's category; tasks carry their
/// category and subtasks. Both calls are scoped to one user.
#[async_trait]
pub trait CalendarSource: Send + Sync {
    async fn recurring_events(&self, user: Uuid) -> Result<Vec<RecurringEvent>, CoreError>;
    async fn tasks(&self, user: Uuid) -> Result<Vec<Task>, CoreError>;
}

/// Exported calendar data for any number of users.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSnapshot {
    #[serde(default)]
    pub recurring_events: Vec<RecurringEvent>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl CalendarSnapshot {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn recurring_events_for(&self, user: Uuid) -> Vec<RecurringEvent> {
        self.recurring_events
            .iter()
            .filter(|event| event.user == user)
            .cloned()
            .collect()
    }

    pub fn tasks_for(&self, user: Uuid) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.user == user)
            .cloned()
            .collect()
    }
}

use async_trait::async_trait;
use uuid::Uuid;

use super::{CalendarSnapshot, CalendarSource};
use crate::error::CoreError;
use crate::models::{RecurringEvent, Task};

/// Source backed by a snapshot held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    snapshot: CalendarSnapshot,
}

impl InMemorySource {
    pub fn new(snapshot: CalendarSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &CalendarSnapshot {
        &self.snapshot
    }
}

#[async_trait]
impl CalendarSource for InMemorySource {
    async fn recurring_events(&self, user: Uuid) -> Result<Vec<RecurringEvent>, CoreError> {
        Ok(self.snapshot.recurring_events_for(user))
    }

    async fn tasks(&self, user: Uuid) -> Result<Vec<Task>, CoreError> {
        Ok(self.snapshot.tasks_for(user))
    }
}

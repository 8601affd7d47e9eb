use async_trait::async_trait;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::{CalendarSnapshot, CalendarSource};
use crate::error::CoreError;
use crate::models::{RecurringEvent, Task};

/// Source reading a JSON [`CalendarSnapshot`] from disk on every fetch.
#[derive(Debug, Clone)]
pub struct SnapshotFileSource {
    path: PathBuf,
}

impl SnapshotFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<CalendarSnapshot, CoreError> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CoreError::SourceUnavailable(format!("{}: {}", self.path.display(), e))
        })?;
        CalendarSnapshot::from_json(&contents)
    }
}

#[async_trait]
impl CalendarSource for SnapshotFileSource {
    async fn recurring_events(&self, user: Uuid) -> Result<Vec<RecurringEvent>, CoreError> {
        Ok(self.load().await?.recurring_events_for(user))
    }

    async fn tasks(&self, user: Uuid) -> Result<Vec<Task>, CoreError> {
        Ok(self.load().await?.tasks_for(user))
    }
}

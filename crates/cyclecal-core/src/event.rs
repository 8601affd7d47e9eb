use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Subtask, Task, DEFAULT_EVENT_COLOR};

/// Where a calendar event came from.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Task,
    Subtask,
    Recurring,
}

/// One entry of a rendered calendar. Built per request, never stored.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventDescriptor {
    pub title: String,
    /// Id of the source task
    pub id: Uuid,
    pub start: DateTime<Utc>,
    pub all_day: bool,
    pub color: String,
    #[serde(rename = "task")]
    pub task_id: Uuid,
    #[serde(rename = "subtask", skip_serializing_if = "Option::is_none")]
    pub subtask_id: Option<Uuid>,
    pub kind: EventKind,
}

/// Category color of `task`, or the default when it has no category.
pub fn event_color(task: &Task) -> String {
    task.category
        .as_ref()
        .map_or_else(|| DEFAULT_EVENT_COLOR.to_string(), |category| category.color.clone())
}

fn subtask_title(subtask: &Subtask, task: &Task) -> String {
    format!("{}:{}", subtask.name, task.name)
}

/// Descriptor for one generated occurrence of a recurring subtask.
pub fn materialize(occurrence: DateTime<Utc>, subtask: &Subtask, task: &Task) -> CalendarEventDescriptor {
    CalendarEventDescriptor {
        title: subtask_title(subtask, task),
        id: task.id,
        start: occurrence,
        all_day: !subtask.time,
        color: event_color(task),
        task_id: task.id,
        subtask_id: Some(subtask.id),
        kind: EventKind::Recurring,
    }
}

/// Descriptor for a dated task; `None` when the task has no date.
pub fn from_task(task: &Task) -> Option<CalendarEventDescriptor> {
    let start = task.date?;
    Some(CalendarEventDescriptor {
        title: task.name.clone(),
        id: task.id,
        start,
        all_day: true,
        color: event_color(task),
        task_id: task.id,
        subtask_id: None,
        kind: EventKind::Task,
    })
}

/// Descriptor for a dated subtask of `task`; `None` when the subtask has no date.
pub fn from_subtask(subtask: &Subtask, task: &Task) -> Option<CalendarEventDescriptor> {
    let start = subtask.date?;
    Some(CalendarEventDescriptor {
        kind: EventKind::Subtask,
        ..materialize(start, subtask, task)
    })
}

//! Calendar aggregation: fetches a user's records once, expands every
//! recurring definition independently and merges everything into one list
//! ordered by start date.

use rayon::prelude::*;
use std::fmt;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{CoreError, DefinitionError};
use crate::event::{self, CalendarEventDescriptor};
use crate::models::{RecurringEvent, Task, TaskState};
use crate::recurrence::{ExpansionConfig, RecurrenceExpander, RecurrenceRule};
use crate::source::CalendarSource;

/// Why a definition contributed no events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingSubtask,
    MissingTask,
    TaskNotOpen(TaskState),
    Invalid(DefinitionError),
}

/// Outcome of evaluating a single recurring definition.
#[derive(Debug, Clone, PartialEq)]
pub enum DefinitionOutcome {
    Expanded {
        events: Vec<CalendarEventDescriptor>,
        /// Cap that cut the expansion short, if any
        truncated_at: Option<u32>,
    },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    InvalidDefinition(DefinitionError),
    /// Expansion stopped at `cap` iterations; the events may be incomplete
    IterationCapExceeded { cap: u32, emitted: usize },
}

/// A per-definition problem that did not fail the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub definition_id: Uuid,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::InvalidDefinition(err) => {
                write!(f, "recurring event {} skipped: {}", self.definition_id, err)
            }
            DiagnosticKind::IterationCapExceeded { cap, emitted } => write!(
                f,
                "recurring event {} truncated after {} iterations ({} events, possibly incomplete)",
                self.definition_id, cap, emitted
            ),
        }
    }
}

/// Events of one calendar call plus everything that went wrong on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarReport {
    /// Sorted by `start`, ascending
    pub events: Vec<CalendarEventDescriptor>,
    pub diagnostics: Vec<Diagnostic>,
    pub definitions_processed: usize,
    /// Definitions filtered out for a missing subtask/task or a task that is not open
    pub definitions_excluded: usize,
}

impl CalendarReport {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Validates, expands and materializes one definition.
pub fn evaluate_definition(expander: &RecurrenceExpander, definition: &RecurringEvent) -> DefinitionOutcome {
    let Some(subtask) = definition.subtask.as_ref() else {
        return DefinitionOutcome::Skipped(SkipReason::MissingSubtask);
    };
    let Some(task) = subtask.task.as_ref() else {
        return DefinitionOutcome::Skipped(SkipReason::MissingTask);
    };
    if !task.is_open() {
        return DefinitionOutcome::Skipped(SkipReason::TaskNotOpen(task.state));
    }

    let rule = match RecurrenceRule::from_event(definition) {
        Ok(rule) => rule,
        Err(err) => return DefinitionOutcome::Skipped(SkipReason::Invalid(err)),
    };
    let Some(anchor) = subtask.date else {
        return DefinitionOutcome::Skipped(SkipReason::Invalid(DefinitionError::MissingAnchor));
    };

    let expansion = expander.expand(&rule, anchor);
    let events = expansion
        .occurrences
        .iter()
        .map(|&occurrence| event::materialize(occurrence, subtask, task))
        .collect();

    DefinitionOutcome::Expanded {
        events,
        truncated_at: expansion.truncated.then_some(expansion.cap),
    }
}

fn sort_by_start(events: &mut [CalendarEventDescriptor]) {
    events.sort_by(|a, b| a.start.cmp(&b.start));
}

/// Builds calendars for a user from a [`CalendarSource`].
pub struct CalendarAggregator<S> {
    source: S,
    expander: RecurrenceExpander,
}

impl<S: CalendarSource> CalendarAggregator<S> {
    pub fn new(source: S, config: ExpansionConfig) -> Self {
        Self {
            source,
            expander: RecurrenceExpander::new(config),
        }
    }

    pub fn with_defaults(source: S) -> Self {
        Self::new(source, ExpansionConfig::default())
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn expander(&self) -> &RecurrenceExpander {
        &self.expander
    }

    /// Occurrences of every recurring definition of `user`.
    ///
    /// Only a failing fetch is an error; bad definitions end up in
    /// [`CalendarReport::diagnostics`].
    pub async fn recurring_calendar(&self, user: Uuid) -> Result<CalendarReport, CoreError> {
        let definitions = self.source.recurring_events(user).await?;
        let report = self.expand_all(&definitions);
        info!(
            %user,
            events = report.events.len(),
            processed = report.definitions_processed,
            excluded = report.definitions_excluded,
            diagnostics = report.diagnostics.len(),
            "Recurring calendar computed"
        );
        Ok(report)
    }

    /// Expands already fetched definitions into a sorted report.
    pub fn expand_all(&self, definitions: &[RecurringEvent]) -> CalendarReport {
        let expander = &self.expander;
        let outcomes: Vec<DefinitionOutcome> = if expander.config().parallel {
            definitions
                .par_iter()
                .map(|definition| evaluate_definition(expander, definition))
                .collect()
        } else {
            definitions
                .iter()
                .map(|definition| evaluate_definition(expander, definition))
                .collect()
        };

        let mut report = CalendarReport {
            definitions_processed: definitions.len(),
            ..Default::default()
        };

        for (definition, outcome) in definitions.iter().zip(outcomes) {
            match outcome {
                DefinitionOutcome::Expanded { events, truncated_at } => {
                    if let Some(cap) = truncated_at {
                        let diagnostic = Diagnostic {
                            definition_id: definition.id,
                            kind: DiagnosticKind::IterationCapExceeded {
                                cap,
                                emitted: events.len(),
                            },
                        };
                        warn!(definition = %definition.id, cap, "{}", diagnostic);
                        report.diagnostics.push(diagnostic);
                    }
                    report.events.extend(events);
                }
                DefinitionOutcome::Skipped(SkipReason::Invalid(err)) => {
                    let diagnostic = Diagnostic {
                        definition_id: definition.id,
                        kind: DiagnosticKind::InvalidDefinition(err),
                    };
                    warn!(definition = %definition.id, "{}", diagnostic);
                    report.diagnostics.push(diagnostic);
                }
                DefinitionOutcome::Skipped(reason) => {
                    debug!(definition = %definition.id, ?reason, "Recurring event excluded");
                    report.definitions_excluded += 1;
                }
            }
        }

        sort_by_start(&mut report.events);
        report
    }

    /// One all-day event per dated task that is still open.
    pub async fn tasks_calendar(&self, user: Uuid) -> Result<Vec<CalendarEventDescriptor>, CoreError> {
        let tasks = self.source.tasks(user).await?;
        let mut events = task_events(&tasks);
        sort_by_start(&mut events);
        Ok(events)
    }

    /// One event per dated subtask of an open task.
    pub async fn subtasks_calendar(&self, user: Uuid) -> Result<Vec<CalendarEventDescriptor>, CoreError> {
        let tasks = self.source.tasks(user).await?;
        let mut events = subtask_events(&tasks);
        sort_by_start(&mut events);
        Ok(events)
    }

    /// Tasks, subtasks and recurring occurrences merged into one report.
    ///
    /// Tasks are fetched once and feed both the task and subtask events.
    pub async fn full_calendar(&self, user: Uuid) -> Result<CalendarReport, CoreError> {
        let (tasks, mut report) = tokio::try_join!(self.source.tasks(user), self.recurring_calendar(user))?;

        let tasks_events = task_events(&tasks);
        let subtasks_events = subtask_events(&tasks);
        report.events.reserve(tasks_events.len() + subtasks_events.len());
        report.events.extend(tasks_events);
        report.events.extend(subtasks_events);
        sort_by_start(&mut report.events);
        Ok(report)
    }
}

fn task_events(tasks: &[Task]) -> Vec<CalendarEventDescriptor> {
    tasks
        .iter()
        .filter(|task| task.is_open())
        .filter_map(event::from_task)
        .collect()
}

fn subtask_events(tasks: &[Task]) -> Vec<CalendarEventDescriptor> {
    tasks
        .iter()
        .filter(|task| task.is_open())
        .flat_map(|task| {
            task.subtasks
                .iter()
                .filter_map(move |subtask| event::from_subtask(subtask, task))
        })
        .collect()
}

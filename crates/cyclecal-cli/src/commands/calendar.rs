use anyhow::Result;
use cyclecal_core::calendar::{CalendarAggregator, CalendarReport};
use cyclecal_core::source::CalendarSource;
use owo_colors::OwoColorize;
use serde_json::json;

use crate::cli::{CalendarCommand, CalendarKind};
use crate::config::Config;
use crate::util::resolve_user;
use crate::views::table::display_events;

pub async fn calendar_command<S: CalendarSource>(
    aggregator: &CalendarAggregator<S>,
    command: CalendarCommand,
    config: &Config,
) -> Result<()> {
    let user = resolve_user(command.user.as_deref(), config.default_user)?;
    let kind = command.kind.unwrap_or(config.default_kind);

    let report = match kind {
        CalendarKind::Recurring => aggregator.recurring_calendar(user).await?,
        CalendarKind::Tasks => CalendarReport {
            events: aggregator.tasks_calendar(user).await?,
            ..Default::default()
        },
        CalendarKind::Subtasks => CalendarReport {
            events: aggregator.subtasks_calendar(user).await?,
            ..Default::default()
        },
        CalendarKind::All => aggregator.full_calendar(user).await?,
    };

    if command.json {
        let diagnostics: Vec<String> = report.diagnostics.iter().map(ToString::to_string).collect();
        let output = json!({
            "events": report.events,
            "diagnostics": diagnostics,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    display_events(&report.events);

    if kind == CalendarKind::Recurring || kind == CalendarKind::All {
        println!(
            "{} recurring definitions, {} excluded",
            report.definitions_processed, report.definitions_excluded
        );
    }
    for diagnostic in &report.diagnostics {
        eprintln!("{} {}", "Warning:".yellow().bold(), diagnostic);
    }

    Ok(())
}

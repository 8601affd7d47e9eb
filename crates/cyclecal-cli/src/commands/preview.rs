use anyhow::Result;
use cyclecal_core::error::CoreError;
use cyclecal_core::recurrence::{RecurrenceExpander, RecurrenceRule};
use owo_colors::OwoColorize;

use crate::cli::PreviewCommand;
use crate::config::Config;
use crate::parser::{parse_date, parse_weekdays};

pub fn preview_command(command: PreviewCommand, config: &Config) -> Result<()> {
    let anchor = parse_date(&command.from)?;
    let until = parse_date(&command.until)?;
    let weekdays = match command.on.as_deref() {
        Some(list) => parse_weekdays(list)?,
        None => Vec::new(),
    };

    let rule = RecurrenceRule::new(command.every, command.distance, weekdays, until)
        .map_err(CoreError::from)?;
    let expander = RecurrenceExpander::new(config.expansion.clone());
    let mut expansion = expander.expand(&rule, anchor);
    expansion.occurrences.sort();

    if expansion.occurrences.is_empty() {
        println!("No occurrences before the end of the cycle");
        return Ok(());
    }

    println!(
        "{} (every {} {}, until {})",
        "Recurrence Preview".blue().bold(),
        rule.distance,
        rule.period.to_string().to_lowercase(),
        until.format("%Y-%m-%d")
    );
    println!();

    for (i, occurrence) in expansion.occurrences.iter().take(command.count).enumerate() {
        println!("  {}. {}", i + 1, occurrence.format("%Y-%m-%d %a %H:%M"));
    }

    let hidden = expansion.occurrences.len().saturating_sub(command.count);
    if hidden > 0 {
        println!("  ... and {} more", hidden);
    }
    if expansion.truncated {
        eprintln!(
            "{} stopped after {} iterations, the list may be incomplete",
            "Warning:".yellow().bold(),
            expansion.cap
        );
    }

    Ok(())
}

use clap::{Parser, Subcommand, ValueEnum};
use cyclecal_core::models::CyclePeriod;
use serde::Deserialize;
use std::path::PathBuf;

/// Render task calendars with recurring subtask schedules
#[derive(Parser, Debug)]
#[command(name = "cyclecal", author, version, about, long_about = None)]
pub struct Cli {
    /// Calendar snapshot file (overrides the configured `snapshot_path`)
    #[arg(long, global = true)]
    pub snapshot: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show a user's calendar
    Calendar(CalendarCommand),
    /// Preview the occurrences of an ad-hoc recurrence rule
    Preview(PreviewCommand),
}

/// Which events a calendar contains.
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    /// Occurrences of recurring events only
    #[default]
    Recurring,
    /// Dated tasks
    Tasks,
    /// Dated subtasks
    Subtasks,
    /// Everything above, merged
    All,
}

#[derive(Parser, Debug, Clone)]
pub struct CalendarCommand {
    /// The user whose calendar to show (defaults to `default_user`)
    #[clap(long, short)]
    pub user: Option<String>,
    /// Which events to include
    #[clap(long, short, value_enum)]
    pub kind: Option<CalendarKind>,
    /// Print JSON instead of a table
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PreviewCommand {
    /// Cycle period (days, weeks, months, years)
    #[clap(long, value_parser = parse_cycle_period)]
    pub every: CyclePeriod,
    /// Number of periods between occurrences
    #[clap(long, default_value = "1")]
    pub distance: u32,
    /// Weekdays for weekly cycles, e.g. "tue,thu" or "2,4"
    #[clap(long)]
    pub on: Option<String>,
    /// Anchor date; occurrences start strictly after it
    #[clap(long)]
    pub from: String,
    /// End of the cycle (inclusive)
    #[clap(long)]
    pub until: String,
    /// Maximum number of occurrences to show
    #[clap(long, short, default_value = "50")]
    pub count: usize,
}

fn parse_cycle_period(s: &str) -> Result<CyclePeriod, String> {
    s.parse::<CyclePeriod>().map_err(|e| e.to_string())
}

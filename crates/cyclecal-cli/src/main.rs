use clap::Parser;
use cyclecal_core::calendar::CalendarAggregator;
use cyclecal_core::error::CoreError;
use cyclecal_core::source::SnapshotFileSource;
use owo_colors::{OwoColorize, Style};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod parser;
mod util;
mod views;

#[tokio::main]
async fn main() {
    let config = config::Config::new().unwrap_or_default();
    init_tracing(&config.log_level);

    let cli = cli::Cli::parse();
    let snapshot_path = cli
        .snapshot
        .clone()
        .unwrap_or_else(|| config.snapshot_path.clone());
    tracing::debug!(snapshot = %snapshot_path.display(), "Using calendar snapshot");

    let aggregator = CalendarAggregator::new(
        SnapshotFileSource::new(snapshot_path),
        config.expansion.clone(),
    );

    let result = match cli.command {
        cli::Commands::Calendar(command) => {
            commands::calendar::calendar_command(&aggregator, command, &config).await
        }
        cli::Commands::Preview(command) => commands::preview::preview_command(command, &config),
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::SourceUnavailable(s) => {
                eprintln!("{} Cannot read calendar data: {}", "Error:".style(error_style), s);
            }
            CoreError::Snapshot(e) => {
                eprintln!(
                    "{} Calendar snapshot is malformed: {}",
                    "Error:".style(error_style),
                    e.yellow()
                );
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            CoreError::InvalidDefinition(e) => {
                eprintln!("{} Invalid recurrence: {}", "Error:".style(error_style), e);
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }
}

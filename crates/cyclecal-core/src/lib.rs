//! # Cyclecal Core Library
//!
//! Turns recurring subtask definitions of a task manager into the concrete
//! calendar events a user sees.
//!
//! ## Features
//!
//! - **Calendar-Aware Recurrence**: day, week, month and year cycles with
//!   end-of-month clamping and optional weekday selection for weekly cycles
//! - **Bounded Expansion**: every expansion carries an iteration cap derived
//!   from its span, so malformed definitions cannot loop forever
//! - **Partial Results**: bad definitions are reported as diagnostics while the
//!   rest of the calendar is still produced
//! - **Parallel Evaluation**: definitions are expanded independently on the
//!   rayon pool and merged in a deterministic order
//!
//! ## Core Modules
//!
//! - [`models`]: Records delivered by the persistence layer
//! - [`recurrence`]: Occurrence cursor, weekday fan-out and the expander
//! - [`event`]: Calendar event descriptors and their construction
//! - [`calendar`]: Per-user aggregation with diagnostics
//! - [`source`]: The data source trait plus in-memory and JSON file sources
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cyclecal_core::{
//!     calendar::CalendarAggregator, recurrence::ExpansionConfig, source::SnapshotFileSource,
//! };
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let source = SnapshotFileSource::new("calendar.json");
//!     let aggregator = CalendarAggregator::new(source, ExpansionConfig::default());
//!
//!     let report = aggregator.recurring_calendar(Uuid::nil()).await?;
//!     for event in &report.events {
//!         println!("{} {}", event.start, event.title);
//!     }
//!     for diagnostic in &report.diagnostics {
//!         eprintln!("{}", diagnostic);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod calendar;
pub mod error;
pub mod event;
pub mod models;
pub mod recurrence;
pub mod source;

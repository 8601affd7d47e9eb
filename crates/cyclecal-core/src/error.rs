use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Malformed snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Calendar source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid recurring event: {0}")]
    InvalidDefinition(#[from] DefinitionError),
}

/// Reasons a recurring event definition cannot be expanded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("distance must be at least 1, got {0}")]
    InvalidDistance(i64),

    #[error("unknown cycle period '{0}'")]
    UnknownCyclePeriod(String),

    #[error("weekday {0} is outside 1..=7")]
    InvalidWeekday(i64),

    #[error("anchor subtask has no date")]
    MissingAnchor,
}

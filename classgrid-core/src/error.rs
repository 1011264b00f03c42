//! Error types for classgrid.

use thiserror::Error;

use crate::conflict::Conflict;

/// Errors that can occur in classgrid operations.
#[derive(Error, Debug)]
pub enum ClassGridError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Schedule not found: {0}")]
    ScheduleNotFound(String),

    #[error("Invalid time '{0}'. Expected a time like \"1:30 PM\"")]
    InvalidTime(String),

    #[error("Invalid day '{0}'. Expected one of Monday through Sunday")]
    InvalidDay(String),

    #[error("Invalid color '{0}'. Expected maroon, gold, blue, green, purple or orange")]
    InvalidColor(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Invalid time range: {0}")]
    InvalidTimeRange(String),

    #[error("Time not offered: {0}")]
    TimeNotOffered(String),

    #[error("{0}")]
    Conflict(Conflict),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ClassGridError {
    fn from(e: serde_json::Error) -> Self {
        ClassGridError::Serialization(e.to_string())
    }
}

/// Result type alias for classgrid operations.
pub type ClassGridResult<T> = Result<T, ClassGridError>;

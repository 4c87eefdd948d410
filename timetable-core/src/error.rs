//! Error types for the timetable viewer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading configuration or reading a calendar.
#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not read calendar file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unrecognized date-time '{token}'. Expected YYYYMMDD[THHMMSS[Z]]")]
    InvalidDateTime { token: String },

    #[error("Invalid date format '{0}'. Expected YYYY-MM-DD")]
    InvalidDateArg(String),
}

/// Result type alias for timetable operations.
pub type TimetableResult<T> = Result<T, TimetableError>;

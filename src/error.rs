//! Error types for Noctis

use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors that can occur while building or analyzing sleep sessions
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("sleep end {end} is before sleep start {start}")]
    InvalidInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Failed to parse session line: {0}")]
    ParseError(String),

    #[error("Date parse error: {0}")]
    DateParseError(String),

    #[error("Unknown sleep quality: {0}")]
    UnknownQuality(String),
}

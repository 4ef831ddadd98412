//! Configuration errors.
//!
//! Numeric edge cases never surface here; they resolve to documented
//! fallback values inside each indicator. Only malformed configuration
//! strings are rejected.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid time of day '{0}': expected HH:MM")]
    InvalidTimeOfDay(String),

    #[error("invalid block size '{0}': expected e.g. 30m, 1h, 15")]
    InvalidBlockSize(String),

    #[error("invalid tick size '{0}': expected 'auto' or a positive number")]
    InvalidTickSize(String),

    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),

    #[error("session window {start} - {end} is empty")]
    EmptySessionWindow { start: String, end: String },

    #[error("invalid study file: {0}")]
    InvalidStudyFile(String),
}

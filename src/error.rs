//! Error types for the shift engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while parsing schedules,
//! classifying shifts and loading rate configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a schedule text could not be turned into a [`ParsedSchedule`].
///
/// [`ParsedSchedule`]: crate::models::ParsedSchedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseFailureReason {
    /// Neither a date nor a time window could be located in the text.
    UnrecognizedFormat,
    /// A date-shaped token was found but names an impossible calendar date.
    InvalidDate,
    /// A date range covers more days than the parser is willing to expand.
    RangeTooLong,
}

impl std::fmt::Display for ParseFailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseFailureReason::UnrecognizedFormat => write!(f, "unrecognized_format"),
            ParseFailureReason::InvalidDate => write!(f, "invalid_date"),
            ParseFailureReason::RangeTooLong => write!(f, "range_too_long"),
        }
    }
}

/// The main error type for the shift engine.
///
/// # Example
///
/// ```
/// use shift_engine::error::EngineError;
///
/// let error = EngineError::InvalidWindow { start: 1500, end: 60 };
/// assert_eq!(
///     error.to_string(),
///     "Invalid time window 1500-60: minutes must be within [0, 1440)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The schedule text could not be understood.
    #[error("Could not parse schedule '{text}': {reason}")]
    ParseFailure {
        /// The reason tag for the failure.
        reason: ParseFailureReason,
        /// The raw text that was given to the parser.
        text: String,
    },

    /// A time window had minutes outside of a single day.
    #[error("Invalid time window {start}-{end}: minutes must be within [0, 1440)")]
    InvalidWindow {
        /// The start minute of the window.
        start: u32,
        /// The end minute of the window.
        end: u32,
    },

    /// A date list was empty or otherwise unusable.
    #[error("Invalid date range: {message}")]
    InvalidDateRange {
        /// A description of what made the range invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

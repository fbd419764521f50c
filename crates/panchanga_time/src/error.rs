//! Error types for calendar and time-scale conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date validation or timestamp parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is out of range (bad month, day, hour, ...).
    InvalidDate(&'static str),
    /// A date/time string did not match the expected layout.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}

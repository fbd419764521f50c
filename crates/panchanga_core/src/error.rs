//! Error types for panchanga calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use panchanga_ephem::EphemError;
use panchanga_time::{CivilDate, TimeError};

/// Errors from the panchanga core.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CoreError {
    /// Error from the ephemeris layer.
    Ephemeris(EphemError),
    /// Error from time conversion or parsing.
    Time(TimeError),
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// Iterative or scanning algorithm did not converge.
    NoConvergence(&'static str),
    /// The Sun does not cross the horizon on this date at this location.
    /// `midnight_sun` is true when it stays up, false for polar night.
    NoSunrise { date: CivilDate, midnight_sun: bool },
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
            Self::NoSunrise { date, midnight_sun } => {
                let phase = if *midnight_sun { "midnight sun" } else { "polar night" };
                write!(f, "no sunrise on {date}: {phase}")
            }
        }
    }
}

impl Error for CoreError {}

impl From<EphemError> for CoreError {
    fn from(e: EphemError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<TimeError> for CoreError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

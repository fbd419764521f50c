//! Error type for the analytic ephemeris.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from ephemeris evaluation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// The requested epoch lies outside the series' validity window.
    ///
    /// The truncated periodic terms degrade outside roughly 1600–2400 CE;
    /// rather than extrapolate silently, every entry point refuses.
    OutOfRange { jd_tt: f64 },
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { jd_tt } => {
                write!(f, "JD {jd_tt} is outside the supported range 1600-01-01..2400-01-01")
            }
        }
    }
}

impl Error for EphemError {}

//! Error type for festival resolution.

use std::error::Error;
use std::fmt::{Display, Formatter};

use panchanga_core::CoreError;

/// Errors from festival resolution.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FestivalError {
    /// Error from the panchanga core.
    Core(CoreError),
    /// The descriptor window mixes more than one location.
    MixedLocations,
}

impl Display for FestivalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Core(e) => write!(f, "core error: {e}"),
            Self::MixedLocations => {
                write!(f, "descriptor window mixes locations")
            }
        }
    }
}

impl Error for FestivalError {}

impl From<CoreError> for FestivalError {
    fn from(e: CoreError) -> Self {
        Self::Core(e)
    }
}

//! Error type for the engine facade.

use std::error::Error;
use std::fmt::{Display, Formatter};

use panchanga_core::CoreError;
use panchanga_festival::FestivalError;

/// Errors surfaced by the [`Panchanga`](crate::Panchanga) engine.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PanchangaError {
    /// Error from the panchanga core.
    Core(CoreError),
    /// Error from festival resolution.
    Festival(FestivalError),
    /// Rejected engine configuration.
    InvalidConfig(&'static str),
    /// Rejected date range.
    InvalidRange(&'static str),
}

impl Display for PanchangaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Core(e) => write!(f, "core error: {e}"),
            Self::Festival(e) => write!(f, "festival error: {e}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidRange(msg) => write!(f, "invalid range: {msg}"),
        }
    }
}

impl Error for PanchangaError {}

impl From<CoreError> for PanchangaError {
    fn from(e: CoreError) -> Self {
        Self::Core(e)
    }
}

impl From<FestivalError> for PanchangaError {
    fn from(e: FestivalError) -> Self {
        Self::Festival(e)
    }
}

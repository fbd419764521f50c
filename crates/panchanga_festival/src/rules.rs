//! Declarative festival rules and resolved occurrences.

use panchanga_core::{Masa, Tithi};
use panchanga_time::CivilDate;
use serde::{Deserialize, Serialize};

/// What fixes a festival to a date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RuleKind {
    /// A tithi, optionally constrained to a purnimanta month.
    Lunar { tithi: Tithi, masa: Option<Masa> },
    /// The Sun crossing a sidereal ecliptic longitude (a sankranti).
    Solar { longitude_deg: f64 },
}

/// Which civil day is kept when the governing tithi touches more than
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Observance {
    /// The first day whose sunrise falls inside the tithi.
    FirstDay,
    /// The second of two consecutive qualifying sunrises; same as
    /// `FirstDay` when the tithi holds only one sunrise.
    SecondDay,
    /// The day whose window contains the tithi's end.
    EndDay,
}

/// One festival rule. The catalog is a `const` table of these; hosts
/// may also pass their own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FestivalRule {
    /// Stable snake_case key.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    pub kind: RuleKind,
    pub observance: Observance,
    /// One-line description carried through for hosts.
    pub description: &'static str,
}

/// A festival resolved to a civil date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FestivalOccurrence {
    pub rule_id: &'static str,
    pub name: &'static str,
    pub date: CivilDate,
    /// The governing tithi began and ended between two sunrises; the
    /// date is the day whose window contained it.
    pub skipped: bool,
    /// The governing tithi held at two consecutive sunrises.
    pub extended: bool,
}

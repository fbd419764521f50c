//! Day descriptor types.

use panchanga_ephem::AyanamshaSystem;
use panchanga_time::CivilDate;
use serde::{Deserialize, Serialize};

use crate::anga::{AngaSnapshot, Transition};
use crate::location::Location;
use crate::masa::MasaInfo;
use crate::muhurta::MuhurtaWindow;
use crate::riseset_types::RiseSetConfig;

/// Knobs for day assembly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DayConfig {
    pub ayanamsha: AyanamshaSystem,
    pub rise_set: RiseSetConfig,
}

/// How the day window is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayBoundary {
    /// Normal day: the window opens at sunrise.
    Sunrise,
    /// Polar day without a sunrise: the window runs local midnight to
    /// local midnight instead.
    MidnightFallback {
        /// True under the midnight sun, false in polar night.
        midnight_sun: bool,
    },
}

/// The traditional daily spans. Only built for days with both a
/// sunrise and a sunset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayMuhurta {
    pub rahu_kala: MuhurtaWindow,
    pub yamaganda_kala: MuhurtaWindow,
    pub gulika_kala: MuhurtaWindow,
    pub abhijit: MuhurtaWindow,
    /// Varjyam spans overlapping the day window, one per touching
    /// nakshatra, unclipped.
    pub varjyam: Vec<MuhurtaWindow>,
}

/// Full description of one civil day at one location.
///
/// The day window is half-open: a transition landing exactly on
/// `window_end_jd` belongs to the next day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayDescriptor {
    pub date: CivilDate,
    pub location: Location,
    pub boundary: DayBoundary,
    /// Window start, UTC Julian Day: sunrise, or local midnight in the
    /// polar fallback.
    pub window_start_jd: f64,
    /// Window end: the next day's sunrise, or the next local midnight.
    pub window_end_jd: f64,
    /// Sunrise of this civil day, when it occurs.
    pub sunrise_jd: Option<f64>,
    /// Sunset of this civil day, when it occurs.
    pub sunset_jd: Option<f64>,
    /// The five limbs read at the window start.
    pub at_sunrise: AngaSnapshot,
    /// Amanta month in force at the window start.
    pub amanta_masa: MasaInfo,
    /// Purnimanta month in force at the window start.
    pub purnimanta_masa: MasaInfo,
    /// Limb changes inside the window, sorted by time.
    pub transitions: Vec<Transition>,
    pub muhurta: Option<DayMuhurta>,
}

impl DayDescriptor {
    /// Length of the day window in days.
    pub fn window_days(&self) -> f64 {
        self.window_end_jd - self.window_start_jd
    }
}

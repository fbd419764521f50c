//! Types for the sunrise/sunset solver.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters, used for the geometric dip.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Horizon event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiseSetEvent {
    /// Upper limb appears at the refracted horizon.
    Sunrise,
    /// Upper limb disappears below the refracted horizon.
    Sunset,
}

impl RiseSetEvent {
    /// Whether this is the morning event.
    pub const fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise)
    }
}

/// Observational model for the horizon crossing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes.
    pub refraction_arcmin: f64,
    /// Solar angular semidiameter in arcminutes.
    pub semidiameter_arcmin: f64,
    /// Apply the geometric dip for observers above sea level.
    /// Dip is approximated as `sqrt(2h/R)` radians.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Total depression of the Sun's center below the geometric horizon
    /// at the event, in degrees.
    ///
    /// `h0 = (refraction + semidiameter) / 60 + dip`
    pub fn horizon_depression_deg(&self, altitude_m: f64) -> f64 {
        let base = (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0;
        if self.altitude_correction && altitude_m > 0.0 {
            let dip_rad = (2.0 * altitude_m / EARTH_RADIUS_M).sqrt();
            base + dip_rad * (180.0 / PI)
        } else {
            base
        }
    }
}

/// Outcome of a horizon-crossing search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RiseSetResult {
    /// Event occurs at the given UTC Julian Day.
    Event { jd_utc: f64, event: RiseSetEvent },
    /// Sun stays below the horizon all day (polar night).
    NeverRises,
    /// Sun stays above the horizon all day (midnight sun).
    NeverSets,
}

impl RiseSetResult {
    /// Event time if the event occurs.
    pub fn event_jd(self) -> Option<f64> {
        match self {
            RiseSetResult::Event { jd_utc, .. } => Some(jd_utc),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_depression_is_fifty_arcmin() {
        let c = RiseSetConfig::default();
        let d = c.horizon_depression_deg(0.0);
        assert!(
            (d - 50.0 / 60.0).abs() < 1e-12,
            "sea-level depression {d}"
        );
    }

    #[test]
    fn dip_grows_with_altitude() {
        let c = RiseSetConfig::default();
        let base = c.horizon_depression_deg(0.0);
        let at_1000m = c.horizon_depression_deg(1000.0);
        // sqrt(2*1000/6371000) rad is close to one degree.
        assert!(at_1000m > base + 0.9, "1000 m depression {at_1000m}");
        assert!(at_1000m < base + 1.2, "1000 m depression {at_1000m}");
    }

    #[test]
    fn dip_can_be_disabled() {
        let c = RiseSetConfig {
            altitude_correction: false,
            ..Default::default()
        };
        assert_eq!(
            c.horizon_depression_deg(10_000.0),
            c.horizon_depression_deg(0.0)
        );
    }

    #[test]
    fn negative_altitude_gets_no_dip() {
        let c = RiseSetConfig::default();
        assert_eq!(
            c.horizon_depression_deg(-100.0),
            c.horizon_depression_deg(0.0)
        );
    }

    #[test]
    fn rising_flag() {
        assert!(RiseSetEvent::Sunrise.is_rising());
        assert!(!RiseSetEvent::Sunset.is_rising());
    }

    #[test]
    fn event_jd_extraction() {
        let hit = RiseSetResult::Event {
            jd_utc: 2_460_000.25,
            event: RiseSetEvent::Sunrise,
        };
        assert_eq!(hit.event_jd(), Some(2_460_000.25));
        assert_eq!(RiseSetResult::NeverRises.event_jd(), None);
        assert_eq!(RiseSetResult::NeverSets.event_jd(), None);
    }
}

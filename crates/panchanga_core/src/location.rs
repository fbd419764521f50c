//! Observer location for sunrise-anchored calculations.

use serde::{Deserialize, Serialize};

/// Geographic location plus the fixed UTC offset its civil clock runs on.
///
/// The offset stands in for a time zone: panchanga days are bounded by
/// local sunrise and local midnight, both of which need the civil clock,
/// and a fixed offset covers every practical query without a zone
/// database. DST-observing places should pass the offset in force on the
/// queried date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
    /// Civil clock offset from UTC in hours, east positive (IST = 5.5).
    pub utc_offset_hours: f64,
}

impl Location {
    pub fn new(
        latitude_deg: f64,
        longitude_deg: f64,
        altitude_m: f64,
        utc_offset_hours: f64,
    ) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
            utc_offset_hours,
        }
    }

    /// Validate all fields. Returns a description of the first problem.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err("latitude must be in [-90, 90] degrees");
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err("longitude must be in [-180, 180] degrees");
        }
        if !self.altitude_m.is_finite() || !(-500.0..=9000.0).contains(&self.altitude_m) {
            return Err("altitude must be in [-500, 9000] meters");
        }
        if !self.utc_offset_hours.is_finite() || !(-12.0..=14.0).contains(&self.utc_offset_hours) {
            return Err("utc offset must be in [-12, 14] hours");
        }
        Ok(())
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delhi() -> Location {
        Location::new(28.6139, 77.209, 216.0, 5.5)
    }

    #[test]
    fn valid_location_passes() {
        assert!(delhi().validate().is_ok());
    }

    #[test]
    fn latitude_out_of_range() {
        let mut loc = delhi();
        loc.latitude_deg = 91.0;
        assert!(loc.validate().is_err());
        loc.latitude_deg = f64::NAN;
        assert!(loc.validate().is_err());
    }

    #[test]
    fn longitude_out_of_range() {
        let mut loc = delhi();
        loc.longitude_deg = -180.5;
        assert!(loc.validate().is_err());
    }

    #[test]
    fn offset_out_of_range() {
        let mut loc = delhi();
        loc.utc_offset_hours = 15.0;
        assert!(loc.validate().is_err());
    }

    #[test]
    fn radians_conversion() {
        let loc = delhi();
        assert!((loc.latitude_rad() - 28.6139_f64.to_radians()).abs() < 1e-15);
        assert!((loc.longitude_rad() - 77.209_f64.to_radians()).abs() < 1e-15);
    }
}

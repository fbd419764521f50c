//! Apparent solar ecliptic longitude and equatorial coordinates.
//!
//! Mean elements plus equation of center (three periodic terms), constant
//! aberration, and the shared nutation model. Good to roughly half an
//! arcminute across the validity window, which keeps derived boundary
//! instants (tithi, sankranti) within a couple of minutes of high-precision
//! ephemerides.
//!
//! Source: standard low-precision solar theory (Meeus ch. 25).

use panchanga_time::jd_to_centuries;

use crate::error::EphemError;
use crate::nutation::{nutation, true_obliquity_deg};
use crate::validate_jd;

/// Annual aberration for the Sun, degrees (−20.4898″).
const ABERRATION_DEG: f64 = -0.005_69;

/// Sun position on the equator of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunEquatorial {
    /// Apparent right ascension in degrees [0, 360).
    pub ra_deg: f64,
    /// Apparent declination in degrees.
    pub dec_deg: f64,
}

fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Geometric mean longitude of the Sun, degrees.
fn mean_longitude_deg(t: f64) -> f64 {
    normalize_360(280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t)
}

/// Mean anomaly of the Sun, degrees.
fn mean_anomaly_deg(t: f64) -> f64 {
    normalize_360(357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t)
}

/// Equation of center, degrees.
fn equation_of_center_deg(t: f64, mean_anomaly_deg: f64) -> f64 {
    let m = mean_anomaly_deg.to_radians();
    (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin()
}

/// True geometric longitude (no aberration, no nutation), degrees.
pub(crate) fn geometric_longitude_deg(t: f64) -> f64 {
    let m = mean_anomaly_deg(t);
    normalize_360(mean_longitude_deg(t) + equation_of_center_deg(t, m))
}

/// Apparent ecliptic longitude of the Sun in degrees [0, 360).
///
/// `jd_tt` is a Julian Day in Terrestrial Time. Fails with
/// [`EphemError::OutOfRange`] outside the validity window.
pub fn sun_longitude(jd_tt: f64) -> Result<f64, EphemError> {
    validate_jd(jd_tt)?;
    let t = jd_to_centuries(jd_tt);
    let (dpsi, _) = nutation(t);
    Ok(apparent_longitude_deg(t, dpsi))
}

/// Apparent longitude from a precomputed nutation in longitude, degrees.
pub(crate) fn apparent_longitude_deg(t: f64, delta_psi_arcsec: f64) -> f64 {
    normalize_360(geometric_longitude_deg(t) + ABERRATION_DEG + delta_psi_arcsec / 3600.0)
}

/// Apparent right ascension and declination of the Sun.
///
/// Uses the apparent longitude and the true obliquity, so hour angles built
/// from apparent sidereal time are consistent.
pub fn sun_equatorial(jd_tt: f64) -> Result<SunEquatorial, EphemError> {
    let lambda = sun_longitude(jd_tt)?.to_radians();
    let t = jd_to_centuries(jd_tt);
    let eps = true_obliquity_deg(t).to_radians();

    let ra = (eps.cos() * lambda.sin()).atan2(lambda.cos());
    let dec = (eps.sin() * lambda.sin()).asin();

    Ok(SunEquatorial {
        ra_deg: normalize_360(ra.to_degrees()),
        dec_deg: dec.to_degrees(),
    })
}

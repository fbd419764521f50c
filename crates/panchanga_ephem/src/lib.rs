//! Analytic ephemeris for the Sun and Moon, tuned for panchanga work.
//!
//! This crate provides:
//! - Apparent ecliptic longitudes of date for the Sun and the Moon
//! - Truncated IAU 1980 nutation and mean/true obliquity
//! - Ayanamsha for the common sidereal reference systems
//!
//! All implementations are clean-room, derived from published series
//! (Meeus, IAU). Accuracy is a few arcseconds for the Sun and well under
//! an arcminute for the Moon across the supported range, which keeps anga
//! boundary instants inside a second of time.
//!
//! Epoch arguments are Julian Days in Terrestrial Time; convert civil
//! instants with `panchanga_time` first.

pub mod ayanamsha;
pub mod error;
pub mod lunar;
pub mod nutation;
pub mod solar;

use panchanga_time::jd_to_centuries;

pub use ayanamsha::{ALL_SYSTEMS, AyanamshaSystem, ayanamsha_deg, general_precession_arcsec};
pub use error::EphemError;
pub use lunar::moon_longitude;
pub use nutation::{mean_obliquity_deg, true_obliquity_deg};
pub use solar::{SunEquatorial, sun_equatorial, sun_longitude};

/// First supported epoch: 1600-01-01 00:00 TT.
pub const MIN_JD: f64 = 2_305_447.5;

/// First unsupported epoch past the range: 2400-01-01 00:00 TT.
pub const MAX_JD: f64 = 2_597_641.5;

/// Rejects epochs outside [`MIN_JD`, `MAX_JD`). Non-finite values fail too.
pub(crate) fn validate_jd(jd_tt: f64) -> Result<(), EphemError> {
    if jd_tt >= MIN_JD && jd_tt < MAX_JD {
        Ok(())
    } else {
        Err(EphemError::OutOfRange { jd_tt })
    }
}

/// Apparent tropical longitudes of the Sun and the Moon, degrees [0, 360).
///
/// Computes nutation once and shares it between both bodies. Boundary
/// searches evaluate this hundreds of times per transition, so the shared
/// evaluation is the hot path of the whole engine.
pub fn longitudes(jd_tt: f64) -> Result<(f64, f64), EphemError> {
    validate_jd(jd_tt)?;
    let t = jd_to_centuries(jd_tt);
    let (dpsi, _) = nutation::nutation(t);
    Ok((
        solar::apparent_longitude_deg(t, dpsi),
        lunar::apparent_longitude_deg(t, dpsi),
    ))
}

/// Sidereal longitudes of the Sun and the Moon for one reference system,
/// degrees [0, 360).
pub fn sidereal_sun_moon(jd_tt: f64, system: AyanamshaSystem) -> Result<(f64, f64), EphemError> {
    validate_jd(jd_tt)?;
    let t = jd_to_centuries(jd_tt);
    let (dpsi, _) = nutation::nutation(t);
    let ayan = ayanamsha_deg(system, t, dpsi);
    Ok((
        (solar::apparent_longitude_deg(t, dpsi) - ayan).rem_euclid(360.0),
        (lunar::apparent_longitude_deg(t, dpsi) - ayan).rem_euclid(360.0),
    ))
}

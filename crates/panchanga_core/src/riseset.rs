//! Sunrise and sunset solver.
//!
//! Standard hour-angle method: estimate the local transit from sidereal
//! time, step to `transit -/+ H0`, then refine by recomputing the Sun's
//! position at each trial instant until the correction falls below a
//! tenth of a second. Converges in two or three rounds outside polar
//! latitudes.

use std::f64::consts::{PI, TAU};

use panchanga_ephem::sun_equatorial;
use panchanga_time::{CivilDate, gmst_deg, local_sidereal_deg, utc_to_tt_jd};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::location::Location;
use crate::riseset_types::{RiseSetConfig, RiseSetEvent, RiseSetResult};

/// Refinement iteration cap.
const MAX_ITERATIONS: usize = 5;

/// Convergence threshold in days (~0.086 s).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Hour angle advance rate, radians per UT day.
const SIDEREAL_RATE: f64 = TAU * 1.002_737_811_911_354_6;

/// Approximate local solar noon from a 0h UT Julian Day and a longitude.
///
/// `JD_noon = JD_0h + 0.5 - longitude_deg / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

/// Sun hour angle at `jd_utc` in radians, normalized to [-pi, pi].
fn hour_angle_rad(jd_utc: f64, longitude_deg: f64, ra_deg: f64) -> f64 {
    let lst = local_sidereal_deg(gmst_deg(jd_utc), longitude_deg);
    let ha = (lst - ra_deg).rem_euclid(360.0);
    let ha = if ha > 180.0 { ha - 360.0 } else { ha };
    ha.to_radians()
}

/// Compute one sunrise or sunset near `jd_utc_noon`.
///
/// `jd_utc_noon` anchors the solar day: the solver homes in on the
/// transit closest to it and walks to the requested horizon crossing,
/// so the caller picks the day by picking the noon. Polar conditions
/// are reported as [`RiseSetResult::NeverRises`] / [`RiseSetResult::NeverSets`]
/// rather than an error.
pub fn compute_rise_set(
    location: &Location,
    event: RiseSetEvent,
    jd_utc_noon: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, CoreError> {
    let phi = location.latitude_rad();
    // Target altitude of the Sun's center; depression is fixed per
    // location, so it does not change across iterations.
    let h0_rad = (-config.horizon_depression_deg(location.altitude_m)).to_radians();

    let sun = sun_equatorial(utc_to_tt_jd(jd_utc_noon))?;
    let dec = sun.dec_deg.to_radians();

    let cos_h0 = (h0_rad.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    if cos_h0 > 1.0 {
        return Ok(RiseSetResult::NeverRises);
    }
    if cos_h0 < -1.0 {
        return Ok(RiseSetResult::NeverSets);
    }
    let semi_arc = cos_h0.acos();

    // Transit is where the hour angle vanishes.
    let ha_noon = hour_angle_rad(jd_utc_noon, location.longitude_deg, sun.ra_deg);
    let jd_utc_transit = jd_utc_noon - ha_noon / SIDEREAL_RATE;

    let mut jd_utc_event = if event.is_rising() {
        jd_utc_transit - semi_arc / SIDEREAL_RATE
    } else {
        jd_utc_transit + semi_arc / SIDEREAL_RATE
    };

    for _ in 0..MAX_ITERATIONS {
        let sun_i = sun_equatorial(utc_to_tt_jd(jd_utc_event))?;
        let dec_i = sun_i.dec_deg.to_radians();

        let cos_h = (h0_rad.sin() - phi.sin() * dec_i.sin()) / (phi.cos() * dec_i.cos());
        if cos_h > 1.0 {
            return Ok(RiseSetResult::NeverRises);
        }
        if cos_h < -1.0 {
            return Ok(RiseSetResult::NeverSets);
        }
        let h_target = if event.is_rising() {
            -cos_h.acos()
        } else {
            cos_h.acos()
        };

        let ha_actual = hour_angle_rad(jd_utc_event, location.longitude_deg, sun_i.ra_deg);
        let mut dha = h_target - ha_actual;
        if dha > PI {
            dha -= TAU;
        } else if dha < -PI {
            dha += TAU;
        }

        let correction = dha / SIDEREAL_RATE;
        jd_utc_event += correction;
        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    Ok(RiseSetResult::Event {
        jd_utc: jd_utc_event,
        event,
    })
}

/// Sunrise and sunset of one civil day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: RiseSetResult,
    pub sunset: RiseSetResult,
}

/// Sunrise and sunset for a civil date at a location.
///
/// The solar day is anchored at the civil noon of `date` in the
/// location's UTC offset, so the returned events are the ones a wall
/// clock at that location attributes to `date`.
pub fn sun_times(
    location: &Location,
    date: CivilDate,
    config: &RiseSetConfig,
) -> Result<SunTimes, CoreError> {
    let jd_utc_noon = date.jd_midnight() + 0.5 - location.utc_offset_hours / 24.0;
    let sunrise = compute_rise_set(location, RiseSetEvent::Sunrise, jd_utc_noon, config)?;
    let sunset = compute_rise_set(location, RiseSetEvent::Sunset, jd_utc_noon, config)?;
    Ok(SunTimes { sunrise, sunset })
}

/// Sunrise instant for a civil date, failing on polar days.
///
/// Callers that can handle the polar cases should match on
/// [`sun_times`] instead.
pub fn sunrise_jd(
    location: &Location,
    date: CivilDate,
    config: &RiseSetConfig,
) -> Result<f64, CoreError> {
    match sun_times(location, date, config)?.sunrise {
        RiseSetResult::Event { jd_utc, .. } => Ok(jd_utc),
        RiseSetResult::NeverRises => Err(CoreError::NoSunrise {
            date,
            midnight_sun: false,
        }),
        RiseSetResult::NeverSets => Err(CoreError::NoSunrise {
            date,
            midnight_sun: true,
        }),
    }
}

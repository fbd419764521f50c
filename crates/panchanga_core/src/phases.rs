//! New moon and full moon searches.
//!
//! A phase instant is a zero of `normalize(elongation - target)` with
//! target 0 (new) or 180 (full). Instants in and out are UTC Julian
//! Days; the ephemeris is queried in TT internally.

use panchanga_ephem::longitudes;
use panchanga_time::{tt_to_utc_jd, utc_to_tt_jd};

use crate::error::CoreError;
use crate::search::{find_zero_crossing, normalize_to_pm180};

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_589;

/// Scan step for phase searches, days. The difference function moves at
/// most ~15 deg/day, so daily samples cannot alias past a crossing.
const PHASE_STEP_DAYS: f64 = 1.0;

/// Scan limit: a bit over one synodic month.
const PHASE_MAX_STEPS: usize = 35;

/// Bisection tolerance in days (~9 ms).
const PHASE_TOL_DAYS: f64 = 1e-7;

fn phase_offset(jd_tt: f64, target_deg: f64) -> Result<f64, CoreError> {
    let (sun, moon) = longitudes(jd_tt)?;
    Ok(normalize_to_pm180(moon - sun - target_deg))
}

fn find_phase(jd_utc: f64, target_deg: f64, step: f64) -> Result<f64, CoreError> {
    let f = |t: f64| phase_offset(t, target_deg);
    let jd_tt = utc_to_tt_jd(jd_utc);
    let found = find_zero_crossing(&f, jd_tt, step, PHASE_MAX_STEPS, 60, PHASE_TOL_DAYS)?
        .ok_or(CoreError::NoConvergence("no lunar phase within scan range"))?;
    Ok(tt_to_utc_jd(found))
}

/// First new moon strictly after `jd_utc`.
pub fn next_new_moon(jd_utc: f64) -> Result<f64, CoreError> {
    find_phase(jd_utc, 0.0, PHASE_STEP_DAYS)
}

/// Most recent new moon before `jd_utc`.
pub fn prev_new_moon(jd_utc: f64) -> Result<f64, CoreError> {
    find_phase(jd_utc, 0.0, -PHASE_STEP_DAYS)
}

/// First full moon strictly after `jd_utc`.
pub fn next_full_moon(jd_utc: f64) -> Result<f64, CoreError> {
    find_phase(jd_utc, 180.0, PHASE_STEP_DAYS)
}

/// Most recent full moon before `jd_utc`.
pub fn prev_full_moon(jd_utc: f64) -> Result<f64, CoreError> {
    find_phase(jd_utc, 180.0, -PHASE_STEP_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchanga_time::calendar_to_jd;

    #[test]
    fn elongation_vanishes_at_new_moon() {
        let jd = calendar_to_jd(2024, 6, 1.0);
        let nm = next_new_moon(jd).unwrap();
        let off = phase_offset(utc_to_tt_jd(nm), 0.0).unwrap();
        assert!(off.abs() < 1e-3, "residual elongation {off}");
    }

    #[test]
    fn opposition_at_full_moon() {
        let jd = calendar_to_jd(2024, 6, 1.0);
        let fm = next_full_moon(jd).unwrap();
        let off = phase_offset(utc_to_tt_jd(fm), 180.0).unwrap();
        assert!(off.abs() < 1e-3, "residual offset {off}");
    }

    #[test]
    fn consecutive_new_moons_one_synodic_month_apart() {
        let jd = calendar_to_jd(2024, 3, 1.0);
        let nm1 = next_new_moon(jd).unwrap();
        let nm2 = next_new_moon(nm1 + 1.0).unwrap();
        let gap = nm2 - nm1;
        assert!(
            (29.2..29.9).contains(&gap),
            "synodic gap {gap} days"
        );
    }

    #[test]
    fn full_moon_between_new_moons() {
        let jd = calendar_to_jd(2024, 7, 1.0);
        let nm1 = next_new_moon(jd).unwrap();
        let fm = next_full_moon(nm1 + 1.0).unwrap();
        let nm2 = next_new_moon(nm1 + 1.0).unwrap();
        assert!(nm1 < fm && fm < nm2, "nm1 {nm1}, fm {fm}, nm2 {nm2}");
    }

    #[test]
    fn prev_inverts_next() {
        let jd = calendar_to_jd(2024, 5, 1.0);
        let nm = next_new_moon(jd).unwrap();
        let back = prev_new_moon(nm + 5.0).unwrap();
        assert!((back - nm).abs() < 1e-5, "next {nm}, prev {back}");
    }
}

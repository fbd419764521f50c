//! Anga evaluation and boundary search.
//!
//! The five limbs split into two families. Tithi and karana divide the
//! Moon-Sun elongation into fixed segments; nakshatra and yoga divide
//! sidereal longitudes the same way. All four advance monotonically, so
//! the next boundary is a single zero of `angle - target` and a coarse
//! scan plus bisection nails it to well under a second. Vaara is civil:
//! it rolls at local midnight and needs no ephemeris at all.
//!
//! A boundary instant itself already belongs to the following interval,
//! matching the floor-based classifiers.

use panchanga_ephem::{AyanamshaSystem, longitudes, sidereal_sun_moon};
use panchanga_time::{tt_to_utc_jd, utc_to_tt_jd, weekday_index};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::karana::{KARANA_SEGMENT_DEG, KaranaInfo, karana_from_elongation};
use crate::masa::amanta_masa_at;
use crate::nakshatra::{NAKSHATRA_SPAN, NakshatraInfo, nakshatra_from_longitude};
use crate::search::{find_zero_crossing, normalize_to_pm180};
use crate::tithi::{TITHI_SEGMENT_DEG, TithiInfo, tithi_from_elongation};
use crate::vaara::{Vaara, vaara_from_local_jd};
use crate::yoga::{YOGA_SPAN, YogaInfo, yoga_from_sum};

/// Bisection refinement cap for boundary searches.
const BOUNDARY_ITERATIONS: usize = 50;

/// Boundary time tolerance in days (~1 ms).
const BOUNDARY_TOL_DAYS: f64 = 1.0e-8;

/// The anga families a transition can belong to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum AngaKind {
    Tithi,
    Vaara,
    Nakshatra,
    Yoga,
    Karana,
    Masa,
}

impl AngaKind {
    pub const fn name(self) -> &'static str {
        match self {
            AngaKind::Tithi => "tithi",
            AngaKind::Vaara => "vaara",
            AngaKind::Nakshatra => "nakshatra",
            AngaKind::Yoga => "yoga",
            AngaKind::Karana => "karana",
            AngaKind::Masa => "masa",
        }
    }
}

/// Evaluation context: zodiac mode plus the observer's clock offset.
/// The offset only matters for vaara, which follows the local civil day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngaConfig {
    pub ayanamsha: AyanamshaSystem,
    pub utc_offset_hours: f64,
}

impl Default for AngaConfig {
    fn default() -> Self {
        Self {
            ayanamsha: AyanamshaSystem::default(),
            utc_offset_hours: 0.0,
        }
    }
}

/// One limb changing value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub kind: AngaKind,
    /// Index in force before the boundary.
    pub from_index: u8,
    /// Index in force from the boundary on.
    pub to_index: u8,
    /// Boundary instant, UTC Julian Day.
    pub jd_utc: f64,
}

/// All five limbs read at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngaSnapshot {
    pub tithi: TithiInfo,
    pub vaara: Vaara,
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
}

fn tropical_elongation(jd_tt: f64) -> Result<f64, CoreError> {
    let (sun, moon) = longitudes(jd_tt)?;
    Ok(moon - sun)
}

/// Tithi at a UTC instant.
pub fn tithi_at(jd_utc: f64) -> Result<TithiInfo, CoreError> {
    Ok(tithi_from_elongation(tropical_elongation(utc_to_tt_jd(
        jd_utc,
    ))?))
}

/// Karana at a UTC instant.
pub fn karana_at(jd_utc: f64) -> Result<KaranaInfo, CoreError> {
    Ok(karana_from_elongation(tropical_elongation(utc_to_tt_jd(
        jd_utc,
    ))?))
}

/// Nakshatra of the Moon at a UTC instant.
pub fn nakshatra_at(
    jd_utc: f64,
    system: AyanamshaSystem,
) -> Result<NakshatraInfo, CoreError> {
    let (_, moon) = sidereal_sun_moon(utc_to_tt_jd(jd_utc), system)?;
    Ok(nakshatra_from_longitude(moon))
}

/// Yoga at a UTC instant.
pub fn yoga_at(jd_utc: f64, system: AyanamshaSystem) -> Result<YogaInfo, CoreError> {
    let (sun, moon) = sidereal_sun_moon(utc_to_tt_jd(jd_utc), system)?;
    Ok(yoga_from_sum(sun + moon))
}

/// Vaara at a UTC instant for a given clock offset.
pub fn vaara_at(jd_utc: f64, utc_offset_hours: f64) -> Vaara {
    vaara_from_local_jd(jd_utc + utc_offset_hours / 24.0)
}

/// Read all five limbs with a single ephemeris evaluation.
pub fn anga_snapshot(jd_utc: f64, config: &AngaConfig) -> Result<AngaSnapshot, CoreError> {
    let (sun, moon) = sidereal_sun_moon(utc_to_tt_jd(jd_utc), config.ayanamsha)?;
    // The ayanamsha cancels in the difference, so the sidereal pair
    // serves the elongation-based limbs too.
    let elongation = moon - sun;
    Ok(AngaSnapshot {
        tithi: tithi_from_elongation(elongation),
        vaara: vaara_at(jd_utc, config.utc_offset_hours),
        nakshatra: nakshatra_from_longitude(moon),
        yoga: yoga_from_sum(sun + moon),
        karana: karana_from_elongation(elongation),
    })
}

/// Current index of any limb, on that limb's own scale.
pub fn anga_at(kind: AngaKind, jd_utc: f64, config: &AngaConfig) -> Result<u8, CoreError> {
    match kind {
        AngaKind::Tithi => Ok(tithi_at(jd_utc)?.tithi_index),
        AngaKind::Vaara => Ok(vaara_at(jd_utc, config.utc_offset_hours).index()),
        AngaKind::Nakshatra => Ok(nakshatra_at(jd_utc, config.ayanamsha)?.nakshatra_index),
        AngaKind::Yoga => Ok(yoga_at(jd_utc, config.ayanamsha)?.yoga_index),
        AngaKind::Karana => Ok(karana_at(jd_utc)?.karana_index),
        AngaKind::Masa => Ok(amanta_masa_at(jd_utc, config.ayanamsha)?.masa.index()),
    }
}

/// Locate the crossing of `angle` through the nearest segment edge in
/// the scan direction: the next multiple of `span_deg` when scanning
/// forward, the entry into the current segment when scanning backward.
/// Retries once over a doubled window before giving up.
fn segment_boundary<F>(
    angle: &F,
    jd_utc: f64,
    span_deg: f64,
    step_days: f64,
    max_steps: usize,
) -> Result<(u8, f64), CoreError>
where
    F: Fn(f64) -> Result<f64, CoreError>,
{
    let jd_tt = utc_to_tt_jd(jd_utc);
    let segments = (360.0 / span_deg).round() as u8;
    let current = ((angle(jd_tt)?.rem_euclid(360.0) / span_deg).floor() as u8).min(segments - 1);
    let target = if step_days > 0.0 {
        span_deg * (current as f64 + 1.0)
    } else {
        span_deg * current as f64
    };

    let offset = |t: f64| Ok(normalize_to_pm180(angle(t)?.rem_euclid(360.0) - target));
    let found = match find_zero_crossing(
        &offset,
        jd_tt,
        step_days,
        max_steps,
        BOUNDARY_ITERATIONS,
        BOUNDARY_TOL_DAYS,
    )? {
        Some(t) => t,
        None => find_zero_crossing(
            &offset,
            jd_tt,
            step_days,
            max_steps * 2,
            BOUNDARY_ITERATIONS,
            BOUNDARY_TOL_DAYS,
        )?
        .ok_or(CoreError::NoConvergence("anga boundary not bracketed"))?,
    };
    Ok((current, tt_to_utc_jd(found)))
}

fn next_vaara_transition(jd_utc: f64, utc_offset_hours: f64) -> Transition {
    let offset_days = utc_offset_hours / 24.0;
    let local = jd_utc + offset_days;
    // Civil midnights sit at half-integer Julian Days.
    let next_midnight_local = (local - 0.5).floor() + 1.5;
    let from = weekday_index(local);
    Transition {
        kind: AngaKind::Vaara,
        from_index: from,
        to_index: (from + 1) % 7,
        jd_utc: next_midnight_local - offset_days,
    }
}

/// Next change of the given limb strictly after `jd_utc`.
pub fn next_transition(
    kind: AngaKind,
    jd_utc: f64,
    config: &AngaConfig,
) -> Result<Transition, CoreError> {
    let system = config.ayanamsha;
    match kind {
        AngaKind::Tithi => {
            // Elongation gains 10.5-14.5 deg/day; a boundary is at most
            // ~1.2 days out.
            let (from, jd) =
                segment_boundary(&tropical_elongation, jd_utc, TITHI_SEGMENT_DEG, 0.25, 8)?;
            Ok(Transition {
                kind,
                from_index: from,
                to_index: (from + 1) % 30,
                jd_utc: jd,
            })
        }
        AngaKind::Karana => {
            let (from, jd) =
                segment_boundary(&tropical_elongation, jd_utc, KARANA_SEGMENT_DEG, 0.25, 4)?;
            Ok(Transition {
                kind,
                from_index: from,
                to_index: (from + 1) % 60,
                jd_utc: jd,
            })
        }
        AngaKind::Nakshatra => {
            let angle = move |t: f64| {
                let (_, moon) = sidereal_sun_moon(t, system)?;
                Ok(moon)
            };
            let (from, jd) = segment_boundary(&angle, jd_utc, NAKSHATRA_SPAN, 0.5, 5)?;
            Ok(Transition {
                kind,
                from_index: from,
                to_index: (from + 1) % 27,
                jd_utc: jd,
            })
        }
        AngaKind::Yoga => {
            let angle = move |t: f64| {
                let (sun, moon) = sidereal_sun_moon(t, system)?;
                Ok(sun + moon)
            };
            let (from, jd) = segment_boundary(&angle, jd_utc, YOGA_SPAN, 0.5, 5)?;
            Ok(Transition {
                kind,
                from_index: from,
                to_index: (from + 1) % 27,
                jd_utc: jd,
            })
        }
        AngaKind::Vaara => Ok(next_vaara_transition(jd_utc, config.utc_offset_hours)),
        AngaKind::Masa => {
            // A month ends at its closing new moon. Adhika months keep
            // the following month's name, so the successor index comes
            // from a fresh read past the boundary.
            let current = amanta_masa_at(jd_utc, system)?;
            let next = amanta_masa_at(current.end_jd + 1.0, system)?;
            Ok(Transition {
                kind,
                from_index: current.masa.index(),
                to_index: next.masa.index(),
                jd_utc: current.end_jd,
            })
        }
    }
}

/// Latest change of the given limb at or before `jd_utc`.
pub fn prev_transition(
    kind: AngaKind,
    jd_utc: f64,
    config: &AngaConfig,
) -> Result<Transition, CoreError> {
    let system = config.ayanamsha;
    match kind {
        AngaKind::Tithi => {
            let (current, jd) =
                segment_boundary(&tropical_elongation, jd_utc, TITHI_SEGMENT_DEG, -0.25, 8)?;
            Ok(Transition {
                kind,
                from_index: (current + 29) % 30,
                to_index: current,
                jd_utc: jd,
            })
        }
        AngaKind::Karana => {
            let (current, jd) =
                segment_boundary(&tropical_elongation, jd_utc, KARANA_SEGMENT_DEG, -0.25, 4)?;
            Ok(Transition {
                kind,
                from_index: (current + 59) % 60,
                to_index: current,
                jd_utc: jd,
            })
        }
        AngaKind::Nakshatra => {
            let angle = move |t: f64| {
                let (_, moon) = sidereal_sun_moon(t, system)?;
                Ok(moon)
            };
            let (current, jd) = segment_boundary(&angle, jd_utc, NAKSHATRA_SPAN, -0.5, 5)?;
            Ok(Transition {
                kind,
                from_index: (current + 26) % 27,
                to_index: current,
                jd_utc: jd,
            })
        }
        AngaKind::Yoga => {
            let angle = move |t: f64| {
                let (sun, moon) = sidereal_sun_moon(t, system)?;
                Ok(sun + moon)
            };
            let (current, jd) = segment_boundary(&angle, jd_utc, YOGA_SPAN, -0.5, 5)?;
            Ok(Transition {
                kind,
                from_index: (current + 26) % 27,
                to_index: current,
                jd_utc: jd,
            })
        }
        AngaKind::Vaara => {
            let offset_days = config.utc_offset_hours / 24.0;
            let local = jd_utc + offset_days;
            let last_midnight_local = (local - 0.5).floor() + 0.5;
            let to = weekday_index(local);
            Ok(Transition {
                kind,
                from_index: (to + 6) % 7,
                to_index: to,
                jd_utc: last_midnight_local - offset_days,
            })
        }
        AngaKind::Masa => {
            let current = amanta_masa_at(jd_utc, system)?;
            let before = amanta_masa_at(current.start_jd - 1.0, system)?;
            Ok(Transition {
                kind,
                from_index: before.masa.index(),
                to_index: current.masa.index(),
                jd_utc: current.start_jd,
            })
        }
    }
}

/// Advance applied after a found boundary when walking a window, in
/// days. Large against the boundary tolerance, small against any
/// segment duration.
pub(crate) const WINDOW_ADVANCE_DAYS: f64 = 1.0e-5;

/// All transitions of the five limbs in `[jd_start, jd_end)`, sorted by
/// time (ties break by limb). Month changes are visible through the
/// tithi rollover and are not reported separately.
pub fn transitions_in_window(
    jd_start: f64,
    jd_end: f64,
    config: &AngaConfig,
) -> Result<Vec<Transition>, CoreError> {
    let kinds = [
        AngaKind::Tithi,
        AngaKind::Vaara,
        AngaKind::Nakshatra,
        AngaKind::Yoga,
        AngaKind::Karana,
    ];

    let mut out = Vec::new();
    for kind in kinds {
        let mut cursor = jd_start;
        loop {
            let transition = next_transition(kind, cursor, config)?;
            if transition.jd_utc >= jd_end {
                break;
            }
            cursor = transition.jd_utc + WINDOW_ADVANCE_DAYS;
            out.push(transition);
        }
    }
    out.sort_by(|a, b| {
        a.jd_utc
            .total_cmp(&b.jd_utc)
            .then_with(|| a.kind.cmp(&b.kind))
    });
    Ok(out)
}

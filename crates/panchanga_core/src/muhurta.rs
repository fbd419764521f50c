//! Daily muhurta windows.
//!
//! Rahu kala, yamaganda, and gulika are fixed eighths of the daylight
//! arc chosen by weekday. Abhijit is the eighth fifteenth of daylight,
//! straddling apparent noon. Varjyam is tied to the nakshatra instead:
//! each nakshatra carries a traditional start ghati, and the window
//! lasts four ghatis of that nakshatra's own duration (a ghati here is
//! one sixtieth of the nakshatra, not of the civil day).

use panchanga_ephem::AyanamshaSystem;
use serde::{Deserialize, Serialize};

use crate::anga::{AngaConfig, AngaKind, WINDOW_ADVANCE_DAYS, next_transition, prev_transition};
use crate::error::CoreError;
use crate::vaara::Vaara;

/// Rahu kala daylight-eighth by weekday, Sunday first.
const RAHU_SEGMENT: [usize; 7] = [7, 1, 6, 4, 5, 3, 2];

/// Yamaganda daylight-eighth by weekday, Sunday first.
const YAMAGANDA_SEGMENT: [usize; 7] = [4, 3, 2, 1, 0, 6, 5];

/// Gulika daylight-eighth by weekday, Sunday first.
const GULIKA_SEGMENT: [usize; 7] = [6, 5, 4, 3, 2, 1, 0];

/// Varjyam start ghati within each nakshatra, Ashwini first.
const VARJYAM_START_GHATI: [f64; 27] = [
    50.0, 24.0, 30.0, 40.0, 14.0, 21.0, 30.0, 20.0, 32.0, 30.0, 20.0, 18.0, 21.0, 20.0,
    14.0, 14.0, 10.0, 14.0, 20.0, 24.0, 20.0, 10.0, 10.0, 18.0, 16.0, 24.0, 30.0,
];

/// Varjyam length in ghatis.
const VARJYAM_GHATIS: f64 = 4.0;

/// A muhurta span in UTC Julian Days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MuhurtaWindow {
    pub start_jd: f64,
    pub end_jd: f64,
}

impl MuhurtaWindow {
    /// Length in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Whether the span intersects `[start, end)`.
    pub fn overlaps(&self, start_jd: f64, end_jd: f64) -> bool {
        self.start_jd < end_jd && self.end_jd > start_jd
    }
}

fn daylight_eighth(sunrise_jd: f64, sunset_jd: f64, segment: usize) -> MuhurtaWindow {
    let eighth = (sunset_jd - sunrise_jd) / 8.0;
    let start_jd = sunrise_jd + segment as f64 * eighth;
    MuhurtaWindow {
        start_jd,
        end_jd: start_jd + eighth,
    }
}

/// Rahu kala for the day.
pub fn rahu_kala(sunrise_jd: f64, sunset_jd: f64, vaara: Vaara) -> MuhurtaWindow {
    daylight_eighth(sunrise_jd, sunset_jd, RAHU_SEGMENT[vaara.index() as usize])
}

/// Yamaganda kala for the day.
pub fn yamaganda_kala(sunrise_jd: f64, sunset_jd: f64, vaara: Vaara) -> MuhurtaWindow {
    daylight_eighth(sunrise_jd, sunset_jd, YAMAGANDA_SEGMENT[vaara.index() as usize])
}

/// Gulika kala for the day.
pub fn gulika_kala(sunrise_jd: f64, sunset_jd: f64, vaara: Vaara) -> MuhurtaWindow {
    daylight_eighth(sunrise_jd, sunset_jd, GULIKA_SEGMENT[vaara.index() as usize])
}

/// Abhijit muhurta: the eighth of fifteen daylight parts.
pub fn abhijit_muhurta(sunrise_jd: f64, sunset_jd: f64) -> MuhurtaWindow {
    let fifteenth = (sunset_jd - sunrise_jd) / 15.0;
    let start_jd = sunrise_jd + 7.0 * fifteenth;
    MuhurtaWindow {
        start_jd,
        end_jd: start_jd + fifteenth,
    }
}

/// Varjyam spans overlapping `[window_start, window_end)`, in order.
///
/// Every nakshatra touching the window contributes one candidate; the
/// returned spans are unclipped, so one may begin before the window or
/// run past its end.
pub fn varjyam_windows(
    window_start_jd: f64,
    window_end_jd: f64,
    system: AyanamshaSystem,
) -> Result<Vec<MuhurtaWindow>, CoreError> {
    let config = AngaConfig {
        ayanamsha: system,
        utc_offset_hours: 0.0,
    };

    let mut out = Vec::new();
    let mut cursor = window_start_jd;
    loop {
        let entry = prev_transition(AngaKind::Nakshatra, cursor, &config)?;
        let exit = next_transition(AngaKind::Nakshatra, cursor, &config)?;
        let duration = exit.jd_utc - entry.jd_utc;
        let ghati = duration / 60.0;
        let start_jd = entry.jd_utc + VARJYAM_START_GHATI[entry.to_index as usize] * ghati;
        let window = MuhurtaWindow {
            start_jd,
            end_jd: start_jd + VARJYAM_GHATIS * ghati,
        };
        if window.overlaps(window_start_jd, window_end_jd) {
            out.push(window);
        }
        if exit.jd_utc >= window_end_jd {
            break;
        }
        cursor = exit.jd_utc + WINDOW_ADVANCE_DAYS;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    // A 06:00-18:00 day makes the classic wall-clock table exact.
    const SUNRISE: f64 = 2_460_310.75;
    const SUNSET: f64 = 2_460_311.25;

    fn hours_after_sunrise(w: MuhurtaWindow) -> (f64, f64) {
        (
            (w.start_jd - SUNRISE) * 24.0,
            (w.end_jd - SUNRISE) * 24.0,
        )
    }

    /// Monday rahu kala is the second eighth: 07:30-09:00 for a
    /// 06:00-18:00 day.
    #[test]
    fn monday_rahu_kala() {
        let (start, end) = hours_after_sunrise(rahu_kala(SUNRISE, SUNSET, Vaara::Somavara));
        assert!((start - 1.5).abs() < 1e-9, "start {start}");
        assert!((end - 3.0).abs() < 1e-9, "end {end}");
    }

    /// Sunday rahu kala is the last eighth before sunset.
    #[test]
    fn sunday_rahu_kala_ends_at_sunset() {
        let w = rahu_kala(SUNRISE, SUNSET, Vaara::Ravivara);
        assert!((w.end_jd - SUNSET).abs() < 1e-9);
    }

    #[test]
    fn monday_yamaganda_and_gulika() {
        let (y_start, _) = hours_after_sunrise(yamaganda_kala(SUNRISE, SUNSET, Vaara::Somavara));
        assert!((y_start - 4.5).abs() < 1e-9, "yamaganda start {y_start}");
        let (g_start, _) = hours_after_sunrise(gulika_kala(SUNRISE, SUNSET, Vaara::Somavara));
        assert!((g_start - 7.5).abs() < 1e-9, "gulika start {g_start}");
    }

    /// Thursday yamaganda opens the day at sunrise.
    #[test]
    fn thursday_yamaganda_starts_at_sunrise() {
        let w = yamaganda_kala(SUNRISE, SUNSET, Vaara::Guruvara);
        assert!((w.start_jd - SUNRISE).abs() < 1e-9);
    }

    #[test]
    fn abhijit_straddles_midday() {
        let (start, end) = hours_after_sunrise(abhijit_muhurta(SUNRISE, SUNSET));
        // 11:36 to 12:24 on the clock.
        assert!((start - 5.6).abs() < 1e-9, "start {start}");
        assert!((end - 6.4).abs() < 1e-9, "end {end}");
    }

    #[test]
    fn eighths_tile_the_daylight() {
        for vaara in Vaara::all() {
            let w = rahu_kala(SUNRISE, SUNSET, *vaara);
            assert!(w.start_jd >= SUNRISE - 1e-12);
            assert!(w.end_jd <= SUNSET + 1e-12);
            assert!((w.duration_days() - (SUNSET - SUNRISE) / 8.0).abs() < 1e-12);
        }
    }

    #[test]
    fn overlap_predicate() {
        let w = MuhurtaWindow {
            start_jd: 10.0,
            end_jd: 11.0,
        };
        assert!(w.overlaps(10.5, 12.0));
        assert!(w.overlaps(9.0, 10.1));
        assert!(!w.overlaps(11.0, 12.0));
        assert!(!w.overlaps(8.0, 10.0));
    }

    #[test]
    fn varjyam_spans_follow_the_nakshatra() {
        let day_start = 2_460_310.75;
        let day_end = day_start + 1.0;
        let windows =
            varjyam_windows(day_start, day_end, AyanamshaSystem::Lahiri).unwrap();
        // The Moon crosses at most two nakshatra boundaries per day.
        assert!(windows.len() <= 3, "got {}", windows.len());
        for w in &windows {
            assert!(w.overlaps(day_start, day_end));
            // Four ghatis of a 0.9-1.2 day nakshatra.
            let d = w.duration_days();
            assert!((0.05..0.09).contains(&d), "duration {d}");
        }
        for pair in windows.windows(2) {
            assert!(pair[0].start_jd < pair[1].start_jd);
        }
    }
}

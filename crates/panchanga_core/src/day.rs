//! Day descriptor assembly.
//!
//! A panchanga day opens at local sunrise and closes at the next one.
//! Dates without a sunrise fall back to the local civil day so polar
//! callers still get a well-formed window; the muhurta block is omitted
//! there since the daylight arc it divides does not exist.
//!
//! Assembly touches no shared state, so days can be built in parallel
//! and the results cached by (date, location).

use panchanga_time::CivilDate;

use crate::anga::{AngaConfig, anga_snapshot, transitions_in_window};
use crate::day_types::{DayBoundary, DayConfig, DayDescriptor, DayMuhurta};
use crate::error::CoreError;
use crate::location::Location;
use crate::masa::{amanta_masa_at, purnimanta_masa_at};
use crate::muhurta::{abhijit_muhurta, gulika_kala, rahu_kala, varjyam_windows, yamaganda_kala};
use crate::riseset::sun_times;
use crate::riseset_types::RiseSetResult;

/// Build the full descriptor for one civil day.
pub fn build_day_descriptor(
    location: &Location,
    date: CivilDate,
    config: &DayConfig,
) -> Result<DayDescriptor, CoreError> {
    location.validate().map_err(CoreError::InvalidLocation)?;
    let anga_config = AngaConfig {
        ayanamsha: config.ayanamsha,
        utc_offset_hours: location.utc_offset_hours,
    };
    let local_midnight =
        |d: CivilDate| d.jd_midnight() - location.utc_offset_hours / 24.0;

    let today = sun_times(location, date, &config.rise_set)?;
    let tomorrow = sun_times(location, date.next_day(), &config.rise_set)?;

    let sunrise_jd = today.sunrise.event_jd();
    let sunset_jd = today.sunset.event_jd();

    let (boundary, window_start_jd, window_end_jd) = match (sunrise_jd, tomorrow.sunrise.event_jd())
    {
        (Some(rise), Some(next_rise)) => (DayBoundary::Sunrise, rise, next_rise),
        // Last lit day before polar night: close at the civil day end.
        (Some(rise), None) => (
            DayBoundary::Sunrise,
            rise,
            local_midnight(date.next_day()),
        ),
        (None, _) => {
            let midnight_sun = matches!(today.sunrise, RiseSetResult::NeverSets);
            (
                DayBoundary::MidnightFallback { midnight_sun },
                local_midnight(date),
                local_midnight(date.next_day()),
            )
        }
    };

    let at_sunrise = anga_snapshot(window_start_jd, &anga_config)?;
    let amanta_masa = amanta_masa_at(window_start_jd, config.ayanamsha)?;
    let purnimanta_masa = purnimanta_masa_at(window_start_jd, config.ayanamsha)?;
    let transitions = transitions_in_window(window_start_jd, window_end_jd, &anga_config)?;

    let muhurta = match (sunrise_jd, sunset_jd) {
        (Some(rise), Some(set)) => Some(DayMuhurta {
            rahu_kala: rahu_kala(rise, set, at_sunrise.vaara),
            yamaganda_kala: yamaganda_kala(rise, set, at_sunrise.vaara),
            gulika_kala: gulika_kala(rise, set, at_sunrise.vaara),
            abhijit: abhijit_muhurta(rise, set),
            varjyam: varjyam_windows(window_start_jd, window_end_jd, config.ayanamsha)?,
        }),
        _ => None,
    };

    Ok(DayDescriptor {
        date,
        location: *location,
        boundary,
        window_start_jd,
        window_end_jd,
        sunrise_jd,
        sunset_jd,
        at_sunrise,
        amanta_masa,
        purnimanta_masa,
        transitions,
        muhurta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delhi() -> Location {
        Location::new(28.6139, 77.209, 216.0, 5.5)
    }

    fn tromso() -> Location {
        Location::new(69.6492, 18.9553, 10.0, 1.0)
    }

    #[test]
    fn normal_day_window_spans_about_a_day() {
        let date = CivilDate::new(2024, 3, 20).unwrap();
        let day = build_day_descriptor(&delhi(), date, &DayConfig::default()).unwrap();

        assert_eq!(day.boundary, DayBoundary::Sunrise);
        let rise = day.sunrise_jd.unwrap();
        let set = day.sunset_jd.unwrap();
        assert_eq!(day.window_start_jd, rise);
        assert!(rise < set && set < day.window_end_jd);
        assert!(
            (day.window_days() - 1.0).abs() < 0.01,
            "window {} days",
            day.window_days()
        );

        let m = day.muhurta.as_ref().unwrap();
        assert!(m.rahu_kala.start_jd >= rise && m.rahu_kala.end_jd <= set);
        assert!(m.abhijit.start_jd > rise && m.abhijit.end_jd < set);

        for pair in day.transitions.windows(2) {
            assert!(pair[0].jd_utc <= pair[1].jd_utc);
        }
        for tr in &day.transitions {
            assert!(tr.jd_utc >= day.window_start_jd);
            assert!(tr.jd_utc < day.window_end_jd);
        }
    }

    #[test]
    fn polar_night_uses_midnight_fallback() {
        let date = CivilDate::new(2024, 12, 21).unwrap();
        let day = build_day_descriptor(&tromso(), date, &DayConfig::default()).unwrap();

        assert_eq!(
            day.boundary,
            DayBoundary::MidnightFallback {
                midnight_sun: false
            }
        );
        assert_eq!(day.sunrise_jd, None);
        assert!(day.muhurta.is_none());
        // Local midnight to local midnight, exactly one civil day.
        assert!((day.window_days() - 1.0).abs() < 1e-9);
        let expected_start = date.jd_midnight() - 1.0 / 24.0;
        assert!((day.window_start_jd - expected_start).abs() < 1e-9);
    }

    #[test]
    fn midnight_sun_is_flagged() {
        let date = CivilDate::new(2024, 6, 21).unwrap();
        let day = build_day_descriptor(&tromso(), date, &DayConfig::default()).unwrap();
        assert_eq!(
            day.boundary,
            DayBoundary::MidnightFallback { midnight_sun: true }
        );
        assert!(day.muhurta.is_none());
    }

    #[test]
    fn invalid_location_is_rejected() {
        let bad = Location::new(95.0, 77.2, 0.0, 5.5);
        let date = CivilDate::new(2024, 3, 20).unwrap();
        let err = build_day_descriptor(&bad, date, &DayConfig::default()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidLocation(_)), "{err:?}");
    }

    #[test]
    fn sunrise_snapshot_matches_window_start() {
        let date = CivilDate::new(2024, 10, 31).unwrap();
        let day = build_day_descriptor(&delhi(), date, &DayConfig::default()).unwrap();
        // Diwali eve: amanta Ashvina, purnimanta Kartika.
        assert_eq!(day.amanta_masa.masa.index(), 6);
        assert_eq!(day.purnimanta_masa.masa.index(), 7);
        assert_eq!(
            day.at_sunrise.vaara,
            crate::vaara::Vaara::Guruvara,
            "2024-10-31 is a Thursday"
        );
    }
}

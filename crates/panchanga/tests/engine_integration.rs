//! Integration tests for the engine facade: caching, invalidation, and
//! festival queries end to end.

use std::sync::Arc;

use panchanga::*;

fn delhi() -> Location {
    Location::new(28.6139, 77.209, 216.0, 5.5)
}

fn mumbai() -> Location {
    Location::new(19.076, 72.8777, 14.0, 5.5)
}

fn date(y: i32, m: u32, d: u32) -> CivilDate {
    CivilDate::new(y, m, d).unwrap()
}

fn engine() -> Panchanga {
    Panchanga::new(PanchangaConfig::default()).unwrap()
}

#[test]
fn engine_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Panchanga>();
}

#[test]
fn repeat_lookup_hits_the_cache() {
    let engine = engine();
    let first = engine.day_descriptor(date(2024, 11, 1), &delhi()).unwrap();
    let second = engine.day_descriptor(date(2024, 11, 1), &delhi()).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(engine.cached_days(), 1);
}

#[test]
fn jittered_coordinates_hit_the_same_entry() {
    let engine = engine();
    let a = engine
        .day_descriptor(date(2024, 11, 1), &Location::new(28.612, 77.203, 216.0, 5.5))
        .unwrap();
    let b = engine
        .day_descriptor(date(2024, 11, 1), &Location::new(28.608, 77.197, 240.0, 5.5))
        .unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(engine.cached_days(), 1);
}

#[test]
fn rebuild_is_bit_identical() {
    let a = engine().day_descriptor(date(2024, 7, 9), &delhi()).unwrap();
    let b = engine().day_descriptor(date(2024, 7, 9), &delhi()).unwrap();
    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(*a, *b);
}

#[test]
fn capacity_bounds_the_cache() {
    let config = PanchangaConfig {
        cache_capacity: 2,
        ..PanchangaConfig::default()
    };
    let engine = Panchanga::new(config).unwrap();
    let d1 = engine.day_descriptor(date(2024, 3, 1), &delhi()).unwrap();
    let d2 = engine.day_descriptor(date(2024, 3, 2), &delhi()).unwrap();
    // Touch day 1 so day 2 becomes the eviction victim.
    engine.day_descriptor(date(2024, 3, 1), &delhi()).unwrap();
    engine.day_descriptor(date(2024, 3, 3), &delhi()).unwrap();
    assert_eq!(engine.cached_days(), 2);

    // Day 1 survived eviction.
    let d1_again = engine.day_descriptor(date(2024, 3, 1), &delhi()).unwrap();
    assert!(Arc::ptr_eq(&d1, &d1_again));

    // Day 2 was evicted, so its next lookup is a rebuild.
    let d2_again = engine.day_descriptor(date(2024, 3, 2), &delhi()).unwrap();
    assert!(!Arc::ptr_eq(&d2, &d2_again));
}

#[test]
fn invalidation_keeps_only_the_named_place() {
    let engine = engine();
    let delhi_day = engine.day_descriptor(date(2024, 11, 1), &delhi()).unwrap();
    let mumbai_day = engine.day_descriptor(date(2024, 11, 1), &mumbai()).unwrap();
    assert_eq!(engine.cached_days(), 2);

    engine.invalidate_location(&delhi());
    assert_eq!(engine.cached_days(), 1);

    let delhi_again = engine.day_descriptor(date(2024, 11, 1), &delhi()).unwrap();
    assert!(Arc::ptr_eq(&delhi_day, &delhi_again));

    let mumbai_again = engine.day_descriptor(date(2024, 11, 1), &mumbai()).unwrap();
    assert!(!Arc::ptr_eq(&mumbai_day, &mumbai_again));
}

#[test]
fn out_of_range_date_reports_ephemeris_error() {
    let engine = engine();
    let err = engine.day_descriptor(date(1500, 1, 1), &delhi()).unwrap_err();
    assert!(matches!(err, PanchangaError::Core(CoreError::Ephemeris(_))));
    assert_eq!(engine.cached_days(), 0);
}

#[test]
fn polar_fallback_flows_through_the_facade() {
    let engine = engine();
    let tromso = Location::new(69.6492, 18.9553, 10.0, 1.0);
    let day = engine.day_descriptor(date(2024, 12, 21), &tromso).unwrap();
    assert!(matches!(
        day.boundary,
        DayBoundary::MidnightFallback { midnight_sun: false }
    ));
    assert!(day.sunrise_jd.is_none());
}

#[test]
fn diwali_week_festivals_via_the_engine() {
    let engine = engine();
    let occurrences = engine
        .festivals(date(2024, 10, 30), date(2024, 11, 3), &delhi())
        .unwrap();
    let diwali = occurrences.iter().find(|o| o.rule_id == "diwali").unwrap();
    assert_eq!(diwali.date, date(2024, 11, 1));
    assert!(!diwali.skipped);
    assert_eq!(engine.cached_days(), 5);

    // The same query again is served from cache and agrees.
    let again = engine
        .festivals(date(2024, 10, 30), date(2024, 11, 3), &delhi())
        .unwrap();
    assert_eq!(occurrences, again);
}

#[test]
fn threads_share_one_engine() {
    let engine = Arc::new(engine());
    let mut handles = Vec::new();
    for day in 1u32..=3 {
        let engine = Arc::clone(&engine);
        handles.push(std::thread::spawn(move || {
            engine.day_descriptor(date(2024, 11, day), &delhi()).unwrap()
        }));
    }
    for handle in handles {
        let descriptor = handle.join().unwrap();
        assert!(matches!(descriptor.boundary, DayBoundary::Sunrise));
    }
    assert_eq!(engine.cached_days(), 3);
}

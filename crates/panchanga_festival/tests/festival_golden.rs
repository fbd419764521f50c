//! Festival dates for 2024, resolved with the full engine at Delhi
//! (Lahiri ayanamsha) and checked against published almanac listings.

use panchanga_core::{DayConfig, DayDescriptor, Location, build_day_descriptor};
use panchanga_festival::{
    FESTIVALS, FestivalRule, Observance, RuleKind, resolve, resolve_festivals, rule_by_id,
};
use panchanga_time::CivilDate;

fn delhi() -> Location {
    Location::new(28.6139, 77.209, 216.0, 5.5)
}

fn window(start: CivilDate, len: u32) -> Vec<DayDescriptor> {
    let config = DayConfig::default();
    let mut days = Vec::new();
    let mut date = start;
    for _ in 0..len {
        days.push(build_day_descriptor(&delhi(), date, &config).unwrap());
        date = date.next_day();
    }
    days
}

fn date(year: i32, month: u32, day: u32) -> CivilDate {
    CivilDate::new(year, month, day).unwrap()
}

/// Diwali and Govardhana Puja land on November 1 and 2, 2024.
#[test]
fn diwali_week_2024() {
    let days = window(date(2024, 10, 30), 5);
    let got = resolve_festivals(&days, &FESTIVALS, &DayConfig::default()).unwrap();

    let diwali: Vec<_> = got.iter().filter(|o| o.rule_id == "diwali").collect();
    assert_eq!(diwali.len(), 1);
    assert_eq!(diwali[0].date, date(2024, 11, 1));
    assert!(!diwali[0].skipped);
    assert!(!diwali[0].extended);

    let govardhana: Vec<_> = got.iter().filter(|o| o.rule_id == "govardhana_puja").collect();
    assert_eq!(govardhana.len(), 1);
    assert_eq!(govardhana[0].date, date(2024, 11, 2));
}

/// Karva Chauth 2024: the Kartika Krishna Chaturthi began after the
/// October 20 sunrise and ended before the next one, so the day is a
/// real skipped-tithi case.
#[test]
fn karva_chauth_2024_is_skipped() {
    let days = window(date(2024, 10, 18), 5);
    let rule = rule_by_id("karva_chauth").unwrap();
    let got = resolve(rule, &days, &DayConfig::default()).unwrap();

    assert_eq!(got.len(), 1);
    assert_eq!(got[0].date, date(2024, 10, 20));
    assert!(got[0].skipped);
    assert!(!got[0].extended);
}

/// Makar Sankranti 2024: the Sun entered sidereal Makara in the small
/// hours of January 15 IST, well before that day's sunset.
#[test]
fn makar_sankranti_2024() {
    let days = window(date(2024, 1, 13), 4);
    let rule = rule_by_id("makar_sankranti").unwrap();
    let got = resolve(rule, &days, &DayConfig::default()).unwrap();

    assert_eq!(got.len(), 1);
    assert_eq!(got[0].date, date(2024, 1, 15));
    assert!(!got[0].skipped);
}

/// The Mesha crossing of April 13, 2024 fell after sunset, pushing the
/// solar new year to April 14.
#[test]
fn mesha_sankranti_2024_shifts_past_sunset() {
    let days = window(date(2024, 4, 12), 4);
    let rule = FestivalRule {
        id: "mesha_sankranti",
        name: "Mesha Sankranti",
        kind: RuleKind::Solar { longitude_deg: 0.0 },
        observance: Observance::FirstDay,
        description: "Solar new year.",
    };
    let got = resolve(&rule, &days, &DayConfig::default()).unwrap();

    assert_eq!(got.len(), 1);
    assert_eq!(got[0].date, date(2024, 4, 14));
}

/// Ganesh Chaturthi 2024 on September 7.
#[test]
fn ganesh_chaturthi_2024() {
    let days = window(date(2024, 9, 5), 4);
    let rule = rule_by_id("ganesh_chaturthi").unwrap();
    let got = resolve(rule, &days, &DayConfig::default()).unwrap();

    assert_eq!(got.len(), 1);
    assert_eq!(got[0].date, date(2024, 9, 7));
    assert!(!got[0].skipped);
}

/// Raksha Bandhan 2024 on August 19, via the full catalog.
#[test]
fn raksha_bandhan_2024() {
    let days = window(date(2024, 8, 17), 4);
    let got = resolve_festivals(&days, &FESTIVALS, &DayConfig::default()).unwrap();

    let rakhi: Vec<_> = got.iter().filter(|o| o.rule_id == "raksha_bandhan").collect();
    assert_eq!(rakhi.len(), 1);
    assert_eq!(rakhi[0].date, date(2024, 8, 19));

    // Occurrences come out date-ordered.
    for pair in got.windows(2) {
        assert!(pair[0].date <= pair[1].date);
    }
}

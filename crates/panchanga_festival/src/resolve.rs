//! Rule evaluation over a window of day descriptors.
//!
//! Lunar rules read only the descriptors: the sunrise-prevailing tithi
//! decides presence, and the recorded transition sequence decides the
//! skipped and end-day cases. Solar rules search the Sun's sidereal
//! longitude directly and apply the sunset cutoff.

use panchanga_core::{
    ALL_MASAS, AngaKind, CoreError, DayConfig, DayDescriptor, Masa, find_zero_crossing,
    normalize_to_pm180, sun_times,
};
use panchanga_ephem::{AyanamshaSystem, sidereal_sun_moon};
use panchanga_time::{CivilDate, tt_to_utc_jd, utc_to_tt_jd};

use crate::error::FestivalError;
use crate::rules::{FestivalOccurrence, FestivalRule, Observance, RuleKind};

/// Scan step for sankranti searches. The Sun spends about a month in
/// each rashi, so a five day step cannot alias past a crossing.
const SANKRANTI_STEP_DAYS: f64 = 5.0;
const SANKRANTI_ITERATIONS: usize = 60;
const SANKRANTI_TOL_DAYS: f64 = 1.0e-7;

/// Resolve a single rule over a window of day descriptors.
pub fn resolve(
    rule: &FestivalRule,
    days: &[DayDescriptor],
    config: &DayConfig,
) -> Result<Vec<FestivalOccurrence>, FestivalError> {
    resolve_festivals(days, std::slice::from_ref(rule), config)
}

/// Resolve every rule over a window of day descriptors built with
/// `config`.
///
/// Descriptors must run in date order and share one location; the
/// window should start at or before the first date of interest so that
/// second-day and skipped cases have their context.
pub fn resolve_festivals(
    days: &[DayDescriptor],
    rules: &[FestivalRule],
    config: &DayConfig,
) -> Result<Vec<FestivalOccurrence>, FestivalError> {
    let first = match days.first() {
        Some(first) => first,
        None => return Ok(Vec::new()),
    };
    if days.iter().any(|d| d.location != first.location) {
        return Err(FestivalError::MixedLocations);
    }

    let mut out = resolve_lunar(days, rules);
    for rule in rules {
        out.extend(solar_occurrences(days, rule, config)?);
    }
    sort_occurrences(&mut out);
    Ok(out)
}

/// Resolve the lunar rules only. Pure over the descriptors; solar
/// rules contribute nothing here.
pub fn resolve_lunar(days: &[DayDescriptor], rules: &[FestivalRule]) -> Vec<FestivalOccurrence> {
    let mut out: Vec<_> = rules
        .iter()
        .flat_map(|rule| lunar_occurrences(days, rule))
        .collect();
    sort_occurrences(&mut out);
    out
}

fn sort_occurrences(out: &mut [FestivalOccurrence]) {
    out.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(b.name)));
}

fn month_matches(day: &DayDescriptor, want: Option<Masa>) -> bool {
    match want {
        Some(masa) => day.purnimanta_masa.masa == masa && !day.purnimanta_masa.adhika,
        None => true,
    }
}

fn prevails(day: &DayDescriptor, target: u8) -> bool {
    day.at_sunrise.tithi.tithi_index == target
}

/// When the target tithi began and ended wholly inside this day's
/// window, the instant it began.
fn skipped_span_start(day: &DayDescriptor, target: u8) -> Option<f64> {
    let entered = day
        .transitions
        .iter()
        .find(|t| t.kind == AngaKind::Tithi && t.to_index == target)?;
    day.transitions.iter().find(|t| {
        t.kind == AngaKind::Tithi && t.from_index == target && t.jd_utc > entered.jd_utc
    })?;
    Some(entered.jd_utc)
}

/// Purnimanta month in force at an instant inside the day's window.
/// A month rollover after sunrise bumps the sunrise month by one.
fn month_at(day: &DayDescriptor, jd_utc: f64) -> Masa {
    if jd_utc >= day.purnimanta_masa.end_jd {
        ALL_MASAS[(day.purnimanta_masa.masa.index() as usize + 1) % 12]
    } else {
        day.purnimanta_masa.masa
    }
}

/// The civil date whose window contains the tithi's end. The end lies
/// in the presence day's window or the one after it.
fn end_day(days: &[DayDescriptor], i: usize, target: u8) -> CivilDate {
    for day in days.iter().skip(i).take(2) {
        if day
            .transitions
            .iter()
            .any(|t| t.kind == AngaKind::Tithi && t.from_index == target)
        {
            return day.date;
        }
    }
    days[i].date
}

fn lunar_occurrences(days: &[DayDescriptor], rule: &FestivalRule) -> Vec<FestivalOccurrence> {
    let (tithi, masa) = match rule.kind {
        RuleKind::Lunar { tithi, masa } => (tithi, masa),
        RuleKind::Solar { .. } => return Vec::new(),
    };
    let target = tithi.index();

    let mut out = Vec::new();
    let mut i = 0;
    while i < days.len() {
        let day = &days[i];
        if prevails(day, target) && month_matches(day, masa) {
            let extended = days
                .get(i + 1)
                .is_some_and(|d| prevails(d, target) && month_matches(d, masa));
            let date = match rule.observance {
                Observance::FirstDay => day.date,
                Observance::SecondDay if extended => days[i + 1].date,
                Observance::SecondDay => day.date,
                Observance::EndDay => end_day(days, i, target),
            };
            out.push(FestivalOccurrence {
                rule_id: rule.id,
                name: rule.name,
                date,
                skipped: false,
                extended,
            });
            i += if extended { 2 } else { 1 };
            continue;
        }
        if let Some(start) = skipped_span_start(day, target) {
            let month_ok = match masa {
                Some(want) => month_at(day, start) == want && !day.purnimanta_masa.adhika,
                None => true,
            };
            if month_ok {
                out.push(FestivalOccurrence {
                    rule_id: rule.id,
                    name: rule.name,
                    date: day.date,
                    skipped: true,
                    extended: false,
                });
            }
        }
        i += 1;
    }
    out
}

/// Find the Sun's next sidereal crossing of `longitude_deg` at or
/// after `start_jd_utc`.
fn sun_crossing(
    start_jd_utc: f64,
    span_days: f64,
    longitude_deg: f64,
    system: AyanamshaSystem,
) -> Result<Option<f64>, CoreError> {
    let offset = |jd_tt: f64| -> Result<f64, CoreError> {
        let (sun, _) = sidereal_sun_moon(jd_tt, system)?;
        Ok(normalize_to_pm180(sun - longitude_deg))
    };
    let max_steps = (span_days / SANKRANTI_STEP_DAYS).ceil() as usize + 1;
    let found = find_zero_crossing(
        &offset,
        utc_to_tt_jd(start_jd_utc),
        SANKRANTI_STEP_DAYS,
        max_steps,
        SANKRANTI_ITERATIONS,
        SANKRANTI_TOL_DAYS,
    )?;
    Ok(found.map(tt_to_utc_jd))
}

/// Sankranti occurrences inside the window. The festival keeps the
/// crossing's local civil day when the moment precedes that day's
/// sunset and moves to the next day otherwise; polar days without a
/// sunset keep the crossing day.
fn solar_occurrences(
    days: &[DayDescriptor],
    rule: &FestivalRule,
    config: &DayConfig,
) -> Result<Vec<FestivalOccurrence>, FestivalError> {
    let longitude_deg = match rule.kind {
        RuleKind::Solar { longitude_deg } => longitude_deg,
        RuleKind::Lunar { .. } => return Ok(Vec::new()),
    };
    let location = &days[0].location;
    let first_date = days[0].date;
    let last_date = days[days.len() - 1].date;

    // Start two days early: a crossing on the eve of the window can
    // shift into it through the sunset rule.
    let mut cursor = days[0].window_start_jd - 2.0;
    let scan_end = days[days.len() - 1].window_end_jd + 1.0;

    let mut out = Vec::new();
    while cursor < scan_end {
        let crossing =
            match sun_crossing(cursor, scan_end - cursor, longitude_deg, config.ayanamsha)? {
                Some(crossing) => crossing,
                None => break,
            };
        let local_date = CivilDate::from_jd(crossing + location.utc_offset_hours / 24.0);
        let times = sun_times(location, local_date, &config.rise_set)?;
        let observed = match times.sunset.event_jd() {
            Some(sunset) if crossing > sunset => local_date.next_day(),
            _ => local_date,
        };
        if observed >= first_date && observed <= last_date {
            out.push(FestivalOccurrence {
                rule_id: rule.id,
                name: rule.name,
                date: observed,
                skipped: false,
                extended: false,
            });
        }
        // The Sun returns to this longitude about a year later.
        cursor = crossing + 300.0;
    }
    Ok(out)
}

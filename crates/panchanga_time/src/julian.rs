//! Gregorian calendar ↔ Julian Day conversions.
//!
//! Standard Fliegel/Meeus arithmetic. A Julian Day begins at 12:00, so a
//! calendar midnight always lands on a half-integer JD. `day_frac` carries
//! the time of day: `15.0` is 0h on the 15th, `15.5` is 12h.

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// First JD of the Gregorian calendar (1582-10-15 0h).
const GREGORIAN_START_JD: f64 = 2_299_160.5;

/// Convert a calendar date to a Julian Day.
///
/// Dates on or after 1582-10-15 are treated as Gregorian, earlier dates as
/// Julian-calendar (the historical convention; the engine's validity window
/// starts well after the reform, so in practice only the Gregorian branch
/// runs).
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let yf = y as f64;

    let jd_no_reform = (365.25 * (yf + 4716.0)).floor()
        + (30.6001 * (m as f64 + 1.0)).floor()
        + day_frac
        - 1524.5;

    if jd_no_reform >= GREGORIAN_START_JD {
        let a = (yf / 100.0).floor();
        jd_no_reform + 2.0 - a + (a / 4.0).floor()
    } else {
        jd_no_reform
    }
}

/// Convert a Julian Day back to `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_frac)
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

/// Civil weekday index of the day containing `jd`, 0 = Sunday .. 6 = Saturday.
///
/// The weekday flips at calendar midnight (the .5 JD boundary).
pub fn weekday_index(jd: f64) -> u8 {
    ((jd + 1.5).floor() as i64).rem_euclid(7) as u8
}

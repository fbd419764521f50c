//! Apparent lunar ecliptic longitude.
//!
//! Truncated ELP-style periodic series: the 59 longitude terms of the
//! standard abridged theory plus the Venus, Jupiter and flattening
//! additives. Accuracy is ~10 arcseconds in longitude, far inside the
//! arcminute-class needs of tithi/nakshatra work.
//!
//! Source: abridged ELP-2000/82 longitude series (Meeus ch. 47).

use panchanga_time::jd_to_centuries;

use crate::error::EphemError;
use crate::nutation::nutation;
use crate::validate_jd;

fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Mean elements of the lunar orbit, degrees (unwrapped).
struct MeanElements {
    /// L': mean longitude of the Moon.
    l: f64,
    /// D: mean elongation of the Moon from the Sun.
    d: f64,
    /// M: mean anomaly of the Sun.
    m: f64,
    /// M': mean anomaly of the Moon.
    mp: f64,
    /// F: argument of latitude.
    f: f64,
}

fn mean_elements(t: f64) -> MeanElements {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    MeanElements {
        l: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
            - t4 / 65_194_000.0,
        d: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
            - t4 / 113_065_000.0,
        m: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0,
        mp: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
            - t4 / 14_712_000.0,
        f: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
            + t4 / 863_310_000.0,
    }
}

/// Periodic longitude terms.
///
/// Each row: `[nD, nM, nM', nF, A_i]` with the amplitude in microdegrees.
/// Terms with a Sun-anomaly multiplier are scaled by `E^|nM|` to track the
/// secular change of Earth's orbital eccentricity.
#[rustfmt::skip]
static LONGITUDE_TERMS: [[i64; 5]; 59] = [
    //  nD  nM  nM' nF        A_i
    [   0,  0,  1,  0,   6_288_774],
    [   2,  0, -1,  0,   1_274_027],
    [   2,  0,  0,  0,     658_314],
    [   0,  0,  2,  0,     213_618],
    [   0,  1,  0,  0,    -185_116],
    [   0,  0,  0,  2,    -114_332],
    [   2,  0, -2,  0,      58_793],
    [   2, -1, -1,  0,      57_066],
    [   2,  0,  1,  0,      53_322],
    [   2, -1,  0,  0,      45_758],
    [   0,  1, -1,  0,     -40_923],
    [   1,  0,  0,  0,     -34_720],
    [   0,  1,  1,  0,     -30_383],
    [   2,  0,  0, -2,      15_327],
    [   0,  0,  1,  2,     -12_528],
    [   0,  0,  1, -2,      10_980],
    [   4,  0, -1,  0,      10_675],
    [   0,  0,  3,  0,      10_034],
    [   4,  0, -2,  0,       8_548],
    [   2,  1, -1,  0,      -7_888],
    [   2,  1,  0,  0,      -6_766],
    [   1,  0, -1,  0,      -5_163],
    [   1,  1,  0,  0,       4_987],
    [   2, -1,  1,  0,       4_036],
    [   2,  0,  2,  0,       3_994],
    [   4,  0,  0,  0,       3_861],
    [   2,  0, -3,  0,       3_665],
    [   0,  1, -2,  0,      -2_689],
    [   2,  0, -1,  2,      -2_602],
    [   2, -1, -2,  0,       2_390],
    [   1,  0,  1,  0,      -2_348],
    [   2, -2,  0,  0,       2_236],
    [   0,  1,  2,  0,      -2_120],
    [   0,  2,  0,  0,      -2_069],
    [   2, -2, -1,  0,       2_048],
    [   2,  0,  1, -2,      -1_773],
    [   2,  0,  0,  2,      -1_595],
    [   4, -1, -1,  0,       1_215],
    [   0,  0,  2,  2,      -1_110],
    [   3,  0, -1,  0,        -892],
    [   2,  1,  1,  0,        -810],
    [   4, -1, -2,  0,         759],
    [   0,  2, -1,  0,        -713],
    [   2,  2, -1,  0,        -700],
    [   2,  1, -2,  0,         691],
    [   2, -1,  0, -2,         596],
    [   4,  0,  1,  0,         549],
    [   0,  0,  4,  0,         537],
    [   4, -1,  0,  0,         520],
    [   1,  0, -2,  0,        -487],
    [   2,  1,  0, -2,        -399],
    [   0,  0,  2, -2,        -381],
    [   1,  1,  1,  0,         351],
    [   3,  0, -2,  0,        -340],
    [   4,  0, -3,  0,         330],
    [   2, -1,  2,  0,         327],
    [   0,  2,  1,  0,        -323],
    [   1,  1, -1,  0,         299],
    [   2,  0,  3,  0,         294],
];

/// Mean-equinox-of-date lunar longitude in degrees [0, 360).
pub(crate) fn mean_equinox_longitude_deg(t: f64) -> f64 {
    let el = mean_elements(t);

    let d = el.d.to_radians();
    let m = el.m.to_radians();
    let mp = el.mp.to_radians();
    let f = el.f.to_radians();

    // Eccentricity damping for terms involving the Sun's anomaly.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;
    let e2 = e * e;

    let mut sum_l = 0.0_f64;
    for row in &LONGITUDE_TERMS {
        let arg =
            row[0] as f64 * d + row[1] as f64 * m + row[2] as f64 * mp + row[3] as f64 * f;
        let damping = match row[1].abs() {
            0 => 1.0,
            1 => e,
            _ => e2,
        };
        sum_l += row[4] as f64 * damping * arg.sin();
    }

    // Venus, Jupiter, and Earth-flattening additives (microdegrees).
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sum_l += 3958.0 * a1.sin();
    sum_l += 1962.0 * (el.l - el.f).to_radians().sin();
    sum_l += 318.0 * a2.sin();

    normalize_360(el.l + sum_l * 1e-6)
}

/// Apparent ecliptic longitude of the Moon in degrees [0, 360).
///
/// `jd_tt` is a Julian Day in Terrestrial Time. Fails with
/// [`EphemError::OutOfRange`] outside the validity window.
pub fn moon_longitude(jd_tt: f64) -> Result<f64, EphemError> {
    validate_jd(jd_tt)?;
    let t = jd_to_centuries(jd_tt);
    let (dpsi, _) = nutation(t);
    Ok(apparent_longitude_deg(t, dpsi))
}

/// Apparent longitude from a precomputed nutation in longitude, degrees.
pub(crate) fn apparent_longitude_deg(t: f64, delta_psi_arcsec: f64) -> f64 {
    normalize_360(mean_equinox_longitude_deg(t) + delta_psi_arcsec / 3600.0)
}

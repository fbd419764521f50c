//! Truncated IAU 1980 nutation and mean obliquity of the ecliptic.
//!
//! The 18 leading lunisolar terms of the 1980 theory give Δψ and Δε to a
//! few milliarcseconds, orders of magnitude below the arcminute-class
//! tolerances of calendar work, where nutation mainly matters so that the
//! Sun and Moon longitudes refer to the same (true) equinox.
//!
//! Source: IAU 1980 theory of nutation (Seidelmann 1982); obliquity
//! polynomial from Laskar 1986. Public domain (IAU standard).

use std::f64::consts::TAU;

/// Arcseconds to radians conversion factor.
const AS2RAD: f64 = TAU / 1_296_000.0;

/// Compute the five Delaunay fundamental arguments in radians.
///
/// `t` = Julian centuries of TT since J2000.0.
///
/// Returns `[l, l', F, D, Ω]`:
/// - `l`  = mean anomaly of the Moon
/// - `l'` = mean anomaly of the Sun
/// - `F`  = mean argument of latitude of the Moon
/// - `D`  = mean elongation of the Moon from the Sun
/// - `Ω`  = mean longitude of the Moon's ascending node
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;

    // Degrees, wrapped at the end.
    let l = 134.962_98 + 477_198.867_398 * t + 0.008_697_2 * t2 + t3 / 56_250.0;
    let lp = 357.527_72 + 35_999.050_340 * t - 0.000_160_3 * t2 - t3 / 300_000.0;
    let f = 93.271_91 + 483_202.017_538 * t - 0.003_682_5 * t2 + t3 / 327_270.0;
    let d = 297.850_36 + 445_267.111_480 * t - 0.001_914_2 * t2 + t3 / 189_474.0;
    let om = 125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t2 + t3 / 450_000.0;

    [
        l.rem_euclid(360.0).to_radians(),
        lp.rem_euclid(360.0).to_radians(),
        f.rem_euclid(360.0).to_radians(),
        d.rem_euclid(360.0).to_radians(),
        om.rem_euclid(360.0).to_radians(),
    ]
}

/// Leading IAU 1980 nutation terms.
///
/// Each row: `[nl, nl', nF, nD, nΩ, S_i, S'_i, C_i, C'_i]` with Δψ
/// amplitudes `S` and Δε amplitudes `C` in units of 1e-5 arcsec (the
/// published 1e-4″ values scaled by ten so the T-rates stay integral).
#[rustfmt::skip]
static NUTATION_TERMS: [[i64; 9]; 18] = [
    //  nl  nl'  nF   nD   nΩ       S_i     S'_i      C_i    C'_i
    [   0,   0,   0,   0,   1, -1719960,   -1742,   920250,     89],
    [   0,   0,   2,  -2,   2,  -131870,     -16,    57360,    -31],
    [   0,   0,   2,   0,   2,   -22740,      -2,     9770,     -5],
    [   0,   0,   0,   0,   2,    20620,       2,    -8950,      5],
    [   0,   1,   0,   0,   0,    14260,     -34,      540,     -1],
    [   1,   0,   0,   0,   0,     7120,       1,      -70,      0],
    [   0,   1,   2,  -2,   2,    -5170,      12,     2240,     -6],
    [   0,   0,   2,   0,   1,    -3860,      -4,     2000,      0],
    [   1,   0,   2,   0,   2,    -3010,       0,     1290,     -1],
    [   0,  -1,   2,  -2,   2,     2170,      -5,     -950,      3],
    [   1,   0,   0,  -2,   0,    -1580,       0,      -10,      0],
    [   0,   0,   2,  -2,   1,     1290,       1,     -700,      0],
    [  -1,   0,   2,   0,   2,     1230,       0,     -530,      0],
    [   1,   0,   0,   0,   1,      630,       1,     -330,      0],
    [   0,   0,   0,   2,   0,      630,       0,      -20,      0],
    [  -1,   0,   2,   2,   2,     -590,       0,      260,      0],
    [  -1,   0,   0,   0,   1,     -580,      -1,      320,      0],
    [   1,   0,   2,   0,   1,     -510,       0,      270,      0],
];

/// Nutation in longitude and obliquity.
///
/// # Arguments
/// * `t` - Julian centuries of TT since J2000.0
///
/// # Returns
/// `(delta_psi_arcsec, delta_epsilon_arcsec)`
pub fn nutation(t: f64) -> (f64, f64) {
    let args = fundamental_arguments(t);

    let mut dpsi: f64 = 0.0;
    let mut deps: f64 = 0.0;

    for row in &NUTATION_TERMS {
        let arg = row[0] as f64 * args[0]
            + row[1] as f64 * args[1]
            + row[2] as f64 * args[2]
            + row[3] as f64 * args[3]
            + row[4] as f64 * args[4];

        dpsi += (row[5] as f64 + row[6] as f64 * t) * arg.sin();
        deps += (row[7] as f64 + row[8] as f64 * t) * arg.cos();
    }

    // 1e-5 arcsec units back to arcseconds.
    (dpsi * 1e-5, deps * 1e-5)
}

/// Mean obliquity of the ecliptic in degrees (Laskar polynomial).
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    (84_381.448 - 46.8150 * t - 0.00059 * t2 + 0.001_813 * t3) / 3600.0
}

/// True obliquity: mean obliquity plus nutation in obliquity.
pub fn true_obliquity_deg(t: f64) -> f64 {
    let (_, deps) = nutation(t);
    mean_obliquity_deg(t) + deps / 3600.0
}

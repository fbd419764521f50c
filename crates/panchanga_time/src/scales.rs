//! ΔT model and UTC ↔ TT Julian Day conversion.
//!
//! The ephemeris series are formulated in Terrestrial Time; civil inputs are
//! UTC. ΔT = TT − UT1 (UT1 ≈ UTC within under a second, below the accuracy
//! floor of everything downstream). The 1900–2050 fit follows the published
//! Espenak–Meeus piecewise polynomials; outside that span the long-term
//! parabola `−20 + 32u²` (u in centuries from 1820) takes over. Historical
//! dates before 1900 therefore carry tens of seconds of ΔT uncertainty,
//! which is still far below the angle tolerances of the calendar layer.

use crate::julian::J2000_JD;

/// ΔT = TT − UT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    if (1900.0..1920.0).contains(&year) {
        let t = year - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t * t + 0.0061966 * t.powi(3) - 0.000197 * t.powi(4)
    } else if (1920.0..1941.0).contains(&year) {
        let t = year - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t * t + 0.0020936 * t.powi(3)
    } else if (1941.0..1961.0).contains(&year) {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t * t / 233.0 + t.powi(3) / 2547.0
    } else if (1961.0..1986.0).contains(&year) {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t * t / 260.0 - t.powi(3) / 718.0
    } else if (1986.0..2005.0).contains(&year) {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t * t
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if (2005.0..2050.0).contains(&year) {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else if (2050.0..2150.0).contains(&year) {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - year)
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

/// Decimal year of a Julian Day (mean-year approximation, plenty for ΔT).
fn jd_to_decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}

/// Convert a UTC Julian Day to TT.
pub fn utc_to_tt_jd(jd_utc: f64) -> f64 {
    jd_utc + delta_t_seconds(jd_to_decimal_year(jd_utc)) / 86_400.0
}

/// Convert a TT Julian Day back to UTC.
///
/// ΔT varies by well under a millisecond over its own magnitude, so one
/// evaluation at the TT epoch suffices.
pub fn tt_to_utc_jd(jd_tt: f64) -> f64 {
    jd_tt - delta_t_seconds(jd_to_decimal_year(jd_tt)) / 86_400.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::calendar_to_jd;

    #[test]
    fn anchors_at_segment_origins() {
        assert!((delta_t_seconds(1950.0) - 29.07).abs() < 1e-9);
        assert!((delta_t_seconds(1975.0) - 45.45).abs() < 1e-9);
        assert!((delta_t_seconds(2000.0) - 63.86).abs() < 1e-9);
    }

    #[test]
    fn modern_values_plausible() {
        // Observed ΔT: ~69 s through the early 2020s; the fit runs a few
        // seconds high but stays in band.
        let dt = delta_t_seconds(2024.0);
        assert!((60.0..80.0).contains(&dt), "ΔT(2024) = {dt}");
        let dt90 = delta_t_seconds(1990.0);
        assert!((55.0..60.0).contains(&dt90), "ΔT(1990) = {dt90}");
    }

    #[test]
    fn continuous_at_2050() {
        let before = delta_t_seconds(2050.0 - 1e-6);
        let after = delta_t_seconds(2050.0);
        assert!((before - after).abs() < 0.5, "{before} vs {after}");
    }

    #[test]
    fn historical_parabola() {
        // u = -2.2 centuries → −20 + 32·4.84 ≈ 134.9 s
        let dt = delta_t_seconds(1600.0);
        assert!((dt - 134.88).abs() < 0.1, "ΔT(1600) = {dt}");
    }

    #[test]
    fn utc_tt_round_trip() {
        let jd_utc = calendar_to_jd(2024, 3, 20.0);
        let jd_tt = utc_to_tt_jd(jd_utc);
        assert!(jd_tt > jd_utc, "TT runs ahead of UTC");
        let back = tt_to_utc_jd(jd_tt);
        assert!((back - jd_utc).abs() < 1e-9, "round trip off by {}", back - jd_utc);
    }
}

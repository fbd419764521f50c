//! Greenwich and local mean sidereal time.

use crate::julian::{J2000_JD, jd_to_centuries};

/// Greenwich mean sidereal time in degrees [0, 360).
///
/// Polynomial valid for any instant, not just 0h UT. `jd_ut` is a Julian
/// Day in Universal Time; at the engine's accuracy UTC serves as UT1.
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let t = jd_to_centuries(jd_ut);
    (280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0)
        .rem_euclid(360.0)
}

/// Local mean sidereal time in degrees [0, 360), east longitudes positive.
pub fn local_sidereal_deg(gmst: f64, longitude_deg: f64) -> f64 {
    (gmst + longitude_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_1987_apr_10() {
        // 1987-04-10 00:00 UT: GMST = 13h 10m 46.3668s = 197.693195 deg.
        let gmst = gmst_deg(2_446_895.5);
        assert!((gmst - 197.693_195).abs() < 1e-3, "gmst = {gmst}");
    }

    #[test]
    fn gmst_daily_advance() {
        // Sidereal time gains ~3m56s (0.9856 deg) per solar day.
        let g0 = gmst_deg(2_460_000.5);
        let g1 = gmst_deg(2_460_001.5);
        let gain = (g1 - g0).rem_euclid(360.0);
        assert!((gain - 0.9856).abs() < 0.001, "gain = {gain}");
    }

    #[test]
    fn local_offset_east() {
        let g = gmst_deg(2_460_000.5);
        let l = local_sidereal_deg(g, 77.2);
        assert!((l - (g + 77.2).rem_euclid(360.0)).abs() < 1e-12);
    }

    #[test]
    fn gmst_always_normalized() {
        for i in 0..50 {
            let jd = 2_305_447.5 + i as f64 * 2000.0;
            let g = gmst_deg(jd);
            assert!((0.0..360.0).contains(&g), "jd {jd}: gmst {g}");
        }
    }
}

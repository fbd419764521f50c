//! Nakshatra (lunar mansion) classification, 27-fold scheme.
//!
//! The sidereal ecliptic is divided into 27 equal nakshatras of
//! 13 deg 20' each, classified from the Moon's sidereal longitude. Each
//! nakshatra has 4 padas (quarters) of 3 deg 20'.

use serde::{Deserialize, Serialize};

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: NAKSHATRA_SPAN/4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Degrees already covered within this nakshatra [0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Determine nakshatra and pada from the Moon's sidereal longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = sidereal_lon_deg.rem_euclid(360.0);
    let idx = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    let degrees_in = lon - idx as f64 * NAKSHATRA_SPAN;
    let pada = ((degrees_in / PADA_SPAN).floor() as u8).min(3) + 1;
    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[idx as usize],
        nakshatra_index: idx,
        pada,
        degrees_in_nakshatra: degrees_in,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn ashwini_at_zero() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.pada, 1);
        assert!(info.degrees_in_nakshatra.abs() < 1e-12);
    }

    #[test]
    fn all_boundaries_start_pada_one() {
        for i in 0..27u8 {
            let info = nakshatra_from_longitude(i as f64 * NAKSHATRA_SPAN);
            assert_eq!(info.nakshatra_index, i, "boundary {i}");
            assert_eq!(info.pada, 1, "pada at boundary {i}");
        }
    }

    #[test]
    fn padas_advance() {
        assert_eq!(nakshatra_from_longitude(PADA_SPAN + 0.1).pada, 2);
        assert_eq!(nakshatra_from_longitude(2.0 * PADA_SPAN + 0.1).pada, 3);
        assert_eq!(nakshatra_from_longitude(3.0 * PADA_SPAN + 0.1).pada, 4);
    }

    #[test]
    fn mula_at_240() {
        let info = nakshatra_from_longitude(245.0);
        assert_eq!(info.nakshatra, Nakshatra::Mula);
        assert_eq!(info.nakshatra_index, 18);
    }

    #[test]
    fn revati_near_wrap() {
        let info = nakshatra_from_longitude(359.9);
        assert_eq!(info.nakshatra, Nakshatra::Revati);
        assert_eq!(info.pada, 4);
    }

    #[test]
    fn negative_wraps() {
        assert_eq!(nakshatra_from_longitude(-1.0).nakshatra, Nakshatra::Revati);
    }
}

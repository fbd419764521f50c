//! Vaara (weekday) classification.
//!
//! The vaara follows the civil weekday of the location: it changes at
//! local midnight, not at sunrise. This matches how the weekday is used
//! in practice while the sunrise-to-sunrise window drives everything else
//! in the panchanga day.

use serde::{Deserialize, Serialize};

use panchanga_time::weekday_index;

/// The seven vaaras from Ravivara (Sunday) to Shanivara (Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vaara {
    Ravivara,
    Somavara,
    Mangalavara,
    Budhavara,
    Guruvara,
    Shukravara,
    Shanivara,
}

/// All 7 vaaras in order (0 = Ravivara/Sunday).
pub const ALL_VAARAS: [Vaara; 7] = [
    Vaara::Ravivara,
    Vaara::Somavara,
    Vaara::Mangalavara,
    Vaara::Budhavara,
    Vaara::Guruvara,
    Vaara::Shukravara,
    Vaara::Shanivara,
];

impl Vaara {
    /// Sanskrit name of the vaara.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivara => "Ravivara",
            Self::Somavara => "Somavara",
            Self::Mangalavara => "Mangalavara",
            Self::Budhavara => "Budhavara",
            Self::Guruvara => "Guruvara",
            Self::Shukravara => "Shukravara",
            Self::Shanivara => "Shanivara",
        }
    }

    /// English weekday name.
    pub const fn english(self) -> &'static str {
        match self {
            Self::Ravivara => "Sunday",
            Self::Somavara => "Monday",
            Self::Mangalavara => "Tuesday",
            Self::Budhavara => "Wednesday",
            Self::Guruvara => "Thursday",
            Self::Shukravara => "Friday",
            Self::Shanivara => "Saturday",
        }
    }

    /// 0-based index (Ravivara=0 .. Shanivara=6).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// All 7 vaaras in order.
    pub const fn all() -> &'static [Vaara; 7] {
        &ALL_VAARAS
    }
}

/// Determine the vaara of the civil day containing a local Julian Day.
///
/// Pass a local-time JD (UTC JD plus the clock offset in days); the day
/// rolls over at local midnight.
pub fn vaara_from_local_jd(jd_local: f64) -> Vaara {
    ALL_VAARAS[weekday_index(jd_local) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchanga_time::CivilDate;

    #[test]
    fn indices_sequential() {
        for (i, v) in ALL_VAARAS.iter().enumerate() {
            assert_eq!(v.index() as usize, i);
        }
    }

    #[test]
    fn j2000_was_saturday() {
        // 2000-01-01 was a Saturday.
        let jd = CivilDate::new(2000, 1, 1).unwrap().jd_midnight();
        assert_eq!(vaara_from_local_jd(jd + 0.3), Vaara::Shanivara);
    }

    #[test]
    fn sankranti_2024_was_monday() {
        // 2024-01-15 was a Monday.
        let jd = CivilDate::new(2024, 1, 15).unwrap().jd_midnight();
        assert_eq!(vaara_from_local_jd(jd), Vaara::Somavara);
    }

    #[test]
    fn rolls_at_midnight() {
        let jd = CivilDate::new(2024, 1, 14).unwrap().jd_midnight();
        assert_eq!(vaara_from_local_jd(jd + 0.999), Vaara::Ravivara);
        assert_eq!(vaara_from_local_jd(jd + 1.0), Vaara::Somavara);
    }
}

//! Rashi (sidereal zodiac sign) classification.
//!
//! The sidereal ecliptic is divided into 12 equal rashis of 30 degrees.
//! Rashis name the solar months: a sankranti is the Sun's entry into the
//! next rashi, and the amanta lunar months take their names from the
//! rashi the Sun occupies at the bounding new moons.

use serde::{Deserialize, Serialize};

/// Span of one rashi: 360/12 = 30 degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis from Mesha to Meena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrishchika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrishchika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrishchika => "Vrishchika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sidereal longitude where this rashi begins, degrees.
    pub const fn start_deg(self) -> f64 {
        self.index() as f64 * RASHI_SPAN
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// Determine the rashi from a sidereal ecliptic longitude.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> Rashi {
    let lon = sidereal_lon_deg.rem_euclid(360.0);
    let idx = ((lon / RASHI_SPAN).floor() as usize).min(11);
    ALL_RASHIS[idx]
}

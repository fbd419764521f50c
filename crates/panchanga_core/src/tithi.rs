//! Tithi (lunar day) classification.
//!
//! A tithi is one 12-degree step of the Moon-Sun elongation. Thirty
//! tithis make a synodic month: 15 of the waxing Shukla paksha ending at
//! Purnima, then 15 of the waning Krishna paksha ending at Amavasya.
//!
//! Elongation is a difference of longitudes, so the ayanamsha cancels and
//! tropical positions suffice.

use serde::{Deserialize, Serialize};

/// Span of one tithi: 360/30 = 12 degrees of elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Waxing or waning half of the lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    /// Waxing fortnight, new moon to full moon.
    Shukla,
    /// Waning fortnight, full moon to new moon.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 30 tithis of the synodic month in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDvitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDvadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDvitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDvadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

/// All 30 tithis in order (0 = Shukla Pratipada, 29 = Amavasya).
pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDvitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDvadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDvitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDvadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

impl Tithi {
    /// 0-based index within the synodic month (0..29).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Paksha this tithi belongs to.
    pub const fn paksha(self) -> Paksha {
        if (self as u8) < 15 { Paksha::Shukla } else { Paksha::Krishna }
    }

    /// 1-based position within the paksha (1..15).
    pub const fn number_in_paksha(self) -> u8 {
        (self as u8) % 15 + 1
    }

    /// Display name, e.g. "Shukla Tritiya", "Purnima".
    pub const fn name(self) -> &'static str {
        match self {
            Self::ShuklaPratipada => "Shukla Pratipada",
            Self::ShuklaDvitiya => "Shukla Dvitiya",
            Self::ShuklaTritiya => "Shukla Tritiya",
            Self::ShuklaChaturthi => "Shukla Chaturthi",
            Self::ShuklaPanchami => "Shukla Panchami",
            Self::ShuklaShashthi => "Shukla Shashthi",
            Self::ShuklaSaptami => "Shukla Saptami",
            Self::ShuklaAshtami => "Shukla Ashtami",
            Self::ShuklaNavami => "Shukla Navami",
            Self::ShuklaDashami => "Shukla Dashami",
            Self::ShuklaEkadashi => "Shukla Ekadashi",
            Self::ShuklaDvadashi => "Shukla Dvadashi",
            Self::ShuklaTrayodashi => "Shukla Trayodashi",
            Self::ShuklaChaturdashi => "Shukla Chaturdashi",
            Self::Purnima => "Purnima",
            Self::KrishnaPratipada => "Krishna Pratipada",
            Self::KrishnaDvitiya => "Krishna Dvitiya",
            Self::KrishnaTritiya => "Krishna Tritiya",
            Self::KrishnaChaturthi => "Krishna Chaturthi",
            Self::KrishnaPanchami => "Krishna Panchami",
            Self::KrishnaShashthi => "Krishna Shashthi",
            Self::KrishnaSaptami => "Krishna Saptami",
            Self::KrishnaAshtami => "Krishna Ashtami",
            Self::KrishnaNavami => "Krishna Navami",
            Self::KrishnaDashami => "Krishna Dashami",
            Self::KrishnaEkadashi => "Krishna Ekadashi",
            Self::KrishnaDvadashi => "Krishna Dvadashi",
            Self::KrishnaTrayodashi => "Krishna Trayodashi",
            Self::KrishnaChaturdashi => "Krishna Chaturdashi",
            Self::Amavasya => "Amavasya",
        }
    }

    /// All 30 tithis in order.
    pub const fn all() -> &'static [Tithi; 30] {
        &ALL_TITHIS
    }
}

/// Result of a tithi lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TithiInfo {
    /// The tithi.
    pub tithi: Tithi,
    /// 0-based index (0 = Shukla Pratipada, 29 = Amavasya).
    pub tithi_index: u8,
    /// Paksha (Shukla or Krishna).
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub tithi_in_paksha: u8,
    /// Degrees of elongation already covered within this tithi [0, 12).
    pub degrees_in_tithi: f64,
}

/// Determine the tithi from the Moon-Sun elongation.
///
/// A boundary value belongs to the tithi that begins there.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiInfo {
    let elong = elongation_deg.rem_euclid(360.0);
    let idx = ((elong / TITHI_SEGMENT_DEG).floor() as u8).min(29);
    let tithi = ALL_TITHIS[idx as usize];
    TithiInfo {
        tithi,
        tithi_index: idx,
        paksha: tithi.paksha(),
        tithi_in_paksha: tithi.number_in_paksha(),
        degrees_in_tithi: elong - idx as f64 * TITHI_SEGMENT_DEG,
    }
}

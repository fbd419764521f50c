//! Lunar month (masa) resolution.
//!
//! An amanta month runs new moon to new moon and takes its name from
//! the Sun's sidereal rashi at the opening new moon: the month whose
//! closing new moon falls with the Sun in Mesha is Chaitra, so the
//! name index is `(rashi + 1) % 12`. When the Sun stays in one rashi
//! across both bracketing new moons the month is intercalary (adhika)
//! and carries the name of the month that follows.
//!
//! A purnimanta month runs full moon to full moon and borrows the name
//! of the amanta month that begins at the new moon it contains, so the
//! two schemes agree over the bright fortnight.

use panchanga_ephem::{AyanamshaSystem, sidereal_sun_moon};
use panchanga_time::utc_to_tt_jd;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::phases::{next_full_moon, next_new_moon, prev_full_moon, prev_new_moon};
use crate::rashi::{Rashi, rashi_from_longitude};

/// The twelve lunar months in order, Chaitra first.
pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashvina,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

/// Lunar month of the Hindu calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Masa {
    Chaitra,
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashvina,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
}

impl Masa {
    /// Name of the month.
    pub const fn name(self) -> &'static str {
        match self {
            Masa::Chaitra => "Chaitra",
            Masa::Vaishakha => "Vaishakha",
            Masa::Jyeshtha => "Jyeshtha",
            Masa::Ashadha => "Ashadha",
            Masa::Shravana => "Shravana",
            Masa::Bhadrapada => "Bhadrapada",
            Masa::Ashvina => "Ashvina",
            Masa::Kartika => "Kartika",
            Masa::Margashirsha => "Margashirsha",
            Masa::Pausha => "Pausha",
            Masa::Magha => "Magha",
            Masa::Phalguna => "Phalguna",
        }
    }

    /// Zero-based index, Chaitra = 0.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// All twelve months in order.
    pub const fn all() -> &'static [Masa; 12] {
        &ALL_MASAS
    }
}

/// A resolved lunar month with its bounding phase instants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MasaInfo {
    /// Month name.
    pub masa: Masa,
    /// True for an intercalary month.
    pub adhika: bool,
    /// Opening phase instant, UTC Julian Day.
    pub start_jd: f64,
    /// Closing phase instant, UTC Julian Day.
    pub end_jd: f64,
}

fn sun_rashi_at(jd_utc: f64, system: AyanamshaSystem) -> Result<Rashi, CoreError> {
    let (sidereal_sun, _) = sidereal_sun_moon(utc_to_tt_jd(jd_utc), system)?;
    Ok(rashi_from_longitude(sidereal_sun))
}

/// Amanta month in force at `jd_utc`.
pub fn amanta_masa_at(jd_utc: f64, system: AyanamshaSystem) -> Result<MasaInfo, CoreError> {
    let start_jd = prev_new_moon(jd_utc)?;
    let end_jd = next_new_moon(jd_utc)?;
    let rashi_at_start = sun_rashi_at(start_jd, system)?;
    let rashi_at_end = sun_rashi_at(end_jd, system)?;
    let masa = ALL_MASAS[(rashi_at_start.index() as usize + 1) % 12];
    Ok(MasaInfo {
        masa,
        adhika: rashi_at_start == rashi_at_end,
        start_jd,
        end_jd,
    })
}

/// Purnimanta month in force at `jd_utc`.
pub fn purnimanta_masa_at(jd_utc: f64, system: AyanamshaSystem) -> Result<MasaInfo, CoreError> {
    let start_jd = prev_full_moon(jd_utc)?;
    let end_jd = next_full_moon(jd_utc)?;
    // The single new moon inside the fortnight pair names the month.
    let governing_nm = next_new_moon(start_jd)?;
    let governing = amanta_masa_at(governing_nm + 1.0, system)?;
    Ok(MasaInfo {
        masa: governing.masa,
        adhika: governing.adhika,
        start_jd,
        end_jd,
    })
}

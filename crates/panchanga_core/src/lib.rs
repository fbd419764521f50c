//! Panchanga core: angas, sunrise, lunar months, and day assembly.
//!
//! This crate turns raw Sun/Moon longitudes into the five limbs of the
//! Hindu almanac and packages them into per-day descriptors:
//! - Pure classifiers for tithi, vaara, nakshatra, yoga, and karana
//! - Boundary searches that time limb transitions to the millisecond
//! - An iterative sunrise/sunset solver with polar handling
//! - Amanta and purnimanta month resolution with adhika detection
//! - Muhurta windows and the assembled [`DayDescriptor`]
//!
//! All instants cross the public API as UTC Julian Days.

pub mod anga;
pub mod day;
pub mod day_types;
pub mod error;
pub mod karana;
pub mod location;
pub mod masa;
pub mod muhurta;
pub mod nakshatra;
pub mod phases;
pub mod rashi;
pub mod riseset;
pub mod riseset_types;
pub mod search;
pub mod tithi;
pub mod vaara;
pub mod yoga;

pub use anga::{
    AngaConfig, AngaKind, AngaSnapshot, Transition, anga_at, anga_snapshot, karana_at, nakshatra_at,
    next_transition, prev_transition, tithi_at, transitions_in_window, vaara_at, yoga_at,
};
pub use day::build_day_descriptor;
pub use day_types::{DayBoundary, DayConfig, DayDescriptor, DayMuhurta};
pub use error::CoreError;
pub use karana::{KARANA_SEGMENT_DEG, Karana, KaranaInfo, karana_for_slot, karana_from_elongation};
pub use location::Location;
pub use masa::{ALL_MASAS, Masa, MasaInfo, amanta_masa_at, purnimanta_masa_at};
pub use muhurta::{
    MuhurtaWindow, abhijit_muhurta, gulika_kala, rahu_kala, varjyam_windows, yamaganda_kala,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use phases::{SYNODIC_MONTH_DAYS, next_full_moon, next_new_moon, prev_full_moon, prev_new_moon};
pub use rashi::{ALL_RASHIS, RASHI_SPAN, Rashi, rashi_from_longitude};
pub use riseset::{SunTimes, approximate_local_noon_jd, compute_rise_set, sun_times, sunrise_jd};
pub use riseset_types::{RiseSetConfig, RiseSetEvent, RiseSetResult};
pub use search::{find_zero_crossing, normalize_to_pm180};
pub use tithi::{ALL_TITHIS, Paksha, TITHI_SEGMENT_DEG, Tithi, TithiInfo, tithi_from_elongation};
pub use vaara::{ALL_VAARAS, Vaara, vaara_from_local_jd};
pub use yoga::{ALL_YOGAS, YOGA_SPAN, Yoga, YogaInfo, yoga_from_sum};

//! Civil time and Julian Day arithmetic for the panchanga engine.
//!
//! Provides:
//! - [`CivilDate`]: a proleptic Gregorian calendar date (the cache key and
//!   the unit a panchanga day is requested for)
//! - [`UtcDateTime`]: a full UTC timestamp with sub-second precision
//! - Gregorian calendar ↔ Julian Day conversions
//! - the ΔT (TT − UT) model used to evaluate the ephemeris, which is
//!   formulated in Terrestrial Time, from civil UTC instants
//!
//! All instants exchanged between crates are `f64` Julian Days. Functions
//! state in their name or docs whether they expect UTC or TT.

pub mod civil;
pub mod error;
pub mod julian;
pub mod scales;
pub mod sidereal;

pub use civil::{CivilDate, UtcDateTime};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_centuries, weekday_index,
};
pub use scales::{delta_t_seconds, tt_to_utc_jd, utc_to_tt_jd};
pub use sidereal::{gmst_deg, local_sidereal_deg};

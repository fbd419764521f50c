//! High-level panchanga engine.
//!
//! Wraps the computation crates behind one thread-safe handle: cached
//! day descriptors, festival resolution over date ranges, and location
//! invalidation, with every instant carried as a UTC Julian Day.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use panchanga::*;
//!
//! let engine = Panchanga::new(PanchangaConfig::default()).unwrap();
//! let delhi = Location::new(28.6139, 77.209, 216.0, 5.5);
//!
//! let date: CivilDate = "2024-11-01".parse().unwrap();
//! let day = engine.day_descriptor(date, &delhi).unwrap();
//! println!("tithi at sunrise: {}", day.at_sunrise.tithi.tithi.name());
//!
//! let festivals = engine
//!     .festivals(date, "2024-11-03".parse().unwrap(), &delhi)
//!     .unwrap();
//! for f in &festivals {
//!     println!("{}: {}", f.date, f.name);
//! }
//! ```

pub mod cache;
pub mod engine;
pub mod error;

// Primary re-exports — users should only need `use panchanga::*`.
pub use cache::{CacheKey, DescriptorCache, Lookup, PlaceKey};
pub use engine::{DEFAULT_CACHE_CAPACITY, Panchanga, PanchangaConfig};
pub use error::PanchangaError;

// Re-export core types so callers don't need to depend on
// panchanga_core directly.
pub use panchanga_core::{
    AngaKind, AngaSnapshot, CoreError, DayBoundary, DayConfig, DayDescriptor, DayMuhurta, Karana,
    KaranaInfo, Location, Masa, MasaInfo, MuhurtaWindow, Nakshatra, NakshatraInfo, Paksha,
    RiseSetConfig, Tithi, TithiInfo, Transition, Vaara, Yoga, YogaInfo,
};

// Re-export the festival catalog and occurrence types.
pub use panchanga_festival::{
    FESTIVALS, FestivalError, FestivalOccurrence, FestivalRule, Observance, RuleKind, rule_by_id,
};

// Re-export time and ephemeris types used in the public surface.
pub use panchanga_ephem::{AyanamshaSystem, EphemError};
pub use panchanga_time::{CivilDate, TimeError, UtcDateTime};

//! The panchanga engine: cached day descriptors and festival queries
//! behind one thread-safe handle.

use std::sync::Arc;

use panchanga_core::{DayConfig, DayDescriptor, Location, RiseSetConfig, build_day_descriptor};
use panchanga_ephem::AyanamshaSystem;
use panchanga_festival::{FESTIVALS, FestivalOccurrence, FestivalRule, resolve_festivals};
use panchanga_time::CivilDate;
use serde::{Deserialize, Serialize};

use crate::cache::{CacheKey, DescriptorCache, Lookup, PlaceKey};
use crate::error::PanchangaError;

/// Default descriptor cache size in entries.
pub const DEFAULT_CACHE_CAPACITY: usize = 128;

/// Engine construction knobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanchangaConfig {
    /// Ayanamsha applied to every sidereal longitude.
    pub ayanamsha: AyanamshaSystem,
    /// Horizon model for sunrise and sunset.
    pub rise_set: RiseSetConfig,
    /// Descriptor cache size in entries. Must be at least 1.
    pub cache_capacity: usize,
}

impl Default for PanchangaConfig {
    fn default() -> Self {
        Self {
            ayanamsha: AyanamshaSystem::default(),
            rise_set: RiseSetConfig::default(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Thread-safe panchanga engine.
///
/// One engine holds one configuration, the festival catalog, and a
/// bounded descriptor cache. Every method takes `&self`; share an
/// engine across threads directly or behind an `Arc`.
pub struct Panchanga {
    day_config: DayConfig,
    rules: Vec<FestivalRule>,
    cache: DescriptorCache,
}

impl Panchanga {
    /// Build an engine, validating the configuration.
    pub fn new(config: PanchangaConfig) -> Result<Self, PanchangaError> {
        if config.cache_capacity == 0 {
            return Err(PanchangaError::InvalidConfig("cache_capacity must be at least 1"));
        }
        Ok(Self {
            day_config: DayConfig {
                ayanamsha: config.ayanamsha,
                rise_set: config.rise_set,
            },
            rules: FESTIVALS.to_vec(),
            cache: DescriptorCache::new(config.cache_capacity),
        })
    }

    /// Replace the built-in festival catalog.
    pub fn with_rules(mut self, rules: &[FestivalRule]) -> Self {
        self.rules = rules.to_vec();
        self
    }

    /// The festival rules this engine resolves.
    pub fn rules(&self) -> &[FestivalRule] {
        &self.rules
    }

    /// Full descriptor for one civil day, served from the cache when
    /// the same day at the same place was built before.
    pub fn day_descriptor(
        &self,
        date: CivilDate,
        location: &Location,
    ) -> Result<Arc<DayDescriptor>, PanchangaError> {
        let key = CacheKey::new(date, location);
        let generation = match self.cache.probe(&key) {
            Lookup::Hit(descriptor) => return Ok(descriptor),
            Lookup::Miss { generation } => generation,
        };
        let built = Arc::new(build_day_descriptor(location, date, &self.day_config)?);
        self.cache.insert(key, Arc::clone(&built), generation);
        Ok(built)
    }

    /// Festival occurrences over an inclusive civil date range.
    ///
    /// Descriptors for the range come through the cache, so repeated
    /// queries over overlapping ranges reuse earlier builds.
    pub fn festivals(
        &self,
        from: CivilDate,
        to: CivilDate,
        location: &Location,
    ) -> Result<Vec<FestivalOccurrence>, PanchangaError> {
        if to < from {
            return Err(PanchangaError::InvalidRange("range end precedes start"));
        }
        let mut days = Vec::new();
        let mut date = from;
        while date <= to {
            days.push((*self.day_descriptor(date, location)?).clone());
            date = date.next_day();
        }
        Ok(resolve_festivals(&days, &self.rules, &self.day_config)?)
    }

    /// Drop cached descriptors for every place other than `location`.
    /// Builds already in flight for dropped places will not re-enter
    /// the cache.
    pub fn invalidate_location(&self, location: &Location) {
        self.cache.retain_place(PlaceKey::new(location));
    }

    /// Number of descriptors currently cached.
    pub fn cached_days(&self) -> usize {
        self.cache.len()
    }
}

//! Bounded cache for day descriptors.
//!
//! Descriptors are pure functions of (date, location, config), so the
//! cache never holds a lock across a build: a probe either hits or
//! returns a generation token, the caller builds outside the lock, and
//! [`DescriptorCache::insert`] discards the result if an invalidation
//! landed in between. Two threads may build the same day concurrently;
//! that costs a duplicate computation, never a wrong entry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use panchanga_core::{DayDescriptor, Location};
use panchanga_time::CivilDate;

/// A location quantized to cache granularity: latitude and longitude
/// to 0.01 deg, altitude to 100 m, the clock offset to the minute.
/// Two locations share cache entries only when every rounded
/// component matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaceKey {
    lat_centideg: i32,
    lon_centideg: i32,
    alt_hectometers: i32,
    offset_minutes: i32,
}

impl PlaceKey {
    pub fn new(location: &Location) -> Self {
        Self {
            lat_centideg: (location.latitude_deg * 100.0).round() as i32,
            lon_centideg: (location.longitude_deg * 100.0).round() as i32,
            alt_hectometers: (location.altitude_m / 100.0).round() as i32,
            offset_minutes: (location.utc_offset_hours * 60.0).round() as i32,
        }
    }
}

/// Cache key: one civil day at one quantized place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    date: CivilDate,
    place: PlaceKey,
}

impl CacheKey {
    pub fn new(date: CivilDate, location: &Location) -> Self {
        Self { date, place: PlaceKey::new(location) }
    }

    pub fn place(&self) -> PlaceKey {
        self.place
    }
}

/// Outcome of a cache probe.
pub enum Lookup {
    Hit(Arc<DayDescriptor>),
    /// Miss carrying the generation to hand back to
    /// [`DescriptorCache::insert`] with the finished build.
    Miss { generation: u64 },
}

struct Entry {
    descriptor: Arc<DayDescriptor>,
    last_used: u64,
}

struct CacheState {
    entries: HashMap<CacheKey, Entry>,
    use_counter: u64,
    generation: u64,
}

/// Bounded LRU over immutable day descriptors.
pub struct DescriptorCache {
    state: Mutex<CacheState>,
    capacity: usize,
}

impl DescriptorCache {
    /// `capacity` must be at least 1; the engine validates this.
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                use_counter: 0,
                generation: 0,
            }),
            capacity,
        }
    }

    /// Look up a key, refreshing its recency on a hit.
    pub fn probe(&self, key: &CacheKey) -> Lookup {
        let mut state = self.lock();
        state.use_counter += 1;
        let stamp = state.use_counter;
        match state.entries.get_mut(key) {
            Some(entry) => {
                entry.last_used = stamp;
                Lookup::Hit(Arc::clone(&entry.descriptor))
            }
            None => Lookup::Miss { generation: state.generation },
        }
    }

    /// Store a descriptor built while `generation` was current. A build
    /// that raced an invalidation is dropped on the floor: the caller
    /// still holds its own `Arc`, it just never enters the map.
    pub fn insert(&self, key: CacheKey, descriptor: Arc<DayDescriptor>, generation: u64) {
        let mut state = self.lock();
        if state.generation != generation {
            return;
        }
        state.use_counter += 1;
        let stamp = state.use_counter;
        if state.entries.len() >= self.capacity && !state.entries.contains_key(&key) {
            // Evict the stalest entry. Capacities are small enough
            // that a scan beats extra ordering structure.
            let victim = state
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(k, _)| *k);
            if let Some(victim) = victim {
                state.entries.remove(&victim);
            }
        }
        state.entries.insert(key, Entry { descriptor, last_used: stamp });
    }

    /// Drop every entry at a different place and bump the generation so
    /// in-flight builds from before the call cannot repopulate the map.
    pub fn retain_place(&self, place: PlaceKey) {
        let mut state = self.lock();
        state.generation += 1;
        state.entries.retain(|key, _| key.place == place);
    }

    /// Number of cached descriptors.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        // Entries are immutable Arcs; a map abandoned mid-update by a
        // panicking thread is still safe to keep serving.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delhi() -> Location {
        Location::new(28.6139, 77.209, 216.0, 5.5)
    }

    #[test]
    fn nearby_coordinates_share_a_place() {
        let a = PlaceKey::new(&Location::new(28.612, 77.203, 216.0, 5.5));
        let b = PlaceKey::new(&Location::new(28.608, 77.197, 240.0, 5.5));
        assert_eq!(a, b);
    }

    #[test]
    fn coordinate_buckets_split_at_a_centidegree() {
        let a = PlaceKey::new(&delhi());
        let b = PlaceKey::new(&Location::new(28.6139, 77.219, 216.0, 5.5));
        assert_ne!(a, b);
    }

    #[test]
    fn offset_is_keyed_to_the_minute() {
        let ist = PlaceKey::new(&delhi());
        let npt = PlaceKey::new(&Location::new(28.6139, 77.209, 216.0, 5.75));
        assert_ne!(ist, npt);
        assert_eq!(ist.offset_minutes, 330);
        assert_eq!(npt.offset_minutes, 345);
    }

    #[test]
    fn keys_separate_by_date() {
        let d1 = CivilDate::new(2024, 11, 1).unwrap();
        let d2 = CivilDate::new(2024, 11, 2).unwrap();
        let loc = delhi();
        assert_ne!(CacheKey::new(d1, &loc), CacheKey::new(d2, &loc));
        assert_eq!(CacheKey::new(d1, &loc).place(), CacheKey::new(d2, &loc).place());
    }
}

//! Memoizing cache for great-circle distances between stops.
//!
//! Distances are keyed by an unordered stop pair, so `(A, B)` and `(B, A)`
//! share one entry. The cache is concurrent, which lets lookups run through
//! a shared reference to the network.

use moka::sync::Cache as MokaCache;

use crate::domain::StopId;

/// Cache key: the stop pair with the smaller id first.
type PairKey = (StopId, StopId);

/// Configuration for the geo-distance cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached stop pairs.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 100_000,
        }
    }
}

/// Get-or-compute cache of geo distances in metres.
pub struct GeoDistanceCache {
    distances: MokaCache<PairKey, f64>,
}

impl GeoDistanceCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let distances = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .build();
        Self { distances }
    }

    fn key(a: StopId, b: StopId) -> PairKey {
        if a <= b { (a, b) } else { (b, a) }
    }

    /// Return the cached distance for the pair, computing and storing it on a miss.
    pub fn get_or_compute(&self, a: StopId, b: StopId, compute: impl FnOnce() -> f64) -> f64 {
        self.distances.get_with(Self::key(a, b), compute)
    }

    /// Check whether a distance for the pair is cached, in either order.
    pub fn contains(&self, a: StopId, b: StopId) -> bool {
        self.distances.contains_key(&Self::key(a, b))
    }
}

impl Default for GeoDistanceCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

impl std::fmt::Debug for GeoDistanceCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoDistanceCache")
            .field("entries", &self.distances.entry_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn computes_once_per_pair() {
        let cache = GeoDistanceCache::default();
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            42.5
        };

        assert_eq!(cache.get_or_compute(StopId(1), StopId(2), compute), 42.5);
        assert_eq!(cache.get_or_compute(StopId(1), StopId(2), compute), 42.5);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn reversed_pair_hits_the_same_entry() {
        let cache = GeoDistanceCache::default();
        cache.get_or_compute(StopId(7), StopId(3), || 10.0);

        assert!(cache.contains(StopId(3), StopId(7)));
        assert!(cache.contains(StopId(7), StopId(3)));
        let value = cache.get_or_compute(StopId(3), StopId(7), || panic!("must not recompute"));
        assert_eq!(value, 10.0);
    }

    #[test]
    fn distinct_pairs_are_separate() {
        let cache = GeoDistanceCache::default();
        cache.get_or_compute(StopId(0), StopId(1), || 1.0);
        assert!(!cache.contains(StopId(0), StopId(2)));
        assert_eq!(cache.get_or_compute(StopId(0), StopId(2), || 2.0), 2.0);
    }
}

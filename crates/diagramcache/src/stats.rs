//! Usage counters for diagram caches
//!
//! Only `get` counts as a lookup; `has` is a presence check and is not
//! recorded. Deleting an ID that was never cached is not a delete.

use std::sync::atomic::{AtomicU64, Ordering};

/// Hit/miss/store/delete counters, updatable through a shared reference
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
    stores: AtomicU64,
    deletes: AtomicU64,
}

impl CacheStats {
    /// Counters starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// A `get` returned a cached diagram
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// A `get` found no diagram for the ID
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// A diagram was stored, new or replacing one with the same ID
    pub fn record_store(&self) {
        self.stores.fetch_add(1, Ordering::Relaxed);
    }

    /// A cached diagram was removed
    pub fn record_delete(&self) {
        self.deletes.fetch_add(1, Ordering::Relaxed);
    }

    /// Lookups answered from the cache
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Lookups for diagrams that were not cached
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Diagrams stored, overwrites included
    pub fn stores(&self) -> u64 {
        self.stores.load(Ordering::Relaxed)
    }

    /// Diagrams actually removed
    pub fn deletes(&self) -> u64 {
        self.deletes.load(Ordering::Relaxed)
    }

    /// Share of `get` calls that found a diagram; 0.0 before any lookup
    pub fn hit_ratio(&self) -> f64 {
        let hits = self.hits();
        match hits + self.misses() {
            0 => 0.0,
            lookups => hits as f64 / lookups as f64,
        }
    }

    /// Zero every counter, e.g. after warming a cache
    pub fn reset(&self) {
        for counter in [&self.hits, &self.misses, &self.stores, &self.deletes] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

//! Construction options for in-memory caches

use serde::Deserialize;

/// Options for building an [`InMemoryDiagramCache`](crate::InMemoryDiagramCache)
///
/// `initial_capacity` only pre-sizes the map; the cache is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Number of entries to reserve space for up front
    pub initial_capacity: usize,

    /// Whether hit/miss/store/delete counters are maintained
    pub track_stats: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            track_stats: true,
        }
    }
}

impl CacheConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve space for `capacity` entries
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Enable or disable statistics
    pub fn with_stats(mut self, enabled: bool) -> Self {
        self.track_stats = enabled;
        self
    }
}

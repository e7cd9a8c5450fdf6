//! Lock-guarded handle for sharing a cache between threads

use std::sync::Arc;

use parking_lot::RwLock;

use crate::cache::{DiagramCache, InMemoryDiagramCache};
use crate::config::CacheConfig;
use crate::diagram::Diagram;
use crate::error::Result;

/// Cloneable, thread-safe handle around a [`DiagramCache`].
///
/// Lookups take the read lock, mutations take the write lock. Clones share
/// the same underlying cache.
#[derive(Debug)]
pub struct SharedDiagramCache<C> {
    inner: Arc<RwLock<C>>,
}

impl<D: Diagram> SharedDiagramCache<InMemoryDiagramCache<D>> {
    /// Create a shared in-memory cache
    pub fn in_memory() -> Self {
        Self::new(InMemoryDiagramCache::new())
    }

    /// Create a shared in-memory cache from the given options
    pub fn in_memory_with_config(config: CacheConfig) -> Self {
        Self::new(InMemoryDiagramCache::with_config(config))
    }

    /// Number of cached diagrams
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Remove every cached diagram
    pub fn clear(&self) {
        self.inner.write().clear();
    }
}

impl<C: DiagramCache> SharedDiagramCache<C> {
    /// Wrap an existing cache
    pub fn new(cache: C) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cache)),
        }
    }

    /// Store a diagram, replacing any entry with the same ID
    pub fn store(&self, diagram: C::Diagram) -> Result<()> {
        self.inner.write().store(diagram)
    }

    /// Check whether a diagram with the same ID is cached
    pub fn has(&self, diagram: &C::Diagram) -> Result<bool> {
        self.inner.read().has(diagram)
    }

    /// Get the cached diagram with the same ID, or `None` on a miss
    pub fn get(&self, diagram: &C::Diagram) -> Result<Option<Arc<C::Diagram>>> {
        self.inner.read().get(diagram)
    }

    /// Get every cached diagram
    pub fn get_all(&self) -> Result<Vec<Arc<C::Diagram>>> {
        self.inner.read().get_all()
    }

    /// Delete the cached diagram with the same ID, if any
    pub fn delete(&self, diagram: &C::Diagram) -> Result<()> {
        self.inner.write().delete(diagram)
    }

    /// Run `f` with shared access to the wrapped cache
    pub fn with_read<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive access to the wrapped cache
    pub fn with_write<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl<C> Clone for SharedDiagramCache<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: DiagramCache> DiagramCache for SharedDiagramCache<C> {
    type Diagram = C::Diagram;

    fn store(&mut self, diagram: C::Diagram) -> Result<()> {
        SharedDiagramCache::store(self, diagram)
    }

    fn has(&self, diagram: &C::Diagram) -> Result<bool> {
        SharedDiagramCache::has(self, diagram)
    }

    fn get(&self, diagram: &C::Diagram) -> Result<Option<Arc<C::Diagram>>> {
        SharedDiagramCache::get(self, diagram)
    }

    fn get_all(&self) -> Result<Vec<Arc<C::Diagram>>> {
        SharedDiagramCache::get_all(self)
    }

    fn delete(&mut self, diagram: &C::Diagram) -> Result<()> {
        SharedDiagramCache::delete(self, diagram)
    }
}

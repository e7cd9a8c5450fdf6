//! DiagramCache: the cache contract and its in-memory implementation

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use ahash::RandomState;
use tracing::{debug, trace, warn};

use crate::config::CacheConfig;
use crate::diagram::Diagram;
use crate::error::{Error, Result};
use crate::stats::CacheStats;

/// Caches diagram results by their content-derived ID.
///
/// Every operation that takes a diagram first computes its ID; when that
/// fails the operation returns [`Error::Identifier`] and leaves the cache
/// untouched. A missing entry is never an error.
pub trait DiagramCache {
    /// Type of the cached diagrams
    type Diagram: Diagram;

    /// Store a diagram, replacing any entry with the same ID
    fn store(&mut self, diagram: Self::Diagram) -> Result<()>;

    /// Check whether a diagram with the same ID is cached
    fn has(&self, diagram: &Self::Diagram) -> Result<bool>;

    /// Get the cached diagram with the same ID, or `None` on a miss
    fn get(&self, diagram: &Self::Diagram) -> Result<Option<Arc<Self::Diagram>>>;

    /// Get every cached diagram, in no particular order
    fn get_all(&self) -> Result<Vec<Arc<Self::Diagram>>>;

    /// Delete the cached diagram with the same ID, if any
    fn delete(&mut self, diagram: &Self::Diagram) -> Result<()>;
}

/// Return the default `DiagramCache` implementation
///
/// The handle is `Send + Sync`, so it can be wrapped in a
/// [`SharedDiagramCache`](crate::SharedDiagramCache).
pub fn new_diagram_cache<D>() -> Box<dyn DiagramCache<Diagram = D> + Send + Sync>
where
    D: Diagram + Send + Sync + 'static,
{
    Box::new(InMemoryDiagramCache::new())
}

impl<C: DiagramCache + ?Sized> DiagramCache for Box<C> {
    type Diagram = C::Diagram;

    fn store(&mut self, diagram: C::Diagram) -> Result<()> {
        (**self).store(diagram)
    }

    fn has(&self, diagram: &C::Diagram) -> Result<bool> {
        (**self).has(diagram)
    }

    fn get(&self, diagram: &C::Diagram) -> Result<Option<Arc<C::Diagram>>> {
        (**self).get(diagram)
    }

    fn get_all(&self) -> Result<Vec<Arc<C::Diagram>>> {
        (**self).get_all()
    }

    fn delete(&mut self, diagram: &C::Diagram) -> Result<()> {
        (**self).delete(diagram)
    }
}

/// Compute a diagram's ID, adding cache context to failures
pub(crate) fn diagram_id<D: Diagram + ?Sized>(diagram: &D) -> Result<String> {
    diagram.id().map_err(|err| {
        warn!(error = %err, "cannot get diagram ID");
        Error::identifier(err)
    })
}

/// In-memory `DiagramCache` backed by a hash map.
///
/// Not internally synchronized: mutation needs `&mut self`. Wrap it in a
/// [`SharedDiagramCache`](crate::SharedDiagramCache) to share it between
/// threads.
pub struct InMemoryDiagramCache<D> {
    /// ID -> cached diagram
    diagrams: HashMap<String, Arc<D>, RandomState>,

    /// Usage counters
    stats: CacheStats,

    track_stats: bool,
}

impl<D: Diagram> InMemoryDiagramCache<D> {
    /// Create an empty cache with default options
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Create an empty cache from the given options
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            diagrams: HashMap::with_capacity_and_hasher(
                config.initial_capacity,
                RandomState::new(),
            ),
            stats: CacheStats::new(),
            track_stats: config.track_stats,
        }
    }

    /// Number of cached diagrams
    pub fn len(&self) -> usize {
        self.diagrams.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.diagrams.is_empty()
    }

    /// Remove every cached diagram (statistics are kept)
    pub fn clear(&mut self) {
        debug!(count = self.diagrams.len(), "clearing diagram cache");
        self.diagrams.clear();
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    fn record(&self, f: impl FnOnce(&CacheStats)) {
        if self.track_stats {
            f(&self.stats);
        }
    }
}

impl<D: Diagram> Default for InMemoryDiagramCache<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Debug for InMemoryDiagramCache<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryDiagramCache")
            .field("len", &self.diagrams.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl<D: Diagram> DiagramCache for InMemoryDiagramCache<D> {
    type Diagram = D;

    fn store(&mut self, diagram: D) -> Result<()> {
        let id = diagram_id(&diagram)?;
        let replaced = self.diagrams.insert(id.clone(), Arc::new(diagram)).is_some();
        self.record(CacheStats::record_store);
        debug!(%id, replaced, "stored diagram");
        Ok(())
    }

    fn has(&self, diagram: &D) -> Result<bool> {
        let id = diagram_id(diagram)?;
        Ok(self.diagrams.contains_key(&id))
    }

    fn get(&self, diagram: &D) -> Result<Option<Arc<D>>> {
        let id = diagram_id(diagram)?;
        match self.diagrams.get(&id) {
            Some(cached) => {
                self.record(CacheStats::record_hit);
                trace!(%id, "diagram cache hit");
                Ok(Some(Arc::clone(cached)))
            }
            None => {
                self.record(CacheStats::record_miss);
                trace!(%id, "diagram cache miss");
                Ok(None)
            }
        }
    }

    fn get_all(&self) -> Result<Vec<Arc<D>>> {
        Ok(self.diagrams.values().cloned().collect())
    }

    fn delete(&mut self, diagram: &D) -> Result<()> {
        let id = diagram_id(diagram)?;
        if self.diagrams.remove(&id).is_some() {
            self.record(CacheStats::record_delete);
            debug!(%id, "deleted diagram");
        }
        Ok(())
    }
}

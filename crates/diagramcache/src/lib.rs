//! # diagramcache
//!
//! Key-value cache for diagram artifacts, keyed by a content-derived ID.
//!
//! ## Architecture
//! - **Diagram**: anything that can compute a stable ID (`MarkupDiagram` hashes its description)
//! - **DiagramCache**: Store / Has / Get / GetAll / Delete contract
//! - **InMemoryDiagramCache**: AHash map from ID to diagram, no eviction
//! - **SharedDiagramCache**: `RwLock`-guarded handle for use across threads
//!
//! ```
//! use diagramcache::{DiagramCache, InMemoryDiagramCache, MarkupDiagram};
//!
//! let mut cache = InMemoryDiagramCache::new();
//! let description = MarkupDiagram::new("flowchart", "graph TD; A-->B");
//!
//! cache.store(description.clone().with_output(b"A -> B".to_vec()))?;
//! let cached = cache.get(&description)?.expect("stored above");
//! assert!(cached.is_rendered());
//! # Ok::<(), diagramcache::Error>(())
//! ```

#![warn(missing_docs)]

mod cache;
mod config;
mod diagram;
mod error;
mod markup;
mod shared;
mod stats;

pub use cache::{new_diagram_cache, DiagramCache, InMemoryDiagramCache};
pub use config::CacheConfig;
pub use diagram::Diagram;
pub use error::{BoxError, Error, Result};
pub use markup::MarkupDiagram;
pub use shared::SharedDiagramCache;
pub use stats::CacheStats;

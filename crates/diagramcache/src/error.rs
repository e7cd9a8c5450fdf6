//! Error types for diagramcache

use thiserror::Error;

/// Boxed error produced by a diagram's ID computation
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for diagramcache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache operations
///
/// Cache misses are not errors: they surface as `Ok(None)` / `Ok(false)`.
#[derive(Error, Debug)]
pub enum Error {
    /// The diagram could not produce its ID
    #[error("cannot get diagram ID")]
    Identifier {
        /// The diagram's own failure
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// Wrap a diagram's ID computation failure
    pub fn identifier<E>(source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Identifier {
            source: source.into(),
        }
    }
}

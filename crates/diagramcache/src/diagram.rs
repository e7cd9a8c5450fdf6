//! The diagram contract consumed by the cache

/// A cacheable diagram artifact.
///
/// The cache treats diagrams as opaque: the only thing it asks of one is a
/// stable identifier derived from its content. Two values describing the
/// same diagram must yield the same ID, whether or not they carry a rendered
/// result.
pub trait Diagram {
    /// Failure raised when the ID cannot be derived
    type Error: std::error::Error + Send + Sync + 'static;

    /// Compute the diagram's stable identifier
    fn id(&self) -> Result<String, Self::Error>;
}

impl<D: Diagram + ?Sized> Diagram for std::sync::Arc<D> {
    type Error = D::Error;

    fn id(&self) -> Result<String, Self::Error> {
        (**self).id()
    }
}

impl<D: Diagram + ?Sized> Diagram for Box<D> {
    type Error = D::Error;

    fn id(&self) -> Result<String, Self::Error> {
        (**self).id()
    }
}

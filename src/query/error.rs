use crate::shape::ShapeKind;

/// Error indicating that the overlap test is not supported between two shape kinds.
///
/// Only the polygon–polygon, polygon–line, line–line and polygon–point pairs are supported,
/// in either order. Submitting any other pair is an integration error: the physics step
/// must filter these pairs out before the narrow phase.
///
/// Custom pairs can be supported by chaining a dispatcher in front of the default one, see
/// [`QueryDispatcher::chain`](crate::query::QueryDispatcher::chain).
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("cannot test collision between shape {kind1} and {kind2}")]
pub struct Unsupported {
    /// The kind of the first shape.
    pub kind1: ShapeKind,
    /// The kind of the second shape.
    pub kind2: ShapeKind,
}

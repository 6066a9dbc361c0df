use crate::shape::ShapeKind;

/// Error raised when building a shape from an ill-formed vertex buffer.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// The flat buffer does not contain a whole number of `(x, y)` pairs.
    #[error("a flat vertex buffer must contain an even number of coordinates, found {0}.")]
    OddCoordinateCount(usize),
    /// A line or point shape was given the wrong number of vertices.
    #[error("a {kind} shape must have exactly {expected} vertices, found {found}.")]
    WrongVertexCount {
        /// The kind of the shape being built.
        kind: ShapeKind,
        /// The number of vertices this kind requires.
        expected: usize,
        /// The number of vertices provided.
        found: usize,
    },
    /// A polygon was given fewer than three vertices.
    #[error("a polygon must have at least 3 vertices, found {found}.")]
    NotEnoughVertices {
        /// The number of vertices provided.
        found: usize,
    },
    /// A coordinate is infinite or NaN.
    #[error("the coordinate {0} is not finite.")]
    NonFiniteCoordinate(usize),
}

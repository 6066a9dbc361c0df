use crate::math::{Point, Real};
use crate::shape::flat_vertices::check_flat_vertices;
use crate::shape::{ShapeError, ShapeKind};

/// A shape made of a single vertex.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct PointShape {
    /// The location of the shape.
    pub point: Point<Real>,
}

impl PointShape {
    /// Creates a new point shape.
    #[inline]
    pub fn new(point: Point<Real>) -> Self {
        Self { point }
    }

    /// Creates a new point shape from a flat `(x, y)` coordinate buffer.
    pub fn from_flat(coords: &[Real]) -> Result<Self, ShapeError> {
        match (check_flat_vertices(coords)?, coords) {
            (1, &[x, y]) => Ok(Self::new(Point::new(x, y))),
            (found, _) => Err(ShapeError::WrongVertexCount {
                kind: ShapeKind::Point,
                expected: 1,
                found,
            }),
        }
    }
}

impl From<Point<Real>> for PointShape {
    fn from(point: Point<Real>) -> Self {
        Self::new(point)
    }
}

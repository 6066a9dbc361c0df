//! Definition of the segment shape.

use crate::math::{Point, Real};
use crate::shape::flat_vertices::check_flat_vertices;
use crate::shape::{ShapeError, ShapeKind};

/// A segment shape, the "line" of the overlap tests.
///
/// The segment is open: it only joins `a` to `b` and has no interior.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// Creates a new segment from a flat `(xa, ya, xb, yb)` coordinate buffer.
    pub fn from_flat(coords: &[Real]) -> Result<Segment, ShapeError> {
        match (check_flat_vertices(coords)?, coords) {
            (2, &[xa, ya, xb, yb]) => Ok(Segment::new(Point::new(xa, ya), Point::new(xb, yb))),
            (found, _) => Err(ShapeError::WrongVertexCount {
                kind: ShapeKind::Line,
                expected: 2,
                found,
            }),
        }
    }

    /// The two endpoints of this segment, as a vertex sequence.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 2] {
        [self.a, self.b]
    }
}

impl From<[Point<Real>; 2]> for Segment {
    fn from(arr: [Point<Real>; 2]) -> Self {
        Segment::new(arr[0], arr[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_from_flat() {
        let segment = Segment::from_flat(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(segment.a, Point::new(1.0, 2.0));
        assert_eq!(segment.b, Point::new(3.0, 4.0));
        assert_eq!(
            segment.vertices(),
            [Point::new(1.0, 2.0), Point::new(3.0, 4.0)]
        );
        assert_eq!(
            Segment::from_flat(&[1.0, 2.0]),
            Err(ShapeError::WrongVertexCount {
                kind: ShapeKind::Line,
                expected: 2,
                found: 1
            })
        );
    }
}

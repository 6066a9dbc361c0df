use crate::math::Real;
use crate::shape::{PointShape, Polygon, Segment, ShapeError, ShapeKind};

/// An owned shape of any kind.
///
/// This is the natural representation of a body that stores its geometry as a kind tag
/// next to a flat coordinate buffer.
#[derive(PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum TaggedShape {
    /// A polygon.
    Polygon(Polygon),
    /// A line.
    Line(Segment),
    /// A point.
    Point(PointShape),
}

impl TaggedShape {
    /// Builds a shape of the given kind from a flat `(x0, y0, x1, y1, …)` coordinate buffer.
    pub fn from_flat(kind: ShapeKind, coords: &[Real]) -> Result<Self, ShapeError> {
        match kind {
            ShapeKind::Polygon => Polygon::from_flat(coords).map(TaggedShape::Polygon),
            ShapeKind::Line => Segment::from_flat(coords).map(TaggedShape::Line),
            ShapeKind::Point => PointShape::from_flat(coords).map(TaggedShape::Point),
        }
    }
}

impl From<Polygon> for TaggedShape {
    fn from(polygon: Polygon) -> Self {
        TaggedShape::Polygon(polygon)
    }
}

impl From<Segment> for TaggedShape {
    fn from(segment: Segment) -> Self {
        TaggedShape::Line(segment)
    }
}

impl From<PointShape> for TaggedShape {
    fn from(point: PointShape) -> Self {
        TaggedShape::Point(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    #[test]
    fn tagged_shape_from_flat() {
        let point = TaggedShape::from_flat(ShapeKind::Point, &[3.0, 4.0]).unwrap();
        assert_eq!(point.shape_kind(), ShapeKind::Point);

        let line = TaggedShape::from_flat(ShapeKind::Line, &[0.0, 0.0, 1.0, 1.0]).unwrap();
        assert_eq!(line.shape_kind(), ShapeKind::Line);

        let polygon =
            TaggedShape::from_flat(ShapeKind::Polygon, &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0]).unwrap();
        assert_eq!(polygon.shape_kind(), ShapeKind::Polygon);
    }

    #[test]
    fn tagged_shape_rejects_wrong_lengths() {
        assert_eq!(
            TaggedShape::from_flat(ShapeKind::Point, &[0.0, 0.0, 1.0, 1.0]),
            Err(ShapeError::WrongVertexCount {
                kind: ShapeKind::Point,
                expected: 1,
                found: 2
            })
        );
        assert_eq!(
            TaggedShape::from_flat(ShapeKind::Line, &[0.0, 0.0, 1.0]),
            Err(ShapeError::OddCoordinateCount(3))
        );
        assert_eq!(
            TaggedShape::from_flat(ShapeKind::Polygon, &[0.0, 0.0, 1.0, 1.0]),
            Err(ShapeError::NotEnoughVertices { found: 2 })
        );
    }
}

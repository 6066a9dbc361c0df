use crate::shape::{PointShape, Polygon, Segment, TaggedShape};
use core::fmt;

/// Enum representing the kind of a shape.
///
/// Only four unordered pairs of kinds can be tested against each other:
/// polygon–polygon, polygon–line, line–line and polygon–point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ShapeKind {
    /// A closed polygon with at least three vertices.
    Polygon,
    /// An open segment with exactly two vertices.
    Line,
    /// A single vertex.
    Point,
}

impl ShapeKind {
    /// The lowercase name of this kind, as used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Polygon => "polygon",
            ShapeKind::Line => "line",
            ShapeKind::Point => "point",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Copy, Clone, Debug)]
/// Enum representing the shape with its actual type.
pub enum TypedShape<'a> {
    /// A polygon shape.
    Polygon(&'a Polygon),
    /// A line shape.
    Line(&'a Segment),
    /// A point shape.
    Point(&'a PointShape),
}

impl TypedShape<'_> {
    /// The kind of the shape referenced by `self`.
    pub fn shape_kind(&self) -> ShapeKind {
        match self {
            TypedShape::Polygon(_) => ShapeKind::Polygon,
            TypedShape::Line(_) => ShapeKind::Line,
            TypedShape::Point(_) => ShapeKind::Point,
        }
    }
}

/// Trait implemented by shapes usable by the overlap tests.
///
/// This is the handle the physics step hands to [`crate::query::test_collision`]: a kind tag
/// plus read access to the vertices. Implementors must not change their geometry while a
/// test is running, which the borrow checker guarantees for shapes owned by the caller.
pub trait Shape: Send + Sync + fmt::Debug {
    /// Gets the kind tag of this shape.
    fn shape_kind(&self) -> ShapeKind;

    /// Gets the underlying shape as an enum.
    fn as_typed_shape(&self) -> TypedShape<'_>;
}

impl Shape for Polygon {
    fn shape_kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Polygon(self)
    }
}

impl Shape for Segment {
    fn shape_kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Line(self)
    }
}

impl Shape for PointShape {
    fn shape_kind(&self) -> ShapeKind {
        ShapeKind::Point
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Point(self)
    }
}

impl Shape for TaggedShape {
    fn shape_kind(&self) -> ShapeKind {
        self.as_typed_shape().shape_kind()
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        match self {
            TaggedShape::Polygon(polygon) => TypedShape::Polygon(polygon),
            TaggedShape::Line(segment) => TypedShape::Line(segment),
            TaggedShape::Point(point) => TypedShape::Point(point),
        }
    }
}

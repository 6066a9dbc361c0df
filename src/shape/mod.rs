//! Shapes supported by overlap2d.
//!
//! Every shape is expressed in world coordinates: transforms are applied by the caller
//! before the overlap tests run.

pub use self::point_shape::PointShape;
pub use self::polygon::Polygon;
pub use self::segment::Segment;
#[doc(inline)]
pub use self::shape::{Shape, ShapeKind, TypedShape};
pub use self::shape_error::ShapeError;
pub use self::tagged_shape::TaggedShape;

mod flat_vertices;
mod point_shape;
mod polygon;
mod segment;
mod shape;
mod shape_error;
mod tagged_shape;

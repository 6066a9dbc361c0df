use crate::math::{Point, Real};
use crate::query::details::intersection_test_polygon_point;
use crate::shape::flat_vertices::{check_finite, check_flat_vertices, flat_points};
use crate::shape::ShapeError;
use alloc::vec::Vec;

/// A closed polygon.
///
/// Two consecutive vertices determine an edge, and the last vertex is implicitly connected
/// back to the first one. The polygon may be convex or concave, and may be wound in either
/// direction: the overlap tests rely on crossing parity only.
#[derive(PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Polygon {
    vertices: Vec<Point<Real>>,
}

impl Polygon {
    /// Creates a new polygon from its vertices.
    ///
    /// Fails if there are fewer than three vertices, or if any coordinate is not finite.
    pub fn new(vertices: Vec<Point<Real>>) -> Result<Self, ShapeError> {
        if vertices.len() < 3 {
            return Err(ShapeError::NotEnoughVertices {
                found: vertices.len(),
            });
        }

        check_finite(vertices.iter().flat_map(|pt| [pt.x, pt.y]))?;
        Ok(Self { vertices })
    }

    /// Creates a new polygon from a flat `(x0, y0, x1, y1, …)` coordinate buffer.
    pub fn from_flat(coords: &[Real]) -> Result<Self, ShapeError> {
        let found = check_flat_vertices(coords)?;

        if found < 3 {
            return Err(ShapeError::NotEnoughVertices { found });
        }

        Ok(Self {
            vertices: flat_points(coords).collect(),
        })
    }

    /// The vertices of this polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// Tests if the given point lies inside of this polygon.
    ///
    /// See [`intersection_test_polygon_point`] for the treatment of points lying exactly on
    /// the boundary.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        intersection_test_polygon_point(&self.vertices, pt)
    }
}

use crate::math::{Point, Real};
use crate::utils::{edge_crossing, polygon_edges, CrossingSide};

/// Tests if the given point lies inside of a closed polygon, using edge-crossing parity.
///
/// Every edge crossing the horizontal line through `point` at or to the left of it flips the
/// inside flag. The straddle test is half-open (see [`edge_crossing`]), so a point lying exactly
/// on the boundary is classified deterministically but not symmetrically: it counts as inside
/// on some edges and as outside on others.
///
/// The polygon may be concave or self-intersecting, and wound in either direction.
pub fn intersection_test_polygon_point(polygon: &[Point<Real>], point: &Point<Real>) -> bool {
    let mut inside = false;

    for (prev, vertex) in polygon_edges(polygon) {
        if edge_crossing(point, vertex, prev) == Some(CrossingSide::Left) {
            inside = !inside;
        }
    }

    inside
}

use crate::math::{Point, Real};
use crate::query::details::intersection_test_polygon_point;
use crate::utils::{edge_crossing, polygon_edges, CrossingSide};

/// Tests if any vertex of `poly1` lies inside of `poly2`.
///
/// Each vertex of `poly1` is tested against `poly2` with the parity rule of
/// [`intersection_test_polygon_point`]. This only detects containment: two polygons
/// crossing each other without any vertex of `poly1` inside of `poly2` (like the two
/// triangles of a star of David) are reported as disjoint. Testing both argument orders
/// catches containment in either direction, but still cannot see a pure mutual crossing.
///
/// This is the fast path. See [`intersection_test_polygon_polygon_full`] for a test that
/// tolerates crossings.
pub fn intersection_test_polygon_polygon(poly1: &[Point<Real>], poly2: &[Point<Real>]) -> bool {
    poly1.iter().any(|pt| intersection_test_polygon_point(poly2, pt))
}

/// Tests if `poly1` overlaps `poly2`, tolerating edge crossings without containment.
///
/// For each vertex of `poly1`, the edges of `poly2` crossing the vertex's horizontal line
/// are counted, separately for crossings at or to the left of the vertex and for crossings
/// to its right. Counts are accumulated over all the vertices of `poly1`.
///
/// * As soon as one vertex has an odd number of left crossings, it lies inside of `poly2`
///   and `true` is returned.
/// * Otherwise, `true` is returned iff the total number of left crossings is nonzero and
///   equal to the total number of right crossings.
///
/// The second rule is a heuristic, not an exact intersection test. It catches the
/// symmetric configurations where `poly1` passes through `poly2` (for example a segment
/// whose endpoints are on both sides of a polygon) but may misclassify asymmetric ones.
/// Callers depend on this exact rule: do not replace it by a different crossing test.
///
/// `poly1` may be any vertex sequence, including the two endpoints of a segment.
pub fn intersection_test_polygon_polygon_full(
    poly1: &[Point<Real>],
    poly2: &[Point<Real>],
) -> bool {
    let mut left_count = 0usize;
    let mut right_count = 0usize;

    for pt in poly1 {
        let mut vertex_left_count = 0usize;

        for (prev, vertex) in polygon_edges(poly2) {
            match edge_crossing(pt, vertex, prev) {
                Some(CrossingSide::Left) => vertex_left_count += 1,
                Some(CrossingSide::Right) => right_count += 1,
                None => {}
            }
        }

        left_count += vertex_left_count;

        if vertex_left_count % 2 != 0 {
            return true;
        }
    }

    left_count != 0 && left_count == right_count
}

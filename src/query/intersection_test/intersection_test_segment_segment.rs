use crate::shape::Segment;
use crate::utils::edge_crossing;

/// Intersection test between two segments.
///
/// The test runs in two passes. The first pass classifies each endpoint of `seg1` with
/// respect to the line through `seg2`: an endpoint only gets a side if its ordinate
/// straddles the ordinates of `seg2` (with the half-open rule of [`edge_crossing`]).
/// If the two endpoints of `seg1` get opposite sides, `true` is returned right away.
/// Otherwise the result of the second pass, the same test with the segments swapped,
/// is returned.
///
/// Endpoints lying exactly at the lower end of the other segment's ordinates get no side.
/// For example, the two diagonals of a square do not intersect according to this test, while
/// any pair of segments crossing strictly inside of their ordinate ranges do.
pub fn intersection_test_segment_segment(seg1: &Segment, seg2: &Segment) -> bool {
    endpoints_straddle_line(seg1, seg2) || endpoints_straddle_line(seg2, seg1)
}

/// Tests if the endpoints of `seg` lie on opposite sides of the line through `line`.
#[inline]
fn endpoints_straddle_line(seg: &Segment, line: &Segment) -> bool {
    let side_a = edge_crossing(&seg.a, &line.a, &line.b);
    let side_b = edge_crossing(&seg.b, &line.a, &line.b);

    match (side_a, side_b) {
        (Some(side_a), Some(side_b)) => side_a.is_opposite(side_b),
        _ => false,
    }
}

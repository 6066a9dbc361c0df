use crate::math::{Point, Real};

/// The side of a probe point on which an edge crosses the probe's horizontal line.
///
/// This is the single sign convention used by every test of this crate. Let
/// `edge_x` be the abscissa of the edge at the height of the probe:
///
/// * the crossing is [`CrossingSide::Left`] if `edge_x <= probe.x`,
/// * the crossing is [`CrossingSide::Right`] if `edge_x > probe.x`.
///
/// An edge crossing exactly through the probe is therefore `Left`. Counting `Left`
/// crossings gives the parity of a ray cast from the probe toward `-x`, which does
/// not depend on the winding order of the polygon: clockwise and counter-clockwise
/// polygons give the same answers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CrossingSide {
    /// The edge crosses at or to the left of the probe.
    Left = 1,
    /// The edge crosses strictly to the right of the probe.
    Right = 2,
}

impl CrossingSide {
    /// Returns `true` if `self` and `other` are distinct sides.
    #[inline]
    pub fn is_opposite(self, other: CrossingSide) -> bool {
        self != other
    }
}

/// Tests whether the edge `prev -> vertex` crosses the horizontal line passing through `probe`,
/// and on which side of `probe` it does.
///
/// The straddle test is half-open: one endpoint must lie strictly below `probe.y` while the
/// other lies at or above it. A vertex shared by two consecutive edges is thus counted once,
/// and horizontal edges never cross, so the interpolation below never divides by zero.
///
/// Returns `None` if the edge does not straddle the probe's height.
#[inline]
pub fn edge_crossing(
    probe: &Point<Real>,
    vertex: &Point<Real>,
    prev: &Point<Real>,
) -> Option<CrossingSide> {
    let straddles =
        (vertex.y < probe.y && prev.y >= probe.y) || (prev.y < probe.y && vertex.y >= probe.y);

    if !straddles {
        return None;
    }

    // The sign of the cross product between (probe - vertex) and (prev - vertex), written
    // as an interpolation of the edge abscissa at the probe's height.
    let edge_x = vertex.x + (probe.y - vertex.y) / (prev.y - vertex.y) * (prev.x - vertex.x);

    if edge_x <= probe.x {
        Some(CrossingSide::Left)
    } else {
        Some(CrossingSide::Right)
    }
}

/// Iterates through the edges of a closed polygon as `(prev, vertex)` pairs.
///
/// The first edge yielded is the closing one, from the last vertex to the first.
#[inline]
pub fn polygon_edges(
    poly: &[Point<Real>],
) -> impl Iterator<Item = (&Point<Real>, &Point<Real>)> + '_ {
    poly.last().into_iter().chain(poly.iter()).zip(poly.iter())
}

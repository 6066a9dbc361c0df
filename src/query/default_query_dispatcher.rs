use crate::query::details::{
    intersection_test_polygon_point, intersection_test_polygon_polygon,
    intersection_test_polygon_polygon_full, intersection_test_segment_segment,
};
use crate::query::{QueryDispatcher, Unsupported};
use crate::shape::{Shape, TypedShape};

/// The tester used between two polygons.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum PolygonPolygonStrategy {
    /// Vertex containment in both directions, see
    /// [`intersection_test_polygon_polygon`].
    ///
    /// Fast, but blind to polygons crossing each other without containing any vertex of
    /// each other.
    #[default]
    OneSided,
    /// Left/right crossing counts in both directions, see
    /// [`intersection_test_polygon_polygon_full`].
    Full,
}

/// A dispatcher that exposes the built-in overlap tests.
///
/// The shape kinds are matched as an unordered pair:
///
/// | pair | test |
/// |------|------|
/// | polygon–polygon | containment of the vertices of each polygon in the other, per [`PolygonPolygonStrategy`] |
/// | polygon–line | [`intersection_test_polygon_polygon_full`] of the line's endpoints against the polygon |
/// | line–line | [`intersection_test_segment_segment`] |
/// | polygon–point | [`intersection_test_polygon_point`] of the point against the polygon |
///
/// The polygon–line and polygon–point tests only look at the line or point against the
/// polygon, never the other way around, since a line or a point has no interior to contain
/// a polygon vertex. Any other pair yields [`Unsupported`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DefaultQueryDispatcher {
    /// The tester used between two polygons.
    pub polygon_polygon: PolygonPolygonStrategy,
}

impl DefaultQueryDispatcher {
    /// Creates a dispatcher using the given polygon–polygon strategy.
    pub const fn new(polygon_polygon: PolygonPolygonStrategy) -> Self {
        Self { polygon_polygon }
    }
}

impl QueryDispatcher for DefaultQueryDispatcher {
    fn intersection_test(&self, g1: &dyn Shape, g2: &dyn Shape) -> Result<bool, Unsupported> {
        let (shape1, shape2) = (g1.as_typed_shape(), g2.as_typed_shape());
        log::trace!(
            "intersection test between {} and {}",
            shape1.shape_kind(),
            shape2.shape_kind()
        );

        match (shape1, shape2) {
            (TypedShape::Polygon(p1), TypedShape::Polygon(p2)) => {
                let (v1, v2) = (p1.vertices(), p2.vertices());
                Ok(match self.polygon_polygon {
                    PolygonPolygonStrategy::OneSided => {
                        intersection_test_polygon_polygon(v1, v2)
                            || intersection_test_polygon_polygon(v2, v1)
                    }
                    PolygonPolygonStrategy::Full => {
                        intersection_test_polygon_polygon_full(v1, v2)
                            || intersection_test_polygon_polygon_full(v2, v1)
                    }
                })
            }
            (TypedShape::Polygon(polygon), TypedShape::Line(segment))
            | (TypedShape::Line(segment), TypedShape::Polygon(polygon)) => {
                let (ends, poly) = (segment.vertices(), polygon.vertices());
                Ok(intersection_test_polygon_polygon_full(&ends, poly))
            }
            (TypedShape::Line(s1), TypedShape::Line(s2)) => {
                Ok(intersection_test_segment_segment(s1, s2))
            }
            (TypedShape::Polygon(polygon), TypedShape::Point(point))
            | (TypedShape::Point(point), TypedShape::Polygon(polygon)) => {
                let poly = polygon.vertices();
                Ok(intersection_test_polygon_point(poly, &point.point))
            }
            (shape1, shape2) => Err(Unsupported {
                kind1: shape1.shape_kind(),
                kind2: shape2.shape_kind(),
            }),
        }
    }
}

//! Implementation details of the `intersection_test` function.

pub use self::intersection_test::{intersection_test, test_collision, test_collision_with};
pub use self::intersection_test_polygon_point::intersection_test_polygon_point;
pub use self::intersection_test_polygon_polygon::{
    intersection_test_polygon_polygon, intersection_test_polygon_polygon_full,
};
pub use self::intersection_test_segment_segment::intersection_test_segment_segment;

mod intersection_test;
mod intersection_test_polygon_point;
mod intersection_test_polygon_polygon;
mod intersection_test_segment_segment;

//! Non-persistent overlap queries.
//!
//! # General cases
//! The most general functions provided by this module are:
//!
//! * [`query::test_collision()`](test_collision) to decide if two shapes overlap, as the
//!   physics step does.
//! * [`query::intersection_test()`](intersection_test) for the same decision, reporting
//!   unsupported pairs of shape kinds as an error instead.
//!
//! # Specific cases
//! The functions exported by the `details` submodule test pairs of shapes known at
//! compile-time, directly from their vertices. They have the form
//! `intersection_test_[shape1]_[shape2]()`.

pub use self::default_query_dispatcher::{DefaultQueryDispatcher, PolygonPolygonStrategy};
pub use self::error::Unsupported;
pub use self::intersection_test::{intersection_test, test_collision, test_collision_with};
pub use self::query_dispatcher::{QueryDispatcher, QueryDispatcherChain};

mod default_query_dispatcher;
mod error;
mod intersection_test;
mod query_dispatcher;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::intersection_test::{
        intersection_test_polygon_point, intersection_test_polygon_polygon,
        intersection_test_polygon_polygon_full, intersection_test_segment_segment,
    };
}

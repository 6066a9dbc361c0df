//! Query dispatcher system for extensible overlap tests.
//!
//! A query dispatcher knows how to test a pair of shapes: it examines the kinds of both
//! shapes, selects the tester for that pair, and runs it. The free functions of
//! [`crate::query`] use the [`DefaultQueryDispatcher`](crate::query::DefaultQueryDispatcher).
//!
//! Dispatchers can be chained: if the first one returns [`Unsupported`], the second one is
//! tried with the same arguments.
//!
//! ```
//! # #[cfg(feature = "f32")] {
//! use overlap2d::na::Point2;
//! use overlap2d::query::{DefaultQueryDispatcher, QueryDispatcher, Unsupported};
//! use overlap2d::shape::{PointShape, Segment, Shape, TypedShape};
//!
//! /// Points never touch lines.
//! struct LinePointDispatcher;
//!
//! impl QueryDispatcher for LinePointDispatcher {
//!     fn intersection_test(&self, g1: &dyn Shape, g2: &dyn Shape) -> Result<bool, Unsupported> {
//!         match (g1.as_typed_shape(), g2.as_typed_shape()) {
//!             (TypedShape::Line(_), TypedShape::Point(_))
//!             | (TypedShape::Point(_), TypedShape::Line(_)) => Ok(false),
//!             _ => Err(Unsupported { kind1: g1.shape_kind(), kind2: g2.shape_kind() }),
//!         }
//!     }
//! }
//!
//! let dispatcher = DefaultQueryDispatcher::default().chain(LinePointDispatcher);
//! let line = Segment::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
//! let point = PointShape::new(Point2::new(0.5, 0.5));
//! assert_eq!(dispatcher.intersection_test(&line, &point), Ok(false));
//! # }
//! ```

use crate::query::Unsupported;
use crate::shape::Shape;

/// Dispatcher for pairwise overlap tests between shapes.
///
/// Dispatchers must be `Send + Sync` so that one instance can serve overlap tests running
/// on several threads.
pub trait QueryDispatcher: Send + Sync {
    /// Tests whether two shapes are overlapping.
    ///
    /// Returns `Err(Unsupported)` if this dispatcher does not know how to test this pair of
    /// shape kinds.
    fn intersection_test(&self, g1: &dyn Shape, g2: &dyn Shape) -> Result<bool, Unsupported>;

    /// Construct a `QueryDispatcher` that falls back on `other` for cases not handled by `self`.
    fn chain<U: QueryDispatcher>(self, other: U) -> QueryDispatcherChain<Self, U>
    where
        Self: Sized,
    {
        QueryDispatcherChain(self, other)
    }
}

/// The composition of two dispatchers.
#[derive(Copy, Clone, Debug)]
pub struct QueryDispatcherChain<T, U>(T, U);

impl<T, U> QueryDispatcher for QueryDispatcherChain<T, U>
where
    T: QueryDispatcher,
    U: QueryDispatcher,
{
    fn intersection_test(&self, g1: &dyn Shape, g2: &dyn Shape) -> Result<bool, Unsupported> {
        self.0
            .intersection_test(g1, g2)
            .or_else(|_| self.1.intersection_test(g1, g2))
    }
}

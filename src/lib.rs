/*!
overlap2d
=========

**overlap2d** is a narrow-phase 2D overlap test library written with the rust
programming language.

Given two shapes that already passed a broad phase, it decides whether they
currently overlap. Shapes are polygons, segments ("lines") or single points,
all expressed in the same world frame. No contact point, normal or penetration
depth is computed.

```
# #[cfg(feature = "f32")] {
use overlap2d::na::Point2;
use overlap2d::query;
use overlap2d::shape::{PointShape, Polygon, Segment};

let square = Polygon::from_flat(&[0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0]).unwrap();
let inside = PointShape::new(Point2::new(5.0, 5.0));
let far = Segment::new(Point2::new(20.0, 20.0), Point2::new(30.0, 35.0));

assert!(query::test_collision(&square, &inside));
assert!(!query::test_collision(&square, &far));
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point2, Vector2};

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;
}

//! Low-level geometric predicates shared by the overlap tests.

pub use self::edge_crossing::{edge_crossing, polygon_edges, CrossingSide};

mod edge_crossing;

use crate::query::{DefaultQueryDispatcher, QueryDispatcher, Unsupported};
use crate::shape::Shape;

/// Tests whether two shapes are overlapping.
///
/// Shapes are tested in world coordinates. Touching shapes are reported according to the
/// half-open boundary rules of the individual tests, see [`crate::query::details`].
///
/// # Returns
///
/// * `Ok(true)` - Shapes are overlapping
/// * `Ok(false)` - Shapes are not overlapping
/// * `Err(Unsupported)` - This pair of shape kinds is not supported
pub fn intersection_test(g1: &dyn Shape, g2: &dyn Shape) -> Result<bool, Unsupported> {
    DefaultQueryDispatcher::default().intersection_test(g1, g2)
}

/// Tests whether two shapes are overlapping, treating unsupported pairs as a programming error.
///
/// This is the entry point of the physics step. An unsupported pair of shape kinds is logged
/// as an error naming both kinds and panics in debug builds. In release builds, `false` is
/// returned so that the simulation degrades to "no collision".
pub fn test_collision(g1: &dyn Shape, g2: &dyn Shape) -> bool {
    test_collision_with(&DefaultQueryDispatcher::default(), g1, g2)
}

/// Same as [`test_collision`], using the given dispatcher.
pub fn test_collision_with<D: QueryDispatcher + ?Sized>(
    dispatcher: &D,
    g1: &dyn Shape,
    g2: &dyn Shape,
) -> bool {
    match dispatcher.intersection_test(g1, g2) {
        Ok(overlap) => overlap,
        Err(err) => {
            log::error!("{err}");

            if cfg!(debug_assertions) {
                panic!("{err}");
            }

            false
        }
    }
}

use crate::math::{Point, Real, DIM};
use crate::shape::ShapeError;

/// Checks that `coords` is a well-formed `(x0, y0, x1, y1, …)` buffer.
///
/// Returns the number of vertices of the buffer.
pub(crate) fn check_flat_vertices(coords: &[Real]) -> Result<usize, ShapeError> {
    if coords.len() % DIM != 0 {
        return Err(ShapeError::OddCoordinateCount(coords.len()));
    }

    check_finite(coords.iter().copied())?;
    Ok(coords.len() / DIM)
}

/// Returns the index of the first non-finite coordinate, if any, as an error.
pub(crate) fn check_finite(coords: impl Iterator<Item = Real>) -> Result<(), ShapeError> {
    for (i, coord) in coords.enumerate() {
        if !coord.is_finite() {
            return Err(ShapeError::NonFiniteCoordinate(i));
        }
    }

    Ok(())
}

/// Reads consecutive coordinate pairs as points.
///
/// The buffer must have been validated by [`check_flat_vertices`].
pub(crate) fn flat_points(coords: &[Real]) -> impl Iterator<Item = Point<Real>> + '_ {
    coords.chunks_exact(DIM).map(|xy| Point::new(xy[0], xy[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn flat_buffer_validation() {
        assert_eq!(check_flat_vertices(&[]), Ok(0));
        assert_eq!(check_flat_vertices(&[1.0, 2.0, 3.0, 4.0]), Ok(2));
        assert_eq!(
            check_flat_vertices(&[1.0, 2.0, 3.0]),
            Err(ShapeError::OddCoordinateCount(3))
        );
        assert_eq!(
            check_flat_vertices(&[1.0, 2.0, Real::NAN, 4.0]),
            Err(ShapeError::NonFiniteCoordinate(2))
        );
        assert_eq!(
            check_flat_vertices(&[Real::INFINITY, 2.0]),
            Err(ShapeError::NonFiniteCoordinate(0))
        );
    }

    #[test]
    fn flat_points_pairs_coordinates() {
        let points: Vec<_> = flat_points(&[1.0, 2.0, 3.0, 4.0]).collect();
        assert_eq!(points, [Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
    }
}

use overlap2d::math::Real;
use overlap2d::query::details::{
    intersection_test_polygon_polygon, intersection_test_polygon_polygon_full,
};
use overlap2d::query::{self, DefaultQueryDispatcher, PolygonPolygonStrategy, QueryDispatcher};
use overlap2d::shape::Polygon;

fn rect(x1: Real, y1: Real, x2: Real, y2: Real) -> Polygon {
    Polygon::from_flat(&[x1, y1, x2, y1, x2, y2, x1, y2]).unwrap()
}

fn square(x: Real, y: Real, size: Real) -> Polygon {
    rect(x, y, x + size, y + size)
}

#[test]
fn far_apart_unit_squares_do_not_collide() {
    let a = square(0.0, 0.0, 1.0);
    let b = square(50.0, -20.0, 1.0);
    assert!(!query::test_collision(&a, &b));
    assert!(!query::test_collision(&b, &a));
}

#[test]
fn nested_squares_collide_in_both_orders() {
    let outer = square(0.0, 0.0, 10.0);
    let inner = square(3.0, 3.0, 2.0);
    assert!(query::test_collision(&outer, &inner));
    assert!(query::test_collision(&inner, &outer));
}

#[test]
fn overlapping_squares_collide() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(5.0, 5.0, 10.0);
    assert!(query::test_collision(&a, &b));
}

#[test]
fn identical_square_collides_with_itself() {
    let a = square(0.0, 0.0, 10.0);
    let vertices = a.vertices();
    assert!(intersection_test_polygon_polygon(vertices, vertices));
    assert!(query::test_collision(&a, &a.clone()));
}

#[test]
fn mutual_crossing_needs_the_full_strategy() {
    // A thin horizontal bar crossing a thin vertical bar: no vertex of either bar lies
    // inside of the other.
    let horizontal = rect(-10.0, -1.0, 10.0, 1.0);
    let vertical = rect(-1.0, -10.0, 1.0, 10.0);
    let (h, v) = (horizontal.vertices(), vertical.vertices());

    assert!(!intersection_test_polygon_polygon(h, v));
    assert!(!intersection_test_polygon_polygon(v, h));
    assert!(!query::test_collision(&horizontal, &vertical));
    assert!(intersection_test_polygon_polygon_full(h, v));

    let full = DefaultQueryDispatcher::new(PolygonPolygonStrategy::Full);
    assert_eq!(full.intersection_test(&horizontal, &vertical), Ok(true));
    assert_eq!(full.intersection_test(&vertical, &horizontal), Ok(true));

    let far = square(100.0, 100.0, 1.0);
    assert_eq!(full.intersection_test(&horizontal, &far), Ok(false));
}

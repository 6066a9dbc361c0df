use overlap2d::math::Real;
use overlap2d::query::{self, DefaultQueryDispatcher, PolygonPolygonStrategy, QueryDispatcher};
use overlap2d::shape::{ShapeKind, TaggedShape};

fn main() {
    // Bodies as the physics step stores them: a kind tag next to a flat coordinate buffer.
    let bodies: [(ShapeKind, Vec<Real>); 5] = [
        (
            ShapeKind::Polygon,
            vec![0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0],
        ),
        (ShapeKind::Polygon, vec![8.0, 8.0, 14.0, 8.0, 14.0, 14.0]),
        (ShapeKind::Line, vec![-5.0, 5.0, 15.0, 5.0]),
        (ShapeKind::Line, vec![2.0, -3.0, 4.0, 12.0]),
        (ShapeKind::Point, vec![3.0, 3.0]),
    ];

    let shapes: Vec<TaggedShape> = bodies
        .iter()
        .map(|(kind, coords)| TaggedShape::from_flat(*kind, coords).unwrap())
        .collect();

    let full = DefaultQueryDispatcher::new(PolygonPolygonStrategy::Full);

    for (i, shape1) in shapes.iter().enumerate() {
        for (j, shape2) in shapes.iter().enumerate().skip(i + 1) {
            match query::intersection_test(shape1, shape2) {
                Ok(overlap) => {
                    let robust = full.intersection_test(shape1, shape2) == Ok(true);
                    println!("bodies {i} and {j}: overlap: {overlap}, robust overlap: {robust}");
                }
                Err(err) => println!("bodies {i} and {j}: {err}"),
            }
        }
    }
}

use anyhow::Result;
use physics2d::{Aabb, PhysicsError, Shape, ShapeKind, Vector2};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn v(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y)
}

#[test]
fn winding_is_normalized_to_counter_clockwise() -> Result<()> {
    let ccw = Shape::polygon(vec![v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0)])?;
    let cw = Shape::polygon(vec![v(0.0, 0.0), v(0.0, 1.0), v(1.0, 0.0)])?;
    let ccw = ccw.as_polygon().expect("polygon");
    let cw = cw.as_polygon().expect("polygon");

    assert!(ccw.area() > 0.0);
    assert!((cw.area() - ccw.area()).abs() < 1e-12);
    // Same cyclic order regardless of the input winding.
    let start = cw.vertices().iter().position(|&p| p == ccw.vertices()[0]).expect("shared vertex");
    for i in 0..3 {
        assert_eq!(cw.vertices()[(start + i) % 3], ccw.vertices()[i]);
    }
    Ok(())
}

#[test]
fn right_triangle_ground_truth() -> Result<()> {
    let shape = Shape::polygon(vec![v(0.0, 0.0), v(0.0, 1.0), v(1.0, 0.0)])?;
    assert_eq!(shape.kind(), ShapeKind::Polygon);
    assert!((shape.area() - 0.5).abs() < 1e-12);
    assert!((shape.centroid() - v(1.0 / 3.0, 1.0 / 3.0)).length() < 1e-12);
    assert_eq!(shape.aabb(), Aabb::new(v(0.0, 0.0), v(1.0, 1.0)));
    Ok(())
}

#[test]
fn concave_outline_is_rejected() {
    let result = Shape::polygon(vec![
        v(0.0, 0.0),
        v(0.0, 1.0),
        v(0.5, 0.5),
        v(1.0, 1.0),
        v(1.0, 0.0),
    ]);
    assert_eq!(result.unwrap_err(), PhysicsError::NonConvexPolygon);
}

#[test]
fn too_few_vertices_is_degenerate() {
    assert_eq!(
        Shape::polygon(vec![v(0.0, 0.0), v(1.0, 1.0)]).unwrap_err(),
        PhysicsError::DegeneratePolygon(2)
    );
}

#[test]
fn translate_and_rotate_keep_cached_geometry_current() -> Result<()> {
    let mut shape = Shape::rectangle(v(0.0, 0.0), 4.0, 2.0)?;
    shape.translate(v(1.0, 1.0));
    assert_eq!(shape.aabb(), Aabb::new(v(-1.0, 0.0), v(3.0, 2.0)));

    shape.rotate(std::f64::consts::FRAC_PI_2);
    let aabb = shape.aabb();
    assert!((shape.centroid() - v(1.0, 1.0)).length() < 1e-12);
    assert!((aabb.width() - 2.0).abs() < 1e-12);
    assert!((aabb.height() - 4.0).abs() < 1e-12);
    assert!((shape.area() - 8.0).abs() < 1e-12);
    Ok(())
}

#[test]
fn random_polygons_are_valid_and_bounded() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let bounds = Aabb::new(v(-5.0, -5.0), v(5.0, 5.0));

    for _ in 0..200 {
        let shape = Shape::random_polygon(&mut rng, bounds, 0.5..2.0, 3..=8)?;
        let polygon = shape.as_polygon().expect("polygon");
        assert!((3..=8).contains(&polygon.vertices().len()));
        assert!(polygon.area() > 0.0);
        // Ellipse diameters are below 2, so any rotation fits a 2x2 box.
        let aabb = polygon.aabb();
        assert!(aabb.width() <= 2.0 + 1e-9 && aabb.height() <= 2.0 + 1e-9);
    }
    Ok(())
}

#[test]
fn random_circles_respect_their_ranges() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(7);
    let bounds = Aabb::new(v(0.0, 0.0), v(10.0, 5.0));

    for _ in 0..200 {
        let shape = Shape::random_circle(&mut rng, bounds, 0.1..1.0)?;
        let circle = shape.as_circle().expect("circle");
        assert!(bounds.contains(circle.center()));
        assert!((0.1..1.0).contains(&circle.radius()));
    }
    Ok(())
}

#[test]
fn random_factories_reject_bad_ranges() {
    let mut rng = StdRng::seed_from_u64(0);
    let bounds = Aabb::new(v(0.0, 0.0), v(1.0, 1.0));
    let inverted = Aabb::new(v(1.0, 1.0), v(0.0, 0.0));

    assert!(Shape::random_circle(&mut rng, bounds, 1.0..1.0).is_err());
    assert!(Shape::random_circle(&mut rng, inverted, 0.1..1.0).is_err());
    assert!(Shape::random_polygon(&mut rng, bounds, 0.5..1.0, 2..=5).is_err());
    assert!(Shape::random_polygon(&mut rng, bounds, -1.0..1.0, 3..=5).is_err());
}

#[test]
fn same_seed_yields_same_shapes() -> Result<()> {
    let bounds = Aabb::new(v(-1.0, -1.0), v(1.0, 1.0));
    let mut first = StdRng::seed_from_u64(99);
    let mut second = StdRng::seed_from_u64(99);
    for _ in 0..10 {
        assert_eq!(
            Shape::random_polygon(&mut first, bounds, 0.5..1.5, 3..=6)?,
            Shape::random_polygon(&mut second, bounds, 0.5..1.5, 3..=6)?
        );
    }
    Ok(())
}

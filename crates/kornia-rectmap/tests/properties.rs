use approx::assert_relative_eq;
use glam::DMat3;
use kornia_rectmap::{Point2, Rectangle, RectangleTransformer, ValidationConfig};
use rand::Rng;

const EPSILON: f64 = 1e-9;

fn make_random_rectangle(rng: &mut impl Rng, clockwise: bool) -> Rectangle {
    let origin = Point2::new(rng.random_range(-500.0..500.0), rng.random_range(-500.0..500.0));
    let angle: f64 = rng.random_range(-std::f64::consts::PI..std::f64::consts::PI);
    let length: f64 = rng.random_range(0.5..200.0);
    let width: f64 = rng.random_range(0.5..200.0);

    let (sin, cos) = angle.sin_cos();
    let u = (cos * length, sin * length);
    let v = if clockwise {
        (sin * width, -cos * width)
    } else {
        (-sin * width, cos * width)
    };

    Rectangle::new(
        origin,
        (origin.x + u.0, origin.y + u.1),
        (origin.x + v.0, origin.y + v.1),
        (origin.x + u.0 + v.0, origin.y + u.1 + v.1),
    )
}

fn make_random_point(rng: &mut impl Rng) -> Point2 {
    Point2::new(rng.random_range(-1000.0..1000.0), rng.random_range(-1000.0..1000.0))
}

// tolerance relative to the magnitude of the coordinates involved
fn assert_point_near(actual: Point2, expected: Point2) {
    let scale = 1.0 + expected.x.abs().max(expected.y.abs());
    assert_relative_eq!(actual.x, expected.x, epsilon = EPSILON * scale);
    assert_relative_eq!(actual.y, expected.y, epsilon = EPSILON * scale);
}

#[test]
fn test_round_trip() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let clockwise = rng.random();
        let rect1 = make_random_rectangle(&mut rng, clockwise);
        let rect2 = make_random_rectangle(&mut rng, clockwise);
        let transformer = RectangleTransformer::new(rect1, rect2);

        for _ in 0..10 {
            let p = make_random_point(&mut rng);
            let q = transformer.transform_from_grid1_to_grid2(p);
            assert_point_near(transformer.transform_from_grid2_to_grid1(q), p);
        }
    }
}

#[test]
fn test_corner_mapping() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let clockwise = rng.random();
        let rect1 = make_random_rectangle(&mut rng, clockwise);
        let rect2 = make_random_rectangle(&mut rng, clockwise);
        let transformer = RectangleTransformer::new(rect1, rect2);

        for (c1, c2) in rect1.corners().iter().zip(rect2.corners().iter()) {
            assert_point_near(transformer.transform_from_grid1_to_grid2(*c1), *c2);
            assert_point_near(transformer.transform_from_grid2_to_grid1(*c2), *c1);
        }
    }
}

#[test]
fn test_corner_mapping_mixed_winding() {
    // the reflection absorbs the winding difference for the corners themselves
    let mut rng = rand::rng();
    let rect1 = make_random_rectangle(&mut rng, true);
    let rect2 = make_random_rectangle(&mut rng, false);
    let transformer = RectangleTransformer::new(rect1, rect2);
    for (c1, c2) in rect1.corners().iter().zip(rect2.corners().iter()) {
        assert_point_near(transformer.transform_from_grid1_to_grid2(*c1), *c2);
    }
}

#[test]
fn test_identity() {
    let mut rng = rand::rng();
    for _ in 0..20 {
        let clockwise = rng.random();
        let rect = make_random_rectangle(&mut rng, clockwise);
        let transformer = RectangleTransformer::new(rect, rect);
        for _ in 0..10 {
            let p = make_random_point(&mut rng);
            assert_point_near(transformer.transform_from_grid1_to_grid2(p), p);
            assert_point_near(transformer.transform_from_grid2_to_grid1(p), p);
        }
    }
}

#[test]
fn test_inverse_consistency() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let clockwise = rng.random();
        let rect1 = make_random_rectangle(&mut rng, clockwise);
        let rect2 = make_random_rectangle(&mut rng, clockwise);
        let transformer = RectangleTransformer::new(rect1, rect2);

        let product = transformer.matrix_2_to_1() * transformer.matrix_1_to_2();
        for (a, e) in product
            .to_cols_array()
            .iter()
            .zip(DMat3::IDENTITY.to_cols_array().iter())
        {
            assert_relative_eq!(*a, *e, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_scale_sanity() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let clockwise = rng.random();
        let rect1 = make_random_rectangle(&mut rng, clockwise);
        let rect2 = make_random_rectangle(&mut rng, clockwise);
        let transformer = RectangleTransformer::new(rect1, rect2);

        let p1 = transformer.transform_from_grid1_to_grid2(rect1.corner1);
        let p2 = transformer.transform_from_grid1_to_grid2(rect1.corner2);
        assert_relative_eq!(
            p1.distance(&p2),
            rect2.length(),
            epsilon = EPSILON * (1.0 + rect2.length())
        );
    }
}

#[test]
fn test_reference_scenario() {
    let grid1 = Rectangle::from([(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)]);
    let grid2 = Rectangle::from([(205.0, -55.0), (385.0, -55.0), (205.0, 160.0), (385.0, 160.0)]);
    let transformer = RectangleTransformer::new(grid1, grid2);

    assert_point_near(
        transformer.transform_from_grid1_to_grid2(Point2::new(0.0, 0.0)),
        Point2::new(205.0, -55.0),
    );
    assert_point_near(
        transformer.transform_from_grid1_to_grid2(Point2::new(1.0, 1.0)),
        Point2::new(385.0, 160.0),
    );
    // corner2 and corner3 follow their counterparts in grid 2
    assert_point_near(
        transformer.transform_from_grid1_to_grid2(Point2::new(0.0, 1.0)),
        Point2::new(385.0, -55.0),
    );
    assert_point_near(
        transformer.transform_from_grid1_to_grid2(Point2::new(1.0, 0.0)),
        Point2::new(205.0, 160.0),
    );
}

#[test]
fn test_validated_random_rectangles() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();
    let config = ValidationConfig::new(1e-9);
    for _ in 0..20 {
        let clockwise = rng.random();
        let rect1 = make_random_rectangle(&mut rng, clockwise);
        let rect2 = make_random_rectangle(&mut rng, clockwise);
        let transformer = RectangleTransformer::try_new(rect1, rect2, &config)?;
        assert_eq!(transformer, RectangleTransformer::new(rect1, rect2));
    }
    Ok(())
}

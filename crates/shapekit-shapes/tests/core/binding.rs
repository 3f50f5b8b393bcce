use shapekit_core::Point;
use shapekit_shapes::{PropsPatch, Shape, ShapeRegistry};

fn target(registry: &ShapeRegistry) -> Shape {
    registry
        .create("box", PropsPatch::new().point(Point::zero()).size(100.0, 50.0))
        .unwrap()
}

#[test]
fn test_binding_scenarios_against_wide_box() {
    let registry = ShapeRegistry::default();
    let shape = target(&registry);
    let west = Point::new(-1.0, 0.0);

    assert!(shape
        .get_binding_point(&Point::new(120.0, 25.0), &Point::new(200.0, 25.0), &west, false)
        .is_none());

    let edge = shape
        .get_binding_point(&Point::new(110.0, 25.0), &Point::new(200.0, 25.0), &west, false)
        .unwrap();
    assert_eq!(edge.distance, 16.0);

    let origin = Point::new(200.0, 150.0);
    let corner_point = Point::new(114.0, 64.0);
    let corner = shape
        .get_binding_point(&corner_point, &origin, &(corner_point - origin), false)
        .unwrap();
    assert!((corner.distance - 19.798_989_873).abs() < 1e-6);
}

#[test]
fn test_binding_point_is_normalized() {
    let shape = target(&ShapeRegistry::default());
    let hit = shape
        .get_binding_point(
            &Point::new(-10.0, 60.0),
            &Point::new(-100.0, 150.0),
            &Point::new(1.0, -1.0),
            false,
        )
        .unwrap();
    assert!((0.0..=1.0).contains(&hit.point.x));
    assert!((0.0..=1.0).contains(&hit.point.y));
}

#[test]
fn test_registry_binding_distance_changes_reach() {
    let registry = ShapeRegistry::default().with_binding_distance(30.0);
    let shape = target(&registry);
    let west = Point::new(-1.0, 0.0);
    let hit = shape
        .get_binding_point(&Point::new(120.0, 25.0), &Point::new(200.0, 25.0), &west, false)
        .unwrap();
    assert_eq!(hit.distance, 30.0);
    assert!(shape.expanded_bounds().contains_point(&Point::new(129.0, 25.0)));
}

#[test]
fn test_anchor_survives_move() {
    let mut shape = target(&ShapeRegistry::default());
    let hit = shape
        .get_binding_point(&Point::new(20.0, 10.0), &Point::new(200.0, 10.0), &Point::new(-1.0, 0.0), true)
        .unwrap();
    shape.update(PropsPatch::new().point(Point::new(50.0, 50.0)), false);
    let anchor = shape.resolve_binding_anchor(&hit.point);
    assert!(anchor.approx_eq(&Point::new(70.0, 60.0), 1e-9));
}

use shapekit_core::{Bounds, Point};
use shapekit_shapes::{PropsPatch, Shape, ShapeRegistry};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

fn make(kind: &str, patch: PropsPatch) -> Shape {
    ShapeRegistry::default().create(kind, patch).unwrap()
}

#[test]
fn test_center_hits_for_every_builtin_kind() {
    let registry = ShapeRegistry::default();
    for name in registry.type_names() {
        for rotation in [0.0, 0.5, FRAC_PI_2, 3.0] {
            let shape = registry
                .create(
                    name,
                    PropsPatch::new()
                        .point(Point::new(20.0, -5.0))
                        .rotation(rotation),
                )
                .unwrap();
            assert!(
                shape.hit_test_point(&shape.center()),
                "{} at rotation {} missed its center",
                name,
                rotation
            );
        }
    }
}

#[test]
fn test_unrotated_rotated_bounds_match_bounds() {
    let registry = ShapeRegistry::default();
    for name in registry.type_names() {
        let shape = registry.create(name, PropsPatch::new()).unwrap();
        assert_eq!(shape.rotated_bounds(), shape.bounds(), "{}", name);
    }
}

#[test]
fn test_segment_crossing_box_corner() {
    let shape = make("box", PropsPatch::new().size(100.0, 100.0));
    assert!(shape.hit_test_line_segment(&Point::new(-10.0, -10.0), &Point::new(10.0, 10.0)));
}

#[test]
fn test_segment_near_but_outside_box() {
    let shape = make("box", PropsPatch::new().size(100.0, 100.0));
    assert!(!shape.hit_test_line_segment(&Point::new(-10.0, -10.0), &Point::new(-1.0, 50.0)));
}

#[test]
fn test_quarter_turn_swaps_extent() {
    let shape = make(
        "box",
        PropsPatch::new().size(100.0, 40.0).rotation(FRAC_PI_2),
    );
    let rb = shape.rotated_bounds();
    assert!((rb.width() - 40.0).abs() < 1e-9);
    assert!((rb.height() - 100.0).abs() < 1e-9);
    // original box corner lies outside the rotated outline
    assert!(!shape.hit_test_point(&Point::new(2.0, 2.0)));
    assert!(shape.hit_test_point(&Point::new(50.0, -25.0)));
}

#[test]
fn test_rotated_point_hit_uses_polygon() {
    let shape = make("ellipse", PropsPatch::new().rotation(FRAC_PI_4));
    let rb = shape.rotated_bounds();
    let near_corner = Point::new(rb.min_x + 1.0, rb.min_y + 1.0);
    assert!(!shape.hit_test_point(&near_corner));
}

#[test]
fn test_brush_selection() {
    let shape = make("box", PropsPatch::new().point(Point::new(10.0, 10.0)).size(20.0, 20.0));
    assert!(shape.hit_test_bounds(&Bounds::new(0.0, 0.0, 50.0, 50.0)));
    assert!(shape.hit_test_bounds(&Bounds::new(25.0, 25.0, 50.0, 50.0)));
    assert!(!shape.hit_test_bounds(&Bounds::new(31.0, 31.0, 50.0, 50.0)));
}

#[test]
fn test_line_kind_hit_uses_handle_box() {
    let shape = make("line", PropsPatch::new().point(Point::new(5.0, 5.0)));
    assert_eq!(shape.bounds(), Bounds::new(5.0, 5.0, 6.0, 6.0));
    assert!(shape.hit_test_point(&Point::new(5.5, 5.5)));
    assert!(!shape.hit_test_point(&Point::new(7.0, 5.5)));
}

use proptest::prelude::*;
use shapekit_core::{
    intersect_line_segment_bounds, intersect_line_segment_polygon, intersect_polygon_bounds,
    intersect_ray_bounds, point_in_polygon, Bounds, BoundsSide, Point,
};

#[test]
fn test_ray_through_box_hits_both_sides() {
    let bounds = Bounds::new(0.0, 0.0, 100.0, 50.0);
    let hits = intersect_ray_bounds(Point::new(200.0, 25.0), Point::new(-1.0, 0.0), &bounds);
    let sides: Vec<_> = hits.iter().map(|h| h.message.as_str()).collect();
    assert_eq!(sides, vec!["right", "left"]);
    assert_eq!(hits[1].points[0], Point::new(0.0, 25.0));
}

#[test]
fn test_ray_pointing_away_misses() {
    let bounds = Bounds::new(0.0, 0.0, 100.0, 50.0);
    assert!(intersect_ray_bounds(Point::new(200.0, 25.0), Point::new(1.0, 0.0), &bounds).is_empty());
}

#[test]
fn test_segment_touching_edge_counts() {
    let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
    let hits = intersect_line_segment_bounds(Point::new(-5.0, 5.0), Point::new(0.0, 5.0), &bounds);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].message, BoundsSide::Left.to_string());
}

#[test]
fn test_rotated_square_against_polygon() {
    let square = Bounds::new(0.0, 0.0, 100.0, 100.0).rotated_corners(std::f64::consts::FRAC_PI_4);
    assert!(intersect_line_segment_polygon(Point::new(50.0, -40.0), Point::new(50.0, 0.0), &square).did_intersect);
    assert!(!intersect_line_segment_polygon(Point::new(-30.0, -5.0), Point::new(-5.0, -30.0), &square).did_intersect);
}

#[test]
fn test_polygon_inside_bounds_has_no_edge_hits() {
    let inner = Bounds::new(10.0, 10.0, 20.0, 20.0).corners();
    assert!(intersect_polygon_bounds(&inner, &Bounds::new(0.0, 0.0, 100.0, 100.0)).is_empty());
}

proptest! {
    #[test]
    fn prop_rotation_preserves_center(
        x in -1000.0f64..1000.0,
        y in -1000.0f64..1000.0,
        w in 0.0f64..500.0,
        h in 0.0f64..500.0,
        rotation in -6.3f64..6.3,
    ) {
        let bounds = Bounds::from_origin_size(Point::new(x, y), w, h);
        let rotated = bounds.rotated(rotation);
        prop_assert!(rotated.center().approx_eq(&bounds.center(), 1e-6));
        prop_assert!(rotated.width() + 1e-9 >= w.min(h));
    }

    #[test]
    fn prop_center_inside_rotated_polygon(
        w in 1.0f64..500.0,
        h in 1.0f64..500.0,
        rotation in -6.3f64..6.3,
    ) {
        let bounds = Bounds::from_origin_size(Point::zero(), w, h);
        prop_assert!(point_in_polygon(&bounds.center(), &bounds.rotated_corners(rotation)));
    }

    #[test]
    fn prop_expand_contains_original(d in 0.001f64..100.0) {
        let bounds = Bounds::new(-3.0, 4.0, 17.0, 40.0);
        prop_assert!(bounds.expand(d).contains(&bounds));
    }
}

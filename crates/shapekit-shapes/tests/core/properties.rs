use proptest::prelude::*;
use shapekit_core::Point;
use shapekit_shapes::{HandleChange, PropsPatch, ShapeRegistry};

proptest! {
    #[test]
    fn prop_center_always_hits(
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
        w in 1.0f64..400.0,
        h in 1.0f64..400.0,
        rotation in -6.3f64..6.3,
    ) {
        let shape = ShapeRegistry::default()
            .create("box", PropsPatch::new().point(Point::new(x, y)).size(w, h).rotation(rotation))
            .unwrap();
        prop_assert!(shape.hit_test_point(&shape.center()));
    }

    #[test]
    fn prop_rotated_bounds_enclose_rotated_corners(
        w in 1.0f64..400.0,
        h in 1.0f64..400.0,
        rotation in -6.3f64..6.3,
    ) {
        let shape = ShapeRegistry::default()
            .create("box", PropsPatch::new().size(w, h).rotation(rotation))
            .unwrap();
        let rb = shape.rotated_bounds().expand(1e-6);
        for corner in shape.bounds().rotated_corners(rotation) {
            prop_assert!(rb.contains_point(&corner));
        }
        prop_assert!(shape.center().approx_eq(&rb.center(), 1e-6));
    }

    #[test]
    fn prop_handle_change_normalises(dx in -300.0f64..300.0, dy in -300.0f64..300.0) {
        let mut shape = ShapeRegistry::default().create("line", PropsPatch::new()).unwrap();
        let initial = shape.props().clone();
        shape.on_handle_change(&initial, &HandleChange::new("end", Point::new(dx, dy)));
        let points = shape.props().handle_points();
        let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        prop_assert_eq!(min_x, 0.0);
        prop_assert_eq!(min_y, 0.0);
    }

    #[test]
    fn prop_revision_increases_per_update(steps in 1usize..20) {
        let mut shape = ShapeRegistry::default().create("box", PropsPatch::new()).unwrap();
        let mut last = shape.cached_snapshot().revision;
        for i in 0..steps {
            shape.update(PropsPatch::new().rotation(i as f64), false);
            let next = shape.cached_snapshot().revision;
            prop_assert!(next > last);
            last = next;
        }
    }
}

use shapekit_core::{Bounds, Point};
use shapekit_shapes::{
    HandleChange, PropsPatch, ResizeEdge, ResizeHandle, ResizeInfo, ResizeStartInfo,
    ShapeRegistry,
};

#[test]
fn test_identity_resize_for_every_kind() {
    let registry = ShapeRegistry::default();
    for name in registry.type_names() {
        let mut shape = registry
            .create(
                name,
                PropsPatch::new().point(Point::new(12.0, 7.0)).rotation(0.4),
            )
            .unwrap();
        let initial = shape.props().clone();
        shape.on_resize_start(&ResizeStartInfo { is_single: true });
        let info = ResizeInfo::new(shape.bounds(), initial.rotation, [1.0, 1.0]);
        shape.on_resize(&initial, &info);
        assert_eq!(shape.props().point, initial.point, "{}", name);
        assert_eq!(shape.props().rotation, initial.rotation, "{}", name);
        assert_eq!(shape.bounds(), info.bounds, "{}", name);
    }
}

#[test]
fn test_edge_drag_with_horizontal_flip() {
    let registry = ShapeRegistry::default();
    let mut shape = registry
        .create("box", PropsPatch::new().size(100.0, 50.0))
        .unwrap();
    let initial = shape.props().clone();
    shape.on_resize_start(&ResizeStartInfo::default());

    let mut info = ResizeInfo::new(Bounds::new(-60.0, 0.0, 0.0, 50.0), 0.0, [-0.6, 1.0]);
    info.handle = ResizeHandle::Edge(ResizeEdge::Right);
    shape.on_resize(&initial, &info);

    assert_eq!(shape.props().scale, [-1.0, 1.0]);
    assert_eq!(shape.props().point, Point::new(-60.0, 0.0));
    assert_eq!(shape.props().size, Some([60.0, 50.0]));
}

#[test]
fn test_resize_marks_snapshot_stale() {
    let registry = ShapeRegistry::default();
    let mut shape = registry.create("box", PropsPatch::new()).unwrap();
    let before = shape.cached_snapshot().revision;
    let initial = shape.props().clone();
    shape.on_resize_start(&ResizeStartInfo::default());
    shape.on_resize(
        &initial,
        &ResizeInfo::new(Bounds::new(0.0, 0.0, 10.0, 10.0), 0.0, [0.1, 0.1]),
    );
    assert!(shape.is_dirty());
    assert_eq!(shape.cached_snapshot().revision, before + 1);
}

#[test]
fn test_handle_drag_keeps_handles_at_origin() {
    let registry = ShapeRegistry::default();
    let mut shape = registry
        .create("line", PropsPatch::new().point(Point::new(100.0, 100.0)))
        .unwrap();

    for (id, delta) in [
        ("end", Point::new(50.0, -80.0)),
        ("start", Point::new(-30.0, 10.0)),
        ("end", Point::new(-200.0, 0.0)),
    ] {
        let initial = shape.props().clone();
        let end_before = initial.point + initial.handles.as_ref().unwrap()["end"].point;
        shape.on_handle_change(&initial, &HandleChange::new(id, delta));

        let points = shape.props().handle_points();
        let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        assert_eq!((min_x, min_y), (0.0, 0.0));

        let end_after = shape.props().point + shape.props().handles.as_ref().unwrap()["end"].point;
        let expected = if id == "end" { end_before + delta } else { end_before };
        assert!(end_after.approx_eq(&expected, 1e-9));
    }
}

#[test]
fn test_unknown_handle_is_ignored() {
    let registry = ShapeRegistry::default();
    let mut shape = registry.create("line", PropsPatch::new()).unwrap();
    let initial = shape.props().clone();
    shape.on_handle_change(&initial, &HandleChange::new("middle", Point::new(5.0, 5.0)));
    assert_eq!(shape.props(), &initial);
}

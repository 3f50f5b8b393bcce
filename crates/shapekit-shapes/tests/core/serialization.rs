use serde_json::json;
use shapekit_core::Point;
use shapekit_shapes::{PropsPatch, ShapeRegistry};

#[test]
fn test_clone_serializes_identically() {
    let registry = ShapeRegistry::default();
    let mut source = registry
        .create("ellipse", PropsPatch::new().id("e1").size(30.0, 10.0))
        .unwrap();
    source.update(PropsPatch::new().rotation(0.25), false);

    let mut copy = source.clone();
    assert_eq!(copy.serialized(), source.serialized());

    copy.update(PropsPatch::new().point(Point::new(99.0, 99.0)), false);
    assert_eq!(source.props().point, Point::zero());
    assert_ne!(copy.serialized(), source.serialized());
}

#[test]
fn test_revision_lifecycle() {
    let registry = ShapeRegistry::default();
    let mut shape = registry.create("box", PropsPatch::new()).unwrap();

    let r1 = shape.cached_snapshot().revision;
    assert_eq!(shape.cached_snapshot().revision, r1);

    shape.update(PropsPatch::new().rotation(1.0), false);
    let r2 = shape.cached_snapshot().revision;
    assert!(r2 > r1);

    shape.update(PropsPatch::new().rotation(2.0), true);
    assert_eq!(shape.cached_snapshot().revision, r2);
    assert_eq!(shape.props().rotation, 2.0);
}

#[test]
fn test_draft_lifecycle() {
    let registry = ShapeRegistry::default();
    let mut shape = registry.create("dot", PropsPatch::new()).unwrap();
    shape.set_draft(true);
    assert!(shape.serialized().is_none());

    let copy = shape.clone();
    assert!(!copy.is_draft());
    assert!(copy.serialized().is_some());
}

#[test]
fn test_json_round_trip_keeps_unknown_fields() {
    let registry = ShapeRegistry::default();
    let shape = registry
        .create(
            "box",
            PropsPatch::new()
                .id("b7")
                .parent_id("page")
                .extra("label", json!("hello")),
        )
        .unwrap();

    let json = shape.cached_snapshot().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["parentId"], "page");
    assert_eq!(value["label"], "hello");
    assert_eq!(value["scale"], json!([1.0, 1.0]));

    let back = registry.from_json(&json).unwrap();
    assert_eq!(back.id(), "b7");
    assert_eq!(back.props().extra.get("label"), Some(&json!("hello")));
    assert_eq!(back.revision(), shape.revision());
    assert_eq!(back.serialized(), shape.serialized());
}

#[test]
fn test_load_snapshot_is_not_a_change() {
    let registry = ShapeRegistry::default();
    let mut shape = registry.create("box", PropsPatch::new().id("b1")).unwrap();
    let before = shape.cached_snapshot();

    let mut record = shape.snapshot();
    record.props.point = Point::new(4.0, 4.0);
    shape.load_snapshot(record).unwrap();

    assert_eq!(shape.props().point, Point::new(4.0, 4.0));
    assert_eq!(shape.cached_snapshot().revision, before.revision);
}

#[test]
fn test_load_snapshot_rejects_other_kind() {
    let registry = ShapeRegistry::default();
    let mut shape = registry.create("box", PropsPatch::new()).unwrap();
    let dot = registry.create("dot", PropsPatch::new()).unwrap();
    assert!(shape.load_snapshot(dot.snapshot()).is_err());
}

//! The shape container and its geometry queries.

use lyon::path::Path;
use shapekit_core::{
    intersect_line_segment_bounds, intersect_line_segment_polygon, intersect_polygon_bounds,
    point_in_polygon, Bounds, Point, BINDING_DISTANCE,
};
use std::cell::RefCell;
use std::sync::Arc;
use uuid::Uuid;

use crate::cache::SnapshotCache;
use crate::kind::{DisplayOptions, ShapeCapabilities, ShapeKind};
use crate::props::{PropsPatch, ShapeProps};

/// A single drawable shape.
///
/// Owns its properties exclusively; they change only through
/// [`Shape::update`] and the transform entry points. Bounds are derived on
/// every call and never stored. The serialized snapshot is the only cached
/// state.
///
/// # Examples
///
/// ```
/// use shapekit_shapes::{kinds::BoxKind, PropsPatch, Shape};
/// use shapekit_core::Point;
/// use std::sync::Arc;
///
/// let shape = Shape::new(
///     Arc::new(BoxKind),
///     PropsPatch::new().point(Point::new(10.0, 10.0)).size(40.0, 20.0),
/// );
/// assert_eq!(shape.bounds().width(), 40.0);
/// assert!(shape.hit_test_point(&shape.center()));
/// ```
#[derive(Debug)]
pub struct Shape {
    pub(crate) kind: Arc<dyn ShapeKind>,
    pub(crate) props: ShapeProps,
    pub(crate) binding_distance: f64,
    pub(crate) draft: bool,
    /// Scale captured by `on_resize_start`; flips accumulate onto it.
    /// Without a captured scale, resizes flip relative to the current one.
    pub(crate) resize_scale: Option<[f64; 2]>,
    pub(crate) cache: RefCell<SnapshotCache>,
}

impl Shape {
    /// Builds a shape from `{scale: [1, 1]} ⊕ kind defaults ⊕ patch`.
    ///
    /// A missing id is replaced with a fresh UUID.
    pub fn new(kind: Arc<dyn ShapeKind>, patch: PropsPatch) -> Self {
        let mut props = ShapeProps::default();
        let id = patch.id.clone();
        props.apply(kind.default_props().merged(patch));
        props.id = id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Self::from_parts(kind, props, SnapshotCache::default())
    }

    pub(crate) fn from_parts(
        kind: Arc<dyn ShapeKind>,
        props: ShapeProps,
        cache: SnapshotCache,
    ) -> Self {
        Self {
            resize_scale: None,
            kind,
            props,
            binding_distance: BINDING_DISTANCE,
            draft: false,
            cache: RefCell::new(cache),
        }
    }

    /// Overrides the binding margin for this shape.
    pub fn with_binding_distance(mut self, distance: f64) -> Self {
        self.binding_distance = distance;
        self
    }

    pub fn id(&self) -> &str {
        &self.props.id
    }

    /// The kind's type tag.
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    pub fn kind(&self) -> &Arc<dyn ShapeKind> {
        &self.kind
    }

    pub fn props(&self) -> &ShapeProps {
        &self.props
    }

    pub fn binding_distance(&self) -> f64 {
        self.binding_distance
    }

    pub fn capabilities(&self) -> ShapeCapabilities {
        self.kind.capabilities()
    }

    pub fn display_options(&self) -> DisplayOptions {
        self.kind.display_options()
    }

    pub fn aspect_ratio(&self) -> Option<f64> {
        self.kind.aspect_ratio()
    }

    /// Outline in shape-local space for a rendering adapter.
    pub fn render_path(&self) -> Path {
        self.kind.render_path(&self.props)
    }

    pub fn bounds(&self) -> Bounds {
        self.kind.bounds(&self.props)
    }

    /// Center of the unrotated bounds; rotation pivots about this point.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Axis-aligned box enclosing the bounds after rotation.
    pub fn rotated_bounds(&self) -> Bounds {
        self.bounds().rotated(self.props.rotation)
    }

    /// Bounds grown by the binding distance on every side.
    pub fn expanded_bounds(&self) -> Bounds {
        self.bounds().expand(self.binding_distance)
    }

    fn rotated_corners(&self) -> [Point; 4] {
        self.bounds().rotated_corners(self.props.rotation)
    }

    /// Point-in-shape test, approximating the outline by the (rotated) bounding box.
    pub fn hit_test_point(&self, point: &Point) -> bool {
        if self.props.rotation == 0.0 {
            return self.rotated_bounds().contains_point(point);
        }
        point_in_polygon(point, &self.rotated_corners())
    }

    /// True when the segment `a`-`b` lies within or crosses the shape's box.
    pub fn hit_test_line_segment(&self, a: &Point, b: &Point) -> bool {
        let rotated_bounds = self.rotated_bounds();
        if rotated_bounds.contains(&Bounds::from_points(&[*a, *b])) {
            return true;
        }
        if self.props.rotation != 0.0 {
            return intersect_line_segment_polygon(*a, *b, &self.rotated_corners()).did_intersect;
        }
        !intersect_line_segment_bounds(*a, *b, &rotated_bounds).is_empty()
    }

    /// Brush test: `bounds` encloses the shape or crosses its outline.
    ///
    /// A brush lying entirely inside the shape does not hit it.
    pub fn hit_test_bounds(&self, bounds: &Bounds) -> bool {
        bounds.contains(&self.rotated_bounds())
            || !intersect_polygon_bounds(&self.rotated_corners(), bounds).is_empty()
    }
}

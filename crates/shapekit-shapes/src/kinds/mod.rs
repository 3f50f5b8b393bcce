//! Built-in shape kinds.

mod box_shape;
mod dot;
mod ellipse;
mod line;

pub use box_shape::BoxKind;
pub use dot::DotKind;
pub use ellipse::EllipseKind;
pub use line::LineKind;

use shapekit_core::{Bounds, Point};
use std::sync::Arc;

use crate::kind::{ShapeCapabilities, ShapeKind};
use crate::props::{PropsPatch, ShapeProps};
use crate::transform::ResizeInfo;

pub(crate) const DEFAULT_SIZE: [f64; 2] = [100.0, 100.0];
pub(crate) const MIN_SIZE: f64 = 1.0;

/// One instance of every built-in kind.
pub fn builtin_kinds() -> Vec<Arc<dyn ShapeKind>> {
    vec![
        Arc::new(BoxKind),
        Arc::new(EllipseKind),
        Arc::new(DotKind),
        Arc::new(LineKind),
    ]
}

/// `point .. point + size` for size-carrying kinds.
pub(crate) fn box_bounds(props: &ShapeProps) -> Bounds {
    let [w, h] = props.size.unwrap_or(DEFAULT_SIZE);
    Bounds::from_origin_size(props.point, w, h)
}

pub(crate) fn clamp_size(patch: &mut PropsPatch) {
    if let Some([w, h]) = patch.size {
        patch.size = Some([w.max(MIN_SIZE), h.max(MIN_SIZE)]);
    }
}

/// Sizes a box-like shape to the resize target, honouring per-axis resize
/// capability and the aspect-ratio lock captured at drag start.
pub(crate) fn resize_box(
    capabilities: &ShapeCapabilities,
    initial: &ShapeProps,
    info: &ResizeInfo,
    patch: &mut PropsPatch,
) {
    let [initial_w, initial_h] = initial.size.unwrap_or(DEFAULT_SIZE);
    let mut w = if capabilities.can_resize[0] {
        info.bounds.width()
    } else {
        initial_w
    };
    let mut h = if capabilities.can_resize[1] {
        info.bounds.height()
    } else {
        initial_h
    };

    if initial.is_aspect_ratio_locked && initial_w > 0.0 && initial_h > 0.0 {
        if info.handle.affects_x() {
            h = w * initial_h / initial_w;
        } else {
            w = h * initial_w / initial_h;
        }
    }

    patch.size = Some([w.max(MIN_SIZE), h.max(MIN_SIZE)]);
}

/// Offset so the shape's center stays put when its size changes.
pub(crate) fn recentered_point(props: &ShapeProps, size: [f64; 2]) -> Point {
    let center = box_bounds(props).center();
    Point::new(center.x - size[0] / 2.0, center.y - size[1] / 2.0)
}

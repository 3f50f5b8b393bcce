use lyon::math::{point, vector, Angle};
use lyon::path::{Path, Winding};
use shapekit_core::Bounds;

use super::{box_bounds, clamp_size, resize_box, DEFAULT_SIZE};
use crate::kind::{ShapeCapabilities, ShapeKind};
use crate::props::{PropsPatch, ShapeProps};
use crate::transform::ResizeInfo;

/// Ellipse inscribed in `props.size`. Hit tests use the bounding box.
#[derive(Debug, Clone, Copy, Default)]
pub struct EllipseKind;

impl ShapeKind for EllipseKind {
    fn type_name(&self) -> &'static str {
        "ellipse"
    }

    fn bounds(&self, props: &ShapeProps) -> Bounds {
        box_bounds(props)
    }

    fn default_props(&self) -> PropsPatch {
        PropsPatch::new().size(DEFAULT_SIZE[0], DEFAULT_SIZE[1])
    }

    fn capabilities(&self) -> ShapeCapabilities {
        ShapeCapabilities {
            can_bind: true,
            ..Default::default()
        }
    }

    fn validate_props(&self, patch: &mut PropsPatch) {
        clamp_size(patch);
    }

    fn render_path(&self, props: &ShapeProps) -> Path {
        let [w, h] = props.size.unwrap_or(DEFAULT_SIZE);
        let (rx, ry) = (w / 2.0, h / 2.0);
        let mut builder = Path::builder();
        builder.add_ellipse(
            point(rx as f32, ry as f32),
            vector(rx as f32, ry as f32),
            Angle::radians(0.0),
            Winding::Positive,
        );
        builder.build()
    }

    fn resize_patch(&self, initial: &ShapeProps, info: &ResizeInfo, patch: &mut PropsPatch) {
        resize_box(&self.capabilities(), initial, info, patch);
    }
}

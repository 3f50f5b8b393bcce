use lyon::math::point;
use lyon::path::{Path, Winding};
use shapekit_core::Bounds;

use crate::kind::{DisplayOptions, ShapeCapabilities, ShapeKind};
use crate::props::{PropsPatch, ShapeProps};

const DEFAULT_RADIUS: f64 = 4.0;
const MIN_RADIUS: f64 = 1.0;

/// Fixed-size marker. Resizing only moves it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotKind;

impl DotKind {
    fn radius(props: &ShapeProps) -> f64 {
        props.radius.unwrap_or(DEFAULT_RADIUS)
    }
}

impl ShapeKind for DotKind {
    fn type_name(&self) -> &'static str {
        "dot"
    }

    fn bounds(&self, props: &ShapeProps) -> Bounds {
        let d = Self::radius(props) * 2.0;
        Bounds::from_origin_size(props.point, d, d)
    }

    fn default_props(&self) -> PropsPatch {
        PropsPatch::new().radius(DEFAULT_RADIUS)
    }

    fn capabilities(&self) -> ShapeCapabilities {
        ShapeCapabilities {
            can_change_aspect_ratio: false,
            can_resize: [false, false],
            can_scale: false,
            can_flip: false,
            can_bind: true,
            ..Default::default()
        }
    }

    fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            hide_resize_handles: true,
            hide_rotate_handle: true,
            ..Default::default()
        }
    }

    fn aspect_ratio(&self) -> Option<f64> {
        Some(1.0)
    }

    fn validate_props(&self, patch: &mut PropsPatch) {
        if let Some(r) = patch.radius {
            patch.radius = Some(r.max(MIN_RADIUS));
        }
    }

    fn render_path(&self, props: &ShapeProps) -> Path {
        let r = Self::radius(props) as f32;
        let mut builder = Path::builder();
        builder.add_circle(point(r, r), r, Winding::Positive);
        builder.build()
    }
}

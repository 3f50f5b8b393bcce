use lyon::math::point;
use lyon::path::Path;
use shapekit_core::{Bounds, Point};

use crate::kind::{DisplayOptions, ShapeKind};
use crate::props::{Handle, Handles, PropsPatch, ShapeProps};
use crate::transform::ResizeInfo;

/// Polyline through its handles, in key order. Handles are stored relative
/// to `props.point` and normalised so their common top-left is the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineKind;

impl LineKind {
    fn default_handles() -> Handles {
        let mut handles = Handles::new();
        handles.insert(
            "start".to_string(),
            Handle::new("start", Point::new(0.0, 0.0)).bindable(),
        );
        handles.insert(
            "end".to_string(),
            Handle::new("end", Point::new(1.0, 1.0)).bindable(),
        );
        handles
    }
}

impl ShapeKind for LineKind {
    fn type_name(&self) -> &'static str {
        "line"
    }

    fn bounds(&self, props: &ShapeProps) -> Bounds {
        Bounds::from_points(&props.handle_points()).translate(props.point)
    }

    fn default_props(&self) -> PropsPatch {
        PropsPatch::new().handles(Self::default_handles())
    }

    fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            hide_resize_handles: true,
            hide_rotate_handle: true,
            ..Default::default()
        }
    }

    fn render_path(&self, props: &ShapeProps) -> Path {
        let points = props.handle_points();
        let mut builder = Path::builder();
        if let Some((first, rest)) = points.split_first() {
            builder.begin(point(first.x as f32, first.y as f32));
            for p in rest {
                builder.line_to(point(p.x as f32, p.y as f32));
            }
            builder.end(false);
        }
        builder.build()
    }

    /// Scales each handle by its normalised position within the initial
    /// handle box. Flips live on the scale sign only, so handles are never
    /// mirrored here.
    fn resize_patch(&self, initial: &ShapeProps, info: &ResizeInfo, patch: &mut PropsPatch) {
        let Some(handles) = initial.handles.as_ref() else {
            return;
        };
        let initial_box = Bounds::from_points(&initial.handle_points());
        let from = initial_box.size();
        let to = info.bounds.size();

        let next = handles
            .iter()
            .map(|(id, handle)| {
                let normalized = (handle.point - initial_box.top_left()).div_v(&from);
                let mut handle = handle.clone();
                handle.point = normalized.mul_v(&to);
                (id.clone(), handle)
            })
            .collect();
        patch.handles = Some(next);
    }
}

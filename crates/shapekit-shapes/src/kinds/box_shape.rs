use shapekit_core::Bounds;

use super::{box_bounds, clamp_size, recentered_point, resize_box, DEFAULT_SIZE};
use crate::kind::{ShapeCapabilities, ShapeKind};
use crate::props::{PropsPatch, ShapeProps};
use crate::transform::{ResetBoundsInfo, ResizeInfo};

/// Axis-aligned rectangle sized by `props.size`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxKind;

impl ShapeKind for BoxKind {
    fn type_name(&self) -> &'static str {
        "box"
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

    fn resize_patch(&self, initial: &ShapeProps, info: &ResizeInfo, patch: &mut PropsPatch) {
        resize_box(&self.capabilities(), initial, info, patch);
    }

    /// Snaps back to the backing asset's natural size, keeping the center.
    fn reset_bounds_patch(&self, props: &ShapeProps, info: &ResetBoundsInfo) -> Option<PropsPatch> {
        let size = info.asset_size?;
        Some(
            PropsPatch::new()
                .point(recentered_point(props, size))
                .size(size[0], size[1]),
        )
    }
}

//! The per-kind behaviour seam.
//!
//! A [`ShapeKind`] supplies everything that differs between shape kinds:
//! bounds, defaults, validation, render geometry and resize behaviour. The
//! shared machinery in [`crate::Shape`] calls through this trait.

use lyon::math::{point, Box2D};
use lyon::path::{Path, Winding};
use serde::{Deserialize, Serialize};
use shapekit_core::Bounds;
use std::fmt;

use crate::props::{PropsPatch, ShapeProps};
use crate::transform::{ResetBoundsInfo, ResizeInfo};

/// Behavioural contracts a kind declares to tools and UI.
///
/// Only `can_resize` is consulted internally (by the built-in resize hooks);
/// the rest are advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeCapabilities {
    pub can_change_aspect_ratio: bool,
    pub can_unmount: bool,
    /// Per axis: x, y.
    pub can_resize: [bool; 2],
    pub can_scale: bool,
    pub can_flip: bool,
    pub can_edit: bool,
    pub can_bind: bool,
    pub can_activate: bool,
}

impl Default for ShapeCapabilities {
    fn default() -> Self {
        Self {
            can_change_aspect_ratio: true,
            can_unmount: true,
            can_resize: [true, true],
            can_scale: true,
            can_flip: true,
            can_edit: false,
            can_bind: false,
            can_activate: false,
        }
    }
}

/// Which selection adornments a kind asks the UI to hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    pub hide_clone_handles: bool,
    pub hide_resize_handles: bool,
    pub hide_rotate_handle: bool,
    pub hide_context_bar: bool,
    pub hide_selection_detail: bool,
    pub hide_selection: bool,
}

pub trait ShapeKind: fmt::Debug + Send + Sync {
    /// Unique type tag written to serialized records.
    fn type_name(&self) -> &'static str;

    /// Axis-aligned bounds in page space, ignoring rotation.
    ///
    /// Must depend on `props` only.
    fn bounds(&self, props: &ShapeProps) -> Bounds;

    /// Kind defaults layered between the base defaults and caller props.
    fn default_props(&self) -> PropsPatch {
        PropsPatch::default()
    }

    fn capabilities(&self) -> ShapeCapabilities {
        ShapeCapabilities::default()
    }

    fn display_options(&self) -> DisplayOptions {
        DisplayOptions::default()
    }

    /// Fixed width / height ratio, if the kind has one.
    fn aspect_ratio(&self) -> Option<f64> {
        None
    }

    /// Adjusts an incoming patch before it is merged. Pass-through by default.
    fn validate_props(&self, _patch: &mut PropsPatch) {}

    /// Outline in shape-local space (origin at `props.point`, unrotated).
    fn render_path(&self, props: &ShapeProps) -> Path {
        let b = self.bounds(props);
        let mut builder = Path::builder();
        builder.add_rectangle(
            &Box2D::new(
                point(0.0, 0.0),
                point(b.width() as f32, b.height() as f32),
            ),
            Winding::Positive,
        );
        builder.build()
    }

    /// Adds kind-specific fields to the patch produced by a resize.
    fn resize_patch(&self, _initial: &ShapeProps, _info: &ResizeInfo, _patch: &mut PropsPatch) {}

    /// Patch that restores the kind's natural bounds, if it has any.
    fn reset_bounds_patch(
        &self,
        _props: &ShapeProps,
        _info: &ResetBoundsInfo,
    ) -> Option<PropsPatch> {
        None
    }
}

//! Resize and handle-drag transformations.

use serde::{Deserialize, Serialize};
use shapekit_core::{Bounds, Point};
use tracing::debug;

use crate::props::{PropsPatch, ShapeProps};
use crate::shape::Shape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeStartInfo {
    /// True when this shape is the only one being resized.
    pub is_single: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeEdge {
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeCorner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// The selection handle being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeHandle {
    Edge(ResizeEdge),
    Corner(ResizeCorner),
}

impl ResizeHandle {
    /// True when the handle moves the horizontal extent.
    pub fn affects_x(&self) -> bool {
        !matches!(self, Self::Edge(ResizeEdge::Top | ResizeEdge::Bottom))
    }

    /// True when the handle moves the vertical extent.
    pub fn affects_y(&self) -> bool {
        !matches!(self, Self::Edge(ResizeEdge::Left | ResizeEdge::Right))
    }
}

/// Resize descriptor built by the tool layer from pointer movement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeInfo {
    /// Target bounds, always with non-negative extent.
    pub bounds: Bounds,
    pub center: Point,
    pub rotation: f64,
    #[serde(rename = "type")]
    pub handle: ResizeHandle,
    pub clip: bool,
    /// Signed scale factors relative to the drag start; negative means the
    /// drag crossed over on that axis.
    pub scale: [f64; 2],
    pub transform_origin: Point,
}

impl ResizeInfo {
    /// Descriptor for a corner drag with no flip and no clipping.
    pub fn new(bounds: Bounds, rotation: f64, scale: [f64; 2]) -> Self {
        Self {
            center: bounds.center(),
            bounds,
            rotation,
            handle: ResizeHandle::Corner(ResizeCorner::BottomRight),
            clip: false,
            scale,
            transform_origin: Point::new(0.5, 0.5),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandleChange {
    pub id: String,
    pub delta: Point,
}

impl HandleChange {
    pub fn new(id: impl Into<String>, delta: Point) -> Self {
        Self {
            id: id.into(),
            delta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetBoundsInfo {
    /// Natural size of the backing asset, when the shape has one.
    pub asset_size: Option<[f64; 2]>,
}

impl Shape {
    /// Captures the current scale as the base for flips during the drag.
    pub fn on_resize_start(&mut self, _info: &ResizeStartInfo) -> &mut Self {
        self.resize_scale = Some(self.props.scale);
        self
    }

    /// Moves the shape to `info.bounds`, carrying flip state on the scale sign.
    ///
    /// `initial` is the shape's props at drag start; it is only read.
    /// Size-locked shapes ignore resizes.
    pub fn on_resize(&mut self, initial: &ShapeProps, info: &ResizeInfo) -> &mut Self {
        if self.props.is_size_locked {
            debug!(shape = %self.props.id, "resize ignored on size-locked shape");
            return self;
        }

        let mut next_scale = self.resize_scale.unwrap_or(self.props.scale);
        for (axis, factor) in info.scale.iter().enumerate() {
            if *factor < 0.0 {
                next_scale[axis] *= -1.0;
            }
        }

        let mut patch = PropsPatch::new()
            .point(info.bounds.top_left())
            .scale(next_scale)
            .rotation(info.rotation);
        self.kind.resize_patch(initial, info, &mut patch);
        self.update(patch, false)
    }

    /// Drags one handle by `change.delta`, then re-normalises so every handle
    /// stays relative to a top-left of (0, 0) and `point` absorbs the offset.
    ///
    /// Shapes without handles, or unknown handle ids, are left untouched.
    pub fn on_handle_change(&mut self, initial: &ShapeProps, change: &HandleChange) -> &mut Self {
        let Some(initial_handles) = initial.handles.as_ref() else {
            debug!(shape = %self.props.id, "handle change on shape without handles");
            return self;
        };
        let mut next_handles = initial_handles.clone();
        let Some(moved) = next_handles.get_mut(&change.id) else {
            debug!(shape = %self.props.id, handle = %change.id, "unknown handle");
            return self;
        };
        moved.point += change.delta;

        let points: Vec<Point> = next_handles.values().map(|h| h.point).collect();
        let top_left = Bounds::common_top_left(&points);
        for handle in next_handles.values_mut() {
            handle.point -= top_left;
        }

        self.update(
            PropsPatch::new()
                .point(initial.point + top_left)
                .handles(next_handles),
            false,
        )
    }

    /// Restores the kind's natural bounds, if it defines any.
    pub fn on_reset_bounds(&mut self, info: &ResetBoundsInfo) -> &mut Self {
        match self.kind.reset_bounds_patch(&self.props, info) {
            Some(patch) => self.update(patch, false),
            None => self,
        }
    }
}

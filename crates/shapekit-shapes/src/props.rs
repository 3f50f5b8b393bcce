//! Shape properties and partial property updates.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shapekit_core::Point;
use std::collections::BTreeMap;

/// A named, shape-local control point such as a line end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Handle {
    pub id: String,
    /// Position relative to the owning shape's `point`.
    pub point: Point,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub can_bind: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding_id: Option<String>,
}

impl Handle {
    pub fn new(id: impl Into<String>, point: Point) -> Self {
        Self {
            id: id.into(),
            point,
            can_bind: false,
            binding_id: None,
        }
    }

    pub fn bindable(mut self) -> Self {
        self.can_bind = true;
        self
    }
}

pub type Handles = BTreeMap<String, Handle>;

/// Clip inset, either uniform or per side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Clipping {
    Uniform(f64),
    PerSide(Vec<f64>),
}

fn default_scale() -> [f64; 2] {
    [1.0, 1.0]
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Full property set owned by a shape.
///
/// `size` and `radius` belong to specific built-in kinds; anything else a
/// kind needs lives in `extra`, which is flattened into the serialized record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeProps {
    pub id: String,
    #[serde(default)]
    pub parent_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub point: Point,
    /// Negative components encode a flip on that axis.
    #[serde(default = "default_scale")]
    pub scale: [f64; 2],
    /// Radians, clockwise in screen space.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handles: Option<Handles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clipping: Option<Clipping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_ghost: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_hidden: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_locked: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_generated: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_size_locked: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_aspect_ratio_locked: bool,
    /// Width and height, read by the box and ellipse kinds only; other kinds
    /// ignore it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<[f64; 2]>,
    /// Read by the dot kind only; other kinds ignore it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ShapeProps {
    fn default() -> Self {
        Self {
            id: String::new(),
            parent_id: String::new(),
            name: None,
            point: Point::zero(),
            scale: default_scale(),
            rotation: 0.0,
            handles: None,
            clipping: None,
            asset_id: None,
            children: None,
            is_ghost: false,
            is_hidden: false,
            is_locked: false,
            is_generated: false,
            is_size_locked: false,
            is_aspect_ratio_locked: false,
            size: None,
            radius: None,
            extra: Map::new(),
        }
    }
}

impl ShapeProps {
    /// Shallow per-field merge. Fields absent from the patch are left alone;
    /// `null` entries in `extra` remove the key. The id is never touched.
    pub fn apply(&mut self, patch: PropsPatch) {
        let PropsPatch {
            id: _,
            parent_id,
            name,
            point,
            scale,
            rotation,
            handles,
            clipping,
            asset_id,
            children,
            is_ghost,
            is_hidden,
            is_locked,
            is_generated,
            is_size_locked,
            is_aspect_ratio_locked,
            size,
            radius,
            extra,
        } = patch;

        if let Some(v) = parent_id {
            self.parent_id = v;
        }
        if let Some(v) = name {
            self.name = Some(v);
        }
        if let Some(v) = point {
            self.point = v;
        }
        if let Some(v) = scale {
            self.scale = v;
        }
        if let Some(v) = rotation {
            self.rotation = v;
        }
        if let Some(v) = handles {
            self.handles = Some(v);
        }
        if let Some(v) = clipping {
            self.clipping = Some(v);
        }
        if let Some(v) = asset_id {
            self.asset_id = Some(v);
        }
        if let Some(v) = children {
            self.children = Some(v);
        }
        if let Some(v) = is_ghost {
            self.is_ghost = v;
        }
        if let Some(v) = is_hidden {
            self.is_hidden = v;
        }
        if let Some(v) = is_locked {
            self.is_locked = v;
        }
        if let Some(v) = is_generated {
            self.is_generated = v;
        }
        if let Some(v) = is_size_locked {
            self.is_size_locked = v;
        }
        if let Some(v) = is_aspect_ratio_locked {
            self.is_aspect_ratio_locked = v;
        }
        if let Some(v) = size {
            self.size = Some(v);
        }
        if let Some(v) = radius {
            self.radius = Some(v);
        }
        for (key, value) in extra {
            if value.is_null() {
                self.extra.remove(&key);
            } else {
                self.extra.insert(key, value);
            }
        }
    }

    /// Handle points, in key order.
    pub fn handle_points(&self) -> Vec<Point> {
        self.handles
            .as_ref()
            .map(|h| h.values().map(|h| h.point).collect())
            .unwrap_or_default()
    }
}

/// A partial property set. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropsPatch {
    /// Only honoured at construction; ids are immutable afterwards.
    pub id: Option<String>,
    pub parent_id: Option<String>,
    pub name: Option<String>,
    pub point: Option<Point>,
    pub scale: Option<[f64; 2]>,
    pub rotation: Option<f64>,
    pub handles: Option<Handles>,
    pub clipping: Option<Clipping>,
    pub asset_id: Option<String>,
    pub children: Option<Vec<String>>,
    pub is_ghost: Option<bool>,
    pub is_hidden: Option<bool>,
    pub is_locked: Option<bool>,
    pub is_generated: Option<bool>,
    pub is_size_locked: Option<bool>,
    pub is_aspect_ratio_locked: Option<bool>,
    pub size: Option<[f64; 2]>,
    pub radius: Option<f64>,
    pub extra: Map<String, Value>,
}

impl PropsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn point(mut self, point: Point) -> Self {
        self.point = Some(point);
        self
    }

    pub fn scale(mut self, scale: [f64; 2]) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.size = Some([width, height]);
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn handles(mut self, handles: Handles) -> Self {
        self.handles = Some(handles);
        self
    }

    pub fn size_locked(mut self, locked: bool) -> Self {
        self.is_size_locked = Some(locked);
        self
    }

    pub fn aspect_ratio_locked(mut self, locked: bool) -> Self {
        self.is_aspect_ratio_locked = Some(locked);
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Layers `other` on top of `self`; fields set in `other` win.
    pub fn merged(mut self, other: PropsPatch) -> Self {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if other.$field.is_some() { self.$field = other.$field; })*
            };
        }
        take!(
            id,
            parent_id,
            name,
            point,
            scale,
            rotation,
            handles,
            clipping,
            asset_id,
            children,
            is_ghost,
            is_hidden,
            is_locked,
            is_generated,
            is_size_locked,
            is_aspect_ratio_locked,
            size,
            radius
        );
        self.extra.extend(other.extra);
        self
    }
}

impl From<ShapeProps> for PropsPatch {
    fn from(props: ShapeProps) -> Self {
        Self {
            id: Some(props.id),
            parent_id: Some(props.parent_id),
            name: props.name,
            point: Some(props.point),
            scale: Some(props.scale),
            rotation: Some(props.rotation),
            handles: props.handles,
            clipping: props.clipping,
            asset_id: props.asset_id,
            children: props.children,
            is_ghost: Some(props.is_ghost),
            is_hidden: Some(props.is_hidden),
            is_locked: Some(props.is_locked),
            is_generated: Some(props.is_generated),
            is_size_locked: Some(props.is_size_locked),
            is_aspect_ratio_locked: Some(props.is_aspect_ratio_locked),
            size: props.size,
            radius: props.radius,
            extra: props.extra,
        }
    }
}

//! # Shapekit Shapes
//!
//! The shape model: a [`Shape`] container over per-kind behaviour
//! ([`ShapeKind`]), with rotation-aware hit testing, connector binding,
//! resize and handle transforms, and a change-tracked snapshot cache.
//!
//! Shapes are normally built through a [`ShapeRegistry`], which maps the
//! serialized `type` tag to a kind.

pub mod binding;
pub mod cache;
pub mod kind;
pub mod kinds;
pub mod props;
pub mod registry;
pub mod shape;
pub mod transform;

pub use binding::BindingPoint;
pub use cache::ShapeSnapshot;
pub use kind::{DisplayOptions, ShapeCapabilities, ShapeKind};
pub use props::{Clipping, Handle, Handles, PropsPatch, ShapeProps};
pub use registry::ShapeRegistry;
pub use shape::Shape;
pub use transform::{
    HandleChange, ResetBoundsInfo, ResizeCorner, ResizeEdge, ResizeHandle, ResizeInfo,
    ResizeStartInfo,
};

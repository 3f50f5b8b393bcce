//! # Shapekit Core
//!
//! Core types and pure geometry for shapekit.
//! Provides points, axis-aligned bounds, intersection routines and the
//! error types shared by every other crate in the workspace.

pub mod constants;
pub mod error;
pub mod geometry;

pub use constants::{BINDING_DISTANCE, EPSILON};
pub use error::{Error, Result, ShapeError};
pub use geometry::{
    intersect::{
        intersect_line_segment_bounds, intersect_line_segment_line_segment,
        intersect_line_segment_polygon, intersect_line_segment_polyline,
        intersect_polygon_bounds, intersect_ray_bounds, intersect_ray_line_segment, Intersection,
    },
    point_in_polygon, Bounds, BoundsSide, Point,
};

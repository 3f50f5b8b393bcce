//! Pure 2D geometry: points, axis-aligned bounds, polygon containment and
//! intersection routines. Nothing here holds state.

mod bounds;
pub mod intersect;
mod point;
mod polygon;

pub use bounds::{Bounds, BoundsSide};
pub use point::Point;
pub use polygon::point_in_polygon;

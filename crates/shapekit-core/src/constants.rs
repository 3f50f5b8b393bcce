//! Shared geometric constants.

/// Margin used to grow a shape's catchment area for connector binding, and the
/// minimum stand-off distance of a resolved binding anchor.
pub const BINDING_DISTANCE: f64 = 16.0;

/// Tolerance for treating a determinant or rotation angle as zero.
pub const EPSILON: f64 = 1e-9;

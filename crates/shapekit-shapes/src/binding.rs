//! Connector binding: where on a shape a connector end should anchor.

use serde::{Deserialize, Serialize};
use shapekit_core::{intersect_ray_bounds, Point};
use tracing::debug;

use crate::shape::Shape;

/// Anchor expressed relative to the shape's expanded bounds, so it can be
/// re-resolved after the shape moves or resizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BindingPoint {
    /// Each axis in `[0, 1]` across the expanded bounds.
    pub point: Point,
    /// Stand-off between the anchor and the connector end.
    pub distance: f64,
}

impl Shape {
    /// Resolves a connector end at `point`, travelling along the ray
    /// `origin + t * direction`, to a normalized anchor on this shape.
    ///
    /// Returns `None` when `point` is outside the expanded bounds or the ray
    /// misses them; callers treat that as "do not bind".
    pub fn get_binding_point(
        &self,
        point: &Point,
        origin: &Point,
        direction: &Point,
        bind_anywhere: bool,
    ) -> Option<BindingPoint> {
        let bounds = self.bounds();
        let expanded = self.expanded_bounds();

        if !expanded.contains_point(point) {
            debug!(shape = %self.props.id, "binding candidate outside expanded bounds");
            return None;
        }

        let Some(intersection) = intersect_ray_bounds(*origin, *direction, &expanded)
            .into_iter()
            .flat_map(|i| i.points.into_iter().take(1))
            .max_by(|a, b| a.distance_to(origin).total_cmp(&b.distance_to(origin)))
        else {
            debug!(shape = %self.props.id, "binding ray misses expanded bounds");
            return None;
        };

        let center = self.center();
        let middle = point.midpoint(&intersection);
        let snap_radius = self.binding_distance / 2.0;

        let (anchor, distance) = if bind_anywhere {
            let anchor = if point.distance_to(&center) < snap_radius {
                center
            } else {
                *point
            };
            (anchor, 0.0)
        } else {
            let anchor = if center.distance_to_segment(point, &middle) < snap_radius {
                center
            } else {
                middle
            };
            let distance = if bounds.contains_point(point) {
                self.binding_distance
            } else {
                self.binding_distance
                    .max(bounds.distance_to_nearest_side(point))
            };
            (anchor, distance)
        };

        let normalized = (anchor - expanded.top_left()).div_v(&expanded.size());
        Some(BindingPoint {
            point: normalized.clamp(0.0, 1.0),
            distance,
        })
    }

    /// Maps a normalized binding point back to page coordinates against the
    /// current expanded bounds.
    pub fn resolve_binding_anchor(&self, binding: &Point) -> Point {
        let expanded = self.expanded_bounds();
        expanded.top_left() + binding.mul_v(&expanded.size())
    }
}

//! Ray, segment, polyline and box intersection routines.
//!
//! Every routine reports its result as an [`Intersection`]; touching
//! counts as intersecting, so a segment ending exactly on an edge hits it.

use super::{Bounds, Point};
use crate::constants::EPSILON;

/// Result of an intersection query.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    /// Short tag describing what was hit ("intersection", a side name, ...).
    pub message: String,
    pub did_intersect: bool,
    pub points: Vec<Point>,
}

impl Intersection {
    pub fn new(message: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            message: message.into(),
            did_intersect: !points.is_empty(),
            points,
        }
    }

    pub fn none(message: impl Into<String>) -> Self {
        Self::new(message, Vec::new())
    }

    fn tagged(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

/// Intersects the ray `origin + t * direction` (t >= 0) with segment `a1`-`a2`.
pub fn intersect_ray_line_segment(
    origin: Point,
    direction: Point,
    a1: Point,
    a2: Point,
) -> Intersection {
    let s = a2 - a1;
    let denom = direction.cross(&s);
    if denom.abs() < EPSILON {
        return Intersection::none("parallel");
    }
    let w = a1 - origin;
    let t = w.cross(&s) / denom;
    let u = w.cross(&direction) / denom;
    if t >= 0.0 && (0.0..=1.0).contains(&u) {
        Intersection::new("intersection", vec![origin + direction * t])
    } else {
        Intersection::none("no intersection")
    }
}

/// Intersects a ray with each side of `bounds`, returning only sides that were hit.
pub fn intersect_ray_bounds(origin: Point, direction: Point, bounds: &Bounds) -> Vec<Intersection> {
    bounds
        .sides()
        .iter()
        .map(|(side, [a, b])| {
            intersect_ray_line_segment(origin, direction, *a, *b).tagged(side.to_string())
        })
        .filter(|i| i.did_intersect)
        .collect()
}

/// Intersects segment `a1`-`a2` with segment `b1`-`b2`.
///
/// Collinear overlapping segments report the end points of the overlap.
pub fn intersect_line_segment_line_segment(
    a1: Point,
    a2: Point,
    b1: Point,
    b2: Point,
) -> Intersection {
    let r = a2 - a1;
    let s = b2 - b1;
    let qp = b1 - a1;
    let denom = r.cross(&s);

    if denom.abs() < EPSILON {
        if qp.cross(&r).abs() > EPSILON {
            return Intersection::none("parallel");
        }
        return collinear_overlap(a1, r, b1, b2);
    }

    let t = qp.cross(&s) / denom;
    let u = qp.cross(&r) / denom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Intersection::new("intersection", vec![a1 + r * t])
    } else {
        Intersection::none("no intersection")
    }
}

fn collinear_overlap(a1: Point, r: Point, b1: Point, b2: Point) -> Intersection {
    let rr = r.dot(&r);
    if rr < EPSILON {
        // `a` is a single point lying on the line through `b`
        if a1.distance_to_segment(&b1, &b2) < EPSILON {
            return Intersection::new("coincident", vec![a1]);
        }
        return Intersection::none("no intersection");
    }
    let t0 = (b1 - a1).dot(&r) / rr;
    let t1 = (b2 - a1).dot(&r) / rr;
    let lo = t0.min(t1).max(0.0);
    let hi = t0.max(t1).min(1.0);
    if lo > hi {
        return Intersection::none("no intersection");
    }
    let start = a1 + r * lo;
    let end = a1 + r * hi;
    let points = if start.approx_eq(&end, EPSILON) {
        vec![start]
    } else {
        vec![start, end]
    };
    Intersection::new("coincident", points)
}

/// Intersects a segment with each side of `bounds`, returning only sides that were hit.
pub fn intersect_line_segment_bounds(a1: Point, a2: Point, bounds: &Bounds) -> Vec<Intersection> {
    bounds
        .sides()
        .iter()
        .map(|(side, [b1, b2])| {
            intersect_line_segment_line_segment(a1, a2, *b1, *b2).tagged(side.to_string())
        })
        .filter(|i| i.did_intersect)
        .collect()
}

/// Intersects a segment with an open polyline.
pub fn intersect_line_segment_polyline(a1: Point, a2: Point, points: &[Point]) -> Intersection {
    let hits = points
        .windows(2)
        .flat_map(|w| intersect_line_segment_line_segment(a1, a2, w[0], w[1]).points)
        .collect();
    Intersection::new("intersection", hits)
}

/// Intersects a segment with the edges of a closed polygon.
pub fn intersect_line_segment_polygon(a1: Point, a2: Point, points: &[Point]) -> Intersection {
    let n = points.len();
    if n < 2 {
        return Intersection::none("no intersection");
    }
    let hits = (0..n)
        .flat_map(|i| {
            intersect_line_segment_line_segment(a1, a2, points[i], points[(i + 1) % n]).points
        })
        .collect();
    Intersection::new("intersection", hits)
}

/// Intersects each side of `bounds` with the edges of a closed polygon.
pub fn intersect_polygon_bounds(points: &[Point], bounds: &Bounds) -> Vec<Intersection> {
    bounds
        .sides()
        .iter()
        .map(|(side, [a, b])| {
            intersect_line_segment_polygon(*a, *b, points).tagged(side.to_string())
        })
        .filter(|i| i.did_intersect)
        .collect()
}

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Point;

/// One edge of an axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl fmt::Display for BoundsSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Right => write!(f, "right"),
            Self::Bottom => write!(f, "bottom"),
            Self::Left => write!(f, "left"),
        }
    }
}

/// Axis-aligned bounding box.
///
/// Width and height are derived from the extremes, so the two can never
/// disagree.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Box with its top-left corner at `origin`.
    pub fn from_origin_size(origin: Point, width: f64, height: f64) -> Self {
        Self::new(origin.x, origin.y, origin.x + width, origin.y + height)
    }

    /// Smallest box enclosing every point. An empty slice yields a zero box.
    pub fn from_points(points: &[Point]) -> Self {
        if points.is_empty() {
            return Self::default();
        }
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Self::new(min_x, min_y, max_x, max_y)
    }

    /// Minimum x and minimum y across all points, taken independently.
    pub fn common_top_left(points: &[Point]) -> Point {
        let b = Self::from_points(points);
        Point::new(b.min_x, b.min_y)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn size(&self) -> Point {
        Point::new(self.width(), self.height())
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
        )
    }

    /// Corners in clockwise order starting at the top-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x, self.min_y),
            Point::new(self.max_x, self.min_y),
            Point::new(self.max_x, self.max_y),
            Point::new(self.min_x, self.max_y),
        ]
    }

    /// Corners rotated about the box center by `rotation` radians.
    pub fn rotated_corners(&self, rotation: f64) -> [Point; 4] {
        let center = self.center();
        self.corners().map(|c| c.rotate_about(&center, rotation))
    }

    /// Axis-aligned box enclosing this box rotated about its center.
    pub fn rotated(&self, rotation: f64) -> Bounds {
        if rotation == 0.0 {
            return *self;
        }
        Self::from_points(&self.rotated_corners(rotation))
    }

    /// Grows the box outward by `delta` on every side.
    pub fn expand(&self, delta: f64) -> Bounds {
        Self::new(
            self.min_x - delta,
            self.min_y - delta,
            self.max_x + delta,
            self.max_y + delta,
        )
    }

    pub fn translate(&self, delta: Point) -> Bounds {
        Self::new(
            self.min_x + delta.x,
            self.min_y + delta.y,
            self.max_x + delta.x,
            self.max_y + delta.y,
        )
    }

    /// True when `other` lies strictly inside this box.
    pub fn contains(&self, other: &Bounds) -> bool {
        self.min_x < other.min_x
            && self.min_y < other.min_y
            && self.max_x > other.max_x
            && self.max_y > other.max_y
    }

    /// Inclusive point containment; points on an edge count as inside.
    pub fn contains_point(&self, p: &Point) -> bool {
        !(p.x < self.min_x || p.x > self.max_x || p.y < self.min_y || p.y > self.max_y)
    }

    /// The four edges as segments, clockwise from the top.
    pub fn sides(&self) -> [(BoundsSide, [Point; 2]); 4] {
        let [tl, tr, br, bl] = self.corners();
        [
            (BoundsSide::Top, [tl, tr]),
            (BoundsSide::Right, [tr, br]),
            (BoundsSide::Bottom, [br, bl]),
            (BoundsSide::Left, [bl, tl]),
        ]
    }

    /// Shortest distance from `p` to any edge of the box.
    pub fn distance_to_nearest_side(&self, p: &Point) -> f64 {
        self.sides()
            .iter()
            .map(|(_, [a, b])| p.distance_to_segment(a, b))
            .fold(f64::INFINITY, f64::min)
    }
}

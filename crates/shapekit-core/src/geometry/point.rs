use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// A 2D point or vector with X and Y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin.
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of two planar vectors.
    pub fn cross(&self, other: &Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Component-wise product.
    pub fn mul_v(&self, other: &Point) -> Point {
        Point::new(self.x * other.x, self.y * other.y)
    }

    /// Component-wise quotient. Axes with a zero divisor map to zero.
    pub fn div_v(&self, other: &Point) -> Point {
        let div = |a: f64, b: f64| if b == 0.0 { 0.0 } else { a / b };
        Point::new(div(self.x, other.x), div(self.y, other.y))
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Clamps each axis independently into `[min, max]`.
    pub fn clamp(&self, min: f64, max: f64) -> Point {
        Point::new(self.x.clamp(min, max), self.y.clamp(min, max))
    }

    /// Rotates this point about `center` by `angle` radians.
    pub fn rotate_about(&self, center: &Point, angle: f64) -> Point {
        if angle == 0.0 {
            return *self;
        }
        let (s, c) = angle.sin_cos();
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        Point::new(center.x + dx * c - dy * s, center.y + dx * s + dy * c)
    }

    /// Closest point to `self` on the segment `a`-`b`.
    pub fn nearest_point_on_segment(&self, a: &Point, b: &Point) -> Point {
        let ab = *b - *a;
        let len_sq = ab.dot(&ab);
        if len_sq == 0.0 {
            return *a;
        }
        let t = ((*self - *a).dot(&ab) / len_sq).clamp(0.0, 1.0);
        *a + ab * t
    }

    /// Shortest distance from `self` to the segment `a`-`b`.
    pub fn distance_to_segment(&self, a: &Point, b: &Point) -> f64 {
        self.distance_to(&self.nearest_point_on_segment(a, b))
    }

    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl From<[f64; 2]> for Point {
    fn from(v: [f64; 2]) -> Self {
        Point::new(v[0], v[1])
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

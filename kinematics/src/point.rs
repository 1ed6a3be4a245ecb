#[cfg(test)]
#[path = "point_test.rs"]
mod point_test;

use serde::{Deserialize, Serialize};

/// A point in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Four-quadrant angle of the vector from `self` to `other`, or `None`
    /// when the two points coincide.
    #[must_use]
    pub fn heading_to(self, other: Point) -> Option<f64> {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        Some(dy.atan2(dx))
    }

    /// Point at `distance` from `self` along `angle` (radians).
    #[must_use]
    pub fn offset_polar(self, distance: f64, angle: f64) -> Point {
        Point {
            x: self.x + distance * angle.cos(),
            y: self.y + distance * angle.sin(),
        }
    }

    /// Linear interpolation: `t = 0` is `self`, `t = 1` is `other`.
    #[must_use]
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Mirror `other` through `self`.
    #[must_use]
    pub fn reflect(self, other: Point) -> Point {
        Point {
            x: 2.0 * self.x - other.x,
            y: 2.0 * self.y - other.y,
        }
    }

    /// Whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Wrap an angle into `(-π, π]`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

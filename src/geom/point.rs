//! 2D point.
//!
//! The foundation for every shape variant: each stores one or more
//! points and moves/scales through the operations here.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D point in cartesian coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point at the origin (0, 0).
    #[inline]
    pub const fn new() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Creates a point with given coordinates.
    #[inline]
    pub const fn from_coords(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the X coordinate.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Y coordinate.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns coordinates as tuple.
    #[inline]
    pub const fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Sets the X coordinate.
    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    /// Sets the Y coordinate.
    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Sets both coordinates.
    #[inline]
    pub fn set_coord(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Returns the Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns the squared distance to another point.
    #[inline]
    pub const fn square_distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Checks if this point is equal to another within tolerance.
    #[inline]
    pub fn is_equal(&self, other: &Point, tolerance: f64) -> bool {
        self.distance(other) <= tolerance
    }

    /// Translates by (dx, dy).
    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Returns translated copy.
    #[inline]
    pub fn translated(&self, dx: f64, dy: f64) -> Point {
        Point::from_coords(self.x + dx, self.y + dy)
    }

    /// Scales both coordinates by a factor. A true `sign` multiplies,
    /// a false `sign` divides. Dividing by a zero factor is not guarded
    /// and leaves non-finite coordinates.
    #[inline]
    pub fn scale(&mut self, factor: f64, sign: bool) {
        if sign {
            self.x *= factor;
            self.y *= factor;
        } else {
            self.x /= factor;
            self.y /= factor;
        }
    }

    /// Returns scaled copy.
    #[inline]
    pub fn scaled(&self, factor: f64, sign: bool) -> Point {
        let mut result = *self;
        result.scale(factor, sign);
        result
    }

    /// Returns the point as a nalgebra `Point2`.
    #[inline]
    pub fn as_point(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X = {}, Y = {}", self.x, self.y)
    }
}

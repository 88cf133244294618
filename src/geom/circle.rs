//! Circle.

use crate::geom::Point;
use crate::{PlanarError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A circle defined by a center position and radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    position: Point,
    radius: f64,
}

impl Circle {
    /// Creates a circle. The radius is taken as given; a negative value
    /// propagates into a negative perimeter.
    #[inline]
    pub const fn new(position: Point, radius: f64) -> Self {
        Self { position, radius }
    }

    /// Creates a circle, rejecting a non-finite or non-positive radius.
    pub fn try_new(position: Point, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PlanarError::InvalidGeometry(
                "Circle radius must be positive".into(),
            ));
        }
        Ok(Self::new(position, radius))
    }

    /// Returns the center position.
    #[inline]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Returns the radius.
    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Sets the center position.
    #[inline]
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Returns the area, pi * r^2.
    #[inline]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    /// Returns the perimeter (circumference), 2 * pi * r.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }

    /// Moves the center by (dx, dy).
    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.position.translate(dx, dy);
    }

    /// Scales the radius by a factor (true multiplies, false divides).
    #[inline]
    pub fn scale(&mut self, factor: f64, sign: bool) {
        if sign {
            self.radius *= factor;
        } else {
            self.radius /= factor;
        }
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Circle: Coordinates ({}), Radius = {}, Area = {}, Perimeter = {}",
            self.position,
            self.radius,
            self.area(),
            self.perimeter()
        )
    }
}

//! Rectangle.

use crate::geom::Point;
use crate::{PlanarError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangle defined by a reference position, width, and length.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    position: Point,
    width: f64,
    length: f64,
}

impl Rectangle {
    /// Creates a rectangle. Dimensions are taken as given; negative or
    /// zero values propagate into negative/zero area and perimeter.
    #[inline]
    pub const fn new(position: Point, width: f64, length: f64) -> Self {
        Self { position, width, length }
    }

    /// Creates a rectangle, rejecting non-finite or non-positive
    /// dimensions.
    pub fn try_new(position: Point, width: f64, length: f64) -> Result<Self> {
        if !width.is_finite() || !length.is_finite() || width <= 0.0 || length <= 0.0 {
            return Err(PlanarError::InvalidGeometry(
                "Rectangle dimensions must be positive".into(),
            ));
        }
        Ok(Self::new(position, width, length))
    }

    /// Returns the reference position.
    #[inline]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Returns the width.
    #[inline]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Returns the length.
    #[inline]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Sets the reference position.
    #[inline]
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Returns the area (width x length).
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Returns the perimeter, 2(width + length).
    #[inline]
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.length)
    }

    /// Moves the reference position by (dx, dy).
    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.position.translate(dx, dy);
    }

    /// Scales width and length by a factor (true multiplies, false
    /// divides). The position is untouched.
    #[inline]
    pub fn scale(&mut self, factor: f64, sign: bool) {
        if sign {
            self.width *= factor;
            self.length *= factor;
        } else {
            self.width /= factor;
            self.length /= factor;
        }
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle: Coordinates ({}), Width = {}, Length = {}, Area = {}, Perimeter = {}",
            self.position,
            self.width,
            self.length,
            self.area(),
            self.perimeter()
        )
    }
}

//! Square.

use crate::geom::Point;
use crate::{PlanarError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A square defined by a reference position and side length.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Square {
    position: Point,
    side: f64,
}

impl Square {
    /// Creates a square. The side is taken as given; negative or zero
    /// values propagate into zero/negative perimeter (area stays
    /// non-negative since it is the side squared).
    #[inline]
    pub const fn new(position: Point, side: f64) -> Self {
        Self { position, side }
    }

    /// Creates a square, rejecting a non-finite or non-positive side.
    pub fn try_new(position: Point, side: f64) -> Result<Self> {
        if !side.is_finite() || side <= 0.0 {
            return Err(PlanarError::InvalidGeometry(
                "Square side must be positive".into(),
            ));
        }
        Ok(Self::new(position, side))
    }

    /// Returns the reference position.
    #[inline]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Returns the side length.
    #[inline]
    pub const fn side(&self) -> f64 {
        self.side
    }

    /// Sets the reference position.
    #[inline]
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Returns the area (side squared).
    #[inline]
    pub fn area(&self) -> f64 {
        self.side * self.side
    }

    /// Returns the perimeter, 4 x side.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        4.0 * self.side
    }

    /// Moves the reference position by (dx, dy).
    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.position.translate(dx, dy);
    }

    /// Scales the side by a factor (true multiplies, false divides).
    #[inline]
    pub fn scale(&mut self, factor: f64, sign: bool) {
        if sign {
            self.side *= factor;
        } else {
            self.side /= factor;
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Square: Coordinates ({}), Side = {}, Area = {}, Perimeter = {}",
            self.position,
            self.side,
            self.area(),
            self.perimeter()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_area_perimeter() {
        let s = Square::new(Point::from_coords(2.0, 2.0), 5.0);
        assert_eq!(s.area(), 25.0);
        assert_eq!(s.perimeter(), 20.0);
    }

    #[test]
    fn test_square_translate() {
        let mut s = Square::new(Point::from_coords(1.0, 1.0), 5.0);
        s.translate(-1.0, 4.0);
        assert_eq!(s.position().coords(), (0.0, 5.0));
        assert_eq!(s.side(), 5.0);
    }

    #[test]
    fn test_square_scale_round_trip() {
        let mut s = Square::new(Point::new(), 5.0);
        s.scale(3.0, true);
        assert_eq!(s.side(), 15.0);
        s.scale(3.0, false);
        assert!((s.side() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_square_try_new_rejects_bad_side() {
        let p = Point::new();
        assert!(Square::try_new(p, 5.0).is_ok());
        assert!(Square::try_new(p, 0.0).is_err());
        assert!(Square::try_new(p, f64::INFINITY).is_err());
    }

    #[test]
    fn test_square_display() {
        let s = Square::new(Point::from_coords(2.0, 3.0), 5.0);
        assert_eq!(
            s.to_string(),
            "Square: Coordinates (X = 2, Y = 3), Side = 5, Area = 25, Perimeter = 20"
        );
    }
}

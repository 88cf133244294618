//! Triangle.

use crate::geom::Point;
use crate::precision;
use crate::{PlanarError, Result};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A triangle defined by its three vertices. There is no separate
/// reference position; the first vertex serves as one for display.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    v1: Point,
    v2: Point,
    v3: Point,
}

impl Triangle {
    /// Creates a triangle from three vertices. Degenerate (collinear or
    /// coincident) vertices are accepted; `area` on such a triangle is
    /// meaningless (NaN, or zero up to rounding).
    #[inline]
    pub const fn new(v1: Point, v2: Point, v3: Point) -> Self {
        Self { v1, v2, v3 }
    }

    /// Creates a triangle, rejecting non-finite or degenerate vertices.
    pub fn try_new(v1: Point, v2: Point, v3: Point) -> Result<Self> {
        for v in [&v1, &v2, &v3] {
            if !v.x().is_finite() || !v.y().is_finite() {
                return Err(PlanarError::InvalidGeometry(
                    "Triangle vertices must be finite".into(),
                ));
            }
        }
        let t = Self::new(v1, v2, v3);
        if t.is_degenerate() {
            return Err(PlanarError::DegenerateTriangle(
                "vertices are collinear or coincident".into(),
            ));
        }
        Ok(t)
    }

    /// Returns the three vertices.
    #[inline]
    pub const fn vertices(&self) -> (Point, Point, Point) {
        (self.v1, self.v2, self.v3)
    }

    /// Returns the first vertex.
    #[inline]
    pub const fn v1(&self) -> Point {
        self.v1
    }

    /// Returns the second vertex.
    #[inline]
    pub const fn v2(&self) -> Point {
        self.v2
    }

    /// Returns the third vertex.
    #[inline]
    pub const fn v3(&self) -> Point {
        self.v3
    }

    /// Returns the three side lengths (v1-v2, v2-v3, v3-v1).
    #[inline]
    pub fn side_lengths(&self) -> (f64, f64, f64) {
        (
            self.v1.distance(&self.v2),
            self.v2.distance(&self.v3),
            self.v3.distance(&self.v1),
        )
    }

    /// Checks whether the vertices span no area (collinear or
    /// coincident), via the cross product of two edge vectors.
    pub fn is_degenerate(&self) -> bool {
        let e1 = Vector2::new(self.v2.x() - self.v1.x(), self.v2.y() - self.v1.y());
        let e2 = Vector2::new(self.v3.x() - self.v1.x(), self.v3.y() - self.v1.y());
        let cross = e1.x * e2.y - e1.y * e2.x;
        cross.abs() <= precision::SQUARE_CONFUSION
    }

    /// Returns the area by Heron's formula. For degenerate vertices the
    /// radicand lands at or below zero up to rounding, so the result is
    /// zero-ish or NaN rather than an error.
    pub fn area(&self) -> f64 {
        let (a, b, c) = self.side_lengths();
        let s = (a + b + c) / 2.0;
        (s * (s - a) * (s - b) * (s - c)).sqrt()
    }

    /// Returns the perimeter, the sum of the three side lengths.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        let (a, b, c) = self.side_lengths();
        a + b + c
    }

    /// Moves all three vertices by (dx, dy).
    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.v1.translate(dx, dy);
        self.v2.translate(dx, dy);
        self.v3.translate(dx, dy);
    }

    /// Scales all three vertices about the origin by a factor (true
    /// multiplies, false divides).
    #[inline]
    pub fn scale(&mut self, factor: f64, sign: bool) {
        self.v1.scale(factor, sign);
        self.v2.scale(factor, sign);
        self.v3.scale(factor, sign);
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Triangle: Vertices ({}), ({}), ({}), Area = {}, Perimeter = {}",
            self.v1,
            self.v2,
            self.v3,
            self.area(),
            self.perimeter()
        )
    }
}

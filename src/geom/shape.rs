//! Generic shape enum.
//!
//! A closed set of variants dispatching the common capability set:
//! area, perimeter, translate, scale, display.

use crate::geom::{Circle, Point, Rectangle, Square, Triangle};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Any of the supported shape variants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Square(Square),
    Circle(Circle),
    Triangle(Triangle),
}

impl Shape {
    /// Returns the area of the shape.
    pub fn area(&self) -> f64 {
        match self {
            Shape::Rectangle(r) => r.area(),
            Shape::Square(s) => s.area(),
            Shape::Circle(c) => c.area(),
            Shape::Triangle(t) => t.area(),
        }
    }

    /// Returns the perimeter of the shape.
    pub fn perimeter(&self) -> f64 {
        match self {
            Shape::Rectangle(r) => r.perimeter(),
            Shape::Square(s) => s.perimeter(),
            Shape::Circle(c) => c.perimeter(),
            Shape::Triangle(t) => t.perimeter(),
        }
    }

    /// Moves the shape by (dx, dy). For a triangle all three vertices
    /// move; for the others the reference position moves.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Rectangle(r) => r.translate(dx, dy),
            Shape::Square(s) => s.translate(dx, dy),
            Shape::Circle(c) => c.translate(dx, dy),
            Shape::Triangle(t) => t.translate(dx, dy),
        }
    }

    /// Scales the shape's defining dimensions by a factor (true
    /// multiplies, false divides). Positions stay put, except for a
    /// triangle whose vertices scale about the origin.
    pub fn scale(&mut self, factor: f64, sign: bool) {
        match self {
            Shape::Rectangle(r) => r.scale(factor, sign),
            Shape::Square(s) => s.scale(factor, sign),
            Shape::Circle(c) => c.scale(factor, sign),
            Shape::Triangle(t) => t.scale(factor, sign),
        }
    }

    /// Returns the informational side count (0 for a circle).
    pub const fn sides(&self) -> u32 {
        match self {
            Shape::Rectangle(_) | Shape::Square(_) => 4,
            Shape::Circle(_) => 0,
            Shape::Triangle(_) => 3,
        }
    }

    /// Returns the display/reference position: the stored position for
    /// rectangle, square, and circle; the first vertex for a triangle.
    pub const fn reference_point(&self) -> Point {
        match self {
            Shape::Rectangle(r) => r.position(),
            Shape::Square(s) => s.position(),
            Shape::Circle(c) => c.position(),
            Shape::Triangle(t) => t.v1(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Rectangle(r) => fmt::Display::fmt(r, f),
            Shape::Square(s) => fmt::Display::fmt(s, f),
            Shape::Circle(c) => fmt::Display::fmt(c, f),
            Shape::Triangle(t) => fmt::Display::fmt(t, f),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl From<Square> for Shape {
    fn from(s: Square) -> Self {
        Shape::Square(s)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Shape::Triangle(t)
    }
}

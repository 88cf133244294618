//! Shape validity checking.
//!
//! The shape types themselves accept whatever numbers they are given;
//! malformed input propagates as negative, zero, or non-finite results.
//! This module is the opt-in guard: it reports every issue found in a
//! shape or collection, and validates scale factors before the unguarded
//! divide path is taken.

use crate::collection::ShapeCollection;
use crate::geom::{Point, Shape};
use crate::{PlanarError, Result};
use std::fmt;

/// Issues found during shape validation
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeIssue {
    /// A defining dimension is zero or negative
    NonPositiveDimension {
        name: &'static str,
        value: f64,
    },

    /// A defining dimension is NaN or infinite
    NonFiniteDimension {
        name: &'static str,
        value: f64,
    },

    /// A coordinate is NaN or infinite
    NonFiniteCoordinate {
        name: &'static str,
        x: f64,
        y: f64,
    },

    /// Triangle vertices are collinear or coincident
    DegenerateTriangle {
        area: f64,
    },
}

impl fmt::Display for ShapeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeIssue::NonPositiveDimension { name, value } => {
                write!(f, "Non-positive {}: {}", name, value)
            }
            ShapeIssue::NonFiniteDimension { name, value } => {
                write!(f, "Non-finite {}: {}", name, value)
            }
            ShapeIssue::NonFiniteCoordinate { name, x, y } => {
                write!(f, "Non-finite {}: ({}, {})", name, x, y)
            }
            ShapeIssue::DegenerateTriangle { area } => {
                write!(f, "Degenerate triangle: area = {}", area)
            }
        }
    }
}

fn check_point(name: &'static str, point: Point, issues: &mut Vec<ShapeIssue>) {
    let (x, y) = point.coords();
    if !x.is_finite() || !y.is_finite() {
        issues.push(ShapeIssue::NonFiniteCoordinate { name, x, y });
    }
}

fn check_dimension(name: &'static str, value: f64, issues: &mut Vec<ShapeIssue>) {
    if !value.is_finite() {
        issues.push(ShapeIssue::NonFiniteDimension { name, value });
    } else if value <= 0.0 {
        issues.push(ShapeIssue::NonPositiveDimension { name, value });
    }
}

/// Check a shape and return all issues found, empty when clean.
pub fn check_shape(shape: &Shape) -> Vec<ShapeIssue> {
    let mut issues = Vec::new();

    match shape {
        Shape::Rectangle(r) => {
            check_point("rectangle position", r.position(), &mut issues);
            check_dimension("rectangle width", r.width(), &mut issues);
            check_dimension("rectangle length", r.length(), &mut issues);
        }
        Shape::Square(s) => {
            check_point("square position", s.position(), &mut issues);
            check_dimension("square side", s.side(), &mut issues);
        }
        Shape::Circle(c) => {
            check_point("circle position", c.position(), &mut issues);
            check_dimension("circle radius", c.radius(), &mut issues);
        }
        Shape::Triangle(t) => {
            check_point("triangle vertex 1", t.v1(), &mut issues);
            check_point("triangle vertex 2", t.v2(), &mut issues);
            check_point("triangle vertex 3", t.v3(), &mut issues);
            if issues.is_empty() && t.is_degenerate() {
                issues.push(ShapeIssue::DegenerateTriangle { area: t.area() });
            }
        }
    }

    issues
}

/// Check every shape in a collection. Issues are tagged with the shape's
/// 1-based position.
pub fn check_collection(collection: &ShapeCollection) -> Vec<(usize, ShapeIssue)> {
    let mut tagged = Vec::new();
    for (i, shape) in collection.iter().enumerate() {
        for issue in check_shape(shape) {
            tagged.push((i + 1, issue));
        }
    }
    tagged
}

/// Validate a scale factor before applying it. Scaling down divides by
/// the factor, so a zero factor is rejected; the core scale operations
/// leave that path unguarded.
pub fn check_scale_factor(factor: f64, sign: bool) -> Result<()> {
    if !sign && factor == 0.0 {
        return Err(PlanarError::ZeroScaleFactor);
    }
    if !factor.is_finite() {
        return Err(PlanarError::InvalidGeometry(
            "Scale factor must be finite".into(),
        ));
    }
    Ok(())
}

//! planar: 2D shape management kernel
//!
//! Geometric value types (point, rectangle, square, circle, triangle),
//! a closed shape sum type with uniform transform dispatch, and an
//! ordered positional collection.

pub mod precision;
pub mod geom;
pub mod collection;
pub mod check;

// Re-exports for convenience
pub use geom::{Point, Rectangle, Square, Circle, Triangle, Shape};
pub use collection::ShapeCollection;
pub use check::{check_shape, check_collection, check_scale_factor, ShapeIssue};

/// Result type for planar operations
pub type Result<T> = std::result::Result<T, PlanarError>;

#[derive(Debug, thiserror::Error)]
pub enum PlanarError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Degenerate triangle: {0}")]
    DegenerateTriangle(String),

    #[error("Scale factor must be non-zero when scaling down")]
    ZeroScaleFactor,
}

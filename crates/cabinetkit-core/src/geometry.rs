//! Geometry aliases.
//!
//! Cabinet-frame coordinates: x across the width (right positive), y up,
//! z toward the front. The origin is the vertical center of the block stack.

/// A point in the cabinet frame.
pub type Point3 = nalgebra::Point3<f64>;

/// Full extents or a direction in the cabinet frame.
pub type Vector3 = nalgebra::Vector3<f64>;

/// A point in a technical view's drawing plane.
pub type Point2 = nalgebra::Point2<f64>;

/// A direction in a technical view's drawing plane.
pub type Vector2 = nalgebra::Vector2<f64>;

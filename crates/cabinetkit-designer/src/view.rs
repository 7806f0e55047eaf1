//! Drawing-plane axes and cameras for the technical views.
//!
//! Each technical view projects the cabinet frame onto a `(u, v)` plane:
//!
//! ```text
//! view        u     v     camera eye   camera up
//! plan        x    -z     +y           (0, 0, -1)
//! elevation   x     y     +z           (0, 1, 0)
//! section    -z     y     +x           (0, 1, 0)
//! ```
//!
//! `u` grows to the right of the drawing and `v` grows up.

use cabinetkit_core::{CabinetConfig, Point2, Point3, TechView, Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// Camera orientation for one technical view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Unit vector from the target toward the eye
    pub eye_direction: Vector3,
    pub up: Vector3,
}

/// Axis pair of one technical view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewAxes {
    pub view: TechView,
}

impl ViewAxes {
    pub fn new(view: TechView) -> Self {
        Self { view }
    }

    /// Drawing-plane right direction in the cabinet frame.
    pub fn right(&self) -> Vector3 {
        match self.view {
            TechView::Plan | TechView::Elevation => Vector3::x(),
            TechView::Section => -Vector3::z(),
        }
    }

    /// Drawing-plane up direction in the cabinet frame.
    pub fn up(&self) -> Vector3 {
        match self.view {
            TechView::Plan => -Vector3::z(),
            TechView::Elevation | TechView::Section => Vector3::y(),
        }
    }

    pub fn camera(&self) -> Camera {
        Camera {
            eye_direction: self.right().cross(&self.up()),
            up: self.up(),
        }
    }

    /// Project a cabinet-frame point onto the drawing plane.
    pub fn project(&self, p: &Point3) -> Point2 {
        Point2::new(p.coords.dot(&self.right()), p.coords.dot(&self.up()))
    }

    /// Project a cabinet-frame direction onto the drawing plane.
    pub fn project_vector(&self, v: &Vector3) -> Vector2 {
        Vector2::new(v.dot(&self.right()), v.dot(&self.up()))
    }

    /// Extent of the object along `u`.
    pub fn across(&self, config: &CabinetConfig) -> f64 {
        match self.view {
            TechView::Plan | TechView::Elevation => config.width,
            TechView::Section => config.depth,
        }
    }

    /// Extent of the object along `v`, including the plinth.
    pub fn upright(&self, config: &CabinetConfig) -> f64 {
        match self.view {
            TechView::Plan => config.depth,
            TechView::Elevation | TechView::Section => config.drawn_height(),
        }
    }

    /// Whether `v` measures height.
    pub fn is_upright_height(&self) -> bool {
        self.view != TechView::Plan
    }
}

/// Signed angle in degrees from `a` to `b`, counter-clockwise positive.
pub fn signed_angle(a: &Vector2, b: &Vector2) -> f64 {
    let cross = a.x * b.y - a.y * b.x;
    cross.atan2(a.dot(b)).to_degrees()
}

/// Angle of `v` from the `u` axis in degrees.
pub fn heading(v: &Vector2) -> f64 {
    v.y.atan2(v.x).to_degrees()
}

//! Panel descriptors emitted by the layout and opening passes.

use cabinetkit_core::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a panel is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelRole {
    Side,
    Top,
    Bottom,
    Back,
    Front,
    Shelf,
    Lid,
    Door,
    Knob,
    DrawerFace,
    DrawerHandle,
    DrawerBox,
    /// Drawer outline seen in the section view
    DrawerProfile,
    Skirting,
    Foot,
}

impl fmt::Display for PanelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Side => "side",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Back => "back",
            Self::Front => "front",
            Self::Shelf => "shelf",
            Self::Lid => "lid",
            Self::Door => "door",
            Self::Knob => "knob",
            Self::DrawerFace => "drawer-face",
            Self::DrawerHandle => "drawer-handle",
            Self::DrawerBox => "drawer-box",
            Self::DrawerProfile => "drawer-profile",
            Self::Skirting => "skirting",
            Self::Foot => "foot",
        };
        write!(f, "{}", name)
    }
}

/// Solid used to draw a panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelShape {
    /// Rectangular solid filling `size`
    Box,
    /// Upright cylinder; `size.y` is its height
    Cylinder { radius: f64 },
    Sphere { radius: f64 },
    /// Edges of the `size` rectangle only, no fill
    Outline,
}

/// One solid of the compiled scene, in the cabinet frame.
///
/// Movable panels are given in their closed position; `element_id` names the
/// [`crate::openings::OpeningPose`] that moves them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub role: PanelRole,
    pub block_id: Option<String>,
    pub element_id: Option<String>,
    pub center: Point3,
    /// Full extents along x, y and z
    pub size: Vector3,
    pub shape: PanelShape,
}

impl PanelSpec {
    /// A box panel.
    pub fn solid(role: PanelRole, center: Point3, size: Vector3) -> Self {
        Self {
            role,
            block_id: None,
            element_id: None,
            center,
            size,
            shape: PanelShape::Box,
        }
    }

    /// A ball knob or handle.
    pub fn sphere(role: PanelRole, center: Point3, radius: f64) -> Self {
        let d = 2.0 * radius;
        Self {
            shape: PanelShape::Sphere { radius },
            ..Self::solid(role, center, Vector3::new(d, d, d))
        }
    }

    /// Attach the panel to a block.
    pub fn in_block(mut self, block_id: &str) -> Self {
        self.block_id = Some(block_id.to_string());
        self
    }

    /// Attach the panel to a movable element.
    pub fn moved_by(mut self, element_id: &str) -> Self {
        self.element_id = Some(element_id.to_string());
        self
    }

    /// Shift the panel vertically; used to move block-local panels into the
    /// cabinet frame.
    pub fn raised(mut self, dy: f64) -> Self {
        self.center.y += dy;
        self
    }

    /// Smallest corner of the panel's bounding box.
    pub fn min(&self) -> Point3 {
        self.center - self.size / 2.0
    }

    /// Largest corner of the panel's bounding box.
    pub fn max(&self) -> Point3 {
        self.center + self.size / 2.0
    }

    /// Volume of the bounding box.
    pub fn volume(&self) -> f64 {
        self.size.x * self.size.y * self.size.z
    }
}

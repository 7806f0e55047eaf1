//! View envelopes and the shared drawing scale.
//!
//! Each technical view needs a square world-space window large enough for
//! the object, its dimension labels and any door swing. All three views are
//! drawn with the largest of those windows so they share one scale.

use cabinetkit_core::{
    BlockKind, CabinetConfig, DrawingStyle, Point3, Result, TechView, ValidationError,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::view::{Camera, ViewAxes};

/// World-space window of one technical view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewEnvelope {
    pub view: TechView,
    /// Window this view alone would need
    pub extent: f64,
    /// Window actually used; the same for every view
    pub size: f64,
    /// Camera target in world coordinates
    pub center: Point3,
    /// World position of the cabinet-frame origin
    pub origin: Point3,
    pub camera: Camera,
}

impl ViewEnvelope {
    /// Camera target in the cabinet frame, where the panels and dimension
    /// lines live.
    pub fn frame_center(&self) -> Point3 {
        self.center - self.origin.coords
    }
}

/// Envelopes of all three technical views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewEnvelopes {
    pub plan: ViewEnvelope,
    pub elevation: ViewEnvelope,
    pub section: ViewEnvelope,
    /// Largest per-view extent
    pub global: f64,
    /// Allowance for the widest open door leaf
    pub door_extent: f64,
    pub fit_ratio: f64,
}

impl ViewEnvelopes {
    pub fn get(&self, view: TechView) -> &ViewEnvelope {
        match view {
            TechView::Plan => &self.plan,
            TechView::Elevation => &self.elevation,
            TechView::Section => &self.section,
        }
    }

    /// Pixels per millimetre for a viewport of `width x height` pixels. The
    /// same zoom applies to all three views.
    pub fn zoom(&self, width: f64, height: f64) -> Result<f64> {
        if !(width > 0.0 && height > 0.0) {
            return Err(ValidationError::EmptyViewport { width, height }.into());
        }
        Ok(width.min(height) / self.global * self.fit_ratio)
    }
}

/// Room reserved in front of the object for open doors.
///
/// The block with open doors and the fewest columns has the widest leaves;
/// its leaf width is the allowance.
pub fn door_extent(config: &CabinetConfig) -> f64 {
    let fewest_cols = config
        .blocks
        .iter()
        .filter(|b| matches!(b.kind, BlockKind::Doors { open: true, .. }))
        .map(|b| b.cols)
        .min();
    match fewest_cols {
        Some(cols) => config.width / f64::from(cols.max(1)),
        None => 0.0,
    }
}

/// Compute the envelopes for `config`.
pub fn compute(config: &CabinetConfig, style: &DrawingStyle) -> ViewEnvelopes {
    let l = style.label_offset;
    let p = style.padding;
    let door = door_extent(config);
    let w = config.width;
    let d = config.depth;
    let h = config.drawn_height();
    let cy = config.world_origin_y();

    let plan = (w + l).max(d + door + l) + p;
    let elevation = (w + l).max(h + l) + p;
    let section = (d + door + l).max(h + l) + p;
    let global = plan.max(elevation).max(section);

    let envelope = |view: TechView, extent: f64, center: Point3| ViewEnvelope {
        view,
        extent,
        size: global,
        center,
        origin: Point3::new(0.0, cy, 0.0),
        camera: ViewAxes::new(view).camera(),
    };

    debug!(
        "View envelopes: plan {}, elevation {}, section {}, global {}",
        plan, elevation, section, global
    );

    ViewEnvelopes {
        plan: envelope(TechView::Plan, plan, Point3::new(-l / 2.0, cy, (door - l) / 2.0)),
        elevation: envelope(
            TechView::Elevation,
            elevation,
            Point3::new(-l / 2.0, cy + l / 2.0, 0.0),
        ),
        section: envelope(TechView::Section, section, Point3::new(0.0, cy + l / 2.0, -l / 2.0)),
        global,
        door_extent: door,
        fit_ratio: style.fit_ratio,
    }
}

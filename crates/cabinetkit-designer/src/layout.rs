//! Carcass layout.
//!
//! Stacks the blocks bottom to top around the cabinet-frame origin and emits
//! the structural panels, shelves, trunk bodies, skirting and feet.

use cabinetkit_core::constants::{FOOT_RADIUS, PANEL_THICKNESS, SHELF_SETBACK};
use cabinetkit_core::{Block, BlockKind, CabinetConfig, Point3, Result, Vector3, ViewMode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::openings::lid_element_id;
use crate::panels::{PanelRole, PanelShape, PanelSpec};

/// Vertical extent of one block in the cabinet frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockBounds {
    pub block_id: String,
    /// Position in the stack, 0 at the bottom
    pub index: usize,
    pub base_y: f64,
    pub top_y: f64,
}

impl BlockBounds {
    pub fn height(&self) -> f64 {
        self.top_y - self.base_y
    }

    pub fn center_y(&self) -> f64 {
        (self.base_y + self.top_y) / 2.0
    }
}

/// Output of the layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Carcass panels, shelves, trunk lids and skirting in emission order
    pub panels: Vec<PanelSpec>,
    /// Cylindrical feet, front and back alternating
    pub feet: Vec<PanelSpec>,
    /// One entry per block, bottom to top
    pub block_bounds: Vec<BlockBounds>,
    pub total_height: f64,
}

/// Lay out the carcass of `config` as seen in `view`.
///
/// The configuration is validated first; nothing is emitted for an invalid
/// snapshot.
pub fn compile(config: &CabinetConfig, view: ViewMode) -> Result<Layout> {
    config.validate()?;

    let block_bounds = stack_blocks(config);
    let total_height = config.total_height();

    let mut panels = Vec::new();
    for (block, bounds) in config.blocks.iter().zip(&block_bounds) {
        let start = panels.len();
        match block.kind {
            BlockKind::Trunk { .. } => push_trunk_panels(&mut panels, config, block, view),
            _ => push_carcass_panels(&mut panels, config, block, view),
        }
        push_shelves(&mut panels, config, block);

        let dy = bounds.center_y();
        for panel in &mut panels[start..] {
            panel.center.y += dy;
        }
    }

    if let Some(skirting) = skirting(config) {
        panels.push(skirting);
    }

    let feet = feet(config);

    debug!(
        "Laid out {} blocks for {} view: {} panels, {} feet, total height {}",
        block_bounds.len(),
        view,
        panels.len(),
        feet.len(),
        total_height
    );

    Ok(Layout {
        panels,
        feet,
        block_bounds,
        total_height,
    })
}

/// Stack the blocks so the whole stack is centered on y = 0.
pub fn stack_blocks(config: &CabinetConfig) -> Vec<BlockBounds> {
    let mut base_y = -config.total_height() / 2.0;
    config
        .blocks
        .iter()
        .enumerate()
        .map(|(index, block)| {
            let bounds = BlockBounds {
                block_id: block.id.clone(),
                index,
                base_y,
                top_y: base_y + block.height,
            };
            base_y = bounds.top_y;
            bounds
        })
        .collect()
}

/// Shelf center lines relative to the block center.
///
/// Shelves divide the span between the top and bottom panel center lines
/// into `count + 1` equal gaps.
pub fn shelf_positions(block_height: f64, count: u32) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let span = block_height - PANEL_THICKNESS;
    let spacing = span / f64::from(count + 1);
    let first = -block_height / 2.0 + PANEL_THICKNESS / 2.0;
    (1..=count).map(|i| first + spacing * f64::from(i)).collect()
}

/// Split a trunk block into `(lid, body)` heights using the clamped lid.
pub fn trunk_split(block: &Block) -> Option<(f64, f64)> {
    block
        .clamped_lid_height()
        .map(|lid| (lid, block.height - lid))
}

fn push_carcass_panels(
    panels: &mut Vec<PanelSpec>,
    config: &CabinetConfig,
    block: &Block,
    view: ViewMode,
) {
    let (w, d, h) = (config.width, config.depth, block.height);
    let t = PANEL_THICKNESS;
    let id = block.id.as_str();

    panels.push(
        PanelSpec::solid(
            PanelRole::Side,
            Point3::new(-w / 2.0 + t / 2.0, 0.0, 0.0),
            Vector3::new(t, h, d),
        )
        .in_block(id),
    );
    if !view.hides_far_side() {
        panels.push(
            PanelSpec::solid(
                PanelRole::Side,
                Point3::new(w / 2.0 - t / 2.0, 0.0, 0.0),
                Vector3::new(t, h, d),
            )
            .in_block(id),
        );
    }
    panels.push(
        PanelSpec::solid(
            PanelRole::Top,
            Point3::new(0.0, h / 2.0 - t / 2.0, 0.0),
            Vector3::new(w - 2.0 * t, t, d),
        )
        .in_block(id),
    );
    panels.push(
        PanelSpec::solid(
            PanelRole::Bottom,
            Point3::new(0.0, -h / 2.0 + t / 2.0, 0.0),
            Vector3::new(w - 2.0 * t, t, d),
        )
        .in_block(id),
    );
    panels.push(
        PanelSpec::solid(
            PanelRole::Back,
            Point3::new(0.0, 0.0, -d / 2.0 + t / 2.0),
            Vector3::new(w, h, t),
        )
        .in_block(id),
    );
}

fn push_trunk_panels(
    panels: &mut Vec<PanelSpec>,
    config: &CabinetConfig,
    block: &Block,
    view: ViewMode,
) {
    let Some((lid, body)) = trunk_split(block) else {
        return;
    };
    let (w, d, h) = (config.width, config.depth, block.height);
    let t = PANEL_THICKNESS;
    let id = block.id.as_str();
    let body_y = -h / 2.0 + body / 2.0;
    let body_top = -h / 2.0 + body;

    panels.push(
        PanelSpec::solid(
            PanelRole::Bottom,
            Point3::new(0.0, -h / 2.0 + t / 2.0, 0.0),
            Vector3::new(w - 2.0 * t, t, d),
        )
        .in_block(id),
    );
    panels.push(
        PanelSpec::solid(
            PanelRole::Side,
            Point3::new(-w / 2.0 + t / 2.0, body_y, 0.0),
            Vector3::new(t, body, d),
        )
        .in_block(id),
    );
    if !view.hides_far_side() {
        panels.push(
            PanelSpec::solid(
                PanelRole::Side,
                Point3::new(w / 2.0 - t / 2.0, body_y, 0.0),
                Vector3::new(t, body, d),
            )
            .in_block(id),
        );
    }
    panels.push(
        PanelSpec::solid(
            PanelRole::Front,
            Point3::new(0.0, body_y, d / 2.0 - t / 2.0),
            Vector3::new(w, body, t),
        )
        .in_block(id),
    );
    panels.push(
        PanelSpec::solid(
            PanelRole::Back,
            Point3::new(0.0, body_y, -d / 2.0 + t / 2.0),
            Vector3::new(w, body, t),
        )
        .in_block(id),
    );

    if lid > 0.0 {
        panels.push(
            PanelSpec::solid(
                PanelRole::Lid,
                Point3::new(0.0, body_top + lid / 2.0, 0.0),
                Vector3::new(w, lid, d),
            )
            .in_block(id)
            .moved_by(&lid_element_id(id)),
        );
    }
}

fn push_shelves(panels: &mut Vec<PanelSpec>, config: &CabinetConfig, block: &Block) {
    let size = Vector3::new(
        config.width - 2.0 * PANEL_THICKNESS,
        PANEL_THICKNESS,
        config.depth - SHELF_SETBACK,
    );
    for y in shelf_positions(block.height, block.kind.shelves()) {
        let center = Point3::new(0.0, y, 0.0);
        panels.push(PanelSpec::solid(PanelRole::Shelf, center, size).in_block(&block.id));
    }
}

fn skirting(config: &CabinetConfig) -> Option<PanelSpec> {
    if !config.show_skirting || config.floor_height <= 0.0 {
        return None;
    }
    let floor = config.floor_height;
    let recess = config.recess_distance;
    Some(PanelSpec::solid(
        PanelRole::Skirting,
        Point3::new(0.0, -config.total_height() / 2.0 - floor / 2.0, recess / 2.0),
        Vector3::new(config.width, floor, config.depth - recess),
    ))
}

/// Feet under the stack, front then back for each position along the width.
pub fn feet(config: &CabinetConfig) -> Vec<PanelSpec> {
    if !config.show_feet || config.floor_height <= 0.0 {
        return Vec::new();
    }

    let per_row = config.feet_per_row;
    let inset = config.feet_inset();
    let spacing = if per_row > 1 {
        (config.width - 2.0 * inset) / f64::from(per_row - 1)
    } else {
        0.0
    };
    let floor = config.floor_height;
    let y = -config.total_height() / 2.0 - floor / 2.0;
    let front_z = config.depth / 2.0 - inset;
    let back_z = -config.depth / 2.0 + inset;
    let size = Vector3::new(2.0 * FOOT_RADIUS, floor, 2.0 * FOOT_RADIUS);

    let mut feet = Vec::with_capacity(2 * per_row as usize);
    for i in 0..per_row {
        let x = -config.width / 2.0 + inset + spacing * f64::from(i);
        for z in [front_z, back_z] {
            feet.push(PanelSpec {
                shape: PanelShape::Cylinder {
                    radius: FOOT_RADIUS,
                },
                ..PanelSpec::solid(PanelRole::Foot, Point3::new(x, y, z), size)
            });
        }
    }
    feet
}

//! Cabinet configuration model.
//!
//! `CabinetConfig` is the immutable snapshot read by one compilation pass.
//! Edits never mutate a snapshot in place: they build a new one, which the
//! caller validates before handing it to the compiler.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{FACE_GAP, FOOT_CLEARANCE, MIN_FEET_PER_ROW, PANEL_THICKNESS};
use crate::error::{GeometricDegeneracy, InvariantViolation, Result, ValidationError};

/// One of the three orthographic technical drawings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechView {
    /// Top-down drawing
    Plan,
    /// Front drawing
    Elevation,
    /// Side drawing with the near side panel removed
    Section,
}

impl TechView {
    /// All technical views in drawing-sheet order.
    pub const ALL: [TechView; 3] = [TechView::Plan, TechView::Elevation, TechView::Section];
}

impl fmt::Display for TechView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plan => write!(f, "plan"),
            Self::Elevation => write!(f, "elevation"),
            Self::Section => write!(f, "section"),
        }
    }
}

/// What a compilation pass is producing geometry for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// The shaded 3D model
    Perspective,
    /// Top-down technical drawing
    Plan,
    /// Front technical drawing
    Elevation,
    /// Side technical drawing
    Section,
}

impl ViewMode {
    /// The technical view this mode draws, if any.
    pub fn tech_view(self) -> Option<TechView> {
        match self {
            Self::Perspective => None,
            Self::Plan => Some(TechView::Plan),
            Self::Elevation => Some(TechView::Elevation),
            Self::Section => Some(TechView::Section),
        }
    }

    /// Whether this is one of the orthographic technical views.
    pub fn is_technical(self) -> bool {
        self != Self::Perspective
    }

    /// The section view looks in from the right, so the right-hand side
    /// panel is cut away.
    pub fn hides_far_side(self) -> bool {
        self == Self::Section
    }
}

impl From<TechView> for ViewMode {
    fn from(view: TechView) -> Self {
        match view {
            TechView::Plan => Self::Plan,
            TechView::Elevation => Self::Elevation,
            TechView::Section => Self::Section,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tech_view() {
            Some(view) => view.fmt(f),
            None => write!(f, "perspective"),
        }
    }
}

/// The opening treatment of one block. Exactly one applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    /// Open compartment with evenly spaced shelves
    Shelves {
        /// Number of shelves
        shelves: u32,
    },
    /// Hinged doors in front of evenly spaced shelves
    Doors {
        /// Whether the doors are drawn open
        open: bool,
        /// Number of shelves behind the doors
        shelves: u32,
    },
    /// One drawer per grid cell
    Drawers {
        /// Whether the bottom row is drawn pulled out
        open: bool,
    },
    /// Chest body with a lid hinged along the back
    Trunk {
        /// Requested lid height before clamping
        lid_height: f64,
        /// Whether the lid is drawn tipped back
        lid_open: bool,
    },
}

impl BlockKind {
    /// Number of shelves; zero for kinds that cannot carry shelves.
    pub fn shelves(&self) -> u32 {
        match self {
            Self::Shelves { shelves } | Self::Doors { shelves, .. } => *shelves,
            Self::Drawers { .. } | Self::Trunk { .. } => 0,
        }
    }

    /// Short name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Shelves { .. } => "shelves",
            Self::Doors { .. } => "doors",
            Self::Drawers { .. } => "drawers",
            Self::Trunk { .. } => "trunk",
        }
    }
}

impl Default for BlockKind {
    fn default() -> Self {
        Self::Doors {
            open: true,
            shelves: 2,
        }
    }
}

/// One vertical compartment of the cabinet stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Unique id
    pub id: String,
    /// Height in mm
    pub height: f64,
    /// Rows of the face grid
    pub rows: u32,
    /// Columns of the face grid
    pub cols: u32,
    /// Opening treatment
    pub kind: BlockKind,
}

impl Block {
    /// Height of a block added through [`CabinetConfig::with_added_block`].
    pub const DEFAULT_HEIGHT: f64 = 900.0;

    /// Create a block
    pub fn new(id: impl Into<String>, height: f64, rows: u32, cols: u32, kind: BlockKind) -> Self {
        Self {
            id: id.into(),
            height,
            rows,
            cols,
            kind,
        }
    }

    /// Lid height clamped to `[0, height - PANEL_THICKNESS]`, for trunk blocks.
    pub fn clamped_lid_height(&self) -> Option<f64> {
        match self.kind {
            BlockKind::Trunk { lid_height, .. } => Some(clamp_lid_height(lid_height, self.height)),
            _ => None,
        }
    }

    /// Validate one block at position `index` in the stack.
    pub fn validate(&self, index: usize) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::EmptyBlockId { index }.into());
        }

        let field = format!("blocks[{}].height", index);
        require_positive(&field, self.height)?;
        if self.height <= PANEL_THICKNESS {
            return Err(GeometricDegeneracy::NoInteriorVolume {
                block_id: self.id.clone(),
                height: self.height,
                panel_thickness: PANEL_THICKNESS,
            }
            .into());
        }

        require_at_least(&format!("blocks[{}].numRows", index), self.rows, 1)?;
        require_at_least(&format!("blocks[{}].numCols", index), self.cols, 1)?;

        if let BlockKind::Trunk { lid_height, .. } = self.kind {
            require_non_negative(&format!("blocks[{}].lidHeight", index), lid_height)?;
            if lid_height > self.height {
                return Err(InvariantViolation::LidExceedsBlock {
                    block_id: self.id.clone(),
                    lid_height,
                    block_height: self.height,
                }
                .into());
            }
        }

        Ok(())
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::new("block-1", Self::DEFAULT_HEIGHT, 1, 2, BlockKind::default())
    }
}

/// Clamp a requested lid height so the trunk body keeps at least one panel
/// thickness.
pub fn clamp_lid_height(lid_height: f64, block_height: f64) -> f64 {
    let max = (block_height - PANEL_THICKNESS).max(0.0);
    lid_height.clamp(0.0, max)
}

/// Complete cabinet configuration
///
/// Validated once per compilation pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabinetConfig {
    /// Overall width in mm
    pub width: f64,
    /// Overall depth in mm
    pub depth: f64,
    /// Height of the support plinth in mm
    pub floor_height: f64,
    /// Cabinet color as `#rrggbb`
    pub color: String,
    /// Draw a skirting board under the stack
    pub show_skirting: bool,
    /// Draw feet under the stack
    pub show_feet: bool,
    /// Skirting set-back from the front edge in mm
    pub recess_distance: f64,
    /// Feet along the front row (the back row mirrors it)
    pub feet_per_row: u32,
    /// Blocks, bottom to top
    pub blocks: Vec<Block>,
}

impl Default for CabinetConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            depth: 600.0,
            floor_height: 0.0,
            color: "#58737e".to_string(),
            show_skirting: false,
            show_feet: false,
            recess_distance: 50.0,
            feet_per_row: MIN_FEET_PER_ROW,
            blocks: vec![Block::default()],
        }
    }
}

impl CabinetConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the whole snapshot.
    ///
    /// Nothing is clamped here: freshly supplied configuration either passes
    /// or is rejected with a descriptive error.
    pub fn validate(&self) -> Result<()> {
        require_positive("width", self.width)?;
        require_positive("depth", self.depth)?;
        require_non_negative("floorHeight", self.floor_height)?;
        require_non_negative("recessDistance", self.recess_distance)?;
        require_at_least("numFeetPerRow", self.feet_per_row, MIN_FEET_PER_ROW)?;

        self.validate_footprint()?;

        if !is_hex_color(&self.color) {
            return Err(ValidationError::InvalidColor {
                color: self.color.clone(),
            }
            .into());
        }

        if self.blocks.is_empty() {
            return Err(ValidationError::NoBlocks.into());
        }

        let mut seen = HashSet::new();
        for (index, block) in self.blocks.iter().enumerate() {
            block.validate(index)?;
            self.validate_cells(block)?;
            if !seen.insert(block.id.as_str()) {
                return Err(ValidationError::DuplicateBlockId {
                    id: block.id.clone(),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Reject footprints whose panels, skirting or feet would have negative
    /// size or fall outside the carcass.
    fn validate_footprint(&self) -> Result<()> {
        for (field, value) in [("width", self.width), ("depth", self.depth)] {
            if value <= 2.0 * PANEL_THICKNESS {
                return Err(GeometricDegeneracy::CarcassTooSmall {
                    field: field.to_string(),
                    value,
                    panel_thickness: PANEL_THICKNESS,
                }
                .into());
            }
        }

        let has_plinth = self.floor_height > 0.0;
        if has_plinth && self.show_skirting && self.recess_distance >= self.depth {
            return Err(GeometricDegeneracy::SkirtingTooDeep {
                recess: self.recess_distance,
                depth: self.depth,
            }
            .into());
        }

        let inset = self.feet_inset();
        let feet_fit = self.width > 2.0 * inset && self.depth > 2.0 * inset;
        if has_plinth && self.show_feet && !feet_fit {
            return Err(GeometricDegeneracy::FeetOutsideFootprint {
                inset,
                width: self.width,
                depth: self.depth,
            }
            .into());
        }

        Ok(())
    }

    fn validate_cells(&self, block: &Block) -> Result<()> {
        if !matches!(block.kind, BlockKind::Doors { .. } | BlockKind::Drawers { .. }) {
            return Ok(());
        }
        let cell_width = self.width / f64::from(block.cols);
        let cell_height = block.height / f64::from(block.rows);
        if cell_width <= FACE_GAP || cell_height <= FACE_GAP {
            return Err(GeometricDegeneracy::CellTooSmall {
                block_id: block.id.clone(),
                cell_width,
                cell_height,
            }
            .into());
        }
        Ok(())
    }

    /// Validate and return the snapshot.
    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Sum of the block heights.
    pub fn total_height(&self) -> f64 {
        self.blocks.iter().map(|b| b.height).sum()
    }

    /// Height of the drawn object including the plinth.
    pub fn drawn_height(&self) -> f64 {
        self.total_height() + self.floor_height.max(0.0)
    }

    /// World y of the cabinet-frame origin; puts the lowest block on top of
    /// the plinth.
    pub fn world_origin_y(&self) -> f64 {
        self.total_height() / 2.0 + self.floor_height
    }

    /// Distance of the feet from each outer edge.
    pub fn feet_inset(&self) -> f64 {
        self.recess_distance + FOOT_CLEARANCE
    }

    /// Look up a block by id.
    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// New snapshot with a default block appended on top.
    pub fn with_added_block(&self) -> Self {
        let mut next = self.clone();
        let short = uuid::Uuid::new_v4().simple().to_string();
        let id = format!("block-{}-{}", next.blocks.len() + 1, &short[..8]);
        next.blocks.push(Block {
            id,
            ..Block::default()
        });
        next
    }

    /// New snapshot without the block `id`. The last remaining block is
    /// never removed.
    pub fn without_block(&self, id: &str) -> Self {
        let mut next = self.clone();
        if next.blocks.len() <= 1 {
            debug!("Refusing to remove the only block '{}'", id);
            return next;
        }
        next.blocks.retain(|b| b.id != id);
        next
    }

    /// New snapshot with the block `id` replaced by `block`.
    pub fn with_block(&self, id: &str, block: Block) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.blocks.iter_mut().find(|b| b.id == id) {
            *slot = block;
        }
        next
    }
}

fn require_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite {
            field: field.to_string(),
        }
        .into())
    }
}

fn require_positive(field: &str, value: f64) -> Result<()> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositive {
            field: field.to_string(),
            value,
        }
        .into())
    }
}

fn require_non_negative(field: &str, value: f64) -> Result<()> {
    require_finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        }
        .into())
    }
}

fn require_at_least(field: &str, value: u32, min: u32) -> Result<()> {
    if value >= min {
        Ok(())
    } else {
        Err(ValidationError::BelowMinimum {
            field: field.to_string(),
            value: i64::from(value),
            min: i64::from(min),
        }
        .into())
    }
}

fn is_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

//! Serialization and deserialization for cabinet documents.
//!
//! Implements save/load for `.cbt` files: pretty JSON with camelCase keys and
//! one flag per opening kind. Converting a document into a
//! [`CabinetConfig`] is where the flags collapse into a [`BlockKind`].

use anyhow::{Context, Result};
use cabinetkit_core::constants::{DEFAULT_LID_HEIGHT, MIN_FEET_PER_ROW};
use cabinetkit_core::{
    clamp_lid_height, Block, BlockKind, CabinetConfig, CabinetError, InvariantViolation,
    ValidationError,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// File extension of cabinet documents.
pub const FILE_EXTENSION: &str = "cbt";

/// Complete cabinet document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinetDocument {
    pub width: f64,
    pub depth: f64,
    pub floor_height: f64,
    pub cabinet_color: String,
    pub show_skirting: bool,
    pub show_feet: bool,
    pub recess_distance: f64,
    pub num_feet_per_row: i64,
    pub blocks: Vec<BlockDocument>,
}

/// Serialized block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDocument {
    #[serde(default)]
    pub id: String,
    pub height: f64,
    pub num_rows: i64,
    pub num_cols: i64,
    pub doors_open: bool,
    pub use_doors: bool,
    pub use_drawers: bool,
    #[serde(default)]
    pub use_trunk: bool,
    #[serde(default = "default_lid_height")]
    pub lid_height: f64,
    #[serde(default)]
    pub lid_open: bool,
    #[serde(default)]
    pub drawers_open: bool,
    pub num_shelves: i64,
}

fn default_lid_height() -> f64 {
    DEFAULT_LID_HEIGHT
}

impl Default for CabinetDocument {
    fn default() -> Self {
        Self::from_config(&CabinetConfig::default())
    }
}

impl CabinetDocument {
    /// Save document to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize cabinet")?;

        std::fs::write(path.as_ref(), json).context("Failed to write cabinet file")?;

        Ok(())
    }

    /// Load document from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read cabinet file")?;

        let document = Self::from_json(&content).context("Failed to parse cabinet file")?;

        Ok(document)
    }

    /// Parse a document from JSON text. Syntax errors and missing or
    /// mistyped fields are reported as [`ValidationError::Malformed`].
    pub fn from_json(content: &str) -> cabinetkit_core::Result<Self> {
        serde_json::from_str(content).map_err(|err| {
            ValidationError::Malformed {
                reason: err.to_string(),
            }
            .into()
        })
    }

    /// Load a document and convert it with the legacy rules.
    pub fn load_config(path: impl AsRef<Path>) -> Result<CabinetConfig> {
        let path = path.as_ref();
        let config = Self::load_from_file(path)?
            .to_config_legacy()
            .with_context(|| format!("Invalid cabinet in {}", path.display()))?;
        Ok(config)
    }

    /// Document for `config`. Fields that do not apply to a block's kind are
    /// written with their defaults.
    pub fn from_config(config: &CabinetConfig) -> Self {
        Self {
            width: config.width,
            depth: config.depth,
            floor_height: config.floor_height,
            cabinet_color: config.color.clone(),
            show_skirting: config.show_skirting,
            show_feet: config.show_feet,
            recess_distance: config.recess_distance,
            num_feet_per_row: i64::from(config.feet_per_row),
            blocks: config.blocks.iter().map(BlockDocument::from_block).collect(),
        }
    }

    /// Strict conversion for freshly supplied configuration: out-of-range
    /// values are rejected, never clamped.
    pub fn to_config(&self) -> cabinetkit_core::Result<CabinetConfig> {
        let blocks = self
            .blocks
            .iter()
            .enumerate()
            .map(|(index, block)| block.to_block(index))
            .collect::<cabinetkit_core::Result<Vec<_>>>()?;

        CabinetConfig {
            width: self.width,
            depth: self.depth,
            floor_height: self.floor_height,
            color: self.cabinet_color.clone(),
            show_skirting: self.show_skirting,
            show_feet: self.show_feet,
            recess_distance: self.recess_distance,
            feet_per_row: to_count("numFeetPerRow", self.num_feet_per_row, MIN_FEET_PER_ROW)?,
            blocks,
        }
        .validated()
    }

    /// Conversion for documents written by older versions.
    ///
    /// Applies [`CabinetDocument::repaired`], then validates the structural
    /// fields as usual.
    pub fn to_config_legacy(&self) -> cabinetkit_core::Result<CabinetConfig> {
        self.repaired().to_config()
    }

    /// Copy of the document with the cosmetic fields repaired: feet per row
    /// is raised to the minimum, trunk lid heights are clamped and missing
    /// ids are filled in.
    pub fn repaired(&self) -> Self {
        let mut repaired = self.clone();

        if repaired.num_feet_per_row < i64::from(MIN_FEET_PER_ROW) {
            warn!(
                "Raising numFeetPerRow from {} to {}",
                repaired.num_feet_per_row, MIN_FEET_PER_ROW
            );
            repaired.num_feet_per_row = i64::from(MIN_FEET_PER_ROW);
        }

        for (index, block) in repaired.blocks.iter_mut().enumerate() {
            if block.id.trim().is_empty() {
                block.id = format!("block-{}", index + 1);
                warn!("Block {} has no id, using '{}'", index, block.id);
            }
            if block.use_trunk && block.height.is_finite() && block.lid_height.is_finite() {
                let clamped = clamp_lid_height(block.lid_height, block.height);
                if clamped != block.lid_height {
                    warn!(
                        "Clamping lid height of block '{}' from {} to {}",
                        block.id, block.lid_height, clamped
                    );
                    block.lid_height = clamped;
                }
            }
        }

        repaired
    }
}

impl BlockDocument {
    fn from_block(block: &Block) -> Self {
        let mut doc = Self {
            id: block.id.clone(),
            height: block.height,
            num_rows: i64::from(block.rows),
            num_cols: i64::from(block.cols),
            doors_open: false,
            use_doors: false,
            use_drawers: false,
            use_trunk: false,
            lid_height: DEFAULT_LID_HEIGHT,
            lid_open: false,
            drawers_open: false,
            num_shelves: i64::from(block.kind.shelves()),
        };
        match block.kind {
            BlockKind::Shelves { .. } => {}
            BlockKind::Doors { open, .. } => {
                doc.use_doors = true;
                doc.doors_open = open;
            }
            BlockKind::Drawers { open } => {
                doc.use_drawers = true;
                doc.drawers_open = open;
            }
            BlockKind::Trunk {
                lid_height,
                lid_open,
            } => {
                doc.use_trunk = true;
                doc.lid_height = lid_height;
                doc.lid_open = lid_open;
            }
        }
        doc
    }

    /// Names of the opening kinds flagged on this block.
    pub fn active_kinds(&self) -> Vec<&'static str> {
        [
            (self.use_doors, "doors"),
            (self.use_drawers, "drawers"),
            (self.use_trunk, "trunk"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }

    fn to_block(&self, index: usize) -> cabinetkit_core::Result<Block> {
        let kinds = self.active_kinds();
        if kinds.len() > 1 {
            return Err(InvariantViolation::MultipleOpeningKinds {
                block_id: self.id.clone(),
                kinds: kinds.join(", "),
            }
            .into());
        }

        let rows = to_count(&format!("blocks[{}].numRows", index), self.num_rows, 1)?;
        let cols = to_count(&format!("blocks[{}].numCols", index), self.num_cols, 1)?;
        let shelves = to_count(&format!("blocks[{}].numShelves", index), self.num_shelves, 0)?;

        let kind = if self.use_trunk {
            BlockKind::Trunk {
                lid_height: self.lid_height,
                lid_open: self.lid_open,
            }
        } else if self.use_drawers {
            BlockKind::Drawers {
                open: self.drawers_open,
            }
        } else if self.use_doors {
            BlockKind::Doors {
                open: self.doors_open,
                shelves,
            }
        } else {
            BlockKind::Shelves { shelves }
        };

        Ok(Block::new(self.id.clone(), self.height, rows, cols, kind))
    }
}

fn to_count(field: &str, value: i64, min: u32) -> cabinetkit_core::Result<u32> {
    if value < i64::from(min) {
        return Err(ValidationError::BelowMinimum {
            field: field.to_string(),
            value,
            min: i64::from(min),
        }
        .into());
    }
    u32::try_from(value)
        .map_err(|_| CabinetError::other(format!("{} is too large: {}", field, value)))
}

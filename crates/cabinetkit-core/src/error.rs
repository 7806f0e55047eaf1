//! Error handling for CabinetKit
//!
//! Provides the error taxonomy for a compilation pass:
//! - Validation errors (malformed or out-of-range input)
//! - Invariant violations (contradictory input the core refuses to guess about)
//! - Geometric degeneracies (input that would produce negative-size geometry)
//!
//! All error types use `thiserror`. Every error is recoverable by the caller:
//! reject the edit and keep the last valid configuration.

use thiserror::Error;

/// Validation error type
///
/// Raised for malformed or out-of-range configuration values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A length that must be strictly positive is not
    #[error("{field} must be greater than 0, got {value}")]
    NonPositive {
        /// The offending field.
        field: String,
        /// The rejected value.
        value: f64,
    },

    /// A length that must not be negative is
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// The offending field.
        field: String,
        /// The rejected value.
        value: f64,
    },

    /// A length is NaN or infinite
    #[error("{field} must be a finite number")]
    NotFinite {
        /// The offending field.
        field: String,
    },

    /// An integer parameter is below its minimum
    #[error("{field} must be at least {min}, got {value}")]
    BelowMinimum {
        /// The offending field.
        field: String,
        /// The rejected value.
        value: i64,
        /// The smallest accepted value.
        min: i64,
    },

    /// The cabinet has no blocks
    #[error("Cabinet must contain at least one block")]
    NoBlocks,

    /// A block has an empty id
    #[error("Block {index} has an empty id")]
    EmptyBlockId {
        /// Position of the block in the stack.
        index: usize,
    },

    /// Two blocks share an id
    #[error("Duplicate block id '{id}'")]
    DuplicateBlockId {
        /// The repeated id.
        id: String,
    },

    /// The cabinet color is not a hex color
    #[error("Invalid cabinet color '{color}': expected #rgb or #rrggbb")]
    InvalidColor {
        /// The rejected color string.
        color: String,
    },

    /// A document is not valid JSON or lacks a required field
    #[error("Malformed cabinet document: {reason}")]
    Malformed {
        /// Parser message, including the line and column.
        reason: String,
    },

    /// A viewport has no drawable area
    #[error("Viewport must be larger than 0x0 pixels, got {width}x{height}")]
    EmptyViewport {
        /// Viewport width in pixels.
        width: f64,
        /// Viewport height in pixels.
        height: f64,
    },
}

/// Invariant violation type
///
/// Raised when input contradicts itself. The core never picks a winner.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvariantViolation {
    /// More than one opening kind is flagged on a block
    #[error("Block '{block_id}' has more than one opening kind active: {kinds}")]
    MultipleOpeningKinds {
        /// The block carrying the flags.
        block_id: String,
        /// The active kinds, comma separated.
        kinds: String,
    },

    /// A trunk lid is taller than its block
    #[error("Block '{block_id}' lid height {lid_height} exceeds block height {block_height}")]
    LidExceedsBlock {
        /// The trunk block.
        block_id: String,
        /// Requested lid height.
        lid_height: f64,
        /// Height of the block.
        block_height: f64,
    },
}

/// Geometric degeneracy type
///
/// Raised when valid-looking input would yield negative-size geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometricDegeneracy {
    /// The block cannot contain its own top and bottom panels
    #[error(
        "Block '{block_id}' height {height} leaves no interior volume ({panel_thickness} mm panels)"
    )]
    NoInteriorVolume {
        /// The degenerate block.
        block_id: String,
        /// Height of the block.
        height: f64,
        /// Structural panel thickness.
        panel_thickness: f64,
    },

    /// The carcass is too narrow or shallow to fit two side panels
    #[error("{field} {value} leaves no room between two {panel_thickness} mm panels")]
    CarcassTooSmall {
        /// `width` or `depth`.
        field: String,
        /// The rejected value.
        value: f64,
        /// Structural panel thickness.
        panel_thickness: f64,
    },

    /// The skirting recess consumes the whole depth
    #[error("Skirting recess {recess} must be smaller than the depth {depth}")]
    SkirtingTooDeep {
        /// Recess from the front edge.
        recess: f64,
        /// Carcass depth.
        depth: f64,
    },

    /// Feet inset from each edge would place them outside the footprint
    #[error("Feet inset {inset} does not fit a {width} x {depth} footprint")]
    FeetOutsideFootprint {
        /// Inset of the feet from each outer edge.
        inset: f64,
        /// Carcass width.
        width: f64,
        /// Carcass depth.
        depth: f64,
    },

    /// A door leaf or drawer face would have no area
    #[error("Block '{block_id}' cells of {cell_width} x {cell_height} leave no room for a face")]
    CellTooSmall {
        /// The degenerate block.
        block_id: String,
        /// Grid cell width.
        cell_width: f64,
        /// Grid cell height.
        cell_height: f64,
    },
}

/// Main error type for CabinetKit
///
/// A unified error type covering every way a compilation pass can fail.
#[derive(Error, Debug)]
pub enum CabinetError {
    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Invariant violation
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),

    /// Geometric degeneracy
    #[error(transparent)]
    Degeneracy(#[from] GeometricDegeneracy),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl CabinetError {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        CabinetError::Other(msg.into())
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, CabinetError::Validation(_))
    }

    /// Check if this is an invariant violation
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, CabinetError::Invariant(_))
    }

    /// Check if this is a geometric degeneracy
    pub fn is_degeneracy(&self) -> bool {
        matches!(self, CabinetError::Degeneracy(_))
    }
}

/// Result type using CabinetError
pub type Result<T> = std::result::Result<T, CabinetError>;

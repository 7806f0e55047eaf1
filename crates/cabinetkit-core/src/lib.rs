//! # CabinetKit Core
//!
//! Core types, constants, and errors for CabinetKit.
//! Provides the immutable cabinet configuration snapshot that every
//! compilation pass reads, the drawing style used by the technical views,
//! and the error taxonomy shared by all crates.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod model;
pub mod style;
pub mod units;

pub use error::{CabinetError, GeometricDegeneracy, InvariantViolation, Result, ValidationError};

pub use geometry::{Point2, Point3, Vector2, Vector3};

pub use model::{clamp_lid_height, Block, BlockKind, CabinetConfig, TechView, ViewMode};

pub use style::{DimensionTier, DrawingStyle};

pub use units::{format_length, round_mm};

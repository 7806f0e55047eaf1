//! # CabinetKit Designer
//!
//! Turns a cabinet configuration into renderable geometry and technical
//! drawings.
//!
//! ## Passes
//!
//! ```text
//! CabinetConfig
//!   └── layout      (stacked blocks, carcass panels, shelves, skirting, feet)
//!         └── openings    (doors, drawers, trunk lids and their poses)
//!               ├── dimensions  (dimension lines per technical view)
//!               └── envelope    (view windows at one shared scale)
//! ```
//!
//! [`CabinetCompiler`] runs all passes over one snapshot. Documents are read
//! and written through [`serialization::CabinetDocument`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cabinetkit_designer::CabinetCompiler;
//! use cabinetkit_core::CabinetConfig;
//!
//! let compiled = CabinetCompiler::new().compile(&CabinetConfig::default())?;
//! println!("{}", compiled.to_json()?);
//! ```

pub mod compiler;
pub mod dimensions;
pub mod envelope;
pub mod layout;
pub mod openings;
pub mod panels;
pub mod serialization;
pub mod view;
pub mod viewport;

pub use compiler::{CabinetCompiler, CompiledCabinet, CompiledView};
pub use dimensions::{DimensionAxis, DimensionLine, DimensionRole, Segment2};
pub use envelope::{ViewEnvelope, ViewEnvelopes};
pub use layout::{BlockBounds, Layout};
pub use openings::{Hinge, Motion, OpeningKind, OpeningPose, Openings, SwingArc};
pub use panels::{PanelRole, PanelShape, PanelSpec};
pub use serialization::{BlockDocument, CabinetDocument};
pub use view::{Camera, ViewAxes};
pub use viewport::Viewport;

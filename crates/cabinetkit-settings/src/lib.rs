//! CabinetKit Settings Crate
//!
//! Persists the drawing style and viewport preferences used when compiling
//! and displaying the technical views.

pub mod config;
pub mod error;

pub use config::{Settings, ViewportSettings};
pub use error::{SettingsError, SettingsResult};

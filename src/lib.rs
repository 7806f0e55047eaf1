//! # CabinetKit
//!
//! A parametric cabinet geometry compiler. A cabinet is described as a stack
//! of blocks, each with doors, drawers, a trunk lid or open shelves; the
//! compiler turns one configuration into a shaded 3D model and three
//! dimensioned technical drawings (plan, elevation, section) that share one
//! scale.
//!
//! ## Architecture
//!
//! CabinetKit is organized as a workspace with multiple crates:
//!
//! 1. **cabinetkit-core** - Configuration snapshot, drawing style, constants, errors
//! 2. **cabinetkit-designer** - Layout, openings, dimensions, envelopes, documents
//! 3. **cabinetkit-settings** - Persisted drawing style and viewport preferences
//! 4. **cabinetkit** - Driver binary that compiles `.cbt` documents

use std::path::Path;

use anyhow::Context;
use tracing::debug;

pub use cabinetkit_designer as designer;
pub use cabinetkit_settings as settings;

pub use cabinetkit_core::{
    Block, BlockKind, CabinetConfig, CabinetError, DrawingStyle, Result, TechView, ViewMode,
};

pub use cabinetkit_designer::{
    CabinetCompiler, CabinetDocument, CompiledCabinet, CompiledView, DimensionLine, PanelSpec,
    ViewEnvelopes, Viewport,
};

pub use cabinetkit_settings::{Settings, SettingsError, ViewportSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Load settings from `path`, or from the default location when `path` is
/// `None`. A missing default file yields the default settings.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    match path {
        Some(path) => Settings::load_from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => {
            let path = Settings::default_config_path()?;
            Settings::load_or_default(&path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))
        }
    }
}

/// Compile the cabinet document at `path` with the drawing style from
/// `settings`, then drop the annotations its viewport settings turn off.
pub fn compile_file(path: &Path, settings: &Settings) -> anyhow::Result<CompiledCabinet> {
    let config = CabinetDocument::load_config(path)?;
    let compiler = CabinetCompiler::with_style(settings.drawing.clone());
    let mut compiled = compiler
        .compile(&config)
        .with_context(|| format!("Failed to compile {}", path.display()))?;
    apply_viewport_settings(&mut compiled, &settings.viewport);
    Ok(compiled)
}

/// Clear dimension lines and ground lines from the technical views when the
/// viewport settings hide them.
pub fn apply_viewport_settings(compiled: &mut CompiledCabinet, viewport: &ViewportSettings) {
    for view in &mut compiled.views {
        if !viewport.show_dimensions {
            view.dimensions.clear();
        }
        if !viewport.show_ground_line {
            view.ground_line = None;
        }
    }
}

/// Viewport of the configured canvas size, fitted to `view` at the shared
/// zoom.
pub fn fit_viewport(
    compiled: &CompiledCabinet,
    view: TechView,
    viewport: &ViewportSettings,
) -> anyhow::Result<Viewport> {
    let mut fitted = Viewport::new(viewport.canvas_width, viewport.canvas_height);
    fitted
        .fit_to_envelope(&compiled.envelopes, view)
        .with_context(|| format!("Failed to fit the {} view", view))?;
    debug!("Fitted {} view: {}", view, fitted);
    Ok(fitted)
}

/// One technical view with the viewport that displays it, as pretty JSON.
pub fn view_to_json(
    compiled: &CompiledCabinet,
    view: TechView,
    viewport: &ViewportSettings,
) -> anyhow::Result<String> {
    let compiled_view = compiled
        .view(view)
        .with_context(|| format!("No {} view in the compiled scene", view))?;
    let fitted = fit_viewport(compiled, view, viewport)?;
    let json = serde_json::json!({
        "viewport": {
            "canvasWidth": fitted.canvas_width(),
            "canvasHeight": fitted.canvas_height(),
            "zoom": fitted.zoom(),
            "panX": fitted.pan_x(),
            "panY": fitted.pan_y(),
        },
        "view": compiled_view,
    });
    Ok(serde_json::to_string_pretty(&json)?)
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr so compiled scenes can go to stdout
/// - RUST_LOG environment variable support
/// - INFO as the default level
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install the tracing subscriber")?;

    Ok(())
}

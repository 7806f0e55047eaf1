//! Compilation pass.
//!
//! Runs layout, openings, dimensioning and envelope fitting over one
//! validated configuration snapshot. A pass either returns a complete scene
//! or an error; nothing partial is ever produced.

use cabinetkit_core::{CabinetConfig, DrawingStyle, Point3, Result, TechView, ViewMode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dimensions::{self, DimensionLine, Segment2};
use crate::envelope::{self, ViewEnvelope, ViewEnvelopes};
use crate::layout::{self, BlockBounds};
use crate::openings::{self, OpeningPose, SwingArc};
use crate::panels::PanelSpec;

/// Geometry of one view, in the cabinet frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledView {
    pub mode: ViewMode,
    /// World position of the cabinet-frame origin
    pub origin: Point3,
    /// Carcass, opening and support panels in emission order
    pub panels: Vec<PanelSpec>,
    pub poses: Vec<OpeningPose>,
    pub arcs: Vec<SwingArc>,
    pub block_bounds: Vec<BlockBounds>,
    /// Empty for the perspective view
    pub dimensions: Vec<DimensionLine>,
    pub ground_line: Option<Segment2>,
    pub envelope: Option<ViewEnvelope>,
}

impl CompiledView {
    /// Panels for one role.
    pub fn panels_with_role(
        &self,
        role: crate::panels::PanelRole,
    ) -> impl Iterator<Item = &PanelSpec> {
        self.panels.iter().filter(move |p| p.role == role)
    }

    /// Pose of the element `id`.
    pub fn pose(&self, id: &str) -> Option<&OpeningPose> {
        self.poses.iter().find(|p| p.element_id == id)
    }
}

/// Everything the renderer needs for one configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledCabinet {
    pub total_height: f64,
    /// Shaded 3D model
    pub model: CompiledView,
    /// Plan, elevation and section, in that order
    pub views: Vec<CompiledView>,
    pub envelopes: ViewEnvelopes,
}

impl CompiledCabinet {
    pub fn view(&self, view: TechView) -> Option<&CompiledView> {
        let mode = ViewMode::from(view);
        self.views.iter().find(|v| v.mode == mode)
    }

    /// Serialize the scene as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Compiles cabinet configurations with one drawing style.
#[derive(Debug, Clone, Default)]
pub struct CabinetCompiler {
    style: DrawingStyle,
}

impl CabinetCompiler {
    /// Compiler with the default drawing style.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: DrawingStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &DrawingStyle {
        &self.style
    }

    /// Compile the model and all three technical views.
    pub fn compile(&self, config: &CabinetConfig) -> Result<CompiledCabinet> {
        self.style.validate()?;
        let model = self.compile_view(config, ViewMode::Perspective)?;
        let views = self.compile_all_views(config)?;
        let envelopes = envelope::compute(config, &self.style);

        debug!(
            "Compiled cabinet: {} model panels, {} views",
            model.panels.len(),
            views.len()
        );

        Ok(CompiledCabinet {
            total_height: config.total_height(),
            model,
            views,
            envelopes,
        })
    }

    /// Compile a single view.
    pub fn compile_view(&self, config: &CabinetConfig, mode: ViewMode) -> Result<CompiledView> {
        self.style.validate()?;
        let layout = layout::compile(config, mode)?;

        let mut panels = layout.panels;
        let mut poses = Vec::new();
        let mut arcs = Vec::new();
        for (block, bounds) in config.blocks.iter().zip(&layout.block_bounds) {
            let openings = openings::generate(config, block, bounds, mode);
            panels.extend(openings.panels);
            poses.extend(openings.poses);
            arcs.extend(openings.arcs);
        }
        panels.extend(layout.feet);

        let (dimensions, ground_line, envelope) = match mode.tech_view() {
            Some(view) => (
                dimensions::annotate(view, config, &layout.block_bounds, &self.style),
                dimensions::ground_line(view, config, &self.style),
                Some(envelope::compute(config, &self.style).get(view).clone()),
            ),
            None => (Vec::new(), None, None),
        };

        debug!(
            "Compiled {} view: {} panels, {} poses, {} arcs, {} dimensions",
            mode,
            panels.len(),
            poses.len(),
            arcs.len(),
            dimensions.len()
        );

        Ok(CompiledView {
            mode,
            origin: Point3::new(0.0, config.world_origin_y(), 0.0),
            panels,
            poses,
            arcs,
            block_bounds: layout.block_bounds,
            dimensions,
            ground_line,
            envelope,
        })
    }

    /// Compile plan, elevation and section.
    ///
    /// Views only read the shared snapshot, so each is compiled
    /// independently.
    pub fn compile_all_views(&self, config: &CabinetConfig) -> Result<Vec<CompiledView>> {
        TechView::ALL
            .iter()
            .map(|view| self.compile_view(config, ViewMode::from(*view)))
            .collect()
    }
}

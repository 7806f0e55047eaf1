//! Dimension lines for the technical views.
//!
//! Every view shares one routine over its [`ViewAxes`]: overall extents along
//! the top edge and the left edge, then, for upright views, the base, block
//! and interior run dimensions stacked on the left in three tiers.
//!
//! All coordinates are in the view's drawing plane, projected from the
//! cabinet frame.

use cabinetkit_core::constants::PANEL_THICKNESS;
use cabinetkit_core::{
    format_length, BlockKind, CabinetConfig, DimensionTier, DrawingStyle, Point2, TechView,
    Vector2,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::{shelf_positions, trunk_split, BlockBounds};
use crate::view::ViewAxes;

/// Direction along which a dimension measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionAxis {
    Horizontal,
    Vertical,
}

impl DimensionAxis {
    /// Unit vector along the axis.
    pub fn direction(self) -> Vector2 {
        match self {
            Self::Horizontal => Vector2::new(1.0, 0.0),
            Self::Vertical => Vector2::new(0.0, 1.0),
        }
    }

    /// Unit vector from the measured edge toward the dimension line. Horizontal
    /// dimensions sit above the object, vertical ones to its left.
    pub fn outward(self) -> Vector2 {
        match self {
            Self::Horizontal => Vector2::new(0.0, 1.0),
            Self::Vertical => Vector2::new(-1.0, 0.0),
        }
    }
}

/// What a dimension measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionRole {
    OverallWidth,
    OverallDepth,
    OverallHeight,
    BaseHeight,
    BlockHeight,
    ShelfGap,
    DrawerRow,
    LidHeight,
}

impl DimensionRole {
    /// Run dimensions are subject to label suppression.
    pub fn is_run(self) -> bool {
        matches!(self, Self::ShelfGap | Self::DrawerRow | Self::LidHeight)
    }
}

/// A straight stroke in the drawing plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment2 {
    pub start: Point2,
    pub end: Point2,
}

impl Segment2 {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// Open arrowhead at the end of a leader.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arrowhead {
    pub tip: Point2,
    /// Unit vector the arrow points along
    pub direction: Vector2,
    pub size: f64,
}

/// One dimension line with its drawing primitives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionLine {
    pub role: DimensionRole,
    pub block_id: Option<String>,
    /// First measured point
    pub start: Point2,
    /// Second measured point
    pub end: Point2,
    pub axis: DimensionAxis,
    pub label: String,
    pub tier: DimensionTier,
    pub text_outside: bool,
    pub text_shift: f64,
    pub extensions: [Segment2; 2],
    pub leaders: [Segment2; 2],
    pub arrows: [Arrowhead; 2],
    pub label_anchor: Point2,
    pub font_size: f64,
    pub line_weight: f64,
}

impl DimensionLine {
    /// Measured length.
    pub fn span(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// Placement of a labeled run interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunLabel {
    pub text_outside: bool,
    pub text_shift: f64,
}

/// Decide whether run interval `index` of length `span` is labeled.
///
/// Short odd intervals are left unlabeled so they cannot collide with their
/// even neighbours. Short labeled intervals move outside the leader.
pub fn run_label(index: usize, span: f64, style: &DrawingStyle) -> Option<RunLabel> {
    let min = style.min_label_span();
    if span < min && index % 2 == 1 {
        return None;
    }
    Some(RunLabel {
        text_outside: span < min,
        text_shift: style.text_shift(index),
    })
}

struct Measure {
    role: DimensionRole,
    block_id: Option<String>,
    start: Point2,
    end: Point2,
    axis: DimensionAxis,
    tier: DimensionTier,
    label: String,
    text_outside: bool,
    text_shift: f64,
}

impl Measure {
    fn new(
        role: DimensionRole,
        axis: DimensionAxis,
        start: Point2,
        end: Point2,
        tier: DimensionTier,
    ) -> Self {
        Self {
            role,
            block_id: None,
            start,
            end,
            axis,
            tier,
            label: format_length((end - start).norm()),
            text_outside: false,
            text_shift: 0.0,
        }
    }

    fn block(mut self, id: &str) -> Self {
        self.block_id = Some(id.to_string());
        self
    }

    fn label(mut self, value: f64) -> Self {
        self.label = format_length(value);
        self
    }

    fn outside_if_short(mut self, style: &DrawingStyle) -> Self {
        self.text_outside = (self.end - self.start).norm() < style.min_label_span();
        self
    }

    fn run(mut self, run: RunLabel) -> Self {
        self.text_outside = run.text_outside;
        self.text_shift = run.text_shift;
        self
    }

    fn draw(self, style: &DrawingStyle) -> DimensionLine {
        let offset = style.tier_offset(self.tier);
        let n = self.axis.outward();
        let along = self.axis.direction();

        let extension = |p: Point2| {
            let reach = offset.abs() + style.extension_overshoot;
            let from = style.extension_gap - style.extension_trim;
            Segment2::new(p + n * from, p + n * (from + reach))
        };

        let a = self.start + n * offset;
        let b = self.end + n * offset;
        let span = (b - a).norm();
        let t = if span > 0.0 { (b - a) / span } else { along };
        let piece = ((span - style.text_gap) / 2.0).max(0.0);

        let mid = a + (b - a) / 2.0;
        let mut label_anchor = mid + n * self.text_shift;
        if self.text_outside {
            label_anchor += along * style.outside_label_shift();
        }

        DimensionLine {
            role: self.role,
            block_id: self.block_id,
            start: self.start,
            end: self.end,
            axis: self.axis,
            label: self.label,
            tier: self.tier,
            text_outside: self.text_outside,
            text_shift: self.text_shift,
            extensions: [extension(self.start), extension(self.end)],
            leaders: [Segment2::new(a, a + t * piece), Segment2::new(b, b - t * piece)],
            arrows: [
                Arrowhead {
                    tip: a,
                    direction: -t,
                    size: style.arrow_size,
                },
                Arrowhead {
                    tip: b,
                    direction: t,
                    size: style.arrow_size,
                },
            ],
            label_anchor,
            font_size: style.font_size,
            line_weight: style.line_weight,
        }
    }
}

/// Dimension lines for `view`.
pub fn annotate(
    view: TechView,
    config: &CabinetConfig,
    bounds: &[BlockBounds],
    style: &DrawingStyle,
) -> Vec<DimensionLine> {
    let axes = ViewAxes::new(view);
    let across = axes.across(config);
    let left = -across / 2.0;
    let right = across / 2.0;
    let top = if axes.is_upright_height() {
        config.total_height() / 2.0
    } else {
        config.depth / 2.0
    };

    let across_role = match view {
        TechView::Section => DimensionRole::OverallDepth,
        TechView::Plan | TechView::Elevation => DimensionRole::OverallWidth,
    };

    let mut measures = vec![Measure::new(
        across_role,
        DimensionAxis::Horizontal,
        Point2::new(left, top),
        Point2::new(right, top),
        DimensionTier::Main,
    )
    .label(across)];

    if axes.is_upright_height() {
        stack_measures(&mut measures, config, bounds, style, left);
    } else {
        measures.push(
            Measure::new(
                DimensionRole::OverallDepth,
                DimensionAxis::Vertical,
                Point2::new(left, top),
                Point2::new(left, -top),
                DimensionTier::Main,
            )
            .label(config.depth),
        );
    }

    let lines: Vec<DimensionLine> = measures.into_iter().map(|m| m.draw(style)).collect();
    debug!("Annotated {} view with {} dimension lines", view, lines.len());
    lines
}

fn stack_measures(
    out: &mut Vec<Measure>,
    config: &CabinetConfig,
    bounds: &[BlockBounds],
    style: &DrawingStyle,
    left: f64,
) {
    let total = config.total_height();
    let base = config.floor_height.max(0.0);
    let cabinet_top = total / 2.0;
    let cabinet_bottom = -total / 2.0;
    let floor = cabinet_bottom - base;
    let at = |v: f64| Point2::new(left, v);

    out.push(
        Measure::new(
            DimensionRole::OverallHeight,
            DimensionAxis::Vertical,
            at(cabinet_top),
            at(floor),
            DimensionTier::Outer,
        )
        .label(total + base),
    );
    if base > 0.0 {
        out.push(
            Measure::new(
                DimensionRole::BaseHeight,
                DimensionAxis::Vertical,
                at(cabinet_bottom),
                at(floor),
                DimensionTier::Middle,
            )
            .label(base),
        );
    }

    for (block, b) in config.blocks.iter().zip(bounds) {
        out.push(
            Measure::new(
                DimensionRole::BlockHeight,
                DimensionAxis::Vertical,
                at(b.top_y),
                at(b.base_y),
                DimensionTier::Middle,
            )
            .block(&block.id)
            .label(block.height)
            .outside_if_short(style),
        );
    }

    for (block, b) in config.blocks.iter().zip(bounds) {
        match block.kind {
            BlockKind::Drawers { .. } => {
                let cell_h = block.height / f64::from(block.rows);
                for idx in 0..block.rows as usize {
                    let lower = b.base_y + cell_h * idx as f64;
                    let upper = lower + cell_h;
                    if let Some(run) = run_label(idx, upper - lower, style) {
                        out.push(
                            Measure::new(
                                DimensionRole::DrawerRow,
                                DimensionAxis::Vertical,
                                at(upper),
                                at(lower),
                                DimensionTier::Main,
                            )
                            .block(&block.id)
                            .label(cell_h)
                            .run(run),
                        );
                    }
                }
            }
            BlockKind::Trunk { .. } => {
                let Some((lid, body)) = trunk_split(block) else {
                    continue;
                };
                if lid <= 0.0 || body <= 0.0 {
                    continue;
                }
                out.push(
                    Measure::new(
                        DimensionRole::LidHeight,
                        DimensionAxis::Vertical,
                        at(b.top_y),
                        at(b.base_y + body),
                        DimensionTier::Main,
                    )
                    .block(&block.id)
                    .label(lid)
                    .outside_if_short(style),
                );
            }
            BlockKind::Shelves { shelves } | BlockKind::Doors { shelves, .. } => {
                if shelves == 0 {
                    continue;
                }
                // shelf gaps run between panel center lines
                let center = b.center_y();
                let mut stops = Vec::with_capacity(shelves as usize + 2);
                stops.push(b.base_y + PANEL_THICKNESS / 2.0);
                stops.extend(
                    shelf_positions(block.height, shelves)
                        .into_iter()
                        .map(|y| center + y),
                );
                stops.push(b.top_y - PANEL_THICKNESS / 2.0);

                for (idx, pair) in stops.windows(2).enumerate() {
                    let (lower, upper) = (pair[0], pair[1]);
                    if let Some(run) = run_label(idx, upper - lower, style) {
                        out.push(
                            Measure::new(
                                DimensionRole::ShelfGap,
                                DimensionAxis::Vertical,
                                at(upper),
                                at(lower),
                                DimensionTier::Main,
                            )
                            .block(&block.id)
                            .run(run),
                        );
                    }
                }
            }
        }
    }
}

/// Ground line under the upright views, overhanging both sides.
pub fn ground_line(
    view: TechView,
    config: &CabinetConfig,
    style: &DrawingStyle,
) -> Option<Segment2> {
    let axes = ViewAxes::new(view);
    if !axes.is_upright_height() {
        return None;
    }
    let half = axes.across(config) / 2.0 + style.ground_line_overhang;
    let v = -(config.total_height() / 2.0 + config.floor_height);
    Some(Segment2::new(Point2::new(-half, v), Point2::new(half, v)))
}

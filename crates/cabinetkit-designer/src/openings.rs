//! Doors, drawers and trunk lids.
//!
//! Each block face is split into a `rows x cols` grid. Every movable element
//! gets its panels in the closed position and an [`OpeningPose`] describing
//! the closed and open targets. Interpolating between them is up to the
//! renderer.

use cabinetkit_core::constants::{
    DOOR_THICKNESS, DRAWER_OPEN_FRACTION, FACE_GAP, HANDLE_INSET_DIVISOR, KNOB_INSET,
    KNOB_RADIUS, OPEN_SWING_DEGREES, PANEL_THICKNESS, SINGLE_HANDLE_MAX_WIDTH,
};
use cabinetkit_core::{Block, BlockKind, CabinetConfig, Point3, TechView, Vector3, ViewMode};
use nalgebra::{Isometry3, Translation3, Unit, UnitQuaternion};
use serde::{Deserialize, Serialize};

use crate::layout::{trunk_split, BlockBounds};
use crate::panels::{PanelRole, PanelShape, PanelSpec};
use crate::view::{heading, signed_angle, ViewAxes};

/// Movable element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    Door,
    Drawer,
    Lid,
}

/// Edge a door leaf is hinged on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hinge {
    Left,
    Right,
}

impl Hinge {
    /// Odd columns hinge right, even columns hinge left.
    pub fn for_column(col: u32) -> Self {
        if col % 2 == 1 {
            Self::Right
        } else {
            Self::Left
        }
    }
}

/// How an element moves between its targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Motion {
    /// Targets are angles in degrees about `axis` through the pivot
    Rotation { axis: Vector3 },
    /// Targets are distances in mm along `direction`
    Translation { direction: Vector3 },
}

/// Closed and open targets of one movable element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningPose {
    pub element_id: String,
    pub block_id: String,
    pub kind: OpeningKind,
    pub hinge: Option<Hinge>,
    pub pivot: Point3,
    pub motion: Motion,
    pub closed: f64,
    pub open: f64,
    /// Which target the element settles on
    pub is_open: bool,
}

impl OpeningPose {
    /// The target the element settles on.
    pub fn target(&self) -> f64 {
        if self.is_open {
            self.open
        } else {
            self.closed
        }
    }

    /// Rigid transform that moves a closed panel to `value` (degrees or mm).
    pub fn transform_at(&self, value: f64) -> Isometry3<f64> {
        match self.motion {
            Motion::Rotation { axis } => {
                let rotation =
                    UnitQuaternion::from_axis_angle(&Unit::new_normalize(axis), value.to_radians());
                Isometry3::rotation_wrt_point(rotation, self.pivot)
            }
            Motion::Translation { direction } => {
                Isometry3::from_parts(
                    Translation3::from(direction * value),
                    UnitQuaternion::identity(),
                )
            }
        }
    }

    /// Transform for the settled target.
    pub fn settled_transform(&self) -> Isometry3<f64> {
        self.transform_at(self.target())
    }
}

/// Quarter-circle swing annotation drawn in one technical view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwingArc {
    pub element_id: String,
    pub view: TechView,
    pub center: Point3,
    pub radius: f64,
    /// Free edge in the closed position
    pub start: Point3,
    /// Free edge in the open position
    pub end: Point3,
    /// Heading of `start` in the drawing plane, degrees
    pub start_angle: f64,
    /// Signed sweep from `start` to `end` in the drawing plane, degrees
    pub sweep: f64,
}

impl SwingArc {
    fn new(element_id: &str, view: TechView, center: Point3, start: Point3, end: Point3) -> Self {
        let axes = ViewAxes::new(view);
        let a = axes.project_vector(&(start - center));
        let b = axes.project_vector(&(end - center));
        Self {
            element_id: element_id.to_string(),
            view,
            center,
            radius: (start - center).norm(),
            start,
            end,
            start_angle: heading(&a),
            sweep: signed_angle(&a, &b),
        }
    }

    /// Sample `segments + 1` points along the arc in the cabinet frame.
    pub fn points(&self, segments: usize) -> Vec<Point3> {
        let a = self.start - self.center;
        let b = self.end - self.center;
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| {
                let theta = std::f64::consts::FRAC_PI_2 * i as f64 / segments as f64;
                self.center + a * theta.cos() + b * theta.sin()
            })
            .collect()
    }
}

/// Geometry contributed by the openings of one block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Openings {
    pub panels: Vec<PanelSpec>,
    pub poses: Vec<OpeningPose>,
    pub arcs: Vec<SwingArc>,
}

/// One cell of a block's face grid, relative to the block center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Partition the block face into cells, row 0 at the bottom.
pub fn cells(config: &CabinetConfig, block: &Block) -> Vec<Cell> {
    let width = config.width / f64::from(block.cols);
    let height = block.height / f64::from(block.rows);
    let mut cells = Vec::with_capacity(block.rows as usize * block.cols as usize);
    for row in 0..block.rows {
        for col in 0..block.cols {
            cells.push(Cell {
                row,
                col,
                center_x: -config.width / 2.0 + width / 2.0 + f64::from(col) * width,
                center_y: -block.height / 2.0 + height / 2.0 + f64::from(row) * height,
                width,
                height,
            });
        }
    }
    cells
}

/// Id of the trunk lid of `block_id`.
pub fn lid_element_id(block_id: &str) -> String {
    format!("lid-{}", block_id)
}

fn cell_element_id(kind: OpeningKind, block_id: &str, cell: &Cell) -> String {
    let prefix = match kind {
        OpeningKind::Door => "door",
        OpeningKind::Drawer => "drawer",
        OpeningKind::Lid => "lid",
    };
    format!("{}-{}-{}-{}", prefix, block_id, cell.row, cell.col)
}

/// Handle offsets from the face center along x.
pub fn handle_offsets(face_width: f64) -> Vec<f64> {
    if face_width <= SINGLE_HANDLE_MAX_WIDTH {
        vec![0.0]
    } else {
        let x = face_width / 2.0 - face_width / HANDLE_INSET_DIVISOR;
        vec![-x, x]
    }
}

/// Generate the openings of `block` as seen in `view`.
///
/// The block is assumed valid; [`crate::layout::compile`] validates the whole
/// configuration before this runs.
pub fn generate(
    config: &CabinetConfig,
    block: &Block,
    bounds: &BlockBounds,
    view: ViewMode,
) -> Openings {
    let mut out = Openings::default();
    match block.kind {
        BlockKind::Shelves { .. } => {}
        BlockKind::Doors { open, .. } => {
            if view != ViewMode::Section {
                doors(&mut out, config, block, bounds, view, open);
            }
        }
        BlockKind::Drawers { open } => {
            if view == ViewMode::Section {
                drawer_profiles(&mut out, config, block, bounds);
            } else {
                drawers(&mut out, config, block, bounds, view, open);
            }
        }
        BlockKind::Trunk { lid_open, .. } => {
            trunk_lid(&mut out, config, block, bounds, view, lid_open)
        }
    }
    out
}

fn shows_hardware(view: ViewMode) -> bool {
    matches!(view, ViewMode::Perspective | ViewMode::Elevation)
}

fn doors(
    out: &mut Openings,
    config: &CabinetConfig,
    block: &Block,
    bounds: &BlockBounds,
    view: ViewMode,
    open: bool,
) {
    let cy = bounds.center_y();
    let pivot_z = config.depth / 2.0 + DOOR_THICKNESS / 2.0;

    for cell in cells(config, block) {
        let id = cell_element_id(OpeningKind::Door, &block.id, &cell);
        let hinge = Hinge::for_column(cell.col);
        // sign of the direction from the hinge toward the free edge
        let reach = match hinge {
            Hinge::Left => 1.0,
            Hinge::Right => -1.0,
        };
        let pivot = Point3::new(
            cell.center_x - reach * cell.width / 2.0,
            cell.center_y + cy,
            pivot_z,
        );
        let leaf_w = cell.width - FACE_GAP;
        let leaf_center = Point3::new(cell.center_x, pivot.y, pivot_z);

        out.panels.push(
            PanelSpec::solid(
                PanelRole::Door,
                leaf_center,
                Vector3::new(leaf_w, cell.height - FACE_GAP, DOOR_THICKNESS),
            )
            .in_block(&block.id)
            .moved_by(&id),
        );
        if shows_hardware(view) {
            let knob = Point3::new(
                cell.center_x + reach * (leaf_w / 2.0 - KNOB_INSET),
                pivot.y,
                pivot_z + DOOR_THICKNESS / 2.0 + KNOB_RADIUS,
            );
            out.panels.push(
                PanelSpec::sphere(PanelRole::Knob, knob, KNOB_RADIUS)
                    .in_block(&block.id)
                    .moved_by(&id),
            );
        }

        out.poses.push(OpeningPose {
            element_id: id.clone(),
            block_id: block.id.clone(),
            kind: OpeningKind::Door,
            hinge: Some(hinge),
            pivot,
            motion: Motion::Rotation { axis: Vector3::y() },
            closed: 0.0,
            open: -reach * OPEN_SWING_DEGREES,
            is_open: open,
        });

        if open && view == ViewMode::Plan {
            let start = pivot + Vector3::new(reach * cell.width, 0.0, 0.0);
            let end = pivot + Vector3::new(0.0, 0.0, cell.width);
            out.arcs.push(SwingArc::new(&id, TechView::Plan, pivot, start, end));
        }
    }
}

fn drawers(
    out: &mut Openings,
    config: &CabinetConfig,
    block: &Block,
    bounds: &BlockBounds,
    view: ViewMode,
    open: bool,
) {
    let cy = bounds.center_y();
    let face_z = config.depth / 2.0 + DOOR_THICKNESS / 2.0;
    let t = PANEL_THICKNESS;

    for cell in cells(config, block) {
        let id = cell_element_id(OpeningKind::Drawer, &block.id, &cell);
        let face_w = cell.width - FACE_GAP;
        let face_h = cell.height - FACE_GAP;
        let center = Point3::new(cell.center_x, cell.center_y + cy, face_z);
        // only the bottom row pulls out, and only in the shaded model
        let is_open = open && cell.row == 0 && view == ViewMode::Perspective;

        let face_size = Vector3::new(face_w, face_h, DOOR_THICKNESS);
        out.panels.push(
            PanelSpec::solid(PanelRole::DrawerFace, center, face_size)
                .in_block(&block.id)
                .moved_by(&id),
        );
        if shows_hardware(view) {
            for dx in handle_offsets(face_w) {
                let handle_z = face_z + DOOR_THICKNESS / 2.0 + KNOB_RADIUS;
                let handle = Point3::new(center.x + dx, center.y, handle_z);
                out.panels.push(
                    PanelSpec::sphere(PanelRole::DrawerHandle, handle, KNOB_RADIUS)
                        .in_block(&block.id)
                        .moved_by(&id),
                );
            }
        }
        if is_open {
            let inner_w = (face_w - 2.0 * t).max(1.0);
            let box_d = (config.depth - 2.0 * t).max(1.0);
            let box_h = (face_h - t).max(1.0);
            let box_z = face_z - box_d / 2.0;
            let parts = [
                (
                    Point3::new(center.x, center.y - box_h / 2.0 + t / 2.0, box_z),
                    Vector3::new(inner_w, t, box_d),
                ),
                (
                    Point3::new(center.x - inner_w / 2.0 - t / 2.0, center.y, box_z),
                    Vector3::new(t, box_h, box_d),
                ),
                (
                    Point3::new(center.x + inner_w / 2.0 + t / 2.0, center.y, box_z),
                    Vector3::new(t, box_h, box_d),
                ),
                (
                    Point3::new(center.x, center.y, box_z - box_d / 2.0 + t / 2.0),
                    Vector3::new(inner_w, box_h, t),
                ),
            ];
            for (c, size) in parts {
                out.panels.push(
                    PanelSpec::solid(PanelRole::DrawerBox, c, size)
                        .in_block(&block.id)
                        .moved_by(&id),
                );
            }
        }

        out.poses.push(OpeningPose {
            element_id: id,
            block_id: block.id.clone(),
            kind: OpeningKind::Drawer,
            hinge: None,
            pivot: center,
            motion: Motion::Translation {
                direction: Vector3::z(),
            },
            closed: 0.0,
            open: DRAWER_OPEN_FRACTION * config.depth,
            is_open,
        });
    }
}

/// Section view: one outline per row, taken through the first column.
fn drawer_profiles(
    out: &mut Openings,
    config: &CabinetConfig,
    block: &Block,
    bounds: &BlockBounds,
) {
    let cy = bounds.center_y();
    let t = PANEL_THICKNESS;
    for cell in cells(config, block).into_iter().filter(|c| c.col == 0) {
        let face_h = cell.height - FACE_GAP;
        let y = cell.center_y + cy;
        out.panels.push(PanelSpec {
            shape: PanelShape::Outline,
            ..PanelSpec::solid(
                PanelRole::DrawerProfile,
                Point3::new(0.0, y, 0.0),
                Vector3::new(0.0, face_h, config.depth - 2.0 * t),
            )
            .in_block(&block.id)
        });
        out.panels.push(
            PanelSpec::sphere(
                PanelRole::DrawerHandle,
                Point3::new(0.0, y, config.depth / 2.0 + DOOR_THICKNESS / 2.0 + KNOB_RADIUS),
                KNOB_RADIUS,
            )
            .in_block(&block.id),
        );
    }
}

fn trunk_lid(
    out: &mut Openings,
    config: &CabinetConfig,
    block: &Block,
    bounds: &BlockBounds,
    view: ViewMode,
    lid_open: bool,
) {
    let Some((lid, body)) = trunk_split(block) else {
        return;
    };
    if lid <= 0.0 {
        return;
    }

    let id = lid_element_id(&block.id);
    let pivot = Point3::new(0.0, bounds.base_y + body, -config.depth / 2.0);
    out.poses.push(OpeningPose {
        element_id: id.clone(),
        block_id: block.id.clone(),
        kind: OpeningKind::Lid,
        hinge: None,
        pivot,
        motion: Motion::Rotation { axis: Vector3::x() },
        closed: 0.0,
        open: -OPEN_SWING_DEGREES,
        is_open: lid_open,
    });

    if lid_open && view == ViewMode::Section {
        let start = pivot + Vector3::new(0.0, 0.0, config.depth);
        let end = pivot + Vector3::new(0.0, config.depth, 0.0);
        out.arcs.push(SwingArc::new(&id, TechView::Section, pivot, start, end));
    }
}

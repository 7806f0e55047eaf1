//! Named geometry and drawing constants.
//!
//! Every fixed dimension used by the layout, opening, annotation and
//! envelope passes lives here so that the three technical views derive
//! their figures from one place. All lengths are millimetres.

// =============================================================================
// CARCASS
// =============================================================================

/// Thickness of every structural panel and shelf.
pub const PANEL_THICKNESS: f64 = 18.0;

/// Thickness of door leaves and drawer faces.
pub const DOOR_THICKNESS: f64 = 18.0;

/// Gap subtracted from a grid cell to size a door leaf or drawer face.
pub const FACE_GAP: f64 = 2.0;

/// Shelves are this much shallower than the carcass.
pub const SHELF_SETBACK: f64 = 20.0;

/// Extra inset added to the skirting recess when placing feet, so feet never
/// clash with the skirting board.
pub const FOOT_CLEARANCE: f64 = 20.0;

/// Radius of a cylindrical foot.
pub const FOOT_RADIUS: f64 = 15.0;

/// Minimum number of feet along one row.
pub const MIN_FEET_PER_ROW: u32 = 2;

/// Lid height written for blocks that are not trunks.
pub const DEFAULT_LID_HEIGHT: f64 = 60.0;

// =============================================================================
// OPENINGS
// =============================================================================

/// Swing of an open door leaf or trunk lid, in degrees.
pub const OPEN_SWING_DEGREES: f64 = 90.0;

/// Fraction of the carcass depth an open drawer slides out.
pub const DRAWER_OPEN_FRACTION: f64 = 2.0 / 3.0;

/// Drawer faces up to this width carry a single centered handle.
pub const SINGLE_HANDLE_MAX_WIDTH: f64 = 600.0;

/// Twin handles sit `face_width / HANDLE_INSET_DIVISOR` in from each edge.
pub const HANDLE_INSET_DIVISOR: f64 = 5.0;

/// Distance of a door knob from the free edge of the leaf.
pub const KNOB_INSET: f64 = 30.0;

/// Radius of a knob or handle.
pub const KNOB_RADIUS: f64 = 8.0;

// =============================================================================
// DIMENSIONING
// =============================================================================

/// Label font height used by all technical views.
pub const FONT_SIZE: f64 = 70.0;

/// A run interval shorter than `FONT_SIZE * LABEL_SPAN_FACTOR` cannot hold
/// its label inside the leader.
pub const LABEL_SPAN_FACTOR: f64 = 1.4;

/// Lateral label shift for tight run intervals, as a fraction of the font size.
pub const TEXT_SHIFT_FACTOR: f64 = 0.4;

/// Offset of the tier closest to the object.
pub const MAIN_TIER_OFFSET: f64 = 180.0;

/// Offset of the middle tier.
pub const MIDDLE_TIER_OFFSET: f64 = 340.0;

/// Offset of the tier farthest from the object.
pub const OUTER_TIER_OFFSET: f64 = 500.0;

/// Gap between the measured edge and the start of an extension stroke.
pub const EXTENSION_GAP: f64 = 15.0;

/// Extension strokes run this far past the tier offset.
pub const EXTENSION_OVERSHOOT: f64 = 25.0;

/// Extension strokes are pulled back toward the object by this much.
pub const EXTENSION_TRIM: f64 = 12.0;

/// Break left in the leader line for the label.
pub const TEXT_GAP: f64 = 85.0;

/// Outside labels move along the axis by `TEXT_GAP * TEXT_OUTSIDE_FACTOR`.
pub const TEXT_OUTSIDE_FACTOR: f64 = 0.6;

/// Length of each arrowhead stroke.
pub const ARROW_SIZE: f64 = 18.0;

/// Stroke weight of dimension lines.
pub const LINE_WEIGHT: f64 = 4.0;

/// The ground line extends this far beyond each side of the object.
pub const GROUND_LINE_OVERHANG: f64 = 200.0;

// =============================================================================
// VIEW ENVELOPE
// =============================================================================

/// Room reserved around the object for the outer dimension lines and labels.
pub const LABEL_OFFSET: f64 = 200.0;

/// Bleed margin added to every view envelope.
pub const VIEW_PADDING: f64 = 300.0;

/// Share of the smaller viewport side the envelope may occupy.
pub const FIT_RATIO: f64 = 0.85;

/// Tolerance for floating-point comparisons.
pub const EPSILON: f64 = 1e-9;

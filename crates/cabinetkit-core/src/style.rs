//! Drawing style for the technical views.
//!
//! Presentation figures that a user may tune. Defaults come from
//! [`crate::constants`]; the settings crate persists overrides.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ARROW_SIZE, EXTENSION_GAP, EXTENSION_OVERSHOOT, EXTENSION_TRIM, FIT_RATIO, FONT_SIZE,
    GROUND_LINE_OVERHANG, LABEL_OFFSET, LABEL_SPAN_FACTOR, LINE_WEIGHT, MAIN_TIER_OFFSET,
    MIDDLE_TIER_OFFSET, OUTER_TIER_OFFSET, TEXT_GAP, TEXT_OUTSIDE_FACTOR, TEXT_SHIFT_FACTOR,
    VIEW_PADDING,
};
use crate::error::{Result, ValidationError};

/// Distance band of a dimension line from the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionTier {
    /// Closest to the object
    Main,
    /// Between main and outer
    Middle,
    /// Farthest from the object
    Outer,
}

/// Dimension and envelope style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingStyle {
    /// Label font height
    pub font_size: f64,
    /// Offset of the main tier
    pub main_offset: f64,
    /// Offset of the middle tier
    pub middle_offset: f64,
    /// Offset of the outer tier
    pub outer_offset: f64,
    /// Gap between the object edge and an extension stroke
    pub extension_gap: f64,
    /// Extension overshoot past the tier offset
    pub extension_overshoot: f64,
    /// Extension pull-back toward the object
    pub extension_trim: f64,
    /// Break in the leader for the label
    pub text_gap: f64,
    /// Arrowhead stroke length
    pub arrow_size: f64,
    /// Stroke weight
    pub line_weight: f64,
    /// Ground line overhang on each side
    pub ground_line_overhang: f64,
    /// Envelope allowance for dimension lines and labels
    pub label_offset: f64,
    /// Envelope bleed margin
    pub padding: f64,
    /// Share of the smaller viewport side used by the envelope
    pub fit_ratio: f64,
}

impl Default for DrawingStyle {
    fn default() -> Self {
        Self {
            font_size: FONT_SIZE,
            main_offset: MAIN_TIER_OFFSET,
            middle_offset: MIDDLE_TIER_OFFSET,
            outer_offset: OUTER_TIER_OFFSET,
            extension_gap: EXTENSION_GAP,
            extension_overshoot: EXTENSION_OVERSHOOT,
            extension_trim: EXTENSION_TRIM,
            text_gap: TEXT_GAP,
            arrow_size: ARROW_SIZE,
            line_weight: LINE_WEIGHT,
            ground_line_overhang: GROUND_LINE_OVERHANG,
            label_offset: LABEL_OFFSET,
            padding: VIEW_PADDING,
            fit_ratio: FIT_RATIO,
        }
    }
}

impl DrawingStyle {
    /// Offset of `tier` from the object edge.
    pub fn tier_offset(&self, tier: DimensionTier) -> f64 {
        match tier {
            DimensionTier::Main => self.main_offset,
            DimensionTier::Middle => self.middle_offset,
            DimensionTier::Outer => self.outer_offset,
        }
    }

    /// Shortest span that can hold its label inside the leader.
    pub fn min_label_span(&self) -> f64 {
        self.font_size * LABEL_SPAN_FACTOR
    }

    /// Lateral label shift for run interval `index`; alternates so that
    /// neighbouring tight labels do not collide.
    pub fn text_shift(&self, index: usize) -> f64 {
        let magnitude = self.font_size * TEXT_SHIFT_FACTOR;
        if index % 2 == 0 {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Distance an outside label moves along the axis.
    pub fn outside_label_shift(&self) -> f64 {
        self.text_gap * TEXT_OUTSIDE_FACTOR
    }

    /// Reject styles that would produce inverted or empty drawings.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("fontSize", self.font_size),
            ("mainOffset", self.main_offset),
            ("middleOffset", self.middle_offset),
            ("outerOffset", self.outer_offset),
            ("arrowSize", self.arrow_size),
            ("lineWeight", self.line_weight),
            ("fitRatio", self.fit_ratio),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(ValidationError::NotFinite {
                    field: field.to_string(),
                }
                .into());
            }
            if value <= 0.0 {
                return Err(ValidationError::NonPositive {
                    field: field.to_string(),
                    value,
                }
                .into());
            }
        }

        let non_negative = [
            ("extensionGap", self.extension_gap),
            ("extensionOvershoot", self.extension_overshoot),
            ("extensionTrim", self.extension_trim),
            ("textGap", self.text_gap),
            ("groundLineOverhang", self.ground_line_overhang),
            ("labelOffset", self.label_offset),
            ("padding", self.padding),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() {
                return Err(ValidationError::NotFinite {
                    field: field.to_string(),
                }
                .into());
            }
            if value < 0.0 {
                return Err(ValidationError::Negative {
                    field: field.to_string(),
                    value,
                }
                .into());
            }
        }

        Ok(())
    }
}

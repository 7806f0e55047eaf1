//! Length rounding and formatting for dimension labels
//!
//! Labels show whole millimetres. Halves round up toward positive infinity
//! so that a negative run and its mirror read the same.

/// Round a length to whole millimetres, halves toward positive infinity.
pub fn round_mm(value_mm: f64) -> f64 {
    (value_mm + 0.5).floor()
}

/// Format length value for a dimension label
///
/// * `value_mm` - Value in millimeters
pub fn format_length(value_mm: f64) -> String {
    let rounded = round_mm(value_mm);
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{:.0}", rounded)
}

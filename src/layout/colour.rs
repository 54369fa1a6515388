//! Colour policy: two fixed fills keyed on the sign of a value.

use crate::models::Rgb;

/// Fill for increasing (strictly positive) bars.
pub const POSITIVE_COLOUR: Rgb = Rgb::new(0x00, 0x34, 0x5E); // #00345E
/// Fill for decreasing (zero or negative) bars.
pub const NEGATIVE_COLOUR: Rgb = Rgb::new(0xFF, 0x08, 0x00); // #FF0800
/// Fill for the synthetic Total bar, assigned by the view model.
pub const TOTAL_COLOUR: Rgb = Rgb::new(0x77, 0x77, 0x77); // #777777

/// Map a signed value to its fill colour. Zero counts as decreasing.
pub fn colour_for_value(value: f64) -> Rgb {
    if value > 0.0 {
        POSITIVE_COLOUR
    } else {
        NEGATIVE_COLOUR
    }
}

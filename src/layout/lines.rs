//! Reference-line resolution and domain widening.

use crate::models::{Bounds, LineDrawSpec};
use crate::settings::{LineSettings, LineSlot};

/// Resolve both reference-line slots into draw specs and widen the value
/// domain to accommodate them.
///
/// Hidden slots stay in the output as collapsed specs so the renderer keeps
/// a stable element per slot. Only *visible* line values can raise
/// `bounds.max`; lines never lower `min`.
pub fn resolve_lines(settings: &LineSettings, bounds: &Bounds) -> ([LineDrawSpec; 2], Bounds) {
    let specs = [resolve_slot(&settings.line1), resolve_slot(&settings.line2)];

    let mut widened = *bounds;
    for (slot, spec) in [&settings.line1, &settings.line2].into_iter().zip(&specs) {
        if slot.show && spec.value > widened.max {
            widened.max = spec.value;
        }
    }
    (specs, widened)
}

fn resolve_slot(slot: &LineSlot) -> LineDrawSpec {
    if !slot.show {
        return LineDrawSpec::collapsed();
    }
    LineDrawSpec {
        value: slot.threshold(),
        full_width: true,
        stroke_width: 1,
        colour: slot.colour,
        label: slot.label.clone(),
    }
}

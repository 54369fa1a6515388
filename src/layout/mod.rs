//! Layout engine: reorder → bounds → position → reference lines.
//!
//! Each update recomputes everything from scratch; the engine holds no state
//! between invocations and never fails for data-shape problems. Malformed
//! rows degrade to a partially populated (or empty) layout.

pub mod bounds;
pub mod colour;
pub mod lines;
pub mod position;
pub mod reorder;

pub use bounds::compute_bounds;
pub use lines::resolve_lines;
pub use position::{BarSpan, position, step};
pub use reorder::{Reordered, RowOutcome, reorder};

use crate::models::{BarLayout, Layout, Observation};
use crate::settings::LineSettings;
use crate::viewmodel;

/// Whether to append the synthetic Total bar after reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalRow {
    Append,
    Omit,
}

/// Run one full layout pass.
///
/// The pipeline: reorder the observations, compute bounds over the reordered
/// data series (the Total bar is excluded from bounds), append the Total bar
/// when requested, position every bar, then resolve reference lines and let
/// them widen the domain. Deterministic and side-effect free: identical
/// input produces identical output.
pub fn compute_layout(
    observations: &[Observation],
    settings: &LineSettings,
    total: TotalRow,
) -> Layout {
    let Reordered { mut series, outcomes } = reorder(observations);
    let data_bounds = compute_bounds(&series);

    if total == TotalRow::Append && !series.is_empty() {
        series.push(viewmodel::total_row(&series));
    }

    let spans = position(&series);
    let any_highlighted = series.iter().any(|o| o.highlighted);
    let bars = series
        .iter()
        .zip(&spans)
        .map(|(obs, span)| BarLayout {
            category: obs.category.clone(),
            top: span.top,
            height: span.height(),
            colour: obs.colour,
            // Cross-filter dimming: everything full-strength unless some
            // *other* bar is highlighted.
            opacity: if !any_highlighted || obs.highlighted { 1.0 } else { 0.5 },
            highlighted: obs.highlighted,
            identity: obs.identity.clone(),
        })
        .collect();

    let (lines, widened) = resolve_lines(settings, &data_bounds);

    Layout { bars, bounds: widened, lines, outcomes }
}

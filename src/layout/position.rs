//! The waterfall positioner: a single stateful pass over the ordered series.
//!
//! Despite the running-total accumulator, positive steps plot from the
//! baseline at their *own* value rather than at `running + value`, producing
//! a "delta staircase" rather than a true cumulative waterfall. Negative
//! steps do descend from the recorded total. This asymmetry is the visual's
//! defining behaviour, not an oversight to repair.

use crate::models::Observation;
use serde::{Deserialize, Serialize};

/// Reserved terminal category label, matched case-sensitively. A Total bar
/// always spans from the zero baseline and leaves the running total alone.
pub const TOTAL_CATEGORY: &str = "Total";

/// One bar's vertical extent in value space, before any pixel scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSpan {
    pub top: f64,
    pub bottom: f64,
}

impl BarSpan {
    pub fn height(self) -> f64 {
        (self.top - self.bottom).abs()
    }
}

/// Position a single observation given the running total at entry.
///
/// Returns the bar span and the running total to carry into the next step.
/// This is the whole positioner as a pure function; [`position`] folds it
/// over a series.
pub fn step(running_total: f64, obs: &Observation) -> (BarSpan, f64) {
    if obs.category == TOTAL_CATEGORY {
        let span = if obs.value >= 0.0 {
            BarSpan { top: obs.value, bottom: 0.0 }
        } else {
            BarSpan { top: 0.0, bottom: obs.value }
        };
        (span, running_total)
    } else if obs.value >= 0.0 {
        // Own value as top, not running + value.
        (BarSpan { top: obs.value, bottom: 0.0 }, obs.value)
    } else {
        let next = running_total + obs.value;
        (BarSpan { top: running_total, bottom: next }, next)
    }
}

/// Walk the ordered series once, emitting one span per observation.
pub fn position(series: &[Observation]) -> Vec<BarSpan> {
    let mut running_total = 0.0;
    series
        .iter()
        .map(|obs| {
            let (span, next) = step(running_total, obs);
            running_total = next;
            span
        })
        .collect()
}

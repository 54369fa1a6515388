//! Build engine observations from already-acquired host rows.
//!
//! This is the thin seam between the external data layer and the layout
//! engine: policy colours are assigned here, the series-level highlight flag
//! is derived here, and the synthetic Total row is built here.

use crate::layout::colour::{TOTAL_COLOUR, colour_for_value};
use crate::layout::position::TOTAL_CATEGORY;
use crate::models::{Observation, RawRow};

/// Observations plus the series-level highlight flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewModel {
    pub observations: Vec<Observation>,
    /// True when any row carries a cross-filter highlight.
    pub highlights: bool,
}

/// Turn raw host rows into observations with policy colours assigned.
pub fn build(rows: &[RawRow]) -> ViewModel {
    let observations: Vec<Observation> = rows
        .iter()
        .map(|row| Observation {
            category: row.category.clone(),
            value: row.value,
            colour: colour_for_value(row.value),
            highlighted: row.highlighted.unwrap_or(false),
            identity: row.identity.clone(),
        })
        .collect();
    let highlights = observations.iter().any(|o| o.highlighted);
    ViewModel { observations, highlights }
}

/// Build the synthetic grey Total row: its value is the sum of the series.
pub fn total_row(series: &[Observation]) -> Observation {
    let sum: f64 = series.iter().map(|o| o.value).sum();
    Observation {
        category: TOTAL_CATEGORY.to_string(),
        value: sum,
        colour: TOTAL_COLOUR,
        highlighted: false,
        identity: None,
    }
}

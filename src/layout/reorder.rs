//! Category reordering: re-sort observations into ascending ordinal order.
//!
//! Each category label is expected to begin with a numeric ordinal token,
//! optionally zero-padded (e.g. `"1 Revenue"`, `"02 Costs"`). Rows whose
//! ordinal cannot be determined are dropped; when two rows claim the same
//! ordinal, the later one in input order wins. Neither case is an error —
//! callers needing strict validation must pre-validate their labels.

use crate::models::Observation;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// What happened to one input row during reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowOutcome {
    /// Row occupies its ordinal slot in the output.
    Kept,
    /// Ordinal token missing, non-numeric, or outside the 1-based slot range.
    DroppedUnparseable,
    /// A later row in input order claimed the same ordinal.
    OverwrittenDuplicate,
}

/// Reordering result: the dense ascending series plus a per-input-row
/// outcome list (parallel to the input, not to the output).
#[derive(Debug, Clone, PartialEq)]
pub struct Reordered {
    pub series: Vec<Observation>,
    pub outcomes: Vec<RowOutcome>,
}

/// Extract the ordinal from a category label.
///
/// Takes the first whitespace-delimited token and strips a single leading
/// `'0'` character when the token is longer than one character. This is a
/// one-character strip, not a canonical integer parse: `"00"` becomes `"0"`,
/// so labels with more than one leading zero stay fragile on purpose.
pub fn parse_ordinal(category: &str) -> Option<u32> {
    let token = category.split_whitespace().next()?;
    let token = if token.len() > 1 && token.as_bytes()[0] == b'0' {
        &token[1..]
    } else {
        token
    };
    token.parse::<u32>().ok()
}

/// Reorder observations into ascending ordinal order.
///
/// Builds slots `1..=M` where `M` is the largest parsed ordinal, places the
/// *last* matching row into each slot, and compacts away empty slots. Rows
/// with ordinal 0 can never land in a slot and are dropped. Never fails;
/// malformed input degrades to omission.
pub fn reorder(observations: &[Observation]) -> Reordered {
    let ordinals: Vec<Option<u32>> = observations
        .iter()
        .map(|o| parse_ordinal(&o.category))
        .collect();
    let max_ordinal = ordinals.iter().flatten().copied().max().unwrap_or(0);

    let mut outcomes = vec![RowOutcome::DroppedUnparseable; observations.len()];
    for (obs, ordinal) in observations.iter().zip(&ordinals) {
        match ordinal {
            None => warn!(
                "dropping {:?}: no numeric ordinal in leading token",
                obs.category
            ),
            Some(0) => debug!("dropping {:?}: ordinal 0 has no slot", obs.category),
            Some(_) => {}
        }
    }

    let mut series = Vec::with_capacity(observations.len());
    for slot in 1..=max_ordinal {
        let mut winner: Option<usize> = None;
        for (idx, ordinal) in ordinals.iter().enumerate() {
            if *ordinal == Some(slot) {
                if let Some(previous) = winner.replace(idx) {
                    outcomes[previous] = RowOutcome::OverwrittenDuplicate;
                    warn!(
                        "ordinal {} duplicated: {:?} overwrites {:?}",
                        slot, observations[idx].category, observations[previous].category
                    );
                }
            }
        }
        if let Some(idx) = winner {
            outcomes[idx] = RowOutcome::Kept;
            series.push(observations[idx].clone());
        }
    }

    Reordered { series, outcomes }
}

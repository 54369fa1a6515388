//! Per-update reference-line configuration.
//!
//! The host owns these settings; the engine reads a fresh immutable snapshot
//! on every update and never mutates it. Each property defaults
//! independently when absent from the metadata object: `show` to false,
//! `value` to 0, `colour` to black, `label` to the empty string.

use crate::models::Rgb;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

/// One reference-line slot as configured by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LineSlot {
    pub show: bool,
    /// Threshold in value space; absent means 0.
    pub value: Option<f64>,
    /// Hex `#RRGGBB`; unparseable strings fall back to black with a warning.
    #[serde(deserialize_with = "de_colour_lenient")]
    pub colour: Rgb,
    pub label: String,
}

impl LineSlot {
    /// The effective threshold, with the absent-value default applied.
    pub fn threshold(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }
}

/// Both reference-line slots, read fresh from host metadata each update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LineSettings {
    pub line1: LineSlot,
    pub line2: LineSlot,
}

impl LineSettings {
    /// Parse a host metadata object, applying per-property defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Serde helper: accept a hex colour string, an explicit null, or a missing
/// field, degrading to black rather than rejecting the whole settings object.
fn de_colour_lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rgb, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw {
        None => Rgb::BLACK,
        Some(s) => Rgb::from_hex(&s).unwrap_or_else(|e| {
            warn!("{e}; using black");
            Rgb::BLACK
        }),
    })
}

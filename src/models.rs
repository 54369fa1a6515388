use crate::layout::reorder::RowOutcome;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque RGB colour, serialized as a `#RRGGBB` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Raised when a colour string is not in `#RRGGBB` notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid colour {0:?}, expected #RRGGBB")]
pub struct ColourParseError(pub String);

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string (case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, ColourParseError> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| ColourParseError(s.to_string()))?;
        // The filter above guarantees the radix parses.
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        Ok(Self::new(byte(0), byte(2), byte(4)))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::BLACK
    }
}

/// Raw host row as it arrives from the data layer (one CSV record).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawRow {
    pub category: String,
    pub value: f64,
    #[serde(default)]
    pub highlighted: Option<bool>,
    #[serde(default)]
    pub identity: Option<String>,
}

/// One input observation (one row = one bar candidate).
///
/// `identity` is an opaque selection token: the engine passes it through
/// unchanged and never inspects it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    pub category: String,
    pub value: f64,
    pub colour: Rgb,
    pub highlighted: bool,
    pub identity: Option<String>,
}

impl Observation {
    /// Build an observation with the policy colour for its value, no
    /// highlight, and no identity token.
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
            colour: crate::layout::colour::colour_for_value(value),
            highlighted: false,
            identity: None,
        }
    }
}

/// Value-domain interval used to construct a linear value→pixel scale.
///
/// `min` is the most negative prefix sum of the reordered series (clamped at
/// 0 from above); `max` is the largest single observation value (clamped at
/// 0 from below). The asymmetry is deliberate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const ZERO: Bounds = Bounds { min: 0.0, max: 0.0 };
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::ZERO
    }
}

/// Final per-bar geometry in value space (pre-scale), ordinal order.
///
/// `top` is the bar's upper edge; its lower edge is `top - height`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BarLayout {
    pub category: String,
    pub top: f64,
    pub height: f64,
    pub colour: Rgb,
    pub opacity: f64,
    pub highlighted: bool,
    pub identity: Option<String>,
}

/// Resolved draw parameters for one reference-line slot.
///
/// A hidden slot is emitted collapsed (zero value, zero stroke width, empty
/// label) rather than omitted, so the slot keeps a stable identity across
/// updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineDrawSpec {
    /// Vertical coordinate of the line in value space.
    pub value: f64,
    /// True for a full plot-width line, false when collapsed to a point.
    pub full_width: bool,
    pub stroke_width: u32,
    pub colour: Rgb,
    pub label: String,
}

impl LineDrawSpec {
    /// The geometrically collapsed spec emitted for a hidden slot.
    pub fn collapsed() -> Self {
        Self {
            value: 0.0,
            full_width: false,
            stroke_width: 0,
            colour: Rgb::BLACK,
            label: String::new(),
        }
    }
}

/// The engine's output for one update cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Layout {
    /// Bar geometry in ordinal order (Total bar last when appended).
    pub bars: Vec<BarLayout>,
    /// Value-domain bounds, possibly widened by visible reference lines.
    pub bounds: Bounds,
    /// Both reference-line slots, hidden ones collapsed.
    pub lines: [LineDrawSpec; 2],
    /// Per-input-row reordering outcome, for data-quality diagnostics.
    pub outcomes: Vec<RowOutcome>,
}

//! waterfall-layout
//!
//! A lightweight Rust library that computes the geometric layout for a
//! waterfall chart: ordinal category reordering, a running-total bar
//! positioner, value-domain bounds, and up to two labelled reference lines.
//! Pairs with the `waterfall` CLI.
//!
//! The engine is purely computational: it takes already-acquired observation
//! rows plus per-update reference-line settings, and hands pre-scale bar and
//! line geometry (in value space) to an external renderer. Rendering, axis
//! ticks, tooltips, and selection interaction are out of scope.
//!
//! ### Example
//! ```
//! use waterfall_layout::{Observation, LineSettings, TotalRow, compute_layout};
//!
//! let rows = vec![
//!     Observation::new("1 Revenue", 10.0),
//!     Observation::new("2 Costs", -4.0),
//! ];
//! let layout = compute_layout(&rows, &LineSettings::default(), TotalRow::Append);
//! assert_eq!(layout.bars.len(), 3); // two data bars plus the Total bar
//! assert_eq!(layout.bounds.max, 10.0);
//! ```

pub mod layout;
pub mod models;
pub mod settings;
pub mod storage;
pub mod viewmodel;

pub use layout::position::TOTAL_CATEGORY;
pub use layout::{TotalRow, compute_layout};
pub use models::{BarLayout, Bounds, Layout, LineDrawSpec, Observation, RawRow, Rgb};
pub use settings::{LineSettings, LineSlot};
pub use viewmodel::ViewModel;

//! Elastic tab stops
//!
//! Given tab-separated text and a way to measure cell widths, computes
//! per-line tab stop positions so that cells sharing a column line up, with
//! every column as wide as the widest cell in its block of adjacent lines.
//!
//! ```
//! use elastic_tabs::{compute_with_defaults, CharCount};
//!
//! let layout = compute_with_defaults("a\tbb\nccc\td\n", &CharCount::default());
//! assert_eq!(layout.get(0).unwrap().stops, vec![20.0]);
//! assert_eq!(layout.get(1).unwrap().stops, vec![20.0]);
//! assert!(layout.get(2).unwrap().stops.is_empty());
//! ```
//!
//! The layout pass is a pure function of its inputs: no caches, no global
//! state, nothing kept after it returns.

pub mod cli;
pub mod columns;
pub mod config;
pub mod config_paths;
pub mod layout;
pub mod matrix;
pub mod measure;
pub mod render;
pub mod stops;
pub mod tokenize;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::{ElasticConfig, MeasureKind, TabStopConfig};
pub use layout::{compute, compute_with_defaults, LayoutResult, LineLayout, TabAlignment, TabStop};
pub use measure::{CharCount, DisplayColumns, FontMeasure, Measure};
pub use render::render_aligned;

//! Layout pass and result
//!
//! [`compute`] runs the whole pipeline in one synchronous call:
//!
//! ```text
//! text ─► tokenize ─► WidthMatrix::build ─► columns::resolve ─► stops::accumulate
//!                                                                    │
//!                         LayoutResult { (line range, stops), ... } ◄┘
//! ```
//!
//! Nothing survives between calls. Hosts call it again after every edit and
//! apply each line's stops as left-aligned tab stops over the line's range.

use std::ops::Range;

use ropey::Rope;
use serde::Serialize;

use crate::columns;
use crate::config::TabStopConfig;
use crate::matrix::WidthMatrix;
use crate::measure::Measure;
use crate::stops;
use crate::tokenize::tokenize;

/// Tab stop alignment; left is the only one produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TabAlignment {
    #[default]
    Left,
}

/// One stop as a text system would consume it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TabStop {
    pub location: f64,
    pub alignment: TabAlignment,
}

/// Stops for a single line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineLayout {
    /// Byte range of the line in the document, excluding its `\n`
    pub range: Range<usize>,
    /// Strictly increasing stop positions, one per tab on the line
    pub stops: Vec<f64>,
}

impl LineLayout {
    pub fn tab_stops(&self) -> impl Iterator<Item = TabStop> + '_ {
        self.stops.iter().map(|&location| TabStop {
            location,
            alignment: TabAlignment::Left,
        })
    }

    /// The line's range in chars, for hosts that index a [`Rope`]
    ///
    /// `rope` must hold the same text the layout was computed from.
    pub fn char_range(&self, rope: &Rope) -> Range<usize> {
        rope.byte_to_char(self.range.start)..rope.byte_to_char(self.range.end)
    }
}

/// Stops for every line, in document order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LayoutResult {
    lines: Vec<LineLayout>,
}

impl LayoutResult {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, line: usize) -> Option<&LineLayout> {
        self.lines.get(line)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineLayout> {
        self.lines.iter()
    }

    pub fn lines(&self) -> &[LineLayout] {
        &self.lines
    }

    /// Largest stop on any line, or zero when no line has a tab
    pub fn max_stop(&self) -> f64 {
        self.lines
            .iter()
            .filter_map(|line| line.stops.last().copied())
            .fold(0.0, f64::max)
    }
}

impl IntoIterator for LayoutResult {
    type Item = LineLayout;
    type IntoIter = std::vec::IntoIter<LineLayout>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a LayoutResult {
    type Item = &'a LineLayout;
    type IntoIter = std::slice::Iter<'a, LineLayout>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Compute elastic tab stops for every line of `text`
pub fn compute<M: Measure + ?Sized>(
    text: &str,
    measure: &M,
    config: &TabStopConfig,
) -> LayoutResult {
    let _span = tracing::debug_span!("elastic_layout", bytes = text.len()).entered();

    let tokens = {
        #[cfg(feature = "profile-tracing")]
        let _stage = tracing::trace_span!("tokenize").entered();
        tokenize(text)
    };
    let matrix = {
        #[cfg(feature = "profile-tracing")]
        let _stage = tracing::trace_span!("measure").entered();
        WidthMatrix::build(text, &tokens, measure)
    };
    let widths = {
        #[cfg(feature = "profile-tracing")]
        let _stage = tracing::trace_span!("resolve").entered();
        columns::resolve(&matrix)
    };

    let lines = tokens
        .lines()
        .iter()
        .zip(widths.rows())
        .map(|(line, row)| LineLayout {
            range: line.range(),
            stops: stops::accumulate(row, config),
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        lines = lines.len(),
        cells = matrix.cell_count(),
        "computed elastic tab stops"
    );

    LayoutResult { lines }
}

/// [`compute`] with the default spacing (5) and first-stop minimum (20)
pub fn compute_with_defaults<M: Measure + ?Sized>(text: &str, measure: &M) -> LayoutResult {
    compute(text, measure, &TabStopConfig::default())
}

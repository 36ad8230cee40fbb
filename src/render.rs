//! Plain-text rendering of a layout
//!
//! A consumer for hosts without native tab stops: every tab becomes enough
//! spaces to reach the line's next stop, with stops converted to whole
//! columns of `unit` width. Used by the command-line tool's `aligned` output.

use crate::layout::LayoutResult;
use crate::measure::Measure;
use crate::tokenize::tokenize;

/// Replace tabs in `text` with spaces so cells start at their stops
///
/// `layout` must have been computed from `text` with the same `measure`.
/// At least one space is always emitted per tab.
pub fn render_aligned<M: Measure + ?Sized>(
    text: &str,
    layout: &LayoutResult,
    measure: &M,
    unit: f64,
) -> String {
    let unit = if unit > 0.0 { unit } else { 1.0 };
    let tokens = tokenize(text);
    let mut out = String::with_capacity(text.len() + text.len() / 2);

    for (index, span) in tokens.lines().iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }

        let stops = layout
            .get(index)
            .map(|l| l.stops.as_slice())
            .unwrap_or(&[]);
        let cells = tokens.cells(index);
        let mut position = 0.0;

        for (column, cell) in cells.iter().enumerate() {
            out.push_str(&text[cell.clone()]);
            if column + 1 == span.cell_count() {
                break;
            }

            position += measure.measure(text, cell.clone());
            let target = stops.get(column).copied().unwrap_or(position + unit);
            let pad = ((target - position) / unit).ceil().max(1.0) as usize;
            out.extend(std::iter::repeat(' ').take(pad));
            position += pad as f64 * unit;
        }
    }

    out
}

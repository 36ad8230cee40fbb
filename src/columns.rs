//! Block-column resolution
//!
//! Walks the lines top to bottom carrying the previous line's column
//! widths. A line with fewer tabs than the carried vector truncates it,
//! which closes the block for every column at or past its tab count. Each
//! column a line opens takes the widest cell over the run of lines below
//! that keep having a cell in that column.
//!
//! The run maxima come from one bottom-up pass over the matrix, so opening
//! a column is a lookup instead of a forward scan. [`resolve_by_forward_scan`]
//! does the scan literally and must agree with [`resolve`] on every input.

use crate::matrix::WidthMatrix;

/// Per-line column widths, same ragged shape as the [`WidthMatrix`] they
/// were resolved from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnWidths {
    widths: Vec<f64>,
    rows: Vec<(usize, usize)>,
}

impl ColumnWidths {
    fn with_capacity(lines: usize, cells: usize) -> Self {
        Self {
            widths: Vec::with_capacity(cells),
            rows: Vec::with_capacity(lines),
        }
    }

    fn push_row(&mut self, row: &[f64]) {
        let start = self.widths.len();
        self.widths.extend_from_slice(row);
        self.rows.push((start, row.len()));
    }

    pub fn line_count(&self) -> usize {
        self.rows.len()
    }

    /// Column widths of `line`; its length equals the line's tab count
    pub fn row(&self, line: usize) -> &[f64] {
        match self.rows.get(line) {
            Some(&(start, len)) => &self.widths[start..start + len],
            None => &[],
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows.len()).map(move |line| self.row(line))
    }
}

/// Resolve every line's column widths
pub fn resolve(matrix: &WidthMatrix) -> ColumnWidths {
    let run_max = forward_run_maxima(matrix);
    let mut resolved = ColumnWidths::with_capacity(matrix.line_count(), matrix.cell_count());
    let mut carried: Vec<f64> = Vec::new();
    let mut opened = 0usize;

    for line in 0..matrix.line_count() {
        let (start, tabs) = matrix.row_bounds(line);

        // Fewer tabs than carried columns ends those blocks
        carried.truncate(tabs);

        let kept = carried.len();
        carried.extend_from_slice(&run_max[start + kept..start + tabs]);
        opened += tabs - kept;

        resolved.push_row(&carried);
    }

    tracing::trace!(
        lines = matrix.line_count(),
        opened_columns = opened,
        "resolved column widths"
    );

    resolved
}

/// Resolve by scanning forward from each line for every column it opens
///
/// Quadratic when many columns open over long runs of lines; prefer
/// [`resolve`].
pub fn resolve_by_forward_scan(matrix: &WidthMatrix) -> ColumnWidths {
    let mut resolved = ColumnWidths::with_capacity(matrix.line_count(), matrix.cell_count());
    let mut carried: Vec<f64> = Vec::new();

    for line in 0..matrix.line_count() {
        let tabs = matrix.columns(line);
        carried.truncate(tabs);

        for column in carried.len()..tabs {
            let width = (line..matrix.line_count())
                .map_while(|below| matrix.get(below, column))
                .reduce(f64::max)
                .unwrap_or(0.0);
            carried.push(width);
        }

        resolved.push_row(&carried);
    }

    resolved
}

/// For every cell, the widest cell in its column from this line down to
/// the end of the run of lines that still have that column
///
/// Same flat layout as the matrix itself.
fn forward_run_maxima(matrix: &WidthMatrix) -> Vec<f64> {
    let mut run_max = matrix.flat().to_vec();

    for line in (0..matrix.line_count().saturating_sub(1)).rev() {
        let (start, len) = matrix.row_bounds(line);
        let (below_start, below_len) = matrix.row_bounds(line + 1);

        for column in 0..len.min(below_len) {
            let below = run_max[below_start + column];
            let here = &mut run_max[start + column];
            *here = here.max(below);
        }
    }

    run_max
}

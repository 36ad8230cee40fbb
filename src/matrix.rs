//! Ragged width matrix
//!
//! Holds the measured width of every tab-terminated cell, one row per line.
//! Rows are slices of one flat `Vec<f64>`; a per-line `(start, len)` table
//! locates them. Remainder cells are never measured.

use crate::measure::Measure;
use crate::tokenize::Tokens;

/// Measured widths of tab-terminated cells, one row per line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidthMatrix {
    widths: Vec<f64>,
    rows: Vec<(usize, usize)>,
}

impl WidthMatrix {
    /// Measure every tab-terminated cell of `tokens`
    ///
    /// Calls `measure` exactly once per tab-terminated cell, in document order.
    pub fn build<M: Measure + ?Sized>(text: &str, tokens: &Tokens, measure: &M) -> Self {
        let total: usize = tokens.lines().iter().map(|l| l.tab_count()).sum();
        let mut widths = Vec::with_capacity(total);
        let mut rows = Vec::with_capacity(tokens.line_count());

        for line in 0..tokens.line_count() {
            let start = widths.len();
            widths.extend(
                tokens
                    .tab_cells(line)
                    .iter()
                    .map(|cell| measure.measure(text, cell.clone())),
            );
            rows.push((start, widths.len() - start));
        }

        Self { widths, rows }
    }

    /// Build directly from per-line widths
    pub fn from_rows<R, I>(rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = f64>,
    {
        let mut matrix = Self::default();
        for row in rows {
            let start = matrix.widths.len();
            matrix.widths.extend(row);
            matrix.rows.push((start, matrix.widths.len() - start));
        }
        matrix
    }

    pub fn line_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of measured cells
    pub fn cell_count(&self) -> usize {
        self.widths.len()
    }

    /// Number of columns (tab-terminated cells) on `line`
    pub fn columns(&self, line: usize) -> usize {
        self.rows.get(line).map_or(0, |&(_, len)| len)
    }

    pub fn row(&self, line: usize) -> &[f64] {
        match self.rows.get(line) {
            Some(&(start, len)) => &self.widths[start..start + len],
            None => &[],
        }
    }

    /// Width of `column` on `line`
    ///
    /// `None` means the line has no cell at that column: column `c` exists
    /// only when the line has more than `c` tabs.
    pub fn get(&self, line: usize, column: usize) -> Option<f64> {
        self.row(line).get(column).copied()
    }

    /// Position of row `line` inside the flat storage
    pub(crate) fn row_bounds(&self, line: usize) -> (usize, usize) {
        self.rows.get(line).copied().unwrap_or((self.widths.len(), 0))
    }

    pub(crate) fn flat(&self) -> &[f64] {
        &self.widths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::CharCount;
    use crate::tokenize::tokenize;
    use std::cell::Cell;
    use std::ops::Range;

    #[test]
    fn test_remainder_cells_are_not_measured() {
        let text = "a\tbb\tccc\nddddd";
        let matrix = WidthMatrix::build(text, &tokenize(text), &CharCount::default());

        assert_eq!(matrix.line_count(), 2);
        assert_eq!(matrix.row(0), &[1.0, 2.0]);
        assert!(matrix.row(1).is_empty());
        assert_eq!(matrix.cell_count(), 2);
    }

    #[test]
    fn test_measure_called_once_per_tab_terminated_cell() {
        let text = "a\tb\tc\n\nd\te\n\t\t\t";
        let calls = Cell::new(0usize);
        let counting = |range: Range<usize>| {
            calls.set(calls.get() + 1);
            range.len() as f64
        };

        let matrix = WidthMatrix::build(text, &tokenize(text), &counting);

        assert_eq!(calls.get(), 6);
        assert_eq!(matrix.cell_count(), calls.get());
    }

    #[test]
    fn test_get_requires_more_tabs_than_column() {
        let matrix = WidthMatrix::from_rows(vec![vec![3.0, 4.0], vec![5.0]]);

        assert_eq!(matrix.get(0, 1), Some(4.0));
        // A line with exactly one tab has column 0 only
        assert_eq!(matrix.get(1, 1), None);
        assert_eq!(matrix.get(7, 0), None);
        assert_eq!(matrix.columns(1), 1);
    }

    #[test]
    fn test_empty_cells_use_measure_result() {
        let text = "\t\tx";
        let matrix = WidthMatrix::build(text, &tokenize(text), &CharCount::default());
        assert_eq!(matrix.row(0), &[0.0, 0.0]);
    }
}

//! Line and cell tokenization
//!
//! Splits a document into `\n`-delimited lines and each line into
//! `\t`-delimited cells. Empty segments are never dropped, so a document
//! with `n` newlines always yields `n + 1` lines and a line with `k` tabs
//! always yields `k + 1` cells.
//!
//! Cells are stored in a single flat arena; each line records where its
//! cells start and how many it has.

use std::ops::Range;

/// One line of the document
///
/// Only [`tokenize`] builds these, so every span has at least one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSpan {
    range: Range<usize>,
    first_cell: usize,
    cell_count: usize,
}

impl LineSpan {
    /// Byte range of the line, excluding its `\n`
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Index of the line's first cell in the cell arena
    pub fn first_cell(&self) -> usize {
        self.first_cell
    }

    /// Number of cells, including the remainder after the last tab
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Number of tab characters on the line, which is also its number of
    /// tab-terminated cells
    pub fn tab_count(&self) -> usize {
        self.cell_count.saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Tokenized document: lines plus a flat arena of cell ranges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    lines: Vec<LineSpan>,
    cells: Vec<Range<usize>>,
}

impl Tokens {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total number of cells, remainder cells included
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn line(&self, index: usize) -> Option<&LineSpan> {
        self.lines.get(index)
    }

    pub fn lines(&self) -> &[LineSpan] {
        &self.lines
    }

    /// All cell ranges of a line, remainder cell last
    pub fn cells(&self, line: usize) -> &[Range<usize>] {
        match self.lines.get(line) {
            Some(span) => &self.cells[span.first_cell..span.first_cell + span.cell_count],
            None => &[],
        }
    }

    /// Only the tab-terminated cells of a line
    pub fn tab_cells(&self, line: usize) -> &[Range<usize>] {
        let cells = self.cells(line);
        &cells[..cells.len().saturating_sub(1)]
    }
}

/// Split `text` into lines and cells
///
/// Total over all inputs: the empty string yields one empty line holding
/// one empty cell.
pub fn tokenize(text: &str) -> Tokens {
    let mut tokens = Tokens::default();

    for line in split_ranges(text, 0..text.len(), b'\n') {
        let first_cell = tokens.cells.len();
        tokens.cells.extend(split_ranges(text, line.clone(), b'\t'));
        let cell_count = tokens.cells.len() - first_cell;

        tokens.lines.push(LineSpan {
            range: line,
            first_cell,
            cell_count,
        });
    }

    tracing::trace!(
        lines = tokens.lines.len(),
        cells = tokens.cells.len(),
        "tokenized document"
    );

    tokens
}

/// Split `range` of `text` on an ASCII delimiter, keeping empty segments
///
/// Splitting on single bytes is safe for UTF-8: neither `\n` nor `\t` can
/// appear inside a multi-byte sequence.
fn split_ranges(
    text: &str,
    range: Range<usize>,
    delimiter: u8,
) -> impl Iterator<Item = Range<usize>> + '_ {
    let base = range.start;
    let end = range.end;
    let bytes = &text.as_bytes()[range];

    let mut start = base;
    let mut done = false;
    let mut delimiters = bytes
        .iter()
        .enumerate()
        .filter(move |(_, b)| **b == delimiter)
        .map(move |(i, _)| base + i);

    std::iter::from_fn(move || {
        if done {
            return None;
        }
        match delimiters.next() {
            Some(at) => {
                let segment = start..at;
                start = at + 1;
                Some(segment)
            }
            None => {
                done = true;
                Some(start..end)
            }
        }
    })
}

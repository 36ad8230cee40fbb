//! Monkey tests - randomized documents checked against layout invariants
//!
//! Each test runs a few hundred generated documents with ragged tab counts,
//! empty cells, empty lines and multibyte text.

mod common;

use common::{random_document, Lcg};
use elastic_tabs::columns::{resolve, resolve_by_forward_scan};
use elastic_tabs::matrix::WidthMatrix;
use elastic_tabs::tokenize::tokenize;
use elastic_tabs::{compute, CharCount, DisplayColumns, TabStopConfig};

const ROUNDS: u64 = 300;

fn documents() -> impl Iterator<Item = String> {
    (0..ROUNDS).map(|seed| {
        let mut rng = Lcg::new(seed);
        let lines = rng.below(12) as usize + 1;
        let max_tabs = rng.below(5);
        random_document(&mut rng, lines, max_tabs)
    })
}

// ========================================================================
// Tokenization
// ========================================================================

#[test]
fn test_lines_and_cells_round_trip() {
    for text in documents() {
        let tokens = tokenize(&text);

        let lines: Vec<&str> = tokens
            .lines()
            .iter()
            .map(|l| &text[l.range()])
            .collect();
        assert_eq!(lines.join("\n"), text);

        for (index, line) in lines.iter().enumerate() {
            let cells: Vec<&str> = tokens
                .cells(index)
                .iter()
                .map(|c| &text[c.clone()])
                .collect();
            assert_eq!(cells.join("\t"), *line);
            assert_eq!(tokens.line(index).unwrap().tab_count(), line.matches('\t').count());
        }
    }
}

// ========================================================================
// Stop Invariants
// ========================================================================

#[test]
fn test_stop_count_matches_tab_count() {
    for text in documents() {
        let result = compute(&text, &CharCount::default(), &TabStopConfig::default());
        let tokens = tokenize(&text);

        assert_eq!(result.len(), tokens.line_count());
        for (line, span) in result.iter().zip(tokens.lines()) {
            assert_eq!(line.range, span.range());
            assert_eq!(line.stops.len(), span.tab_count());
        }
    }
}

#[test]
fn test_stops_strictly_increase_with_minimum_spacing() {
    let config = TabStopConfig {
        min_spacing: 3.0,
        first_stop_minimum: 7.0,
    };
    for text in documents() {
        let result = compute(&text, &DisplayColumns::default(), &config);

        for line in &result {
            if let Some(first) = line.stops.first() {
                assert!(*first >= config.first_stop_minimum);
            }
            for pair in line.stops.windows(2) {
                assert!(pair[1] > pair[0], "{:?} in {:?}", line.stops, text);
                assert!(pair[1] - pair[0] >= config.min_spacing);
                assert!(pair[1] - pair[0] >= config.first_stop_minimum);
            }
        }
    }
}

#[test]
fn test_layout_is_idempotent() {
    for text in documents() {
        let first = compute(&text, &CharCount::default(), &TabStopConfig::default());
        let second = compute(&text, &CharCount::default(), &TabStopConfig::default());
        assert_eq!(first, second);
    }
}

// ========================================================================
// Block Semantics
// ========================================================================

#[test]
fn test_block_shares_maximum_width() {
    for text in documents() {
        let tokens = tokenize(&text);
        let matrix = WidthMatrix::build(&text, &tokens, &CharCount::default());
        let resolved = resolve(&matrix);
        let max_columns = (0..matrix.line_count())
            .map(|line| matrix.columns(line))
            .max()
            .unwrap_or(0);

        for column in 0..max_columns {
            let mut line = 0;
            while line < matrix.line_count() {
                if matrix.get(line, column).is_none() {
                    line += 1;
                    continue;
                }
                // Maximal run of lines that have this column
                let start = line;
                while line < matrix.line_count() && matrix.get(line, column).is_some() {
                    line += 1;
                }
                let expected = (start..line)
                    .filter_map(|l| matrix.get(l, column))
                    .fold(f64::MIN, f64::max);

                for l in start..line {
                    assert_eq!(resolved.row(l)[column], expected, "{:?}", text);
                }
            }
        }
    }
}

#[test]
fn test_suffix_maxima_match_forward_scan() {
    for text in documents() {
        let tokens = tokenize(&text);
        let matrix = WidthMatrix::build(&text, &tokens, &DisplayColumns::default());
        assert_eq!(resolve(&matrix), resolve_by_forward_scan(&matrix), "{:?}", text);
    }
}

// ========================================================================
// Degenerate Inputs
// ========================================================================

#[test]
fn test_only_delimiters_do_not_panic() {
    for text in ["\n", "\t", "\n\n\n", "\t\t\n\t\n\n\t\t\t", "\t\n\t"] {
        let result = compute(text, &CharCount::default(), &TabStopConfig::default());
        assert_eq!(result.len(), text.matches('\n').count() + 1);
        for line in &result {
            assert!(line.stops.iter().all(|s| *s >= 20.0));
        }
    }
}

#[test]
fn test_many_short_blocks() {
    // Alternating 3-tab and 0-tab lines: every block is one line long
    let text = "a\tbb\tccc\td\n\n".repeat(500);
    let result = compute(&text, &CharCount::default(), &TabStopConfig::default());

    for (index, line) in result.iter().enumerate() {
        if index % 2 == 0 && index < 1000 {
            assert_eq!(line.stops, vec![20.0, 40.0, 60.0]);
        } else {
            assert!(line.stops.is_empty());
        }
    }
}

//! Shared helpers for benchmarks

/// A tab-separated table of `rows` rows and `columns` columns
#[allow(dead_code)]
pub fn make_table(rows: usize, columns: usize) -> String {
    let mut text = String::new();
    for row in 0..rows {
        for column in 0..columns {
            if column > 0 {
                text.push('\t');
            }
            text.push_str(&format!("cell {}:{}", row, column * (row % 7 + 1)));
        }
        text.push('\n');
    }
    text
}

/// Source code indented with tabs and aligned trailing comments
#[allow(dead_code)]
pub fn make_code(lines: usize) -> String {
    let mut text = String::new();
    for i in 0..lines {
        for _ in 0..i % 4 {
            text.push('\t');
        }
        text.push_str(&format!("call_{}(arg)\t/* note {} */\n", i % 13, i));
    }
    text
}

/// Blocks of one line each, separated by lines without tabs, so every
/// tabbed line opens all of its columns again
#[allow(dead_code)]
pub fn make_short_blocks(lines: usize, tabs: usize) -> String {
    let row = "ab\t".repeat(tabs);
    let mut text = String::new();
    for i in 0..lines {
        if i % 2 == 0 {
            text.push_str(&row);
        }
        text.push('\n');
    }
    text
}

/// Tab counts shrinking by one per line
///
/// Worst case for the forward-scan resolver: the first line opens every
/// column and each scan runs nearly to the end of the document.
#[allow(dead_code)]
pub fn make_staircase(lines: usize) -> String {
    let mut text = String::new();
    for i in 0..lines {
        text.push_str(&"x\t".repeat((lines - i).min(64)));
        text.push('\n');
    }
    text
}

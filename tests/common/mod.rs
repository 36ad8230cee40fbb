//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use elastic_tabs::{compute, CharCount, LayoutResult, TabStopConfig};

/// Layout with one unit per character and default spacing
pub fn layout(text: &str) -> LayoutResult {
    compute(text, &CharCount::default(), &TabStopConfig::default())
}

/// Layout with one unit per character and custom spacing
pub fn layout_with(text: &str, min_spacing: f64, first_stop_minimum: f64) -> LayoutResult {
    let config = TabStopConfig {
        min_spacing,
        first_stop_minimum,
    };
    compute(text, &CharCount::default(), &config)
}

/// Every line's stops, in order
pub fn stops(result: &LayoutResult) -> Vec<Vec<f64>> {
    result.iter().map(|line| line.stops.clone()).collect()
}

/// Every line's text
pub fn line_texts<'a>(text: &'a str, result: &LayoutResult) -> Vec<&'a str> {
    result.iter().map(|line| &text[line.range.clone()]).collect()
}

/// Small deterministic generator for randomized documents
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed.wrapping_mul(6364136223846793005).wrapping_add(1))
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    /// Uniform in `0..bound`
    pub fn below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound.max(1)
    }
}

/// A document of `lines` lines with 0..=max_tabs tabs each and short cells,
/// including empty cells, empty lines and multibyte text
pub fn random_document(rng: &mut Lcg, lines: usize, max_tabs: u32) -> String {
    const WORDS: &[&str] = &["", "a", "bb", "ccc", "longer cell", "ü", "日本", "x y z"];

    let mut text = String::new();
    for line in 0..lines {
        if line > 0 {
            text.push('\n');
        }
        let tabs = rng.below(max_tabs + 1);
        for _ in 0..tabs {
            text.push_str(WORDS[rng.below(WORDS.len() as u32) as usize]);
            text.push('\t');
        }
        text.push_str(WORDS[rng.below(WORDS.len() as u32) as usize]);
    }
    text
}

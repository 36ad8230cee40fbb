//! Cell width measurement
//!
//! The layout core never looks at glyphs. It asks a [`Measure`] for the
//! rendered width of a byte range of the document and trusts the answer:
//! widths are expected to be finite and non-negative, and are not checked.
//!
//! Three strategies ship with the crate:
//! - [`CharCount`]: one unit per `char`, handy for tests and plain-text hosts
//! - [`DisplayColumns`]: terminal display columns (wide CJK glyphs count twice)
//! - [`FontMeasure`]: glyph advances from a TrueType/OpenType font via `fontdue`
//!
//! Any `Fn(Range<usize>) -> f64` closure also works as a measure.

use std::cell::RefCell;
use std::collections::HashMap;
use std::ops::Range;
use std::path::Path;

use fontdue::{Font, FontSettings};
use unicode_width::UnicodeWidthStr;

/// Width measurement capability
pub trait Measure {
    /// Rendered width of `document[range]`
    fn measure(&self, document: &str, range: Range<usize>) -> f64;
}

impl<F> Measure for F
where
    F: Fn(Range<usize>) -> f64,
{
    fn measure(&self, _document: &str, range: Range<usize>) -> f64 {
        self(range)
    }
}

/// `unit` per character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharCount {
    pub unit: f64,
}

impl CharCount {
    pub fn new(unit: f64) -> Self {
        Self { unit }
    }
}

impl Default for CharCount {
    fn default() -> Self {
        Self { unit: 1.0 }
    }
}

impl Measure for CharCount {
    fn measure(&self, document: &str, range: Range<usize>) -> f64 {
        document[range].chars().count() as f64 * self.unit
    }
}

/// `unit` per terminal display column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayColumns {
    pub unit: f64,
}

impl DisplayColumns {
    pub fn new(unit: f64) -> Self {
        Self { unit }
    }
}

impl Default for DisplayColumns {
    fn default() -> Self {
        Self { unit: 1.0 }
    }
}

impl Measure for DisplayColumns {
    fn measure(&self, document: &str, range: Range<usize>) -> f64 {
        document[range].width() as f64 * self.unit
    }
}

/// Errors from building a measurement strategy
#[derive(Debug, Clone)]
pub enum MeasureError {
    /// Font file could not be read
    Io(String),
    /// Font data was rejected by the rasterizer
    InvalidFont(String),
}

impl std::fmt::Display for MeasureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "failed to read font: {}", msg),
            Self::InvalidFont(msg) => write!(f, "failed to load font: {}", msg),
        }
    }
}

impl std::error::Error for MeasureError {}

/// Per-character advance widths, filled on first lookup
///
/// Keyed by character only: entries are a function of the font and size,
/// never of a document, so one cache outlives any number of layout passes.
#[derive(Debug, Default)]
struct AdvanceCache {
    advances: RefCell<HashMap<char, f32>>,
}

impl AdvanceCache {
    fn get_or_measure(&self, ch: char, measure: impl FnOnce(char) -> f32) -> f32 {
        if let Some(width) = self.advances.borrow().get(&ch) {
            return *width;
        }
        let width = measure(ch);
        self.advances.borrow_mut().insert(ch, width);
        width
    }

    fn len(&self) -> usize {
        self.advances.borrow().len()
    }
}

/// Sum of glyph advance widths at a fixed pixel size
///
/// Advances are cached per character for the life of the `FontMeasure`,
/// so reusing one across layout passes only skips repeated glyph lookups.
pub struct FontMeasure {
    font: Font,
    font_size: f32,
    advance_cache: AdvanceCache,
}

impl FontMeasure {
    pub fn new(font: Font, font_size: f32) -> Self {
        Self {
            font,
            font_size,
            advance_cache: AdvanceCache::default(),
        }
    }

    pub fn from_bytes(bytes: &[u8], font_size: f32) -> Result<Self, MeasureError> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| MeasureError::InvalidFont(e.to_string()))?;
        Ok(Self::new(font, font_size))
    }

    pub fn from_path(path: &Path, font_size: f32) -> Result<Self, MeasureError> {
        let bytes = std::fs::read(path)
            .map_err(|e| MeasureError::Io(format!("{}: {}", path.display(), e)))?;
        let measure = Self::from_bytes(&bytes, font_size)?;
        tracing::debug!("Loaded font {} at {}px", path.display(), font_size);
        Ok(measure)
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Advance width of a single character
    pub fn advance(&self, ch: char) -> f32 {
        self.advance_cache
            .get_or_measure(ch, |ch| self.font.metrics(ch, self.font_size).advance_width)
    }

    /// Number of distinct characters measured so far
    pub fn cached_glyphs(&self) -> usize {
        self.advance_cache.len()
    }
}

impl std::fmt::Debug for FontMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontMeasure")
            .field("font_size", &self.font_size)
            .field("cached_glyphs", &self.cached_glyphs())
            .finish()
    }
}

impl Measure for FontMeasure {
    fn measure(&self, document: &str, range: Range<usize>) -> f64 {
        document[range]
            .chars()
            .map(|ch| self.advance(ch) as f64)
            .sum()
    }
}

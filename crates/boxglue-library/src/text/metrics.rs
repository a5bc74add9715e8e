use std::cell::RefCell;

use ecow::EcoString;
use rustc_hash::FxHashMap;

use crate::diag::{StrResult, bail};
use crate::layout::Abs;
use crate::text::{FontFace, Measure, TextDetails, TextStyle};

/// A deterministic oracle with a fixed advance per character.
///
/// Useful for headless layout where no fonts are available. All metrics
/// are fractions of the font size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedMetrics {
    /// Advance width of every character.
    pub advance: f64,
    /// Extent above the baseline.
    pub ascent: f64,
    /// Extent below the baseline.
    pub descent: f64,
    /// Extra advance factor applied to bold faces.
    pub bold_factor: f64,
}

impl FixedMetrics {
    /// Metrics where every character, including the space, advances by
    /// `advance` times the font size.
    pub const fn new(advance: f64) -> Self {
        Self { advance, ascent: 0.75, descent: 0.25, bold_factor: 1.0 }
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl Measure for FixedMetrics {
    fn measure_text(&self, label: &str, style: &TextStyle) -> StrResult<TextDetails> {
        if style.size < Abs::zero() {
            bail!("font size must not be negative, found {:?}", style.size);
        }
        let factor = match style.face {
            FontFace::Bold | FontFace::BoldItalic => self.bold_factor,
            FontFace::Plain | FontFace::Italic => 1.0,
        };
        let em = style.size;
        let space = em * self.advance * factor;
        Ok(TextDetails {
            width: space * label.chars().count() as f64,
            ascent: em * self.ascent,
            descent: em * self.descent,
            space,
        })
    }
}

/// Memoizes measurements of identical `(label, style)` pairs.
pub struct MeasureCache<M> {
    inner: M,
    entries: RefCell<FxHashMap<(EcoString, TextStyle), TextDetails>>,
}

impl<M: Measure> MeasureCache<M> {
    /// Wrap an oracle.
    pub fn new(inner: M) -> Self {
        Self { inner, entries: RefCell::new(FxHashMap::default()) }
    }

    /// The number of memoized measurements.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether nothing was memoized yet.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Forget all memoized measurements.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl<M: Measure> Measure for MeasureCache<M> {
    fn measure_text(&self, label: &str, style: &TextStyle) -> StrResult<TextDetails> {
        let key = (EcoString::from(label), style.clone());
        if let Some(details) = self.entries.borrow().get(&key) {
            return Ok(*details);
        }

        log::trace!("measuring {label:?} at {:?}", style.size);
        let details = self.inner.measure_text(label, style)?;
        self.entries.borrow_mut().insert(key, details);
        Ok(details)
    }
}

//! Text styling and measurement.

mod metrics;

pub use self::metrics::{FixedMetrics, MeasureCache};

use ecow::EcoString;
use serde::{Deserialize, Serialize};

use crate::diag::StrResult;
use crate::layout::Abs;
use crate::visualize::Color;

/// The style a text run is measured and drawn with.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// The font family name.
    pub family: EcoString,
    /// The font size.
    pub size: Abs,
    /// The font face.
    pub face: FontFace,
    /// The text color.
    pub color: Color,
}

impl TextStyle {
    /// The default style at a different size.
    pub fn sized(size: Abs) -> Self {
        Self { size, ..Self::default() }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: "sans".into(),
            size: Abs::pt(12.0),
            face: FontFace::Plain,
            color: Color::BLACK,
        }
    }
}

/// The face of a font within its family.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFace {
    #[default]
    Plain,
    Bold,
    Italic,
    BoldItalic,
}

/// Metrics of a measured label.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextDetails {
    /// The advance width of the whole label.
    pub width: Abs,
    /// The extent above the baseline.
    pub ascent: Abs,
    /// The extent below the baseline.
    pub descent: Abs,
    /// The advance width of a single space in the same style.
    pub space: Abs,
}

/// Reports glyph metrics for a label under a given style.
///
/// Implementations must be deterministic for identical inputs within one
/// layout pass.
pub trait Measure {
    /// Measure the label.
    fn measure_text(&self, label: &str, style: &TextStyle) -> StrResult<TextDetails>;
}

impl<M: Measure + ?Sized> Measure for &M {
    fn measure_text(&self, label: &str, style: &TextStyle) -> StrResult<TextDetails> {
        (**self).measure_text(label, style)
    }
}

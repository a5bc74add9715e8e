use boxglue_library::diag::StrResult;
use boxglue_library::engine::Engine;
use boxglue_library::layout::Abs;
use boxglue_library::text::TextStyle;
use serde::{Deserialize, Serialize};

/// Flexible horizontal space between boxes.
///
/// A positive adjustment ratio grows the glue by `ratio * stretch`, a
/// negative one shrinks it by `ratio * shrink`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Glue {
    width: Abs,
    stretch: Abs,
    shrink: Abs,
    space: Option<Space>,
}

/// Ties a glue to the space width of a text style.
#[derive(Debug, Clone, PartialEq)]
struct Space {
    style: TextStyle,
    ratios: SpaceRatios,
}

/// How far an interword space may stretch and shrink, as fractions of
/// its natural width.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceRatios {
    pub stretch: f64,
    pub shrink: f64,
}

impl Default for SpaceRatios {
    fn default() -> Self {
        Self { stretch: 0.5, shrink: 1.0 / 3.0 }
    }
}

impl Glue {
    /// Create glue with explicit metrics.
    pub fn new(width: Abs, stretch: Abs, shrink: Abs) -> Self {
        Self { width, stretch, shrink, space: None }
    }

    /// Rigid glue that neither stretches nor shrinks.
    pub fn fixed(width: Abs) -> Self {
        Self::new(width, Abs::zero(), Abs::zero())
    }

    /// An interword space that takes its metrics from a text style once
    /// laid out.
    pub fn regular_space(style: TextStyle, ratios: SpaceRatios) -> Self {
        Self {
            width: Abs::zero(),
            stretch: Abs::zero(),
            shrink: Abs::zero(),
            space: Some(Space { style, ratios }),
        }
    }

    /// The natural width.
    pub fn width(&self) -> Abs {
        self.width
    }

    /// The maximal amount the glue may grow at ratio one.
    pub fn stretch(&self) -> Abs {
        self.stretch
    }

    /// The maximal amount the glue may shrink at ratio minus one.
    pub fn shrink(&self) -> Abs {
        self.shrink
    }

    /// The width at adjustment ratio zero.
    pub fn default_width(&self) -> Abs {
        self.width
    }

    /// The width at the given adjustment ratio.
    pub fn compute_width(&self, ratio: f64) -> Abs {
        if ratio < 0.0 {
            self.width + self.shrink * ratio
        } else {
            self.width + self.stretch * ratio
        }
    }

    /// Measure the space width for style-bound glue. Explicit glue keeps
    /// its metrics.
    pub fn calc_layout(&mut self, engine: &Engine) -> StrResult<()> {
        let Some(space) = &self.space else { return Ok(()) };
        let details = engine.measure_text(" ", &space.style)?;
        self.width = details.space;
        self.stretch = details.space * space.ratios.stretch;
        self.shrink = details.space * space.ratios.shrink;
        Ok(())
    }
}

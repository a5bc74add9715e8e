use boxglue_library::diag::StrResult;
use boxglue_library::engine::Engine;
use boxglue_library::layout::{Abs, Point};
use boxglue_library::render::Renderer;
use boxglue_library::text::TextStyle;
use ecow::EcoString;

/// A run of text measured by the engine's oracle.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    label: EcoString,
    style: TextStyle,
    voff: Abs,
    width: Abs,
    ascent: Abs,
    descent: Abs,
    pos: Point,
}

impl TextBox {
    pub fn new(label: impl Into<EcoString>, style: TextStyle) -> Self {
        Self {
            label: label.into(),
            style,
            voff: Abs::zero(),
            width: Abs::zero(),
            ascent: Abs::zero(),
            descent: Abs::zero(),
            pos: Point::zero(),
        }
    }

    /// Shift the baseline, e.g. for super- and subscripts.
    pub fn with_voff(mut self, voff: Abs) -> Self {
        self.voff = voff;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn width(&self) -> Abs {
        self.width
    }

    pub fn ascent(&self) -> Abs {
        self.ascent
    }

    pub fn descent(&self) -> Abs {
        self.descent
    }

    pub fn voff(&self) -> Abs {
        self.voff
    }

    /// Measure the label. Hints are irrelevant: text never wraps.
    pub fn calc_layout(&mut self, engine: &Engine, _: Abs, _: Abs) -> StrResult<()> {
        let details = engine.measure_text(&self.label, &self.style)?;
        self.width = details.width;
        self.ascent = details.ascent;
        self.descent = details.descent;
        Ok(())
    }

    pub fn place(&mut self, x: Abs, y: Abs) {
        self.pos = Point::new(x, y);
    }

    pub fn render<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        xref: Abs,
        yref: Abs,
    ) -> StrResult<()> {
        let pos = Point::new(xref + self.pos.x, yref + self.pos.y + self.voff);
        renderer.draw_text(&self.label, pos, &self.style)
    }
}

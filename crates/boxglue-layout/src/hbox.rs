use boxglue_library::diag::StrResult;
use boxglue_library::engine::Engine;
use boxglue_library::layout::{Abs, Point};
use boxglue_library::render::Renderer;

use crate::BoxNode;

/// Boxes set side by side with fixed spacing.
///
/// Unlike a paragraph, this knows nothing about glue or penalties. With
/// wrapping enabled, a box that would cross the width hint starts a new
/// row.
#[derive(Debug, Clone, PartialEq)]
pub struct HBox {
    children: Vec<BoxNode>,
    hspacing: Abs,
    vspacing: Abs,
    wrap: bool,
    width: Abs,
    ascent: Abs,
    descent: Abs,
    multiline_shift: Abs,
    pos: Point,
}

impl HBox {
    pub fn new(children: Vec<BoxNode>, hspacing: Abs, vspacing: Abs) -> Self {
        Self {
            children,
            hspacing,
            vspacing,
            wrap: true,
            width: Abs::zero(),
            ascent: Abs::zero(),
            descent: Abs::zero(),
            multiline_shift: Abs::zero(),
            pos: Point::zero(),
        }
    }

    /// Whether rows break at the width hint.
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn children(&self) -> &[BoxNode] {
        &self.children
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
        Abs::zero()
    }

    pub fn calc_layout(
        &mut self,
        engine: &Engine,
        width_hint: Abs,
        height_hint: Abs,
    ) -> StrResult<()> {
        let mut x = Abs::zero();
        let mut y = Abs::zero();
        let mut rows = 0;
        let mut row_empty = true;
        self.width = Abs::zero();
        self.ascent = Abs::zero();
        self.descent = Abs::zero();

        for child in &mut self.children {
            child.calc_layout(engine, width_hint, height_hint)?;
            if self.wrap && !row_empty && x + child.width() > width_hint {
                x = Abs::zero();
                y -= self.vspacing;
                rows += 1;
                self.descent = Abs::zero();
            }

            child.place(x, y);
            x += child.width();
            self.width.set_max(x);
            x += self.hspacing;
            row_empty = false;

            if rows == 0 {
                self.ascent.set_max(child.ascent() + child.voff());
            }
            self.descent.set_max(child.descent() - child.voff());
        }

        self.multiline_shift = self.vspacing * rows as f64;
        self.ascent += self.multiline_shift;
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
        let x = xref + self.pos.x;
        let y = yref + self.pos.y + self.multiline_shift;
        for child in &self.children {
            child.render(renderer, x, y)?;
        }
        Ok(())
    }
}

use boxglue_library::diag::StrResult;
use boxglue_library::engine::Engine;
use boxglue_library::layout::{Abs, Point, SizePolicy};
use boxglue_library::render::Renderer;

use crate::BoxNode;

/// Boxes stacked from top to bottom.
///
/// Each child occupies its ascent plus descent; its own baseline does not
/// affect the stacking. The whole box sits on its baseline, so the descent
/// is zero. The justification moves the box relative to its reference
/// point: `hjust` of one puts the reference point at the right edge and
/// `vjust` of one at the top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct VBox {
    children: Vec<BoxNode>,
    width_value: f64,
    width_policy: SizePolicy,
    hjust: f64,
    vjust: f64,
    width: Abs,
    height: Abs,
    pos: Point,
}

impl VBox {
    /// Create a box as wide as its widest child.
    pub fn new(children: Vec<BoxNode>) -> Self {
        Self {
            children,
            width_value: 0.0,
            width_policy: SizePolicy::Native,
            hjust: 0.0,
            vjust: 0.0,
            width: Abs::zero(),
            height: Abs::zero(),
            pos: Point::zero(),
        }
    }

    /// Set how the width is determined. A defined width is also offered to
    /// the children as their width hint.
    pub fn with_width(mut self, value: f64, policy: SizePolicy) -> Self {
        self.width_value = value;
        self.width_policy = policy;
        self
    }

    pub fn with_justification(mut self, hjust: f64, vjust: f64) -> Self {
        self.hjust = hjust;
        self.vjust = vjust;
        self
    }

    pub fn children(&self) -> &[BoxNode] {
        &self.children
    }

    pub fn width(&self) -> Abs {
        self.width
    }

    pub fn ascent(&self) -> Abs {
        self.height
    }

    pub fn descent(&self) -> Abs {
        Abs::zero()
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
        let defined = self.width_policy.resolve(self.width_value, width_hint);
        let child_hint = defined.unwrap_or(width_hint);

        let mut y = Abs::zero();
        let mut widest = Abs::zero();
        for child in &mut self.children {
            child.calc_layout(engine, child_hint, height_hint)?;
            y -= child.ascent();
            child.place(Abs::zero(), y);
            y -= child.descent();
            widest.set_max(child.width());
        }

        self.width = defined.unwrap_or(widest);
        self.height = -y;
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
        let x = xref + self.pos.x - self.width * self.hjust;
        let y = yref + self.pos.y + self.height * (1.0 - self.vjust);
        for child in &self.children {
            child.render(renderer, x, y)?;
        }
        Ok(())
    }
}

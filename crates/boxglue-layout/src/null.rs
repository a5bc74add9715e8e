use boxglue_library::diag::StrResult;
use boxglue_library::engine::Engine;
use boxglue_library::layout::Abs;
use boxglue_library::render::Renderer;

/// An invisible box of fixed size.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct NullBox {
    width: Abs,
    height: Abs,
}

impl NullBox {
    /// Create an empty box of the given size. The height counts as ascent.
    pub fn new(width: Abs, height: Abs) -> Self {
        Self { width, height }
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

    pub fn calc_layout(&mut self, _: &Engine, _: Abs, _: Abs) -> StrResult<()> {
        Ok(())
    }

    pub fn place(&mut self, _: Abs, _: Abs) {}

    pub fn render<R: Renderer + ?Sized>(&self, _: &mut R, _: Abs, _: Abs) -> StrResult<()> {
        Ok(())
    }
}

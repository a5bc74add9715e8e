//! The drawing backend interface.

use ecow::{EcoString, eco_format};

use crate::diag::StrResult;
use crate::layout::{Abs, Point, Size};
use crate::text::TextStyle;
use crate::visualize::{Image, ShapeStyle};

/// Accepts placed primitives in absolute coordinates (points, y up).
///
/// Primitives accumulate until [`collect`](Self::collect) drains them.
/// Rendering twice without draining appends a second copy.
pub trait Renderer {
    /// What [`collect`](Self::collect) hands out.
    type Output;

    /// Draw a label with its baseline starting at `pos`.
    fn draw_text(&mut self, label: &str, pos: Point, style: &TextStyle) -> StrResult<()>;

    /// Draw a rectangle whose lower left corner is at `pos`.
    fn draw_rect(
        &mut self,
        pos: Point,
        size: Size,
        style: &ShapeStyle,
        radius: Abs,
    ) -> StrResult<()>;

    /// Draw an image whose lower left corner is at `pos`, scaled to `size`.
    fn draw_image(
        &mut self,
        image: &Image,
        pos: Point,
        size: Size,
        interpolate: bool,
        style: &ShapeStyle,
    ) -> StrResult<()>;

    /// Take everything drawn so far, leaving the renderer empty.
    fn collect(&mut self) -> Self::Output;
}

/// A renderer that records primitives in drawing order.
#[derive(Debug, Default)]
pub struct DisplayList {
    items: Vec<Drawn>,
    /// Source of unique names. Survives `collect`.
    counter: usize,
}

/// A recorded primitive with a name unique to its renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawn {
    pub name: EcoString,
    pub item: DrawItem,
}

/// A primitive draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawItem {
    Text {
        label: EcoString,
        pos: Point,
        style: TextStyle,
    },
    Rect {
        pos: Point,
        size: Size,
        style: ShapeStyle,
        radius: Abs,
    },
    Image {
        image: Image,
        pos: Point,
        size: Size,
        interpolate: bool,
        style: ShapeStyle,
    },
}

impl DrawItem {
    /// Where the primitive is anchored.
    pub fn pos(&self) -> Point {
        match self {
            Self::Text { pos, .. } | Self::Rect { pos, .. } | Self::Image { pos, .. } => {
                *pos
            }
        }
    }
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The primitives recorded since the last `collect`.
    pub fn items(&self) -> &[Drawn] {
        &self.items
    }

    fn push(&mut self, kind: &str, item: DrawItem) {
        self.counter += 1;
        let name = eco_format!("{kind}-{}", self.counter);
        log::trace!("recording {name} at {:?}", item.pos());
        self.items.push(Drawn { name, item });
    }
}

impl Renderer for DisplayList {
    type Output = Vec<Drawn>;

    fn draw_text(&mut self, label: &str, pos: Point, style: &TextStyle) -> StrResult<()> {
        self.push("text", DrawItem::Text { label: label.into(), pos, style: style.clone() });
        Ok(())
    }

    fn draw_rect(
        &mut self,
        pos: Point,
        size: Size,
        style: &ShapeStyle,
        radius: Abs,
    ) -> StrResult<()> {
        self.push("rect", DrawItem::Rect { pos, size, style: *style, radius });
        Ok(())
    }

    fn draw_image(
        &mut self,
        image: &Image,
        pos: Point,
        size: Size,
        interpolate: bool,
        style: &ShapeStyle,
    ) -> StrResult<()> {
        self.push(
            "image",
            DrawItem::Image { image: image.clone(), pos, size, interpolate, style: *style },
        );
        Ok(())
    }

    fn collect(&mut self) -> Vec<Drawn> {
        std::mem::take(&mut self.items)
    }
}

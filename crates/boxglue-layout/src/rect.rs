use boxglue_library::diag::StrResult;
use boxglue_library::engine::Engine;
use boxglue_library::layout::{Abs, Margin, Point, Size, SizePolicy};
use boxglue_library::render::Renderer;
use boxglue_library::visualize::ShapeStyle;

use crate::BoxNode;

/// A rectangle with margin and padding around optional content.
///
/// The margin lies outside the drawn rectangle, the padding inside. Both
/// count towards the box's extent. The box sits on its baseline, so the
/// descent is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct RectBox {
    content: Option<Box<BoxNode>>,
    width_value: f64,
    height_value: f64,
    width_policy: SizePolicy,
    height_policy: SizePolicy,
    margin: Margin,
    padding: Margin,
    style: ShapeStyle,
    radius: Abs,
    content_hjust: f64,
    content_vjust: f64,
    size: Size,
    pos: Point,
}

impl RectBox {
    /// Create a rectangle that wraps tightly around its content, placed in
    /// the upper left corner.
    pub fn new(content: Option<BoxNode>, style: ShapeStyle) -> Self {
        Self {
            content: content.map(Box::new),
            width_value: 0.0,
            height_value: 0.0,
            width_policy: SizePolicy::Native,
            height_policy: SizePolicy::Native,
            margin: Margin::default(),
            padding: Margin::default(),
            style,
            radius: Abs::zero(),
            content_hjust: 0.0,
            content_vjust: 1.0,
            size: Size::zero(),
            pos: Point::zero(),
        }
    }

    /// Set how the width is determined. `value` is in points, or a
    /// percentage for the relative policy.
    pub fn with_width(mut self, value: f64, policy: SizePolicy) -> Self {
        self.width_value = value;
        self.width_policy = policy;
        self
    }

    /// Set how the height is determined.
    pub fn with_height(mut self, value: f64, policy: SizePolicy) -> Self {
        self.height_value = value;
        self.height_policy = policy;
        self
    }

    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_padding(mut self, padding: Margin) -> Self {
        self.padding = padding;
        self
    }

    /// Round the corners.
    pub fn with_radius(mut self, radius: Abs) -> Self {
        self.radius = radius;
        self
    }

    /// Where the content sits in leftover space: `(0, 1)` is the upper
    /// left corner, `(1, 0)` the lower right.
    pub fn with_content_justification(mut self, hjust: f64, vjust: f64) -> Self {
        self.content_hjust = hjust;
        self.content_vjust = vjust;
        self
    }

    pub fn content(&self) -> Option<&BoxNode> {
        self.content.as_deref()
    }

    pub fn width(&self) -> Abs {
        self.size.x
    }

    pub fn ascent(&self) -> Abs {
        self.size.y
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
        let width = self.width_policy.resolve(self.width_value, width_hint);
        let height = self.height_policy.resolve(self.height_value, height_hint);
        let inset_x = self.margin.horizontal() + self.padding.horizontal();
        let inset_y = self.margin.vertical() + self.padding.vertical();

        let Some(content) = self.content.as_deref_mut() else {
            self.size = Size::new(
                width.unwrap_or(inset_x),
                height.unwrap_or(inset_y),
            );
            return Ok(());
        };

        // With a native width, the content gets all the space it asks for.
        // Otherwise, it is confined to the inner width.
        let content_width_hint = match width {
            Some(width) => width - inset_x,
            None => width_hint - inset_x,
        };
        let content_height_hint = match height {
            Some(height) => height - inset_y,
            None => height_hint - inset_y,
        };
        content.calc_layout(engine, content_width_hint, content_height_hint)?;

        self.size = Size::new(
            width.unwrap_or(content.width() + inset_x),
            height.unwrap_or(content.height() + inset_y),
        );

        let slack_x = self.size.x - inset_x - content.width();
        let slack_y = self.size.y - inset_y - content.height();
        content.place(
            self.padding.left + slack_x * self.content_hjust,
            self.padding.bottom + slack_y * self.content_vjust + content.descent()
                - content.voff(),
        );
        log::debug!("rect box sized to {:?}", self.size);
        Ok(())
    }

    pub fn place(&mut self, x: Abs, y: Abs) {
        self.pos = Point::new(x, y);
    }

    /// Draw the rectangle inside the margin, then the content on top.
    pub fn render<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        xref: Abs,
        yref: Abs,
    ) -> StrResult<()> {
        let x = self.pos.x + xref + self.margin.left;
        let y = self.pos.y + yref + self.margin.bottom;
        let size = Size::new(
            self.size.x - self.margin.horizontal(),
            self.size.y - self.margin.vertical(),
        );
        renderer.draw_rect(Point::new(x, y), size, &self.style, self.radius)?;
        if let Some(content) = &self.content {
            content.render(renderer, x, y)?;
        }
        Ok(())
    }
}

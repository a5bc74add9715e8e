use boxglue_library::diag::{StrResult, bail};
use boxglue_library::engine::Engine;
use boxglue_library::layout::{Abs, Point, Size, SizePolicy};
use boxglue_library::render::Renderer;
use boxglue_library::visualize::{Image, ShapeStyle};
use boxglue_utils::Numeric;
use serde::{Deserialize, Serialize};

/// Points per inch.
const PT_PER_INCH: f64 = 72.27;

/// How an image box converts and scales its image.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Pixel density for the native size.
    pub dpi: f64,
    /// Whether to smooth when scaling.
    pub interpolate: bool,
    /// Whether to keep the pixel aspect ratio.
    pub respect_aspect: bool,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self { dpi: Image::DEFAULT_DPI, interpolate: true, respect_aspect: true }
    }
}

/// A raster image scaled into a box.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBox {
    image: Image,
    width_value: f64,
    height_value: f64,
    width_policy: SizePolicy,
    height_policy: SizePolicy,
    config: ImageConfig,
    style: ShapeStyle,
    size: Size,
    pos: Point,
}

impl ImageBox {
    /// Create an image box that takes the image's native size.
    pub fn new(image: Image, config: ImageConfig) -> StrResult<Self> {
        if !(config.dpi.is_finite() && config.dpi > 0.0) {
            bail!("dpi must be positive, found {}", config.dpi);
        }
        Ok(Self {
            image,
            width_value: 0.0,
            height_value: 0.0,
            width_policy: SizePolicy::Native,
            height_policy: SizePolicy::Native,
            config,
            style: ShapeStyle::invisible(),
            size: Size::zero(),
            pos: Point::zero(),
        })
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

    /// Set the outline and background passed along to the renderer.
    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    /// The size of the image at the configured dpi.
    pub fn native_size(&self) -> Size {
        let scale = PT_PER_INCH / self.config.dpi;
        Size::new(
            Abs::pt(self.image.width() as f64 * scale),
            Abs::pt(self.image.height() as f64 * scale),
        )
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
        _: &Engine,
        width_hint: Abs,
        height_hint: Abs,
    ) -> StrResult<()> {
        let native = self.native_size();
        let aspect = self.image.aspect_ratio();
        let keep = self.config.respect_aspect;
        let width = self.width_policy.resolve(self.width_value, width_hint);
        let height = self.height_policy.resolve(self.height_value, height_hint);
        let (x, y) = match (width, height) {
            (Some(w), Some(h)) => (w, h),
            (None, None) => (native.x, native.y),
            (None, Some(h)) => (if keep { h * aspect } else { native.x }, h),
            (Some(w), None) => (w, if keep { w / aspect } else { native.y }),
        };
        self.size = Size::new(x, y);
        log::debug!("image box sized to {:?}", self.size);
        Ok(())
    }

    pub fn place(&mut self, x: Abs, y: Abs) {
        self.pos = Point::new(x, y);
    }

    /// Draw the image. With the aspect ratio kept, the image is fit into the
    /// box and centered along the axis with slack.
    pub fn render<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        xref: Abs,
        yref: Abs,
    ) -> StrResult<()> {
        let mut pos = Point::new(xref + self.pos.x, yref + self.pos.y);
        let mut size = self.size;
        if self.config.respect_aspect && !size.x.is_zero() && !size.y.is_zero() {
            let aspect = self.image.aspect_ratio();
            let box_aspect = size.aspect_ratio();
            if box_aspect > aspect {
                let fitted = size.y * aspect;
                pos.x += (size.x - fitted) / 2.0;
                size.x = fitted;
            } else if box_aspect < aspect {
                let fitted = size.x / aspect;
                pos.y += (size.y - fitted) / 2.0;
                size.y = fitted;
            }
        }
        renderer.draw_image(&self.image, pos, size, self.config.interpolate, &self.style)
    }
}

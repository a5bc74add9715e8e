use std::fmt::{self, Debug, Formatter};
use std::io::Cursor;
use std::sync::Arc;

use ecow::eco_format;
use image::{ImageFormat, ImageReader};

use crate::diag::{StrResult, bail};

/// A raster image handed through layout to the drawing backend.
///
/// Cheap to clone: the encoded data is shared.
#[derive(Clone)]
pub struct Image(Arc<Repr>);

/// The internal representation.
struct Repr {
    data: Arc<[u8]>,
    format: Option<ImageFormat>,
    width: u32,
    height: u32,
}

impl Image {
    /// The resolution assumed when none is given.
    pub const DEFAULT_DPI: f64 = 150.0;

    /// Create an image from already known pixel dimensions. The data is
    /// passed through to the backend untouched.
    pub fn new(data: impl Into<Arc<[u8]>>, width: u32, height: u32) -> StrResult<Self> {
        if width == 0 || height == 0 {
            bail!("image must not be empty, found {}x{} pixels", width, height);
        }
        Ok(Self(Arc::new(Repr { data: data.into(), format: None, width, height })))
    }

    /// Read the pixel dimensions of encoded image data.
    pub fn decode(data: impl Into<Arc<[u8]>>) -> StrResult<Self> {
        let data: Arc<[u8]> = data.into();
        let reader = ImageReader::new(Cursor::new(&*data))
            .with_guessed_format()
            .map_err(|err| eco_format!("failed to read image ({err})"))?;
        let Some(format) = reader.format() else {
            bail!("unknown image format");
        };
        let (width, height) = reader
            .into_dimensions()
            .map_err(|err| eco_format!("failed to decode image ({err})"))?;
        if width == 0 || height == 0 {
            bail!("image must not be empty, found {}x{} pixels", width, height);
        }
        log::debug!("decoded {format:?} image with {width}x{height} pixels");
        Ok(Self(Arc::new(Repr { data, format: Some(format), width, height })))
    }

    /// The encoded image data.
    pub fn data(&self) -> &[u8] {
        &self.0.data
    }

    /// The detected format, if the image was decoded.
    pub fn format(&self) -> Option<ImageFormat> {
        self.0.format
    }

    /// The width in pixels.
    pub fn width(&self) -> u32 {
        self.0.width
    }

    /// The height in pixels.
    pub fn height(&self) -> u32 {
        self.0.height
    }

    /// The ratio of pixel width to pixel height.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.0.width) / f64::from(self.0.height)
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
            || (self.0.width == other.0.width
                && self.0.height == other.0.height
                && self.0.data == other.0.data)
    }
}

impl Debug for Image {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Image")
            .field("format", &self.0.format)
            .field("width", &self.0.width)
            .field("height", &self.0.height)
            .finish()
    }
}

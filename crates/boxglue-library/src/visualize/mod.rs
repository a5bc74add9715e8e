//! Colors, shape styles and images.

mod color;
mod image;
mod style;

pub use self::color::Color;
pub use self::image::Image;
pub use self::style::{LineType, ShapeStyle, Stroke};

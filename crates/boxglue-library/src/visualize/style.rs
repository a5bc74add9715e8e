use serde::{Deserialize, Serialize};

use crate::layout::Abs;
use crate::visualize::Color;

/// How to stroke the outline of a shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Stroke {
    /// The stroke color.
    pub color: Color,
    /// The line thickness.
    pub thickness: Abs,
    /// The dash pattern.
    pub dash: LineType,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            thickness: Abs::pt(1.0),
            dash: LineType::Solid,
        }
    }
}

/// The dash pattern of a stroke.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineType {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// The graphics context handed to the backend along with rectangles and
/// images.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeStyle {
    /// The fill color. `None` leaves the interior unpainted.
    pub fill: Option<Color>,
    /// The outline. `None` draws no outline.
    pub stroke: Option<Stroke>,
}

impl ShapeStyle {
    /// A style that paints nothing.
    pub const fn invisible() -> Self {
        Self { fill: None, stroke: None }
    }

    /// Whether drawing with this style would be visible at all.
    pub fn is_visible(&self) -> bool {
        self.fill.is_some_and(|c| c.a > 0) || self.stroke.is_some()
    }
}

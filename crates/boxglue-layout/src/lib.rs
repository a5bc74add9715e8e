//! Box-and-glue layout.
//!
//! Layout proceeds in three passes over a tree of [`BoxNode`]s:
//! `calc_layout` computes extents bottom-up given width and height hints,
//! containers `place` their children relative to their own reference point,
//! and `render` walks the tree once more, accumulating offsets, to emit
//! primitives into a [`Renderer`](boxglue_library::render::Renderer).
//!
//! Coordinates are in points with the y-axis pointing up. A box extends
//! `ascent` above and `descent` below its baseline.

mod glue;
mod hbox;
mod image;
mod linebreak;
mod node;
mod null;
mod par;
mod penalty;
mod rect;
mod text;
mod vbox;

pub use self::glue::{Glue, SpaceRatios};
pub use self::hbox::HBox;
pub use self::image::{ImageBox, ImageConfig};
pub use self::linebreak::{LineBreakInfo, LineBreaker, linebreak};
pub use self::node::{BoxNode, Node, NodeKind, collect_boxes};
pub use self::null::NullBox;
pub use self::par::{ParBox, ParConfig};
pub use self::penalty::Penalty;
pub use self::rect::RectBox;
pub use self::text::TextBox;
pub use self::vbox::VBox;

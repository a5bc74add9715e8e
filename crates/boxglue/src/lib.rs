//! A box-and-glue layout engine.
//!
//! # Steps
//! - **Construction:**
//!   A tree of [boxes] is built, either directly or from a [scene]
//!   description. Paragraphs hold flat lists of boxes, [glue] and
//!   [penalties].
//! - **Measuring:**
//!   `calc_layout` computes the extents of every box bottom-up. Text is
//!   measured through the [engine]'s oracle and paragraphs are broken into
//!   lines.
//! - **Placing:**
//!   Containers position their children relative to their own reference
//!   point while they are measured. The root is placed by the caller.
//! - **Rendering:**
//!   `render` emits text, rectangles and images in absolute coordinates
//!   into a [renderer].
//!
//! [boxes]: layout::BoxNode
//! [scene]: scene::Scene
//! [glue]: layout::Glue
//! [penalties]: layout::Penalty
//! [engine]: engine::Engine
//! [renderer]: render::Renderer

pub extern crate ecow;

pub mod scene;

pub use boxglue_library::{diag, engine, render, text, visualize};

/// Geometry and layout nodes.
pub mod layout {
    pub use boxglue_layout::*;
    pub use boxglue_library::layout::*;
}

use crate::diag::StrResult;
use crate::engine::Engine;
use crate::layout::{Abs, BoxNode};
use crate::render::Renderer;

/// Lay out a tree in the given space and draw it with its reference point
/// at `(x, y)`.
pub fn typeset<R: Renderer + ?Sized>(
    root: &mut BoxNode,
    engine: &Engine,
    width: Abs,
    height: Abs,
    renderer: &mut R,
    x: Abs,
    y: Abs,
) -> StrResult<()> {
    root.calc_layout(engine, width, height)?;
    root.place(Abs::zero(), Abs::zero());
    log::debug!(
        "typeset {} box of {:?} x {:?} at ({x:?}, {y:?})",
        root.name(),
        root.width(),
        root.height(),
    );
    root.render(renderer, x, y)
}

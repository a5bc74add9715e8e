use std::fmt::{self, Debug, Formatter};

use boxglue_library::diag::{StrResult, bail};
use boxglue_library::engine::Engine;
use boxglue_library::layout::Abs;
use boxglue_library::render::Renderer;

use crate::{Glue, HBox, ImageBox, NullBox, ParBox, Penalty, RectBox, TextBox, VBox};

/// An element of a horizontal node list.
#[derive(Clone, PartialEq)]
pub enum Node {
    /// Material with a fixed extent.
    Box(BoxNode),
    /// Flexible space.
    Glue(Glue),
    /// A break marker.
    Penalty(Penalty),
}

/// The capability class of a [`Node`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NodeKind {
    Box,
    Glue,
    Penalty,
}

impl NodeKind {
    /// A lowercase name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Glue => "glue",
            Self::Penalty => "penalty",
        }
    }
}

impl Node {
    /// Which capability class the node belongs to.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Box(_) => NodeKind::Box,
            Self::Glue(_) => NodeKind::Glue,
            Self::Penalty(_) => NodeKind::Penalty,
        }
    }

    /// The width the node contributes to a line at adjustment ratio zero.
    ///
    /// Penalties contribute nothing: their width only shows up at a break.
    pub fn width(&self) -> Abs {
        match self {
            Self::Box(node) => node.width(),
            Self::Glue(glue) => glue.default_width(),
            Self::Penalty(_) => Abs::zero(),
        }
    }

    /// Whether the node is a box.
    pub fn is_box(&self) -> bool {
        matches!(self, Self::Box(_))
    }

    /// The box, if this is one.
    pub fn as_box(&self) -> Option<&BoxNode> {
        match self {
            Self::Box(node) => Some(node),
            _ => None,
        }
    }

    /// The penalty, if this is one.
    pub fn as_penalty(&self) -> Option<&Penalty> {
        match self {
            Self::Penalty(penalty) => Some(penalty),
            _ => None,
        }
    }

    /// Take out the box or fail with a diagnostic naming the actual kind.
    pub fn into_box(self) -> StrResult<BoxNode> {
        match self {
            Self::Box(node) => Ok(node),
            other => bail!("expected box, found {}", other.kind().name()),
        }
    }

    /// Lay out boxes and measure style-bound glue.
    pub fn calc_layout(
        &mut self,
        engine: &Engine,
        width_hint: Abs,
        height_hint: Abs,
    ) -> StrResult<()> {
        match self {
            Self::Box(node) => node.calc_layout(engine, width_hint, height_hint),
            Self::Glue(glue) => glue.calc_layout(engine),
            Self::Penalty(_) => Ok(()),
        }
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Box(node) => node.fmt(f),
            Self::Glue(glue) => glue.fmt(f),
            Self::Penalty(penalty) => penalty.fmt(f),
        }
    }
}

impl From<BoxNode> for Node {
    fn from(node: BoxNode) -> Self {
        Self::Box(node)
    }
}

impl From<Glue> for Node {
    fn from(glue: Glue) -> Self {
        Self::Glue(glue)
    }
}

impl From<Penalty> for Node {
    fn from(penalty: Penalty) -> Self {
        Self::Penalty(penalty)
    }
}

/// Turn a node list into a box list, rejecting glue and penalties.
pub fn collect_boxes(nodes: impl IntoIterator<Item = Node>) -> StrResult<Vec<BoxNode>> {
    nodes.into_iter().map(Node::into_box).collect()
}

/// A node with extents that can be placed and drawn.
///
/// Extents are only meaningful after `calc_layout`. Before that, they read
/// as zero.
#[derive(Clone, PartialEq)]
pub enum BoxNode {
    Null(NullBox),
    Text(TextBox),
    Image(ImageBox),
    HBox(HBox),
    VBox(VBox),
    Par(ParBox),
    Rect(RectBox),
}

macro_rules! dispatch {
    ($self:expr, $node:ident => $body:expr) => {
        match $self {
            BoxNode::Null($node) => $body,
            BoxNode::Text($node) => $body,
            BoxNode::Image($node) => $body,
            BoxNode::HBox($node) => $body,
            BoxNode::VBox($node) => $body,
            BoxNode::Par($node) => $body,
            BoxNode::Rect($node) => $body,
        }
    };
}

impl BoxNode {
    /// The horizontal extent.
    pub fn width(&self) -> Abs {
        dispatch!(self, node => node.width())
    }

    /// The extent above the baseline.
    pub fn ascent(&self) -> Abs {
        dispatch!(self, node => node.ascent())
    }

    /// The extent below the baseline.
    pub fn descent(&self) -> Abs {
        dispatch!(self, node => node.descent())
    }

    /// The total vertical extent.
    pub fn height(&self) -> Abs {
        self.ascent() + self.descent()
    }

    /// The vertical shift of the baseline when drawn.
    pub fn voff(&self) -> Abs {
        dispatch!(self, node => node.voff())
    }

    /// Compute extents given the space offered by the parent.
    pub fn calc_layout(
        &mut self,
        engine: &Engine,
        width_hint: Abs,
        height_hint: Abs,
    ) -> StrResult<()> {
        dispatch!(self, node => node.calc_layout(engine, width_hint, height_hint))
    }

    /// Record the position relative to the parent's reference point.
    pub fn place(&mut self, x: Abs, y: Abs) {
        dispatch!(self, node => node.place(x, y))
    }

    /// Draw the box relative to the given reference point.
    pub fn render<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        xref: Abs,
        yref: Abs,
    ) -> StrResult<()> {
        dispatch!(self, node => node.render(renderer, xref, yref))
    }

    /// A short name of the variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Null(_) => "null",
            Self::Text(_) => "text",
            Self::Image(_) => "image",
            Self::HBox(_) => "hbox",
            Self::VBox(_) => "vbox",
            Self::Par(_) => "par",
            Self::Rect(_) => "rect",
        }
    }
}

impl Debug for BoxNode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        dispatch!(self, node => node.fmt(f))
    }
}

macro_rules! box_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(impl From<$ty> for BoxNode {
            fn from(node: $ty) -> Self {
                Self::$variant(node)
            }
        }

        impl From<$ty> for Node {
            fn from(node: $ty) -> Self {
                Self::Box(BoxNode::$variant(node))
            }
        })*
    };
}

box_from! {
    Null(NullBox),
    Text(TextBox),
    Image(ImageBox),
    HBox(HBox),
    VBox(VBox),
    Par(ParBox),
    Rect(RectBox),
}

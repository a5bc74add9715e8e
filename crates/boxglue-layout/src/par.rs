use boxglue_library::diag::StrResult;
use boxglue_library::engine::Engine;
use boxglue_library::layout::{Abs, Point, SizePolicy};
use boxglue_library::render::Renderer;
use serde::{Deserialize, Serialize};

use crate::{LineBreakInfo, LineBreaker, Node, SpaceRatios};

/// Line arrangement settings of a paragraph.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParConfig {
    /// The minimal distance between consecutive baselines.
    pub line_spacing: Abs,
    /// Where each line sits within the paragraph width: zero for left,
    /// one for right.
    pub hjust: f64,
    /// Flexibility of interword spaces created for the paragraph.
    pub space: SpaceRatios,
}

impl Default for ParConfig {
    fn default() -> Self {
        Self {
            line_spacing: Abs::pt(14.4),
            hjust: 0.0,
            space: SpaceRatios::default(),
        }
    }
}

/// A paragraph: a node list broken into lines.
///
/// The baseline of the box is the baseline of the last line. Lines
/// extend upwards from there.
#[derive(Debug, Clone, PartialEq)]
pub struct ParBox {
    nodes: Vec<Node>,
    config: ParConfig,
    width_value: f64,
    width_policy: SizePolicy,
    voff: Abs,
    lines: Vec<LineBreakInfo>,
    width: Abs,
    ascent: Abs,
    descent: Abs,
    /// Distance from the first to the last baseline.
    multiline_shift: Abs,
    pos: Point,
}

impl ParBox {
    /// Create a paragraph that fills its parent's width.
    pub fn new(nodes: Vec<Node>, config: ParConfig) -> Self {
        Self {
            nodes,
            config,
            width_value: 0.0,
            width_policy: SizePolicy::Expand,
            voff: Abs::zero(),
            lines: vec![],
            width: Abs::zero(),
            ascent: Abs::zero(),
            descent: Abs::zero(),
            multiline_shift: Abs::zero(),
            pos: Point::zero(),
        }
    }

    /// Set how the width is determined.
    ///
    /// A native width disables word wrapping: lines only end at forced
    /// breaks and the paragraph is as wide as its widest line.
    pub fn with_width(mut self, value: f64, policy: SizePolicy) -> Self {
        self.width_value = value;
        self.width_policy = policy;
        self
    }

    /// Shift the paragraph's baseline.
    pub fn with_voff(mut self, voff: Abs) -> Self {
        self.voff = voff;
        self
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The lines of the last layout pass.
    pub fn lines(&self) -> &[LineBreakInfo] {
        &self.lines
    }

    pub fn width(&self) -> Abs {
        self.width
    }

    pub fn ascent(&self) -> Abs {
        self.ascent
    }

    pub fn descent(&self) -> Abs {
        self.descent
    }

    pub fn voff(&self) -> Abs {
        self.voff
    }

    pub fn calc_layout(
        &mut self,
        engine: &Engine,
        width_hint: Abs,
        height_hint: Abs,
    ) -> StrResult<()> {
        for node in &mut self.nodes {
            node.calc_layout(engine, width_hint, height_hint)?;
        }

        let defined = self.width_policy.resolve(self.width_value, width_hint);
        let line_width = defined.unwrap_or(Abs::inf());
        self.lines =
            LineBreaker::new(&self.nodes, &[line_width], defined.is_some())
                .compute_line_breaks();
        self.width = match defined {
            Some(width) => width,
            None => self.lines.iter().map(|l| l.width).max().unwrap_or_default(),
        };

        let mut y = Abs::zero();
        let mut first_ascent = None;
        let mut last_descent = Abs::zero();
        for line in &self.lines {
            let nodes = &mut self.nodes[line.start..line.end];
            let (ascent, descent) = line_extent(nodes);
            if first_ascent.is_none() {
                first_ascent = Some(ascent);
            } else {
                y -= self.config.line_spacing.max(last_descent + ascent);
            }

            let mut x = (self.width - line.width) * self.config.hjust;
            for node in nodes {
                match node {
                    Node::Box(child) => {
                        child.place(x, y);
                        x += child.width();
                    }
                    Node::Glue(glue) => x += glue.compute_width(line.ratio),
                    Node::Penalty(_) => {}
                }
            }
            last_descent = descent;
        }

        self.multiline_shift = -y;
        self.ascent = first_ascent.unwrap_or_default() + self.multiline_shift;
        self.descent = last_descent;
        log::debug!(
            "paragraph of {} nodes set in {} lines at {:?}",
            self.nodes.len(),
            self.lines.len(),
            self.width,
        );
        Ok(())
    }

    pub fn place(&mut self, x: Abs, y: Abs) {
        self.pos = Point::new(x, y);
    }

    pub fn render<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        xref: Abs,
        yref: Abs,
    ) -> StrResult<()> {
        let x = xref + self.pos.x;
        let y = yref + self.voff + self.pos.y + self.multiline_shift;
        for node in &self.nodes {
            if let Node::Box(child) = node {
                child.render(renderer, x, y)?;
            }
        }
        Ok(())
    }
}

/// The ascent and descent of a line around its baseline, accounting for
/// shifted baselines of its boxes.
fn line_extent(nodes: &[Node]) -> (Abs, Abs) {
    let mut ascent = Abs::zero();
    let mut descent = Abs::zero();
    for child in nodes.iter().filter_map(Node::as_box) {
        ascent.set_max(child.ascent() + child.voff());
        descent.set_max(child.descent() - child.voff());
    }
    (ascent, descent)
}

//! Greedy line breaking over node lists.

use boxglue_library::layout::Abs;

use crate::Node;

/// One line of a broken node list.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineBreakInfo {
    /// Index of the first node on the line.
    pub start: usize,
    /// Index one past the last node on the line.
    pub end: usize,
    /// The adjustment ratio applied to the line's glue.
    pub ratio: f64,
    /// The natural width of the line.
    pub width: Abs,
}

/// Breaks a node list into lines, filling each line as far as it goes.
///
/// The adjustment ratio of produced lines is always zero: glue is set at its
/// natural width and lines are not justified.
pub struct LineBreaker<'a> {
    nodes: &'a [Node],
    line_widths: &'a [Abs],
    word_wrap: bool,
    /// `sums[i]` is the natural width of `nodes[..i]`.
    sums: Vec<Abs>,
}

impl<'a> LineBreaker<'a> {
    /// Prepare breaking `nodes`.
    ///
    /// Line `i` may be `line_widths[i]` wide. Lines past the end of the
    /// slice reuse its last entry; an empty slice means unlimited width.
    /// Without word wrap, only forced breaks end a line.
    pub fn new(nodes: &'a [Node], line_widths: &'a [Abs], word_wrap: bool) -> Self {
        let mut sums = Vec::with_capacity(nodes.len() + 1);
        let mut total = Abs::zero();
        sums.push(total);
        for node in nodes {
            total += node.width();
            sums.push(total);
        }
        Self { nodes, line_widths, word_wrap, sums }
    }

    /// Compute all line breaks in order.
    pub fn compute_line_breaks(&self) -> Vec<LineBreakInfo> {
        let n = self.nodes.len();
        let mut lines = vec![];
        let mut a = 0;

        while a < n {
            a = self.next_start(a);
            if a >= n {
                break;
            }

            // The shortest line that may end here.
            let mut b = self.next_feasible(a);
            let linelen = self.line_width(lines.len());
            let mut width = self.measure(a, b);

            // Stretch the line up to the following feasible breakpoints
            // while it still fits, unless it was forced to end.
            while b < n && !self.is_forced(b) {
                let next = self.next_feasible(b + 1);
                let extended = self.measure(a, next);
                if extended < linelen {
                    b = next;
                    width = extended;
                } else {
                    break;
                }
            }

            log::trace!("line {} spans nodes {a}..{b} at {width:?}", lines.len());
            lines.push(LineBreakInfo { start: a, end: b, ratio: 0.0, width });

            // A forced break is consumed by the line it ends.
            if b < n && self.is_forced(b) {
                b += 1;
            }
            a = b;
        }

        lines
    }

    /// The available width for a line.
    fn line_width(&self, line: usize) -> Abs {
        match self.line_widths.get(line).or(self.line_widths.last()) {
            Some(&width) => width,
            None => Abs::inf(),
        }
    }

    /// The natural width of `nodes[a..b]`.
    fn measure(&self, a: usize, b: usize) -> Abs {
        self.sums[b] - self.sums[a]
    }

    /// Skip nodes that are discarded at the start of a line.
    fn next_start(&self, mut i: usize) -> usize {
        while i < self.nodes.len() && self.is_removable(i) {
            i += 1;
        }
        i
    }

    /// The first feasible breakpoint at or after `i`, or the list length
    /// when there is none.
    fn next_feasible(&self, mut i: usize) -> usize {
        while i < self.nodes.len() && !self.is_feasible(i) {
            i += 1;
        }
        i
    }

    /// Glue and penalties vanish at the start of a line, except for forced
    /// breaks which must still end it.
    fn is_removable(&self, i: usize) -> bool {
        match &self.nodes[i] {
            Node::Box(_) => false,
            Node::Glue(_) => true,
            Node::Penalty(penalty) => !penalty.is_forced(),
        }
    }

    fn is_forced(&self, i: usize) -> bool {
        self.nodes[i].as_penalty().is_some_and(|p| p.is_forced())
    }

    /// Whether a line may end before node `i`.
    fn is_feasible(&self, i: usize) -> bool {
        match &self.nodes[i] {
            Node::Box(_) => false,
            Node::Penalty(penalty) if !self.word_wrap => penalty.is_forced(),
            Node::Penalty(penalty) => !penalty.is_forbidden(),
            Node::Glue(_) => {
                self.word_wrap && i > 0 && self.nodes[i - 1].is_box()
            }
        }
    }
}

/// Break nodes into lines of one uniform width.
pub fn linebreak(nodes: &[Node], width: Abs, word_wrap: bool) -> Vec<LineBreakInfo> {
    LineBreaker::new(nodes, &[width], word_wrap).compute_line_breaks()
}

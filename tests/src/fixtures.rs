//! Shared builders for test trees.

use std::io::Cursor;

use boxglue::engine::Engine;
use boxglue::layout::{Abs, BoxNode, Glue, LineBreakInfo, Node, NullBox, TextBox};
use boxglue::render::{DisplayList, Drawn, Renderer};
use boxglue::text::{FixedMetrics, TextStyle};

/// Half an em per character, three quarters above the baseline.
pub static METRICS: FixedMetrics = FixedMetrics::new(0.5);

pub fn engine() -> Engine<'static> {
    Engine::new(&METRICS)
}

pub fn pt(value: f64) -> Abs {
    Abs::pt(value)
}

/// An invisible stand-in for a word.
pub fn word(width: f64) -> Node {
    NullBox::new(pt(width), pt(10.0)).into()
}

/// Glue with half its width as stretch and a third as shrink.
pub fn space(width: f64) -> Node {
    Glue::new(pt(width), pt(width / 2.0), pt(width / 3.0)).into()
}

/// Words separated by spaces.
pub fn words(count: usize, width: f64, spacing: f64) -> Vec<Node> {
    let mut nodes = Vec::with_capacity(2 * count);
    for i in 0..count {
        if i > 0 {
            nodes.push(space(spacing));
        }
        nodes.push(word(width));
    }
    nodes
}

pub fn spans(lines: &[LineBreakInfo]) -> Vec<(usize, usize)> {
    lines.iter().map(|line| (line.start, line.end)).collect()
}

/// Text at 10pt: 5pt per character, 7.5pt ascent, 2.5pt descent.
pub fn text(label: &str) -> TextBox {
    TextBox::new(label, TextStyle::sized(pt(10.0)))
}

/// Lay out, place at the origin and draw.
pub fn draw(root: &mut BoxNode, width: f64, height: f64) -> Vec<Drawn> {
    let mut list = DisplayList::new();
    boxglue::typeset(root, &engine(), pt(width), pt(height), &mut list, Abs::zero(), Abs::zero())
        .unwrap();
    list.collect()
}

/// A solid PNG of the given size.
pub fn png(width: u32, height: u32) -> Vec<u8> {
    let image = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 40, 40, 255]));
    let mut bytes = Cursor::new(vec![]);
    image.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
    bytes.into_inner()
}

use boxglue::layout::{
    BoxNode, Glue, Node, ParBox, ParConfig, Penalty, SizePolicy, SpaceRatios,
};
use boxglue::render::DrawItem;
use boxglue::text::TextStyle;

use crate::fixtures::{draw, engine, pt, text, words};

fn config(line_spacing: f64) -> ParConfig {
    ParConfig { line_spacing: pt(line_spacing), ..ParConfig::default() }
}

#[test]
fn test_par_ten_tokens_make_two_lines() {
    let mut par = ParBox::new(words(10, 12.0, 4.0), config(12.0));
    par.calc_layout(&engine(), pt(100.0), pt(100.0)).unwrap();
    let lines = par.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].end - lines[0].start, 11);
    assert_eq!(lines[1].end - lines[1].start, 7);
}

#[test]
fn test_par_height_is_ascent_plus_descent() {
    let style = TextStyle::sized(pt(10.0));
    let mut nodes: Vec<Node> = vec![];
    for label in ["lorem", "ipsum", "dolor", "sit", "amet", "consectetur"] {
        if !nodes.is_empty() {
            nodes.push(Glue::regular_space(style.clone(), SpaceRatios::default()).into());
        }
        nodes.push(text(label).into());
    }
    let mut root = BoxNode::from(ParBox::new(nodes, config(12.0)));
    root.calc_layout(&engine(), pt(80.0), pt(100.0)).unwrap();
    assert_eq!(root.height(), root.ascent() + root.descent());
    assert_eq!(root.descent(), pt(2.5));
    // Three lines of 10pt text at 12pt spacing.
    assert_eq!(root.ascent(), pt(7.5 + 24.0));
}

#[test]
fn test_par_draws_lines_top_down() {
    let nodes = vec![
        text("one").into(),
        Penalty::forced().into(),
        text("two").into(),
        Penalty::forced().into(),
        text("three").into(),
    ];
    let mut root = BoxNode::from(ParBox::new(nodes, config(20.0)));
    let drawn = draw(&mut root, 200.0, 200.0);
    let baselines: Vec<_> = drawn.iter().map(|d| d.item.pos().y).collect();
    assert_eq!(baselines, [pt(40.0), pt(20.0), pt(0.0)]);
}

#[test]
fn test_par_centered_lines() {
    let nodes = vec![text("ab").into(), Penalty::forced().into(), text("abcd").into()];
    let par = ParBox::new(nodes, ParConfig { hjust: 0.5, ..config(12.0) })
        .with_width(0.0, SizePolicy::Native);
    let mut root = BoxNode::from(par);
    let drawn = draw(&mut root, 200.0, 200.0);
    assert_eq!(root.width(), pt(20.0));
    let xs: Vec<_> = drawn.iter().map(|d| d.item.pos().x).collect();
    assert_eq!(xs, [pt(5.0), pt(0.0)]);
}

#[test]
fn test_par_relative_width() {
    let par = ParBox::new(words(10, 12.0, 4.0), config(12.0)).with_width(50.0, SizePolicy::Relative);
    let mut root = BoxNode::from(par);
    root.calc_layout(&engine(), pt(200.0), pt(100.0)).unwrap();
    assert_eq!(root.width(), pt(100.0));
    let BoxNode::Par(par) = &root else { unreachable!() };
    assert_eq!(par.lines().len(), 2);
}

#[test]
fn test_par_superscript_raises_line() {
    let nodes = vec![text("x").into(), text("2").with_voff(pt(4.0)).into()];
    let mut root = BoxNode::from(ParBox::new(nodes, config(12.0)));
    let drawn = draw(&mut root, 200.0, 200.0);
    assert_eq!(root.ascent(), pt(11.5));
    assert_eq!(root.descent(), pt(2.5));
    match &drawn[1].item {
        DrawItem::Text { label, pos, .. } => {
            assert_eq!(label, "2");
            assert_eq!(pos.y, pt(4.0));
            assert_eq!(pos.x, pt(5.0));
        }
        other => panic!("expected text, found {other:?}"),
    }
}

#[test]
fn test_par_relayout_is_stable() {
    let mut root = BoxNode::from(ParBox::new(words(10, 12.0, 4.0), config(12.0)));
    root.calc_layout(&engine(), pt(100.0), pt(100.0)).unwrap();
    let first = (root.width(), root.ascent(), root.descent());
    root.calc_layout(&engine(), pt(100.0), pt(100.0)).unwrap();
    assert_eq!(first, (root.width(), root.ascent(), root.descent()));
}

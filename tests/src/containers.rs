use boxglue::diag::StrResult;
use boxglue::engine::Engine;
use boxglue::layout::{
    BoxNode, HBox, Margin, Node, NullBox, ParBox, ParConfig, RectBox, SizePolicy, VBox,
    collect_boxes,
};
use boxglue::render::{DisplayList, DrawItem, Renderer};
use boxglue::text::{Measure, TextDetails, TextStyle};
use boxglue::visualize::{Color, ShapeStyle};

use crate::fixtures::{draw, engine, pt, text, words};

fn null(width: f64, height: f64) -> BoxNode {
    NullBox::new(pt(width), pt(height)).into()
}

#[test]
fn test_null_box_ignores_hints() {
    for hint in [0.0, 50.0, 1e6] {
        let mut node = null(4.0, 9.0);
        node.calc_layout(&engine(), pt(hint), pt(hint)).unwrap();
        assert_eq!(node.width(), pt(4.0));
        assert_eq!(node.ascent(), pt(9.0));
        assert_eq!(node.descent(), pt(0.0));
    }
}

#[test]
fn test_geometry_before_layout_is_zero() {
    let node = BoxNode::from(text("unmeasured"));
    assert_eq!(node.width(), pt(0.0));
    assert_eq!(node.height(), pt(0.0));
}

#[test]
fn test_vbox_stacks_mixed_children() {
    // Children with (ascent, descent) of (10, 0) and (7.5, 2.5).
    let first = RectBox::new(Some(null(10.0, 0.0)), ShapeStyle::invisible())
        .with_height(10.0, SizePolicy::Fixed);
    let mut vbox = BoxNode::from(VBox::new(vec![first.into(), text("abc").into()]));
    vbox.calc_layout(&engine(), pt(100.0), pt(100.0)).unwrap();
    assert_eq!(vbox.height(), pt(20.0));

    let BoxNode::VBox(inner) = &vbox else { unreachable!() };
    let children = inner.children();
    assert_eq!(children[0].ascent() + children[1].height(), pt(20.0));
}

/// Reports `(ascent, descent)` of `(10, 2)` for "tall" and `(5, 3)` for
/// everything else.
struct TwoLines;

impl Measure for TwoLines {
    fn measure_text(&self, label: &str, _: &TextStyle) -> StrResult<TextDetails> {
        let (ascent, descent) = if label == "tall" { (10.0, 2.0) } else { (5.0, 3.0) };
        Ok(TextDetails {
            width: pt(8.0),
            ascent: pt(ascent),
            descent: pt(descent),
            space: pt(2.0),
        })
    }
}

#[test]
fn test_vbox_stacks_by_ascent_and_descent() {
    let mut root = BoxNode::from(VBox::new(vec![text("tall").into(), text("low").into()]));
    root.calc_layout(&Engine::new(&TwoLines), pt(100.0), pt(100.0)).unwrap();
    assert_eq!(root.height(), pt(20.0));
    assert_eq!(root.ascent(), pt(20.0));
    assert_eq!(root.descent(), pt(0.0));

    root.place(pt(0.0), pt(0.0));
    let mut list = DisplayList::new();
    root.render(&mut list, pt(0.0), pt(0.0)).unwrap();
    let ys: Vec<_> = list.collect().iter().map(|d| d.item.pos().y).collect();
    // Baselines at -10 and -10 - 2 - 5 = -17, shifted up by the height.
    assert_eq!(ys, [pt(20.0 - 10.0), pt(20.0 - 17.0)]);
}

#[test]
fn test_vbox_first_child_sits_below_top() {
    // Text at 10pt has an ascent of 7.5, so a first null child of
    // height 10 ends at -10 and the text baseline follows at -17.5.
    let mut root = BoxNode::from(VBox::new(vec![null(10.0, 10.0), text("abc").into()]));
    let drawn = draw(&mut root, 100.0, 100.0);
    assert_eq!(root.height(), pt(20.0));
    // The vbox renders with its bottom at the reference point.
    assert_eq!(drawn[0].item.pos().y, pt(20.0 - 17.5));
}

#[test]
fn test_rect_native_without_content_is_empty() {
    let mut root = BoxNode::from(RectBox::new(None, ShapeStyle::default()));
    let drawn = draw(&mut root, 100.0, 100.0);
    assert_eq!((root.width(), root.height()), (pt(0.0), pt(0.0)));
    assert_eq!(drawn.len(), 1);
}

#[test]
fn test_rect_around_paragraph() {
    let par = ParBox::new(words(10, 12.0, 4.0), ParConfig::default())
        .with_width(100.0, SizePolicy::Fixed);
    let style = ShapeStyle { fill: Some(Color::rgb(0xee, 0xee, 0xee)), stroke: None };
    let rect = RectBox::new(Some(par.into()), style)
        .with_padding(Margin::splat(pt(5.0)))
        .with_radius(pt(3.0));
    let mut root = BoxNode::from(rect);
    let drawn = draw(&mut root, 500.0, 500.0);
    assert_eq!(root.width(), pt(110.0));
    // Two lines of 10pt boxes with 14.4pt spacing, plus padding.
    assert_eq!(root.height(), pt(10.0 + 14.4 + 10.0));
    match &drawn[0].item {
        DrawItem::Rect { size, radius, style, .. } => {
            assert_eq!(size.x, pt(110.0));
            assert_eq!(*radius, pt(3.0));
            assert!(style.is_visible());
        }
        other => panic!("expected rect, found {other:?}"),
    }
}

#[test]
fn test_hbox_wraps_with_hint() {
    let children = (0..4).map(|_| null(40.0, 10.0)).collect();
    let mut root = BoxNode::from(HBox::new(children, pt(10.0), pt(15.0)));
    root.calc_layout(&engine(), pt(100.0), pt(100.0)).unwrap();
    assert_eq!(root.width(), pt(90.0));
    assert_eq!(root.ascent(), pt(25.0));
}

#[test]
fn test_typed_slots_reject_glue() {
    let err = collect_boxes(words(2, 5.0, 1.0)).unwrap_err();
    assert_eq!(err, "expected box, found glue");

    let boxes = collect_boxes(vec![Node::from(NullBox::default())]).unwrap();
    assert_eq!(boxes.len(), 1);
}

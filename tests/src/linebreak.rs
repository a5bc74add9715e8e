use boxglue::layout::{Glue, LineBreaker, Node, Penalty, linebreak};

use crate::fixtures::{pt, space, spans, word, words};

#[test]
fn test_single_narrow_box_fills_one_line() {
    let nodes = vec![word(10.0)];
    let lines = linebreak(&nodes, pt(100.0), true);
    assert_eq!(spans(&lines), [(0, 1)]);
    assert_eq!(lines[0].width, pt(10.0));
}

#[test]
fn test_forced_break_belongs_to_no_line() {
    let nodes = vec![word(10.0), Penalty::forced().into(), word(10.0)];
    let lines = linebreak(&nodes, pt(100.0), true);
    assert_eq!(spans(&lines), [(0, 1), (2, 3)]);
    for line in &lines {
        assert!(!(line.start..line.end).contains(&1));
    }
}

#[test]
fn test_ten_tokens_in_hundred_points() {
    let nodes = words(10, 12.0, 4.0);
    let lines = linebreak(&nodes, pt(100.0), true);
    let boxes: Vec<_> = lines
        .iter()
        .map(|l| nodes[l.start..l.end].iter().filter(|n| n.is_box()).count())
        .collect();
    assert_eq!(boxes, [6, 4]);
}

#[test]
fn test_no_line_exceeds_target_unless_single_box() {
    let mut nodes = vec![];
    for (i, width) in [8.0, 30.0, 75.0, 12.0, 5.0, 41.0, 19.0, 90.0, 3.0].into_iter().enumerate() {
        if i > 0 {
            nodes.push(space(3.0));
        }
        nodes.push(word(width));
    }
    let target = pt(60.0);
    for line in linebreak(&nodes, target, true) {
        let boxes = nodes[line.start..line.end].iter().filter(|n| n.is_box()).count();
        assert!(line.width < target || boxes == 1, "{line:?}");
    }
}

#[test]
fn test_scored_penalty_is_a_breakpoint() {
    // Two syllables joined by an optional hyphenation point.
    let nodes: Vec<Node> = vec![
        word(30.0),
        Penalty::new(50, true).into(),
        word(30.0),
        Glue::fixed(pt(5.0)).into(),
        word(30.0),
    ];
    let lines = linebreak(&nodes, pt(45.0), true);
    assert_eq!(spans(&lines), [(0, 1), (2, 3), (4, 5)]);

    let lines = linebreak(&nodes, pt(45.0), false);
    assert_eq!(spans(&lines), [(0, 5)]);
}

#[test]
fn test_unbounded_when_no_widths_given() {
    let nodes = words(50, 10.0, 2.0);
    let lines = LineBreaker::new(&nodes, &[], true).compute_line_breaks();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].width, pt(598.0));
}

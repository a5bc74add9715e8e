use boxglue::layout::BoxNode;
use boxglue::render::DrawItem;
use boxglue::scene::{Builder, Scene};
use boxglue::visualize::{Color, Image};

use crate::fixtures::{draw, png, pt};

const CARD: &str = r##"{
    "kind": "rect",
    "padding": [4, 8],
    "margin": 2,
    "radius": 3,
    "style": { "fill": "#eeeeee", "stroke": { "color": "#000", "thickness": 0.5 } },
    "content": {
        "kind": "vbox",
        "children": [
            {
                "kind": "par",
                "width": { "policy": "native" },
                "children": [
                    { "kind": "text", "label": "Hello", "style": { "size": 10 } },
                    { "kind": "space", "style": { "size": 10 } },
                    { "kind": "text", "label": "world", "style": { "size": 10, "face": "bold" } }
                ]
            },
            { "kind": "image", "key": "logo", "width": 20 }
        ]
    }
}"##;

fn builder() -> Builder {
    Builder::new().with_image("logo", Image::decode(png(8, 4)).unwrap())
}

#[test]
fn test_scene_card_layout() {
    let scene = Scene::from_json(CARD).unwrap();
    let mut root = builder().build(&scene).unwrap();
    let drawn = draw(&mut root, 300.0, 300.0);

    // "Hello world" at 10pt: 25 + 5 + 25.
    assert_eq!(root.width(), pt(55.0 + 16.0 + 4.0));
    // Text line of 10pt, image of 10pt, padding and margin.
    assert_eq!(root.height(), pt(10.0 + 10.0 + 8.0 + 4.0));

    let kinds: Vec<_> = drawn.iter().map(|d| d.name.split('-').next().unwrap()).collect();
    assert_eq!(kinds, ["rect", "text", "text", "image"]);

    match &drawn[0].item {
        DrawItem::Rect { pos, style, radius, .. } => {
            assert_eq!((pos.x, pos.y), (pt(2.0), pt(2.0)));
            assert_eq!(style.fill, Some(Color::rgb(0xee, 0xee, 0xee)));
            assert_eq!(style.stroke.map(|s| s.thickness), Some(pt(0.5)));
            assert_eq!(*radius, pt(3.0));
        }
        other => panic!("expected rect, found {other:?}"),
    }

    // The text baseline sits below the top padding by its ascent.
    let top = pt(32.0 - 2.0 - 4.0);
    assert_eq!(drawn[1].item.pos().y, top - pt(7.5));
    assert_eq!(drawn[1].item.pos().x, pt(10.0));
    assert_eq!(drawn[2].item.pos().x, pt(40.0));
}

#[test]
fn test_scene_unknown_image_has_hint() {
    let scene = Scene::from_json(CARD).unwrap();
    let err = Builder::new().build(&scene).unwrap_err();
    assert_eq!(err.message(), "unknown image `logo`");
    assert!(err.to_string().contains("hint:"));
}

#[test]
fn test_scene_break_in_vbox_is_rejected() {
    let scene = Scene::from_json(
        r#"{ "kind": "vbox", "children": [{ "kind": "forced-break" }] }"#,
    )
    .unwrap();
    let err = builder().build(&scene).unwrap_err();
    assert_eq!(err.message(), "expected box, found penalty");
}

#[test]
fn test_scene_rejects_bad_values() {
    for text in [
        r#"{ "kind": "text", "label": "x", "style": { "color": "red" } }"#,
        r#"{ "kind": "rect", "padding": [1, 2, 3] }"#,
        r#"{ "kind": "null", "width": 1 }"#,
    ] {
        assert!(Scene::from_json(text).is_err(), "{text}");
    }
}

#[test]
fn test_scene_paragraph_with_breaks() {
    let scene = Scene::from_json(
        r#"{
            "kind": "par",
            "width": 100,
            "config": { "line_spacing": 20, "hjust": 1.0 },
            "children": [
                { "kind": "text", "label": "ab" },
                { "kind": "forced-break" },
                { "kind": "text", "label": "abcd" },
                { "kind": "never-break" },
                { "kind": "penalty", "penalty": 0 },
                { "kind": "glue", "width": 6 }
            ]
        }"#,
    )
    .unwrap();
    let mut root = builder().build(&scene).unwrap();
    let drawn = draw(&mut root, 300.0, 300.0);
    let BoxNode::Par(par) = &root else { panic!("expected paragraph") };
    assert_eq!(par.lines().len(), 2);
    assert_eq!(root.width(), pt(100.0));
    // Right aligned default 12pt text. The trailing glue stays on the
    // second line and counts towards its width.
    assert_eq!(drawn[0].item.pos().x, pt(100.0 - 12.0));
    assert_eq!(drawn[1].item.pos().x, pt(100.0 - 30.0));
    assert_eq!(drawn[0].item.pos().y, pt(20.0));
}

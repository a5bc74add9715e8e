use boxglue::diag::{StrResult, bail};
use boxglue::engine::Engine;
use boxglue::layout::{
    Abs, BoxNode, ImageBox, ImageConfig, Node, ParBox, ParConfig, Point, RectBox, Size,
    SizePolicy, VBox,
};
use boxglue::render::{DisplayList, DrawItem, Renderer};
use boxglue::text::{MeasureCache, TextStyle};
use boxglue::visualize::{Image, ShapeStyle};

use crate::fixtures::{METRICS, draw, engine, png, pt, text};

/// A backend that refuses to draw images.
struct NoImages(DisplayList);

impl Renderer for NoImages {
    type Output = usize;

    fn draw_text(&mut self, label: &str, pos: Point, style: &TextStyle) -> StrResult<()> {
        self.0.draw_text(label, pos, style)
    }

    fn draw_rect(
        &mut self,
        pos: Point,
        size: Size,
        style: &ShapeStyle,
        radius: Abs,
    ) -> StrResult<()> {
        self.0.draw_rect(pos, size, style, radius)
    }

    fn draw_image(
        &mut self,
        _: &Image,
        _: Point,
        _: Size,
        _: bool,
        _: &ShapeStyle,
    ) -> StrResult<()> {
        bail!("images are not supported")
    }

    fn collect(&mut self) -> usize {
        self.0.collect().len()
    }
}

fn picture() -> Image {
    Image::decode(png(40, 20)).unwrap()
}

#[test]
fn test_decode_reads_dimensions() {
    let image = picture();
    assert_eq!((image.width(), image.height()), (40, 20));
    assert_eq!(image.aspect_ratio(), 2.0);
    assert!(image.format().is_some());
}

#[test]
fn test_decode_rejects_garbage() {
    assert!(Image::decode(vec![1u8, 2, 3, 4]).is_err());
}

#[test]
fn test_image_box_in_tree() {
    let config = ImageConfig { dpi: 72.27, ..ImageConfig::default() };
    let image = ImageBox::new(picture(), config).unwrap().with_height(10.0, SizePolicy::Fixed);
    let mut root = BoxNode::from(VBox::new(vec![image.into()]));
    let drawn = draw(&mut root, 100.0, 100.0);
    assert_eq!(root.width(), pt(20.0));
    match &drawn[0].item {
        DrawItem::Image { pos, size, interpolate, .. } => {
            assert_eq!(*pos, Point::zero());
            assert_eq!(*size, Size::new(pt(20.0), pt(10.0)));
            assert!(*interpolate);
        }
        other => panic!("expected image, found {other:?}"),
    }
}

#[test]
fn test_renderer_errors_propagate() {
    let content = ImageBox::new(picture(), ImageConfig::default()).unwrap();
    let mut root = BoxNode::from(RectBox::new(Some(content.into()), ShapeStyle::default()));
    let mut renderer = NoImages(DisplayList::new());
    let result = boxglue::typeset(
        &mut root,
        &engine(),
        pt(100.0),
        pt(100.0),
        &mut renderer,
        Abs::zero(),
        Abs::zero(),
    );
    assert_eq!(result.unwrap_err(), "images are not supported");
    // The rectangle was drawn before the failure.
    assert_eq!(renderer.collect(), 1);
}

#[test]
fn test_render_twice_appends() {
    let mut root = BoxNode::from(text("again"));
    let mut list = DisplayList::new();
    let engine = engine();
    boxglue::typeset(&mut root, &engine, pt(50.0), pt(50.0), &mut list, pt(1.0), pt(2.0))
        .unwrap();
    root.render(&mut list, pt(1.0), pt(2.0)).unwrap();
    let drawn = list.collect();
    assert_eq!(drawn.len(), 2);
    assert_eq!(drawn[0].item, drawn[1].item);
    assert_eq!(drawn[0].item.pos(), Point::new(pt(1.0), pt(2.0)));
    assert_ne!(drawn[0].name, drawn[1].name);
}

#[test]
fn test_cache_serves_repeated_words() {
    let cache = MeasureCache::new(&METRICS);
    let engine = Engine::new(&cache);
    let nodes = ["to", "be", "or", "not", "to", "be"].map(|w| Node::from(text(w))).to_vec();
    let mut root = BoxNode::from(ParBox::new(nodes, ParConfig::default()));
    root.calc_layout(&engine, pt(200.0), pt(200.0)).unwrap();
    assert_eq!(cache.len(), 4);
    assert_eq!(root.width(), pt(200.0));
}

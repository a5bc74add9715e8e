//! Declarative scene descriptions.
//!
//! A [`Scene`] is a plain data tree that can be deserialized from JSON and
//! turned into layout nodes with a [`Builder`].
//!
//! ```json
//! {
//!   "kind": "rect",
//!   "padding": [4, 8],
//!   "style": { "fill": "#eeeeee" },
//!   "content": {
//!     "kind": "par",
//!     "width": { "policy": "native" },
//!     "children": [
//!       { "kind": "text", "label": "Hello" },
//!       { "kind": "space" },
//!       { "kind": "text", "label": "world" }
//!     ]
//!   }
//! }
//! ```

use ecow::{EcoString, eco_format};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::diag::{Hint, HintedStrResult, StrResult, bail};
use crate::layout::{
    Abs, BoxNode, Glue, HBox, ImageBox, ImageConfig, Margin, Node, NullBox, ParBox,
    ParConfig, Penalty, RectBox, SizePolicy, SpaceRatios, TextBox, VBox,
};
use crate::text::TextStyle;
use crate::visualize::{Image, ShapeStyle};

/// A node in a scene description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Scene {
    Null {
        width: Abs,
        height: Abs,
    },
    Text {
        label: EcoString,
        #[serde(default)]
        style: TextStyle,
        #[serde(default)]
        voff: Abs,
    },
    Image {
        /// The key under which the image was registered on the builder.
        key: EcoString,
        #[serde(default)]
        width: Option<Extent>,
        #[serde(default)]
        height: Option<Extent>,
        #[serde(default)]
        config: ImageConfig,
        #[serde(default)]
        style: ShapeStyle,
    },
    Hbox {
        children: Vec<Scene>,
        #[serde(default)]
        hspacing: Abs,
        #[serde(default)]
        vspacing: Abs,
        #[serde(default = "default_wrap")]
        wrap: bool,
    },
    Vbox {
        children: Vec<Scene>,
        #[serde(default)]
        width: Option<Extent>,
        #[serde(default)]
        hjust: f64,
        #[serde(default)]
        vjust: f64,
    },
    Par {
        children: Vec<Scene>,
        #[serde(default)]
        width: Option<Extent>,
        #[serde(default)]
        config: ParConfig,
        #[serde(default)]
        voff: Abs,
    },
    Rect {
        #[serde(default)]
        content: Option<Box<Scene>>,
        #[serde(default)]
        width: Option<Extent>,
        #[serde(default)]
        height: Option<Extent>,
        #[serde(default)]
        margin: Margin,
        #[serde(default)]
        padding: Margin,
        #[serde(default)]
        style: ShapeStyle,
        #[serde(default)]
        radius: Abs,
        #[serde(default)]
        hjust: f64,
        #[serde(default = "default_vjust")]
        vjust: f64,
    },
    Glue {
        width: Abs,
        #[serde(default)]
        stretch: Abs,
        #[serde(default)]
        shrink: Abs,
    },
    /// An interword space measured from a text style.
    Space {
        #[serde(default)]
        style: TextStyle,
        /// Falls back to the enclosing paragraph's ratios.
        #[serde(default)]
        ratios: Option<SpaceRatios>,
    },
    Penalty {
        penalty: i32,
        #[serde(default)]
        flagged: bool,
    },
    ForcedBreak,
    NeverBreak,
}

fn default_wrap() -> bool {
    true
}

fn default_vjust() -> f64 {
    1.0
}

/// How a box determines one of its extents.
///
/// Deserializes from a plain number of points or from an object with a
/// `policy` and an optional `value`.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Extent {
    Fixed(f64),
    Policy {
        #[serde(default)]
        value: f64,
        policy: SizePolicy,
    },
}

impl Extent {
    /// The length or percentage together with its policy.
    pub fn resolve(self) -> StrResult<(f64, SizePolicy)> {
        let (value, policy) = match self {
            Self::Fixed(value) => (value, SizePolicy::Fixed),
            Self::Policy { value, policy } => (value, policy),
        };
        if !value.is_finite() || value < 0.0 {
            bail!("extent must be a non-negative number, found {}", value);
        }
        Ok((value, policy))
    }
}

impl Scene {
    /// Parse a scene from JSON.
    pub fn from_json(text: &str) -> StrResult<Self> {
        serde_json::from_str(text).map_err(|err| eco_format!("invalid scene ({err})"))
    }

    /// The kind tag of the node.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null { .. } => "null",
            Self::Text { .. } => "text",
            Self::Image { .. } => "image",
            Self::Hbox { .. } => "hbox",
            Self::Vbox { .. } => "vbox",
            Self::Par { .. } => "par",
            Self::Rect { .. } => "rect",
            Self::Glue { .. } => "glue",
            Self::Space { .. } => "space",
            Self::Penalty { .. } => "penalty",
            Self::ForcedBreak => "forced-break",
            Self::NeverBreak => "never-break",
        }
    }
}

/// Turns scenes into layout trees.
#[derive(Debug, Default, Clone)]
pub struct Builder {
    images: FxHashMap<EcoString, Image>,
}

impl Builder {
    /// Create a builder without images.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image under a key that scenes can refer to.
    pub fn with_image(mut self, key: impl Into<EcoString>, image: Image) -> Self {
        self.insert_image(key, image);
        self
    }

    /// Register an image, replacing any image with the same key.
    pub fn insert_image(&mut self, key: impl Into<EcoString>, image: Image) {
        self.images.insert(key.into(), image);
    }

    /// Build the root of a layout tree.
    pub fn build(&self, scene: &Scene) -> HintedStrResult<BoxNode> {
        self.build_box(scene, &SpaceRatios::default())
    }

    /// Build a node that must be a box.
    fn build_box(&self, scene: &Scene, ratios: &SpaceRatios) -> HintedStrResult<BoxNode> {
        self.build_node(scene, ratios)?.into_box().hint(
            "glue and penalties are only allowed among the children of a paragraph",
        )
    }

    /// Build the children of a container that only holds boxes.
    fn build_boxes(&self, children: &[Scene]) -> HintedStrResult<Vec<BoxNode>> {
        let ratios = SpaceRatios::default();
        children.iter().map(|child| self.build_box(child, &ratios)).collect()
    }

    fn build_node(&self, scene: &Scene, ratios: &SpaceRatios) -> HintedStrResult<Node> {
        Ok(match scene {
            Scene::Null { width, height } => {
                check_non_negative("width", *width)?;
                check_non_negative("height", *height)?;
                NullBox::new(*width, *height).into()
            }
            Scene::Text { label, style, voff } => {
                check_style(style)?;
                TextBox::new(label.clone(), style.clone()).with_voff(*voff).into()
            }
            Scene::Image { key, width, height, config, style } => {
                let Some(image) = self.images.get(key) else {
                    bail!(
                        "unknown image `{}`", key;
                        hint: "register it with `Builder::with_image` first"
                    );
                };
                let (wv, wp) = extent(*width, SizePolicy::Native)?;
                let (hv, hp) = extent(*height, SizePolicy::Native)?;
                ImageBox::new(image.clone(), *config)?
                    .with_width(wv, wp)
                    .with_height(hv, hp)
                    .with_style(*style)
                    .into()
            }
            Scene::Hbox { children, hspacing, vspacing, wrap } => {
                check_non_negative("hspacing", *hspacing)?;
                check_non_negative("vspacing", *vspacing)?;
                HBox::new(self.build_boxes(children)?, *hspacing, *vspacing)
                    .with_wrap(*wrap)
                    .into()
            }
            Scene::Vbox { children, width, hjust, vjust } => {
                let (value, policy) = extent(*width, SizePolicy::Native)?;
                VBox::new(self.build_boxes(children)?)
                    .with_width(value, policy)
                    .with_justification(*hjust, *vjust)
                    .into()
            }
            Scene::Par { children, width, config, voff } => {
                check_non_negative("line spacing", config.line_spacing)?;
                let nodes = children
                    .iter()
                    .map(|child| self.build_node(child, &config.space))
                    .collect::<HintedStrResult<_>>()?;
                let (value, policy) = extent(*width, SizePolicy::Expand)?;
                ParBox::new(nodes, *config)
                    .with_width(value, policy)
                    .with_voff(*voff)
                    .into()
            }
            Scene::Rect {
                content,
                width,
                height,
                margin,
                padding,
                style,
                radius,
                hjust,
                vjust,
            } => {
                let content = match content {
                    Some(content) => Some(self.build_box(content, ratios)?),
                    None => None,
                };
                let (wv, wp) = extent(*width, SizePolicy::Native)?;
                let (hv, hp) = extent(*height, SizePolicy::Native)?;
                check_non_negative("radius", *radius)?;
                RectBox::new(content, *style)
                    .with_width(wv, wp)
                    .with_height(hv, hp)
                    .with_margin(*margin)
                    .with_padding(*padding)
                    .with_radius(*radius)
                    .with_content_justification(*hjust, *vjust)
                    .into()
            }
            Scene::Glue { width, stretch, shrink } => {
                check_non_negative("stretch", *stretch)?;
                check_non_negative("shrink", *shrink)?;
                Glue::new(*width, *stretch, *shrink).into()
            }
            Scene::Space { style, ratios: own } => {
                check_style(style)?;
                Glue::regular_space(style.clone(), own.unwrap_or(*ratios)).into()
            }
            Scene::Penalty { penalty, flagged } => Penalty::new(*penalty, *flagged).into(),
            Scene::ForcedBreak => Penalty::forced().into(),
            Scene::NeverBreak => Penalty::never().into(),
        })
    }
}

/// Resolve an optional extent, falling back to a policy with value zero.
fn extent(extent: Option<Extent>, default: SizePolicy) -> StrResult<(f64, SizePolicy)> {
    match extent {
        Some(extent) => extent.resolve(),
        None => Ok((0.0, default)),
    }
}

fn check_non_negative(what: &str, length: Abs) -> StrResult<()> {
    if length < Abs::zero() {
        bail!("{} must not be negative, found {:?}", what, length);
    }
    Ok(())
}

fn check_style(style: &TextStyle) -> StrResult<()> {
    check_non_negative("font size", style.size)
}

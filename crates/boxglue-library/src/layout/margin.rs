use std::fmt::{self, Debug, Formatter};

use boxglue_utils::Numeric;
use serde::{Deserialize, Deserializer};

use crate::diag::{StrResult, bail};
use crate::layout::Abs;

/// Insets on the four sides of a box. Used for both margin and padding.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Margin {
    pub top: Abs,
    pub right: Abs,
    pub bottom: Abs,
    pub left: Abs,
}

impl Margin {
    /// Insets in CSS order: top, right, bottom, left.
    pub const fn new(top: Abs, right: Abs, bottom: Abs, left: Abs) -> Self {
        Self { top, right, bottom, left }
    }

    /// The same inset on every side.
    pub const fn splat(inset: Abs) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Build insets from one, two or four point values, following the CSS
    /// shorthand: `[all]`, `[vertical, horizontal]` or
    /// `[top, right, bottom, left]`.
    pub fn from_pt(values: &[f64]) -> StrResult<Self> {
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            bail!("margin values must be finite, found {}", bad);
        }
        Ok(match *values {
            [all] => Self::splat(Abs::pt(all)),
            [v, h] => Self::new(Abs::pt(v), Abs::pt(h), Abs::pt(v), Abs::pt(h)),
            [t, r, b, l] => Self::new(Abs::pt(t), Abs::pt(r), Abs::pt(b), Abs::pt(l)),
            _ => bail!("margin takes 1, 2 or 4 values, found {}", values.len()),
        })
    }

    /// Left plus right.
    pub fn horizontal(self) -> Abs {
        self.left + self.right
    }

    /// Top plus bottom.
    pub fn vertical(self) -> Abs {
        self.top + self.bottom
    }

    pub fn is_zero(self) -> bool {
        [self.top, self.right, self.bottom, self.left].iter().all(|v| v.is_zero())
    }
}

impl Debug for Margin {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if *self == Self::splat(self.top) {
            write!(f, "Margin({:?})", self.top)
        } else {
            write!(
                f,
                "Margin({:?}, {:?}, {:?}, {:?})",
                self.top, self.right, self.bottom, self.left
            )
        }
    }
}

impl<'de> Deserialize<'de> for Margin {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shorthand {
            Single(f64),
            Many(Vec<f64>),
        }

        let values = match Shorthand::deserialize(deserializer)? {
            Shorthand::Single(v) => vec![v],
            Shorthand::Many(vs) => vs,
        };
        Self::from_pt(&values).map_err(serde::de::Error::custom)
    }
}

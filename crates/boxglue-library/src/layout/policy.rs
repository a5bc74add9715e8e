use serde::{Deserialize, Serialize};

use crate::layout::Abs;

/// How a box determines its extent along one dimension.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizePolicy {
    /// The size given at construction is kept as is.
    #[default]
    Fixed,
    /// The box determines its ideal size from its content.
    Native,
    /// The box takes the full size hint of its parent.
    Expand,
    /// The box takes a percentage of the parent's size hint. The value
    /// given at construction is the percentage.
    Relative,
}

impl SizePolicy {
    /// Resolve a defined extent.
    ///
    /// `value` is the construction-time length (a percentage for
    /// [`Relative`](Self::Relative)). Returns `None` for
    /// [`Native`](Self::Native) since only the box itself knows its native
    /// size.
    pub fn resolve(self, value: f64, hint: Abs) -> Option<Abs> {
        match self {
            Self::Fixed => Some(Abs::pt(value)),
            Self::Native => None,
            Self::Expand => Some(hint),
            Self::Relative => Some(hint * (value / 100.0)),
        }
    }
}

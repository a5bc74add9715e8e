//! Geometry shared by all layout nodes.

mod abs;
mod margin;
mod point;
mod policy;

pub use self::abs::Abs;
pub use self::margin::Margin;
pub use self::point::{Point, Size};
pub use self::policy::SizePolicy;

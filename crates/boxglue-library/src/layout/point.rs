use std::fmt::{self, Debug, Formatter};
use std::ops::{Add, Neg};

use crate::layout::Abs;

/// A point in 2D. The y axis points up, as in the drawing backends this
/// engine targets.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Point {
    /// The x coordinate.
    pub x: Abs,
    /// The y coordinate.
    pub y: Abs,
}

impl Point {
    /// The reference point of the enclosing box.
    pub const fn zero() -> Self {
        Self { x: Abs::zero(), y: Abs::zero() }
    }

    /// A point at the given offsets.
    pub const fn new(x: Abs, y: Abs) -> Self {
        Self { x, y }
    }

    /// Shorthand for a point whose offsets are given in points.
    pub const fn pt(x: f64, y: f64) -> Self {
        Self { x: Abs::pt(x), y: Abs::pt(y) }
    }
}

impl Debug for Point {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Point({:?}, {:?})", self.x, self.y)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self { x: self.x + other.x, y: self.y + other.y }
    }
}

boxglue_utils::sub_impl!(Point);
boxglue_utils::assign_impl!(Point += Point);

/// The extent of a box or drawn primitive.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Size {
    /// The horizontal extent.
    pub x: Abs,
    /// The vertical extent.
    pub y: Abs,
}

impl Size {
    pub const fn zero() -> Self {
        Self { x: Abs::zero(), y: Abs::zero() }
    }

    pub const fn new(x: Abs, y: Abs) -> Self {
        Self { x, y }
    }

    /// Width divided by height. Infinite for zero-height sizes.
    pub fn aspect_ratio(self) -> f64 {
        self.x / self.y
    }
}

impl Debug for Size {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Size({:?}, {:?})", self.x, self.y)
    }
}

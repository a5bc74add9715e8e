use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg};

use boxglue_utils::{Numeric, round_with_precision};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An absolute length in points.
///
/// Never NaN and never negative zero, which makes it totally ordered and
/// hashable. Operations that would produce NaN yield zero instead.
#[derive(Default, Copy, Clone)]
pub struct Abs(f64);

impl Abs {
    /// Tolerance for approximate comparisons.
    const EPS: f64 = 1e-4;

    /// The zero length.
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// The infinite length.
    pub const fn inf() -> Self {
        Self(f64::INFINITY)
    }

    /// Create an absolute length from a number of points.
    pub const fn pt(pt: f64) -> Self {
        // Adding zero turns negative zero positive.
        Self(if pt.is_nan() { 0.0 } else { pt + 0.0 })
    }

    /// The number of points.
    pub const fn to_pt(self) -> f64 {
        self.0
    }

    /// The larger of two lengths.
    pub fn max(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    /// Grow to at least `other`.
    pub fn set_max(&mut self, other: Self) {
        *self = Abs::max(*self, other);
    }

    /// Whether two lengths agree up to rounding noise.
    pub fn approx_eq(self, other: Self) -> bool {
        self == other || (self.0 - other.0).abs() < Self::EPS
    }
}

impl Numeric for Abs {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Debug for Abs {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:?}pt", round_with_precision(self.0, 2))
    }
}

impl Eq for Abs {}

impl PartialEq for Abs {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Ord for Abs {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Abs {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Abs {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Neg for Abs {
    type Output = Self;

    fn neg(self) -> Self {
        Self::pt(-self.0)
    }
}

impl Add for Abs {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::pt(self.0 + other.0)
    }
}

impl Mul<f64> for Abs {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self::pt(self.0 * factor)
    }
}

impl Mul<Abs> for f64 {
    type Output = Abs;

    fn mul(self, length: Abs) -> Abs {
        length * self
    }
}

impl Div<f64> for Abs {
    type Output = Self;

    fn div(self, divisor: f64) -> Self {
        Self::pt(self.0 / divisor)
    }
}

impl Div for Abs {
    type Output = f64;

    fn div(self, other: Self) -> f64 {
        self.0 / other.0
    }
}

boxglue_utils::sub_impl!(Abs);
boxglue_utils::assign_impl!(Abs += Abs, Abs -= Abs, Abs *= f64, Abs /= f64);

impl Sum for Abs {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Self> for Abs {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Abs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Abs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pt = f64::deserialize(deserializer)?;
        if !pt.is_finite() {
            return Err(serde::de::Error::custom("length must be finite"));
        }
        Ok(Self::pt(pt))
    }
}

//! Utilities for boxglue.

#[macro_use]
mod macros;

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Rounds a value to `precision` digits after the decimal point.
///
/// Infinite values are returned unchanged.
pub fn round_with_precision(value: f64, precision: u8) -> f64 {
    if !value.is_finite() || precision as u32 >= f64::DIGITS {
        return value;
    }
    let offset = 10_f64.powi(precision.into());
    (value * offset).round() / offset
}

/// A numeric type.
pub trait Numeric:
    Sized
    + Debug
    + Copy
    + PartialEq
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
    /// The identity element for addition.
    fn zero() -> Self;

    /// Whether `self` is zero.
    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    /// Whether `self` consists only of finite parts.
    fn is_finite(self) -> bool;
}

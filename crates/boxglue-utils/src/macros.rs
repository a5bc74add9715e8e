/// Implement `Sub` for each listed type through its `Neg` and `Add` impls.
#[macro_export]
macro_rules! sub_impl {
    ($($ty:ident),* $(,)?) => {
        $(impl ::std::ops::Sub for $ty {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                self + -other
            }
        })*
    };
}

/// Implement compound assignment operators through the matching binary
/// operators, e.g. `assign_impl!(Abs += Abs, Abs *= f64)`.
#[macro_export]
macro_rules! assign_impl {
    ($($a:ident $op:tt $b:ident),* $(,)?) => {
        $($crate::assign_impl!(@op $a $op $b);)*
    };
    (@op $a:ident += $b:ident) => {
        $crate::assign_impl!(@emit $a, $b, AddAssign, add_assign, +);
    };
    (@op $a:ident -= $b:ident) => {
        $crate::assign_impl!(@emit $a, $b, SubAssign, sub_assign, -);
    };
    (@op $a:ident *= $b:ident) => {
        $crate::assign_impl!(@emit $a, $b, MulAssign, mul_assign, *);
    };
    (@op $a:ident /= $b:ident) => {
        $crate::assign_impl!(@emit $a, $b, DivAssign, div_assign, /);
    };
    (@emit $a:ident, $b:ident, $trait:ident, $method:ident, $sym:tt) => {
        impl ::std::ops::$trait<$b> for $a {
            fn $method(&mut self, other: $b) {
                *self = *self $sym other;
            }
        }
    };
}

use core::fmt::Debug;

use num_traits::{Float, Num, PrimInt};

/// A raw payload a [`Quantity`] can carry.
///
/// Every `Copy` numeric type with the usual arithmetic operators is a [`Number`].
///
/// [`Quantity`]: crate::Quantity
pub trait Number: Num + Copy + PartialOrd + Debug {}

impl<T> Number for T where T: Num + Copy + PartialOrd + Debug {}

/// An integer payload.
///
/// Quantities with exact payloads support addition, subtraction, scaling and comparison, but not
/// the operations that produce fractional results, such as division or rates.
pub trait Exact: Number + PrimInt {
    /// Converts the payload into an `f64`, rounding to the nearest representable value.
    fn into_f64(self) -> f64;
}

/// A floating-point payload.
pub trait Fractional: Number + Float {
    /// Converts an `f64` into the payload type, rounding to the nearest representable value.
    fn from_f64(value: f64) -> Self;

    /// Converts the payload into an `f64`.
    fn into_f64(self) -> f64;
}

macro_rules! impl_exact {
    ($($t:ty),*) => {
        $(
            impl Exact for $t {
                #[inline]
                fn into_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_exact!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl Fractional for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn into_f64(self) -> f64 {
        self as f64
    }
}

impl Fractional for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn into_f64(self) -> f64 {
        self
    }
}

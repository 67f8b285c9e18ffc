use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use num_traits::Signed;

use super::Quantity;
use crate::{Cubed, Fractional, Number, Product, Squared};

impl<N: Number, U> Add<Quantity<N, U>> for Quantity<N, U> {
    type Output = Quantity<N, U>;

    #[inline]
    fn add(self, rhs: Quantity<N, U>) -> Self::Output {
        Quantity::new(self.value + rhs.value)
    }
}

impl<N: Number, U> Sub<Quantity<N, U>> for Quantity<N, U> {
    type Output = Quantity<N, U>;

    #[inline]
    fn sub(self, rhs: Quantity<N, U>) -> Self::Output {
        Quantity::new(self.value - rhs.value)
    }
}

impl<N: Number, U> Rem<Quantity<N, U>> for Quantity<N, U> {
    type Output = Quantity<N, U>;

    #[inline]
    fn rem(self, rhs: Quantity<N, U>) -> Self::Output {
        Quantity::new(self.value % rhs.value)
    }
}

impl<N: Number + Neg<Output = N>, U> Neg for Quantity<N, U> {
    type Output = Quantity<N, U>;

    #[inline]
    fn neg(self) -> Self::Output {
        Quantity::new(-self.value)
    }
}

impl<N: Number, U> Mul<N> for Quantity<N, U> {
    type Output = Quantity<N, U>;

    #[inline]
    fn mul(self, rhs: N) -> Self::Output {
        Quantity::new(self.value * rhs)
    }
}

impl<N: Fractional, U> Div<N> for Quantity<N, U> {
    type Output = Quantity<N, U>;

    #[inline]
    fn div(self, rhs: N) -> Self::Output {
        Quantity::new(self.value / rhs)
    }
}

impl<N: Number, U> AddAssign<Quantity<N, U>> for Quantity<N, U> {
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<N, U>) {
        *self = *self + rhs;
    }
}

impl<N: Number, U> SubAssign<Quantity<N, U>> for Quantity<N, U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<N, U>) {
        *self = *self - rhs;
    }
}

impl<N: Number, U> MulAssign<N> for Quantity<N, U> {
    #[inline]
    fn mul_assign(&mut self, rhs: N) {
        *self = *self * rhs;
    }
}

impl<N: Fractional, U> DivAssign<N> for Quantity<N, U> {
    #[inline]
    fn div_assign(&mut self, rhs: N) {
        *self = *self / rhs;
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<U> Mul<Quantity<$t, U>> for $t {
                type Output = Quantity<$t, U>;

                #[inline]
                fn mul(self, rhs: Quantity<$t, U>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl<N: Number, U> core::iter::Sum for Quantity<N, U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, q| acc + q)
    }
}

impl<'a, N: Number, U> core::iter::Sum<&'a Quantity<N, U>> for Quantity<N, U> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, q| acc + *q)
    }
}

impl<N: Number, U> Quantity<N, U> {
    /// Multiplies the quantity by a dimensionless factor.
    #[inline]
    #[must_use]
    pub fn scale_by(self, factor: N) -> Self {
        self * factor
    }

    /// Multiplies two quantities, producing a quantity of the product unit.
    #[inline]
    #[must_use]
    pub fn product<V>(self, other: Quantity<N, V>) -> Quantity<N, Product<U, V>> {
        Quantity::new(self.value * other.value)
    }

    /// Multiplies the quantity by itself.
    #[inline]
    #[must_use]
    pub fn squared(self) -> Quantity<N, Squared<U>> {
        self.product(self)
    }

    /// Multiplies the quantity by itself twice.
    #[inline]
    #[must_use]
    pub fn cubed(self) -> Quantity<N, Cubed<U>> {
        self.squared().product(self)
    }
}

impl<N: Number + Signed, U> Quantity<N, U> {
    /// Returns the absolute value.
    #[inline]
    #[must_use]
    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }
}

impl<N: Fractional, U> Quantity<N, U> {
    /// Returns the dimensionless quotient `self / other`.
    #[inline]
    #[must_use]
    pub fn ratio(self, other: Self) -> N {
        self.value / other.value
    }

    /// Interpolates from `start` to `end` by `parameter`.
    ///
    /// A parameter of zero yields `start`, one yields `end`; values outside `[0, 1]` extrapolate.
    #[inline]
    #[must_use]
    pub fn interpolate_from(start: Self, end: Self, parameter: N) -> Self {
        if parameter <= N::from_f64(0.5) {
            start + (end - start) * parameter
        } else {
            end + (start - end) * (N::one() - parameter)
        }
    }

    /// Returns the quantity halfway between `a` and `b`.
    #[inline]
    #[must_use]
    pub fn midpoint(a: Self, b: Self) -> Self {
        a + (b - a) / N::from_f64(2.0)
    }
}

impl<N: Fractional, A, B> Quantity<N, Product<A, B>> {
    /// Divides out the left factor of a product.
    #[inline]
    #[must_use]
    pub fn over(self, a: Quantity<N, A>) -> Quantity<N, B> {
        Quantity::new(self.value / a.value)
    }

    /// Divides out the right factor of a product.
    #[inline]
    #[must_use]
    pub fn over_right(self, b: Quantity<N, B>) -> Quantity<N, A> {
        Quantity::new(self.value / b.value)
    }
}

impl<N: Fractional, U> Quantity<N, Squared<U>> {
    /// Returns the square root.
    ///
    /// Negative values yield NaN.
    #[inline]
    #[must_use]
    pub fn sqrt(self) -> Quantity<N, U> {
        Quantity::new(self.value.sqrt())
    }
}

impl<N: Fractional, U> Quantity<N, Cubed<U>> {
    /// Returns the cube root.
    #[inline]
    #[must_use]
    pub fn cbrt(self) -> Quantity<N, U> {
        Quantity::new(self.value.cbrt())
    }
}

use crate::{Fractional, Number, Per, Quantity};

/// A quantity of `D` per unit of `I`.
///
/// A rate is an ordinary [`Quantity`], so addition, comparison, sorting and so on apply to
/// rates of the same `D` and `I` without further code.
pub type Rate<N, D, I> = Quantity<N, Per<D, I>>;

impl<N: Fractional, D> Quantity<N, D> {
    /// Builds the rate of `self` per `independent`.
    ///
    /// A zero `independent` yields an infinite or NaN rate, exactly as the division of the raw
    /// values would.
    #[inline]
    #[must_use]
    pub fn per<I>(self, independent: Quantity<N, I>) -> Rate<N, D, I> {
        #[cfg(feature = "tracing")]
        if independent.is_zero() {
            tracing::trace!("Building a rate over a zero quantity");
        }
        Quantity::new(self.value() / independent.value())
    }
}

impl<N: Number, I> Quantity<N, I> {
    /// Applies `rate` to `self`; the same as `rate.at(self)`.
    #[inline]
    #[must_use]
    pub fn at_rate<D>(self, rate: Rate<N, D, I>) -> Quantity<N, D> {
        rate.at(self)
    }
}

impl<N: Number, D, I> Rate<N, D, I> {
    /// Returns the quantity of `D` corresponding to `independent` at this rate.
    #[inline]
    #[must_use]
    pub fn at(self, independent: Quantity<N, I>) -> Quantity<N, D> {
        Quantity::new(self.value() * independent.value())
    }

    /// Composes this rate with a rate of `I` per `C`, giving a rate of `D` per `C`.
    #[inline]
    #[must_use]
    pub fn chain<C>(self, other: Rate<N, I, C>) -> Rate<N, D, C> {
        Quantity::new(self.value() * other.value())
    }
}

impl<N: Fractional, D, I> Rate<N, D, I> {
    /// Returns the quantity of `I` that produces `dependent` at this rate.
    ///
    /// A zero rate yields an infinite or NaN result, exactly as the division of the raw values
    /// would.
    #[inline]
    #[must_use]
    pub fn at_inverse(self, dependent: Quantity<N, D>) -> Quantity<N, I> {
        #[cfg(feature = "tracing")]
        if self.is_zero() {
            tracing::trace!("Inverting a zero rate");
        }
        Quantity::new(dependent.value() / self.value())
    }

    /// Returns the reciprocal rate of `I` per `D`.
    #[inline]
    #[must_use]
    pub fn inverse(self) -> Rate<N, I, D> {
        Quantity::new(N::one() / self.value())
    }
}

use num_traits::NumCast;

use super::Quantity;
use crate::{Exact, Fractional, QuantityError, utils::float::is_integer};

impl<E: Exact, U> Quantity<E, U> {
    /// Converts an exact quantity into a fractional one.
    #[inline]
    #[must_use]
    pub fn to_fractional<F: Fractional>(self) -> Quantity<F, U> {
        Quantity::new(F::from_f64(self.value.into_f64()))
    }
}

impl<F: Fractional, U> Quantity<F, U> {
    /// Converts into an exact quantity, rounding half away from zero.
    pub fn try_round<E: Exact>(self) -> Result<Quantity<E, U>, QuantityError> {
        Self::cast(self.value.round(), self.value)
    }

    /// Converts into an exact quantity, rounding toward negative infinity.
    pub fn try_floor<E: Exact>(self) -> Result<Quantity<E, U>, QuantityError> {
        Self::cast(self.value.floor(), self.value)
    }

    /// Converts into an exact quantity, rounding toward positive infinity.
    pub fn try_ceil<E: Exact>(self) -> Result<Quantity<E, U>, QuantityError> {
        Self::cast(self.value.ceil(), self.value)
    }

    /// Converts into an exact quantity, rounding toward zero.
    pub fn try_truncate<E: Exact>(self) -> Result<Quantity<E, U>, QuantityError> {
        Self::cast(self.value.trunc(), self.value)
    }

    /// Converts into an exact quantity if the value is an integer.
    ///
    /// Values within `1e-6` of an integer are accepted and rounded to it.
    pub fn try_exact<E: Exact>(self) -> Result<Quantity<E, U>, QuantityError> {
        let value = self.value.into_f64();
        if value.is_finite() && !is_integer(value) {
            #[cfg(feature = "tracing")]
            tracing::debug!("{} is not an integer", value);
            return Err(QuantityError::NotInteger(value));
        }
        self.try_round()
    }

    fn cast<E: Exact>(rounded: F, original: F) -> Result<Quantity<E, U>, QuantityError> {
        let original = original.into_f64();
        if !original.is_finite() {
            #[cfg(feature = "tracing")]
            tracing::debug!("{} cannot be converted into an exact quantity", original);
            return Err(QuantityError::NotFinite(original));
        }
        <E as NumCast>::from(rounded)
            .map(Quantity::new)
            .ok_or(QuantityError::OutOfRange(original))
    }
}

use core::cmp::Ordering;

use super::Quantity;
use crate::Number;

impl<N: Number, U> Quantity<N, U> {
    /// Compares two quantities.
    ///
    /// Returns [`Ordering::Less`] if `self < other`, [`Ordering::Equal`] if `self == other` and
    /// [`Ordering::Greater`] otherwise. A NaN operand therefore compares as greater, and the
    /// ordering is only total over non-NaN values.
    #[inline]
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.value < other.value {
            Ordering::Less
        } else if self.value == other.value {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }

    /// Returns `true` if `self` and `other` differ by at most `tolerance`.
    ///
    /// A negative or NaN tolerance is never satisfied. Exact payloads never overflow here, even
    /// when the distance between the two values does not fit in `N`.
    #[inline]
    #[must_use]
    pub fn equal_within(&self, tolerance: Self, other: &Self) -> bool {
        let zero = N::zero();
        if !matches!(
            tolerance.value.partial_cmp(&zero),
            Some(Ordering::Greater | Ordering::Equal)
        ) {
            return false;
        }
        let (lo, hi) = if self.value > other.value {
            (other.value, self.value)
        } else {
            (self.value, other.value)
        };
        if lo >= zero || hi <= zero {
            hi - lo <= tolerance.value
        } else {
            // `hi - lo` may overflow when the signs differ
            hi <= tolerance.value && lo >= hi - tolerance.value
        }
    }

    /// Returns the lesser of two quantities, or `self` if they are equal.
    #[inline]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if other.value < self.value { other } else { self }
    }

    /// Returns the greater of two quantities, or `self` if they are equal.
    #[inline]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if other.value > self.value { other } else { self }
    }

    /// Restricts the quantity to the closed range between `lower` and `upper`.
    ///
    /// If `lower` is greater than `upper` the bounds are swapped, so the result always lies
    /// between the two bounds. Unlike [`f64::clamp`], this never panics.
    #[must_use]
    pub fn clamp(self, lower: Self, upper: Self) -> Self {
        if lower.value <= upper.value {
            self.max(lower).min(upper)
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "Clamp bounds are inverted ({:?} > {:?}), swapping them",
                lower.value,
                upper.value
            );
            self.max(upper).min(lower)
        }
    }
}

mod compare;
mod exact;
mod ops;
/// Operations over sequences of quantities.
pub mod seq;
#[cfg(feature = "serde")]
mod serialize;

use core::{hash::Hash, marker::PhantomData};

use crate::{Fractional, Number};

/// A number tagged with a unit at compile time.
///
/// The payload is always stored in the canonical scale of `U` (meters for lengths, seconds for
/// durations, kelvins for temperatures, ...). `U` never exists at runtime, so a `Quantity<N, U>`
/// has exactly the size and alignment of `N`.
///
/// Arithmetic is the arithmetic of `N`. Fractional payloads propagate NaN and infinity. Exact
/// payloads overflow like the bare integer: `+`, `-`, `*` and [`Sum`] panic in debug builds and
/// wrap in release builds.
///
/// [`Sum`]: core::iter::Sum
#[repr(transparent)]
pub struct Quantity<N, U> {
    value: N,
    unit: PhantomData<fn() -> U>,
}

impl<N, U> Quantity<N, U> {
    /// Wraps a raw value that is already in the canonical scale of `U`.
    #[inline]
    #[must_use]
    pub const fn new(value: N) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }
}

impl<N: Copy, U> Quantity<N, U> {
    /// Returns the raw value in the canonical scale of `U`.
    #[inline]
    #[must_use]
    pub const fn value(self) -> N {
        self.value
    }
}

impl<N: Number, U> Quantity<N, U> {
    /// The additive identity.
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self::new(N::zero())
    }

    /// Returns `true` if the value is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl<N: Fractional, U> Quantity<N, U> {
    /// Positive infinity.
    #[inline]
    #[must_use]
    pub fn infinity() -> Self {
        Self::new(N::infinity())
    }

    /// Negative infinity.
    #[inline]
    #[must_use]
    pub fn negative_infinity() -> Self {
        Self::new(N::neg_infinity())
    }

    /// Returns `true` if the value is NaN.
    #[inline]
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.value.is_nan()
    }

    /// Returns `true` if the value is positive or negative infinity.
    #[inline]
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        self.value.is_infinite()
    }
}

impl<N: Clone, U> Clone for Quantity<N, U> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<N: Copy, U> Copy for Quantity<N, U> {}

impl<N: PartialEq, U> PartialEq for Quantity<N, U> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<N: Eq, U> Eq for Quantity<N, U> {}

impl<N: PartialOrd, U> PartialOrd for Quantity<N, U> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<N: Ord, U> Ord for Quantity<N, U> {
    #[inline]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<N: Hash, U> Hash for Quantity<N, U> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<N: Number, U> Default for Quantity<N, U> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<N: core::fmt::Debug, U> core::fmt::Debug for Quantity<N, U> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?} {}", self.value, tynm::type_name::<U>())
    }
}

impl<N: Number, U> num_traits::Zero for Quantity<N, U> {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(self)
    }
}

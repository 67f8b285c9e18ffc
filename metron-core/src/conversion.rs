use derive_more::Debug;
use getset::CopyGetters;

use crate::{Fractional, Quantity};

/// A conversion between raw numbers in some unit and the canonical scale of a quantity.
///
/// The canonical value is `(raw - raw_offset) * scale + canonical_offset`. Most units only
/// scale (see [`Conversion::linear`]); temperatures also shift (see [`Conversion::affine`]).
///
/// # Example
///
/// ```
/// use metron_core::{Conversion, Quantity};
///
/// enum Kelvins {}
///
/// const CELSIUS: Conversion = Conversion::affine(1.0, 0.0, 273.15);
/// const FAHRENHEIT: Conversion = Conversion::affine(5.0 / 9.0, 32.0, 273.15);
///
/// let body: Quantity<f64, Kelvins> = CELSIUS.quantity(37.0);
/// approx::assert_abs_diff_eq!(310.15, body.value(), epsilon = 1e-9);
/// approx::assert_abs_diff_eq!(98.6, FAHRENHEIT.value(body), epsilon = 1e-9);
/// ```
#[derive(Clone, Copy, PartialEq, Debug, CopyGetters)]
#[debug("(x - {:?}) * {:?} + {:?}", raw_offset, scale, canonical_offset)]
pub struct Conversion {
    /// Canonical units per raw unit.
    #[getset(get_copy = "pub")]
    scale: f64,
    /// The raw value mapped onto `canonical_offset`.
    #[getset(get_copy = "pub")]
    raw_offset: f64,
    /// The canonical value `raw_offset` maps onto.
    #[getset(get_copy = "pub")]
    canonical_offset: f64,
}

impl Conversion {
    /// The conversion of the canonical unit itself.
    pub const IDENTITY: Self = Self::linear(1.0);

    /// A conversion that only scales: one raw unit is `scale` canonical units.
    #[must_use]
    pub const fn linear(scale: f64) -> Self {
        Self::affine(scale, 0.0, 0.0)
    }

    /// A conversion that scales and shifts: `raw_offset` maps onto `canonical_offset`, and one
    /// raw unit step is `scale` canonical units.
    #[must_use]
    pub const fn affine(scale: f64, raw_offset: f64, canonical_offset: f64) -> Self {
        Self {
            scale,
            raw_offset,
            canonical_offset,
        }
    }

    /// The conversion of `self` per `other`.
    ///
    /// Offsets are dropped: a rate is a ratio of differences, and differences do not depend on
    /// where a scale starts.
    #[must_use]
    pub const fn per(self, other: Self) -> Self {
        Self::linear(self.scale / other.scale)
    }

    /// The conversion of `self` multiplied by `other`; offsets are dropped.
    #[must_use]
    pub const fn times(self, other: Self) -> Self {
        Self::linear(self.scale * other.scale)
    }

    /// Converts a raw value into the canonical scale.
    #[must_use]
    pub const fn to_canonical(&self, raw: f64) -> f64 {
        (raw - self.raw_offset) * self.scale + self.canonical_offset
    }

    /// Converts a canonical value into the raw scale.
    #[must_use]
    pub const fn from_canonical(&self, canonical: f64) -> f64 {
        (canonical - self.canonical_offset) / self.scale + self.raw_offset
    }

    /// Builds a quantity from a raw value in this unit.
    #[inline]
    #[must_use]
    pub fn quantity<N: Fractional, U>(&self, raw: N) -> Quantity<N, U> {
        Quantity::new(N::from_f64(self.to_canonical(raw.into_f64())))
    }

    /// Reads the raw value of a quantity in this unit.
    #[inline]
    #[must_use]
    pub fn value<N: Fractional, U>(&self, quantity: Quantity<N, U>) -> N {
        N::from_f64(self.from_canonical(quantity.value().into_f64()))
    }
}

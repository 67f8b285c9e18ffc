use metron_core::{Conversion, Number, Quantity, Rate};

use crate::{
    length::{INCH, METER, Meters},
    macros::units,
};

/// \[px\]
pub enum Pixels {}

/// A distance on a raster, in pixels.
///
/// Unlike the other families, pixels are generic over the payload: `Pixel<i32>` counts whole
/// pixels, `Pixel<f64>` carries subpixel positions.
pub type Pixel<N> = Quantity<N, Pixels>;

/// A pixel density, stored in pixels per meter.
pub type PixelDensity = Rate<f64, Pixels, Meters>;

/// pixel per meter
pub const PIXEL_PER_METER: Conversion = Conversion::IDENTITY.per(METER);
/// pixel per inch
pub const PIXEL_PER_INCH: Conversion = Conversion::IDENTITY.per(INCH);

/// A distance in pixels.
#[inline]
#[must_use]
pub const fn pixels<N>(value: N) -> Pixel<N> {
    Quantity::new(value)
}

/// Reads a [`Pixel`] count.
pub trait PixelUnits<N> {
    /// Returns the value in pixels.
    #[must_use]
    fn in_pixels(self) -> N;
}

impl<N: Number> PixelUnits<N> for Pixel<N> {
    #[inline]
    fn in_pixels(self) -> N {
        self.value()
    }
}

units! {
    /// Reads a [`PixelDensity`] in a specific unit.
    pub trait PixelDensityUnits for PixelDensity {
        /// A density in pixels per meter.
        pixels_per_meter = PIXEL_PER_METER;
        /// A density in pixels per inch.
        pixels_per_inch = PIXEL_PER_INCH;
    }
}

use metron_core::{Conversion, Quantity};

use crate::macros::units;

/// \[m\]
pub enum Meters {}

/// A length, stored in meters.
pub type Length = Quantity<f64, Meters>;

/// meter
pub const METER: Conversion = Conversion::IDENTITY;
/// millimeter
pub const MILLIMETER: Conversion = Conversion::linear(1e-3);
/// centimeter
pub const CENTIMETER: Conversion = Conversion::linear(1e-2);
/// kilometer
pub const KILOMETER: Conversion = Conversion::linear(1e3);
/// inch
pub const INCH: Conversion = Conversion::linear(0.0254);
/// foot
pub const FOOT: Conversion = Conversion::linear(0.3048);
/// yard
pub const YARD: Conversion = Conversion::linear(0.9144);
/// international mile
pub const MILE: Conversion = Conversion::linear(1609.344);

units! {
    /// Reads a [`Length`] in a specific unit.
    pub trait LengthUnits for Length {
        /// A length in meters.
        meters = METER;
        /// A length in millimeters.
        millimeters = MILLIMETER;
        /// A length in centimeters.
        centimeters = CENTIMETER;
        /// A length in kilometers.
        kilometers = KILOMETER;
        /// A length in inches.
        inches = INCH;
        /// A length in feet.
        feet = FOOT;
        /// A length in yards.
        yards = YARD;
        /// A length in miles.
        miles = MILE;
    }
}

use metron_core::{Conversion, Quantity};

use crate::macros::units;

/// \[K\]
pub enum Kelvins {}

/// A thermodynamic temperature, stored in kelvins.
///
/// Celsius and Fahrenheit readings are affine: `0 °C` is `273.15 K`, not zero. Differences of
/// temperatures still subtract the way any other quantity does.
pub type Temperature = Quantity<f64, Kelvins>;

/// kelvin
pub const KELVIN: Conversion = Conversion::IDENTITY;
/// degree Celsius
pub const DEGREE_CELSIUS: Conversion = Conversion::affine(1.0, 0.0, 273.15);
/// degree Fahrenheit
pub const DEGREE_FAHRENHEIT: Conversion = Conversion::affine(5.0 / 9.0, 32.0, 273.15);

units! {
    /// Reads a [`Temperature`] in a specific scale.
    pub trait TemperatureUnits for Temperature {
        /// A temperature in kelvins.
        kelvins = KELVIN;
        /// A temperature in degrees Celsius.
        degrees_celsius = DEGREE_CELSIUS;
        /// A temperature in degrees Fahrenheit.
        degrees_fahrenheit = DEGREE_FAHRENHEIT;
    }
}

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Compile-time checked units of measure.
//!
//! Every family in this crate is a [`Quantity`] alias with a canonical unit, free functions
//! building it from other units, and a trait reading it back in any of them:
//!
//! ```
//! use metron::prelude::*;
//!
//! assert_eq!(10800.0, hours(3.0).in_seconds());
//! assert_eq!(86.0, degrees_celsius(30.0).in_degrees_fahrenheit());
//!
//! let pace = miles(1.0).per(minutes(1.0));
//! approx::assert_abs_diff_eq!(96.56064, pace.in_kilometers_per_hour(), epsilon = 1e-6);
//! ```
//!
//! Mixing families is rejected by the compiler:
//!
//! ```compile_fail
//! use metron::prelude::*;
//!
//! let _ = meters(1.0) + seconds(1.0);
//! ```

mod macros;

/// Accelerations.
pub mod acceleration;
/// Angles and trigonometry.
pub mod angle;
/// Areas.
pub mod area;
/// Durations and the bridge to [`std::time::Duration`].
pub mod duration;
/// Frequencies and periods.
pub mod frequency;
/// Lengths.
pub mod length;
/// Raster distances and pixel densities.
pub mod pixels;
/// Commonly used items.
pub mod prelude;
/// Speeds.
pub mod speed;
/// Temperatures.
pub mod temperature;

pub use metron_core::{
    Conversion, Cubed, Exact, Fractional, Number, Per, Product, Quantity, QuantityError, Rate,
    Squared, maximum, minimum, sort, sort_by_key, sum,
};

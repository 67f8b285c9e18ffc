#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Core quantity and rate types for metron.
//!
//! A [`Quantity<N, U>`] is a single number `N` tagged with a unit type `U` that only exists at
//! compile time. Quantities with the same unit tag can be added, compared and sorted;
//! quantities with different tags cannot be mixed. [`Rate<N, D, I>`] derives a "D per I"
//! quantity for any two unit tags without any per-pair code.
//!
//! # Example
//!
//! ```
//! use metron_core::{Conversion, Quantity, Rate};
//!
//! enum Meters {}
//! enum Seconds {}
//!
//! const KILOMETER: Conversion = Conversion::linear(1000.0);
//! const HOUR: Conversion = Conversion::linear(3600.0);
//!
//! let distance: Quantity<f64, Meters> = KILOMETER.quantity(42.195);
//! let time: Quantity<f64, Seconds> = HOUR.quantity(2.0);
//!
//! let pace: Rate<f64, Meters, Seconds> = distance.per(time);
//! approx::assert_abs_diff_eq!(21.0975, KILOMETER.per(HOUR).value(pace), epsilon = 1e-9);
//!
//! let half: Quantity<f64, Meters> = pace.at(time / 2.0);
//! approx::assert_abs_diff_eq!(21097.5, half.value(), epsilon = 1e-9);
//! ```

extern crate alloc;

/// Scale-and-offset conversions between raw numbers and canonical quantities.
pub mod conversion;
mod error;
/// Numeric kinds a quantity can carry.
pub mod number;
/// The quantity type and the operations defined over it.
pub mod quantity;
/// Rates of change between two unit tags.
pub mod rate;
/// Unit tag combinators.
pub mod unit;
#[doc(hidden)]
pub mod utils;

pub use conversion::Conversion;
pub use error::QuantityError;
pub use number::{Exact, Fractional, Number};
pub use quantity::{
    Quantity,
    seq::{maximum, minimum, sort, sort_by_key, sum},
};
pub use rate::Rate;
pub use unit::{Cubed, Per, Product, Squared};

//! Any type can tag a [`Quantity`]; uninhabited enums are the usual choice for base units:
//!
//! ```
//! use metron_core::{Per, Quantity};
//!
//! /// meter
//! pub enum Meters {}
//! /// second
//! pub enum Seconds {}
//!
//! pub type Length = Quantity<f64, Meters>;
//! pub type Speed = Quantity<f64, Per<Meters, Seconds>>;
//! ```
//!
//! The types in this module combine existing tags into derived ones. None of them is ever
//! constructed.
//!
//! [`Quantity`]: crate::Quantity

use core::marker::PhantomData;

/// The unit of a quantity of `D` per unit of `I`.
pub struct Per<D, I>(PhantomData<(fn() -> D, fn() -> I)>);

/// The unit of a product of a quantity of `A` and a quantity of `B`.
pub struct Product<A, B>(PhantomData<(fn() -> A, fn() -> B)>);

/// The unit of a quantity of `U` multiplied by itself.
pub type Squared<U> = Product<U, U>;

/// The unit of a quantity of `U` multiplied by itself twice.
pub type Cubed<U> = Product<Squared<U>, U>;

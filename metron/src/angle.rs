use std::f64::consts::{PI, TAU};

use metron_core::{Conversion, Quantity};

use crate::macros::units;

/// \[rad\]
pub enum Radians {}

/// An angle, stored in radians.
pub type Angle = Quantity<f64, Radians>;

/// radian
pub const RADIAN: Conversion = Conversion::IDENTITY;
/// degree
pub const DEGREE: Conversion = Conversion::linear(PI / 180.0);
/// turn
pub const TURN: Conversion = Conversion::linear(TAU);
/// arc minute
pub const ARC_MINUTE: Conversion = Conversion::linear(PI / 10800.0);
/// arc second
pub const ARC_SECOND: Conversion = Conversion::linear(PI / 648_000.0);

units! {
    /// Reads an [`Angle`] in a specific unit.
    pub trait AngleUnits for Angle {
        /// An angle in radians.
        radians = RADIAN;
        /// An angle in degrees.
        degrees = DEGREE;
        /// An angle in turns.
        turns = TURN;
        /// An angle in arc minutes.
        arc_minutes = ARC_MINUTE;
        /// An angle in arc seconds.
        arc_seconds = ARC_SECOND;
    }
}

/// Trigonometry on [`Angle`].
pub trait Trigonometry {
    /// Sine.
    fn sin(self) -> f64;
    /// Cosine.
    fn cos(self) -> f64;
    /// Tangent.
    fn tan(self) -> f64;
    /// Wraps the angle into `(-π, π]`.
    #[must_use]
    fn normalize(self) -> Self;
}

impl Trigonometry for Angle {
    fn sin(self) -> f64 {
        self.value().sin()
    }

    fn cos(self) -> f64 {
        self.value().cos()
    }

    fn tan(self) -> f64 {
        self.value().tan()
    }

    fn normalize(self) -> Self {
        let wrapped = self.value().rem_euclid(TAU);
        Angle::new(if wrapped > PI { wrapped - TAU } else { wrapped })
    }
}

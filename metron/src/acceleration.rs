use metron_core::{Conversion, Per, Rate};

use crate::{
    duration::{SECOND, Seconds},
    length::Meters,
    macros::units,
    speed::{FOOT_PER_SECOND, METER_PER_SECOND},
};

/// An acceleration, stored in meters per second squared.
pub type Acceleration = Rate<f64, Per<Meters, Seconds>, Seconds>;

/// meter per second squared
pub const METER_PER_SECOND_SQUARED: Conversion = METER_PER_SECOND.per(SECOND);
/// foot per second squared
pub const FOOT_PER_SECOND_SQUARED: Conversion = FOOT_PER_SECOND.per(SECOND);
/// standard gravity
pub const GEE: Conversion = Conversion::linear(9.80665);

units! {
    /// Reads an [`Acceleration`] in a specific unit.
    pub trait AccelerationUnits for Acceleration {
        /// An acceleration in meters per second squared.
        meters_per_second_squared = METER_PER_SECOND_SQUARED;
        /// An acceleration in feet per second squared.
        feet_per_second_squared = FOOT_PER_SECOND_SQUARED;
        /// An acceleration in multiples of standard gravity.
        gees = GEE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        duration::seconds,
        speed::{SpeedUnits, kilometers_per_hour},
    };

    #[rstest::rstest]
    #[case(9.80665, gees(1.0))]
    #[case(0.3048, feet_per_second_squared(1.0))]
    #[case(-2.5, meters_per_second_squared(-2.5))]
    fn in_meters_per_second_squared(#[case] expected: f64, #[case] acceleration: Acceleration) {
        approx::assert_abs_diff_eq!(
            expected,
            acceleration.in_meters_per_second_squared(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn gees_in_feet() {
        approx::assert_abs_diff_eq!(
            32.174_048_556_430_45,
            gees(1.0).in_feet_per_second_squared(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn from_speed_change() {
        let acceleration = kilometers_per_hour(100.0).per(seconds(4.0));
        approx::assert_abs_diff_eq!(
            6.944_444_444_444_445,
            acceleration.in_meters_per_second_squared(),
            epsilon = 1e-9
        );
        approx::assert_abs_diff_eq!(
            100.0,
            acceleration.at(seconds(4.0)).in_kilometers_per_hour(),
            epsilon = 1e-9
        );
    }
}

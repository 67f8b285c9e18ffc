use metron_core::{Conversion, Rate};

use crate::{
    duration::{HOUR, SECOND, Seconds},
    length::{FOOT, KILOMETER, METER, MILE, Meters},
    macros::units,
};

/// A speed, stored in meters per second.
pub type Speed = Rate<f64, Meters, Seconds>;

/// meter per second
pub const METER_PER_SECOND: Conversion = METER.per(SECOND);
/// kilometer per hour
pub const KILOMETER_PER_HOUR: Conversion = KILOMETER.per(HOUR);
/// mile per hour
pub const MILE_PER_HOUR: Conversion = MILE.per(HOUR);
/// foot per second
pub const FOOT_PER_SECOND: Conversion = FOOT.per(SECOND);

units! {
    /// Reads a [`Speed`] in a specific unit.
    pub trait SpeedUnits for Speed {
        /// A speed in meters per second.
        meters_per_second = METER_PER_SECOND;
        /// A speed in kilometers per hour.
        kilometers_per_hour = KILOMETER_PER_HOUR;
        /// A speed in miles per hour.
        miles_per_hour = MILE_PER_HOUR;
        /// A speed in feet per second.
        feet_per_second = FOOT_PER_SECOND;
    }
}

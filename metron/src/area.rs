use metron_core::{Conversion, Quantity, Squared};

use crate::{
    length::{FOOT, KILOMETER, METER, Meters},
    macros::units,
};

/// An area, stored in square meters.
pub type Area = Quantity<f64, Squared<Meters>>;

/// square meter
pub const SQUARE_METER: Conversion = METER.times(METER);
/// square kilometer
pub const SQUARE_KILOMETER: Conversion = KILOMETER.times(KILOMETER);
/// square foot
pub const SQUARE_FOOT: Conversion = FOOT.times(FOOT);
/// hectare
pub const HECTARE: Conversion = Conversion::linear(1e4);
/// international acre
pub const ACRE: Conversion = Conversion::linear(4046.856_422_4);

units! {
    /// Reads an [`Area`] in a specific unit.
    pub trait AreaUnits for Area {
        /// An area in square meters.
        square_meters = SQUARE_METER;
        /// An area in square kilometers.
        square_kilometers = SQUARE_KILOMETER;
        /// An area in square feet.
        square_feet = SQUARE_FOOT;
        /// An area in hectares.
        hectares = HECTARE;
        /// An area in acres.
        acres = ACRE;
    }
}

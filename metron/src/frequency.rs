use metron_core::{Conversion, Quantity, Rate};

use crate::{
    duration::{Duration, MINUTE, SECOND, Seconds},
    macros::units,
};

/// \[cycle\]
pub enum Cycles {}

/// A number of cycles of a periodic process.
pub type CycleCount = Quantity<f64, Cycles>;

/// A frequency, stored in cycles per second.
pub type Frequency = Rate<f64, Cycles, Seconds>;

/// cycle
pub const CYCLE: Conversion = Conversion::IDENTITY;
/// hertz
pub const HERTZ: Conversion = CYCLE.per(SECOND);
/// kilohertz
pub const KILOHERTZ: Conversion = Conversion::linear(1e3);
/// megahertz
pub const MEGAHERTZ: Conversion = Conversion::linear(1e6);
/// revolution per minute
pub const REVOLUTION_PER_MINUTE: Conversion = CYCLE.per(MINUTE);

/// A count of cycles.
#[inline]
#[must_use]
pub fn cycles(value: f64) -> CycleCount {
    CYCLE.quantity(value)
}

units! {
    /// Reads a [`Frequency`] in a specific unit.
    pub trait FrequencyUnits for Frequency {
        /// A frequency in hertz.
        hertz = HERTZ;
        /// A frequency in kilohertz.
        kilohertz = KILOHERTZ;
        /// A frequency in megahertz.
        megahertz = MEGAHERTZ;
        /// A frequency in revolutions per minute.
        revolutions_per_minute = REVOLUTION_PER_MINUTE;
    }
}

/// The frequency whose period is `period`.
///
/// A zero period gives an infinite frequency.
#[inline]
#[must_use]
pub fn from_period(period: Duration) -> Frequency {
    cycles(1.0).per(period)
}

/// Period of a [`Frequency`].
pub trait Period {
    /// The duration of one cycle.
    ///
    /// A zero frequency gives an infinite period.
    fn period(self) -> Duration;
}

impl Period for Frequency {
    fn period(self) -> Duration {
        self.at_inverse(cycles(1.0))
    }
}

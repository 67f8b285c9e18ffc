use core::time::TryFromFloatSecsError;

use metron_core::{Conversion, Quantity};

use crate::macros::units;

/// \[s\]
pub enum Seconds {}

/// A duration, stored in seconds.
pub type Duration = Quantity<f64, Seconds>;

/// second
pub const SECOND: Conversion = Conversion::IDENTITY;
/// millisecond
pub const MILLISECOND: Conversion = Conversion::linear(1e-3);
/// minute
pub const MINUTE: Conversion = Conversion::linear(60.0);
/// hour
pub const HOUR: Conversion = Conversion::linear(3600.0);
/// day
pub const DAY: Conversion = Conversion::linear(86400.0);
/// week
pub const WEEK: Conversion = Conversion::linear(604_800.0);

units! {
    /// Reads a [`Duration`] in a specific unit.
    pub trait DurationUnits for Duration {
        /// A duration in seconds.
        seconds = SECOND;
        /// A duration in milliseconds.
        milliseconds = MILLISECOND;
        /// A duration in minutes.
        minutes = MINUTE;
        /// A duration in hours.
        hours = HOUR;
        /// A duration in days.
        days = DAY;
        /// A duration in weeks.
        weeks = WEEK;
    }
}

/// Converts a [`std::time::Duration`] into a [`Duration`].
#[must_use]
pub fn from_std(duration: std::time::Duration) -> Duration {
    seconds(duration.as_secs_f64())
}

/// Conversion of a [`Duration`] into a [`std::time::Duration`].
pub trait ToStdDuration {
    /// Converts into a [`std::time::Duration`].
    ///
    /// Fails if the duration is negative, NaN or too large.
    fn to_std(self) -> Result<std::time::Duration, TryFromFloatSecsError>;
}

impl ToStdDuration for Duration {
    fn to_std(self) -> Result<std::time::Duration, TryFromFloatSecsError> {
        std::time::Duration::try_from_secs_f64(self.in_seconds())
    }
}

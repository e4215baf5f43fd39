//! Sexagesimal quantities: signed angles (degrees, arc minutes, arc seconds)
//! and clock time (hours, minutes, seconds).

use std::{error::Error, str::FromStr};

mod clock;
mod consts;
mod dms;
mod errors;
mod notation;

pub use self::{
    clock::ClockTime,
    dms::Angle,
    errors::{OutOfRange, ParseAngleError},
};

pub(crate) use self::consts::HOURS_IN_DAY;

/// A value split into the whole units (degrees or hours),
/// their sixtieth parts and the sixtieth parts of those.
///
/// Conversion from and into the single decimal number of the whole units
/// is the only thing the rest of the crate relies on.
pub trait Sexagesimal: Copy + FromStr<Err = ParseAngleError> {
    /// The error that can appear when building the value from a decimal number
    type NumErr: Error;

    /// The value as the decimal number of the whole units
    /// (degrees for an angle, hours for a clock time).
    fn to_decimal(self) -> f64;

    /// Split the decimal number of the whole units into the sexagesimal parts.
    ///
    /// # Errors
    /// The value cannot be represented (not finite, too big or
    /// out of the allowed range for the particular type).
    fn from_decimal(value: f64) -> Result<Self, Self::NumErr>;
}

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::{Angle, ClockTime, Sexagesimal};

use super::{check_symmetric, CoordOutOfRange};

/// Position on the celestial sphere independent of the observer and the time
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialCoordinates {
    right_ascension: ClockTime,
    declination: f64,
}

impl EquatorialCoordinates {
    /// Construct the coordinates from the right ascension
    /// and the declination in decimal degrees.
    ///
    /// # Errors
    /// The declination is out of `[-90, 90]` degrees.
    pub fn new(right_ascension: ClockTime, declination: f64) -> Result<Self, CoordOutOfRange> {
        let declination = check_symmetric(declination, 90.0, CoordOutOfRange::Declination)?;
        Ok(Self {
            right_ascension,
            declination,
        })
    }

    /// Construct the coordinates with the sexagesimal declination.
    ///
    /// # Errors
    /// The declination is out of `[-90, 90]` degrees.
    pub fn with_angle(right_ascension: ClockTime, declination: Angle) -> Result<Self, CoordOutOfRange> {
        Self::new(right_ascension, declination.to_decimal())
    }

    /// Right ascension in the range `[0, 24)` hours
    pub const fn right_ascension(self) -> ClockTime {
        self.right_ascension
    }

    /// Declination in decimal degrees
    pub const fn declination(self) -> f64 {
        self.declination
    }
}

impl fmt::Display for EquatorialCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dec = Angle::from_decimal(self.declination).map_err(|_| fmt::Error)?;
        write!(f, "RA {:#}, Dec {dec}", self.right_ascension)
    }
}

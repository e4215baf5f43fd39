use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Observer-local position: altitude above the horizon
/// and azimuth measured from the north through the east.
///
/// Valid only for the particular observer and instant it was computed for.
/// No range checks are made: degenerate transformations produce NaN.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizonCoordinates {
    altitude: f64,
    azimuth: f64,
}

impl HorizonCoordinates {
    /// Construct the coordinates from the decimal degrees
    pub const fn new(altitude: f64, azimuth: f64) -> Self {
        Self { altitude, azimuth }
    }

    /// Altitude in decimal degrees, `[-90, 90]`
    pub const fn altitude(self) -> f64 {
        self.altitude
    }

    /// Azimuth in decimal degrees, `[0, 360)`
    pub const fn azimuth(self) -> f64 {
        self.azimuth
    }

    /// Is the object above (or exactly on) the horizon
    pub fn is_visible(self) -> bool {
        self.altitude >= 0.0
    }

    /// Both angles are finite numbers
    pub fn is_finite(self) -> bool {
        self.altitude.is_finite() && self.azimuth.is_finite()
    }
}

impl fmt::Display for HorizonCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alt {:.6}°, Az {:.6}°", self.altitude, self.azimuth)
    }
}

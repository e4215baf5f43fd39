use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::{Angle, Sexagesimal};

use super::{check_symmetric, CoordOutOfRange};

/// Observer's position on the Earth surface in decimal degrees.
///
/// Latitude is positive to the north, longitude is positive to the east
/// (the western longitudes are negative).
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPosition {
    latitude: f64,
    longitude: f64,
}

impl GeoPosition {
    /// Construct a position from the decimal degrees.
    ///
    /// # Errors
    /// The latitude is out of `[-90, 90]` or the longitude is out of `[-180, 180]`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordOutOfRange> {
        let latitude = check_symmetric(latitude, 90.0, CoordOutOfRange::Latitude)?;
        let longitude = check_symmetric(longitude, 180.0, CoordOutOfRange::Longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Construct a position from the sexagesimal angles.
    ///
    /// # Errors
    /// The same as for [`new`](#method.new).
    pub fn with_angles(latitude: Angle, longitude: Angle) -> Result<Self, CoordOutOfRange> {
        Self::new(latitude.to_decimal(), longitude.to_decimal())
    }

    /// Latitude in decimal degrees (north-positive)
    pub const fn latitude(self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees (east-positive)
    pub const fn longitude(self) -> f64 {
        self.longitude
    }
}

impl TryFrom<(f64, f64)> for GeoPosition {
    type Error = CoordOutOfRange;

    fn try_from(value: (f64, f64)) -> Result<Self, Self::Error> {
        let (lat, lon) = value;
        Self::new(lat, lon)
    }
}

impl fmt::Display for GeoPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            let lat = Angle::from_decimal(self.latitude).map_err(|_| fmt::Error)?;
            let lon = Angle::from_decimal(self.longitude).map_err(|_| fmt::Error)?;
            write!(f, "Lat: {lat}, Long: {lon}")
        } else {
            write!(f, "({:.6}°,{:.6}°)", self.latitude, self.longitude)
        }
    }
}

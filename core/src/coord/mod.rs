use std::{error::Error, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use self::{equatorial::EquatorialCoordinates, geo::GeoPosition, horizon::HorizonCoordinates};

mod equatorial;
mod geo;
mod horizon;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// The coordinate cannot be constructed from the given value
pub enum CoordOutOfRange {
    /// Latitude should be in range [-90..=90]
    Latitude,
    /// Longitude should be in range [-180..=180]
    Longitude,
    /// Declination should be in range [-90..=90]
    Declination,
}

impl fmt::Display for CoordOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Latitude => "Latitude is not in range [-90..=90] degrees",
            Self::Longitude => "Longitude is not in range [-180..=180] degrees",
            Self::Declination => "Declination is not in range [-90..=90] degrees",
        };

        write!(f, "{msg}")
    }
}

impl Error for CoordOutOfRange {}

/// Position of a celestial object in one of the supported frames
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Coordinates {
    /// Fixed on the celestial sphere, independent of the observer
    Equatorial(EquatorialCoordinates),
    /// Local to the observer at some instant
    Horizon(HorizonCoordinates),
}

impl Coordinates {
    /// The equatorial position if any
    pub fn equatorial(self) -> Option<EquatorialCoordinates> {
        match self {
            Self::Equatorial(eq) => Some(eq),
            Self::Horizon(_) => None,
        }
    }

    /// The horizon position if any
    pub fn horizon(self) -> Option<HorizonCoordinates> {
        match self {
            Self::Equatorial(_) => None,
            Self::Horizon(hor) => Some(hor),
        }
    }
}

impl From<EquatorialCoordinates> for Coordinates {
    fn from(eq: EquatorialCoordinates) -> Self {
        Self::Equatorial(eq)
    }
}

impl From<HorizonCoordinates> for Coordinates {
    fn from(hor: HorizonCoordinates) -> Self {
        Self::Horizon(hor)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equatorial(eq) => write!(f, "{eq}"),
            Self::Horizon(hor) => write!(f, "{hor}"),
        }
    }
}

/// Check the value is inside the closed range of `-limit..=limit` degrees
fn check_symmetric(value: f64, limit: f64, err: CoordOutOfRange) -> Result<f64, CoordOutOfRange> {
    if (-limit..=limit).contains(&value) {
        Ok(value)
    } else {
        Err(err)
    }
}

use std::{error::Error, fmt, num::ParseFloatError};

use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    angle::{Angle, ClockTime, ParseAngleError, Sexagesimal},
    coord::{CoordOutOfRange, Coordinates, EquatorialCoordinates, GeoPosition},
    time::{CivilDateTime, TimeError},
    transform,
};

/// A catalog star (or any point-like celestial object)
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Star {
    coordinates: Coordinates,
    magnitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
/// The textual star record is malformed
pub enum ParseStarError {
    /// Bad `hh:mm:ss` right ascension
    RightAscension(ParseAngleError),
    /// Bad `±dd:mm:ss` declination
    Declination(ParseAngleError),
    /// The declination is beyond the poles
    DeclinationRange(CoordOutOfRange),
    /// Bad decimal magnitude
    Magnitude(ParseFloatError),
    /// Not exactly three fields in the record
    FieldCount(usize),
}

impl fmt::Display for ParseStarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid star record: ")?;
        match self {
            Self::RightAscension(inner) => write!(f, "right ascension: {inner}"),
            Self::Declination(inner) => write!(f, "declination: {inner}"),
            Self::DeclinationRange(inner) => write!(f, "{inner}"),
            Self::Magnitude(inner) => write!(f, "magnitude: {inner}"),
            Self::FieldCount(n) => write!(f, "expected 3 fields, found {n}"),
        }
    }
}

impl Error for ParseStarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RightAscension(inner) | Self::Declination(inner) => Some(inner),
            Self::DeclinationRange(inner) => Some(inner),
            Self::Magnitude(inner) => Some(inner),
            Self::FieldCount(_) => None,
        }
    }
}

impl Star {
    /// Construct a star in any frame
    pub fn new(coordinates: impl Into<Coordinates>, magnitude: f64) -> Self {
        Self {
            coordinates: coordinates.into(),
            magnitude,
        }
    }

    /// Parse the star from the catalog fields:
    /// right ascension `hh:mm:ss`, declination `±dd:mm:ss` and the decimal magnitude.
    ///
    /// # Errors
    /// Some field cannot be parsed.
    ///
    /// ```
    /// # use starchart_core::Star;
    /// let sirius = Star::parse("06:45:08.9", "-16:42:58", "-1.46").unwrap();
    /// assert!(sirius.magnitude() < 0.0);
    /// ```
    pub fn parse(
        right_ascension: &str,
        declination: &str,
        magnitude: &str,
    ) -> Result<Self, ParseStarError> {
        let ra: ClockTime = right_ascension
            .parse()
            .map_err(ParseStarError::RightAscension)?;
        let dec = parse_declination(declination)?;
        let magnitude = magnitude
            .trim()
            .parse()
            .map_err(ParseStarError::Magnitude)?;

        let coordinates =
            EquatorialCoordinates::new(ra, dec).map_err(ParseStarError::DeclinationRange)?;
        trace!("Parsed star {coordinates} of magnitude {magnitude}");
        Ok(Self::new(coordinates, magnitude))
    }

    /// Parse the star from the single record of exactly three fields
    /// separated by a comma or by whitespace.
    ///
    /// # Errors
    /// Wrong number of fields or some field cannot be parsed.
    pub fn parse_record(record: &str) -> Result<Self, ParseStarError> {
        let fields = split_fields(record);
        match fields.as_slice() {
            [ra, dec, mag] => Self::parse(ra, dec, mag),
            other => Err(ParseStarError::FieldCount(other.len())),
        }
    }

    /// The position of the star
    pub const fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Apparent magnitude (the lower, the brighter)
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// The same star in the horizon frame of the observer at the civil date-time.
    /// The star already in the horizon frame is returned as is.
    ///
    /// # Errors
    /// The civil time cannot be converted into the universal time.
    pub fn to_horizon(
        &self,
        civil: &CivilDateTime,
        position: GeoPosition,
    ) -> Result<Self, TimeError> {
        match self.coordinates {
            Coordinates::Equatorial(eq) => {
                let horizon = transform::from_equatorial(&eq, civil, position)?;
                Ok(Self::new(horizon, self.magnitude))
            }
            Coordinates::Horizon(_) => Ok(*self),
        }
    }

    /// The same star in the horizon frame for the local sidereal time (decimal hours)
    /// and the observer's latitude (degrees).
    pub fn at_sidereal_time(&self, lst: f64, latitude: f64) -> Self {
        match self.coordinates {
            Coordinates::Equatorial(eq) => Self::new(
                transform::from_sidereal_time(&eq, lst, latitude),
                self.magnitude,
            ),
            Coordinates::Horizon(_) => *self,
        }
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:+.2}m)", self.coordinates, self.magnitude)
    }
}

/// Decimal degrees are taken as is, without rounding through the sexagesimal form
fn parse_declination(declination: &str) -> Result<f64, ParseStarError> {
    if let Ok(value) = declination.trim().parse::<f64>() {
        return Ok(value);
    }

    declination
        .parse::<Angle>()
        .map(Angle::to_decimal)
        .map_err(ParseStarError::Declination)
}

/// Split the record by commas, or by whitespace when there are no commas
pub(crate) fn split_fields(record: &str) -> Vec<&str> {
    if record.contains(',') {
        record.split(',').map(str::trim).collect()
    } else {
        record.split_whitespace().collect()
    }
}

use std::{
    error::Error,
    fmt,
    num::{ParseFloatError, ParseIntError},
};

use crate::enum_trivial_from_impl;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Some part of a sexagesimal value cannot be represented
pub enum OutOfRange {
    /// Too big (or not finite) number of whole degrees
    Degrees,
    /// Clock time should be in range [0..24) hours
    Hours,
    /// Minutes should be in range [0..60)
    Minutes,
    /// Seconds should be in range [0..60)
    Seconds,
    /// Milliseconds should be less than 1000
    Millis,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Degrees => "The value cannot be represented as whole degrees",
            Self::Hours => "Clock time is not in range [0..24) hours",
            Self::Minutes => "The minutes value not in range [0..60)",
            Self::Seconds => "The seconds value not in range [0..60)",
            Self::Millis => "The milliseconds should be less than 1000",
        };

        write!(f, "{msg}")
    }
}

impl Error for OutOfRange {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The string does not contain a valid sexagesimal value
pub enum ParseAngleError {
    /// Valid notation with some part being out of range
    Range(OutOfRange),
    /// Bad seconds or plain decimal value
    Float(ParseFloatError),
    // this variant is practically impossible due to regex digits limitations
    /// Bad whole part
    Int(ParseIntError),
    /// Neither a colon-separated nor a DMS notation
    Notation,
    /// Nothing to parse
    Empty,
}

enum_trivial_from_impl!(OutOfRange => ParseAngleError:Range);
enum_trivial_from_impl!(ParseFloatError => ParseAngleError:Float);
enum_trivial_from_impl!(ParseIntError => ParseAngleError:Int);

impl fmt::Display for ParseAngleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse sexagesimal value: ")?;
        match self {
            Self::Range(inner) => write!(f, "{inner}"),
            Self::Float(inner) => write!(f, "{inner}"),
            Self::Int(inner) => write!(f, "{inner}"),
            Self::Notation => write!(f, "not a colon-separated or Degree-Minute-Second notation"),
            Self::Empty => write!(f, "empty string provided"),
        }
    }
}

impl Error for ParseAngleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Range(inner) => Some(inner),
            Self::Float(inner) => Some(inner),
            Self::Int(inner) => Some(inner),
            Self::Notation | Self::Empty => None,
        }
    }
}

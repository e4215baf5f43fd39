//! The signed angle in the Degree-Minute-Second notation.
//!
//! The magnitude parts are always non-negative while the sign is stored separately,
//! so the angles smaller than a degree keep their sign (e.g. `-0°10′10″`).

use std::{fmt, ops::Neg, str::FromStr};

use num_traits::ToPrimitive;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::{div_mod, StripChar};

use super::{
    consts::{
        ARC_MINUTE_SIGN, ARC_SECOND_PARTS, ARC_SECOND_SIGN, DEGREE_SIGN, MINUTES_IN_DEGREE,
        SECONDS_IN_MINUTE,
    },
    errors::{OutOfRange, ParseAngleError},
    notation::{RE_COLON, RE_UNICODE},
    Sexagesimal,
};

/// Signed sexagesimal angle.
///
/// Minutes and seconds are not range-checked on construction:
/// the decimal value is always `sign * (degrees + minutes/60 + seconds/3600)`.
#[derive(Debug, PartialEq, Default, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Angle {
    degrees: u16,
    minutes: u8,
    seconds: f64,
    is_negative: bool,
}

impl Angle {
    /// Non-negative angle from its parts.
    ///
    /// ```
    /// # use starchart_core::{Angle, Sexagesimal};
    /// let a = Angle::new(24, 13, 18.0);
    /// assert!((a.to_decimal() - 24.221_667).abs() < 1e-6);
    /// ```
    pub const fn new(degrees: u16, minutes: u8, seconds: f64) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
            is_negative: false,
        }
    }

    /// Non-negative angle of the whole number of degrees
    pub const fn whole(degrees: u16) -> Self {
        Self::new(degrees, 0, 0.0)
    }

    /// The same magnitude with the given sign
    pub const fn with_sign(self, is_negative: bool) -> Self {
        Self {
            is_negative,
            ..self
        }
    }

    /// The same magnitude with the negative sign
    pub const fn negative(self) -> Self {
        self.with_sign(true)
    }

    /// The whole degrees of the magnitude
    pub const fn degrees(self) -> u16 {
        self.degrees
    }

    /// The arc minutes of the magnitude
    pub const fn minutes(self) -> u8 {
        self.minutes
    }

    /// The arc seconds (with the fraction) of the magnitude
    pub const fn seconds(self) -> f64 {
        self.seconds
    }

    /// Whether the angle is negative
    pub const fn is_negative(self) -> bool {
        self.is_negative
    }

    /// The decimal value in radians
    pub fn to_radians(self) -> f64 {
        self.to_decimal().to_radians()
    }

    fn with_str_parts(
        whole: &str,
        minutes: Option<&str>,
        seconds: Option<&str>,
    ) -> Result<Self, ParseAngleError> {
        let degrees = whole.parse().map_err(|_| OutOfRange::Degrees)?;
        let minutes = minutes.map_or(Ok(0), str::parse)?;
        let seconds = seconds.map_or(Ok(0.0), str::parse)?;
        if seconds >= f64::from(SECONDS_IN_MINUTE) {
            return Err(OutOfRange::Seconds.into());
        }

        Ok(Self::new(degrees, minutes, seconds))
    }

    fn parse_magnitude(s: &str) -> Result<Self, ParseAngleError> {
        let caps = RE_COLON
            .captures(s)
            .or_else(|| RE_UNICODE.captures(s))
            .ok_or(ParseAngleError::Notation)?;

        Self::with_str_parts(
            &caps["whole"],
            caps.name("min").map(|m| m.as_str()),
            caps.name("sec").map(|m| m.as_str()),
        )
    }
}

impl Sexagesimal for Angle {
    type NumErr = OutOfRange;

    fn to_decimal(self) -> f64 {
        let sign = if self.is_negative { -1.0 } else { 1.0 };
        let magnitude = f64::from(self.degrees)
            + f64::from(self.minutes) / f64::from(MINUTES_IN_DEGREE)
            + self.seconds / (f64::from(MINUTES_IN_DEGREE) * f64::from(SECONDS_IN_MINUTE));
        sign * magnitude
    }

    /// The whole value is rounded to the hundredths of an arc second
    /// before splitting, so the seconds are always below 60.
    fn from_decimal(value: f64) -> Result<Self, Self::NumErr> {
        let parts_in_minute = u64::from(SECONDS_IN_MINUTE) * u64::from(ARC_SECOND_PARTS);
        let parts_in_degree = u64::from(MINUTES_IN_DEGREE) * parts_in_minute;

        let scale = f64::from(MINUTES_IN_DEGREE)
            * f64::from(SECONDS_IN_MINUTE)
            * f64::from(ARC_SECOND_PARTS);
        let total = (value.abs() * scale)
            .round()
            .to_u64()
            .ok_or(OutOfRange::Degrees)?;

        let (degrees, rest) = div_mod(total, parts_in_degree);
        let (minutes, parts) = div_mod(rest, parts_in_minute);

        let degrees = degrees.to_u16().ok_or(OutOfRange::Degrees)?;
        let minutes = minutes.to_u8().ok_or(OutOfRange::Minutes)?;
        let seconds = parts.to_f64().ok_or(OutOfRange::Seconds)? / f64::from(ARC_SECOND_PARTS);

        Ok(Self {
            degrees,
            minutes,
            seconds,
            // the value rounded to zero is never negative
            is_negative: value < 0.0 && total > 0,
        })
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.with_sign(!self.is_negative)
    }
}

impl From<Angle> for f64 {
    fn from(angle: Angle) -> Self {
        angle.to_decimal()
    }
}

impl TryFrom<f64> for Angle {
    type Error = OutOfRange;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl FromStr for Angle {
    type Err = ParseAngleError;

    /// The sign applies to the whole value, not only to the degrees:
    /// `-00:10:10` is the negative angle of 10 arc minutes and 10 arc seconds.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (first, rest) = s.split_first().ok_or(ParseAngleError::Empty)?;
        let (is_negative, magnitude) = match first {
            '-' => (true, rest),
            '+' => (false, rest),
            _ => (false, s.to_string()),
        };

        if magnitude.is_empty() {
            return Err(ParseAngleError::Empty);
        }

        if magnitude.parse::<f64>().is_ok() {
            let value: f64 = s.parse()?;
            return Ok(Self::from_decimal(value)?);
        }

        Self::parse_magnitude(&magnitude).map(|angle| angle.with_sign(is_negative))
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative {
            write!(f, "-")?;
        }

        write!(
            f,
            "{}{}{:02}{}{:05.2}{}",
            self.degrees, DEGREE_SIGN, self.minutes, ARC_MINUTE_SIGN, self.seconds, ARC_SECOND_SIGN
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::assert_close;

    use super::*;

    #[test]
    fn default_is_zero() {
        let zero = Angle::default();
        assert_eq!(zero.degrees(), 0);
        assert_eq!(zero.minutes(), 0);
        assert!(zero.seconds().abs() < f64::EPSILON);
        assert!(!zero.is_negative());
        assert!(zero.to_decimal().abs() < f64::EPSILON);
    }

    #[test]
    fn positive_to_decimal() {
        assert_close(Angle::new(24, 13, 18.0).to_decimal(), 24.221_667, 1e-6);
    }

    #[test]
    fn negative_to_decimal() {
        let angle = Angle::new(13, 4, 10.0).negative();
        assert_close(angle.to_decimal(), -13.069_444_445, 1e-8);
    }

    #[test]
    fn negative_less_than_degree() {
        let angle = Angle::new(0, 10, 10.0).negative();
        assert_close(angle.to_decimal(), -0.169_444_444, 1e-8);

        let back = Angle::from_decimal(angle.to_decimal()).unwrap();
        assert_eq!(back.degrees(), 0);
        assert_eq!(back.minutes(), 10);
        assert_close(back.seconds(), 10.0, 1e-9);
        assert!(back.is_negative());
    }

    #[test]
    fn whole_degrees() {
        let right = Angle::whole(90);
        assert_close(right.to_decimal(), 90.0, f64::EPSILON);
        assert_eq!(right.minutes(), 0);
    }

    #[test]
    fn components_are_not_range_checked() {
        let angle = Angle::new(1, 90, 120.0);
        assert_close(angle.to_decimal(), 1.0 + 1.5 + 120.0 / 3600.0, 1e-12);
    }

    #[test]
    fn from_decimal_parts() {
        let angle = Angle::from_decimal(-13.069_444_445).unwrap();
        assert_eq!(angle.degrees(), 13);
        assert_eq!(angle.minutes(), 4);
        assert_close(angle.seconds(), 10.0, 1e-9);
        assert!(angle.is_negative());
    }

    #[test]
    fn round_trip() {
        for deg in 0..360 {
            for min in 0..60 {
                for sec in [0.0, 0.01, 12.5, 30.0, 59.99] {
                    for is_negative in [false, true] {
                        let angle = Angle::new(deg, min, sec).with_sign(is_negative);
                        let back = Angle::from_decimal(angle.to_decimal()).unwrap();
                        assert_eq!(
                            (back.degrees(), back.minutes()),
                            (deg, min),
                            "{angle} became {back}"
                        );
                        assert_close(back.seconds(), sec, 1e-9);

                        let is_zero = deg == 0 && min == 0 && sec == 0.0;
                        assert_eq!(back.is_negative(), is_negative && !is_zero);
                    }
                }
            }
        }
    }

    #[test]
    fn whole_minutes_do_not_lose_a_minute() {
        let back = Angle::from_decimal(Angle::new(1, 1, 0.0).to_decimal()).unwrap();
        assert_eq!(back.to_string(), "1°01′00.00″");
    }

    #[test]
    fn seconds_rounding_carries_into_minutes() {
        // 10°59′59.999″
        let value = 10.0 + 59.0 / 60.0 + 59.999 / 3600.0;
        let angle = Angle::from_decimal(value).unwrap();
        assert_eq!(angle.degrees(), 11);
        assert_eq!(angle.minutes(), 0);
        assert!(angle.seconds().abs() < f64::EPSILON);
    }

    #[test]
    fn tiny_negative_is_zero() {
        let angle = Angle::from_decimal(-1e-9).unwrap();
        assert!(!angle.is_negative());
        assert_eq!(angle.to_string(), "0°00′00.00″");
    }

    #[test]
    #[should_panic(expected = "Degrees")]
    fn from_nan() {
        let _a = Angle::from_decimal(f64::NAN).unwrap();
    }

    #[test]
    #[should_panic(expected = "Degrees")]
    fn from_too_big() {
        let _a = Angle::try_from(1e9).unwrap();
    }

    #[test]
    fn negation() {
        let angle = -Angle::new(10, 0, 0.0);
        assert!(angle.is_negative());
        assert!(!(-angle).is_negative());
    }

    #[test]
    fn parse_colon_positive() {
        let angle: Angle = "+22:10:00".parse().unwrap();
        assert_close(angle.to_decimal(), 22.166_666_667, 1e-8);
    }

    #[test]
    fn parse_colon_negative() {
        let angle: Angle = "-22:10:00".parse().unwrap();
        assert!(angle.is_negative());
        assert_close(angle.to_decimal(), -22.166_666_667, 1e-8);
    }

    #[test]
    fn parse_sign_applies_to_whole_value() {
        let angle: Angle = "-00:30:00".parse().unwrap();
        assert_eq!(angle.degrees(), 0);
        assert!(angle.is_negative());
        assert_close(angle.to_decimal(), -0.5, 1e-12);
    }

    #[test]
    fn parse_unicode() {
        let angle: Angle = "13°04′10.5″".parse().unwrap();
        assert_eq!(angle.degrees(), 13);
        assert_eq!(angle.minutes(), 4);
        assert_close(angle.seconds(), 10.5, 1e-12);
    }

    #[test]
    fn parse_decimal() {
        let angle: Angle = "-13.5".parse().unwrap();
        assert_eq!(angle.degrees(), 13);
        assert_eq!(angle.minutes(), 30);
        assert!(angle.is_negative());
    }

    #[test]
    #[should_panic(expected = "Notation")]
    fn parse_garbage() {
        let _a: Angle = "12h30m".parse().unwrap();
    }

    #[test]
    #[should_panic(expected = "Empty")]
    fn parse_only_sign() {
        let _a: Angle = "-".parse().unwrap();
    }

    #[test]
    #[should_panic(expected = "Empty")]
    fn parse_empty() {
        let _a: Angle = "  ".parse().unwrap();
    }

    #[test]
    fn display() {
        assert_eq!(Angle::new(13, 4, 10.0).negative().to_string(), "-13°04′10.00″");
        assert_eq!(Angle::new(0, 0, 5.5).to_string(), "0°00′05.50″");
    }
}

//! Time of day (or an hour angle) with the millisecond precision.

use std::{fmt, str::FromStr};

use num_traits::ToPrimitive;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::div_mod;

use super::{
    consts::{HOURS_IN_DAY, MILLIS_IN_SECOND, MINUTES_IN_DEGREE, SECONDS_IN_MINUTE},
    errors::{OutOfRange, ParseAngleError},
    notation::RE_CLOCK,
    Sexagesimal,
};

/// Non-negative sexagesimal time in the range `[0, 24)` hours.
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Default, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockTime {
    hours: u8,
    minutes: u8,
    seconds: u8,
    millis: u16,
}

impl ClockTime {
    const fn millis_in_minute() -> u32 {
        SECONDS_IN_MINUTE as u32 * MILLIS_IN_SECOND as u32
    }

    const fn millis_in_hour() -> u32 {
        MINUTES_IN_DEGREE as u32 * Self::millis_in_minute()
    }

    const fn millis_in_day() -> u32 {
        HOURS_IN_DAY as u32 * Self::millis_in_hour()
    }

    /// Time with the whole number of seconds.
    ///
    /// # Errors
    /// When some part is out of its range (e.g. hours >= 24 or minutes >= 60).
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self, OutOfRange> {
        Self::with_millis(hours, minutes, seconds, 0)
    }

    /// Time with the fraction of a second.
    ///
    /// # Errors
    /// When some part is out of its range (e.g. milliseconds >= 1000).
    pub fn with_millis(
        hours: u8,
        minutes: u8,
        seconds: u8,
        millis: u16,
    ) -> Result<Self, OutOfRange> {
        if hours >= HOURS_IN_DAY {
            return Err(OutOfRange::Hours);
        }

        if minutes >= MINUTES_IN_DEGREE {
            return Err(OutOfRange::Minutes);
        }

        if seconds >= SECONDS_IN_MINUTE {
            return Err(OutOfRange::Seconds);
        }

        if millis >= MILLIS_IN_SECOND {
            return Err(OutOfRange::Millis);
        }

        Ok(Self {
            hours,
            minutes,
            seconds,
            millis,
        })
    }

    fn with_total_millis(total: u32) -> Self {
        let total = total % Self::millis_in_day();
        let (hours, rest) = div_mod(total, Self::millis_in_hour());
        let (minutes, rest) = div_mod(rest, Self::millis_in_minute());
        let (seconds, millis) = div_mod(rest, u32::from(MILLIS_IN_SECOND));

        // every part is less than its modulo, so the narrowing is lossless
        Self {
            hours: hours as u8,
            minutes: minutes as u8,
            seconds: seconds as u8,
            millis: millis as u16,
        }
    }

    fn total_millis(self) -> u32 {
        u32::from(self.hours) * Self::millis_in_hour()
            + u32::from(self.minutes) * Self::millis_in_minute()
            + u32::from(self.seconds) * u32::from(MILLIS_IN_SECOND)
            + u32::from(self.millis)
    }

    /// The whole hours
    pub const fn hours(self) -> u8 {
        self.hours
    }

    /// The whole minutes
    pub const fn minutes(self) -> u8 {
        self.minutes
    }

    /// The whole seconds
    pub const fn seconds(self) -> u8 {
        self.seconds
    }

    /// The milliseconds
    pub const fn millis(self) -> u16 {
        self.millis
    }

    /// The seconds with their fraction
    pub fn fractional_seconds(self) -> f64 {
        f64::from(self.seconds) + f64::from(self.millis) / f64::from(MILLIS_IN_SECOND)
    }

    /// The same time as the angle of the full turn (1 hour is 15 degrees)
    pub fn to_degrees(self) -> f64 {
        self.to_decimal() * 15.0
    }
}

impl Sexagesimal for ClockTime {
    type NumErr = OutOfRange;

    fn to_decimal(self) -> f64 {
        f64::from(self.total_millis()) / f64::from(Self::millis_in_hour())
    }

    /// The value is rounded to the nearest millisecond.
    /// Rounding up to the 24 hours wraps to the midnight.
    fn from_decimal(value: f64) -> Result<Self, Self::NumErr> {
        if !(0.0..f64::from(HOURS_IN_DAY)).contains(&value) {
            return Err(OutOfRange::Hours);
        }

        let total = (value * f64::from(Self::millis_in_hour()))
            .round()
            .to_u32()
            .ok_or(OutOfRange::Hours)?;
        Ok(Self::with_total_millis(total))
    }
}

impl From<ClockTime> for f64 {
    fn from(time: ClockTime) -> Self {
        time.to_decimal()
    }
}

impl TryFrom<f64> for ClockTime {
    type Error = OutOfRange;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl TryFrom<(u8, u8, u8)> for ClockTime {
    type Error = OutOfRange;

    fn try_from(value: (u8, u8, u8)) -> Result<Self, Self::Error> {
        let (hours, minutes, seconds) = value;
        Self::new(hours, minutes, seconds)
    }
}

impl FromStr for ClockTime {
    type Err = ParseAngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseAngleError::Empty);
        }

        let caps = RE_CLOCK.captures(s).ok_or(ParseAngleError::Notation)?;
        let hours = caps["whole"].parse()?;
        let minutes = caps["min"].parse()?;
        let seconds = caps.name("sec").map_or(Ok(0), |m| m.as_str().parse())?;
        let millis = caps.name("frac").map_or(Ok(0), |m| {
            let digits = m.as_str();
            // "5" means 500 ms, "05" means 50 ms
            format!("{digits:0<3}").parse()
        })?;

        Ok(Self::with_millis(hours, minutes, seconds, millis)?)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(
                f,
                "{}h{:02}m{:02}.{:03}s",
                self.hours, self.minutes, self.seconds, self.millis
            )
        } else {
            write!(
                f,
                "{:02}:{:02}:{:02}.{:03}",
                self.hours, self.minutes, self.seconds, self.millis
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::assert_close;

    use super::*;

    #[test]
    fn ordering_is_chronological() {
        let morning = ClockTime::new(9, 59, 59).unwrap();
        let noon = ClockTime::new(12, 0, 0).unwrap();
        assert!(morning < noon);
        assert!(ClockTime::default() < morning);
    }

    #[test]
    fn to_decimal_hours() {
        let time = ClockTime::new(2, 3, 41).unwrap();
        assert_close(time.to_decimal(), 2.061_388_889, 1e-9);
    }

    #[test]
    fn to_degrees() {
        let time = ClockTime::new(6, 0, 0).unwrap();
        assert_close(time.to_degrees(), 90.0, 1e-12);
    }

    #[test]
    fn from_decimal_hours() {
        let time = ClockTime::from_decimal(17.731_666_667).unwrap();
        assert_eq!((time.hours(), time.minutes(), time.seconds()), (17, 43, 54));
        assert_eq!(time.millis(), 0);
    }

    #[test]
    fn from_decimal_keeps_millis() {
        let time = ClockTime::from_decimal(1.0 + 0.5 / 3600.0).unwrap();
        assert_eq!((time.hours(), time.minutes(), time.seconds()), (1, 0, 0));
        assert_eq!(time.millis(), 500);
        assert_close(time.fractional_seconds(), 0.5, 1e-12);
    }

    #[test]
    fn rounding_carries_into_minutes() {
        // 59.9996 seconds rounds up to the whole minute
        let time = ClockTime::from_decimal(3.0 + 59.0 / 60.0 + 59.9996 / 3600.0).unwrap();
        assert_eq!((time.hours(), time.minutes(), time.seconds()), (4, 0, 0));
        assert_eq!(time.millis(), 0);
    }

    #[test]
    fn rounding_to_midnight_wraps() {
        let time = ClockTime::from_decimal(24.0 - 1e-9).unwrap();
        assert_eq!(time, ClockTime::default());
    }

    #[test]
    fn round_trip() {
        let time = ClockTime::with_millis(23, 59, 59, 999).unwrap();
        assert_eq!(ClockTime::from_decimal(time.to_decimal()).unwrap(), time);
    }

    #[test]
    #[should_panic(expected = "Hours")]
    fn from_negative() {
        let _t = ClockTime::from_decimal(-0.1).unwrap();
    }

    #[test]
    #[should_panic(expected = "Hours")]
    fn from_full_day() {
        let _t = ClockTime::try_from(24.0).unwrap();
    }

    #[test]
    #[should_panic(expected = "Hours")]
    fn from_nan() {
        let _t = ClockTime::from_decimal(f64::NAN).unwrap();
    }

    #[test]
    #[should_panic(expected = "Minutes")]
    fn bad_minutes() {
        let _t = ClockTime::try_from((10, 60, 0)).unwrap();
    }

    #[test]
    #[should_panic(expected = "Millis")]
    fn bad_millis() {
        let _t = ClockTime::with_millis(10, 0, 0, 1000).unwrap();
    }

    #[test]
    fn parse_full() {
        let time: ClockTime = "17:43:54".parse().unwrap();
        assert_eq!(time, ClockTime::new(17, 43, 54).unwrap());
    }

    #[test]
    fn parse_fraction() {
        let time: ClockTime = "05:34:32.5".parse().unwrap();
        assert_eq!(time.millis(), 500);

        let time: ClockTime = "05:34:32.05".parse().unwrap();
        assert_eq!(time.millis(), 50);
    }

    #[test]
    fn parse_without_seconds() {
        let time: ClockTime = "6:45".parse().unwrap();
        assert_eq!(time, ClockTime::new(6, 45, 0).unwrap());
    }

    #[test]
    #[should_panic(expected = "Notation")]
    fn parse_too_many_hours() {
        let _t: ClockTime = "24:00:00".parse().unwrap();
    }

    #[test]
    #[should_panic(expected = "Empty")]
    fn parse_empty() {
        let _t: ClockTime = "".parse().unwrap();
    }

    #[test]
    fn display() {
        let time = ClockTime::with_millis(7, 5, 3, 40).unwrap();
        assert_eq!(time.to_string(), "07:05:03.040");
        assert_eq!(format!("{time:#}"), "7h05m03.040s");
    }
}

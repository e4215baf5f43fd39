//! Civil (zoned) date-time handling and the Julian day.

use std::{error::Error, fmt, str::FromStr};

use chrono::{
    DateTime, Datelike, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone, Timelike, Utc,
};
use chrono_tz::Tz;

/// Errors of the civil to universal time conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// Neither a time zone name nor a fixed offset
    UnknownZone(String),
    /// The local time falls into a gap (e.g. when the clocks are moved forward)
    NonexistentLocalTime,
    /// The local time occurs twice (e.g. when the clocks are moved backward)
    AmbiguousLocalTime,
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownZone(zone) => write!(f, "unknown time zone or offset: {zone:?}"),
            Self::NonexistentLocalTime => write!(f, "the local time does not exist in the zone"),
            Self::AmbiguousLocalTime => write!(f, "the local time is ambiguous in the zone"),
        }
    }
}

impl Error for TimeError {}

/// Time zone of a civil date-time
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Zone {
    /// IANA time zone with the daylight saving rules (e.g. `America/New_York`)
    Named(Tz),
    /// Constant offset from the UTC (e.g. `-05:00`)
    Fixed(FixedOffset),
}

impl Zone {
    /// The zero offset
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }
}

impl FromStr for Zone {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "Z" {
            return Ok(Self::utc());
        }

        if let Ok(offset) = s.parse::<FixedOffset>() {
            return Ok(Self::Fixed(offset));
        }

        s.parse::<Tz>()
            .map(Self::Named)
            .map_err(|_| TimeError::UnknownZone(s.to_string()))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(tz) => write!(f, "{}", tz.name()),
            Self::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

/// Local calendar date and clock time together with the zone they are read in
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CivilDateTime {
    local: NaiveDateTime,
    zone: Zone,
}

impl CivilDateTime {
    /// Combine the local date-time with the zone
    pub const fn new(local: NaiveDateTime, zone: Zone) -> Self {
        Self { local, zone }
    }

    /// Combine the local date-time with the zone given by its name or offset.
    ///
    /// # Errors
    /// The zone is not recognized.
    pub fn with_zone_name(local: NaiveDateTime, zone: &str) -> Result<Self, TimeError> {
        Ok(Self::new(local, zone.parse()?))
    }

    /// The local (wall clock) date-time
    pub const fn local(self) -> NaiveDateTime {
        self.local
    }

    /// The zone of the local date-time
    pub const fn zone(self) -> Zone {
        self.zone
    }

    /// The same instant in the universal time.
    ///
    /// # Errors
    /// The local time does not exist or is ambiguous in the zone.
    pub fn to_universal(self) -> Result<DateTime<Utc>, TimeError> {
        match self.zone {
            Zone::Named(tz) => single_instant(tz.from_local_datetime(&self.local)),
            Zone::Fixed(offset) => single_instant(offset.from_local_datetime(&self.local)),
        }
    }
}

fn single_instant<Z: TimeZone>(local: LocalResult<DateTime<Z>>) -> Result<DateTime<Utc>, TimeError> {
    match local {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(..) => Err(TimeError::AmbiguousLocalTime),
        LocalResult::None => Err(TimeError::NonexistentLocalTime),
    }
}

impl<Z: TimeZone> From<DateTime<Z>> for CivilDateTime {
    /// The offset in effect at the instant is kept,
    /// so the conversion back to the universal time never fails.
    fn from(dt: DateTime<Z>) -> Self {
        Self::new(dt.naive_local(), Zone::Fixed(dt.offset().fix()))
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.local, self.zone)
    }
}

/// Convert the zoned civil date-time into the universal time.
///
/// # Errors
/// The local time does not exist or is ambiguous in the zone.
pub fn local_to_universal(civil: &CivilDateTime) -> Result<DateTime<Utc>, TimeError> {
    civil.to_universal()
}

/// The time of day as the decimal hours
pub fn decimal_hours(time: NaiveTime) -> f64 {
    let seconds = f64::from(time.second()) + f64::from(time.nanosecond()) / 1e9;
    f64::from(time.hour()) + f64::from(time.minute()) / 60.0 + seconds / 3600.0
}

/// Julian day of the calendar date and the time of day
/// (Gregorian calendar, Meeus, "Astronomical Algorithms", ch. 7)
fn julian_day_of(date: NaiveDate, hours: f64) -> f64 {
    let (mut year, mut month) = (f64::from(date.year()), f64::from(date.month()));
    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }

    let century = (year / 100.0).floor();
    let gregorian = 2.0 - century + (century / 4.0).floor();

    (365.25 * (year + 4716.0)).floor()
        + (30.6001 * (month + 1.0)).floor()
        + f64::from(date.day())
        + hours / 24.0
        + gregorian
        - 1524.5
}

/// Julian day of the UTC instant.
///
/// ```
/// # use chrono::{TimeZone, Utc};
/// # use starchart_core::time::julian_day;
/// let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
/// assert!((julian_day(&j2000) - 2_451_545.0).abs() < 1e-9);
/// ```
pub fn julian_day(utc: &DateTime<Utc>) -> f64 {
    julian_day_of(utc.date_naive(), decimal_hours(utc.time()))
}

/// Julian day of the UTC midnight starting the date
pub fn julian_day_at_midnight(date: NaiveDate) -> f64 {
    julian_day_of(date, 0.0)
}

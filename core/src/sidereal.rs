//! Conversion of the civil time into the Greenwich and the local sidereal time.
//!
//! All the sidereal times are the decimal hours in the range `[0, 24)`.
//! The low-precision method (Duffett-Smith, "Practical Astronomy with your Calculator")
//! is used: the sidereal time at the start of the year is corrected
//! by the day of the year and the UT time of day.

use chrono::{DateTime, Datelike, Utc};
use log::trace;

use crate::{
    angle::HOURS_IN_DAY,
    time::{decimal_hours, julian_day_at_midnight, local_to_universal, CivilDateTime, TimeError},
    utils::wrap_once,
};

/// Julian day of the 1900 January 0.5 epoch
const JD_1900: f64 = 2_415_020.0;
const DAYS_IN_CENTURY: f64 = 36_525.0;

/// Ratio of the sidereal to the solar time rates
const SIDEREAL_RATE: f64 = 1.002_738;
/// Sidereal hours gained per solar day
const SIDEREAL_GAIN_PER_DAY: f64 = 0.065_709_8;

const DEGREES_IN_HOUR: f64 = 15.0;

fn hours_in_day() -> f64 {
    f64::from(HOURS_IN_DAY)
}

/// The sidereal time correction for the first day of the `year`
fn year_start_offset(year: i32, jd_year_start: f64) -> f64 {
    let centuries = (jd_year_start - JD_1900) / DAYS_IN_CENTURY;
    let correction =
        6.646_065_6 + 2_400.051_262 * centuries + 0.000_025_81 * centuries * centuries;
    hours_in_day() - correction + hours_in_day() * f64::from(year - 1900)
}

/// Greenwich Mean Sidereal Time of the UTC instant.
///
/// Only the calendar date of the instant contributes the day-of-year term;
/// the time of day is accounted separately with the sidereal rate.
///
/// ```
/// # use chrono::{TimeZone, Utc};
/// # use starchart_core::sidereal::solar_to_prime_sidereal_time;
/// let utc = Utc.with_ymd_and_hms(2010, 2, 7, 23, 30, 0).unwrap();
/// assert!((solar_to_prime_sidereal_time(&utc) - 8.698_090_630).abs() < 1e-6);
/// ```
pub fn solar_to_prime_sidereal_time(utc: &DateTime<Utc>) -> f64 {
    let year = utc.year();
    let days = f64::from(utc.ordinal0());
    let jd_year_start = julian_day_at_midnight(utc.date_naive()) - days;

    let b = year_start_offset(year, jd_year_start);
    let t0 = SIDEREAL_GAIN_PER_DAY * days - b;
    let ut = decimal_hours(utc.time());

    let gst = wrap_once(t0 + SIDEREAL_RATE * ut, hours_in_day());
    trace!("GST for {utc}: days={days}, B={b}, UT={ut} -> {gst}");
    gst
}

/// Shift the Greenwich sidereal time to the observer's meridian.
///
/// The longitude is in decimal degrees, positive to the east.
pub fn prime_to_local_sidereal_time(gst: f64, longitude: f64) -> f64 {
    wrap_once(gst + longitude / DEGREES_IN_HOUR, hours_in_day())
}

/// Local Sidereal Time of the civil date-time at the given longitude.
///
/// # Errors
/// The civil time cannot be converted into the universal time.
pub fn local_civilian_to_sidereal_time(
    civil: &CivilDateTime,
    longitude: f64,
) -> Result<f64, TimeError> {
    let utc = local_to_universal(civil)?;
    let gst = solar_to_prime_sidereal_time(&utc);
    let lst = prime_to_local_sidereal_time(gst, longitude);
    trace!("LST for {civil} at {longitude}°: {lst}");
    Ok(lst)
}

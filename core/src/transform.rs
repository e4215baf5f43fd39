//! Equatorial to horizon coordinates transformation.

use log::warn;

use crate::{
    angle::{Sexagesimal, HOURS_IN_DAY},
    coord::{EquatorialCoordinates, GeoPosition, HorizonCoordinates},
    sidereal::local_civilian_to_sidereal_time,
    time::{CivilDateTime, TimeError},
};

const DEGREES_IN_HOUR: f64 = 15.0;
const FULL_TURN_DEG: f64 = 360.0;

/// Below this value of `cos(latitude) * cos(altitude)` the azimuth is undefined.
/// `asin` close to 1 is accurate to ~1e-8 rad only, so a computed zenith
/// never gets the exact zero.
const DEGENERATE_AZIMUTH: f64 = 1e-7;

/// Horizon position of the object with the given declination (degrees)
/// and the hour angle (decimal hours, `[0, 24)`) for the observer at the latitude (degrees).
///
/// The azimuth is measured from the north through the east, in `[0, 360)`.
/// When the azimuth is undefined (the observer on a pole or the object in the zenith,
/// so that `cos(latitude) * cos(altitude)` vanishes) it is NaN and a warning is logged.
/// Within ~0.02″ of the zenith (or the nadir) the azimuth counts as undefined.
pub fn from_hour_angle(declination: f64, hour_angle: f64, latitude: f64) -> HorizonCoordinates {
    let dec = declination.to_radians();
    let lat = latitude.to_radians();
    let ha = (hour_angle * DEGREES_IN_HOUR).to_radians();

    let sin_alt = dec.sin() * lat.sin() + dec.cos() * lat.cos() * ha.cos();
    let alt = sin_alt.clamp(-1.0, 1.0).asin();

    let denominator = lat.cos() * alt.cos();
    let mut azimuth = if denominator.abs() < DEGENERATE_AZIMUTH {
        f64::NAN
    } else {
        // NaN inputs pass through the clamp
        let cos_az = (dec.sin() - lat.sin() * sin_alt) / denominator;
        cos_az.clamp(-1.0, 1.0).acos().to_degrees()
    };

    // arccos gives the eastern half only, the object is west of the meridian
    if ha.sin() > 0.0 {
        azimuth = FULL_TURN_DEG - azimuth;
    }

    if azimuth >= FULL_TURN_DEG {
        azimuth -= FULL_TURN_DEG;
    }

    let horizon = HorizonCoordinates::new(alt.to_degrees(), azimuth);
    if !horizon.is_finite() {
        warn!(
            "Degenerate horizon position for dec={declination}, H={hour_angle}, lat={latitude}: {horizon}"
        );
    }
    horizon
}

/// Hour angle of the object for the local sidereal time (both in decimal hours).
/// The result is brought into `[0, 24)`.
pub fn hour_angle(lst: f64, right_ascension: f64) -> f64 {
    let ha = lst - right_ascension;
    if ha < 0.0 {
        ha + f64::from(HOURS_IN_DAY)
    } else {
        ha
    }
}

/// Horizon position of the object at the local sidereal time (decimal hours).
///
/// Allows to transform many objects with the single sidereal time computation.
pub fn from_sidereal_time(
    coordinates: &EquatorialCoordinates,
    lst: f64,
    latitude: f64,
) -> HorizonCoordinates {
    let ha = hour_angle(lst, coordinates.right_ascension().to_decimal());
    from_hour_angle(coordinates.declination(), ha, latitude)
}

/// Horizon position of the object for the observer at the civil date-time.
///
/// # Errors
/// The civil time cannot be converted into the universal time.
pub fn from_equatorial(
    coordinates: &EquatorialCoordinates,
    civil: &CivilDateTime,
    position: GeoPosition,
) -> Result<HorizonCoordinates, TimeError> {
    let lst = local_civilian_to_sidereal_time(civil, position.longitude())?;
    Ok(from_sidereal_time(coordinates, lst, position.latitude()))
}

//! Projection of a whole catalog onto the star chart
//! with the brightness-dependent presentation attributes.

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    coord::{GeoPosition, HorizonCoordinates},
    projection::{to_stereographic, PlanePoint},
    sidereal::local_civilian_to_sidereal_time,
    star::Star,
    time::{CivilDateTime, TimeError},
};

/// Power-law mapping of a star magnitude onto some visual effect (size, opacity):
///
/// `effect(m) = min + factor * (1 - (m - min_magnitude) / (max_magnitude - min_magnitude)) ^ exponent`
///
/// The magnitude is clamped into `[min_magnitude, max_magnitude]`,
/// so the brightest stars get `min + factor` and the faintest get `min`.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MagnitudeScale {
    /// Effect of the faintest star
    pub min: f64,
    /// Additional effect of the brightest star
    pub factor: f64,
    /// Curvature of the mapping
    pub exponent: f64,
    /// Magnitude of the brightest star
    pub min_magnitude: f64,
    /// Magnitude of the faintest star
    pub max_magnitude: f64,
}

impl Default for MagnitudeScale {
    fn default() -> Self {
        Self {
            min: 0.5,
            factor: 3.0,
            exponent: 1.5,
            min_magnitude: -1.5,
            max_magnitude: 6.5,
        }
    }
}

impl MagnitudeScale {
    /// The effect for the star of the given magnitude
    pub fn effect(&self, magnitude: f64) -> f64 {
        let span = self.max_magnitude - self.min_magnitude;
        if span <= 0.0 {
            // all the stars are equally bright
            return self.min + self.factor;
        }

        let relative = ((magnitude - self.min_magnitude) / span).clamp(0.0, 1.0);
        self.min + self.factor * (1.0 - relative).powf(self.exponent)
    }
}

/// Settings of the chart projection
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChartOptions {
    /// Stars lower than that (degrees) are not charted
    pub min_altitude: f64,
    /// Mapping of the magnitude onto the marker size
    pub size: MagnitudeScale,
    /// Mapping of the magnitude onto the marker opacity
    pub opacity: MagnitudeScale,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            min_altitude: 0.0,
            size: MagnitudeScale::default(),
            opacity: MagnitudeScale {
                min: 0.2,
                factor: 0.8,
                exponent: 1.0,
                ..MagnitudeScale::default()
            },
        }
    }
}

/// The star ready to be rendered
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChartPoint {
    /// Position on the chart plane
    pub point: PlanePoint,
    /// Position on the observer's sky
    pub horizon: HorizonCoordinates,
    /// Apparent magnitude
    pub magnitude: f64,
    /// Marker size
    pub size: f64,
    /// Marker opacity
    pub opacity: f64,
}

impl ChartPoint {
    fn new(horizon: HorizonCoordinates, magnitude: f64, options: &ChartOptions) -> Self {
        Self {
            point: to_stereographic(horizon),
            horizon,
            magnitude,
            size: options.size.effect(magnitude),
            opacity: options.opacity.effect(magnitude),
        }
    }
}

/// Chart the stars seen by the observer at the civil date-time.
///
/// The sidereal time is computed once for the whole batch.
/// Stars below the [`min_altitude`](ChartOptions::min_altitude)
/// (or with degenerate coordinates) are dropped.
///
/// # Errors
/// The civil time cannot be converted into the universal time.
pub fn project_catalog(
    stars: &[Star],
    civil: &CivilDateTime,
    position: GeoPosition,
    options: &ChartOptions,
) -> Result<Vec<ChartPoint>, TimeError> {
    let lst = local_civilian_to_sidereal_time(civil, position.longitude())?;

    let points: Vec<_> = stars
        .iter()
        .filter_map(|star| {
            let horizon = star
                .at_sidereal_time(lst, position.latitude())
                .coordinates()
                .horizon()?;
            (horizon.is_finite() && horizon.altitude() >= options.min_altitude)
                .then(|| ChartPoint::new(horizon, star.magnitude(), options))
        })
        .collect();

    debug!(
        "Charted {} of {} stars for {civil} at {position}",
        points.len(),
        stars.len()
    );
    Ok(points)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::{
        angle::ClockTime, coord::EquatorialCoordinates, test_utils::assert_close,
    };

    use super::*;

    #[test]
    fn brightest_and_faintest() {
        let scale = MagnitudeScale::default();
        assert_close(scale.effect(-1.5), 3.5, 1e-12);
        assert_close(scale.effect(6.5), 0.5, 1e-12);
    }

    #[test]
    fn out_of_range_magnitudes_are_clamped() {
        let scale = MagnitudeScale::default();
        assert_close(scale.effect(-4.0), scale.effect(-1.5), 1e-12);
        assert_close(scale.effect(10.0), scale.effect(6.5), 1e-12);
    }

    #[test]
    fn power_law() {
        let scale = MagnitudeScale {
            min: 1.0,
            factor: 4.0,
            exponent: 2.0,
            min_magnitude: 0.0,
            max_magnitude: 4.0,
        };
        // 1 + 4 * (1 - 0.5)^2
        assert_close(scale.effect(2.0), 2.0, 1e-12);
    }

    #[test]
    fn brighter_is_bigger() {
        let scale = MagnitudeScale::default();
        assert!(scale.effect(0.0) > scale.effect(1.0));
        assert!(scale.effect(1.0) > scale.effect(5.0));
    }

    #[test]
    fn degenerate_span() {
        let scale = MagnitudeScale {
            max_magnitude: 2.0,
            min_magnitude: 2.0,
            ..MagnitudeScale::default()
        };
        assert_close(scale.effect(2.0), 3.5, 1e-12);
    }

    #[test]
    fn project_visible_only() {
        let civil = CivilDateTime::from(Utc.with_ymd_and_hms(2016, 1, 22, 2, 30, 0).unwrap());
        let position = GeoPosition::new(38.0, -78.0).unwrap();
        // LST is ~5.36h there: a star on the meridian is high up, the opposite one is below
        let high = EquatorialCoordinates::new(ClockTime::new(5, 21, 34).unwrap(), 38.0).unwrap();
        let below = EquatorialCoordinates::new(ClockTime::new(17, 43, 54).unwrap(), -22.166_667)
            .unwrap();
        let stars = [
            Star::new(high, 1.0),
            Star::new(below, 0.0),
            Star::new(HorizonCoordinates::new(30.0, 90.0), 2.0),
        ];

        let points = project_catalog(&stars, &civil, position, &ChartOptions::default()).unwrap();
        assert_eq!(points.len(), 2);

        let zenith = &points[0];
        assert_close(zenith.horizon.altitude(), 90.0, 0.01);
        assert!(zenith.point.radius() < 1e-3);
        assert_close(zenith.size, MagnitudeScale::default().effect(1.0), 1e-12);

        let east = &points[1];
        assert!(east.point.x < 0.0);
        assert_close(east.magnitude, 2.0, f64::EPSILON);
    }

    #[test]
    fn undefined_azimuth_is_dropped() {
        let civil = CivilDateTime::from(Utc.with_ymd_and_hms(2016, 1, 22, 2, 30, 0).unwrap());
        let position = GeoPosition::new(38.0, -78.0).unwrap();
        let stars = [
            Star::new(HorizonCoordinates::new(90.0, f64::NAN), 1.0),
            Star::new(HorizonCoordinates::new(45.0, 10.0), 1.0),
        ];

        let points = project_catalog(&stars, &civil, position, &ChartOptions::default()).unwrap();
        assert_eq!(points.len(), 1);
        assert!(points[0].point.radius().is_finite());
    }

    #[test]
    fn altitude_threshold() {
        let civil = CivilDateTime::from(Utc.with_ymd_and_hms(2016, 1, 22, 2, 30, 0).unwrap());
        let position = GeoPosition::new(38.0, -78.0).unwrap();
        let stars = [Star::new(HorizonCoordinates::new(5.0, 180.0), 3.0)];
        let options = ChartOptions {
            min_altitude: 10.0,
            ..ChartOptions::default()
        };

        assert!(project_catalog(&stars, &civil, position, &options)
            .unwrap()
            .is_empty());
    }
}

//! Mapping of the horizon coordinates onto the plane of a star chart.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coord::HorizonCoordinates;

/// Point on the unit sphere of the local sky:
/// `x` points to the east, `y` to the north and `z` to the zenith
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CartesianVector {
    /// East component
    pub x: f64,
    /// North component
    pub y: f64,
    /// Zenith component
    pub z: f64,
}

/// Point on the chart plane; the zenith is at the origin
/// and the horizon is the unit circle
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanePoint {
    /// Horizontal offset (the east is on the left)
    pub x: f64,
    /// Vertical offset (the north is on the top)
    pub y: f64,
}

impl PlanePoint {
    /// Distance from the chart center
    pub fn radius(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl fmt::Display for PlanePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

/// The unit vector pointing to the horizon position
pub fn to_cartesian_unit_vector(horizon: HorizonCoordinates) -> CartesianVector {
    let alt = horizon.altitude().to_radians();
    let az = horizon.azimuth().to_radians();

    CartesianVector {
        x: alt.cos() * az.sin(),
        y: alt.cos() * az.cos(),
        z: alt.sin(),
    }
}

/// Stereographic projection from the nadir onto the horizon plane,
/// mirrored so that the chart is seen from inside the celestial sphere.
///
/// The nadir itself (altitude of -90 degrees) projects to infinity.
///
/// ```
/// # use starchart_core::{projection::to_stereographic, HorizonCoordinates};
/// let zenith = to_stereographic(HorizonCoordinates::new(90.0, 0.0));
/// assert!(zenith.radius() < 1e-12);
/// ```
pub fn to_stereographic(horizon: HorizonCoordinates) -> PlanePoint {
    let CartesianVector { x, y, z } = to_cartesian_unit_vector(horizon);
    let scale = z + 1.0;

    PlanePoint {
        x: -x / scale,
        y: y / scale,
    }
}

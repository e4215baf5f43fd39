//! Positional astronomy primitives: angles, sidereal time,
//! equatorial to horizon transformation and star chart projection.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use starchart_core::{
//!     transform, CivilDateTime, ClockTime, EquatorialCoordinates, GeoPosition,
//! };
//!
//! let antares = EquatorialCoordinates::new(ClockTime::new(16, 29, 24).unwrap(), -26.432).unwrap();
//! let at = CivilDateTime::from(Utc.with_ymd_and_hms(2016, 6, 1, 4, 0, 0).unwrap());
//! let observer = GeoPosition::new(38.0, -78.0).unwrap();
//!
//! let sky = transform::from_equatorial(&antares, &at, observer).unwrap();
//! assert!((0.0..360.0).contains(&sky.azimuth()));
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use angle::{Angle, ClockTime, OutOfRange, ParseAngleError, Sexagesimal};
pub use catalog::{load_catalog, parse_catalog, CatalogError};
pub use chart::{project_catalog, ChartOptions, ChartPoint, MagnitudeScale};
pub use coord::{
    CoordOutOfRange, Coordinates, EquatorialCoordinates, GeoPosition, HorizonCoordinates,
};
pub use projection::{CartesianVector, PlanePoint};
pub use star::{ParseStarError, Star};
pub use time::{CivilDateTime, TimeError, Zone};

mod angle;
mod catalog;
mod chart;
mod coord;
pub mod projection;
pub mod sidereal;
mod star;
pub mod time;
pub mod transform;
mod utils;

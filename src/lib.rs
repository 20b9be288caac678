//! # Solar Geometry Library
//!
//! Solar position and interval-averaged elevation angles from time, latitude, and longitude.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library provides two complementary operations:
//! - **Solar position** ([`sunae`]): elevation angle, azimuth, and sun-earth
//!   distance from the Astronomical Almanac's low-precision solar ephemeris
//!   (~0.01°, years 1950-2050), with an optional atmospheric refraction
//!   correction.
//! - **Interval averaging** ([`average`]): the effective elevation angle over
//!   each interval of a uniformly spaced time series, computed by averaging
//!   the sine of the elevation on a fine 5-minute grid and clamping
//!   below-horizon results to zero.
//!
//! ## Features
//!
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Stateless, immutable data structures; identical inputs always produce identical outputs
//! - Continuous formulas throughout: poles, the equator, and the exact horizon need no special cases
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API; together with `std`,
//!   enables the [`average`] module
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! ## References
//!
//! - Michalsky, J. (1988). The Astronomical Almanac's algorithm for approximate
//!   solar position (1950-2050). Solar Energy, 40(3), 227-235.
//!   DOI: <https://doi.org/10.1016/0038-092X(88)90045-X>
//!
//! ## Quick Start
//!
//! ### Solar Position (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use solar_geometry::sunae;
//! use chrono::{DateTime, FixedOffset};
//!
//! // Sun position for Vienna at noon
//! let datetime = "2015-06-21T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let position = sunae::solar_position(
//!     datetime,
//!     48.21,   // Vienna latitude
//!     16.37,   // Vienna longitude
//!     true,    // refraction correction
//! ).unwrap();
//!
//! println!("Azimuth: {:.3}°", position.azimuth());
//! println!("Elevation: {:.3}°", position.elevation_angle());
//! println!("Distance: {:.5} AU", position.sun_distance());
//! # }
//! ```
//!
//! ### Solar Position (numeric API, no chrono)
//! ```rust
//! use solar_geometry::{sunae, time::UtcInstant};
//!
//! // 2015-09-27 20:00 UTC is day 270, hour 20 (works in both std and no_std)
//! let instant = UtcInstant::from_components(2015, 270, 20.0).unwrap();
//! let position = sunae::solar_position_from_instant(
//!     instant,
//!     47.6097,   // Seattle latitude
//!     -122.3331, // Seattle longitude
//!     true,
//! ).unwrap();
//!
//! println!("Azimuth: {:.3}°", position.azimuth());
//! println!("Elevation: {:.3}°", position.elevation_angle());
//! ```
//!
//! ### Interval-Averaged Elevation (requires std + chrono)
//! ```rust
//! # #[cfg(all(feature = "std", feature = "chrono"))] {
//! use chrono::{Duration, NaiveDate};
//! use solar_geometry::{average, AveragingReference};
//!
//! // Hourly series labeled by interval end, already in UTC
//! let start = NaiveDate::from_ymd_opt(2015, 9, 27)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//! let times: Vec<_> = (0..24).map(|i| start + Duration::hours(i)).collect();
//!
//! let averaged = average::average_elevation(
//!     &times,
//!     47.6097,
//!     -122.3331,
//!     0.0,
//!     AveragingReference::End,
//! ).unwrap();
//!
//! for interval in &averaged {
//!     println!("{}: {:.2}°", interval.timestamp(), interval.elevation_angle());
//! }
//! # }
//! ```
//!
//! ## Coordinate System
//!
//! - **Latitude**: north positive, -90° to +90°
//! - **Longitude**: east positive, -180° to +180°
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Elevation angle**: 0° = horizon, 90° = directly overhead (-90° to +90°)
//! - **Sun-earth distance**: astronomical units

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::types::{AveragingReference, IntervalElevation, SolarPosition};

// Algorithm modules
#[cfg(all(feature = "std", feature = "chrono"))]
pub mod average;
pub mod sunae;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};

    #[test]
    fn test_basic_sunae_calculation() {
        // Test with different timezone types
        let datetime_fixed = "2015-09-27T13:00:00-07:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let datetime_utc = Utc.with_ymd_and_hms(2015, 9, 27, 20, 0, 0).unwrap();

        let position1 =
            sunae::solar_position(datetime_fixed, 47.6097, -122.3331, true).unwrap();
        let position2 = sunae::solar_position(datetime_utc, 47.6097, -122.3331, true).unwrap();

        // Both should produce identical results
        assert!((position1.azimuth() - position2.azimuth()).abs() < 1e-10);
        assert!((position1.elevation_angle() - position2.elevation_angle()).abs() < 1e-10);
        assert!((position1.sun_distance() - position2.sun_distance()).abs() < 1e-10);

        assert!(position1.azimuth() >= 0.0);
        assert!(position1.azimuth() < 360.0);
        assert!(position1.elevation_angle() >= -90.0);
        assert!(position1.elevation_angle() <= 90.0);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_basic_average_calculation() {
        use chrono::NaiveDate;

        let start = NaiveDate::from_ymd_opt(2015, 9, 27)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let times: Vec<_> = (0..8).map(|i| start + chrono::Duration::hours(3 * i)).collect();

        let averaged = average::average_elevation(
            &times,
            47.6097,
            -122.3331,
            0.0,
            AveragingReference::Beginning,
        )
        .unwrap();

        assert_eq!(averaged.len(), times.len());
        for interval in &averaged {
            assert!(interval.elevation_angle() >= 0.0);
            assert!(interval.elevation_angle() <= 90.0);
        }
    }
}

//! Core data types for solar geometry calculations.

use crate::error::{check_azimuth, check_elevation_angle, check_sun_distance};
use crate::{Error, Result};
use core::fmt;
use core::str::FromStr;

/// Solar position in topocentric coordinates.
///
/// Represents the sun's position as seen from a specific point on Earth's surface.
/// Uses the standard astronomical coordinate system where:
/// - Azimuth: 0° = North, measured clockwise to 360°
/// - Elevation angle: 90° = directly overhead, 0° = horizon, -90° = nadir
///
/// The sun-earth distance is carried alongside the angles, in astronomical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Azimuth angle in degrees (0° to 360°, 0° = North, increasing clockwise)
    azimuth: f64,
    /// Elevation angle in degrees (-90° to +90°, 0° = horizon)
    elevation: f64,
    /// Sun-earth distance in astronomical units
    sun_distance: f64,
}

impl SolarPosition {
    /// Creates a new solar position from azimuth, elevation angle, and sun-earth distance.
    ///
    /// The azimuth is normalized to [0, 360).
    ///
    /// # Errors
    /// Returns error if any component is non-finite, the elevation is outside
    /// -90 to +90 degrees, or the distance is not positive.
    ///
    /// # Example
    /// ```
    /// # use solar_geometry::types::SolarPosition;
    /// let position = SolarPosition::new(180.0, 30.0, 1.0).unwrap();
    /// assert_eq!(position.azimuth(), 180.0);
    /// assert_eq!(position.elevation_angle(), 30.0);
    /// assert_eq!(position.zenith_angle(), 60.0);
    /// assert_eq!(position.sun_distance(), 1.0);
    /// ```
    pub fn new(azimuth: f64, elevation: f64, sun_distance: f64) -> Result<Self> {
        let normalized_azimuth = check_azimuth(azimuth)?;
        let validated_elevation = check_elevation_angle(elevation)?;
        let validated_distance = check_sun_distance(sun_distance)?;

        Ok(Self {
            azimuth: normalized_azimuth,
            elevation: validated_elevation,
            sun_distance: validated_distance,
        })
    }

    /// Gets the azimuth angle in degrees (0° to 360°, 0° = North, increasing clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the elevation angle in degrees (-90° to +90°, 0° = horizon).
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        self.elevation
    }

    /// Gets the zenith angle in degrees.
    ///
    /// This is the complement of the elevation angle: zenith = 90° - elevation.
    #[must_use]
    pub fn zenith_angle(&self) -> f64 {
        90.0 - self.elevation
    }

    /// Gets the sun-earth distance in astronomical units.
    #[must_use]
    pub const fn sun_distance(&self) -> f64 {
        self.sun_distance
    }

    /// Checks if the sun is above the horizon (elevation angle > 0°).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.elevation > 0.0
    }

    /// Checks if the sun is at or below the horizon (elevation angle ≤ 0°).
    #[must_use]
    pub fn is_sun_down(&self) -> bool {
        self.elevation <= 0.0
    }
}

/// How averaged values relate to their timestamp within an averaging interval.
///
/// Time series of averaged quantities label each interval with a single
/// timestamp; the label can mark the beginning, middle, or end of the
/// interval. Parsed from the literals `BEG`, `MID` and `END`.
///
/// # Example
/// ```
/// # use solar_geometry::types::AveragingReference;
/// let reference: AveragingReference = "MID".parse().unwrap();
/// assert_eq!(reference, AveragingReference::Middle);
/// assert_eq!(reference.as_str(), "MID");
///
/// assert!("FOO".parse::<AveragingReference>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AveragingReference {
    /// The timestamp marks the beginning of the averaging interval.
    Beginning,
    /// The timestamp marks the middle of the averaging interval.
    Middle,
    /// The timestamp marks the end of the averaging interval.
    End,
}

impl AveragingReference {
    /// Gets the literal string form of this reference (`BEG`, `MID` or `END`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginning => "BEG",
            Self::Middle => "MID",
            Self::End => "END",
        }
    }
}

impl FromStr for AveragingReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "BEG" => Ok(Self::Beginning),
            "MID" => Ok(Self::Middle),
            "END" => Ok(Self::End),
            _ => Err(Error::invalid_reference()),
        }
    }
}

impl fmt::Display for AveragingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An interval-averaged elevation angle.
///
/// The timestamp marks the *beginning* of the averaging interval, and the
/// elevation is the effective (sine-space averaged) elevation angle over
/// that interval in degrees, clamped to [0, 90].
///
/// Generic over the timestamp type so the same result shape serves both
/// naive and timezone-aware time series.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalElevation<T> {
    timestamp: T,
    elevation: f64,
}

impl<T> IntervalElevation<T> {
    pub(crate) const fn new(timestamp: T, elevation: f64) -> Self {
        Self {
            timestamp,
            elevation,
        }
    }

    /// Gets the timestamp of the beginning of the averaging interval.
    #[must_use]
    pub const fn timestamp(&self) -> &T {
        &self.timestamp
    }

    /// Gets the averaged elevation angle in degrees (0 to 90).
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        self.elevation
    }
}

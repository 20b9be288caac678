//! Error types for the solar geometry library.

use crate::math::normalize_degrees_0_to_360;
use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during solar geometry calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid day-of-year value (must be between 1 and 366).
    InvalidDayOfYear {
        /// The invalid day-of-year value provided.
        value: u32,
    },
    /// Invalid decimal hour value (must be finite).
    InvalidHour {
        /// The invalid hour value provided.
        value: f64,
    },
    /// Unrecognized averaging reference literal (must be `BEG`, `MID` or `END`).
    InvalidReference,
    /// Malformed input time series for interval averaging.
    InvalidTimeSeries {
        /// Description of the time series constraint violation.
        message: &'static str,
    },
    /// Numerical computation error (e.g., a non-finite intermediate value).
    ComputationError {
        /// Description of the computation error.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidDayOfYear { value } => {
                write!(f, "invalid day of year {value} (must be between 1 and 366)")
            }
            Self::InvalidHour { value } => {
                write!(f, "invalid decimal hour {value} (must be finite)")
            }
            Self::InvalidReference => {
                write!(
                    f,
                    "unrecognized averaging reference (must be one of BEG, MID, END)"
                )
            }
            Self::InvalidTimeSeries { message } => {
                write!(f, "invalid time series: {message}")
            }
            Self::ComputationError { message } => {
                write!(f, "computation error: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid day-of-year error.
    #[must_use]
    pub const fn invalid_day_of_year(value: u32) -> Self {
        Self::InvalidDayOfYear { value }
    }

    /// Creates an invalid hour error.
    #[must_use]
    pub const fn invalid_hour(value: f64) -> Self {
        Self::InvalidHour { value }
    }

    /// Creates an invalid averaging reference error.
    #[must_use]
    pub const fn invalid_reference() -> Self {
        Self::InvalidReference
    }

    /// Creates an invalid time series error.
    #[must_use]
    pub const fn invalid_time_series(message: &'static str) -> Self {
        Self::InvalidTimeSeries { message }
    }

    /// Creates a computation error.
    #[must_use]
    pub const fn computation_error(message: &'static str) -> Self {
        Self::ComputationError { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a day-of-year value (1 to 366, day 366 covering leap years).
///
/// # Errors
/// Returns `InvalidDayOfYear` if the value is outside 1 to 366.
pub fn check_day_of_year(day_of_year: u32) -> Result<()> {
    if !(1..=366).contains(&day_of_year) {
        return Err(Error::invalid_day_of_year(day_of_year));
    }
    Ok(())
}

/// Validates a decimal hour value.
///
/// Hours outside [0, 24) are accepted; they roll into adjacent days.
///
/// # Errors
/// Returns `InvalidHour` if the value is not finite.
pub fn check_hour(hour: f64) -> Result<()> {
    if !hour.is_finite() {
        return Err(Error::invalid_hour(hour));
    }
    Ok(())
}

/// Validates and normalizes an azimuth angle to the range [0, 360) degrees.
///
/// # Errors
/// Returns `ComputationError` if azimuth is not finite.
pub fn check_azimuth(azimuth: f64) -> Result<f64> {
    if !azimuth.is_finite() {
        return Err(Error::computation_error("azimuth is not finite"));
    }
    Ok(normalize_degrees_0_to_360(azimuth))
}

/// Validates an elevation angle to be within the range [-90, +90] degrees.
///
/// # Errors
/// Returns `ComputationError` if the angle is not finite or outside the valid range.
pub fn check_elevation_angle(elevation: f64) -> Result<f64> {
    if !elevation.is_finite() {
        return Err(Error::computation_error("elevation angle is not finite"));
    }
    if !(-90.0..=90.0).contains(&elevation) {
        return Err(Error::computation_error(
            "elevation angle must be between -90° and +90°",
        ));
    }
    Ok(elevation)
}

/// Validates a sun-earth distance to be finite and positive.
///
/// # Errors
/// Returns `ComputationError` for non-finite or non-positive distances.
pub fn check_sun_distance(distance: f64) -> Result<f64> {
    if !distance.is_finite() || distance <= 0.0 {
        return Err(Error::computation_error(
            "sun-earth distance must be finite and positive",
        ));
    }
    Ok(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(47.6097).is_ok());

        assert!(check_latitude(91.0).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(122.3331).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(-181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
    }

    #[test]
    fn test_day_of_year_validation() {
        assert!(check_day_of_year(1).is_ok());
        assert!(check_day_of_year(270).is_ok());
        assert!(check_day_of_year(366).is_ok());

        assert!(check_day_of_year(0).is_err());
        assert!(check_day_of_year(367).is_err());
    }

    #[test]
    fn test_hour_validation() {
        assert!(check_hour(0.0).is_ok());
        assert!(check_hour(23.99).is_ok());
        assert!(check_hour(-3.0).is_ok()); // rolls into the previous day
        assert!(check_hour(32.0).is_ok()); // rolls into the next day

        assert!(check_hour(f64::NAN).is_err());
        assert!(check_hour(f64::INFINITY).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_latitude(95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );

        let err = Error::invalid_reference();
        assert_eq!(
            err.to_string(),
            "unrecognized averaging reference (must be one of BEG, MID, END)"
        );

        let err = Error::invalid_time_series("fewer than two timestamps");
        assert_eq!(
            err.to_string(),
            "invalid time series: fewer than two timestamps"
        );
    }

    #[test]
    fn test_check_azimuth() {
        assert!(check_azimuth(0.0).is_ok());
        assert!(check_azimuth(359.9).is_ok());

        // Check normalization
        assert_eq!(check_azimuth(-90.0).unwrap(), 270.0);
        assert_eq!(check_azimuth(450.0).unwrap(), 90.0);

        assert!(check_azimuth(f64::NAN).is_err());
        assert!(check_azimuth(f64::INFINITY).is_err());
    }

    #[test]
    fn test_check_elevation_angle() {
        assert!(check_elevation_angle(0.0).is_ok());
        assert!(check_elevation_angle(90.0).is_ok());
        assert!(check_elevation_angle(-90.0).is_ok());

        assert!(check_elevation_angle(90.1).is_err());
        assert!(check_elevation_angle(-90.1).is_err());
        assert!(check_elevation_angle(f64::NAN).is_err());
    }

    #[test]
    fn test_check_sun_distance() {
        assert!(check_sun_distance(1.0).is_ok());
        assert!(check_sun_distance(0.9833).is_ok());

        assert!(check_sun_distance(0.0).is_err());
        assert!(check_sun_distance(-1.0).is_err());
        assert!(check_sun_distance(f64::NAN).is_err());
    }
}

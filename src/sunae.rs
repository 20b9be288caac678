//! Low-precision solar position algorithm (SUNAE).
//!
//! This follows the solar ephemeris of the Astronomical Almanac as described
//! in Michalsky, 'The Astronomical Almanac's algorithm for approximate solar
//! position (1950-2050)', Solar Energy 40 (1988) pp. 227-235.
//!
//! The algorithm is designed for the years 1950 to 2050, with a maximum error
//! of about 0.01 degrees. Elevation and azimuth come from the spherical
//! triangle between declination, latitude, and hour angle; the sun-earth
//! distance comes from the orbital eccentricity series. An optional empirical
//! refraction correction models atmospheric bending near the horizon.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::error::check_coordinates;
use crate::math::{
    PI, asin, atan2, cos, degrees_to_radians, normalize_degrees_0_to_360, normalize_hours_0_to_24,
    radians_to_degrees, sin, tan,
};
use crate::time::UtcInstant;
use crate::{Result, SolarPosition};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Calculate solar position from a timezone-aware datetime.
///
/// The datetime is converted to UTC internally.
///
/// # Arguments
/// * `datetime` - Timezone-aware date and time
/// * `latitude` - Observer latitude in degrees (-90 to +90, north positive)
/// * `longitude` - Observer longitude in degrees (-180 to +180, east positive)
/// * `refraction` - Whether to apply the atmospheric refraction correction to the elevation
///
/// # Returns
/// Solar position or error
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude outside ±180°)
///
/// # Example
/// ```rust
/// # #[cfg(feature = "chrono")] {
/// use solar_geometry::sunae;
/// use chrono::{DateTime, FixedOffset};
///
/// let datetime = "2015-06-21T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let position = sunae::solar_position(
///     datetime,
///     48.21,     // Vienna latitude
///     16.37,     // Vienna longitude
///     true,      // refraction correction
/// ).unwrap();
///
/// assert!(position.is_sun_up());
/// println!("Azimuth: {:.3}°", position.azimuth());
/// println!("Elevation: {:.3}°", position.elevation_angle());
/// # }
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn solar_position<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    refraction: bool,
) -> Result<SolarPosition> {
    solar_position_from_instant(
        UtcInstant::from_datetime(&datetime),
        latitude,
        longitude,
        refraction,
    )
}

/// Calculate solar position from year, day-of-year, and decimal UTC hour.
///
/// Core implementation for `no_std` compatibility (no chrono dependency).
///
/// # Arguments
/// * `instant` - Instant in UTC (year, day-of-year, decimal hour)
/// * `latitude` - Observer latitude in degrees (-90 to +90, north positive)
/// * `longitude` - Observer longitude in degrees (-180 to +180, east positive)
/// * `refraction` - Whether to apply the atmospheric refraction correction to the elevation
///
/// # Returns
/// Solar position or error
///
/// # Errors
/// Returns error for invalid coordinates
///
/// # Example
/// ```rust
/// use solar_geometry::{sunae, time::UtcInstant};
///
/// // 2015-09-27 20:00 UTC (day 270) in Seattle
/// let instant = UtcInstant::from_components(2015, 270, 20.0).unwrap();
/// let position = sunae::solar_position_from_instant(
///     instant,
///     47.6097,     // Seattle latitude
///     -122.3331,   // Seattle longitude
///     true,
/// ).unwrap();
///
/// assert!(position.azimuth() < 360.0);
/// assert!(position.elevation_angle() <= 90.0);
/// ```
pub fn solar_position_from_instant(
    instant: UtcInstant,
    latitude: f64,
    longitude: f64,
    refraction: bool,
) -> Result<SolarPosition> {
    check_coordinates(latitude, longitude)?;

    // Days since 2000-01-01 12:00:00 UTC
    let time = instant.days_since_j2000();

    // Mean longitude and mean anomaly of the sun
    let mnlong = normalize_degrees_0_to_360(280.460 + 0.9856474 * time);
    let mnanom = degrees_to_radians(normalize_degrees_0_to_360(357.528 + 0.9856003 * time));

    // Ecliptic longitude and obliquity of the ecliptic
    let eclong = degrees_to_radians(normalize_degrees_0_to_360(
        mnlong + 1.915 * sin(mnanom) + 0.020 * sin(2.0 * mnanom),
    ));
    let oblqec = degrees_to_radians(23.439 - 4.0e-7 * time);

    // Right ascension (alpha), forced to [0, 2*pi)
    let mut alpha = atan2(cos(oblqec) * sin(eclong), cos(eclong));
    if alpha < 0.0 {
        alpha += 2.0 * PI;
    }

    // Declination (delta)
    let delta = asin(sin(oblqec) * sin(eclong));

    // Greenwich mean sidereal time (hours), local mean sidereal time (radians)
    let gmst = normalize_hours_0_to_24(6.697375 + 0.0657098242 * time + instant.hour());
    let lmst = degrees_to_radians(normalize_hours_0_to_24(gmst + longitude / 15.0) * 15.0);

    // Hour angle (H), normalized to (-pi, pi]
    let mut h = lmst - alpha;
    if h < -PI {
        h += 2.0 * PI;
    }
    if h > PI {
        h -= 2.0 * PI;
    }

    let s_phi = sin(degrees_to_radians(latitude));
    let c_phi = cos(degrees_to_radians(latitude));
    let s_delta = sin(delta);
    let c_delta = cos(delta);
    let s_h = sin(h);
    let c_h = cos(h);

    // Elevation from the spherical triangle; the clamp guards rounding when
    // the argument grazes ±1 (sun at the zenith or nadir)
    let s_el = (s_phi * s_delta + c_phi * c_delta * c_h).clamp(-1.0, 1.0);
    let mut elevation = radians_to_degrees(asin(s_el));

    // Azimuth measured clockwise from north, via the quadrant-safe relation:
    // no division by cos(elevation) or sin(latitude), so poles, the equator,
    // and the exact horizon fall out of the same expression
    let gamma = atan2(s_h, c_h * s_phi - (s_delta / c_delta) * c_phi);
    let azimuth = normalize_degrees_0_to_360(radians_to_degrees(gamma + PI));

    if refraction {
        elevation += refraction_correction(elevation);
    }

    // Sun-earth distance in AU from the eccentricity series in the mean anomaly
    let distance = 1.00014 - 0.01671 * cos(mnanom) - 0.00014 * cos(2.0 * mnanom);

    SolarPosition::new(azimuth, elevation, distance)
}

/// Calculate solar positions for a slice of instants at a fixed location.
///
/// Element-wise: one output per input, in order. Stops at the first error.
///
/// # Arguments
/// * `instants` - Instants in UTC
/// * `latitude` - Observer latitude in degrees (-90 to +90, north positive)
/// * `longitude` - Observer longitude in degrees (-180 to +180, east positive)
/// * `refraction` - Whether to apply the atmospheric refraction correction
///
/// # Errors
/// Returns error for invalid coordinates
#[cfg(feature = "std")]
pub fn solar_positions(
    instants: &[UtcInstant],
    latitude: f64,
    longitude: f64,
    refraction: bool,
) -> Result<Vec<SolarPosition>> {
    check_coordinates(latitude, longitude)?;
    instants
        .iter()
        .map(|&instant| solar_position_from_instant(instant, latitude, longitude, refraction))
        .collect()
}

/// Empirical atmospheric refraction correction in degrees, for a US standard
/// atmosphere, as a function of the true elevation angle in degrees.
///
/// Returns 0 for elevations at or below -0.766°; neither branch can divide
/// by zero.
fn refraction_correction(elevation: f64) -> f64 {
    if elevation >= 19.225 {
        0.00452 * 3.51823 / tan(degrees_to_radians(elevation))
    } else if elevation > -0.766 {
        3.51823 * (0.1594 + 0.0196 * elevation + 0.00002 * elevation * elevation)
            / (1.0 + 0.505 * elevation + 0.0845 * elevation * elevation)
    } else {
        0.0
    }
}

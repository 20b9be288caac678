//! Time representation for solar geometry calculations.
//!
//! The solar position formulas work from a (year, day-of-year, decimal UTC
//! hour) triple rather than a full calendar date. [`UtcInstant`] carries that
//! triple and the day count from the J2000.0 epoch derived from it.

#![allow(clippy::unreadable_literal)]

use crate::error::{check_day_of_year, check_hour};
use crate::Result;
#[cfg(feature = "chrono")]
use chrono::{Datelike, TimeZone, Timelike};

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
const J2000_JDN: f64 = 2_451_545.0;

/// Julian Day Number offset for the day-count formula, anchored at 1949.
///
/// 2,432,916.5 is the JDN of 1948-12-31 00:00 UTC (day zero of 1949);
/// counting whole years and leap days from 1949 on top of it reproduces the
/// Julian date for Gregorian dates between 1950 and 2049 without a full
/// calendar conversion.
const JDN_1949: f64 = 2_432_916.5;

/// An instant in UTC expressed as year, day-of-year, and decimal hour.
///
/// This is the native time input of the solar position algorithm. The
/// decimal hour may lie outside [0, 24); excess hours roll into adjacent
/// days, which lets callers fold a timezone offset directly into the hour.
///
/// # Example
/// ```
/// # use solar_geometry::time::UtcInstant;
/// let noon = UtcInstant::from_components(2015, 270, 12.0).unwrap(); // 2015-09-27 12:00 UTC
/// assert_eq!(noon.year(), 2015);
/// assert_eq!(noon.day_of_year(), 270);
/// assert_eq!(noon.hour(), 12.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcInstant {
    /// Calendar year
    year: i32,
    /// Day of year (1-based, up to 366)
    day_of_year: u32,
    /// Decimal hour since midnight UTC
    hour: f64,
}

impl UtcInstant {
    /// Creates an instant from year, 1-based day-of-year, and decimal UTC hour.
    ///
    /// # Arguments
    /// * `year` - Calendar year (nominal algorithm fit is 1950 to 2050)
    /// * `day_of_year` - Day of year (1 to 366)
    /// * `hour` - Decimal hour since midnight UTC; values outside [0, 24) roll into adjacent days
    ///
    /// # Errors
    /// Returns error if `day_of_year` is outside 1 to 366 or `hour` is not finite.
    pub fn from_components(year: i32, day_of_year: u32, hour: f64) -> Result<Self> {
        check_day_of_year(day_of_year)?;
        check_hour(hour)?;
        Ok(Self {
            year,
            day_of_year,
            hour,
        })
    }

    /// Creates an instant from a timezone-aware chrono `DateTime`.
    ///
    /// The datetime is converted to UTC first; sub-second precision is kept
    /// in the decimal hour.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Self {
        let utc = datetime.with_timezone(&chrono::Utc);
        let hour = f64::from(utc.hour())
            + f64::from(utc.minute()) / 60.0
            + (f64::from(utc.second()) + f64::from(utc.nanosecond()) / 1e9) / 3600.0;
        Self {
            year: utc.year(),
            day_of_year: utc.ordinal(),
            hour,
        }
    }

    /// Gets the calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the 1-based day of year.
    #[must_use]
    pub const fn day_of_year(&self) -> u32 {
        self.day_of_year
    }

    /// Gets the decimal hour since midnight UTC.
    #[must_use]
    pub const fn hour(&self) -> f64 {
        self.hour
    }

    /// Returns a copy of this instant with the given number of hours added.
    ///
    /// Used to fold a timezone offset into the decimal hour; the resulting
    /// hour may leave [0, 24) and rolls into adjacent days.
    #[must_use]
    pub fn with_hour_offset(self, hours: f64) -> Self {
        Self {
            hour: self.hour + hours,
            ..self
        }
    }

    /// Calculates days (including fraction) since the J2000.0 epoch.
    ///
    /// Counts whole years and leap days from 1949, so the result is exact
    /// for Gregorian dates between 1950 and 2049 and degrades gracefully
    /// outside that window.
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        let delta = self.year - 1949;
        let leap = delta / 4;
        let jd = JDN_1949
            + 365.0 * f64::from(delta)
            + f64::from(leap)
            + f64::from(self.day_of_year)
            + self.hour / 24.0;
        jd - J2000_JDN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_j2000_epoch() {
        // 2000-01-01 12:00 UTC is day 1, hour 12 and exactly the J2000.0 epoch
        let epoch = UtcInstant::from_components(2000, 1, 12.0).unwrap();
        assert!(epoch.days_since_j2000().abs() < EPSILON);
    }

    #[test]
    fn test_day_count_increments() {
        let day1 = UtcInstant::from_components(2015, 270, 0.0).unwrap();
        let day2 = UtcInstant::from_components(2015, 271, 0.0).unwrap();
        assert!((day2.days_since_j2000() - day1.days_since_j2000() - 1.0).abs() < EPSILON);

        let half_day = UtcInstant::from_components(2015, 270, 12.0).unwrap();
        assert!((half_day.days_since_j2000() - day1.days_since_j2000() - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_hour_rollover_matches_next_day() {
        // Hour 25 on day d is the same instant as hour 1 on day d+1
        let rolled = UtcInstant::from_components(2015, 270, 25.0).unwrap();
        let next_day = UtcInstant::from_components(2015, 271, 1.0).unwrap();
        assert!((rolled.days_since_j2000() - next_day.days_since_j2000()).abs() < EPSILON);

        let negative = UtcInstant::from_components(2015, 270, -1.0).unwrap();
        let prev_day = UtcInstant::from_components(2015, 269, 23.0).unwrap();
        assert!((negative.days_since_j2000() - prev_day.days_since_j2000()).abs() < EPSILON);
    }

    #[test]
    fn test_leap_day_count() {
        // 2016 is a leap year; Dec 31 is day 366
        let leap_end = UtcInstant::from_components(2016, 366, 0.0).unwrap();
        let next_year = UtcInstant::from_components(2017, 1, 0.0).unwrap();
        assert!((next_year.days_since_j2000() - leap_end.days_since_j2000() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_component_validation() {
        assert!(UtcInstant::from_components(2015, 0, 0.0).is_err());
        assert!(UtcInstant::from_components(2015, 367, 0.0).is_err());
        assert!(UtcInstant::from_components(2015, 1, f64::NAN).is_err());
        assert!(UtcInstant::from_components(2015, 1, f64::INFINITY).is_err());
        assert!(UtcInstant::from_components(2015, 366, 23.99).is_ok());
    }

    #[test]
    fn test_with_hour_offset() {
        let instant = UtcInstant::from_components(2015, 270, 10.0).unwrap();
        let shifted = instant.with_hour_offset(8.0);
        assert_eq!(shifted.hour(), 18.0);
        assert_eq!(shifted.day_of_year(), 270);
        assert_eq!(shifted.year(), 2015);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_from_datetime() {
        use chrono::{DateTime, FixedOffset, Utc};

        let utc = "2015-09-27T18:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let instant = UtcInstant::from_datetime(&utc);
        assert_eq!(instant.year(), 2015);
        assert_eq!(instant.day_of_year(), 270);
        assert!((instant.hour() - 18.5).abs() < EPSILON);

        // A zoned datetime converts to the same UTC instant
        let zoned = "2015-09-27T11:30:00-07:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let zoned_instant = UtcInstant::from_datetime(&zoned);
        assert_eq!(zoned_instant, instant);
    }
}

//! Interval-averaged elevation angles.
//!
//! Averaged irradiance-style time series label a whole interval with one
//! timestamp, so comparing them against instantaneous sun positions biases
//! the result. This module computes the *effective* elevation angle over
//! each interval instead: it resamples the series to a fine (5-minute) grid,
//! evaluates the solar position at every fine step, averages the sine of the
//! elevation (the physically meaningful quantity, proportional to the
//! irradiance on a horizontal plane), and converts the mean back to an
//! angle. Negative (below-horizon) averages clamp to zero.
//!
//! For instantaneous elevation values call [`crate::sunae`] directly.

use crate::error::{check_coordinates, check_hour};
use crate::math::{asin, degrees_to_radians, radians_to_degrees, sin};
use crate::sunae;
use crate::time::UtcInstant;
use crate::types::{AveragingReference, IntervalElevation};
use crate::{Error, Result};
use chrono::{DateTime, Datelike, Duration, NaiveDateTime, TimeZone, Timelike, Utc};

/// Nominal spacing of the fine integration grid, in minutes.
const FINE_STEP_MINUTES: i64 = 5;

/// Calculate the average elevation angle over each interval of a time series.
///
/// The input timestamps are naive; `timezone_hours_west` converts them to
/// UTC (a series already in UTC passes 0). The step size is inferred from
/// the first two timestamps and the series must be uniformly spaced.
/// `reference` states which point of its averaging interval each input
/// timestamp marks; the output is labeled by interval *beginnings*
/// regardless.
///
/// # Arguments
/// * `times` - Uniformly spaced timestamps, at least two
/// * `latitude` - Site latitude in degrees (-90 to +90, north positive)
/// * `longitude` - Site longitude in degrees (-180 to +180, east positive)
/// * `timezone_hours_west` - Hours west of UTC for the input timestamps (0 for UTC)
/// * `reference` - Which point of the averaging interval the input timestamps mark
///
/// # Returns
/// One averaged elevation per input timestamp, in degrees clamped to [0, 90],
/// labeled by the beginning of each averaging interval.
///
/// # Errors
/// Returns `InvalidTimeSeries` for series shorter than two timestamps, with
/// non-increasing or irregular spacing; `InvalidLatitude`/`InvalidLongitude`
/// for bad coordinates.
///
/// # Example
/// ```rust
/// use chrono::{Duration, NaiveDate};
/// use solar_geometry::average;
/// use solar_geometry::types::AveragingReference;
///
/// // One day of 3-hourly timestamps for Seattle, already in UTC
/// let start = NaiveDate::from_ymd_opt(2015, 9, 27)
///     .unwrap()
///     .and_hms_opt(0, 0, 0)
///     .unwrap();
/// let times: Vec<_> = (0..8).map(|i| start + Duration::hours(3 * i)).collect();
///
/// let averaged = average::average_elevation(
///     &times,
///     47.6097,
///     -122.3331,
///     0.0,
///     AveragingReference::Beginning,
/// ).unwrap();
///
/// assert_eq!(averaged.len(), times.len());
/// assert!(averaged
///     .iter()
///     .all(|e| (0.0..=90.0).contains(&e.elevation_angle())));
/// ```
pub fn average_elevation(
    times: &[NaiveDateTime],
    latitude: f64,
    longitude: f64,
    timezone_hours_west: f64,
    reference: AveragingReference,
) -> Result<Vec<IntervalElevation<NaiveDateTime>>> {
    check_coordinates(latitude, longitude)?;
    check_hour(timezone_hours_west)?;
    let step = infer_step(times)?;

    // Move the labels to the beginning of each averaging interval
    let shift = match reference {
        AveragingReference::Beginning => Duration::zero(),
        AveragingReference::Middle => step / 2,
        AveragingReference::End => step,
    };
    let start = times[0] - shift;
    let end = times[times.len() - 1] - shift;

    // Fine integration grid; a series step below the nominal grid spacing
    // becomes the grid spacing itself so every bin keeps at least one sample
    let fine = Duration::minutes(FINE_STEP_MINUTES).min(step);
    let step_millis = step.num_milliseconds();

    let bins = times.len();
    let mut sums = vec![0.0_f64; bins];
    let mut counts = vec![0_u32; bins];

    // Walk the grid from the first to the last shifted timestamp inclusive,
    // binning each sine-elevation sample by the interval it falls in
    let mut t = start;
    loop {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bin = ((t - start).num_milliseconds() / step_millis) as usize;
        let instant = instant_for(t).with_hour_offset(timezone_hours_west);
        let position = sunae::solar_position_from_instant(instant, latitude, longitude, true)?;
        sums[bin] += sin(degrees_to_radians(position.elevation_angle()));
        counts[bin] += 1;

        if t >= end {
            break;
        }
        // The final grid step shortens to land exactly on the series end
        t = (t + fine).min(end);
    }

    let mut averaged = Vec::with_capacity(bins);
    for (i, (sum, count)) in sums.iter().zip(&counts).enumerate() {
        if *count == 0 {
            return Err(Error::computation_error("empty averaging bin"));
        }
        let mean = sum / f64::from(*count);
        let elevation = radians_to_degrees(asin(mean.clamp(-1.0, 1.0)));
        let elevation = if elevation < 0.0 { 0.0 } else { elevation };
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let label = start + step * (i as i32);
        averaged.push(IntervalElevation::new(label, elevation));
    }
    Ok(averaged)
}

/// Calculate interval-averaged elevation angles for timezone-aware timestamps.
///
/// Convenience wrapper around [`average_elevation`]: converts the series to
/// UTC, so no separate timezone offset is needed. Output labels are in UTC.
///
/// # Errors
/// Same conditions as [`average_elevation`].
pub fn average_elevation_utc<Tz: TimeZone>(
    times: &[DateTime<Tz>],
    latitude: f64,
    longitude: f64,
    reference: AveragingReference,
) -> Result<Vec<IntervalElevation<DateTime<Utc>>>> {
    let naive: Vec<NaiveDateTime> = times.iter().map(DateTime::naive_utc).collect();
    let averaged = average_elevation(&naive, latitude, longitude, 0.0, reference)?;
    Ok(averaged
        .into_iter()
        .map(|interval| {
            IntervalElevation::new(
                Utc.from_utc_datetime(interval.timestamp()),
                interval.elevation_angle(),
            )
        })
        .collect())
}

/// Infers the (uniform) step size of a time series.
// TODO: accept series with gaps by averaging each contiguous run separately
fn infer_step(times: &[NaiveDateTime]) -> Result<Duration> {
    if times.len() < 2 {
        return Err(Error::invalid_time_series(
            "fewer than two timestamps; cannot infer a step size",
        ));
    }
    let step = times[1] - times[0];
    if step <= Duration::zero() {
        return Err(Error::invalid_time_series(
            "timestamps must be strictly increasing",
        ));
    }
    if step.num_milliseconds() == 0 {
        return Err(Error::invalid_time_series(
            "time step must be at least one millisecond",
        ));
    }
    for pair in times.windows(2) {
        if pair[1] - pair[0] != step {
            return Err(Error::invalid_time_series(
                "irregular spacing; consecutive timestamps must share one step size",
            ));
        }
    }
    Ok(step)
}

/// Builds the algorithm's time input from a naive UTC timestamp.
fn instant_for(t: NaiveDateTime) -> UtcInstant {
    let hour = f64::from(t.hour())
        + f64::from(t.minute()) / 60.0
        + f64::from(t.second()) / 3600.0;
    UtcInstant::from_components(t.year(), t.ordinal(), hour)
        .expect("chrono datetimes have valid components")
}

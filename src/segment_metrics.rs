//! Kinematics between consecutive GPS fixes.
//!
//! A route of N points has N-1 segments. Speeds are in miles per hour and
//! accelerations in miles per hour per second. Distance, speed and
//! acceleration are rounded to two decimal places at every step, so later
//! values are derived from already-rounded inputs.
//!
//! A segment whose duration is zero or negative (repeated or out of order
//! timestamps) has no meaningful speed. `speed` and `acceleration` reject it
//! with [`KinematicsError::NonPositiveDuration`] rather than returning an
//! infinite or NaN value.

use crate::geo_utils::{round_to_two_decimal_places, DistanceCalculator};
use crate::gps_processor::{Point, RawData};
use itertools::Itertools;
use thiserror::Error;

const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum KinematicsError {
    #[error("segment duration must be positive, got {duration_seconds}s")]
    NonPositiveDuration { duration_seconds: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentMetrics {
    pub distance_miles: f64,
    pub duration_seconds: f64,
    pub speed_mph: f64,
}

pub fn distance(
    distance_calculator: &impl DistanceCalculator,
    from: &Point,
    to: &Point,
) -> f64 {
    round_to_two_decimal_places(distance_calculator.distance_between(from, to))
}

pub fn duration(start_timestamp_sec: i64, finish_timestamp_sec: i64) -> f64 {
    // in f64 so that extreme timestamps cannot overflow
    finish_timestamp_sec as f64 - start_timestamp_sec as f64
}

pub fn speed(distance_miles: f64, duration_seconds: f64) -> Result<f64, KinematicsError> {
    check_duration(duration_seconds)?;
    Ok(round_to_two_decimal_places(
        distance_miles / (duration_seconds / SECONDS_PER_HOUR),
    ))
}

pub fn acceleration(
    velocity_before_mph: f64,
    velocity_after_mph: f64,
    duration_seconds: f64,
) -> Result<f64, KinematicsError> {
    check_duration(duration_seconds)?;
    Ok(round_to_two_decimal_places(
        (velocity_after_mph - velocity_before_mph) / duration_seconds,
    ))
}

fn check_duration(duration_seconds: f64) -> Result<(), KinematicsError> {
    // `!(x > 0)` so that NaN is rejected too.
    if !(duration_seconds > 0.0) {
        return Err(KinematicsError::NonPositiveDuration { duration_seconds });
    }
    Ok(())
}

pub fn segment_metrics(
    distance_calculator: &impl DistanceCalculator,
    from: &RawData,
    to: &RawData,
) -> Result<SegmentMetrics, KinematicsError> {
    let distance_miles = distance(distance_calculator, &from.point, &to.point);
    let duration_seconds = duration(from.timestamp_sec, to.timestamp_sec);
    let speed_mph = speed(distance_miles, duration_seconds)?;
    Ok(SegmentMetrics {
        distance_miles,
        duration_seconds,
        speed_mph,
    })
}

/// Metrics for every adjacent pair of `route`, in order. Returns exactly
/// `route.len() - 1` entries (none for routes shorter than two points).
pub fn segments_info(
    distance_calculator: &impl DistanceCalculator,
    route: &[RawData],
) -> Result<Vec<SegmentMetrics>, KinematicsError> {
    route
        .iter()
        .tuple_windows()
        .map(|(from, to)| segment_metrics(distance_calculator, from, to))
        .collect()
}

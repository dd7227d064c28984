use crate::geo_utils;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn haversine_distance_in_miles(&self, other: &Point) -> f64 {
        geo_utils::haversine_distance_in_miles(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

/// One recorded GPS fix, exactly as it appears in a `[lat, lon, timestamp]` row.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64, i64)", into = "(f64, f64, i64)")]
pub struct RawData {
    pub point: Point,
    pub timestamp_sec: i64,
}

impl RawData {
    pub fn new(latitude: f64, longitude: f64, timestamp_sec: i64) -> Self {
        RawData {
            point: Point {
                latitude,
                longitude,
            },
            timestamp_sec,
        }
    }
}

impl From<(f64, f64, i64)> for RawData {
    fn from((latitude, longitude, timestamp_sec): (f64, f64, i64)) -> Self {
        RawData::new(latitude, longitude, timestamp_sec)
    }
}

impl From<RawData> for (f64, f64, i64) {
    fn from(data: RawData) -> Self {
        (data.point.latitude, data.point.longitude, data.timestamp_sec)
    }
}

/// A `RawData` enriched with the kinematics the filter judges it by. Only
/// lives between annotation and filtering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnotatedData {
    pub raw: RawData,
    pub speed_mph: f64,
    pub segment_duration_seconds: f64,
    pub acceleration: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProcessResult {
    Keep,
    ExceedSpeed,
    ExceedAcceleration,
    ExceedDeceleration,
}

impl ProcessResult {
    pub fn is_kept(&self) -> bool {
        *self == ProcessResult::Keep
    }

    pub fn describe(&self) -> &'static str {
        match self {
            ProcessResult::Keep => "kept",
            ProcessResult::ExceedSpeed => "max speed exceeded",
            ProcessResult::ExceedAcceleration => "max acceleration exceeded",
            ProcessResult::ExceedDeceleration => "max deceleration exceeded",
        }
    }
}

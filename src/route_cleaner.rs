use crate::geo_utils::{DistanceCalculator, Haversine};
use crate::gps_processor::{ProcessResult, RawData};
use crate::outlier_filter::{self, CleaningConfig};
use crate::route_annotator;
use anyhow::Result;
use chrono::DateTime;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CleaningReport {
    pub total: usize,
    pub kept: usize,
    pub exceed_speed: usize,
    pub exceed_acceleration: usize,
    pub exceed_deceleration: usize,
}

impl CleaningReport {
    fn record(&mut self, result: ProcessResult) {
        self.total += 1;
        match result {
            ProcessResult::Keep => self.kept += 1,
            ProcessResult::ExceedSpeed => self.exceed_speed += 1,
            ProcessResult::ExceedAcceleration => self.exceed_acceleration += 1,
            ProcessResult::ExceedDeceleration => self.exceed_deceleration += 1,
        }
    }

    pub fn discarded(&self) -> usize {
        self.total - self.kept
    }
}

impl fmt::Display for CleaningReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "kept {} of {} points (speed: {}, acceleration: {}, deceleration: {})",
            self.kept,
            self.total,
            self.exceed_speed,
            self.exceed_acceleration,
            self.exceed_deceleration
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CleanedRoute {
    pub points: Vec<RawData>,
    pub report: CleaningReport,
}

/// Drops the points of `route` that imply implausible travel, measuring
/// distance with the haversine formula.
pub fn clean_route(route: &[RawData], config: &CleaningConfig) -> Result<CleanedRoute> {
    clean_route_with(&Haversine, route, config)
}

pub fn clean_route_with(
    distance_calculator: &impl DistanceCalculator,
    route: &[RawData],
    config: &CleaningConfig,
) -> Result<CleanedRoute> {
    config.validate()?;
    let annotated = route_annotator::annotate_route(distance_calculator, route)?;

    let mut report = CleaningReport::default();
    let points = outlier_filter::filter_outliers(config, annotated, |data, result| {
        report.record(result);
        if !result.is_kept() {
            debug!(
                "Discarding point ({}, {}) at {}: {}. speed={}mph acceleration={}mph/s duration={}s",
                data.raw.point.latitude,
                data.raw.point.longitude,
                DateTime::from_timestamp(data.raw.timestamp_sec, 0)
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| data.raw.timestamp_sec.to_string()),
                result.describe(),
                data.speed_mph,
                data.acceleration,
                data.segment_duration_seconds,
            );
        }
    });

    info!("Route cleaned: {report}");
    Ok(CleanedRoute { points, report })
}

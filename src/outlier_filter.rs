use crate::gps_processor::{AnnotatedData, ProcessResult, RawData};
use anyhow::Result;

pub const DEFAULT_MAX_SPEED_MPH: f64 = 70.0;
pub const DEFAULT_MAX_ACCELERATION: f64 = 10.0;
pub const DEFAULT_MAX_DECELERATION: f64 = -15.0;

/// Plausibility bounds for a single journey. Accelerations are in mph per
/// second, and deceleration is a negative number compared as
/// `acceleration < max_deceleration`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CleaningConfig {
    pub max_speed: f64,
    pub max_acceleration: f64,
    pub max_deceleration: f64,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        // Roughly a 70mph road limit, and well below what a sports car can do
        // (around 16 and -24).
        CleaningConfig {
            max_speed: DEFAULT_MAX_SPEED_MPH,
            max_acceleration: DEFAULT_MAX_ACCELERATION,
            max_deceleration: DEFAULT_MAX_DECELERATION,
        }
    }
}

impl CleaningConfig {
    pub fn with_max_speed(mut self, max_speed: f64) -> Self {
        self.max_speed = max_speed;
        self
    }

    pub fn with_max_acceleration(mut self, max_acceleration: f64) -> Self {
        self.max_acceleration = max_acceleration;
        self
    }

    pub fn with_max_deceleration(mut self, max_deceleration: f64) -> Self {
        self.max_deceleration = max_deceleration;
        self
    }

    /// Infinite bounds are allowed and disable that check.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("max speed", self.max_speed),
            ("max acceleration", self.max_acceleration),
            ("max deceleration", self.max_deceleration),
        ] {
            if value.is_nan() {
                bail!("{name} must be a number, got {value}");
            }
        }
        Ok(())
    }

    /// Bounds are inclusive: a value sitting exactly on a threshold is kept.
    pub fn classify(&self, data: &AnnotatedData) -> ProcessResult {
        if data.speed_mph > self.max_speed {
            ProcessResult::ExceedSpeed
        } else if data.acceleration > self.max_acceleration {
            ProcessResult::ExceedAcceleration
        } else if data.acceleration < self.max_deceleration {
            ProcessResult::ExceedDeceleration
        } else {
            ProcessResult::Keep
        }
    }
}

/// Single pass: every point is judged on metrics computed before anything was
/// dropped. Survivors come back as plain `RawData` in their original order.
pub fn filter_outliers<F>(
    config: &CleaningConfig,
    annotated: Vec<AnnotatedData>,
    mut on_result: F,
) -> Vec<RawData>
where
    F: FnMut(&AnnotatedData, ProcessResult),
{
    annotated
        .into_iter()
        .filter_map(|data| {
            let result = config.classify(&data);
            on_result(&data, result);
            if result.is_kept() {
                Some(data.raw)
            } else {
                None
            }
        })
        .collect()
}

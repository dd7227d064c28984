use crate::geo_utils::DistanceCalculator;
use crate::gps_processor::{AnnotatedData, RawData};
use crate::segment_metrics::{self, KinematicsError, SegmentMetrics};

// Point `i` is judged by the segment arriving at it, `(i - 1, i)`. The first
// point has nothing arriving so it borrows the first segment.
fn incoming_segment(segments: &[SegmentMetrics], index: usize) -> &SegmentMetrics {
    &segments[index.saturating_sub(1)]
}

/// Per point acceleration. The velocity before is the previous point's speed
/// (zero for the first point), the velocity after is the *next* point's speed
/// (the last point uses its own), and the divisor is this point's own segment
/// duration. So a point is also judged by how fast the route leaves it.
pub fn segments_acceleration(
    speeds_mph: &[f64],
    durations_seconds: &[f64],
) -> Result<Vec<f64>, KinematicsError> {
    debug_assert_eq!(speeds_mph.len(), durations_seconds.len());
    let last = speeds_mph.len().saturating_sub(1);
    (0..speeds_mph.len())
        .map(|i| {
            let velocity_before = if i == 0 { 0.0 } else { speeds_mph[i - 1] };
            let velocity_after = speeds_mph[(i + 1).min(last)];
            segment_metrics::acceleration(velocity_before, velocity_after, durations_seconds[i])
        })
        .collect()
}

/// Attaches speed, duration and acceleration to every point of `route`.
///
/// The passes run speed, then duration, then acceleration, since acceleration
/// reads the speeds of both neighbours. A route with fewer than two points
/// has no segments and every point is annotated as stationary.
pub fn annotate_route(
    distance_calculator: &impl DistanceCalculator,
    route: &[RawData],
) -> Result<Vec<AnnotatedData>, KinematicsError> {
    if route.len() < 2 {
        return Ok(route
            .iter()
            .map(|raw| AnnotatedData {
                raw: *raw,
                speed_mph: 0.0,
                segment_duration_seconds: 0.0,
                acceleration: 0.0,
            })
            .collect());
    }

    let segments = segment_metrics::segments_info(distance_calculator, route)?;

    let speeds_mph: Vec<f64> = (0..route.len())
        .map(|i| incoming_segment(&segments, i).speed_mph)
        .collect();
    let durations_seconds: Vec<f64> = (0..route.len())
        .map(|i| incoming_segment(&segments, i).duration_seconds)
        .collect();
    let accelerations = segments_acceleration(&speeds_mph, &durations_seconds)?;

    Ok(route
        .iter()
        .zip(speeds_mph)
        .zip(durations_seconds)
        .zip(accelerations)
        .map(
            |(((raw, speed_mph), segment_duration_seconds), acceleration)| AnnotatedData {
                raw: *raw,
                speed_mph,
                segment_duration_seconds,
                acceleration,
            },
        )
        .collect())
}

#![allow(dead_code)]

use rand::{rngs::StdRng, Rng, SeedableRng};
use route_cleaner::gps_processor::{Point, RawData};
use route_cleaner::import_data;

pub const JOURNEY_CSV: &str = "./tests/data/journey.csv";

pub fn load_journey_for_test() -> Vec<RawData> {
    import_data::load_csv(JOURNEY_CSV).unwrap()
}

/// A northbound walk-ish track with a bit of jitter, strictly increasing
/// timestamps.
pub fn random_route(seed: u64, len: usize) -> Vec<RawData> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut lat = 51.5;
    let mut lon = -0.1;
    let mut timestamp = 1_326_378_718;
    (0..len)
        .map(|_| {
            let data = RawData::new(lat, lon, timestamp);
            lat += rng.random_range(0.0..0.001);
            lon += rng.random_range(-0.0005..0.0005);
            timestamp += rng.random_range(1..30);
            data
        })
        .collect()
}

/// Distance stub: every segment is exactly `miles` long.
pub fn fixed_distance(miles: f64) -> impl Fn(&Point, &Point) -> f64 {
    move |_: &Point, _: &Point| miles
}

pub fn timestamps(route: &[RawData]) -> Vec<i64> {
    route.iter().map(|data| data.timestamp_sec).collect()
}

pub fn is_rounded_to_two_decimal_places(value: f64) -> bool {
    let scaled = value * 100.0;
    (scaled - scaled.round()).abs() < 1e-6
}

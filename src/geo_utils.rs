use crate::gps_processor::Point;

// Mean earth radius in miles, the same figure common geocoding libraries use
// when they report distances in miles.
pub const EARTH_RADIUS_IN_MILES: f64 = 3958.7613;

pub fn haversine_distance_in_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_IN_MILES * c
}

pub fn round_to_two_decimal_places(num: f64) -> f64 {
    (num * 100.0).round() / 100.0
}

/// The great-circle distance primitive the segment calculator is built on.
/// Results are in miles.
pub trait DistanceCalculator {
    fn distance_between(&self, from: &Point, to: &Point) -> f64;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Haversine;

impl DistanceCalculator for Haversine {
    fn distance_between(&self, from: &Point, to: &Point) -> f64 {
        from.haversine_distance_in_miles(to)
    }
}

impl<F> DistanceCalculator for F
where
    F: Fn(&Point, &Point) -> f64,
{
    fn distance_between(&self, from: &Point, to: &Point) -> f64 {
        self(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_degree_along_the_equator() {
        let distance = haversine_distance_in_miles(0.0, 0.0, 0.0, 1.0);
        assert_eq!(round_to_two_decimal_places(distance), 69.09);
    }

    #[test]
    fn same_point_is_zero() {
        let p = Point {
            latitude: 51.5007,
            longitude: -0.1246,
        };
        assert_eq!(Haversine.distance_between(&p, &p), 0.0);
    }

    #[test]
    fn closures_are_distance_calculators() {
        let fixed = |_: &Point, _: &Point| 1.5;
        let p = Point {
            latitude: 0.0,
            longitude: 0.0,
        };
        assert_eq!(fixed.distance_between(&p, &p), 1.5);
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to_two_decimal_places(69.0934), 69.09);
        assert_eq!(round_to_two_decimal_places(0.125), 0.13);
        assert_eq!(round_to_two_decimal_places(-2.5), -2.5);
        assert_eq!(round_to_two_decimal_places(-0.004), -0.0);
    }
}

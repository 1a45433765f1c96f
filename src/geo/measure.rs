//! Pure measurement functions over projected-plane polylines.
//!
//! Bearings and interior angles are computed directly on the mercator plane
//! (the original display convention: clockwise from the map's up axis).
//! Distances and destination points go through the spherical earth model so
//! they are geodesic, and the two stay consistent enough for the
//! destination/measurement round trip to hold near any segment's own scale.

use bevy::math::DVec2;

use crate::constants::EARTH_RADIUS_M;

use super::mercator::{from_lon_lat, to_lon_lat};

/// Distance and azimuth of a line's final segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub distance_m: f64,
    pub azimuth_deg: f64,
}

impl Measurement {
    pub const ZERO: Measurement = Measurement {
        distance_m: 0.0,
        azimuth_deg: 0.0,
    };
}

/// Bearing from `a` to `b` in degrees `[0, 360)`, measured clockwise from the
/// map's up axis. Returns NaN when either coordinate is non-finite.
pub fn bearing(a: DVec2, b: DVec2) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return f64::NAN;
    }
    let delta = b - a;
    let mut azimuth = delta.x.atan2(delta.y).to_degrees();
    if azimuth < 0.0 {
        azimuth += 360.0;
    }
    azimuth
}

/// Interior angle at `vertex` between the segments toward `prev` and `next`,
/// in degrees `[0, 180]`. Symmetric under swapping `prev` and `next`.
/// Returns NaN when any coordinate is non-finite.
pub fn interior_angle(prev: DVec2, vertex: DVec2, next: DVec2) -> f64 {
    if !prev.is_finite() || !vertex.is_finite() || !next.is_finite() {
        return f64::NAN;
    }
    let toward_prev = prev - vertex;
    let toward_next = next - vertex;
    let diff = toward_next.y.atan2(toward_next.x) - toward_prev.y.atan2(toward_prev.x);
    let mut angle = diff.rem_euclid(std::f64::consts::TAU).to_degrees();
    if angle > 180.0 {
        angle = 360.0 - angle;
    }
    angle
}

/// Geodesic length in meters of the segment between two projected points.
pub fn segment_distance(a: DVec2, b: DVec2) -> f64 {
    sphere_distance(to_lon_lat(a), to_lon_lat(b))
}

/// Haversine distance in meters between two lon/lat pairs (degrees).
pub fn sphere_distance(a: DVec2, b: DVec2) -> f64 {
    let lat1 = a.y.to_radians();
    let lat2 = b.y.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.x - a.x).to_radians();
    let h =
        (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

/// Measurement of the final segment of `line`.
///
/// Lines with fewer than two finite coordinates yield [`Measurement::ZERO`]
/// (reported as indeterminate by the display layer). Malformed trailing
/// coordinates degrade the same way rather than poisoning the display.
pub fn last_segment(line: &[DVec2]) -> Measurement {
    let [.., a, b] = line else {
        return Measurement::ZERO;
    };
    if !a.is_finite() || !b.is_finite() {
        return Measurement::ZERO;
    }
    let distance = segment_distance(*a, *b);
    let azimuth = bearing(*a, *b);
    if !distance.is_finite() || !azimuth.is_finite() {
        return Measurement::ZERO;
    }
    Measurement {
        distance_m: distance,
        azimuth_deg: azimuth,
    }
}

/// Geodesic destination: the projected point `distance_m` meters from
/// `origin` along `bearing_deg` (normalized into `[0, 360)`).
///
/// Returns `None` for non-positive or non-finite distance, non-finite
/// bearing or origin, or when the result cannot be projected.
pub fn destination_point(origin: DVec2, distance_m: f64, bearing_deg: f64) -> Option<DVec2> {
    if !origin.is_finite() || !distance_m.is_finite() || !bearing_deg.is_finite() {
        return None;
    }
    if distance_m <= 0.0 {
        return None;
    }

    let bearing = bearing_deg.rem_euclid(360.0).to_radians();
    let start = to_lon_lat(origin);
    let lat1 = start.y.to_radians();
    let lon1 = start.x.to_radians();
    let angular = distance_m / EARTH_RADIUS_M;

    let lat2 =
        (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    let destination = from_lon_lat(DVec2::new(lon2.to_degrees(), lat2.to_degrees()));
    destination.is_finite().then_some(destination)
}

//! Spherical web-mercator projection (EPSG:3857).
//!
//! Map coordinates throughout the application are projected-plane meters.
//! The measurement functions unproject to lon/lat before doing spherical
//! math so that distances are geodesic rather than planar.

use bevy::math::DVec2;

use crate::constants::EARTH_RADIUS_M;

/// Latitude is clamped to the mercator validity range before projecting.
const MAX_LATITUDE_DEG: f64 = 85.051_128_779_806_6;

/// Project a lon/lat pair (degrees) onto the mercator plane (meters).
pub fn from_lon_lat(lon_lat: DVec2) -> DVec2 {
    let lon = lon_lat.x.to_radians();
    let lat = lon_lat
        .y
        .clamp(-MAX_LATITUDE_DEG, MAX_LATITUDE_DEG)
        .to_radians();
    DVec2::new(
        EARTH_RADIUS_M * lon,
        EARTH_RADIUS_M * (std::f64::consts::FRAC_PI_4 + lat / 2.0).tan().ln(),
    )
}

/// Unproject a mercator-plane coordinate (meters) back to lon/lat (degrees).
pub fn to_lon_lat(point: DVec2) -> DVec2 {
    let lon = point.x / EARTH_RADIUS_M;
    let lat = 2.0 * (point.y / EARTH_RADIUS_M).exp().atan() - std::f64::consts::FRAC_PI_2;
    DVec2::new(lon.to_degrees(), lat.to_degrees())
}

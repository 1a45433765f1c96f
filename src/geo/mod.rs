//! Projection and measurement math.
//!
//! Everything in here is pure: no resources, no mutation, no rendering.
//!
//! - [`mercator`] - Spherical web-mercator projection
//! - [`measure`] - Bearings, interior angles, segment measurements, geodesic
//!   destination points
//! - [`units`] - Display units and formatting

pub mod measure;
pub mod mercator;
pub mod units;

pub use measure::{
    bearing, destination_point, interior_angle, last_segment, segment_distance, Measurement,
};
pub use units::{format_azimuth, format_distance, format_hover_angle, AngleUnit, DistanceUnit};

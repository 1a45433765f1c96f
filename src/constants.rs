//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels (also used for grid viewport calculations)
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels (also used for grid viewport calculations)
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Mean earth radius in meters (spherical model, matches the measurement math)
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Squared screen-pixel tolerance for the vertex hover probe (6 px radius)
pub const HOVER_TOLERANCE_SQ: f32 = 36.0;

/// Screen-pixel radius for grabbing a vertex of the selected line
pub const VERTEX_GRAB_RADIUS: f64 = 8.0;

/// Screen-pixel tolerance for selecting a line by clicking near a segment
pub const SELECT_HIT_TOLERANCE: f64 = 5.0;

/// Grid spacing in projected meters
pub const GRID_SPACING_M: f32 = 500.0;

pub const METERS_TO_KM: f64 = 0.001;
pub const METERS_TO_MILES: f64 = 0.000_621_371;

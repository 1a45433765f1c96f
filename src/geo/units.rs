//! Display units for distances and angles.
//!
//! The measurement engine is unit-free (meters and degrees everywhere); these
//! types convert at the panel boundary and format values for display.

use serde::{Deserialize, Serialize};

use crate::constants::{METERS_TO_KM, METERS_TO_MILES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Miles,
}

impl DistanceUnit {
    pub fn toggled(self) -> Self {
        match self {
            DistanceUnit::Kilometers => DistanceUnit::Miles,
            DistanceUnit::Miles => DistanceUnit::Kilometers,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
        }
    }

    pub fn from_meters(self, meters: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => meters * METERS_TO_KM,
            DistanceUnit::Miles => meters * METERS_TO_MILES,
        }
    }

    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => value / METERS_TO_KM,
            DistanceUnit::Miles => value / METERS_TO_MILES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    pub fn toggled(self) -> Self {
        match self {
            AngleUnit::Degrees => AngleUnit::Radians,
            AngleUnit::Radians => AngleUnit::Degrees,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AngleUnit::Degrees => "deg",
            AngleUnit::Radians => "rad",
        }
    }

    pub fn from_degrees(self, degrees: f64) -> f64 {
        match self {
            AngleUnit::Degrees => degrees,
            AngleUnit::Radians => degrees.to_radians(),
        }
    }

    pub fn to_degrees(self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => value,
            AngleUnit::Radians => value.to_degrees(),
        }
    }
}

/// Format a distance in meters for display, or "N/A" when indeterminate.
pub fn format_distance(meters: Option<f64>, unit: DistanceUnit) -> String {
    match meters {
        Some(m) if m.is_finite() => format!("{:.2} {}", unit.from_meters(m), unit.label()),
        _ => "N/A".to_string(),
    }
}

/// Format an azimuth in degrees for display, or "N/A" when indeterminate.
pub fn format_azimuth(degrees: Option<f64>, unit: AngleUnit) -> String {
    match degrees {
        Some(d) if d.is_finite() => match unit {
            AngleUnit::Degrees => format!("{:.2}\u{b0}", d),
            AngleUnit::Radians => format!("{:.4} rad", d.to_radians()),
        },
        _ => "N/A".to_string(),
    }
}

/// Format a hovered interior angle for display, or "N/A" when no vertex is
/// hovered.
pub fn format_hover_angle(degrees: Option<f64>, unit: AngleUnit) -> String {
    match degrees {
        Some(d) if d.is_finite() => match unit {
            AngleUnit::Degrees => format!("{:.1}\u{b0}", d),
            AngleUnit::Radians => format!("{:.4} rad", d.to_radians()),
        },
        _ => "N/A".to_string(),
    }
}

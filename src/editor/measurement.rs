//! Measurement display state.
//!
//! Holds the numbers the panel renders: the live last-segment measurement,
//! the hovered interior angle, unit selections, and the numeric input
//! strings. Measurements are always recomputed from geometry, never cached
//! across mutations; `None` means indeterminate.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::geo::{last_segment, AngleUnit, DistanceUnit, Measurement};

#[derive(Resource, Default)]
pub struct MeasurementState {
    /// Last-segment measurement of whatever geometry is live, or `None`
    /// when nothing is measurable.
    pub current: Option<Measurement>,
    /// Interior angle reported by the hover probe, degrees.
    pub hovered_angle_deg: Option<f64>,
    pub distance_unit: DistanceUnit,
    pub angle_unit: AngleUnit,
    pub hover_angle_unit: AngleUnit,
    /// Numeric input fields, kept as strings the way the panel edits them.
    pub input_distance: String,
    pub input_angle: String,
}

impl MeasurementState {
    /// Recompute from a line's final segment and refresh the input fields.
    pub fn update_from_line(&mut self, line: &[DVec2]) {
        if line.len() < 2 {
            self.clear_measurement();
            return;
        }
        let measurement = last_segment(line);
        self.set_segment(measurement);
    }

    /// Show a segment measurement and mirror it into the input fields.
    pub fn set_segment(&mut self, measurement: Measurement) {
        if measurement == Measurement::ZERO {
            self.clear_measurement();
            return;
        }
        self.input_distance = format!(
            "{:.2}",
            self.distance_unit.from_meters(measurement.distance_m)
        );
        self.input_angle = match self.angle_unit {
            AngleUnit::Degrees => format!("{:.2}", measurement.azimuth_deg),
            AngleUnit::Radians => {
                format!("{:.4}", self.angle_unit.from_degrees(measurement.azimuth_deg))
            }
        };
        self.current = Some(measurement);
    }

    /// Drop the measurement and blank the input fields.
    pub fn clear_measurement(&mut self) {
        self.current = None;
        self.clear_inputs();
    }

    pub fn clear_inputs(&mut self) {
        self.input_distance.clear();
        self.input_angle.clear();
    }

    /// Parse the input fields into meters and degrees. `None` when either
    /// field is non-numeric or the distance is not strictly positive.
    pub fn parsed_inputs(&self) -> Option<(f64, f64)> {
        let distance: f64 = self.input_distance.trim().parse().ok()?;
        let angle: f64 = self.input_angle.trim().parse().ok()?;
        if !distance.is_finite() || !angle.is_finite() || distance <= 0.0 {
            return None;
        }
        Some((
            self.distance_unit.to_meters(distance),
            self.angle_unit.to_degrees(angle),
        ))
    }
}

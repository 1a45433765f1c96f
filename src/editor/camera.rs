//! The map view camera.
//!
//! World units are projected-plane meters, so the orthographic scale reads
//! as meters per screen pixel. Zoom is multiplicative (each wheel step
//! changes the scale by a fixed factor), which keeps steps proportionate
//! whether the view spans a city block or a continent.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

/// Zoom bounds, in meters per pixel. The lower bound keeps vertex-level
/// edits comfortable; the upper bound stops short of degenerate mercator
/// scales where the whole plane collapses into a few pixels.
const MIN_METERS_PER_PIXEL: f32 = 0.25;
const MAX_METERS_PER_PIXEL: f32 = 5000.0;

/// Scale multiplier per wheel step (scrolling up zooms in).
const ZOOM_STEP_FACTOR: f32 = 0.9;

#[derive(Component)]
pub struct MapCamera;

#[derive(Component)]
pub struct CameraZoom {
    /// Meters of map per screen pixel.
    pub scale: f32,
}

impl Default for CameraZoom {
    fn default() -> Self {
        // Roughly 16 km across the default window; the reference grid is
        // legible at this scale.
        Self { scale: 10.0 }
    }
}

/// True while the pan gesture holds the map (input systems that interpret
/// the cursor against map geometry should stand down).
pub fn pan_in_progress(mouse_button: &ButtonInput<MouseButton>) -> bool {
    mouse_button.pressed(MouseButton::Middle)
}

/// Apply wheel steps to a zoom scale, clamped to the mercator-sane range.
fn zoomed(scale: f32, steps: f32) -> f32 {
    (scale * ZOOM_STEP_FACTOR.powf(steps)).clamp(MIN_METERS_PER_PIXEL, MAX_METERS_PER_PIXEL)
}

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        MapCamera,
        CameraZoom::default(),
        Transform::from_translation(Vec3::new(0.0, 0.0, 1000.0)),
    ));
}

/// Middle-mouse pan. Cursor motion is converted from pixels to map meters
/// through the current zoom so the map stays glued to the cursor.
pub fn camera_pan(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<bevy::input::mouse::MouseMotion>,
    mut camera_query: Query<(&mut Transform, &CameraZoom), With<MapCamera>>,
) {
    if !pan_in_progress(&mouse_button) {
        mouse_motion.clear();
        return;
    }

    let Ok((mut transform, zoom)) = camera_query.single_mut() else {
        return;
    };

    for event in mouse_motion.read() {
        let delta = event.delta * zoom.scale;
        transform.translation.x -= delta.x;
        transform.translation.y += delta.y;
    }
}

pub fn camera_zoom(
    mut scroll_events: MessageReader<MouseWheel>,
    mut camera_query: Query<&mut CameraZoom, With<MapCamera>>,
) {
    let Ok(mut zoom) = camera_query.single_mut() else {
        return;
    };

    for event in scroll_events.read() {
        let steps = match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / 100.0,
        };
        zoom.scale = zoomed(zoom.scale, steps);
    }
}

pub fn apply_camera_zoom(
    mut camera_query: Query<(&CameraZoom, &mut Projection), (With<MapCamera>, Changed<CameraZoom>)>,
) {
    for (zoom, mut projection) in camera_query.iter_mut() {
        if let Projection::Orthographic(ref mut ortho) = *projection {
            ortho.scale = zoom.scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_is_multiplicative_and_symmetric() {
        let scale = 10.0;
        let zoomed_in = zoomed(scale, 1.0);
        assert!(zoomed_in < scale);
        let back = zoomed(zoomed_in, -1.0);
        assert!((back - scale).abs() < 1e-4);
        assert_eq!(zoomed(scale, 0.0), scale);
    }

    #[test]
    fn test_zoom_clamps_at_bounds() {
        assert_eq!(zoomed(MIN_METERS_PER_PIXEL, 100.0), MIN_METERS_PER_PIXEL);
        assert_eq!(zoomed(MAX_METERS_PER_PIXEL, -100.0), MAX_METERS_PER_PIXEL);
        let near_min = zoomed(MIN_METERS_PER_PIXEL * 1.05, 5.0);
        assert_eq!(near_min, MIN_METERS_PER_PIXEL);
    }

    #[test]
    fn test_pan_gesture_tracks_middle_button() {
        let mut mouse = ButtonInput::<MouseButton>::default();
        assert!(!pan_in_progress(&mouse));
        mouse.press(MouseButton::Middle);
        assert!(pan_in_progress(&mouse));
        mouse.release(MouseButton::Middle);
        assert!(!pan_in_progress(&mouse));
        // Other buttons never count as a pan
        mouse.press(MouseButton::Left);
        assert!(!pan_in_progress(&mouse));
    }
}

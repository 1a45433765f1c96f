//! Common SystemParam bundles shared by the editor's input systems.
//!
//! The input handlers all need the same camera/window plumbing to turn a
//! cursor position into map coordinates, so it is bundled once here instead
//! of repeated per system.

use bevy::ecs::system::SystemParam;
use bevy::math::DVec2;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use super::camera::MapCamera;

/// Bundled camera and window queries for cursor-to-map calculations.
#[derive(SystemParam)]
pub struct CameraParams<'w, 's> {
    pub window: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
    pub camera: Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<MapCamera>>,
}

impl CameraParams<'_, '_> {
    /// World position of the cursor, if the cursor is inside the window.
    pub fn cursor_world_pos(&self) -> Option<Vec2> {
        let window = self.window.single().ok()?;
        let (camera, transform) = self.camera.single().ok()?;
        let cursor_pos = window.cursor_position()?;
        camera.viewport_to_world_2d(transform, cursor_pos).ok()
    }

    /// Cursor position as f64 map coordinates (projected meters).
    pub fn cursor_map_pos(&self) -> Option<DVec2> {
        self.cursor_world_pos().map(|p| p.as_dvec2())
    }

    /// Project a map coordinate back to viewport pixels. `None` when the
    /// point is behind the camera or the camera is gone.
    pub fn map_to_viewport(&self, point: DVec2) -> Option<Vec2> {
        let (camera, transform) = self.camera.single().ok()?;
        camera
            .world_to_viewport(transform, point.as_vec2().extend(0.0))
            .ok()
    }
}

/// Check if the cursor is over egui UI.
pub fn is_cursor_over_ui(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.is_pointer_over_area())
        .unwrap_or(false)
}

/// Check if egui currently owns the keyboard (a text field has focus).
pub fn ui_wants_keyboard(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_keyboard_input())
        .unwrap_or(false)
}

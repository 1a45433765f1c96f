//! Vertex placement for an active append session.
//!
//! Identical input shape to the draw tool, but the action stream feeds the
//! appended sketch instead of a fresh one and right click rolls the whole
//! session back.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use super::actions::EditorAction;
use super::mode::EditorMode;
use super::params::{is_cursor_over_ui, CameraParams};

pub fn handle_append_clicks(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mode: Res<EditorMode>,
    camera: CameraParams,
    mut contexts: EguiContexts,
    mut actions: MessageWriter<EditorAction>,
) {
    if !mode.is_appending() {
        return;
    }

    if is_cursor_over_ui(&mut contexts) {
        return;
    }

    let Some(map_pos) = camera.cursor_map_pos() else {
        return;
    };

    if mouse_button.just_pressed(MouseButton::Left) {
        actions.write(EditorAction::AddSketchVertex(map_pos));
    }

    if mouse_button.just_pressed(MouseButton::Right) {
        actions.write(EditorAction::CancelAppend);
    }
}

//! Vertex placement for an active drawing session.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use super::actions::EditorAction;
use super::mode::EditorMode;
use super::params::{is_cursor_over_ui, CameraParams};

pub fn handle_draw_clicks(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mode: Res<EditorMode>,
    camera: CameraParams,
    mut contexts: EguiContexts,
    mut actions: MessageWriter<EditorAction>,
) {
    if !mode.is_drawing() {
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

    // Right click cancels
    if mouse_button.just_pressed(MouseButton::Right) {
        actions.write(EditorAction::CancelDrawing);
    }
}

//! Keyboard shortcuts for finishing and cancelling sessions.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use super::actions::EditorAction;
use super::mode::EditorMode;
use super::params::ui_wants_keyboard;

pub fn handle_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mode: Res<EditorMode>,
    mut contexts: EguiContexts,
    mut actions: MessageWriter<EditorAction>,
) {
    // A focused text field owns the keyboard
    if ui_wants_keyboard(&mut contexts) {
        return;
    }

    if keyboard.just_pressed(KeyCode::Enter) && mode.can_finish() {
        if mode.is_appending() {
            actions.write(EditorAction::ConfirmAppend);
        } else {
            actions.write(EditorAction::FinishDrawing);
        }
    }

    if keyboard.just_pressed(KeyCode::Escape) && mode.can_cancel() {
        match *mode {
            EditorMode::Appending { .. } => {
                actions.write(EditorAction::CancelAppend);
            }
            EditorMode::Drawing => {
                actions.write(EditorAction::CancelDrawing);
            }
            EditorMode::Editing { .. } => {
                actions.write(EditorAction::Select(None));
            }
            EditorMode::Idle => {}
        }
    }
}

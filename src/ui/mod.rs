mod control_panel;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::config::ConfigResetNotification;
use crate::map::{FeatureAdded, FeatureRemoved};

/// One-line status shown at the bottom of the control panel.
#[derive(Resource, Default)]
pub struct StatusLine {
    pub text: String,
}

fn update_status_line(
    mut added: MessageReader<FeatureAdded>,
    mut removed: MessageReader<FeatureRemoved>,
    mut status: ResMut<StatusLine>,
) {
    for message in added.read() {
        status.text = format!("Line {} added", message.id);
    }
    for message in removed.read() {
        status.text = format!("Line {} removed", message.id);
    }
}

/// Modal shown when the config file could not be read and was reset
fn config_reset_notification_ui(
    mut contexts: EguiContexts,
    mut notification: ResMut<ConfigResetNotification>,
) -> Result {
    if !notification.show {
        return Ok(());
    }

    egui::Window::new("Settings Reset")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("Your settings were reset to defaults.");
            if let Some(reason) = &notification.reason {
                ui.label(reason);
            }
            if ui.button("OK").clicked() {
                notification.show = false;
                notification.reason = None;
            }
        });
    Ok(())
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StatusLine>()
            .add_systems(Update, update_status_line)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    control_panel::control_panel_ui,
                    config_reset_notification_ui,
                )
                    .chain(),
            );
    }
}

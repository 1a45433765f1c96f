//! The side panel: measurement readouts, unit toggles, numeric input, and
//! the mode buttons. The panel never mutates geometry itself; every edit
//! goes out as an [`EditorAction`].

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::{AppConfig, SaveConfigRequest};
use crate::editor::{EditorAction, EditorMode, MeasurementState, Sketch};
use crate::geo::{format_azimuth, format_distance, format_hover_angle};
use crate::map::FeatureRegistry;

use super::StatusLine;

#[allow(clippy::too_many_arguments)]
pub fn control_panel_ui(
    mut contexts: EguiContexts,
    mode: Res<EditorMode>,
    registry: Res<FeatureRegistry>,
    sketch: Res<Sketch>,
    status: Res<StatusLine>,
    mut measurement: ResMut<MeasurementState>,
    mut config: ResMut<AppConfig>,
    mut actions: MessageWriter<EditorAction>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) -> Result {
    egui::SidePanel::right("control_panel")
        .default_width(260.0)
        .show(contexts.ctx_mut()?, |ui| {
            ui.heading("Measurements");
            ui.add_space(4.0);

            measurement_section(ui, &mode, &mut measurement, &mut config, &mut save_events);

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(4.0);
            ui.heading("Segment Input");
            ui.add_space(4.0);

            numeric_input_section(ui, &mode, &mut measurement, &mut actions);

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(4.0);
            ui.heading("Tools");
            ui.add_space(4.0);

            mode_buttons(ui, &mode, &registry, &sketch, &mut actions);

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(4.0);

            if ui
                .checkbox(&mut config.data.grid_visible, "Grid")
                .changed()
            {
                config.dirty = true;
                save_events.write(SaveConfigRequest);
            }

            if !status.text.is_empty() {
                ui.add_space(8.0);
                ui.label(egui::RichText::new(&status.text).weak());
            }
        });
    Ok(())
}

fn measurement_section(
    ui: &mut egui::Ui,
    mode: &EditorMode,
    measurement: &mut MeasurementState,
    config: &mut AppConfig,
    save_events: &mut MessageWriter<SaveConfigRequest>,
) {
    let distance = measurement.current.map(|m| m.distance_m);
    let azimuth = measurement.current.map(|m| m.azimuth_deg);

    egui::Grid::new("measurement_grid")
        .num_columns(3)
        .show(ui, |ui| {
            ui.label("Distance:");
            ui.label(format_distance(distance, measurement.distance_unit));
            if ui
                .small_button(measurement.distance_unit.label())
                .on_hover_text("Toggle distance unit")
                .clicked()
            {
                measurement.distance_unit = measurement.distance_unit.toggled();
                config.data.distance_unit = measurement.distance_unit;
                config.dirty = true;
                save_events.write(SaveConfigRequest);
                if let Some(current) = measurement.current {
                    measurement.set_segment(current);
                }
            }
            ui.end_row();

            ui.label("Azimuth:");
            ui.label(format_azimuth(azimuth, measurement.angle_unit));
            if ui
                .small_button(measurement.angle_unit.label())
                .on_hover_text("Toggle azimuth unit")
                .clicked()
            {
                measurement.angle_unit = measurement.angle_unit.toggled();
                config.data.angle_unit = measurement.angle_unit;
                config.dirty = true;
                save_events.write(SaveConfigRequest);
                if let Some(current) = measurement.current {
                    measurement.set_segment(current);
                }
            }
            ui.end_row();

            // The hover probe only runs while idle
            if mode.is_idle() {
                ui.label("Vertex angle:");
                ui.label(format_hover_angle(
                    measurement.hovered_angle_deg,
                    measurement.hover_angle_unit,
                ));
                if ui
                    .small_button(measurement.hover_angle_unit.label())
                    .on_hover_text("Toggle vertex angle unit")
                    .clicked()
                {
                    measurement.hover_angle_unit = measurement.hover_angle_unit.toggled();
                    config.data.hover_angle_unit = measurement.hover_angle_unit;
                    config.dirty = true;
                    save_events.write(SaveConfigRequest);
                }
                ui.end_row();
            }
        });
}

fn numeric_input_section(
    ui: &mut egui::Ui,
    mode: &EditorMode,
    measurement: &mut MeasurementState,
    actions: &mut MessageWriter<EditorAction>,
) {
    let editing_selection = matches!(
        mode,
        EditorMode::Editing {
            selected: Some(_),
            ..
        }
    );

    ui.add_enabled_ui(editing_selection, |ui| {
        egui::Grid::new("input_grid").num_columns(2).show(ui, |ui| {
            ui.label(format!("Distance ({}):", measurement.distance_unit.label()));
            ui.add(
                egui::TextEdit::singleline(&mut measurement.input_distance).desired_width(90.0),
            );
            ui.end_row();

            ui.label(format!("Azimuth ({}):", measurement.angle_unit.label()));
            ui.add(egui::TextEdit::singleline(&mut measurement.input_angle).desired_width(90.0));
            ui.end_row();
        });

        let parsed = measurement.parsed_inputs();
        if ui
            .add_enabled(parsed.is_some(), egui::Button::new("Apply"))
            .on_hover_text("Move the last vertex to this distance and azimuth")
            .clicked()
        {
            if let Some((distance_m, azimuth_deg)) = parsed {
                actions.write(EditorAction::ApplyNumericInput {
                    distance_m,
                    azimuth_deg,
                });
            }
        }
    });
}

fn mode_buttons(
    ui: &mut egui::Ui,
    mode: &EditorMode,
    registry: &FeatureRegistry,
    sketch: &Sketch,
    actions: &mut MessageWriter<EditorAction>,
) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(mode.is_idle(), egui::Button::new("Draw"))
            .clicked()
        {
            actions.write(EditorAction::StartDrawing);
        }
        if ui
            .add_enabled(
                mode.is_drawing() && sketch.points.len() >= 2,
                egui::Button::new("Finish"),
            )
            .clicked()
        {
            actions.write(EditorAction::FinishDrawing);
        }
        if ui
            .add_enabled(mode.is_drawing(), egui::Button::new("Cancel"))
            .clicked()
        {
            actions.write(EditorAction::CancelDrawing);
        }
    });

    ui.add_space(4.0);

    let edit_toggle_enabled = if mode.is_editing() || mode.is_appending() {
        true
    } else {
        mode.is_idle() && registry.count() > 0
    };
    let edit_label = if mode.is_editing() || mode.is_appending() {
        "Exit Edit Mode"
    } else {
        "Edit Mode"
    };
    if ui
        .add_enabled(edit_toggle_enabled, egui::Button::new(edit_label))
        .clicked()
    {
        actions.write(EditorAction::ToggleEditMode);
    }

    ui.add_space(4.0);

    let has_selection = mode.selected().is_some();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(
                mode.is_editing() && has_selection,
                egui::Button::new("Append"),
            )
            .clicked()
        {
            actions.write(EditorAction::StartAppend);
        }
        if ui
            .add_enabled(mode.is_appending(), egui::Button::new("Confirm"))
            .clicked()
        {
            actions.write(EditorAction::ConfirmAppend);
        }
        if ui
            .add_enabled(mode.is_appending(), egui::Button::new("Cancel"))
            .clicked()
        {
            actions.write(EditorAction::CancelAppend);
        }
    });

    ui.add_space(4.0);

    ui.horizontal(|ui| {
        let can_modify = mode.is_editing() && has_selection;
        if ui
            .add_enabled(can_modify, egui::Button::new("Delete Vertex"))
            .on_hover_text("Remove the line's last vertex")
            .clicked()
        {
            actions.write(EditorAction::DeleteLastVertex);
        }
        if ui
            .add_enabled(can_modify, egui::Button::new("Delete Line"))
            .clicked()
        {
            actions.write(EditorAction::DeleteEntireLine);
        }
    });
}

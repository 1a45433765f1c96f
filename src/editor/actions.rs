//! Editor actions and the transition function that applies them.
//!
//! Every geometry-mutating interaction funnels through a single
//! [`EditorAction`] queue, so actions are applied strictly in arrival order
//! and a sketch-change recomputation can never be reordered past a
//! subsequent user action. [`apply`] is the only place mode transitions
//! happen; the input systems and the panel only ever emit actions.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::map::{FeatureId, FeatureRegistry};

use super::measurement::MeasurementState;
use super::mode::EditorMode;
use super::sketch::Sketch;

#[derive(Message, Debug, Clone)]
pub enum EditorAction {
    /// Enter Drawing mode (Idle only; force-cancels a live append first).
    StartDrawing,
    /// A vertex was placed by the active draw/append session.
    AddSketchVertex(DVec2),
    /// Commit the sketch as a new feature (needs >= 2 points, else cancels).
    FinishDrawing,
    /// Abort the in-progress sketch.
    CancelDrawing,
    /// Enter or leave Editing mode.
    ToggleEditMode,
    /// Change the selection while Editing.
    Select(Option<FeatureId>),
    /// Move one vertex of the selected feature (modify drag).
    MoveVertex { index: usize, to: DVec2 },
    /// Begin extending the selected feature from its endpoint.
    StartAppend,
    /// Splice the appended points onto the target (no net points = cancel).
    ConfirmAppend,
    /// Roll the target back to its pre-append line.
    CancelAppend,
    /// Drop the selected feature's last coordinate (deletes the feature
    /// when only two points remain).
    DeleteLastVertex,
    /// Remove the selected feature entirely.
    DeleteEntireLine,
    /// Replace the selected feature's last coordinate with the geodesic
    /// destination from its second-to-last point. Already unit-converted.
    ApplyNumericInput { distance_m: f64, azimuth_deg: f64 },
}

/// Apply one action to the editor state.
pub fn apply(
    action: EditorAction,
    mode: &mut EditorMode,
    registry: &mut FeatureRegistry,
    sketch: &mut Sketch,
    measurement: &mut MeasurementState,
) {
    match action {
        EditorAction::StartDrawing => {
            if mode.is_appending() {
                // A new drawing session never coexists with an append; the
                // append is rolled back and the machine lands in Editing,
                // where drawing stays refused.
                cancel_append(mode, registry, sketch, measurement);
                return;
            }
            if !mode.is_idle() {
                return;
            }
            *mode = EditorMode::Drawing;
            sketch.clear();
            measurement.clear_measurement();
            debug!("drawing started");
        }

        EditorAction::AddSketchVertex(point) => {
            if !point.is_finite() {
                return;
            }
            if mode.is_drawing() {
                sketch.points.push(point);
                measurement.update_from_line(&sketch.points);
            } else if let EditorMode::Appending { target, backup } = mode.clone() {
                if registry.get(target).is_none() || backup.is_empty() {
                    warn!("append state inconsistent, cancelling");
                    cancel_append(mode, registry, sketch, measurement);
                    return;
                }
                sketch.points.push(point);
                let combined = combined_line(&backup, sketch);
                measurement.update_from_line(&combined);
            }
        }

        EditorAction::FinishDrawing => {
            if !mode.is_drawing() {
                return;
            }
            if sketch.points.len() < 2 {
                // Not enough points; same as cancel
                sketch.clear();
                measurement.clear_measurement();
                *mode = EditorMode::Idle;
                return;
            }
            measurement.update_from_line(&sketch.points);
            let points = std::mem::take(&mut sketch.points);
            if let Some(id) = registry.add(points) {
                info!("committed feature {:?}", id);
            }
            sketch.clear();
            *mode = EditorMode::Idle;
        }

        EditorAction::CancelDrawing => {
            if !mode.is_drawing() {
                return;
            }
            sketch.clear();
            measurement.clear_measurement();
            *mode = EditorMode::Idle;
            debug!("drawing cancelled");
        }

        EditorAction::ToggleEditMode => {
            if mode.is_drawing() {
                return;
            }
            if mode.is_appending() {
                cancel_append(mode, registry, sketch, measurement);
            }
            if mode.is_editing() {
                *mode = EditorMode::Idle;
                measurement.clear_inputs();
                debug!("edit mode off");
            } else {
                *mode = EditorMode::Editing { selected: None };
                debug!("edit mode on");
            }
        }

        EditorAction::Select(selection) => {
            if !mode.is_editing() {
                return;
            }
            match selection.and_then(|id| registry.get(id)) {
                Some(feature) => {
                    let points = feature.points.clone();
                    *mode = EditorMode::Editing {
                        selected: Some(feature.id),
                    };
                    measurement.update_from_line(&points);
                }
                None => {
                    *mode = EditorMode::Editing { selected: None };
                    measurement.clear_measurement();
                }
            }
        }

        EditorAction::MoveVertex { index, to } => {
            let EditorMode::Editing {
                selected: Some(id), ..
            } = *mode
            else {
                return;
            };
            if !to.is_finite() {
                return;
            }
            let Some(feature) = registry.get_mut(id) else {
                return;
            };
            let Some(point) = feature.points.get_mut(index) else {
                return;
            };
            *point = to;
            let points = feature.points.clone();
            measurement.update_from_line(&points);
        }

        EditorAction::StartAppend => {
            let EditorMode::Editing {
                selected: Some(id), ..
            } = *mode
            else {
                return;
            };
            let Some(feature) = registry.get(id) else {
                return;
            };
            let Some(start) = feature.last_point() else {
                return;
            };
            let backup = feature.points.clone();
            sketch.seed(start);
            *mode = EditorMode::Appending { target: id, backup };
            debug!("append started on {:?}", id);
        }

        EditorAction::ConfirmAppend => {
            let EditorMode::Appending { target, backup } = mode.clone() else {
                return;
            };
            if registry.get(target).is_none() || backup.is_empty() {
                warn!("append state inconsistent, cancelling");
                cancel_append(mode, registry, sketch, measurement);
                return;
            }
            let appended = sketch.appended_points().to_vec();
            if appended.is_empty() {
                // No net new points; behaves exactly like a cancel
                cancel_append(mode, registry, sketch, measurement);
                return;
            }
            let mut spliced = backup;
            spliced.extend_from_slice(&appended);
            if let Some(feature) = registry.get_mut(target) {
                feature.points = spliced.clone();
            }
            measurement.update_from_line(&spliced);
            sketch.clear();
            *mode = EditorMode::Editing {
                selected: Some(target),
            };
            info!("appended {} point(s) to {:?}", appended.len(), target);
        }

        EditorAction::CancelAppend => {
            if !mode.is_appending() {
                return;
            }
            cancel_append(mode, registry, sketch, measurement);
        }

        EditorAction::DeleteLastVertex => {
            let EditorMode::Editing {
                selected: Some(id), ..
            } = *mode
            else {
                return;
            };
            let Some(feature) = registry.get_mut(id) else {
                return;
            };
            if feature.points.len() > 2 {
                feature.points.pop();
                let points = feature.points.clone();
                measurement.update_from_line(&points);
            } else {
                // A line must keep >= 2 points; dropping below that deletes
                // the whole feature
                registry.remove(id);
                *mode = EditorMode::Editing { selected: None };
                measurement.clear_measurement();
            }
        }

        EditorAction::DeleteEntireLine => {
            let EditorMode::Editing {
                selected: Some(id), ..
            } = *mode
            else {
                return;
            };
            registry.remove(id);
            *mode = EditorMode::Editing { selected: None };
            measurement.clear_measurement();
        }

        EditorAction::ApplyNumericInput {
            distance_m,
            azimuth_deg,
        } => {
            let EditorMode::Editing {
                selected: Some(id), ..
            } = *mode
            else {
                return;
            };
            let Some(feature) = registry.get_mut(id) else {
                return;
            };
            let len = feature.points.len();
            if len < 2 {
                return;
            }
            let origin = feature.points[len - 2];
            let Some(destination) = crate::geo::destination_point(origin, distance_m, azimuth_deg)
            else {
                warn!(
                    "numeric input rejected: no destination for {} m at {}\u{b0}",
                    distance_m, azimuth_deg
                );
                return;
            };
            feature.points[len - 1] = destination;
            let points = feature.points.clone();
            measurement.update_from_line(&points);
        }
    }
}

/// Roll an append session back: the target keeps its pre-append line, the
/// sketch is discarded, and the measurement shows the target's last segment
/// again. Lands in Editing with the target still selected.
fn cancel_append(
    mode: &mut EditorMode,
    registry: &mut FeatureRegistry,
    sketch: &mut Sketch,
    measurement: &mut MeasurementState,
) {
    let EditorMode::Appending { target, .. } = *mode else {
        return;
    };
    sketch.clear();
    match registry.get(target) {
        Some(feature) => {
            let points = feature.points.clone();
            measurement.update_from_line(&points);
            *mode = EditorMode::Editing {
                selected: Some(target),
            };
        }
        None => {
            measurement.clear_measurement();
            *mode = EditorMode::Editing { selected: None };
        }
    }
    debug!("append cancelled");
}

/// Measurement line shown during an append: the backup plus whatever the
/// user has sketched past the seed.
pub fn combined_line(backup: &[DVec2], sketch: &Sketch) -> Vec<DVec2> {
    let mut combined = backup.to_vec();
    combined.extend_from_slice(sketch.appended_points());
    combined
}

/// Drain the action queue in arrival order.
pub fn process_actions(
    mut actions: MessageReader<EditorAction>,
    mut mode: ResMut<EditorMode>,
    mut registry: ResMut<FeatureRegistry>,
    mut sketch: ResMut<Sketch>,
    mut measurement: ResMut<MeasurementState>,
) {
    for action in actions.read() {
        apply(
            action.clone(),
            &mut mode,
            &mut registry,
            &mut sketch,
            &mut measurement,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::LineFeature;

    struct Rig {
        mode: EditorMode,
        registry: FeatureRegistry,
        sketch: Sketch,
        measurement: MeasurementState,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                mode: EditorMode::default(),
                registry: FeatureRegistry::default(),
                sketch: Sketch::default(),
                measurement: MeasurementState::default(),
            }
        }

        fn act(&mut self, action: EditorAction) {
            apply(
                action,
                &mut self.mode,
                &mut self.registry,
                &mut self.sketch,
                &mut self.measurement,
            );
        }

        /// Draw and commit a line, returning its id.
        fn draw(&mut self, points: &[(f64, f64)]) -> FeatureId {
            self.act(EditorAction::StartDrawing);
            for &(x, y) in points {
                self.act(EditorAction::AddSketchVertex(DVec2::new(x, y)));
            }
            self.act(EditorAction::FinishDrawing);
            self.registry.iter().last().expect("line committed").id
        }

        fn feature(&self, id: FeatureId) -> &LineFeature {
            self.registry.get(id).expect("feature present")
        }

        fn assert_mode_invariant(&self) {
            let flags = [
                self.mode.is_idle(),
                self.mode.is_drawing(),
                self.mode.is_editing(),
                self.mode.is_appending(),
            ];
            assert_eq!(
                flags.iter().filter(|f| **f).count(),
                1,
                "mode flags not mutually exclusive: {:?}",
                self.mode
            );
            for feature in self.registry.iter() {
                assert!(
                    feature.points.len() >= 2,
                    "registry holds a degenerate line"
                );
            }
            if let EditorMode::Appending { backup, .. } = &self.mode {
                assert!(!backup.is_empty(), "live append with empty backup");
                assert!(self.sketch.seeded, "live append without a seeded sketch");
            }
        }
    }

    const TRIANGLE: &[(f64, f64)] = &[(0.0, 0.0), (0.0, 1000.0), (1000.0, 1000.0)];

    #[test]
    fn test_draw_commit_measures_final_segment() {
        // Scenario A
        let mut rig = Rig::new();
        let id = rig.draw(TRIANGLE);
        assert!(rig.mode.is_idle());
        assert_eq!(rig.registry.count(), 1);
        assert_eq!(rig.feature(id).points.len(), 3);
        let m = rig.measurement.current.expect("measurement after commit");
        assert!((m.azimuth_deg - 90.0).abs() < 1e-9);
        assert!((m.distance_m - 1000.0).abs() < 1.0);
    }

    #[test]
    fn test_finish_with_one_point_discards() {
        let mut rig = Rig::new();
        rig.act(EditorAction::StartDrawing);
        rig.act(EditorAction::AddSketchVertex(DVec2::ZERO));
        rig.act(EditorAction::FinishDrawing);
        assert!(rig.mode.is_idle());
        assert_eq!(rig.registry.count(), 0);
        assert!(rig.measurement.current.is_none());
    }

    #[test]
    fn test_cancel_drawing_discards_sketch() {
        let mut rig = Rig::new();
        rig.act(EditorAction::StartDrawing);
        rig.act(EditorAction::AddSketchVertex(DVec2::ZERO));
        rig.act(EditorAction::AddSketchVertex(DVec2::new(10.0, 0.0)));
        assert!(rig.measurement.current.is_some());
        rig.act(EditorAction::CancelDrawing);
        assert!(rig.mode.is_idle());
        assert_eq!(rig.registry.count(), 0);
        assert!(rig.sketch.points.is_empty());
        assert!(rig.measurement.current.is_none());
    }

    #[test]
    fn test_start_drawing_refused_outside_idle() {
        let mut rig = Rig::new();
        rig.draw(TRIANGLE);
        rig.act(EditorAction::ToggleEditMode);
        rig.act(EditorAction::StartDrawing);
        assert!(rig.mode.is_editing(), "drawing must not start from editing");
    }

    #[test]
    fn test_measurement_tracks_sketch_vertices() {
        let mut rig = Rig::new();
        rig.act(EditorAction::StartDrawing);
        rig.act(EditorAction::AddSketchVertex(DVec2::ZERO));
        assert!(rig.measurement.current.is_none(), "single point is indeterminate");
        rig.act(EditorAction::AddSketchVertex(DVec2::new(0.0, 500.0)));
        let m = rig.measurement.current.unwrap();
        assert!((m.azimuth_deg - 0.0).abs() < 1e-9);
        rig.act(EditorAction::AddSketchVertex(DVec2::new(500.0, 500.0)));
        let m = rig.measurement.current.unwrap();
        assert!((m.azimuth_deg - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_vertex_is_ignored() {
        let mut rig = Rig::new();
        rig.act(EditorAction::StartDrawing);
        rig.act(EditorAction::AddSketchVertex(DVec2::new(f64::NAN, 0.0)));
        assert!(rig.sketch.points.is_empty());
    }

    #[test]
    fn test_select_updates_measurement_and_inputs() {
        let mut rig = Rig::new();
        let id = rig.draw(TRIANGLE);
        rig.act(EditorAction::ToggleEditMode);
        assert_eq!(rig.mode.selected(), None);
        rig.act(EditorAction::Select(Some(id)));
        assert_eq!(rig.mode.selected(), Some(id));
        let m = rig.measurement.current.unwrap();
        assert!((m.azimuth_deg - 90.0).abs() < 1e-9);
        assert!(!rig.measurement.input_distance.is_empty());
        rig.act(EditorAction::Select(None));
        assert_eq!(rig.mode.selected(), None);
        assert!(rig.measurement.current.is_none());
    }

    #[test]
    fn test_toggle_edit_off_clears_selection_and_inputs() {
        let mut rig = Rig::new();
        let id = rig.draw(TRIANGLE);
        rig.act(EditorAction::ToggleEditMode);
        rig.act(EditorAction::Select(Some(id)));
        rig.act(EditorAction::ToggleEditMode);
        assert!(rig.mode.is_idle());
        assert!(rig.measurement.input_distance.is_empty());
        assert!(rig.measurement.input_angle.is_empty());
    }

    #[test]
    fn test_toggle_edit_refused_while_drawing() {
        let mut rig = Rig::new();
        rig.act(EditorAction::StartDrawing);
        rig.act(EditorAction::ToggleEditMode);
        assert!(rig.mode.is_drawing());
    }

    #[test]
    fn test_numeric_input_moves_last_vertex() {
        // Scenario B: 2 km due south of the second-to-last point
        let mut rig = Rig::new();
        let id = rig.draw(TRIANGLE);
        rig.act(EditorAction::ToggleEditMode);
        rig.act(EditorAction::Select(Some(id)));
        rig.act(EditorAction::ApplyNumericInput {
            distance_m: 2000.0,
            azimuth_deg: 180.0,
        });
        let last = *rig.feature(id).points.last().unwrap();
        assert!(last.x.abs() < 1e-6);
        assert!((last.y + 1000.0).abs() < 2.0);
        let m = rig.measurement.current.unwrap();
        assert!((m.distance_m - 2000.0).abs() < 2.0);
        assert!((m.azimuth_deg - 180.0).abs() < 0.1);
    }

    #[test]
    fn test_numeric_input_rejects_non_positive_distance() {
        let mut rig = Rig::new();
        let id = rig.draw(TRIANGLE);
        rig.act(EditorAction::ToggleEditMode);
        rig.act(EditorAction::Select(Some(id)));
        let before = rig.feature(id).points.clone();
        rig.act(EditorAction::ApplyNumericInput {
            distance_m: 0.0,
            azimuth_deg: 90.0,
        });
        rig.act(EditorAction::ApplyNumericInput {
            distance_m: -5.0,
            azimuth_deg: 90.0,
        });
        assert_eq!(rig.feature(id).points, before);
    }

    #[test]
    fn test_append_cancel_restores_line() {
        // Scenario C
        let mut rig = Rig::new();
        let id = rig.draw(TRIANGLE);
        let original = rig.feature(id).points.clone();
        rig.act(EditorAction::ToggleEditMode);
        rig.act(EditorAction::Select(Some(id)));
        rig.act(EditorAction::StartAppend);
        assert!(rig.mode.is_appending());
        rig.act(EditorAction::AddSketchVertex(DVec2::new(2000.0, 2000.0)));
        rig.act(EditorAction::CancelAppend);
        assert_eq!(rig.mode, EditorMode::Editing { selected: Some(id) });
        assert_eq!(rig.feature(id).points, original);
        let m = rig.measurement.current.unwrap();
        assert!((m.azimuth_deg - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_append_confirm_splices_new_points() {
        let mut rig = Rig::new();
        let id = rig.draw(TRIANGLE);
        rig.act(EditorAction::ToggleEditMode);
        rig.act(EditorAction::Select(Some(id)));
        rig.act(EditorAction::StartAppend);
        rig.act(EditorAction::AddSketchVertex(DVec2::new(1000.0, 2000.0)));
        rig.act(EditorAction::AddSketchVertex(DVec2::new(0.0, 2000.0)));
        rig.act(EditorAction::ConfirmAppend);
        assert_eq!(rig.mode, EditorMode::Editing { selected: Some(id) });
        let points = &rig.feature(id).points;
        assert_eq!(points.len(), 5);
        assert_eq!(points[3], DVec2::new(1000.0, 2000.0));
        assert_eq!(points[4], DVec2::new(0.0, 2000.0));
        let m = rig.measurement.current.unwrap();
        assert!((m.azimuth_deg - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_append_confirm_without_new_points_is_cancel() {
        let mut rig = Rig::new();
        let id = rig.draw(TRIANGLE);
        let original = rig.feature(id).points.clone();
        rig.act(EditorAction::ToggleEditMode);
        rig.act(EditorAction::Select(Some(id)));
        rig.act(EditorAction::StartAppend);
        rig.act(EditorAction::ConfirmAppend);
        assert_eq!(rig.mode, EditorMode::Editing { selected: Some(id) });
        assert_eq!(rig.feature(id).points, original);
    }

    #[test]
    fn test_append_measures_combined_line() {
        let mut rig = Rig::new();
        let id = rig.draw(TRIANGLE);
        rig.act(EditorAction::ToggleEditMode);
        rig.act(EditorAction::Select(Some(id)));
        rig.act(EditorAction::StartAppend);
        rig.act(EditorAction::AddSketchVertex(DVec2::new(1000.0, 1500.0)));
        let m = rig.measurement.current.unwrap();
        // (1000,1000) -> (1000,1500) heads north
        assert!((m.azimuth_deg - 0.0).abs() < 0.1);
        assert!((m.distance_m - 500.0).abs() < 1.0);
        // Target geometry untouched until confirm
        assert_eq!(rig.feature(id).points.len(), 3);
    }

    #[test]
    fn test_confirm_and_cancel_are_noops_outside_append() {
        let mut rig = Rig::new();
        rig.act(EditorAction::ConfirmAppend);
        rig.act(EditorAction::CancelAppend);
        assert!(rig.mode.is_idle());

        let id = rig.draw(TRIANGLE);
        rig.act(EditorAction::ToggleEditMode);
        rig.act(EditorAction::Select(Some(id)));
        rig.act(EditorAction::ConfirmAppend);
        rig.act(EditorAction::CancelAppend);
        assert_eq!(rig.mode, EditorMode::Editing { selected: Some(id) });
    }

    #[test]
    fn test_start_drawing_during_append_cancels_append() {
        let mut rig = Rig::new();
        let id = rig.draw(TRIANGLE);
        let original = rig.feature(id).points.clone();
        rig.act(EditorAction::ToggleEditMode);
        rig.act(EditorAction::Select(Some(id)));
        rig.act(EditorAction::StartAppend);
        rig.act(EditorAction::AddSketchVertex(DVec2::new(5000.0, 5000.0)));
        rig.act(EditorAction::StartDrawing);
        assert_eq!(rig.mode, EditorMode::Editing { selected: Some(id) });
        assert_eq!(rig.feature(id).points, original);
    }

    #[test]
    fn test_toggle_edit_during_append_cancels_then_exits() {
        let mut rig = Rig::new();
        let id = rig.draw(TRIANGLE);
        let original = rig.feature(id).points.clone();
        rig.act(EditorAction::ToggleEditMode);
        rig.act(EditorAction::Select(Some(id)));
        rig.act(EditorAction::StartAppend);
        rig.act(EditorAction::AddSketchVertex(DVec2::new(5000.0, 5000.0)));
        rig.act(EditorAction::ToggleEditMode);
        assert!(rig.mode.is_idle());
        assert_eq!(rig.feature(id).points, original);
    }

    #[test]
    fn test_append_target_removed_forces_cancel() {
        let mut rig = Rig::new();
        let id = rig.draw(TRIANGLE);
        rig.act(EditorAction::ToggleEditMode);
        rig.act(EditorAction::Select(Some(id)));
        rig.act(EditorAction::StartAppend);
        // Simulate external corruption: the target vanishes mid-append
        rig.registry.remove(id);
        rig.act(EditorAction::AddSketchVertex(DVec2::new(1.0, 1.0)));
        assert_eq!(rig.mode, EditorMode::Editing { selected: None });
        assert!(rig.measurement.current.is_none());
    }

    #[test]
    fn test_delete_last_vertex_pops_and_remeasures() {
        let mut rig = Rig::new();
        let id = rig.draw(TRIANGLE);
        rig.act(EditorAction::ToggleEditMode);
        rig.act(EditorAction::Select(Some(id)));
        rig.act(EditorAction::DeleteLastVertex);
        assert_eq!(rig.feature(id).points.len(), 2);
        let m = rig.measurement.current.unwrap();
        assert!((m.azimuth_deg - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_delete_last_vertex_on_two_point_line_deletes_feature() {
        let mut rig = Rig::new();
        let id = rig.draw(&[(0.0, 0.0), (0.0, 1000.0)]);
        rig.act(EditorAction::ToggleEditMode);
        rig.act(EditorAction::Select(Some(id)));
        rig.act(EditorAction::DeleteLastVertex);
        assert_eq!(rig.registry.count(), 0);
        assert_eq!(rig.mode, EditorMode::Editing { selected: None });
        assert!(rig.measurement.current.is_none());
    }

    #[test]
    fn test_delete_entire_line() {
        let mut rig = Rig::new();
        let id = rig.draw(TRIANGLE);
        rig.act(EditorAction::ToggleEditMode);
        rig.act(EditorAction::Select(Some(id)));
        rig.act(EditorAction::DeleteEntireLine);
        assert_eq!(rig.registry.count(), 0);
        assert_eq!(rig.mode, EditorMode::Editing { selected: None });
    }

    #[test]
    fn test_move_vertex_remeasures() {
        let mut rig = Rig::new();
        let id = rig.draw(TRIANGLE);
        rig.act(EditorAction::ToggleEditMode);
        rig.act(EditorAction::Select(Some(id)));
        rig.act(EditorAction::MoveVertex {
            index: 2,
            to: DVec2::new(0.0, 2000.0),
        });
        assert_eq!(rig.feature(id).points[2], DVec2::new(0.0, 2000.0));
        let m = rig.measurement.current.unwrap();
        assert!((m.azimuth_deg - 0.0).abs() < 1e-9);
        // Out-of-range index is a no-op
        rig.act(EditorAction::MoveVertex {
            index: 99,
            to: DVec2::ZERO,
        });
        assert_eq!(rig.feature(id).points.len(), 3);
    }

    #[test]
    fn test_randomized_action_sequences_keep_invariants() {
        let mut state: u64 = 0x9E3779B97F4A7C15;
        let mut next = move || {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            state >> 33
        };

        let mut rig = Rig::new();
        for _ in 0..5000 {
            let coord = DVec2::new(
                (next() % 4001) as f64 - 2000.0,
                (next() % 4001) as f64 - 2000.0,
            );
            let candidate = rig
                .registry
                .iter()
                .nth(next() as usize % (rig.registry.count().max(1)))
                .map(|f| f.id);
            let action = match next() % 13 {
                0 => EditorAction::StartDrawing,
                1 | 2 | 3 => EditorAction::AddSketchVertex(coord),
                4 => EditorAction::FinishDrawing,
                5 => EditorAction::CancelDrawing,
                6 => EditorAction::ToggleEditMode,
                7 => EditorAction::Select(candidate),
                8 => EditorAction::StartAppend,
                9 => EditorAction::ConfirmAppend,
                10 => EditorAction::CancelAppend,
                11 => EditorAction::DeleteLastVertex,
                _ => EditorAction::ApplyNumericInput {
                    distance_m: (next() % 5000) as f64,
                    azimuth_deg: (next() % 720) as f64 - 360.0,
                },
            };
            rig.act(action);
            rig.assert_mode_invariant();
        }
    }
}

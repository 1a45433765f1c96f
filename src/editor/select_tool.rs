//! Selection and vertex dragging while editing.
//!
//! A left click either grabs a vertex of the already-selected line (starting
//! a drag), selects the line under the cursor, or clears the selection.
//! Thresholds are in screen pixels, so they are scaled by the camera zoom
//! before being compared against map distances.

use bevy::math::DVec2;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::constants::{SELECT_HIT_TOLERANCE, VERTEX_GRAB_RADIUS};
use crate::map::{FeatureId, FeatureRegistry};

use super::actions::EditorAction;
use super::camera::{CameraZoom, MapCamera};
use super::mode::EditorMode;
use super::params::{is_cursor_over_ui, CameraParams};

/// Live vertex drag, if any.
#[derive(Resource, Default)]
pub struct DragState {
    pub vertex_index: Option<usize>,
}

/// Squared distance from a point to a line segment.
fn segment_distance_sq(point: DVec2, seg_start: DVec2, seg_end: DVec2) -> f64 {
    let line_vec = seg_end - seg_start;
    let line_len_sq = line_vec.length_squared();

    if line_len_sq < 1e-12 {
        // Segment is essentially a point
        return point.distance_squared(seg_start);
    }

    let t = ((point - seg_start).dot(line_vec) / line_len_sq).clamp(0.0, 1.0);
    point.distance_squared(seg_start + line_vec * t)
}

/// Check if a point is within `threshold` of any segment of a line.
pub fn point_near_line(point: DVec2, line: &[DVec2], threshold: f64) -> bool {
    line.windows(2)
        .any(|w| segment_distance_sq(point, w[0], w[1]) <= threshold * threshold)
}

/// First registered line under the cursor, in registry order.
pub fn hit_feature(registry: &FeatureRegistry, point: DVec2, threshold: f64) -> Option<FeatureId> {
    registry
        .iter()
        .find(|feature| point_near_line(point, &feature.points, threshold))
        .map(|feature| feature.id)
}

/// Index of the closest vertex within `radius` of the point.
pub fn vertex_at(points: &[DVec2], point: DVec2, radius: f64) -> Option<usize> {
    let radius_sq = radius * radius;
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.distance_squared(point) <= radius_sq)
        .min_by(|(_, a), (_, b)| {
            a.distance_squared(point)
                .total_cmp(&b.distance_squared(point))
        })
        .map(|(index, _)| index)
}

#[allow(clippy::too_many_arguments)]
pub fn handle_selection(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mode: Res<EditorMode>,
    registry: Res<FeatureRegistry>,
    mut drag: ResMut<DragState>,
    camera: CameraParams,
    zoom_query: Query<&CameraZoom, With<MapCamera>>,
    mut contexts: EguiContexts,
    mut actions: MessageWriter<EditorAction>,
) {
    let EditorMode::Editing { selected } = *mode else {
        drag.vertex_index = None;
        return;
    };

    if mouse_button.just_released(MouseButton::Left) {
        drag.vertex_index = None;
    }

    if is_cursor_over_ui(&mut contexts) {
        return;
    }

    let Some(map_pos) = camera.cursor_map_pos() else {
        return;
    };

    let zoom = zoom_query.single().map(|z| z.scale as f64).unwrap_or(1.0);

    if mouse_button.just_pressed(MouseButton::Left) {
        // Grabbing a vertex of the selected line wins over re-selection.
        if let Some(feature) = selected.and_then(|id| registry.get(id)) {
            if let Some(index) = vertex_at(&feature.points, map_pos, VERTEX_GRAB_RADIUS * zoom) {
                drag.vertex_index = Some(index);
                return;
            }
        }
        let hit = hit_feature(&registry, map_pos, SELECT_HIT_TOLERANCE * zoom);
        if hit != selected {
            actions.write(EditorAction::Select(hit));
        }
    }
}

pub fn handle_vertex_drag(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mode: Res<EditorMode>,
    drag: Res<DragState>,
    camera: CameraParams,
    mut actions: MessageWriter<EditorAction>,
) {
    let Some(index) = drag.vertex_index else {
        return;
    };
    if !mode.is_editing() || !mouse_button.pressed(MouseButton::Left) {
        return;
    }
    let Some(map_pos) = camera.cursor_map_pos() else {
        return;
    };
    actions.write(EditorAction::MoveVertex { index, to: map_pos });
}

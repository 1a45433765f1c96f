//! Interior-vertex hover probe.
//!
//! While the editor is idle, the cursor is tested in screen space against the
//! interior vertices of every registered line. Endpoints have no interior
//! angle, so they are skipped. The first hit in registration order wins and
//! its angle lands in the measurement panel.

use bevy::math::DVec2;
use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow, SystemCursorIcon};
use bevy_egui::EguiContexts;

use crate::constants::HOVER_TOLERANCE_SQ;
use crate::geo::interior_angle;
use crate::map::{FeatureId, FeatureRegistry};

use super::camera::pan_in_progress;
use super::measurement::MeasurementState;
use super::mode::EditorMode;
use super::params::{is_cursor_over_ui, CameraParams};

/// The interior vertex under the cursor, if any.
#[derive(Resource, Default)]
pub struct HoveredVertex {
    pub hit: Option<(FeatureId, usize)>,
}

/// Find the first interior vertex within tolerance of the cursor, both in
/// viewport pixels. Projection failures for individual vertices are holes in
/// the candidate set, not errors.
pub fn probe_line(cursor: Vec2, projected: &[Option<Vec2>]) -> Option<usize> {
    if projected.len() < 3 {
        return None;
    }
    projected
        .iter()
        .enumerate()
        .take(projected.len() - 1)
        .skip(1)
        .find(|(_, point)| {
            point.is_some_and(|p| p.distance_squared(cursor) <= HOVER_TOLERANCE_SQ)
        })
        .map(|(index, _)| index)
}

/// Interior angle at one vertex of a line, degrees in [0, 180].
pub fn angle_at_vertex(points: &[DVec2], index: usize) -> Option<f64> {
    if index == 0 || index + 1 >= points.len() {
        return None;
    }
    let angle = interior_angle(points[index - 1], points[index], points[index + 1]);
    angle.is_finite().then_some(angle)
}

pub fn hover_probe(
    mode: Res<EditorMode>,
    registry: Res<FeatureRegistry>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    camera: CameraParams,
    mut contexts: EguiContexts,
    mut hovered: ResMut<HoveredVertex>,
    mut measurement: ResMut<MeasurementState>,
) {
    // While a pan drags the map under a stationary cursor the probe reports
    // nothing, same as any other non-idle interaction.
    if !mode.is_idle() || pan_in_progress(&mouse_button) || is_cursor_over_ui(&mut contexts) {
        hovered.hit = None;
        measurement.hovered_angle_deg = None;
        return;
    }

    let cursor = camera
        .window
        .single()
        .ok()
        .and_then(|window| window.cursor_position());
    let Some(cursor) = cursor else {
        hovered.hit = None;
        measurement.hovered_angle_deg = None;
        return;
    };

    for feature in registry.iter() {
        let projected: Vec<Option<Vec2>> = feature
            .points
            .iter()
            .map(|&p| camera.map_to_viewport(p))
            .collect();
        if let Some(index) = probe_line(cursor, &projected) {
            hovered.hit = Some((feature.id, index));
            measurement.hovered_angle_deg = angle_at_vertex(&feature.points, index);
            return;
        }
    }

    hovered.hit = None;
    measurement.hovered_angle_deg = None;
}

pub fn update_cursor_icon(
    mode: Res<EditorMode>,
    hovered: Res<HoveredVertex>,
    window_query: Query<Entity, With<PrimaryWindow>>,
    mut commands: Commands,
    mut contexts: EguiContexts,
) {
    let Ok(entity) = window_query.single() else {
        return;
    };

    // Default cursor over UI, otherwise per-mode
    if is_cursor_over_ui(&mut contexts) {
        commands
            .entity(entity)
            .insert(CursorIcon::System(SystemCursorIcon::Default));
        return;
    }

    let icon = if mode.is_drawing() || mode.is_appending() {
        SystemCursorIcon::Crosshair
    } else if hovered.hit.is_some() {
        SystemCursorIcon::Pointer
    } else {
        SystemCursorIcon::Default
    };
    commands.entity(entity).insert(CursorIcon::System(icon));
}

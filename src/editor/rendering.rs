//! Gizmo rendering for finalized lines, the live sketch, and vertex markers.

use bevy::gizmos::config::{GizmoConfigGroup, GizmoConfigStore};
use bevy::gizmos::prelude::*;
use bevy::math::DVec2;
use bevy::prelude::*;

use crate::map::FeatureRegistry;
use crate::theme;

use super::camera::{CameraZoom, MapCamera};
use super::hover::HoveredVertex;
use super::mode::EditorMode;
use super::params::CameraParams;
use super::sketch::Sketch;

/// Gizmo group for map features, so their line width can be configured
/// independently of any debug gizmos.
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct FeatureGizmoGroup;

pub fn configure_feature_gizmos(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<FeatureGizmoGroup>();
    config.line.width = 2.0;
}

fn polyline(gizmos: &mut Gizmos<FeatureGizmoGroup>, points: &[DVec2], color: Color) {
    for window in points.windows(2) {
        gizmos.line_2d(window[0].as_vec2(), window[1].as_vec2(), color);
    }
}

pub fn render_features(
    mut gizmos: Gizmos<FeatureGizmoGroup>,
    registry: Res<FeatureRegistry>,
    mode: Res<EditorMode>,
) {
    let selected = mode.selected();
    for feature in registry.iter() {
        let color = if selected == Some(feature.id) {
            theme::SELECTED_LINE_COLOR
        } else {
            theme::LINE_COLOR
        };
        polyline(&mut gizmos, &feature.points, color);
    }
}

/// The live sketch plus a rubber band from its last vertex to the cursor.
pub fn render_sketch(
    mut gizmos: Gizmos<FeatureGizmoGroup>,
    mode: Res<EditorMode>,
    sketch: Res<Sketch>,
    camera: CameraParams,
) {
    if !mode.is_drawing() && !mode.is_appending() {
        return;
    }

    polyline(&mut gizmos, &sketch.points, theme::SKETCH_COLOR);

    let Some(&last) = sketch.points.last() else {
        return;
    };
    let Some(cursor) = camera.cursor_map_pos() else {
        return;
    };
    gizmos.line_2d(last.as_vec2(), cursor.as_vec2(), theme::RUBBER_BAND_COLOR);
}

/// Vertex markers on the selected line, plus the hovered interior vertex
/// while idle. Marker radius is kept constant in screen pixels.
pub fn render_vertices(
    mut gizmos: Gizmos<FeatureGizmoGroup>,
    registry: Res<FeatureRegistry>,
    mode: Res<EditorMode>,
    hovered: Res<HoveredVertex>,
    zoom_query: Query<&CameraZoom, With<MapCamera>>,
) {
    let zoom = zoom_query.single().map(|z| z.scale).unwrap_or(1.0);
    let radius = 4.0 * zoom;

    if let Some(feature) = mode.selected().and_then(|id| registry.get(id)) {
        for &point in &feature.points {
            gizmos.circle_2d(point.as_vec2(), radius, theme::VERTEX_COLOR);
        }
    }

    if let Some((id, index)) = hovered.hit {
        if let Some(point) = registry.get(id).and_then(|f| f.points.get(index)) {
            gizmos.circle_2d(point.as_vec2(), radius * 1.5, theme::HOVERED_VERTEX_COLOR);
        }
    }
}

//! The interactive editor: modes, tools, measurement, and rendering.
//!
//! - [`mode`] - The tagged interaction mode
//! - [`actions`] - The action queue and the single transition function
//! - [`sketch`] / [`measurement`] - Session geometry and panel numbers
//! - [`draw_tool`] / [`append_tool`] / [`select_tool`] / [`hover`] /
//!   [`shortcuts`] - Input systems that only ever emit actions
//! - [`camera`] / [`grid`] / [`rendering`] - View and gizmo output

pub mod actions;
mod append_tool;
mod camera;
mod draw_tool;
mod grid;
mod hover;
mod measurement;
mod mode;
pub mod params;
mod rendering;
mod select_tool;
mod shortcuts;
mod sketch;

pub use actions::EditorAction;
pub use camera::MapCamera;
pub use hover::HoveredVertex;
pub use measurement::MeasurementState;
pub use mode::EditorMode;
pub use sketch::Sketch;

use bevy::prelude::*;

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EditorMode>()
            .init_resource::<Sketch>()
            .init_resource::<MeasurementState>()
            .init_resource::<select_tool::DragState>()
            .init_resource::<HoveredVertex>()
            .add_message::<EditorAction>()
            .init_gizmo_group::<rendering::FeatureGizmoGroup>()
            .add_systems(
                Startup,
                (camera::spawn_camera, rendering::configure_feature_gizmos),
            )
            .add_systems(
                Update,
                (
                    camera::camera_pan,
                    camera::camera_zoom,
                    camera::apply_camera_zoom,
                    grid::draw_grid,
                ),
            )
            // Input systems run before the action queue is drained, so an
            // action emitted this frame is applied this frame; rendering and
            // the hover probe see the post-transition state.
            .add_systems(
                Update,
                (
                    (
                        draw_tool::handle_draw_clicks,
                        append_tool::handle_append_clicks,
                        select_tool::handle_selection,
                        select_tool::handle_vertex_drag,
                        shortcuts::handle_shortcuts,
                    ),
                    actions::process_actions,
                    (
                        hover::hover_probe,
                        hover::update_cursor_icon,
                        rendering::render_features,
                        rendering::render_sketch,
                        rendering::render_vertices,
                    ),
                )
                    .chain(),
            );
    }
}

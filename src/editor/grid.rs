use bevy::prelude::*;

use crate::config::AppConfig;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, GRID_SPACING_M};
use crate::theme;

use super::camera::{CameraZoom, MapCamera};

pub fn draw_grid(
    mut gizmos: Gizmos,
    config: Res<AppConfig>,
    camera_query: Query<(&Transform, &CameraZoom), With<MapCamera>>,
) {
    if !config.data.grid_visible {
        return;
    }

    let Ok((camera_transform, zoom)) = camera_query.single() else {
        return;
    };

    let grid_size = GRID_SPACING_M;
    let grid_color = theme::GRID_COLOR;

    let view_width = DEFAULT_WINDOW_WIDTH * zoom.scale;
    let view_height = DEFAULT_WINDOW_HEIGHT * zoom.scale;

    let camera_pos = camera_transform.translation.truncate();

    let start_x = ((camera_pos.x - view_width / 2.0) / grid_size).floor() as i32;
    let end_x = ((camera_pos.x + view_width / 2.0) / grid_size).ceil() as i32;
    let start_y = ((camera_pos.y - view_height / 2.0) / grid_size).floor() as i32;
    let end_y = ((camera_pos.y + view_height / 2.0) / grid_size).ceil() as i32;

    for x in start_x..=end_x {
        let x_pos = x as f32 * grid_size;
        gizmos.line_2d(
            Vec2::new(x_pos, start_y as f32 * grid_size),
            Vec2::new(x_pos, end_y as f32 * grid_size),
            grid_color,
        );
    }

    for y in start_y..=end_y {
        let y_pos = y as f32 * grid_size;
        gizmos.line_2d(
            Vec2::new(start_x as f32 * grid_size, y_pos),
            Vec2::new(end_x as f32 * grid_size, y_pos),
            grid_color,
        );
    }
}

//! Centralized color theme for the application.
//!
//! This module provides all colors used throughout the editor UI and
//! rendering. Modify values here to change the application's color scheme.

use bevy::prelude::Color;

// ============================================================================
// Grid Colors
// ============================================================================

/// Semi-transparent grey grid lines
pub const GRID_COLOR: Color = Color::srgba(0.5, 0.5, 0.5, 0.3);

// ============================================================================
// Line Colors
// ============================================================================

/// Finalized polylines
pub const LINE_COLOR: Color = Color::srgb(0.85, 0.25, 0.2);

/// The currently selected polyline
pub const SELECTED_LINE_COLOR: Color = Color::srgb(0.2, 0.6, 1.0);

/// In-progress draw/append sketch
pub const SKETCH_COLOR: Color = Color::srgba(0.95, 0.6, 0.1, 0.9);

/// Rubber-band segment from the last sketch vertex to the cursor
pub const RUBBER_BAND_COLOR: Color = Color::srgba(0.95, 0.6, 0.1, 0.5);

// ============================================================================
// Vertex Colors
// ============================================================================

/// Vertex markers on the selected line
pub const VERTEX_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);

/// The vertex currently reported by the hover probe
pub const HOVERED_VERTEX_COLOR: Color = Color::srgb(0.1, 0.9, 0.4);

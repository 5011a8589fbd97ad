//! Background chrome drawn beneath every variant: the uniform grid and the
//! horizontal midline axis.

use glam::Vec2;
use wavekit_core::{palette, DisplayList};

/// Grid cell size in logical pixels.
pub const GRID_SPACING: f32 = 40.0;

/// Append light grid lines covering the viewport.
pub fn draw_grid(width: f32, height: f32, out: &mut DisplayList) {
    let mut x = 0.0;
    while x < width {
        out.polyline(
            vec![Vec2::new(x, 0.0), Vec2::new(x, height)],
            palette::GRID_GRAY,
            1.0,
        );
        x += GRID_SPACING;
    }
    let mut y = 0.0;
    while y < height {
        out.polyline(
            vec![Vec2::new(0.0, y), Vec2::new(width, y)],
            palette::GRID_GRAY,
            1.0,
        );
        y += GRID_SPACING;
    }
}

/// Append the rest-position axis across the vertical center.
pub fn draw_axis(width: f32, height: f32, out: &mut DisplayList) {
    let mid = height / 2.0;
    out.polyline(
        vec![Vec2::new(0.0, mid), Vec2::new(width, mid)],
        palette::AXIS_GRAY,
        1.5,
    );
}

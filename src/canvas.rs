/*
 * Canvas Module
 *
 * Coordinate transformations between nannou's window space (origin at the
 * centre, y pointing up) and canvas space (origin at the top-left corner,
 * y pointing down) used by the simulation.
 */

use nannou::prelude::*;

// Convert a point from window space to canvas space
pub fn screen_to_canvas(point: Vec2, window_rect: Rect) -> Vec2 {
    vec2(point.x - window_rect.left(), window_rect.top() - point.y)
}

// Convert a point from canvas space to window space
pub fn canvas_to_screen(point: Vec2, window_rect: Rect) -> Vec2 {
    vec2(window_rect.left() + point.x, window_rect.top() - point.y)
}

pub fn canvas_size(window_rect: Rect) -> Vec2 {
    window_rect.wh()
}

// Length of the canvas diagonal, zero for an empty canvas
pub fn diagonal(size: Vec2) -> f32 {
    size.length()
}

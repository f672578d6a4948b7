/*
 * Renderer Module
 *
 * This module draws the current scene: one line per edge, then one filled
 * circle per dot (pointer dot included), then the debug overlay and the
 * control panel. Scene coordinates are in canvas space and are converted to
 * nannou's window space here.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::canvas;
use crate::field::Scene;
use crate::ui;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();
    draw_scene(&draw, &model.scene, window_rect);

    if model.params.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect);
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        log::warn!("failed to draw frame: {:?}", e);
    }

    // Draw the egui UI
    if let Err(e) = model.egui.draw_to_frame(&frame) {
        log::warn!("failed to draw controls: {:?}", e);
    }
}

// Lines go first so the dots sit on top of them
pub fn draw_scene(draw: &Draw, scene: &Scene, window_rect: Rect) {
    for edge in &scene.edges {
        draw.line()
            .start(canvas::canvas_to_screen(edge.first.position, window_rect))
            .end(canvas::canvas_to_screen(edge.second.position, window_rect))
            .weight(edge.thickness)
            .color(WHITE);
    }

    for dot in &scene.dots {
        draw.ellipse()
            .xy(canvas::canvas_to_screen(dot.position, window_rect))
            .radius(scene.dot_radius)
            .color(WHITE);
    }
}

/*
 * Input Module
 *
 * This module handles user input events for the dots and lines field.
 * Mouse and touch drags drive the pointer dot; window resizes reset the
 * field for the new canvas.
 *
 * Features:
 * - Pointer dot follows a left-button drag or a touch
 * - Releasing, cancelling or leaving the window ends the drag
 * - Clicks on the control panel never reach the field
 */

use nannou::event::TouchEvent;
use nannou::prelude::*;
use nannou::winit::event::{MouseButton, TouchPhase};

use crate::app::Model;
use crate::canvas;

// Window resized event handler
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.field.size_changed(size, model.params.population_factor, &mut model.rng);
}

// Mouse moved event handler
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    let canvas_pos = canvas::screen_to_canvas(pos, app.window_rect());

    if model.field.pointer.is_dragging() {
        model.field.pointer_move_to(canvas_pos);
    }

    // Always update the stored mouse position
    model.mouse_position = canvas_pos;
}

// Mouse pressed event handler
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }

    // Check if the click is on the UI before handling it
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }

    log::trace!("pointer down at {:?}", model.mouse_position);
    model.field.pointer_down(model.mouse_position);
}

// Mouse released event handler
pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left && model.field.pointer.is_dragging() {
        log::trace!("pointer up");
        model.field.pointer_up();
    }
}

// The cursor left the window mid-drag
pub fn mouse_exited(_app: &App, model: &mut Model) {
    if model.field.pointer.is_dragging() {
        log::trace!("pointer cancelled");
        model.field.pointer_cancel();
    }
}

// Touch event handler, one finger drives the pointer dot
pub fn touch(app: &App, model: &mut Model, touch: TouchEvent) {
    let canvas_pos = canvas::screen_to_canvas(touch.position, app.window_rect());

    match touch.phase {
        TouchPhase::Started => {
            if !model.egui.ctx().is_pointer_over_area() {
                model.field.pointer_down(canvas_pos);
            }
        }
        TouchPhase::Moved => model.field.pointer_move_to(canvas_pos),
        TouchPhase::Ended => model.field.pointer_up(),
        TouchPhase::Cancelled => model.field.pointer_cancel(),
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}

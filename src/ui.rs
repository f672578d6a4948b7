/*
 * UI Module
 *
 * This module contains functions for creating and updating the control panel
 * using nannou_egui, and for drawing the debug overlay. The panel exposes
 * the five field parameters; change detection is handled by the
 * SimulationParams struct.
 */

use nannou::prelude::*;
use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Buttons pressed during this UI pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiActions {
    pub respawn: bool,
    pub reset_params: bool,
}

// Update the UI and report which buttons were pressed
pub fn update_ui(egui: &mut Egui, params: &mut SimulationParams, debug_info: &DebugInfo) -> UiActions {
    let mut actions = UiActions::default();

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Dots and Lines")
        .default_pos([10.0, 10.0])
        .collapsible(true)
        .show(&ctx, |ui| {
            ui.add(egui::Slider::new(&mut params.threshold, SimulationParams::get_threshold_range()).text("Connectivity"));
            ui.add(egui::Slider::new(&mut params.max_thickness, SimulationParams::get_thickness_range()).text("Line Thickness"));
            ui.add(egui::Slider::new(&mut params.dot_radius, SimulationParams::get_dot_radius_range()).text("Dot Size"));
            ui.add(egui::Slider::new(&mut params.speed, SimulationParams::get_speed_range()).text("Speed"));
            ui.add(egui::Slider::new(&mut params.population_factor, SimulationParams::get_population_range()).text("Density"));

            ui.horizontal(|ui| {
                if ui.button("Respawn").clicked() {
                    actions.respawn = true;
                }
                if ui.button("Reset Parameters").clicked() {
                    actions.reset_params = true;
                }
            });

            ui.separator();

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");

            if params.show_debug {
                ui.label(format!("Dots: {}  Lines: {}", debug_info.dot_count, debug_info.edge_count));
            }
        });

    actions
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &Draw, debug_info: &DebugInfo, window_rect: Rect) {
    let texts = debug_info.lines();

    // Create a background panel in the bottom-left corner, clear of the controls
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;
    let panel_height = line_height * texts.len() as f32 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.bottom() + panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.bottom() + panel_height - margin;

    for (i, text) in texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Text is centred on its position, so shift it right by roughly half its width
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(WHITE)
            .font_size(14);
    }
}

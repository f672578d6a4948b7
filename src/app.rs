/*
 * Application Module
 *
 * This module defines the main application model and the frame loop for the
 * dots and lines demo. It handles initialization, per-frame updates and
 * saving the parameters on exit.
 *
 * Each frame:
 * - the control panel runs and parameter changes are applied to the field
 * - the field is stepped by the time elapsed since the previous frame
 * - a scene snapshot is taken for the renderer
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Duration;

use crate::canvas;
use crate::config::{Config, WindowConfig};
use crate::debug::DebugInfo;
use crate::field::{Field, Scene};
use crate::input;
use crate::params::SimulationParams;
use crate::renderer;
use crate::ui;

// Main model for the application
pub struct Model {
    pub field: Field,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub scene: Scene,
    pub rng: StdRng,
    pub config: Config,
    pub config_path: PathBuf,
    // Last cursor position, in canvas space
    pub mouse_position: Vec2,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let config_path = Config::default_path();
    let config = Config::load_or_default(&config_path);

    let window_id = app
        .new_window()
        .title("Dots and Lines")
        .size(config.window.width, config.window.height)
        .view(renderer::view)
        .resized(input::resized)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .mouse_released(input::mouse_released)
        .mouse_exited(input::mouse_exited)
        .touch(input::touch)
        .raw_event(input::raw_window_event)
        .build()
        .expect("failed to build the main window");

    let window = app.window(window_id).expect("main window was just built");
    let egui = Egui::from_window(&window);
    let canvas_size = canvas::canvas_size(window.rect());
    drop(window);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let params = config.params.clone();
    let mut field = Field::new(params.dot_radius, params.speed);
    field.size_changed(canvas_size, params.population_factor, &mut rng);

    log::info!(
        "starting with {} dots on a {:.0}x{:.0} canvas",
        field.dots.len(),
        canvas_size.x,
        canvas_size.y
    );

    Model {
        field,
        params,
        egui,
        debug_info: DebugInfo::default(),
        scene: Scene::default(),
        rng,
        config,
        config_path,
        mouse_position: Vec2::ZERO,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    model.egui.set_elapsed_time(update.since_start);
    let actions = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if actions.reset_params {
        model.params.reset_to_defaults();
    }

    let changes = model.params.detect_changes();
    if changes.population {
        model.field.set_parameters(model.params.speed, model.params.dot_radius);
        model.field.population_control(model.params.population_factor, &mut model.rng);
    }

    if actions.respawn {
        log::debug!("respawning dots");
        model.field.respawn(model.params.population_factor, &mut model.rng);
    }

    if !model.params.pause_simulation {
        let elapsed_millis = simulation_millis(update.since_last, model.config.time_scale);
        model.field.step(elapsed_millis);
    }

    model.scene = model.field.scene(model.params.threshold, model.params.max_thickness);
    model.debug_info.record_frame(&model.field, &model.scene);
}

// Persist the parameters and the last window size for the next run
pub fn exit(_app: &App, model: Model) {
    let mut config = model.config;
    config.params = model.params;

    let size = model.field.size;
    if size.x >= 1.0 && size.y >= 1.0 {
        config.window = WindowConfig {
            width: size.x.round() as u32,
            height: size.y.round() as u32,
        };
    }

    if let Err(e) = config.save(&model.config_path) {
        log::warn!("could not save configuration: {}", e);
    }
}

// Convert a frame duration into simulation milliseconds
pub fn simulation_millis(since_last: Duration, time_scale: f32) -> f32 {
    since_last.as_secs_f32() * 1000.0 * time_scale
}

/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the dots and lines field. These parameters can
 * be modified through the UI at any time without restarting the simulation,
 * and are persisted with the rest of the configuration.
 * It also provides change detection so the app knows when the field has to
 * be repopulated.
 */

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

// Parameters for the simulation that can be adjusted via UI
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    // Fraction of the canvas diagonal under which two dots are joined
    pub threshold: f32,
    pub max_thickness: f32,
    pub dot_radius: f32,
    pub speed: f32,
    // Dots per 100x100 pixels
    pub population_factor: f32,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    #[serde(skip)]
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Clone, Copy, Debug, PartialEq)]
struct ParamSnapshot {
    threshold: f32,
    max_thickness: f32,
    dot_radius: f32,
    speed: f32,
    population_factor: f32,
    show_debug: bool,
    pause_simulation: bool,
}

// What changed between the last snapshot and now
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParamChanges {
    // Speed, dot size or density changed: the field must be updated
    pub population: bool,
    pub any: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            threshold: 0.06,
            max_thickness: 6.0,
            dot_radius: 4.0,
            speed: 0.05,
            population_factor: 0.3,
            show_debug: false,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            threshold: self.threshold,
            max_thickness: self.max_thickness,
            dot_radius: self.dot_radius,
            speed: self.speed,
            population_factor: self.population_factor,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        }
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.snapshot());
    }

    // Compare against the last snapshot; nothing has changed if there is none
    pub fn detect_changes(&self) -> ParamChanges {
        let Some(prev) = &self.previous_values else {
            return ParamChanges::default();
        };

        let current = self.snapshot();
        let population = current.speed != prev.speed
            || current.dot_radius != prev.dot_radius
            || current.population_factor != prev.population_factor;

        ParamChanges {
            population,
            any: current != *prev,
        }
    }

    // Restore the defaults but keep the debug and pause toggles
    pub fn reset_to_defaults(&mut self) {
        *self = Self {
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
            previous_values: self.previous_values,
            ..Self::default()
        };
    }

    // Pull every value back into its slider range
    pub fn clamp_to_ranges(&mut self) {
        let defaults = Self::default();
        self.threshold = clamp_or(self.threshold, Self::get_threshold_range(), defaults.threshold);
        self.max_thickness = clamp_or(self.max_thickness, Self::get_thickness_range(), defaults.max_thickness);
        self.dot_radius = clamp_or(self.dot_radius, Self::get_dot_radius_range(), defaults.dot_radius);
        self.speed = clamp_or(self.speed, Self::get_speed_range(), defaults.speed);
        self.population_factor = clamp_or(
            self.population_factor,
            Self::get_population_range(),
            defaults.population_factor,
        );
    }

    // Get parameter ranges for UI sliders
    pub fn get_threshold_range() -> RangeInclusive<f32> {
        0.0..=0.2
    }

    pub fn get_thickness_range() -> RangeInclusive<f32> {
        2.0..=20.0
    }

    pub fn get_dot_radius_range() -> RangeInclusive<f32> {
        2.0..=20.0
    }

    pub fn get_speed_range() -> RangeInclusive<f32> {
        0.001..=0.1
    }

    pub fn get_population_range() -> RangeInclusive<f32> {
        0.1..=2.0
    }
}

fn clamp_or(value: f32, range: RangeInclusive<f32>, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(*range.start(), *range.end())
    }
}

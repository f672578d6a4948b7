/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and other debug information to be displayed in the UI.
 *
 * Includes metrics for:
 * - FPS (frames per second) and frame time
 * - Number of dots and of lines drawn
 * - Canvas size
 * - Whether the user is dragging the pointer dot
 */

use nannou::prelude::*;
use std::time::Duration;

use crate::field::{Field, Scene};

// Debug information to display
#[derive(Clone, Debug)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub dot_count: usize,
    pub edge_count: usize,
    pub canvas_size: Vec2,
    pub pointer_active: bool,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            dot_count: 0,
            edge_count: 0,
            canvas_size: Vec2::ZERO,
            pointer_active: false,
        }
    }
}

impl DebugInfo {
    // Refresh the counters from the state that is about to be drawn
    pub fn record_frame(&mut self, field: &Field, scene: &Scene) {
        self.dot_count = field.dots.len();
        self.edge_count = scene.edges.len();
        self.canvas_size = field.size;
        self.pointer_active = field.pointer.is_dragging();
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Dots: {}", self.dot_count),
            format!("Lines: {}", self.edge_count),
            format!("Canvas: {:.0}x{:.0}", self.canvas_size.x, self.canvas_size.y),
            format!("Pointer: {}", if self.pointer_active { "dragging" } else { "idle" }),
        ]
    }
}

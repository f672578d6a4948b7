/*
 * Dots and Lines - Module Definitions
 *
 * This file defines the module structure for the dots and lines demo.
 * The simulation (dot, field, proximity, pointer, canvas) has no window
 * dependency and can be driven by any frame loop; the remaining modules
 * host it in a nannou window.
 */

// Re-export key components for easier access
pub use app::Model;
pub use config::Config;
pub use debug::DebugInfo;
pub use dot::Dot;
pub use error::ConfigError;
pub use field::{target_population, Field, Scene};
pub use params::SimulationParams;
pub use pointer::PointerState;
pub use proximity::{compute_edges, Edge};

// Define modules
pub mod app;
pub mod canvas;
pub mod config;
pub mod debug;
pub mod dot;
pub mod error;
pub mod field;
pub mod input;
pub mod params;
pub mod pointer;
pub mod proximity;
pub mod renderer;
pub mod ui;

//! Configuration file support.
//!
//! The tunable parameters, the initial window size and an optional random
//! seed are stored in a TOML file so the demo comes back the way it was left.
//! The file is read at start-up and rewritten on exit.
//!
//! # Example
//!
//! ```toml
//! seed = 42
//! time_scale = 10.0
//!
//! [params]
//! threshold = 0.06
//! max_thickness = 6.0
//! dot_radius = 4.0
//! speed = 0.05
//! population_factor = 0.3
//!
//! [window]
//! width = 1024
//! height = 768
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::params::SimulationParams;

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV_VAR: &str = "DOTS_AND_LINES_CONFIG";

/// File used when the environment variable is not set.
pub const DEFAULT_CONFIG_FILE: &str = "dots_and_lines.toml";

/// Simulation milliseconds per wall-clock millisecond. At 10 the default
/// parameters give the intended drift speed.
pub const DEFAULT_TIME_SCALE: f32 = 10.0;

/// Everything persisted between runs.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed for the dot generator; entropy is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    pub time_scale: f32,

    pub params: SimulationParams,

    pub window: WindowConfig,
}

/// Initial window size in points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            time_scale: DEFAULT_TIME_SCALE,
            params: SimulationParams::default(),
            window: WindowConfig::default(),
        }
    }
}

impl Config {
    /// Location of the configuration file for this run.
    pub fn default_path() -> PathBuf {
        env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Parses a configuration and pulls out-of-range values back in.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.sanitize();
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads the configuration at `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(ConfigError::Read)?;
        let config = Self::from_toml_str(&content)?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Like [`Config::load`], but a broken file only costs a warning.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("ignoring {}: {}", path.display(), e);
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        fs::write(path, content).map_err(ConfigError::Write)?;
        log::info!("saved configuration to {}", path.display());
        Ok(())
    }

    fn sanitize(&mut self) {
        self.params.clamp_to_ranges();

        if !self.time_scale.is_finite() || self.time_scale <= 0.0 {
            self.time_scale = DEFAULT_TIME_SCALE;
        }

        self.window.width = self.window.width.max(1);
        self.window.height = self.window.height.max(1);
    }
}

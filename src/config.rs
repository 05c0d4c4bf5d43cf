//! Configuration loading for DhuliSim

use serde::Deserialize;
use std::path::Path;

use crate::error::Result;
use crate::mapping::MappingConfig;
use crate::playback::PlaybackConfig;
use crate::walk::WalkConfig;

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub walk: WalkConfig,
    #[serde(default)]
    pub mapping: MappingConfig,
}

/// Grid dimensions
#[derive(Clone, Debug, Deserialize)]
pub struct GridConfig {
    /// Grid height in cells (default: 25)
    #[serde(default = "default_height")]
    pub height: usize,

    /// Grid width in cells (default: 50)
    #[serde(default = "default_width")]
    pub width: usize,

    /// Step budget for a full battery (default: height × width)
    #[serde(default)]
    pub full_battery_steps: Option<u32>,
}

fn default_height() -> usize {
    25
}

fn default_width() -> usize {
    50
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            width: default_width(),
            full_battery_steps: None,
        }
    }
}

impl GridConfig {
    /// Full-battery step count, defaulting to one step per cell.
    pub fn battery_steps(&self) -> u32 {
        self.full_battery_steps
            .unwrap_or((self.height * self.width) as u32)
    }
}

impl SimConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

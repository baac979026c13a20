use std::error::Error;
use std::fs;
use std::path::Path;

use cubeworld_mesh::UNIT_HALF_EXTENT;
use cubeworld_sector::{SectorConfig, SectorGrid};
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub sector: SectorConfig,
    #[serde(default)]
    pub cube: CubeConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CubeConfig {
    #[serde(default = "default_half_extent")]
    pub half_extent: f32,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            half_extent: default_half_extent(),
        }
    }
}

fn default_half_extent() -> f32 {
    UNIT_HALF_EXTENT
}

/// Validated settings shared by every command.
#[derive(Clone, Copy, Debug)]
pub struct Settings {
    pub grid: SectorGrid,
    pub half_extent: f32,
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(s)?)
    }

    pub fn validate(&self) -> Result<Settings, Box<dyn Error>> {
        let grid = self.sector.to_grid()?;
        let half_extent = self.cube.half_extent;
        if !(half_extent.is_finite() && half_extent > 0.0) {
            return Err(format!("cube.half_extent must be positive, got {}", half_extent).into());
        }
        Ok(Settings { grid, half_extent })
    }
}

/// Reads `path`; a missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, Box<dyn Error>> {
    if !path.exists() {
        log::warn!("config {} not found; using defaults", path.display());
        return Ok(AppConfig::default());
    }
    let s = fs::read_to_string(path)?;
    let cfg = AppConfig::from_toml_str(&s)?;
    log::info!("config loaded from {}", path.display());
    Ok(cfg)
}

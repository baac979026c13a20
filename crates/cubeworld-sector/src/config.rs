use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::SectorError;
use crate::grid::{SECTOR_SIZE, SectorGrid};

/// `[sector]` table of the world config file.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SectorConfig {
    #[serde(default = "default_size")]
    pub size: i64,
}

impl Default for SectorConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
        }
    }
}

fn default_size() -> i64 {
    i64::from(SECTOR_SIZE)
}

impl SectorConfig {
    /// Validates the configured size. Call once at startup and share the grid.
    pub fn to_grid(&self) -> Result<SectorGrid, SectorError> {
        SectorGrid::with_size(self.size)
    }

    /// Reads the `[sector]` table from a TOML document; other tables are ignored.
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        #[derive(Deserialize)]
        struct Doc {
            #[serde(default)]
            sector: SectorConfig,
        }
        let doc: Doc = toml::from_str(s)?;
        Ok(doc.sector)
    }
}

pub fn load_grid_from_path(path: &Path) -> Result<SectorGrid, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg = SectorConfig::from_toml_str(&s)?;
    Ok(cfg.to_grid()?)
}

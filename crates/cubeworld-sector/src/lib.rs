//! Block normalization and XZ sector indexing.
#![forbid(unsafe_code)]

pub mod config;
mod coord;
mod error;
mod grid;

pub use config::{SectorConfig, load_grid_from_path};
pub use coord::{BlockPos, SectorCoord};
pub use error::SectorError;
pub use grid::{
    MAX_SECTOR_SIZE, SECTOR_SIZE, SectorColumns, SectorGrid, SectorSize, normalize,
    reverse_sectorize, sectorize,
};

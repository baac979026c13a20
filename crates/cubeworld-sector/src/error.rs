use std::fmt;

use cubeworld_geom::InvalidPositionError;

use crate::grid::MAX_SECTOR_SIZE;

#[derive(Clone, Debug, PartialEq)]
pub enum SectorError {
    /// Position is not a finite `(x, y, z)` triple on the block lattice.
    InvalidPosition(InvalidPositionError),
    /// Input is not a well-formed sector coordinate.
    InvalidSector(String),
    /// Sector size outside `1..=MAX_SECTOR_SIZE`; carries the rejected value.
    DivisionConfig(i64),
}

impl fmt::Display for SectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectorError::InvalidPosition(e) => write!(f, "{}", e),
            SectorError::InvalidSector(msg) => write!(f, "invalid sector: {}", msg),
            SectorError::DivisionConfig(size) => {
                write!(f, "sector size must be between 1 and {}, got {}", MAX_SECTOR_SIZE, size)
            }
        }
    }
}

impl std::error::Error for SectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SectorError::InvalidPosition(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvalidPositionError> for SectorError {
    fn from(e: InvalidPositionError) -> Self {
        SectorError::InvalidPosition(e)
    }
}

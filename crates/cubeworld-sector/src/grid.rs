//! Position normalization and the sector partition of the XZ plane.

use core::iter::FusedIterator;

use cubeworld_geom::{InvalidPositionError, Vec3};

use crate::SectorError;
use crate::coord::{BlockPos, SectorCoord};

/// Default side length of a sector, in blocks.
pub const SECTOR_SIZE: i32 = 16;

/// Largest accepted sector side. `size * size` columns must fit in one allocation.
pub const MAX_SECTOR_SIZE: i32 = 1 << 15;

/// Validated sector side length. Always in `1..=MAX_SECTOR_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SectorSize(i32);

impl SectorSize {
    pub const DEFAULT: SectorSize = SectorSize(SECTOR_SIZE);

    pub fn new(size: i64) -> Result<Self, SectorError> {
        if (1..=i64::from(MAX_SECTOR_SIZE)).contains(&size) {
            Ok(SectorSize(size as i32))
        } else {
            Err(SectorError::DivisionConfig(size))
        }
    }

    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Default for SectorSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Rounds each component to the nearest integer, halves away from zero.
///
/// `(0.5, -0.5, 2.49)` normalizes to `(1, -1, 2)`.
///
/// Positions are `f32`, which holds every integer exactly only up to `2^24`
/// in magnitude. Beyond that neighboring blocks share one `f32` value; use
/// [`SectorGrid::sector_of_block`] when the block coordinate is already an
/// integer.
pub fn normalize(position: Vec3) -> Result<BlockPos, SectorError> {
    if !position.is_finite() {
        return Err(InvalidPositionError::NonFinite(position).into());
    }
    // i32::MAX is not representable in f32; 2^31 is the first value out of range.
    const LIMIT: f32 = 2_147_483_648.0;
    let round = |v: f32| {
        let r = v.round();
        if (-LIMIT..LIMIT).contains(&r) {
            Ok(r as i32)
        } else {
            Err(InvalidPositionError::OutOfRange(position))
        }
    };
    Ok(BlockPos::new(
        round(position.x)?,
        round(position.y)?,
        round(position.z)?,
    ))
}

/// Partition of the XZ plane into square sectors of a fixed size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SectorGrid {
    size: SectorSize,
}

impl SectorGrid {
    pub fn new(size: SectorSize) -> Self {
        log::debug!("sector grid configured: size={}", size.get());
        Self { size }
    }

    /// Validates `size` and builds a grid.
    pub fn with_size(size: i64) -> Result<Self, SectorError> {
        SectorSize::new(size).map(Self::new)
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.size.get()
    }

    /// Number of columns in one sector.
    #[inline]
    pub fn columns_per_sector(&self) -> usize {
        let s = self.size() as usize;
        s * s
    }

    /// Sector containing the column `(x, z)`. Floors toward negative infinity.
    #[inline]
    pub fn sector_of_column(&self, x: i32, z: i32) -> SectorCoord {
        SectorCoord::new(x.div_euclid(self.size()), z.div_euclid(self.size()))
    }

    #[inline]
    pub fn sector_of_block(&self, block: BlockPos) -> SectorCoord {
        self.sector_of_column(block.x, block.z)
    }

    /// Normalizes `position` and returns its sector.
    pub fn sectorize(&self, position: Vec3) -> Result<SectorCoord, SectorError> {
        normalize(position).map(|b| self.sector_of_block(b))
    }

    /// Offset of column `(x, z)` inside its sector, each in `0..size`.
    #[inline]
    pub fn local_column(&self, x: i32, z: i32) -> (u32, u32) {
        (
            x.rem_euclid(self.size()) as u32,
            z.rem_euclid(self.size()) as u32,
        )
    }

    #[inline]
    pub fn contains_column(&self, sector: SectorCoord, x: i32, z: i32) -> bool {
        self.sector_of_column(x, z) == sector
    }

    /// Minimum-corner column of `sector`.
    pub fn sector_origin(&self, sector: SectorCoord) -> Result<(i32, i32), SectorError> {
        let span = |s: i32, axis: &str| {
            s.checked_mul(self.size())
                .filter(|start| start.checked_add(self.size() - 1).is_some())
                .ok_or_else(|| {
                    SectorError::InvalidSector(format!(
                        "{} = {} is outside the block range for size {}",
                        axis,
                        s,
                        self.size()
                    ))
                })
        };
        Ok((span(sector.sx, "sx")?, span(sector.sz, "sz")?))
    }

    /// Lazily enumerates the columns of `sector`, x ascending then z ascending.
    pub fn columns(&self, sector: SectorCoord) -> Result<SectorColumns, SectorError> {
        let (x0, z0) = self.sector_origin(sector)?;
        Ok(SectorColumns {
            x0,
            z0,
            size: self.size() as u64,
            next: 0,
            end: self.size() as u64 * self.size() as u64,
        })
    }

    /// All `size * size` columns `(x, z)` of `sector`, x-major.
    pub fn reverse_sectorize(&self, sector: SectorCoord) -> Result<Vec<(i32, i32)>, SectorError> {
        Ok(self.columns(sector)?.collect())
    }

    /// [`Self::reverse_sectorize`] for the `(sx, 0, sz)` tuple form.
    pub fn reverse_sectorize_tuple(
        &self,
        sector: (i32, i32, i32),
    ) -> Result<Vec<(i32, i32)>, SectorError> {
        self.reverse_sectorize(SectorCoord::try_from(sector)?)
    }
}

/// Iterator over the columns of one sector. See [`SectorGrid::columns`].
#[derive(Clone, Debug)]
pub struct SectorColumns {
    x0: i32,
    z0: i32,
    size: u64,
    next: u64,
    end: u64,
}

impl Iterator for SectorColumns {
    type Item = (i32, i32);

    #[inline]
    fn next(&mut self) -> Option<(i32, i32)> {
        if self.next >= self.end {
            return None;
        }
        let i = self.next;
        self.next += 1;
        // origin + offset stays in range: sector_origin checked the last column
        let x = self.x0 + (i / self.size) as i32;
        let z = self.z0 + (i % self.size) as i32;
        Some((x, z))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.end - self.next) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SectorColumns {}
impl FusedIterator for SectorColumns {}

/// [`SectorGrid::sectorize`] on the default grid.
pub fn sectorize(position: Vec3) -> Result<SectorCoord, SectorError> {
    SectorGrid::default().sectorize(position)
}

/// [`SectorGrid::reverse_sectorize`] on the default grid.
pub fn reverse_sectorize(sector: SectorCoord) -> Result<Vec<(i32, i32)>, SectorError> {
    SectorGrid::default().reverse_sectorize(sector)
}

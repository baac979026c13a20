use cubeworld_geom::Vec3;
use serde::{Deserialize, Serialize};

use crate::SectorError;

/// Integer lattice point: the block containing a world position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// World-space center of the block, suitable as a cube center for meshing.
    #[inline]
    pub fn center(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl From<(i32, i32, i32)> for BlockPos {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<BlockPos> for (i32, i32, i32) {
    fn from(value: BlockPos) -> Self {
        (value.x, value.y, value.z)
    }
}

/// Sector key on the XZ plane. Sectors span the full height of the world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SectorCoord {
    pub sx: i32,
    pub sz: i32,
}

impl SectorCoord {
    #[inline]
    pub const fn new(sx: i32, sz: i32) -> Self {
        Self { sx, sz }
    }

    /// Neighbor `dx`, `dz` sectors away; `None` past the `i32` edge.
    #[inline]
    pub fn offset(self, dx: i32, dz: i32) -> Option<Self> {
        Some(Self {
            sx: self.sx.checked_add(dx)?,
            sz: self.sz.checked_add(dz)?,
        })
    }

    #[inline]
    pub fn distance_sq(self, other: SectorCoord) -> i64 {
        let dx = i64::from(self.sx) - i64::from(other.sx);
        let dz = i64::from(self.sz) - i64::from(other.sz);
        dx * dx + dz * dz
    }

    /// Three-component form `(sx, 0, sz)`.
    #[inline]
    pub const fn to_tuple(self) -> (i32, i32, i32) {
        (self.sx, 0, self.sz)
    }

    /// Sectors within Chebyshev distance `radius`, ordered by x then z.
    pub fn neighborhood(self, radius: u32) -> impl Iterator<Item = SectorCoord> {
        let r = radius as i64;
        let (cx, cz) = (i64::from(self.sx), i64::from(self.sz));
        let in_range = |v: i64| v >= i64::from(i32::MIN) && v <= i64::from(i32::MAX);
        (cx - r..=cx + r)
            .filter(move |x| in_range(*x))
            .flat_map(move |x| {
                (cz - r..=cz + r)
                    .filter(move |z| in_range(*z))
                    .map(move |z| SectorCoord::new(x as i32, z as i32))
            })
    }
}

impl From<(i32, i32)> for SectorCoord {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<SectorCoord> for (i32, i32, i32) {
    fn from(value: SectorCoord) -> Self {
        value.to_tuple()
    }
}

impl TryFrom<(i32, i32, i32)> for SectorCoord {
    type Error = SectorError;

    /// Accepts only the `(sx, 0, sz)` form produced by sectorization.
    fn try_from(value: (i32, i32, i32)) -> Result<Self, Self::Error> {
        match value {
            (sx, 0, sz) => Ok(Self::new(sx, sz)),
            (_, sy, _) => Err(SectorError::InvalidSector(format!(
                "sector y must be 0, got {}",
                sy
            ))),
        }
    }
}

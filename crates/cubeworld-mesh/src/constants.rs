//! Shared constants for cubeworld-mesh. Centralizes the cube layout numbers.

/// Half extent of the unit cube (side length 1.0).
pub const UNIT_HALF_EXTENT: f32 = 0.5;

pub const FACE_COUNT: usize = 6;
pub const VERTS_PER_FACE: usize = 4;
pub const VERTS_PER_CUBE: usize = FACE_COUNT * VERTS_PER_FACE; // 24
pub const SCALARS_PER_CUBE: usize = VERTS_PER_CUBE * 3; // 72

// Two triangles per face quad
pub(crate) const INDICES_PER_FACE: usize = 6;
pub(crate) const INDICES_PER_CUBE: usize = FACE_COUNT * INDICES_PER_FACE;
pub(crate) const QUAD_TRIANGLES: [u32; INDICES_PER_FACE] = [0, 1, 2, 0, 2, 3];

use cubeworld_geom::Vec3;

use crate::batch::batch_cube_vertices_into;
use crate::constants::{
    INDICES_PER_CUBE, QUAD_TRIANGLES, SCALARS_PER_CUBE, VERTS_PER_CUBE, VERTS_PER_FACE,
};
use crate::cube::CUBE_SHADE;

/// Render-ready buffers for a set of cubes: positions, shades and triangle indices.
#[derive(Default, Clone, Debug)]
pub struct CubeMeshBuild {
    pub pos: Vec<f32>,
    pub shade: Vec<f32>,
    pub idx: Vec<u32>,
}

impl CubeMeshBuild {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the buffers for one cube per position.
    pub fn from_positions(positions: &[Vec3], half_extent: f32) -> Self {
        let mut mb = Self::new();
        mb.push_cubes(positions, half_extent);
        mb
    }

    /// Clears all arrays but retains capacity for reuse across frames.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.shade.clear();
        self.idx.clear();
    }

    /// Pre-reserve capacity for `n_cubes` cubes worth of data.
    #[inline]
    pub fn reserve_cubes(&mut self, n_cubes: usize) {
        self.pos.reserve(n_cubes * SCALARS_PER_CUBE);
        self.shade.reserve(n_cubes * VERTS_PER_CUBE);
        self.idx.reserve(n_cubes * INDICES_PER_CUBE);
    }

    #[inline]
    pub fn cube_count(&self) -> usize {
        self.shade.len() / VERTS_PER_CUBE
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    /// Appends one cube.
    pub fn push_cube(&mut self, center: Vec3, half_extent: f32) {
        self.push_cubes(&[center], half_extent);
    }

    /// Appends one cube per position, in order.
    pub fn push_cubes(&mut self, positions: &[Vec3], half_extent: f32) {
        self.reserve_cubes(positions.len());
        let first_vertex = self.vertex_count() as u32;
        batch_cube_vertices_into(positions, half_extent, &mut self.pos);
        for cube in 0..positions.len() as u32 {
            self.shade.extend_from_slice(&CUBE_SHADE);
            let cube_base = first_vertex + cube * VERTS_PER_CUBE as u32;
            for face in 0..(VERTS_PER_CUBE / VERTS_PER_FACE) as u32 {
                let base = cube_base + face * VERTS_PER_FACE as u32;
                self.idx.extend(QUAD_TRIANGLES.iter().map(|i| base + i));
            }
        }
    }

    /// Returns a slice of interleaved vertex positions (x,y,z per vertex).
    pub fn positions(&self) -> &[f32] {
        &self.pos
    }

    /// Returns the per-vertex shade factors.
    pub fn shades(&self) -> &[f32] {
        &self.shade
    }

    /// Returns triangle indices into the vertex arrays.
    pub fn indices(&self) -> &[u32] {
        &self.idx
    }
}

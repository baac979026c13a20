//! Cube vertex and shade generation for block rendering.
#![forbid(unsafe_code)]

use std::fmt;

use cubeworld_geom::InvalidPositionError;

mod batch;
pub mod constants;
mod cube;
mod face;
mod mesh_build;

pub use batch::{
    batch_cube_vertices, batch_cube_vertices_flat, batch_cube_vertices_into,
    batch_cube_vertices_sized,
};
pub use constants::{SCALARS_PER_CUBE, UNIT_HALF_EXTENT, VERTS_PER_CUBE};
pub use cube::{
    BASE_CUBE, CUBE_SHADE, CubeShade, CubeVertices, cube_shade, cube_vertices, face_vertices,
    scaled_cube,
};
pub use face::Face;
pub use mesh_build::CubeMeshBuild;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeshError {
    InvalidPosition(InvalidPositionError),
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::InvalidPosition(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for MeshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeshError::InvalidPosition(e) => Some(e),
        }
    }
}

impl From<InvalidPositionError> for MeshError {
    fn from(e: InvalidPositionError) -> Self {
        MeshError::InvalidPosition(e)
    }
}

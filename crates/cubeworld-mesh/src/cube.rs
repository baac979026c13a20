//! Single-cube vertex and shade generation.
//!
//! Every cube uses the same layout: faces in `Face::ALL` order, four vertices
//! per face, each vertex `center + sign * half_extent` with signs from
//! [`Face::corners`].

use cubeworld_geom::Vec3;

use crate::constants::{FACE_COUNT, SCALARS_PER_CUBE, UNIT_HALF_EXTENT, VERTS_PER_CUBE, VERTS_PER_FACE};
use crate::face::Face;

/// 24 vertices as packed `x,y,z` scalars.
pub type CubeVertices = [f32; SCALARS_PER_CUBE];
/// One shade factor per vertex.
pub type CubeShade = [f32; VERTS_PER_CUBE];

/// Unit cube centered at the origin.
pub const BASE_CUBE: CubeVertices = scaled_cube(UNIT_HALF_EXTENT);

/// Per-vertex shade factors, identical for every cube.
pub const CUBE_SHADE: CubeShade = build_shade();

/// Cube centered at the origin with the given half extent.
pub const fn scaled_cube(half_extent: f32) -> CubeVertices {
    let mut out = [0.0f32; SCALARS_PER_CUBE];
    let mut f = 0;
    while f < FACE_COUNT {
        let corners = Face::ALL[f].corners();
        let mut v = 0;
        while v < VERTS_PER_FACE {
            let mut axis = 0;
            while axis < 3 {
                out[(f * VERTS_PER_FACE + v) * 3 + axis] = corners[v][axis] * half_extent;
                axis += 1;
            }
            v += 1;
        }
        f += 1;
    }
    out
}

const fn build_shade() -> CubeShade {
    let mut out = [0.0f32; VERTS_PER_CUBE];
    let mut i = 0;
    while i < VERTS_PER_CUBE {
        out[i] = Face::ALL[i / VERTS_PER_FACE].shade();
        i += 1;
    }
    out
}

/// Writes `shape` translated by `center` into `out`.
#[inline]
pub(crate) fn offset_cube_into(shape: &CubeVertices, center: Vec3, out: &mut [f32]) {
    let c = center.to_array();
    for (dst, (src, axis)) in out
        .iter_mut()
        .zip(shape.iter().zip((0..3).cycle()))
    {
        *dst = src + c[axis];
    }
}

/// Vertices of an axis-aligned cube of side `2 * half_extent` centered at `center`.
///
/// Pass [`UNIT_HALF_EXTENT`] for a block-sized cube.
pub fn cube_vertices(center: Vec3, half_extent: f32) -> CubeVertices {
    let shape = scaled_cube(half_extent);
    let mut out = [0.0f32; SCALARS_PER_CUBE];
    offset_cube_into(&shape, center, &mut out);
    out
}

/// Per-vertex shade factors for a cube. Independent of position and size.
#[inline]
pub fn cube_shade(_center: Vec3, _half_extent: f32) -> CubeShade {
    CUBE_SHADE
}

/// Iterates the vertices of one face of a cube as points.
pub fn face_vertices(center: Vec3, half_extent: f32, face: Face) -> [Vec3; VERTS_PER_FACE] {
    face.corners()
        .map(|c| center + Vec3::from(c) * half_extent)
}

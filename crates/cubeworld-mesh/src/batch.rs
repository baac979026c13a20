//! Batched cube generation: one shared base shape plus a per-cube offset.

use cubeworld_geom::{InvalidPositionError, Vec3};

use crate::MeshError;
use crate::constants::{SCALARS_PER_CUBE, UNIT_HALF_EXTENT};
use crate::cube::{BASE_CUBE, CubeVertices, offset_cube_into, scaled_cube};

/// Unit cubes for every position, in input order.
///
/// `batch_cube_vertices(ps)[i] == cube_vertices(ps[i], UNIT_HALF_EXTENT)`.
pub fn batch_cube_vertices(positions: &[Vec3]) -> Vec<CubeVertices> {
    batch_with_shape(positions, &BASE_CUBE)
}

/// Like [`batch_cube_vertices`] with an explicit half extent.
pub fn batch_cube_vertices_sized(positions: &[Vec3], half_extent: f32) -> Vec<CubeVertices> {
    if half_extent == UNIT_HALF_EXTENT {
        return batch_cube_vertices(positions);
    }
    batch_with_shape(positions, &scaled_cube(half_extent))
}

fn batch_with_shape(positions: &[Vec3], shape: &CubeVertices) -> Vec<CubeVertices> {
    log::trace!("batch_cube_vertices: {} cubes", positions.len());
    positions
        .iter()
        .map(|&p| {
            let mut out = [0.0f32; SCALARS_PER_CUBE];
            offset_cube_into(shape, p, &mut out);
            out
        })
        .collect()
}

/// Appends `72 * positions.len()` scalars to `out`, reusing its allocation.
///
/// Existing contents of `out` are kept; new cubes start at the old length.
pub fn batch_cube_vertices_into(positions: &[Vec3], half_extent: f32, out: &mut Vec<f32>) {
    let shape = scaled_cube(half_extent);
    let start = out.len();
    out.resize(start + positions.len() * SCALARS_PER_CUBE, 0.0);
    for (dst, &p) in out[start..]
        .chunks_exact_mut(SCALARS_PER_CUBE)
        .zip(positions)
    {
        offset_cube_into(&shape, p, dst);
    }
}

/// Batched unit cubes from packed `x,y,z` triples.
///
/// Fails without producing output when `coords.len()` is not a multiple of 3.
pub fn batch_cube_vertices_flat(coords: &[f32]) -> Result<Vec<CubeVertices>, MeshError> {
    if coords.len() % 3 != 0 {
        return Err(MeshError::InvalidPosition(
            InvalidPositionError::PartialTriple { len: coords.len() },
        ));
    }
    let positions = coords
        .chunks_exact(3)
        .map(Vec3::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(batch_cube_vertices(&positions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::cube_vertices;

    #[test]
    fn empty_batch_is_empty() {
        assert!(batch_cube_vertices(&[]).is_empty());
        assert!(batch_cube_vertices_sized(&[], 2.0).is_empty());
        let mut buf = vec![1.0];
        batch_cube_vertices_into(&[], 0.5, &mut buf);
        assert_eq!(buf, vec![1.0]);
    }

    #[test]
    fn into_appends_after_existing_data() {
        let ps = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(-4.0, 0.0, 9.5)];
        let mut buf = vec![7.0; 3];
        batch_cube_vertices_into(&ps, UNIT_HALF_EXTENT, &mut buf);
        assert_eq!(buf.len(), 3 + 2 * SCALARS_PER_CUBE);
        assert_eq!(&buf[..3], &[7.0; 3]);
        assert_eq!(&buf[3..75], &cube_vertices(ps[0], 0.5)[..]);
        assert_eq!(&buf[75..], &cube_vertices(ps[1], 0.5)[..]);
    }

    #[test]
    fn flat_rejects_partial_triples() {
        let err = batch_cube_vertices_flat(&[1.0, 2.0, 3.0, 4.0]).unwrap_err();
        assert_eq!(
            err,
            MeshError::InvalidPosition(InvalidPositionError::PartialTriple { len: 4 })
        );
        assert!(err.to_string().contains("4 packed scalars leave 1 trailing"), "{}", err);
    }

    #[test]
    fn flat_matches_vec3_batch() {
        let flat = [0.0, 0.0, 0.0, 1.5, -2.0, 3.0];
        let out = batch_cube_vertices_flat(&flat).unwrap();
        assert_eq!(
            out,
            batch_cube_vertices(&[Vec3::ZERO, Vec3::new(1.5, -2.0, 3.0)])
        );
    }
}

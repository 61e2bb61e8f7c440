//! # Normal Estimation
//!
//! Derives per-vertex normals from triangle topology by accumulating
//! unnormalized face normals. Larger triangles weigh more because the cross
//! product magnitude equals twice the triangle area.

use config::constants::TextureConfig;
use glam::DVec3;
use rayon::prelude::*;
use tracing::{debug, warn};

/// Estimates normals with the default zero-length threshold.
///
/// See [`estimate_normals_with`].
///
/// # Example
///
/// ```rust
/// use surface_mesh::normals::estimate_normals;
/// use glam::DVec3;
///
/// let vertices = [DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::splat(5.0)];
/// let normals = estimate_normals(&vertices, &[[0, 1, 2]]);
/// assert_eq!(normals[0], DVec3::Z);
/// // Vertex 3 is not referenced by any triangle
/// assert_eq!(normals[3], DVec3::ZERO);
/// ```
pub fn estimate_normals(vertices: &[DVec3], triangles: &[[u32; 3]]) -> Vec<DVec3> {
    estimate_normals_with(vertices, triangles, &TextureConfig::default())
}

/// Estimates one normal per vertex, index-aligned with `vertices`.
///
/// Each triangle contributes `(v1 - v0) × (v2 - v0)` to its three vertices.
/// Accumulators shorter than `config.zero_length_threshold` stay zero, which
/// callers must read as "undefined slope". Triangles referencing vertices
/// past the end of `vertices` are skipped.
pub fn estimate_normals_with(
    vertices: &[DVec3],
    triangles: &[[u32; 3]],
    config: &TextureConfig,
) -> Vec<DVec3> {
    let mut normals = vec![DVec3::ZERO; vertices.len()];

    for tri in triangles {
        let [a, b, c] = tri.map(|i| i as usize);
        let (Some(v0), Some(v1), Some(v2)) = (vertices.get(a), vertices.get(b), vertices.get(c)) else {
            continue;
        };

        let normal = (*v1 - *v0).cross(*v2 - *v0);
        normals[a] += normal;
        normals[b] += normal;
        normals[c] += normal;
    }

    let threshold = config.zero_length_threshold;
    normals.par_iter_mut().for_each(|normal| {
        let len = normal.length();
        *normal = if len.is_finite() && len >= threshold {
            *normal / len
        } else {
            DVec3::ZERO
        };
    });

    let undefined = normals.iter().filter(|n| **n == DVec3::ZERO).count();
    if undefined > 0 && !triangles.is_empty() {
        warn!(
            "{} of {} vertices have no defined normal",
            undefined,
            vertices.len()
        );
    }
    debug!(
        "Estimated normals: {} vertices, {} triangles",
        vertices.len(),
        triangles.len()
    );

    normals
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_triangle_normal_follows_winding() {
        let vertices = [DVec3::ZERO, DVec3::X, DVec3::Y];
        let ccw = estimate_normals(&vertices, &[[0, 1, 2]]);
        let cw = estimate_normals(&vertices, &[[0, 2, 1]]);
        assert_eq!(ccw, vec![DVec3::Z; 3]);
        assert_eq!(cw, vec![DVec3::NEG_Z; 3]);
    }

    #[test]
    fn test_output_is_index_aligned() {
        let vertices = vec![DVec3::ZERO; 7];
        let normals = estimate_normals(&vertices, &[]);
        assert_eq!(normals.len(), 7);
        assert!(normals.iter().all(|n| *n == DVec3::ZERO));
    }

    #[test]
    fn test_shared_vertex_averages_by_area() {
        // Two triangles folded along the y axis: one in the xy plane, one in the yz plane
        let vertices = [
            DVec3::ZERO,
            DVec3::Y,
            DVec3::X,
            DVec3::NEG_Z,
        ];
        let normals = estimate_normals(&vertices, &[[0, 2, 1], [0, 1, 3]]);
        // Shared edge vertices get the bisector of +z and -x
        let expected = DVec3::new(-1.0, 0.0, 1.0).normalize();
        assert_relative_eq!(normals[0].x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(normals[0].z, expected.z, epsilon = 1e-12);
        assert_eq!(normals[2], DVec3::Z);
        assert_eq!(normals[3], DVec3::NEG_X);
    }

    #[test]
    fn test_degenerate_triangle_leaves_zero_not_nan() {
        let p = DVec3::new(1.0, 2.0, 3.0);
        let normals = estimate_normals(&[p, p, p], &[[0, 1, 2]]);
        for n in normals {
            assert_eq!(n, DVec3::ZERO);
            assert!(!n.is_nan());
        }
    }

    #[test]
    fn test_threshold_is_configurable() {
        // Cross product length is 1e-8
        let vertices = [DVec3::ZERO, DVec3::new(1e-4, 0.0, 0.0), DVec3::new(0.0, 1e-4, 0.0)];
        let default = estimate_normals(&vertices, &[[0, 1, 2]]);
        assert_eq!(default[0], DVec3::Z);

        let coarse = TextureConfig::new(40.0, 1e-6).unwrap();
        let strict = estimate_normals_with(&vertices, &[[0, 1, 2]], &coarse);
        assert_eq!(strict[0], DVec3::ZERO);
    }

    #[test]
    fn test_out_of_range_triangle_is_skipped() {
        let vertices = [DVec3::ZERO, DVec3::X, DVec3::Y];
        let normals = estimate_normals(&vertices, &[[0, 1, 9], [0, 1, 2]]);
        assert_eq!(normals[0], DVec3::Z);
    }
}

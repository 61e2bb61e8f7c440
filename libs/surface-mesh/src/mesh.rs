//! # Mesh Data Structure
//!
//! The finalized, index-aligned surface handed to the rendering host:
//! positions, normals and texture coordinates share one vertex index space,
//! and every triangle index stays below the vertex count.

use glam::{DMat4, DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::{SurfaceError, SurfaceResult};
use crate::normals::estimate_normals;
use crate::texture::unit;

/// Half-open range `start..end` of vertex indices written by one append.
///
/// Ranges returned by a [`MeshBuilder`](crate::builder::MeshBuilder) stay
/// valid for the life of the build because appends never rewrite indices.
///
/// # Example
///
/// ```rust
/// use surface_mesh::IndexRange;
///
/// let range = IndexRange::new(4, 10);
/// assert_eq!(range.len(), 6);
/// assert_eq!(range.iter().last(), Some(9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexRange {
    /// First vertex index in the range.
    pub start: usize,
    /// One past the last vertex index in the range.
    pub end: usize,
}

impl IndexRange {
    /// Creates a range; `end` is clamped so the range is never inverted.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Number of vertices in the range.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the range covers no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Iterates the vertex indices of the range.
    pub fn iter(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Fails unless the range fits inside a buffer of `len` vertices.
    pub(crate) fn check_within(&self, len: usize) -> SurfaceResult<()> {
        if self.end > len {
            return Err(SurfaceError::RangeOutOfBounds {
                start: self.start,
                end: self.end,
                len,
            });
        }
        Ok(())
    }
}

/// Axis-aligned bounds.
///
/// # Example
///
/// ```rust
/// use surface_mesh::Aabb;
/// use glam::DVec3;
///
/// // Corners may be given in any order
/// let bounds = Aabb::new(DVec3::new(1.0, 0.0, 2.0), DVec3::new(0.0, 3.0, 0.0));
/// assert_eq!(bounds.min, DVec3::new(0.0, 0.0, 0.0));
/// assert_eq!(bounds.size(), DVec3::new(1.0, 3.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Aabb {
    /// Creates bounds spanning two opposite corners.
    pub fn new(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Extent along each axis.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// The 8 corners; bit 0 of the index selects max x, bit 1 max y, bit 2 max z.
    pub fn corners(&self) -> [DVec3; 8] {
        let (lo, hi) = (self.min, self.max);
        std::array::from_fn(|i| {
            DVec3::new(
                if i & 1 == 0 { lo.x } else { hi.x },
                if i & 2 == 0 { lo.y } else { hi.y },
                if i & 4 == 0 { lo.z } else { hi.z },
            )
        })
    }
}

/// A finalized triangle mesh with index-aligned vertex attributes.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens through the `*_f32` helpers at the rendering boundary.
///
/// # Example
///
/// ```rust
/// use surface_mesh::MeshBuilder;
/// use glam::DVec3;
///
/// let mut builder = MeshBuilder::new();
/// builder.append_sphere(DVec3::ZERO, 1.0, 8, 6).unwrap();
/// let mesh = builder.finish();
/// assert_eq!(mesh.vertex_count(), 48);
/// assert_eq!(mesh.normals().len(), mesh.vertex_count());
/// assert!(mesh.validate().is_ok());
/// ```
///
/// Deserialization runs [`Mesh::validate`], so a payload whose buffers are
/// misaligned is rejected instead of becoming a `Mesh`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MeshParts")]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Per-vertex normals, zero where undefined
    normals: Vec<DVec3>,
    /// Per-vertex texture coordinates in [0,1]×[0,1]
    texture_coordinates: Vec<DVec2>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

/// Unchecked wire form of [`Mesh`].
#[derive(Deserialize)]
struct MeshParts {
    vertices: Vec<DVec3>,
    normals: Vec<DVec3>,
    texture_coordinates: Vec<DVec2>,
    triangles: Vec<[u32; 3]>,
}

impl TryFrom<MeshParts> for Mesh {
    type Error = SurfaceError;

    fn try_from(parts: MeshParts) -> SurfaceResult<Self> {
        let mesh = Mesh {
            vertices: parts.vertices,
            normals: parts.normals,
            texture_coordinates: parts.texture_coordinates,
            triangles: parts.triangles,
        };
        mesh.validate()?;
        Ok(mesh)
    }
}

impl Mesh {
    /// Assembles a mesh from buffers the builder kept aligned.
    pub(crate) fn from_parts(
        vertices: Vec<DVec3>,
        normals: Vec<DVec3>,
        texture_coordinates: Vec<DVec2>,
        triangles: Vec<[u32; 3]>,
    ) -> Self {
        debug_assert_eq!(vertices.len(), normals.len());
        debug_assert_eq!(vertices.len(), texture_coordinates.len());
        Self {
            vertices,
            normals,
            texture_coordinates,
            triangles,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the per-vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns a reference to the per-vertex texture coordinates.
    #[inline]
    pub fn texture_coordinates(&self) -> &[DVec2] {
        &self.texture_coordinates
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Replaces the normals with ones estimated from the triangle topology.
    pub fn with_estimated_normals(self) -> Self {
        let normals = estimate_normals(&self.vertices, &self.triangles);
        Self { normals, ..self }
    }

    /// Replaces the normals; the buffer must match the vertex count.
    pub fn with_normals(self, normals: Vec<DVec3>) -> SurfaceResult<Self> {
        if normals.len() != self.vertices.len() {
            return Err(SurfaceError::length_mismatch(
                "normals",
                self.vertices.len(),
                normals.len(),
            ));
        }
        Ok(Self { normals, ..self })
    }

    /// Merges texture coordinates produced by a strategy back by index.
    ///
    /// The buffer must match the vertex count. Components are clamped into
    /// [0,1] and NaN becomes 0.
    pub fn with_texture_coordinates(self, mut texture_coordinates: Vec<DVec2>) -> SurfaceResult<Self> {
        if texture_coordinates.len() != self.vertices.len() {
            return Err(SurfaceError::length_mismatch(
                "texture coordinates",
                self.vertices.len(),
                texture_coordinates.len(),
            ));
        }
        for uv in &mut texture_coordinates {
            *uv = DVec2::new(unit(uv.x), unit(uv.y));
        }
        Ok(Self {
            texture_coordinates,
            ..self
        })
    }

    /// Computes the axis-aligned bounds, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<Aabb> {
        let (first, rest) = self.vertices.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)));
        Some(Aabb { min, max })
    }

    /// Returns a copy placed by a 4x4 affine transform.
    ///
    /// Normals go through the inverse transpose; undefined (zero) normals
    /// stay zero.
    pub fn transformed(&self, matrix: &DMat4) -> Mesh {
        let vertices = self
            .vertices
            .iter()
            .map(|v| matrix.transform_point3(*v))
            .collect();

        let normal_matrix = matrix.inverse().transpose();
        let normals = self
            .normals
            .iter()
            .map(|n| normal_matrix.transform_vector3(*n).normalize_or_zero())
            .collect();

        Mesh {
            vertices,
            normals,
            texture_coordinates: self.texture_coordinates.clone(),
            triangles: self.triangles.clone(),
        }
    }

    /// Merges another mesh into this one.
    ///
    /// Triangle indices of `other` are offset by this mesh's vertex count,
    /// which lets independently built meshes be concatenated.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.texture_coordinates
            .extend_from_slice(&other.texture_coordinates);

        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Normal and texture coordinate buffers match the vertex count
    /// - Every texture coordinate lies in [0,1]×[0,1]
    /// - All triangle indices are valid
    ///
    /// Zero-area triangles are allowed: sphere poles produce them.
    pub fn validate(&self) -> SurfaceResult<()> {
        let len = self.vertices.len();
        if self.normals.len() != len {
            return Err(SurfaceError::length_mismatch("normals", len, self.normals.len()));
        }
        if self.texture_coordinates.len() != len {
            return Err(SurfaceError::length_mismatch(
                "texture coordinates",
                len,
                self.texture_coordinates.len(),
            ));
        }
        let in_unit = |c: f64| (0.0..=1.0).contains(&c);
        if let Some((index, &value)) = self
            .texture_coordinates
            .iter()
            .enumerate()
            .find(|(_, uv)| !(in_unit(uv.x) && in_unit(uv.y)))
        {
            return Err(SurfaceError::TextureCoordinateOutOfRange { index, value });
        }

        for tri in &self.triangles {
            if let Some(&bad) = tri.iter().find(|&&i| i as usize >= len) {
                return Err(SurfaceError::RangeOutOfBounds {
                    start: bad as usize,
                    end: bad as usize + 1,
                    len,
                });
            }
        }

        Ok(())
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        self.normals
            .iter()
            .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
            .collect()
    }

    /// Exports texture coordinates as flattened [u, v, u, v, ...] f32 array.
    pub fn texture_coordinates_f32(&self) -> Vec<f32> {
        self.texture_coordinates
            .iter()
            .flat_map(|t| [t.x as f32, t.y as f32])
            .collect()
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

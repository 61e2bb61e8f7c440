//! # Mesh Builder
//!
//! Accumulates positions, normals and texture coordinates in three
//! index-aligned buffers. Every vertex is pushed into all three at once, so
//! the buffers cannot drift apart. Appends are monotonic: they never rewrite
//! an existing index, and the [`IndexRange`] each one returns stays a valid
//! handle for back-filling texture coordinates later.
//!
//! ## Example
//!
//! ```rust
//! use surface_mesh::MeshBuilder;
//! use glam::{DVec2, DVec3};
//!
//! let mut builder = MeshBuilder::new();
//! let glyph = builder.append_sphere(DVec3::ZERO, 0.5, 8, 6).unwrap();
//! builder.fill_texture_coordinates(glyph, DVec2::splat(0.25)).unwrap();
//! let mesh = builder.finish();
//! assert_eq!(mesh.texture_coordinates()[glyph.start], DVec2::splat(0.25));
//! ```

mod box_outline;
mod grid;
mod sphere;

use glam::{DVec2, DVec3};
use tracing::debug;

use crate::error::{SurfaceError, SurfaceResult};
use crate::mesh::{IndexRange, Mesh};

/// Incremental builder for a single [`Mesh`].
///
/// Not safe for concurrent appends; build independent meshes on separate
/// builders and combine them with [`Mesh::merge`].
#[derive(Debug, Clone, Default)]
pub struct MeshBuilder {
    positions: Vec<DVec3>,
    normals: Vec<DVec3>,
    texture_coordinates: Vec<DVec2>,
    triangles: Vec<[u32; 3]>,
    /// Every range returned by an append, in call order
    ranges: Vec<IndexRange>,
}

impl MeshBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            texture_coordinates: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            ranges: Vec::new(),
        }
    }

    /// Returns the number of vertices appended so far.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles appended so far.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns every range handed out by an append, in call order.
    pub fn ranges(&self) -> &[IndexRange] {
        &self.ranges
    }

    /// Returns the range written by the most recent append.
    pub fn last_range(&self) -> Option<IndexRange> {
        self.ranges.last().copied()
    }

    /// Overwrites the texture coordinates of a previously returned range.
    ///
    /// `coords` must have one entry per vertex in `range`. Values are clamped
    /// into [0,1].
    pub fn set_texture_coordinates(&mut self, range: IndexRange, coords: &[DVec2]) -> SurfaceResult<()> {
        range.check_within(self.positions.len())?;
        if coords.len() != range.len() {
            return Err(SurfaceError::length_mismatch(
                "texture coordinates",
                range.len(),
                coords.len(),
            ));
        }
        for (slot, uv) in self.texture_coordinates[range.iter()].iter_mut().zip(coords) {
            *slot = uv.clamp(DVec2::ZERO, DVec2::ONE);
        }
        Ok(())
    }

    /// Writes the same texture coordinate to every vertex of a range.
    pub fn fill_texture_coordinates(&mut self, range: IndexRange, uv: DVec2) -> SurfaceResult<()> {
        range.check_within(self.positions.len())?;
        self.texture_coordinates[range.iter()].fill(uv.clamp(DVec2::ZERO, DVec2::ONE));
        Ok(())
    }

    /// Freezes the buffers into an immutable [`Mesh`].
    pub fn finish(self) -> Mesh {
        debug!(
            "Finished mesh: {} vertices, {} triangles, {} primitives",
            self.positions.len(),
            self.triangles.len(),
            self.ranges.len()
        );
        Mesh::from_parts(
            self.positions,
            self.normals,
            self.texture_coordinates,
            self.triangles,
        )
    }

    // =========================================================================
    // INTERNAL HELPERS
    // =========================================================================

    /// Pushes one vertex into all three attribute buffers.
    fn push_vertex(&mut self, position: DVec3, normal: DVec3, uv: DVec2) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        self.texture_coordinates.push(uv);
        index
    }

    fn push_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Emits two triangles per cell of a `rows × columns` vertex lattice
    /// starting at `offset`.
    ///
    /// Unflipped cells face `column step × row step`; flipped cells face the
    /// opposite way.
    fn push_grid_indices(&mut self, offset: u32, rows: u32, columns: u32, flipped: bool) {
        for i in 0..rows - 1 {
            for j in 0..columns - 1 {
                let a = offset + i * columns + j;
                let b = a + 1;
                let c = a + columns;
                let d = c + 1;
                if flipped {
                    self.push_triangle(a, c, d);
                    self.push_triangle(d, b, a);
                } else {
                    self.push_triangle(a, b, d);
                    self.push_triangle(d, c, a);
                }
            }
        }
    }

    /// Records and returns the range covering vertices pushed since `start`.
    fn close_range(&mut self, start: usize) -> IndexRange {
        let range = IndexRange::new(start, self.positions.len());
        self.ranges.push(range);
        range
    }
}

//! Axis-aligned boxes and bounding-box outlines built from box beams.

use config::constants::BOX_EDGE_COUNT;
use glam::{DVec2, DVec3};
use tracing::debug;

use super::MeshBuilder;
use crate::error::{SurfaceError, SurfaceResult};
use crate::mesh::{Aabb, IndexRange};

/// Corner texture coordinates of a face quad, counter-clockwise.
const FACE_UVS: [DVec2; 4] = [
    DVec2::new(0.0, 0.0),
    DVec2::new(1.0, 0.0),
    DVec2::new(1.0, 1.0),
    DVec2::new(0.0, 1.0),
];

impl MeshBuilder {
    /// Appends an axis-aligned box with 4 vertices per face.
    ///
    /// Faces do not share vertices, so each carries its flat outward normal.
    /// Produces 24 vertices and 12 triangles. Negative size components are
    /// treated as their absolute value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use surface_mesh::MeshBuilder;
    /// use glam::DVec3;
    ///
    /// let mut builder = MeshBuilder::new();
    /// let range = builder.append_box(DVec3::ZERO, DVec3::ONE);
    /// assert_eq!(range.len(), 24);
    /// assert_eq!(builder.triangle_count(), 12);
    /// ```
    pub fn append_box(&mut self, center: DVec3, size: DVec3) -> IndexRange {
        let start = self.vertex_count();
        let half = size.abs() * 0.5;

        for axis in 0..3 {
            for sign in [1.0, -1.0] {
                let normal = DVec3::AXES[axis] * sign;
                // u × v == normal keeps the quad counter-clockwise seen from outside
                let u = DVec3::AXES[(axis + 1) % 3] * half;
                let v = DVec3::AXES[(axis + 2) % 3] * half * sign;
                let face_center = center + normal * half[axis];

                let corners = [
                    face_center - u - v,
                    face_center + u - v,
                    face_center + u + v,
                    face_center - u + v,
                ];
                let base = self.vertex_count() as u32;
                for (corner, uv) in corners.into_iter().zip(FACE_UVS) {
                    self.push_vertex(corner, normal, uv);
                }
                self.push_triangle(base, base + 1, base + 2);
                self.push_triangle(base, base + 2, base + 3);
            }
        }

        self.close_range(start)
    }

    /// Appends the 12 edges of `bounds` as square-section beams.
    ///
    /// Each beam is centred on its edge with side `thickness` and extends
    /// `thickness / 2` past both corners so adjacent beams close the joint.
    /// The returned range covers all 12 beams; [`ranges`](Self::ranges) also
    /// records each beam individually.
    ///
    /// # Errors
    ///
    /// [`SurfaceError::InvalidThickness`] if `thickness` is not positive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use surface_mesh::{Aabb, MeshBuilder};
    /// use glam::DVec3;
    ///
    /// let mut builder = MeshBuilder::new();
    /// let bounds = Aabb::new(DVec3::ZERO, DVec3::splat(10.0));
    /// let range = builder.append_bounding_box_outline(&bounds, 0.1).unwrap();
    /// assert_eq!(range.len(), 12 * 24);
    /// ```
    pub fn append_bounding_box_outline(&mut self, bounds: &Aabb, thickness: f64) -> SurfaceResult<IndexRange> {
        if !(thickness.is_finite() && thickness > 0.0) {
            return Err(SurfaceError::InvalidThickness { thickness });
        }

        let start = self.vertex_count();
        let corners = bounds.corners();

        let mut edges = 0;
        for (i, from) in corners.iter().enumerate() {
            for axis in 0..3 {
                let bit = 1 << axis;
                if i & bit != 0 {
                    continue;
                }
                let to = corners[i | bit];
                let mut size = DVec3::splat(thickness);
                size[axis] += (to - *from)[axis];
                self.append_box((*from + to) * 0.5, size);
                edges += 1;
            }
        }
        debug_assert_eq!(edges, BOX_EDGE_COUNT);

        debug!(
            "Appended bounding box outline {:?}..{:?} (thickness {})",
            bounds.min, bounds.max, thickness
        );
        Ok(self.close_range(start))
    }
}

//! Rectangular grid tessellation of row-major sample points.

use glam::{DVec2, DVec3};
use tracing::debug;

use super::MeshBuilder;
use crate::data::{check_grid_shape, AttributeGrid};
use crate::error::SurfaceResult;
use crate::mesh::IndexRange;

impl MeshBuilder {
    /// Appends a grid of row-major points, `rows = points.len() / columns`.
    ///
    /// Each cell becomes two triangles whose normal is
    /// `column step × row step`, so points laid out with x growing by column
    /// and y growing by row face +z. Normals and texture coordinates of the
    /// new vertices are zero; fill them afterwards through the returned range.
    ///
    /// # Errors
    ///
    /// [`SurfaceError::InvalidGrid`] when `columns < 2`, the point count is
    /// not a multiple of `columns`, or fewer than 2 rows result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use surface_mesh::MeshBuilder;
    /// use glam::DVec3;
    ///
    /// let points: Vec<DVec3> = (0..12)
    ///     .map(|i| DVec3::new((i % 4) as f64, (i / 4) as f64, 0.0))
    ///     .collect();
    /// let mut builder = MeshBuilder::new();
    /// let range = builder.append_rectangular_grid(&points, 4).unwrap();
    /// assert_eq!(range.len(), 12);
    /// assert_eq!(builder.triangle_count(), 12);
    /// ```
    pub fn append_rectangular_grid(&mut self, points: &[DVec3], columns: usize) -> SurfaceResult<IndexRange> {
        check_grid_shape(points.len(), columns)?;
        let rows = points.len() / columns;

        let start = self.vertex_count();
        for point in points {
            self.push_vertex(*point, DVec3::ZERO, DVec2::ZERO);
        }
        self.push_grid_indices(start as u32, rows as u32, columns as u32, false);

        debug!("Appended {}x{} grid at vertex {}", rows, columns, start);
        Ok(self.close_range(start))
    }

    /// Appends an already validated [`AttributeGrid`].
    pub fn append_attribute_grid(&mut self, grid: &AttributeGrid) -> SurfaceResult<IndexRange> {
        self.append_rectangular_grid(grid.points(), grid.columns())
    }
}

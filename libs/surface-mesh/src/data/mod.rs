//! # Attribute Data
//!
//! Read-only sample data supplied by callers: regular grids of points,
//! terrain height fields and scatter datasets. Nothing in this crate
//! mutates them.

mod scatter;
mod terrain;

pub use scatter::ScatterDataset;
pub use terrain::TerrainModel;

use config::constants::MIN_GRID_EXTENT;
use glam::DVec3;

use crate::error::{SurfaceError, SurfaceResult};

/// Row-major grid of sample points with at least 2 rows and 2 columns.
///
/// # Example
///
/// ```rust
/// use surface_mesh::data::AttributeGrid;
/// use glam::DVec3;
///
/// let grid = AttributeGrid::new(vec![DVec3::ZERO; 6], 3).unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert!(AttributeGrid::new(vec![DVec3::ZERO; 5], 3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeGrid {
    points: Vec<DVec3>,
    columns: usize,
}

impl AttributeGrid {
    /// Wraps row-major points, validating the shape.
    pub fn new(points: Vec<DVec3>, columns: usize) -> SurfaceResult<Self> {
        check_grid_shape(points.len(), columns)?;
        Ok(Self { points, columns })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.points.len() / self.columns
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// All points, row-major.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Point at `(row, column)`, or `None` outside the grid.
    pub fn point(&self, row: usize, column: usize) -> Option<DVec3> {
        if column >= self.columns {
            return None;
        }
        self.points.get(row * self.columns + column).copied()
    }
}

/// Fails with `InvalidGrid` unless `len` samples form at least 2×2 rows × `columns`.
pub(crate) fn check_grid_shape(len: usize, columns: usize) -> SurfaceResult<()> {
    if columns < MIN_GRID_EXTENT || len % columns != 0 || len / columns < MIN_GRID_EXTENT {
        return Err(SurfaceError::InvalidGrid {
            points: len,
            columns,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_point_lookup() {
        let points: Vec<DVec3> = (0..6).map(|i| DVec3::splat(i as f64)).collect();
        let grid = AttributeGrid::new(points, 3).unwrap();
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.point(1, 2), Some(DVec3::splat(5.0)));
        assert_eq!(grid.point(0, 3), None);
        assert_eq!(grid.point(2, 0), None);
    }

    #[test]
    fn test_grid_shape_rules() {
        assert!(check_grid_shape(4, 2).is_ok());
        assert!(check_grid_shape(4, 0).is_err());
        assert!(check_grid_shape(2, 2).is_err());
        assert!(check_grid_shape(7, 2).is_err());
    }
}

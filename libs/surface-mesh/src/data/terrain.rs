//! Regular height-field terrain model.

use glam::{DVec2, DVec3};

use super::{check_grid_shape, AttributeGrid};
use crate::error::SurfaceResult;

/// Heights sampled on a regular footprint, row-major.
///
/// Column `c` of row `r` sits at
/// `origin + (c * spacing.x, r * spacing.y)`. Positive spacing keeps the
/// tessellated surface facing +z; a negative component mirrors the
/// footprint and flips it.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainModel {
    origin: DVec2,
    spacing: DVec2,
    columns: usize,
    heights: Vec<f64>,
}

impl TerrainModel {
    /// Creates a terrain model, validating the height grid shape.
    ///
    /// # Example
    ///
    /// ```rust
    /// use surface_mesh::data::TerrainModel;
    /// use glam::DVec2;
    ///
    /// let terrain = TerrainModel::new(DVec2::ZERO, DVec2::ONE, 2, vec![0.0, 1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(terrain.sample(1, 0), Some(2.0));
    /// assert_eq!(terrain.height_range(), Some((0.0, 3.0)));
    /// ```
    pub fn new(origin: DVec2, spacing: DVec2, columns: usize, heights: Vec<f64>) -> SurfaceResult<Self> {
        check_grid_shape(heights.len(), columns)?;
        Ok(Self {
            origin,
            spacing,
            columns,
            heights,
        })
    }

    /// Number of rows of samples.
    #[inline]
    pub fn rows(&self) -> usize {
        self.heights.len() / self.columns
    }

    /// Number of columns of samples.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Raw heights, row-major.
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    /// Height at `(row, column)`, or `None` outside the footprint.
    pub fn sample(&self, row: usize, column: usize) -> Option<f64> {
        if column >= self.columns {
            return None;
        }
        self.heights.get(row * self.columns + column).copied()
    }

    /// Lowest and highest height.
    pub fn height_range(&self) -> Option<(f64, f64)> {
        let (first, rest) = self.heights.split_first()?;
        Some(
            rest.iter()
                .fold((*first, *first), |(lo, hi), h| (lo.min(*h), hi.max(*h))),
        )
    }

    /// Lays the heights out as 3D points: x by column, y by row, z = height.
    pub fn to_grid(&self) -> AttributeGrid {
        let points = self
            .heights
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let cell = DVec2::new((i % self.columns) as f64, (i / self.columns) as f64);
                (self.origin + cell * self.spacing).extend(*h)
            })
            .collect::<Vec<DVec3>>();

        AttributeGrid {
            points,
            columns: self.columns,
        }
    }
}

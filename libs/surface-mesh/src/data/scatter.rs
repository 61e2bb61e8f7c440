//! Scatter dataset: points with one scalar each.

use glam::DVec3;

use crate::error::{SurfaceError, SurfaceResult};

/// Parallel arrays of points and scalar values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScatterDataset {
    points: Vec<DVec3>,
    values: Vec<f64>,
}

impl ScatterDataset {
    /// Pairs points with values; both must have the same length.
    ///
    /// # Example
    ///
    /// ```rust
    /// use surface_mesh::data::ScatterDataset;
    /// use glam::DVec3;
    ///
    /// let data = ScatterDataset::new(vec![DVec3::ZERO, DVec3::X], vec![1.0, 4.0]).unwrap();
    /// assert_eq!(data.value_range(), Some((1.0, 4.0)));
    /// assert!(ScatterDataset::new(vec![DVec3::ZERO], vec![]).is_err());
    /// ```
    pub fn new(points: Vec<DVec3>, values: Vec<f64>) -> SurfaceResult<Self> {
        if points.len() != values.len() {
            return Err(SurfaceError::length_mismatch("scatter values", points.len(), values.len()));
        }
        Ok(Self { points, values })
    }

    /// Number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the dataset has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point positions.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Scalar values, index-aligned with [`points`](Self::points).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Smallest and largest value.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let (first, rest) = self.values.split_first()?;
        Some(
            rest.iter()
                .fold((*first, *first), |(lo, hi), v| (lo.min(*v), hi.max(*v))),
        )
    }
}

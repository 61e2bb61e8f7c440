//! Scatter value mapping: one normalized scalar per glyph range.

use glam::DVec2;

use super::{unit, TextureStrategy};
use crate::error::{SurfaceError, SurfaceResult};
use crate::mesh::{IndexRange, Mesh};

/// Normalizes `values` into [0,1] and writes `(u, u)` to every vertex of the
/// matching range.
///
/// The output covers indices `0..max(range.end)`; vertices outside every
/// range keep `(0, 0)`. Empty ranges are no-op writes.
///
/// # Errors
///
/// - [`SurfaceError::LengthMismatch`] if `values` and `ranges` differ in length
/// - [`SurfaceError::DegenerateRange`] if every value is equal
///
/// # Example
///
/// ```rust
/// use surface_mesh::texture::scatter_value_coords;
/// use surface_mesh::IndexRange;
///
/// let ranges = [IndexRange::new(0, 1), IndexRange::new(1, 2), IndexRange::new(2, 3)];
/// let coords = scatter_value_coords(&[10.0, 20.0, 30.0], &ranges).unwrap();
/// let u: Vec<f64> = coords.iter().map(|c| c.x).collect();
/// assert_eq!(u, vec![0.0, 0.5, 1.0]);
/// ```
pub fn scatter_value_coords(values: &[f64], ranges: &[IndexRange]) -> SurfaceResult<Vec<DVec2>> {
    let len = ranges.iter().map(|r| r.end).max().unwrap_or(0);
    let mut coords = vec![DVec2::ZERO; len];
    write_scatter_coords(values, ranges, &mut coords)?;
    Ok(coords)
}

/// Writes normalized values into `coords` range by range.
fn write_scatter_coords(values: &[f64], ranges: &[IndexRange], coords: &mut [DVec2]) -> SurfaceResult<()> {
    if values.len() != ranges.len() {
        return Err(SurfaceError::length_mismatch("scatter ranges", values.len(), ranges.len()));
    }
    for range in ranges {
        range.check_within(coords.len())?;
    }
    if values.is_empty() {
        return Ok(());
    }

    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    if max == min {
        return Err(SurfaceError::DegenerateRange { value: min });
    }
    // Halve the operands when the full span overflows f64.
    let scale = if (max - min).is_finite() { 1.0 } else { 0.5 };
    let span = max * scale - min * scale;

    for (value, range) in values.iter().zip(ranges) {
        let u = unit((value * scale - min * scale) / span);
        coords[range.iter()].fill(DVec2::splat(u));
    }
    Ok(())
}

/// Scatter-value strategy over the glyph ranges of a mesh.
///
/// Vertices outside every range keep the mesh's existing coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScatterValue {
    /// One scalar per glyph.
    pub values: Vec<f64>,
    /// Vertex range of each glyph, index-aligned with `values`.
    pub ranges: Vec<IndexRange>,
}

impl ScatterValue {
    /// Creates the strategy from parallel values and glyph ranges.
    pub fn new(values: Vec<f64>, ranges: Vec<IndexRange>) -> Self {
        Self { values, ranges }
    }
}

impl TextureStrategy for ScatterValue {
    fn texture_coordinates(&self, mesh: &Mesh) -> SurfaceResult<Vec<DVec2>> {
        let mut coords = mesh.texture_coordinates().to_vec();
        write_scatter_coords(&self.values, &self.ranges, &mut coords)?;
        Ok(coords)
    }
}

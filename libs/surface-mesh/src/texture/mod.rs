//! # Texture Strategies
//!
//! Derive one texture coordinate per vertex from a finished mesh. Each
//! strategy writes `(u, u)` so a 1D gradient brush can be sampled as a 2D
//! texture, and every value it produces lies in [0,1].
//!
//! ## Strategies
//!
//! - [`SlopeAngle`]: angle between the normal and +z, saturating at a
//!   configurable slope
//! - [`SlopeDirection`]: compass direction of the normal's horizontal part,
//!   wrapping at due east
//! - [`ScatterValue`]: one normalized scalar per glyph range
//!
//! [`TextureKind`] closes the set for exhaustive dispatch through
//! [`compute_texture_coords`]; hosts can add their own strategies by
//! implementing [`TextureStrategy`].

mod scatter;
mod slope;

pub use scatter::{scatter_value_coords, ScatterValue};
pub use slope::{
    slope_angle_coords, slope_angle_coords_with, slope_direction_coords, slope_direction_coords_with,
    SlopeAngle, SlopeDirection,
};

use glam::DVec2;
use tracing::debug;

use crate::error::SurfaceResult;
use crate::mesh::Mesh;

/// Produces an index-aligned texture coordinate buffer for a mesh.
pub trait TextureStrategy {
    /// Returns one coordinate per vertex of `mesh`, each in [0,1]×[0,1].
    fn texture_coordinates(&self, mesh: &Mesh) -> SurfaceResult<Vec<DVec2>>;
}

/// Closed set of built-in texture strategies.
#[derive(Debug, Clone, PartialEq)]
pub enum TextureKind {
    /// Slope steepness.
    SlopeAngle(SlopeAngle),
    /// Slope compass direction.
    SlopeDirection(SlopeDirection),
    /// Per-glyph scalar values.
    ScatterValue(ScatterValue),
}

impl TextureStrategy for TextureKind {
    fn texture_coordinates(&self, mesh: &Mesh) -> SurfaceResult<Vec<DVec2>> {
        match self {
            TextureKind::SlopeAngle(strategy) => strategy.texture_coordinates(mesh),
            TextureKind::SlopeDirection(strategy) => strategy.texture_coordinates(mesh),
            TextureKind::ScatterValue(strategy) => strategy.texture_coordinates(mesh),
        }
    }
}

/// Computes texture coordinates for `mesh` with the chosen strategy.
///
/// # Example
///
/// ```rust
/// use surface_mesh::texture::{compute_texture_coords, SlopeAngle, TextureKind};
/// use surface_mesh::MeshBuilder;
/// use glam::{DVec2, DVec3};
///
/// let mut builder = MeshBuilder::new();
/// builder.append_box(DVec3::ZERO, DVec3::ONE);
/// let mesh = builder.finish();
///
/// let kind = TextureKind::SlopeAngle(SlopeAngle::default());
/// let coords = compute_texture_coords(&kind, &mesh).unwrap();
/// assert_eq!(coords.len(), mesh.vertex_count());
/// // The first face of a box is its vertical +x side
/// assert_eq!(coords[0], DVec2::ONE);
/// ```
pub fn compute_texture_coords(kind: &TextureKind, mesh: &Mesh) -> SurfaceResult<Vec<DVec2>> {
    let coords = kind.texture_coordinates(mesh)?;
    debug!("Computed {} texture coordinates", coords.len());
    Ok(coords)
}

/// Computes texture coordinates and merges them back into the mesh by index.
pub fn apply_texture(mesh: Mesh, strategy: &impl TextureStrategy) -> SurfaceResult<Mesh> {
    let coords = strategy.texture_coordinates(&mesh)?;
    mesh.with_texture_coordinates(coords)
}

/// Clamps a scalar into [0,1], mapping NaN to 0.
#[inline]
pub(crate) fn unit(u: f64) -> f64 {
    if u.is_nan() {
        0.0
    } else {
        u.clamp(0.0, 1.0)
    }
}

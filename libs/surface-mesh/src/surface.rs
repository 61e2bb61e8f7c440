//! # Surface Assembly
//!
//! End-to-end pipelines from caller data to a textured mesh:
//!
//! ```text
//! TerrainModel → grid mesh → estimated normals → slope texture
//! ScatterDataset → sphere glyphs → per-glyph value texture
//! ```

use config::constants::{
    TextureConfig, DEFAULT_PHI_DIVISIONS, DEFAULT_THETA_DIVISIONS, DEGENERATE_SCATTER_COORDINATE,
};
use glam::DVec2;
use tracing::{debug, warn};

use crate::builder::MeshBuilder;
use crate::data::{ScatterDataset, TerrainModel};
use crate::error::{SurfaceError, SurfaceResult};
use crate::mesh::{IndexRange, Mesh};
use crate::normals::estimate_normals_with;
use crate::texture::{scatter_value_coords, slope_angle_coords_with, slope_direction_coords_with};

/// Slope attribute used to texture a terrain surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceTexture {
    /// Steepness, saturating at the configured angle.
    SlopeAngle,
    /// Compass direction of the downhill-facing normal.
    SlopeDirection,
}

/// Tessellates a terrain and textures it by slope.
///
/// # Example
///
/// ```rust
/// use config::constants::TextureConfig;
/// use surface_mesh::data::TerrainModel;
/// use surface_mesh::surface::{terrain_surface, SurfaceTexture};
/// use glam::DVec2;
///
/// let terrain = TerrainModel::new(DVec2::ZERO, DVec2::ONE, 3, vec![0.0; 9]).unwrap();
/// let mesh = terrain_surface(&terrain, SurfaceTexture::SlopeAngle, &TextureConfig::default()).unwrap();
/// assert_eq!(mesh.triangle_count(), 8);
/// // Flat ground
/// assert!(mesh.texture_coordinates().iter().all(|uv| uv.x == 0.0));
/// ```
pub fn terrain_surface(
    terrain: &TerrainModel,
    texture: SurfaceTexture,
    config: &TextureConfig,
) -> SurfaceResult<Mesh> {
    let grid = terrain.to_grid();
    let mut builder = MeshBuilder::with_capacity(
        grid.points().len(),
        2 * (grid.rows() - 1) * (grid.columns() - 1),
    );
    builder.append_attribute_grid(&grid)?;
    let mesh = builder.finish();

    let normals = estimate_normals_with(mesh.vertices(), mesh.triangles(), config);
    let coords = match texture {
        SurfaceTexture::SlopeAngle => slope_angle_coords_with(&normals, config),
        SurfaceTexture::SlopeDirection => slope_direction_coords_with(&normals, config),
    };

    debug!(
        "Terrain surface {}x{} textured by {:?}",
        terrain.rows(),
        terrain.columns(),
        texture
    );
    mesh.with_normals(normals)?.with_texture_coordinates(coords)
}

/// A scatter plot mesh and the vertex range of each data point's glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    /// All glyphs, textured by value.
    pub mesh: Mesh,
    /// Glyph ranges, index-aligned with the dataset.
    pub glyphs: Vec<IndexRange>,
}

/// Builds one sphere glyph per data point and maps its value onto the
/// glyph's texture coordinates.
///
/// When every value is equal, each glyph gets the constant coordinate
/// `(0.5, 0.5)` instead of failing.
///
/// # Errors
///
/// Sphere validation errors ([`SurfaceError::InvalidDivision`],
/// [`SurfaceError::InvalidRadius`]).
///
/// # Example
///
/// ```rust
/// use surface_mesh::data::ScatterDataset;
/// use surface_mesh::surface::scatter_plot;
/// use glam::DVec3;
///
/// let data = ScatterDataset::new(vec![DVec3::ZERO, DVec3::X], vec![0.0, 10.0]).unwrap();
/// let plot = scatter_plot(&data, 0.1, 8, 6).unwrap();
/// assert_eq!(plot.glyphs.len(), 2);
/// assert_eq!(plot.mesh.texture_coordinates()[plot.glyphs[1].start].x, 1.0);
/// ```
pub fn scatter_plot(
    data: &ScatterDataset,
    radius: f64,
    theta_div: u32,
    phi_div: u32,
) -> SurfaceResult<ScatterPlot> {
    let glyph_vertices = theta_div as usize * phi_div as usize;
    let mut builder = MeshBuilder::with_capacity(
        data.len() * glyph_vertices,
        data.len() * 2 * glyph_vertices,
    );

    let glyphs = data
        .points()
        .iter()
        .map(|point| builder.append_sphere(*point, radius, theta_div, phi_div))
        .collect::<SurfaceResult<Vec<_>>>()?;

    match scatter_value_coords(data.values(), &glyphs) {
        Ok(coords) => {
            for glyph in &glyphs {
                builder.set_texture_coordinates(*glyph, &coords[glyph.iter()])?;
            }
        }
        Err(SurfaceError::DegenerateRange { value }) => {
            warn!(
                "All {} scatter values equal {}; using constant texture coordinate",
                data.len(),
                value
            );
            for glyph in &glyphs {
                builder.fill_texture_coordinates(*glyph, DVec2::splat(DEGENERATE_SCATTER_COORDINATE))?;
            }
        }
        Err(other) => return Err(other),
    }

    Ok(ScatterPlot {
        mesh: builder.finish(),
        glyphs,
    })
}

/// Builds a scatter plot with the default glyph resolution of
/// `DEFAULT_THETA_DIVISIONS` × `DEFAULT_PHI_DIVISIONS`.
///
/// See [`scatter_plot`].
pub fn scatter_plot_default(data: &ScatterDataset, radius: f64) -> SurfaceResult<ScatterPlot> {
    scatter_plot(data, radius, DEFAULT_THETA_DIVISIONS, DEFAULT_PHI_DIVISIONS)
}

/// Builds an outline of `mesh`'s bounds as 12 beams of side `thickness`.
///
/// An empty mesh yields an empty outline.
pub fn bounding_box_outline(mesh: &Mesh, thickness: f64) -> SurfaceResult<Mesh> {
    if !(thickness.is_finite() && thickness > 0.0) {
        return Err(SurfaceError::InvalidThickness { thickness });
    }

    let mut builder = MeshBuilder::new();
    if let Some(bounds) = mesh.bounds() {
        builder.append_bounding_box_outline(&bounds, thickness)?;
    }
    Ok(builder.finish())
}

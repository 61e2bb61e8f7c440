//! Slope angle and slope direction mappings of vertex normals.

use config::constants::TextureConfig;
use glam::{DVec2, DVec3};
use rayon::prelude::*;

use super::{unit, TextureStrategy};
use crate::error::SurfaceResult;
use crate::mesh::Mesh;

/// Maps normals to slope steepness with the default calibration.
///
/// See [`slope_angle_coords_with`].
pub fn slope_angle_coords(normals: &[DVec3]) -> Vec<DVec2> {
    slope_angle_coords_with(normals, &TextureConfig::default())
}

/// Maps each normal to `u = angle_from_vertical / saturation`, clamped to
/// [0,1], and returns `(u, u)`.
///
/// Normals shorter than `config.zero_length_threshold` are undefined and map
/// to `u = 0`.
///
/// # Example
///
/// ```rust
/// use surface_mesh::texture::slope_angle_coords;
/// use glam::{DVec2, DVec3};
///
/// let coords = slope_angle_coords(&[DVec3::Z, DVec3::X, DVec3::ZERO]);
/// assert_eq!(coords, vec![DVec2::ZERO, DVec2::ONE, DVec2::ZERO]);
/// ```
pub fn slope_angle_coords_with(normals: &[DVec3], config: &TextureConfig) -> Vec<DVec2> {
    let saturation = config.slope_saturation_degrees;
    let threshold = config.zero_length_threshold;

    normals
        .par_iter()
        .map(|n| {
            let len = n.length();
            if len.is_nan() || len < threshold {
                return DVec2::ZERO;
            }
            let cos = (n.dot(DVec3::Z) / len).clamp(-1.0, 1.0);
            DVec2::splat(unit(cos.acos().to_degrees() / saturation))
        })
        .collect()
}

/// Maps normals to compass direction with the default zero-length threshold.
///
/// See [`slope_direction_coords_with`].
pub fn slope_direction_coords(normals: &[DVec3]) -> Vec<DVec2> {
    slope_direction_coords_with(normals, &TextureConfig::default())
}

/// Maps each normal's horizontal direction onto a hue wheel.
///
/// `angle = atan2(y, x)` in degrees, wrapped into [0,360), then
/// `u = angle / 360`. The only discontinuity is due east (+x), where `u`
/// jumps between 1 and 0. Normals whose horizontal part is shorter than
/// `config.zero_length_threshold` have no direction and map to `u = 0`,
/// whatever the sign of their zero components.
///
/// # Example
///
/// ```rust
/// use surface_mesh::texture::slope_direction_coords;
/// use glam::DVec3;
///
/// let coords = slope_direction_coords(&[DVec3::Y, DVec3::NEG_X, DVec3::NEG_Y, DVec3::Z]);
/// assert!((coords[0].x - 0.25).abs() < 1e-12);
/// assert!((coords[1].x - 0.5).abs() < 1e-12);
/// assert!((coords[2].x - 0.75).abs() < 1e-12);
/// assert_eq!(coords[3].x, 0.0);
/// ```
pub fn slope_direction_coords_with(normals: &[DVec3], config: &TextureConfig) -> Vec<DVec2> {
    let threshold = config.zero_length_threshold;

    normals
        .par_iter()
        .map(|n| {
            let horizontal = n.x.hypot(n.y);
            if horizontal.is_nan() || horizontal < threshold {
                return DVec2::ZERO;
            }
            let mut angle = n.y.atan2(n.x).to_degrees();
            if angle < 0.0 {
                angle += 360.0;
            }
            DVec2::splat(unit(angle / 360.0))
        })
        .collect()
}

/// Slope-angle strategy over a mesh's normals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlopeAngle {
    /// Saturation angle and zero-length threshold.
    pub config: TextureConfig,
}

impl SlopeAngle {
    /// Creates the strategy with an explicit calibration.
    pub fn new(config: TextureConfig) -> Self {
        Self { config }
    }

    /// Creates the strategy from raw calibration values.
    ///
    /// # Errors
    ///
    /// [`SurfaceError::Config`](crate::SurfaceError::Config) if either value
    /// is not finite and positive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use surface_mesh::texture::SlopeAngle;
    ///
    /// let steep = SlopeAngle::try_new(60.0, 1e-9).unwrap();
    /// assert_eq!(steep.config.slope_saturation_degrees, 60.0);
    /// assert!(SlopeAngle::try_new(0.0, 1e-9).is_err());
    /// ```
    pub fn try_new(saturation_degrees: f64, zero_length_threshold: f64) -> SurfaceResult<Self> {
        let config = TextureConfig::new(saturation_degrees, zero_length_threshold)?;
        Ok(Self { config })
    }
}

impl TextureStrategy for SlopeAngle {
    fn texture_coordinates(&self, mesh: &Mesh) -> SurfaceResult<Vec<DVec2>> {
        Ok(slope_angle_coords_with(mesh.normals(), &self.config))
    }
}

/// Slope-direction strategy over a mesh's normals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlopeDirection;

impl TextureStrategy for SlopeDirection {
    fn texture_coordinates(&self, mesh: &Mesh) -> SurfaceResult<Vec<DVec2>> {
        Ok(slope_direction_coords(mesh.normals()))
    }
}

//! UV-sphere tessellation.

use config::constants::MIN_SPHERE_DIVISIONS;
use glam::{DVec2, DVec3};
use std::f64::consts::PI;
use tracing::debug;

use super::MeshBuilder;
use crate::error::{SurfaceError, SurfaceResult};
use crate::mesh::IndexRange;

impl MeshBuilder {
    /// Appends a latitude/longitude sphere of `theta_div × phi_div` vertices.
    ///
    /// Rows run from the north pole (phi = 0) to the south pole (phi = pi);
    /// columns run from theta = 0 to theta = 2pi inclusive. Pole rows and the
    /// seam column are deliberately duplicated so every vertex owns its own
    /// texture coordinate; the zero-area triangles touching the poles are
    /// kept.
    ///
    /// New vertices get radial normals and the `(theta / 2pi, phi / pi)`
    /// texture coordinate.
    ///
    /// # Errors
    ///
    /// - [`SurfaceError::InvalidDivision`] if either division count is below 3
    /// - [`SurfaceError::InvalidRadius`] if the radius is not positive
    ///
    /// # Example
    ///
    /// ```rust
    /// use surface_mesh::MeshBuilder;
    /// use glam::DVec3;
    ///
    /// let mut builder = MeshBuilder::new();
    /// let range = builder.append_sphere(DVec3::ZERO, 1.0, 16, 16).unwrap();
    /// assert_eq!(range.len(), 256);
    /// ```
    pub fn append_sphere(
        &mut self,
        center: DVec3,
        radius: f64,
        theta_div: u32,
        phi_div: u32,
    ) -> SurfaceResult<IndexRange> {
        if theta_div < MIN_SPHERE_DIVISIONS || phi_div < MIN_SPHERE_DIVISIONS {
            return Err(SurfaceError::InvalidDivision { theta_div, phi_div });
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SurfaceError::InvalidRadius { radius });
        }

        let start = self.vertex_count();
        for pi in 0..phi_div {
            let v = pi as f64 / (phi_div - 1) as f64;
            let (sin_phi, cos_phi) = (v * PI).sin_cos();

            for ti in 0..theta_div {
                let u = ti as f64 / (theta_div - 1) as f64;
                let (sin_theta, cos_theta) = (u * 2.0 * PI).sin_cos();

                let normal = DVec3::new(cos_theta * sin_phi, sin_theta * sin_phi, cos_phi);
                self.push_vertex(center + normal * radius, normal, DVec2::new(u, v));
            }
        }

        // Rows advance phi and columns advance theta, so outward needs the flipped winding
        self.push_grid_indices(start as u32, phi_div, theta_div, true);

        debug!(
            "Appended sphere r={} ({}x{}) at vertex {}",
            radius, theta_div, phi_div, start
        );
        Ok(self.close_range(start))
    }
}

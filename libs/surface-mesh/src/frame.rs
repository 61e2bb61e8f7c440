//! Rigid frame placement.
//!
//! Builds the 4×4 affine transform that orients a canonical mesh instance
//! (modelled in its own right/up/back axes) at a world-space origin. Applying
//! the transform is the caller's job, e.g. through [`Mesh::transformed`].
//!
//! [`Mesh::transformed`]: crate::Mesh::transformed

use config::constants::FRAME_DEGENERACY_EPSILON;
use glam::{DMat4, DVec3};

use crate::error::{SurfaceError, SurfaceResult};

/// Builds a frame whose basis columns are `(right, up, back)` and whose
/// translation is `origin`, with `back = right × up`.
///
/// `right` and `up` are not normalized: non-unit inputs scale the canonical
/// mesh along that axis, matching direction-vector semantics elsewhere.
///
/// # Errors
///
/// [`SurfaceError::DegenerateFrame`] if `right` and `up` are parallel (or
/// either is zero), i.e. `|back| < 1e-9`.
///
/// # Example
///
/// ```rust
/// use surface_mesh::frame::build_frame;
/// use glam::DVec3;
///
/// let frame = build_frame(DVec3::X, DVec3::Z, DVec3::new(2.0, 3.0, 4.0)).unwrap();
/// assert_eq!(frame.w_axis.truncate(), DVec3::new(2.0, 3.0, 4.0));
/// assert_eq!(frame.z_axis.truncate(), DVec3::new(0.0, -1.0, 0.0));
/// ```
pub fn build_frame(right: DVec3, up: DVec3, origin: DVec3) -> SurfaceResult<DMat4> {
    let back = right.cross(up);
    let len = back.length();
    if len.is_nan() || len < FRAME_DEGENERACY_EPSILON {
        return Err(SurfaceError::DegenerateFrame { right, up });
    }

    Ok(DMat4::from_cols(
        right.extend(0.0),
        up.extend(0.0),
        back.extend(0.0),
        origin.extend(1.0),
    ))
}

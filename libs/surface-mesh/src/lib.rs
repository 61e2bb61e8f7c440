//! # Surface Mesh
//!
//! Tessellation and attribute-driven texturing for scientific visualization
//! surfaces: terrain models, scatter plots and parametric primitives.
//!
//! ## Architecture
//!
//! ```text
//! data (grid / terrain / scatter) → builder (Mesh) → normals → texture → host
//!                                          frame (placement transform) ↗
//! ```
//!
//! Positions, normals and texture coordinates of a [`Mesh`] always share one
//! vertex index space; every triangle index is below the vertex count.
//!
//! ## Usage
//!
//! ```rust
//! use surface_mesh::texture::{apply_texture, SlopeAngle};
//! use surface_mesh::MeshBuilder;
//! use glam::DVec3;
//!
//! let points: Vec<DVec3> = (0..9)
//!     .map(|i| DVec3::new((i % 3) as f64, (i / 3) as f64, (i % 3) as f64))
//!     .collect();
//!
//! let mut builder = MeshBuilder::new();
//! builder.append_rectangular_grid(&points, 3)?;
//! let mesh = builder.finish().with_estimated_normals();
//! let mesh = apply_texture(mesh, &SlopeAngle::default())?;
//!
//! // A 45 degree ramp saturates the 40 degree gradient
//! assert!(mesh.texture_coordinates().iter().all(|uv| uv.x == 1.0));
//! # Ok::<(), surface_mesh::SurfaceError>(())
//! ```

pub mod builder;
pub mod data;
pub mod error;
pub mod frame;
pub mod mesh;
pub mod normals;
pub mod surface;
pub mod texture;

pub use builder::MeshBuilder;
pub use error::{SurfaceError, SurfaceResult};
pub use frame::build_frame;
pub use mesh::{Aabb, IndexRange, Mesh};
pub use normals::estimate_normals;
pub use texture::{compute_texture_coords, TextureKind, TextureStrategy};

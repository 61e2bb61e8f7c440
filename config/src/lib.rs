//! # Config Crate
//!
//! Centralized calibration constants for surface tessellation and
//! attribute-driven texturing. Every magic number the mesh builder, the
//! normal estimator and the texture strategies depend on is defined here so
//! that callers can override them explicitly instead of patching literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{TextureConfig, SLOPE_SATURATION_DEGREES};
//!
//! // Defaults carry the domain calibration
//! let cfg = TextureConfig::default();
//! assert_eq!(cfg.slope_saturation_degrees, SLOPE_SATURATION_DEGREES);
//!
//! // Tests and hosts can probe other calibrations without rebuilding
//! let steep = TextureConfig::new(60.0, 1e-12).unwrap();
//! assert_eq!(steep.slope_saturation_degrees, 60.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Explicit Overrides**: Strategies receive a `TextureConfig` value
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

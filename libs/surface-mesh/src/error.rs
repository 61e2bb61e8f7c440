//! # Surface Errors
//!
//! Error types for tessellation, normal estimation and texturing.
//! Every variant is an input-validation failure raised synchronously by the
//! call that violated a precondition.

use config::constants::ConfigError;
use glam::{DVec2, DVec3};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Errors that can occur while building or texturing a surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    /// Grid shape cannot be split into at least 2×2 samples.
    #[error("Invalid grid: {points} points cannot form a grid with {columns} columns")]
    InvalidGrid {
        /// Number of points supplied.
        points: usize,
        /// Requested number of columns.
        columns: usize,
    },

    /// Sphere tessellation needs at least 3 divisions in each direction.
    #[error("Invalid sphere divisions: theta_div={theta_div}, phi_div={phi_div} (min 3)")]
    InvalidDivision {
        /// Divisions around the azimuth.
        theta_div: u32,
        /// Divisions from pole to pole.
        phi_div: u32,
    },

    /// Beam thickness must be positive.
    #[error("Invalid thickness: {thickness} (must be > 0)")]
    InvalidThickness {
        /// Rejected thickness.
        thickness: f64,
    },

    /// Sphere radius must be positive.
    #[error("Invalid radius: {radius} (must be > 0)")]
    InvalidRadius {
        /// Rejected radius.
        radius: f64,
    },

    /// Scalar values span a zero-width range and cannot be normalized.
    #[error("Degenerate value range: every value equals {value}")]
    DegenerateRange {
        /// The single value every input shares.
        value: f64,
    },

    /// Frame directions are parallel so no third axis exists.
    #[error("Degenerate frame: right {right:?} and up {up:?} are parallel")]
    DegenerateFrame {
        /// Requested right direction.
        right: DVec3,
        /// Requested up direction.
        up: DVec3,
    },

    /// Two sequences that must be index-aligned differ in length.
    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Name of the offending sequence.
        what: &'static str,
        /// Length it must have.
        expected: usize,
        /// Length it was given.
        actual: usize,
    },

    /// An index range reaches past the end of the vertex buffer.
    #[error("Index range {start}..{end} out of bounds for {len} vertices")]
    RangeOutOfBounds {
        /// First index of the range.
        start: usize,
        /// One past the last index of the range.
        end: usize,
        /// Length of the buffer the range was checked against.
        len: usize,
    },

    /// A texture coordinate lies outside [0,1]×[0,1].
    #[error("Texture coordinate {value:?} at vertex {index} is outside [0,1]x[0,1]")]
    TextureCoordinateOutOfRange {
        /// Vertex index of the coordinate.
        index: usize,
        /// The offending coordinate.
        value: DVec2,
    },

    /// Invalid texture configuration values.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SurfaceError {
    /// Creates a length mismatch error.
    pub fn length_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            what,
            expected,
            actual,
        }
    }
}

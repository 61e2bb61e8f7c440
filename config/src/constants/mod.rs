//! # Configuration Constants
//!
//! Calibration values shared by the tessellation and texturing pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Zero-length and degeneracy guards
//! - **Calibration**: Slope saturation used by slope-angle texturing
//! - **Tessellation**: Minimum and default subdivision counts

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Length below which an accumulated vertex normal is treated as undefined.
///
/// Normalizing a vector shorter than this would amplify rounding noise into
/// NaN or infinity, so the normal estimator leaves such vectors at zero.
///
/// # Example
///
/// ```rust
/// use config::constants::ZERO_LENGTH_EPSILON;
///
/// let len: f64 = 1e-13;
/// assert!(len < ZERO_LENGTH_EPSILON);
/// ```
pub const ZERO_LENGTH_EPSILON: f64 = 1e-12;

/// Minimum length of the derived third axis of a rigid frame.
///
/// A shorter axis means the two supplied directions are parallel.
///
/// # Example
///
/// ```rust
/// use config::constants::FRAME_DEGENERACY_EPSILON;
/// assert!(FRAME_DEGENERACY_EPSILON < 1e-6);
/// ```
pub const FRAME_DEGENERACY_EPSILON: f64 = 1e-9;

// =============================================================================
// CALIBRATION CONSTANTS
// =============================================================================

/// Slope angle (degrees from vertical) mapped to the far end of the gradient.
///
/// Slopes steeper than this saturate to `u = 1`. The value is a visual
/// calibration kept for compatibility with existing gradient brushes.
///
/// # Example
///
/// ```rust
/// use config::constants::SLOPE_SATURATION_DEGREES;
///
/// let u = (20.0 / SLOPE_SATURATION_DEGREES).clamp(0.0, 1.0);
/// assert_eq!(u, 0.5);
/// ```
pub const SLOPE_SATURATION_DEGREES: f64 = 40.0;

/// Texture coordinate given to every scatter glyph when all values are equal.
///
/// A zero-width value range cannot be normalized; the midpoint of the
/// gradient is used instead.
pub const DEGENERATE_SCATTER_COORDINATE: f64 = 0.5;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Minimum number of rows and columns of a rectangular grid.
pub const MIN_GRID_EXTENT: usize = 2;

/// Minimum number of theta or phi divisions of a UV-sphere.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SPHERE_DIVISIONS;
///
/// let requested = 2;
/// assert!(requested < MIN_SPHERE_DIVISIONS);
/// ```
pub const MIN_SPHERE_DIVISIONS: u32 = 3;

/// Default number of divisions around a sphere glyph (longitude).
pub const DEFAULT_THETA_DIVISIONS: u32 = 20;

/// Default number of divisions from pole to pole of a sphere glyph (latitude).
pub const DEFAULT_PHI_DIVISIONS: u32 = 10;

/// Number of edges of an axis-aligned box, one beam per edge.
pub const BOX_EDGE_COUNT: usize = 12;

// =============================================================================
// TEXTURE CONFIG
// =============================================================================

/// Numeric settings passed explicitly into normal estimation and texture
/// strategies.
///
/// # Examples
/// ```
/// use config::constants::TextureConfig;
/// let config = TextureConfig::default();
/// assert!(config.zero_length_threshold > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureConfig {
    /// Slope in degrees that maps to `u = 1`.
    pub slope_saturation_degrees: f64,
    /// Vector length below which a normal is treated as undefined.
    pub zero_length_threshold: f64,
}

impl TextureConfig {
    /// Builds a configuration, rejecting non-positive or non-finite values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, TextureConfig};
    /// assert!(TextureConfig::new(45.0, 1e-9).is_ok());
    /// assert_eq!(
    ///     TextureConfig::new(0.0, 1e-9).unwrap_err(),
    ///     ConfigError::InvalidSaturation(0.0)
    /// );
    /// ```
    pub fn new(slope_saturation_degrees: f64, zero_length_threshold: f64) -> Result<Self, ConfigError> {
        if !(slope_saturation_degrees.is_finite() && slope_saturation_degrees > 0.0) {
            return Err(ConfigError::InvalidSaturation(slope_saturation_degrees));
        }
        if !(zero_length_threshold.is_finite() && zero_length_threshold > 0.0) {
            return Err(ConfigError::InvalidThreshold(zero_length_threshold));
        }
        Ok(Self {
            slope_saturation_degrees,
            zero_length_threshold,
        })
    }
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            slope_saturation_degrees: SLOPE_SATURATION_DEGREES,
            zero_length_threshold: ZERO_LENGTH_EPSILON,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the slope saturation angle is zero, negative or not finite.
    InvalidSaturation(f64),
    /// Raised when the zero-length threshold is zero, negative or not finite.
    InvalidThreshold(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSaturation(value) => {
                write!(f, "slope_saturation_degrees must be positive and finite: {value}")
            }
            ConfigError::InvalidThreshold(value) => {
                write!(f, "zero_length_threshold must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

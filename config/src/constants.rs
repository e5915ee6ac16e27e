//! # Configuration Constants
//!
//! Centralized constants for the parametric expression pipeline. Sampling
//! defaults, parameter ranges, default expressions and safety limits are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default sample counts for curves, sweeps and grids
//! - **Ranges**: Default parameter intervals for `t`, `s`, `u` and `v`
//! - **Expressions**: Default formulas used when a tool is first created
//! - **Limits**: Maximum values for safety bounds

use std::f64::consts::{PI, TAU};

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Minimum length below which a direction vector is treated as zero.
///
/// Used by the point/normal plane builder: a shorter normal falls back to +Z.
///
/// # Example
///
/// ```rust
/// use config::constants::NORMAL_EPSILON;
///
/// let length: f64 = 0.0;
/// assert!(length <= NORMAL_EPSILON);
/// ```
pub const NORMAL_EPSILON: f64 = 1e-12;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Minimum number of samples along a curve.
///
/// Two samples are needed so both endpoints of the parameter range appear.
pub const MIN_RESOLUTION: usize = 2;

/// Default number of samples for a standalone parametric curve.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CURVE_RESOLUTION;
///
/// let user_resolution: Option<usize> = None;
/// assert_eq!(user_resolution.unwrap_or(DEFAULT_CURVE_RESOLUTION), 100);
/// ```
pub const DEFAULT_CURVE_RESOLUTION: usize = 100;

/// Default number of curve samples when the curve feeds a swept surface.
pub const DEFAULT_SURFACE_RESOLUTION: usize = 32;

/// Default number of matrix samples along `s` for a swept surface.
///
/// Independent of the curve resolution: sweep granularity and curve sampling
/// granularity are configured separately.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_SWEEP_STEPS, DEFAULT_SURFACE_RESOLUTION};
///
/// let cells = DEFAULT_SWEEP_STEPS * DEFAULT_SURFACE_RESOLUTION;
/// assert_eq!(cells, 1600);
/// ```
pub const DEFAULT_SWEEP_STEPS: usize = 50;

/// Default sample count along each of `u` and `v` for direct surfaces.
pub const DEFAULT_UV_RESOLUTION: usize = 50;

/// Default sample count for Bézier segments.
pub const DEFAULT_BEZIER_RESOLUTION: usize = 32;

// =============================================================================
// RANGE CONSTANTS
// =============================================================================

/// Default lower bound of the curve parameter `t`.
pub const DEFAULT_T_MIN: f64 = 0.0;

/// Default upper bound of the curve parameter `t`.
pub const DEFAULT_T_MAX: f64 = 1.0;

/// Default lower bound of the sweep parameter `s`.
pub const DEFAULT_S_MIN: f64 = 0.0;

/// Default upper bound of the sweep parameter `s`.
pub const DEFAULT_S_MAX: f64 = 1.0;

/// Default lower bound of the surface parameter `u`.
pub const DEFAULT_U_MIN: f64 = 0.0;

/// Default upper bound of the surface parameter `u` (one full turn).
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_U_MAX;
///
/// assert!((DEFAULT_U_MAX - 2.0 * std::f64::consts::PI).abs() < 1e-12);
/// ```
pub const DEFAULT_U_MAX: f64 = TAU;

/// Default lower bound of the surface parameter `v`.
pub const DEFAULT_V_MIN: f64 = 0.0;

/// Default upper bound of the surface parameter `v` (half a turn).
pub const DEFAULT_V_MAX: f64 = PI;

// =============================================================================
// PARAMETER NAMES
// =============================================================================

/// Variable bound by the curve sampler.
pub const CURVE_PARAMETER: &str = "t";

/// Variable bound by the matrix builder.
pub const SWEEP_PARAMETER: &str = "s";

/// First variable bound by the direct surface evaluator.
pub const SURFACE_U_PARAMETER: &str = "u";

/// Second variable bound by the direct surface evaluator.
pub const SURFACE_V_PARAMETER: &str = "v";

// =============================================================================
// DEFAULT EXPRESSIONS
// =============================================================================

/// Default curve expressions `(x, y, z)`: a helix climbing one unit per turn.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CURVE_EXPRESSIONS;
///
/// let [x, y, z] = DEFAULT_CURVE_EXPRESSIONS;
/// assert_eq!((x, y, z), ("cos(t)", "sin(t)", "t/(2*pi)"));
/// ```
pub const DEFAULT_CURVE_EXPRESSIONS: [&str; 3] = ["cos(t)", "sin(t)", "t/(2*pi)"];

/// Default matrix expressions, row-major `m00..m33`: translate along x by `s`.
pub const DEFAULT_MATRIX_EXPRESSIONS: [&str; 16] = [
    "1", "0", "0", "s", //
    "0", "1", "0", "0", //
    "0", "0", "1", "0", //
    "0", "0", "0", "1",
];

/// Row-major identity matrix expressions.
pub const IDENTITY_MATRIX_EXPRESSIONS: [&str; 16] = [
    "1", "0", "0", "0", //
    "0", "1", "0", "0", //
    "0", "0", "1", "0", //
    "0", "0", "0", "1",
];

/// Default surface expressions `(x, y, z)` over `(u, v)`: the unit sphere.
pub const DEFAULT_SURFACE_EXPRESSIONS: [&str; 3] =
    ["cos(u)*sin(v)", "sin(u)*sin(v)", "cos(v)"];

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Default edge length of a point/normal plane.
pub const DEFAULT_PLANE_SIZE: f64 = 2.0;

// =============================================================================
// LIMITS
// =============================================================================

/// Maximum nesting depth of an expression.
///
/// Each prefix operator, exponent and parenthesized group or call argument
/// adds one level. Deeper text is a parse error, so every tree the parser
/// returns is shallow enough to walk recursively.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_NESTING_DEPTH;
///
/// assert!(MAX_NESTING_DEPTH >= 64);
/// ```
pub const MAX_NESTING_DEPTH: usize = 256;

/// Remaining stack below which recursive parsing and evaluation switch to a
/// fresh segment using the `stacker` crate.
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

/// Bytes of stack allocated for each segment `stacker` grows.
///
/// # Example
///
/// ```rust
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
///
/// assert!(STACKER_STACK_SIZE_BYTES > STACKER_RED_ZONE_BYTES);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 1024 * 1024;

/// Maximum number of points in a single sampled curve or surface grid.
///
/// Safety limit to prevent memory exhaustion from a mistyped resolution.
///
/// # Example
///
/// ```rust
/// use config::constants::{MAX_GRID_POINTS, DEFAULT_SWEEP_STEPS, DEFAULT_SURFACE_RESOLUTION};
///
/// assert!(DEFAULT_SWEEP_STEPS * DEFAULT_SURFACE_RESOLUTION < MAX_GRID_POINTS);
/// ```
pub const MAX_GRID_POINTS: usize = 16_000_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

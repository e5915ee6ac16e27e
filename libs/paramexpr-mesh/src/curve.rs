//! # Curve Sampler
//!
//! Evaluates three expressions of `t` at evenly spaced parameter values to
//! produce an ordered point list.
//!
//! ## Example
//!
//! ```rust
//! use paramexpr_mesh::{sample_curve, CurveSpec, ParamRange};
//!
//! let spec = CurveSpec::from_strs(["cos(t)", "sin(t)", "0"], ParamRange::new(0.0, 6.283185307179586), 4).unwrap();
//! let points = sample_curve(&spec).unwrap();
//! assert_eq!(points.len(), 4);
//! ```

use crate::error::MeshError;
use crate::range::ParamRange;
use config::constants::{
    CURVE_PARAMETER, DEFAULT_CURVE_EXPRESSIONS, DEFAULT_CURVE_RESOLUTION,
    DEFAULT_SURFACE_RESOLUTION, MAX_GRID_POINTS, MIN_RESOLUTION,
};
use glam::DVec3;
use paramexpr_eval::Expression;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

// =============================================================================
// CURVE SPEC
// =============================================================================

/// A parametric curve `t ↦ (x(t), y(t), z(t))` with its sampling.
///
/// Deserialized specs are validated by [`CurveSpec::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CurveSpecRaw")]
pub struct CurveSpec {
    x: Expression,
    y: Expression,
    z: Expression,
    t_range: ParamRange,
    resolution: usize,
}

#[derive(Deserialize)]
struct CurveSpecRaw {
    x: Expression,
    y: Expression,
    z: Expression,
    t_range: ParamRange,
    resolution: usize,
}

impl TryFrom<CurveSpecRaw> for CurveSpec {
    type Error = MeshError;

    fn try_from(raw: CurveSpecRaw) -> Result<Self, Self::Error> {
        Self::new(raw.x, raw.y, raw.z, raw.t_range, raw.resolution)
    }
}

impl CurveSpec {
    /// Create a curve spec.
    ///
    /// ## Errors
    ///
    /// - [`MeshError::InvalidResolution`] when `resolution < 2`
    /// - [`MeshError::GridTooLarge`] above the point cap
    /// - [`MeshError::Eval`] with an unbound variable when an expression
    ///   uses anything other than `t` and the constants
    pub fn new(
        x: Expression,
        y: Expression,
        z: Expression,
        t_range: ParamRange,
        resolution: usize,
    ) -> Result<Self, MeshError> {
        if resolution < MIN_RESOLUTION {
            return Err(MeshError::invalid_resolution("curve", resolution, MIN_RESOLUTION));
        }
        if resolution > MAX_GRID_POINTS {
            return Err(MeshError::grid_too_large(1, resolution));
        }
        for component in [&x, &y, &z] {
            component.check_scope(&[CURVE_PARAMETER])?;
        }
        Ok(Self {
            x,
            y,
            z,
            t_range,
            resolution,
        })
    }

    /// Create a curve spec from expression text.
    pub fn from_strs(
        [x, y, z]: [&str; 3],
        t_range: ParamRange,
        resolution: usize,
    ) -> Result<Self, MeshError> {
        Self::new(
            Expression::parse(x)?,
            Expression::parse(y)?,
            Expression::parse(z)?,
            t_range,
            resolution,
        )
    }

    /// The default helix over the default `t` range.
    pub fn helix() -> Result<Self, MeshError> {
        Self::from_strs(DEFAULT_CURVE_EXPRESSIONS, ParamRange::T, DEFAULT_CURVE_RESOLUTION)
    }

    /// The default helix at the coarser resolution used for sweep profiles.
    pub fn sweep_profile() -> Result<Self, MeshError> {
        Self::from_strs(DEFAULT_CURVE_EXPRESSIONS, ParamRange::T, DEFAULT_SURFACE_RESOLUTION)
    }

    /// Same curve sampled at a different resolution.
    pub fn with_resolution(&self, resolution: usize) -> Result<Self, MeshError> {
        Self::new(
            self.x.clone(),
            self.y.clone(),
            self.z.clone(),
            self.t_range,
            resolution,
        )
    }

    /// Component expressions `(x, y, z)`.
    pub fn components(&self) -> [&Expression; 3] {
        [&self.x, &self.y, &self.z]
    }

    pub fn t_range(&self) -> ParamRange {
        self.t_range
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Evaluate the curve at one parameter value.
    pub fn point_at(&self, t: f64) -> Result<DVec3, MeshError> {
        Ok(DVec3::new(
            self.x.eval_with(CURVE_PARAMETER, t)?,
            self.y.eval_with(CURVE_PARAMETER, t)?,
            self.z.eval_with(CURVE_PARAMETER, t)?,
        ))
    }
}

// =============================================================================
// SAMPLING
// =============================================================================

/// Sample a curve at `resolution` evenly spaced values of `t`.
///
/// The first sample is `t_range.min` and the last is `t_range.max`. A
/// reversed range (`max < min`) is accepted and samples run downward, so
/// the curve is traversed backwards.
///
/// ## Returns
///
/// Points ordered by increasing sample index. Non-finite points are kept;
/// coincident endpoints (closed curves) are not merged.
#[instrument(skip(spec), fields(resolution = spec.resolution))]
pub fn sample_curve(spec: &CurveSpec) -> Result<Vec<DVec3>, MeshError> {
    let points = spec
        .t_range
        .samples(spec.resolution)
        .map(|t| spec.point_at(t))
        .collect::<Result<Vec<_>, _>>()?;

    let non_finite = points.iter().filter(|p| !p.is_finite()).count();
    if non_finite > 0 {
        warn!(non_finite, "curve contains non-finite points");
    }
    debug!(points = points.len(), "sampled curve");

    Ok(points)
}

// =============================================================================
// TESTS
// =============================================================================

//! # Surface Composer
//!
//! Two ways to get a surface grid:
//!
//! - **Curve × matrices**: every sampled curve point is transformed by every
//!   swept matrix. Rows follow the matrices, columns follow the curve.
//! - **Direct u,v**: three expressions of `u` and `v` evaluated over a
//!   rectangular parameter grid. Rows follow `v`, columns follow `u`.
//!
//! Both produce a [`SurfaceGrid`] with the same quad builder, and the
//! expression-driven paths share one row evaluator.
//!
//! ## Example
//!
//! ```rust
//! use paramexpr_mesh::{build_swept_surface, CurveSpec, MatrixSpec, SweepSettings, ParamRange};
//!
//! let curve = CurveSpec::from_strs(["cos(t)", "sin(t)", "0"], ParamRange::new(0.0, 6.0), 8).unwrap();
//! let matrices = MatrixSpec::translation_x().unwrap();
//! let grid = build_swept_surface(&curve, &matrices, &SweepSettings::default()).unwrap();
//! assert_eq!((grid.rows(), grid.cols()), (50, 8));
//! assert_eq!(grid.quad_count(), 49 * 7);
//! ```

use crate::curve::{sample_curve, CurveSpec};
use crate::error::MeshError;
use crate::grid::{self, evaluate_rows, SurfaceGrid};
use crate::matrix::{apply_to_point, sweep_matrices, MatrixSpec};
use crate::range::ParamRange;
use crate::settings::SweepSettings;
use config::constants::{
    DEFAULT_SURFACE_EXPRESSIONS, DEFAULT_UV_RESOLUTION, MIN_RESOLUTION, SURFACE_U_PARAMETER,
    SURFACE_V_PARAMETER,
};
use glam::{DMat4, DVec3};
use paramexpr_eval::{Bindings, Expression};
use serde::{Deserialize, Serialize};
use tracing::instrument;

// =============================================================================
// CURVE × MATRIX
// =============================================================================

/// Transform every curve point by every matrix.
///
/// `grid[i][j] = (M_i · (p_j, 1)).xyz`. One matrix or one curve point gives
/// a grid with no quads; an empty input gives an empty grid.
#[instrument(skip_all, fields(rows = matrices.len(), cols = curve.len()))]
pub fn compose_surface(curve: &[DVec3], matrices: &[DMat4]) -> SurfaceGrid {
    let cols = curve.len();
    let points: Vec<DVec3> = matrices
        .iter()
        .flat_map(|m| curve.iter().map(move |p| apply_to_point(m, *p)))
        .collect();
    let grid = SurfaceGrid::from_parts(matrices.len(), cols, points);
    grid::report(&grid);
    grid
}

/// Sample the curve, sweep the matrices and compose.
///
/// ## Errors
///
/// Curve and sweep errors, and [`MeshError::GridTooLarge`] before any
/// point is produced
#[instrument(skip_all, fields(steps = settings.steps, resolution = curve.resolution()))]
pub fn build_swept_surface(
    curve: &CurveSpec,
    matrices: &MatrixSpec,
    settings: &SweepSettings,
) -> Result<SurfaceGrid, MeshError> {
    grid::check_grid_size(settings.steps, curve.resolution())?;

    let points = sample_curve(curve)?;
    let swept = sweep_matrices(
        matrices,
        settings.s_range.min,
        settings.s_range.max,
        settings.steps,
    )?;

    evaluate_rows(swept.len(), points.len(), settings.parallel, |i| {
        Ok(points.iter().map(|p| apply_to_point(&swept[i], *p)).collect())
    })
}

// =============================================================================
// DIRECT U,V
// =============================================================================

/// A surface `(u, v) ↦ (x, y, z)` with its sampling.
///
/// Deserialized specs are validated by [`UvSurfaceSpec::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UvSurfaceSpecRaw")]
pub struct UvSurfaceSpec {
    x: Expression,
    y: Expression,
    z: Expression,
    u_range: ParamRange,
    v_range: ParamRange,
    u_resolution: usize,
    v_resolution: usize,
}

#[derive(Deserialize)]
struct UvSurfaceSpecRaw {
    x: Expression,
    y: Expression,
    z: Expression,
    u_range: ParamRange,
    v_range: ParamRange,
    u_resolution: usize,
    v_resolution: usize,
}

impl TryFrom<UvSurfaceSpecRaw> for UvSurfaceSpec {
    type Error = MeshError;

    fn try_from(raw: UvSurfaceSpecRaw) -> Result<Self, Self::Error> {
        Self::new(
            [raw.x, raw.y, raw.z],
            raw.u_range,
            raw.v_range,
            raw.u_resolution,
            raw.v_resolution,
        )
    }
}

impl UvSurfaceSpec {
    /// Create a u,v surface spec.
    ///
    /// ## Errors
    ///
    /// - [`MeshError::InvalidResolution`] when either resolution is below 2
    /// - [`MeshError::GridTooLarge`] above the point cap
    /// - [`MeshError::Eval`] when an expression uses a variable other than
    ///   `u`, `v` and the constants
    pub fn new(
        [x, y, z]: [Expression; 3],
        u_range: ParamRange,
        v_range: ParamRange,
        u_resolution: usize,
        v_resolution: usize,
    ) -> Result<Self, MeshError> {
        if u_resolution < MIN_RESOLUTION {
            return Err(MeshError::invalid_resolution("u", u_resolution, MIN_RESOLUTION));
        }
        if v_resolution < MIN_RESOLUTION {
            return Err(MeshError::invalid_resolution("v", v_resolution, MIN_RESOLUTION));
        }
        grid::check_grid_size(v_resolution, u_resolution)?;
        for component in [&x, &y, &z] {
            component.check_scope(&[SURFACE_U_PARAMETER, SURFACE_V_PARAMETER])?;
        }
        Ok(Self {
            x,
            y,
            z,
            u_range,
            v_range,
            u_resolution,
            v_resolution,
        })
    }

    /// Create a u,v surface spec from expression text.
    pub fn from_strs(
        [x, y, z]: [&str; 3],
        u_range: ParamRange,
        v_range: ParamRange,
        u_resolution: usize,
        v_resolution: usize,
    ) -> Result<Self, MeshError> {
        Self::new(
            [Expression::parse(x)?, Expression::parse(y)?, Expression::parse(z)?],
            u_range,
            v_range,
            u_resolution,
            v_resolution,
        )
    }

    /// Unit sphere over the default ranges and resolution.
    pub fn sphere() -> Result<Self, MeshError> {
        Self::from_strs(
            DEFAULT_SURFACE_EXPRESSIONS,
            ParamRange::U,
            ParamRange::V,
            DEFAULT_UV_RESOLUTION,
            DEFAULT_UV_RESOLUTION,
        )
    }

    pub fn u_range(&self) -> ParamRange {
        self.u_range
    }

    pub fn v_range(&self) -> ParamRange {
        self.v_range
    }

    pub fn u_resolution(&self) -> usize {
        self.u_resolution
    }

    pub fn v_resolution(&self) -> usize {
        self.v_resolution
    }

    /// Evaluate the surface at one `(u, v)`.
    pub fn point_at(&self, u: f64, v: f64) -> Result<DVec3, MeshError> {
        let bindings = Bindings::new()
            .with(SURFACE_U_PARAMETER, u)
            .with(SURFACE_V_PARAMETER, v);
        self.point_in(&bindings)
    }

    fn point_in(&self, bindings: &Bindings) -> Result<DVec3, MeshError> {
        Ok(DVec3::new(
            self.x.eval(bindings)?,
            self.y.eval(bindings)?,
            self.z.eval(bindings)?,
        ))
    }

    /// Points of grid row `i` (fixed `v`).
    fn row(&self, i: usize) -> Result<Vec<DVec3>, MeshError> {
        let v = self.v_range.sample(i, self.v_resolution);
        let mut bindings = Bindings::new()
            .with(SURFACE_U_PARAMETER, self.u_range.min)
            .with(SURFACE_V_PARAMETER, v);

        self.u_range
            .samples(self.u_resolution)
            .map(|u| {
                bindings.set(SURFACE_U_PARAMETER, u);
                self.point_in(&bindings)
            })
            .collect()
    }
}

/// Evaluate a u,v surface on the rayon pool.
pub fn evaluate_uv_surface(spec: &UvSurfaceSpec) -> Result<SurfaceGrid, MeshError> {
    evaluate_uv_surface_with(spec, true)
}

/// Evaluate a u,v surface, choosing parallel or sequential rows.
///
/// Rows follow `v`, columns follow `u`.
#[instrument(skip(spec), fields(rows = spec.v_resolution, cols = spec.u_resolution))]
pub fn evaluate_uv_surface_with(
    spec: &UvSurfaceSpec,
    parallel: bool,
) -> Result<SurfaceGrid, MeshError> {
    evaluate_rows(spec.v_resolution, spec.u_resolution, parallel, |i| spec.row(i))
}

// =============================================================================
// TESTS
// =============================================================================

//! # Matrix Builder
//!
//! A 4×4 transformation matrix whose sixteen entries are expressions of the
//! sweep parameter `s`. Entries are given row-major (`m00, m01, .., m33`)
//! and the translation lives in the last column.
//!
//! ## Example
//!
//! ```rust
//! use paramexpr_mesh::{build_matrix, MatrixSpec};
//! use glam::DVec3;
//!
//! let spec = MatrixSpec::translation_x().unwrap();
//! let m = build_matrix(&spec, 2.0).unwrap();
//! assert_eq!(m.transform_point3(DVec3::ZERO), DVec3::new(2.0, 0.0, 0.0));
//! ```

use crate::error::MeshError;
use crate::range::ParamRange;
use config::constants::{
    DEFAULT_MATRIX_EXPRESSIONS, IDENTITY_MATRIX_EXPRESSIONS, MAX_GRID_POINTS, SWEEP_PARAMETER,
};
use glam::{DMat4, DVec3};
use paramexpr_eval::Expression;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of matrix entries.
pub const MATRIX_ENTRIES: usize = 16;

// =============================================================================
// MATRIX SPEC
// =============================================================================

/// Sixteen row-major entry expressions in `s`.
///
/// Deserialization goes through [`MatrixSpec::new`], so a stored spec is
/// checked for entry count and scope like one built in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixSpecRaw")]
pub struct MatrixSpec {
    /// Always [`MATRIX_ENTRIES`] long.
    entries: Vec<Expression>,
}

/// Unchecked wire form of [`MatrixSpec`].
#[derive(Deserialize)]
struct MatrixSpecRaw {
    entries: Vec<Expression>,
}

impl TryFrom<MatrixSpecRaw> for MatrixSpec {
    type Error = MeshError;

    fn try_from(raw: MatrixSpecRaw) -> Result<Self, Self::Error> {
        let count = raw.entries.len();
        let entries: [Expression; MATRIX_ENTRIES] = raw
            .entries
            .try_into()
            .map_err(|_| MeshError::InvalidMatrixEntries { count })?;
        Self::new(entries)
    }
}

impl MatrixSpec {
    /// Create a matrix spec from row-major entries.
    ///
    /// ## Errors
    ///
    /// [`MeshError::Eval`] with an unbound variable when an entry uses
    /// anything other than `s` and the constants
    pub fn new(entries: [Expression; MATRIX_ENTRIES]) -> Result<Self, MeshError> {
        for entry in &entries {
            entry.check_scope(&[SWEEP_PARAMETER])?;
        }
        Ok(Self {
            entries: entries.into(),
        })
    }

    /// Create a matrix spec from row-major expression text.
    pub fn from_strs(sources: &[&str; MATRIX_ENTRIES]) -> Result<Self, MeshError> {
        let mut entries = Vec::with_capacity(MATRIX_ENTRIES);
        for source in sources {
            let entry = Expression::parse(source)?;
            entry.check_scope(&[SWEEP_PARAMETER])?;
            entries.push(entry);
        }
        Ok(Self { entries })
    }

    /// Constant identity matrix.
    pub fn identity() -> Result<Self, MeshError> {
        Self::from_strs(&IDENTITY_MATRIX_EXPRESSIONS)
    }

    /// Default sweep: translation along x by `s`.
    pub fn translation_x() -> Result<Self, MeshError> {
        Self::from_strs(&DEFAULT_MATRIX_EXPRESSIONS)
    }

    /// Entry expression at `row`, `col`.
    pub fn entry(&self, row: usize, col: usize) -> Option<&Expression> {
        if row >= 4 || col >= 4 {
            return None;
        }
        self.entries.get(row * 4 + col)
    }

    /// Row-major entry expressions.
    pub fn entries(&self) -> &[Expression] {
        &self.entries
    }

    /// True when no entry depends on `s`.
    pub fn is_constant(&self) -> bool {
        self.entries.iter().all(Expression::is_constant)
    }
}

// =============================================================================
// BUILDING
// =============================================================================

/// Load a row-major array into a glam (column-major) matrix.
pub fn from_row_major(values: &[f64; MATRIX_ENTRIES]) -> DMat4 {
    DMat4::from_cols_array(values).transpose()
}

/// Apply a matrix to a point with an implicit `w = 1`, keeping xyz.
///
/// There is no perspective divide; a bottom row other than `0 0 0 1` only
/// affects the discarded `w`.
pub fn apply_to_point(matrix: &DMat4, point: DVec3) -> DVec3 {
    (*matrix * point.extend(1.0)).truncate()
}

/// Evaluate all sixteen entries at one value of `s`.
pub fn build_matrix(spec: &MatrixSpec, s: f64) -> Result<DMat4, MeshError> {
    let mut values = [0.0; MATRIX_ENTRIES];
    for (value, entry) in values.iter_mut().zip(&spec.entries) {
        *value = entry.eval_with(SWEEP_PARAMETER, s)?;
    }
    Ok(from_row_major(&values))
}

/// Build one matrix per evenly spaced `s` in `[s_min, s_max]`.
///
/// `steps == 1` yields the single matrix at `s_min`.
///
/// ## Errors
///
/// - [`MeshError::InvalidSteps`] when `steps == 0`
/// - [`MeshError::GridTooLarge`] above the point cap
#[instrument(skip(spec))]
pub fn sweep_matrices(
    spec: &MatrixSpec,
    s_min: f64,
    s_max: f64,
    steps: usize,
) -> Result<Vec<DMat4>, MeshError> {
    if steps == 0 {
        return Err(MeshError::InvalidSteps { steps });
    }
    if steps > MAX_GRID_POINTS {
        return Err(MeshError::grid_too_large(steps, 1));
    }

    let matrices = ParamRange::new(s_min, s_max)
        .samples(steps)
        .map(|s| build_matrix(spec, s))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(matrices = matrices.len(), "swept matrices");
    Ok(matrices)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use paramexpr_eval::EvalError;

    #[test]
    fn test_identity() {
        let m = build_matrix(&MatrixSpec::identity().unwrap(), 0.3).unwrap();
        assert_eq!(m, DMat4::IDENTITY);
    }

    #[test]
    fn test_row_major_translation_lands_in_last_column() {
        let m = build_matrix(&MatrixSpec::translation_x().unwrap(), 0.5).unwrap();
        assert_eq!(m.w_axis.x, 0.5);
        assert_eq!(apply_to_point(&m, DVec3::new(1.0, 2.0, 3.0)), DVec3::new(1.5, 2.0, 3.0));
    }

    #[test]
    fn test_from_row_major_orientation() {
        let mut values = [0.0; 16];
        values[1] = 7.0; // m01
        let m = from_row_major(&values);
        // row 0, column 1
        assert_eq!(m.col(1).x, 7.0);
        assert_eq!(m.col(0).y, 0.0);
    }

    #[test]
    fn test_no_perspective_divide() {
        let mut sources = IDENTITY_MATRIX_EXPRESSIONS;
        sources[15] = "2";
        sources[12] = "5";
        let m = build_matrix(&MatrixSpec::from_strs(&sources).unwrap(), 0.0).unwrap();
        assert_eq!(apply_to_point(&m, DVec3::new(1.0, 1.0, 1.0)), DVec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_sweep_spacing() {
        let spec = MatrixSpec::translation_x().unwrap();
        let matrices = sweep_matrices(&spec, 0.0, 1.0, 3).unwrap();
        let xs: Vec<f64> = matrices.iter().map(|m| m.w_axis.x).collect();
        assert_eq!(xs, [0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_single_step_uses_s_min() {
        let spec = MatrixSpec::translation_x().unwrap();
        let matrices = sweep_matrices(&spec, 0.25, 1.0, 1).unwrap();
        assert_eq!(matrices.len(), 1);
        assert_eq!(matrices[0].w_axis.x, 0.25);
    }

    #[test]
    fn test_zero_steps_rejected() {
        let spec = MatrixSpec::identity().unwrap();
        assert_eq!(
            sweep_matrices(&spec, 0.0, 1.0, 0).unwrap_err(),
            MeshError::InvalidSteps { steps: 0 }
        );
    }

    #[test]
    fn test_scope_check() {
        let mut sources = IDENTITY_MATRIX_EXPRESSIONS;
        sources[3] = "t";
        let err = MatrixSpec::from_strs(&sources).unwrap_err();
        assert_eq!(err, MeshError::Eval(EvalError::unbound("t")));
    }

    #[test]
    fn test_rotation_about_z() {
        let sources = [
            "cos(s)", "-sin(s)", "0", "0", //
            "sin(s)", "cos(s)", "0", "0", //
            "0", "0", "1", "0", //
            "0", "0", "0", "1",
        ];
        let spec = MatrixSpec::from_strs(&sources).unwrap();
        let m = build_matrix(&spec, std::f64::consts::FRAC_PI_2).unwrap();
        let p = apply_to_point(&m, DVec3::X);
        assert!((p - DVec3::Y).length() < 1e-12);
    }

    #[test]
    fn test_entry_access() {
        let spec = MatrixSpec::translation_x().unwrap();
        assert_eq!(spec.entry(0, 3).map(Expression::source), Some("s"));
        assert!(spec.entry(4, 0).is_none());
        assert!(!spec.is_constant());
        assert!(MatrixSpec::identity().unwrap().is_constant());
    }

    #[test]
    fn test_serde_round_trip() {
        let spec = MatrixSpec::translation_x().unwrap();
        let json = serde_json::to_string(&spec).unwrap();
        let back: MatrixSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn test_deserialize_checks_entry_count() {
        let err = serde_json::from_str::<MatrixSpec>(r#"{"entries":["2"]}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid matrix entries: 1"));
        assert!(serde_json::from_str::<MatrixSpec>(r#"{"entries":[]}"#).is_err());
    }

    #[test]
    fn test_deserialize_checks_scope() {
        let mut entries = vec!["0"; MATRIX_ENTRIES];
        entries[3] = "t";
        let json = serde_json::json!({ "entries": entries });
        let err = serde_json::from_value::<MatrixSpec>(json).unwrap_err();
        assert!(err.to_string().contains("Unbound variable 't'"));
    }
}

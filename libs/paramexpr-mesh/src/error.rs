//! # Mesh Errors
//!
//! Error types for curve, matrix and surface generation.

use paramexpr_eval::EvalError;
use paramexpr_parser::ParseError;
use thiserror::Error;

/// Errors that can occur during geometry generation.
///
/// Non-finite sample points are not errors; they pass through into the
/// output unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Parse or evaluation error from the eval layer
    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),

    /// Sample count below the minimum
    #[error("Invalid {what} resolution: {value} (min: {min})")]
    InvalidResolution {
        what: &'static str,
        value: usize,
        min: usize,
    },

    /// Matrix sweep with no steps
    #[error("Invalid sweep steps: {steps} (must be at least 1)")]
    InvalidSteps { steps: usize },

    /// Grid dimensions above the point cap
    #[error("Grid too large: {rows} x {cols} (max points: {max})")]
    GridTooLarge { rows: usize, cols: usize, max: usize },

    /// Matrix spec with the wrong number of entries
    #[error("Invalid matrix entries: {count} (expected 16)")]
    InvalidMatrixEntries { count: usize },

    /// Point list that does not fill the grid dimensions
    #[error("Invalid grid: {rows} x {cols} with {points} points")]
    InvalidGrid {
        rows: usize,
        cols: usize,
        points: usize,
    },

    /// Bezier segment built from an unsupported number of points
    #[error("Invalid control points: {count} (expected 2, 3 or 4)")]
    InvalidControlPoints { count: usize },
}

impl From<ParseError> for MeshError {
    fn from(error: ParseError) -> Self {
        Self::Eval(EvalError::from(error))
    }
}

impl MeshError {
    /// Creates an invalid resolution error.
    pub fn invalid_resolution(what: &'static str, value: usize, min: usize) -> Self {
        Self::InvalidResolution { what, value, min }
    }

    /// Creates a grid too large error.
    pub fn grid_too_large(rows: usize, cols: usize) -> Self {
        Self::GridTooLarge {
            rows,
            cols,
            max: config::constants::MAX_GRID_POINTS,
        }
    }

    /// The evaluation error, if this wraps one.
    pub fn as_eval(&self) -> Option<&EvalError> {
        match self {
            Self::Eval(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_resolution("curve", 1, 2);
        assert_eq!(err.to_string(), "Invalid curve resolution: 1 (min: 2)");
    }

    #[test]
    fn test_parse_error_converts_through_eval() {
        let parse_error = paramexpr_parser::parse("sin(").unwrap_err();
        let err = MeshError::from(parse_error);
        assert!(matches!(err.as_eval(), Some(EvalError::Parse(_))));
    }
}

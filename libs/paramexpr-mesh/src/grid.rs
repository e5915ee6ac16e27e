//! # Surface Grid
//!
//! A rows × cols point grid stored row-major, plus the quad connectivity
//! between adjacent rows and columns. Expression-driven surfaces build their
//! output through [`evaluate_rows`], so topology and ordering are identical
//! in every mode.
//!
//! ## Quad Topology
//!
//! ```text
//! (i, j) ──── (i, j+1)
//!   │             │
//! (i+1, j) ── (i+1, j+1)
//! ```
//!
//! Each cell gives the quad `[(i, j), (i, j+1), (i+1, j+1), (i+1, j)]`.
//! Grids never wrap: a closed curve produces a seam of duplicate points.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::MAX_GRID_POINTS;
use glam::DVec3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// =============================================================================
// SURFACE GRID
// =============================================================================

/// Row-major point grid.
///
/// Always holds exactly `rows * cols` points; deserialization is checked by
/// [`SurfaceGrid::from_points`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SurfaceGridRaw")]
pub struct SurfaceGrid {
    rows: usize,
    cols: usize,
    points: Vec<DVec3>,
}

#[derive(Deserialize)]
struct SurfaceGridRaw {
    rows: usize,
    cols: usize,
    points: Vec<DVec3>,
}

impl TryFrom<SurfaceGridRaw> for SurfaceGrid {
    type Error = MeshError;

    fn try_from(raw: SurfaceGridRaw) -> Result<Self, Self::Error> {
        Self::from_points(raw.rows, raw.cols, raw.points)
    }
}

impl SurfaceGrid {
    /// Build a grid from equally long rows.
    ///
    /// ## Returns
    ///
    /// None if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<DVec3>>) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        let row_count = rows.len();
        Some(Self {
            rows: row_count,
            cols,
            points: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a grid from row-major points.
    ///
    /// ## Errors
    ///
    /// - [`MeshError::GridTooLarge`] above the point cap
    /// - [`MeshError::InvalidGrid`] when `points.len() != rows * cols`
    pub fn from_points(rows: usize, cols: usize, points: Vec<DVec3>) -> Result<Self, MeshError> {
        check_grid_size(rows, cols)?;
        if points.len() != rows * cols {
            return Err(MeshError::InvalidGrid {
                rows,
                cols,
                points: points.len(),
            });
        }
        Ok(Self { rows, cols, points })
    }

    /// Grid from row-major points already known to be `rows * cols` long.
    pub(crate) fn from_parts(rows: usize, cols: usize, points: Vec<DVec3>) -> Self {
        debug_assert_eq!(points.len(), rows * cols);
        Self { rows, cols, points }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Point at row `i`, column `j`.
    ///
    /// Panics if out of range.
    #[inline]
    pub fn point(&self, i: usize, j: usize) -> DVec3 {
        assert!(i < self.rows && j < self.cols, "grid index ({}, {}) out of range", i, j);
        self.points[i * self.cols + j]
    }

    /// Points of row `i`.
    ///
    /// Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[DVec3] {
        &self.points[i * self.cols..(i + 1) * self.cols]
    }

    /// All points, row-major.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of quads, `(rows - 1) * (cols - 1)` or zero.
    pub fn quad_count(&self) -> usize {
        self.rows.saturating_sub(1) * self.cols.saturating_sub(1)
    }

    /// Quad faces as indices into [`SurfaceGrid::points`].
    pub fn quads(&self) -> Vec<[u32; 4]> {
        grid_quads(self.rows, self.cols)
    }

    /// Count of points with a NaN or infinite coordinate.
    pub fn non_finite_count(&self) -> usize {
        self.points.iter().filter(|p| !p.is_finite()).count()
    }

    /// Convert to a quad mesh sharing grid vertices.
    pub fn to_mesh(&self) -> Mesh {
        Mesh::from_quads(self.points.clone(), self.quads())
    }
}

/// Quad indices for a row-major `rows × cols` grid.
///
/// ## Example
///
/// ```rust
/// use paramexpr_mesh::grid::grid_quads;
///
/// assert_eq!(grid_quads(2, 2), vec![[0, 1, 3, 2]]);
/// assert!(grid_quads(1, 10).is_empty());
/// ```
pub fn grid_quads(rows: usize, cols: usize) -> Vec<[u32; 4]> {
    let mut quads = Vec::with_capacity(rows.saturating_sub(1) * cols.saturating_sub(1));
    for i in 0..rows.saturating_sub(1) {
        for j in 0..cols.saturating_sub(1) {
            let a = (i * cols + j) as u32;
            let b = (i * cols + j + 1) as u32;
            let c = ((i + 1) * cols + j + 1) as u32;
            let d = ((i + 1) * cols + j) as u32;
            quads.push([a, b, c, d]);
        }
    }
    quads
}

// =============================================================================
// GRID EVALUATION
// =============================================================================

/// Reject grids above the point cap.
pub fn check_grid_size(rows: usize, cols: usize) -> Result<(), MeshError> {
    match rows.checked_mul(cols) {
        Some(n) if n <= MAX_GRID_POINTS => Ok(()),
        _ => Err(MeshError::grid_too_large(rows, cols)),
    }
}

/// Build a grid by evaluating each row independently.
///
/// `row_fn(i)` must return exactly `cols` points. With `parallel` set, rows
/// run on the rayon pool; results are collected in row order, so the output
/// is identical to the sequential path.
pub fn evaluate_rows<F>(
    rows: usize,
    cols: usize,
    parallel: bool,
    row_fn: F,
) -> Result<SurfaceGrid, MeshError>
where
    F: Fn(usize) -> Result<Vec<DVec3>, MeshError> + Sync,
{
    check_grid_size(rows, cols)?;

    let evaluated: Vec<Vec<DVec3>> = if parallel {
        (0..rows).into_par_iter().map(&row_fn).collect::<Result<_, _>>()?
    } else {
        (0..rows).map(&row_fn).collect::<Result<_, _>>()?
    };

    let mut points = Vec::with_capacity(rows * cols);
    for row in evaluated {
        debug_assert_eq!(row.len(), cols);
        points.extend(row);
    }

    let grid = SurfaceGrid::from_parts(rows, cols, points);
    report(&grid);
    Ok(grid)
}

/// Log grid dimensions and any non-finite points.
pub(crate) fn report(grid: &SurfaceGrid) {
    let non_finite = grid.non_finite_count();
    if non_finite > 0 {
        warn!(non_finite, rows = grid.rows, cols = grid.cols, "surface contains non-finite points");
    }
    debug!(rows = grid.rows, cols = grid.cols, quads = grid.quad_count(), "built surface grid");
}

// =============================================================================
// TESTS
// =============================================================================

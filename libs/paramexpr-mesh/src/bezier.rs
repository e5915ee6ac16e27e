//! # Bézier Segments
//!
//! A single cubic segment built from 2, 3 or 4 control points. Lines and
//! quadratics are degree-elevated to cubic handles, so every segment samples
//! through the same cubic formula.
//!
//! ## Example
//!
//! ```rust
//! use paramexpr_mesh::BezierSegment;
//! use glam::DVec3;
//!
//! let line = BezierSegment::from_points(&[DVec3::ZERO, DVec3::new(3.0, 0.0, 0.0)]).unwrap();
//! assert_eq!(line.h1, DVec3::new(1.0, 0.0, 0.0));
//! assert_eq!(line.sample(4).unwrap().len(), 4);
//! ```

use crate::error::MeshError;
use crate::range::ParamRange;
use config::constants::{DEFAULT_BEZIER_RESOLUTION, MIN_RESOLUTION};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Cubic Bézier segment `p0 → p3` with handles `h1`, `h2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierSegment {
    pub p0: DVec3,
    pub h1: DVec3,
    pub h2: DVec3,
    pub p3: DVec3,
}

impl BezierSegment {
    pub const fn new(p0: DVec3, h1: DVec3, h2: DVec3, p3: DVec3) -> Self {
        Self { p0, h1, h2, p3 }
    }

    /// Straight segment with handles at thirds of the chord.
    pub fn linear(p0: DVec3, end: DVec3) -> Self {
        let chord = end - p0;
        Self::new(p0, p0 + chord / 3.0, p0 + chord * (2.0 / 3.0), end)
    }

    /// Exact cubic form of the quadratic with control point `p1`.
    pub fn quadratic(p0: DVec3, p1: DVec3, end: DVec3) -> Self {
        Self::new(
            p0,
            p0 + (p1 - p0) * (2.0 / 3.0),
            end + (p1 - end) * (2.0 / 3.0),
            end,
        )
    }

    /// Segment from 2 (line), 3 (quadratic) or 4 (cubic) points.
    ///
    /// ## Errors
    ///
    /// [`MeshError::InvalidControlPoints`] for any other count
    pub fn from_points(points: &[DVec3]) -> Result<Self, MeshError> {
        match *points {
            [p0, end] => Ok(Self::linear(p0, end)),
            [p0, p1, end] => Ok(Self::quadratic(p0, p1, end)),
            [p0, h1, h2, p3] => Ok(Self::new(p0, h1, h2, p3)),
            _ => Err(MeshError::InvalidControlPoints {
                count: points.len(),
            }),
        }
    }

    /// Point at `t` in `[0, 1]` (Bernstein form).
    pub fn point_at(&self, t: f64) -> DVec3 {
        let u = 1.0 - t;
        self.p0 * (u * u * u)
            + self.h1 * (3.0 * u * u * t)
            + self.h2 * (3.0 * u * t * t)
            + self.p3 * (t * t * t)
    }

    /// Derivative with respect to `t`.
    pub fn tangent_at(&self, t: f64) -> DVec3 {
        let u = 1.0 - t;
        (self.h1 - self.p0) * (3.0 * u * u)
            + (self.h2 - self.h1) * (6.0 * u * t)
            + (self.p3 - self.h2) * (3.0 * t * t)
    }

    /// `resolution` points at evenly spaced `t` in `[0, 1]`.
    ///
    /// The first and last points are exactly `p0` and `p3`.
    ///
    /// ## Errors
    ///
    /// [`MeshError::InvalidResolution`] when `resolution < 2`
    pub fn sample(&self, resolution: usize) -> Result<Vec<DVec3>, MeshError> {
        if resolution < MIN_RESOLUTION {
            return Err(MeshError::invalid_resolution("bezier", resolution, MIN_RESOLUTION));
        }
        Ok(self.sample_points(resolution))
    }

    /// Sample at [`DEFAULT_BEZIER_RESOLUTION`].
    pub fn sample_default(&self) -> Vec<DVec3> {
        self.sample_points(DEFAULT_BEZIER_RESOLUTION)
    }

    fn sample_points(&self, resolution: usize) -> Vec<DVec3> {
        let last = resolution - 1;
        ParamRange::new(0.0, 1.0)
            .samples(resolution)
            .enumerate()
            .map(|(k, t)| match k {
                0 => self.p0,
                k if k == last => self.p3,
                _ => self.point_at(t),
            })
            .collect()
    }
}

//! # Parameter Ranges
//!
//! Closed intervals a parameter is swept over, and the even spacing rule
//! every sampler shares: `count` samples from `min` to `max` inclusive,
//! `x_k = min + k * (max - min) / (count - 1)`. A single sample sits at
//! `min`.

use config::constants::{
    approx_zero, DEFAULT_S_MAX, DEFAULT_S_MIN, DEFAULT_T_MAX, DEFAULT_T_MIN, DEFAULT_U_MAX,
    DEFAULT_U_MIN, DEFAULT_V_MAX, DEFAULT_V_MIN,
};
use serde::{Deserialize, Serialize};

/// A closed parameter interval `[min, max]`.
///
/// `max < min` is allowed and samples run downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
}

impl ParamRange {
    /// Default curve parameter range.
    pub const T: Self = Self::new(DEFAULT_T_MIN, DEFAULT_T_MAX);
    /// Default sweep parameter range.
    pub const S: Self = Self::new(DEFAULT_S_MIN, DEFAULT_S_MAX);
    /// Default surface `u` range.
    pub const U: Self = Self::new(DEFAULT_U_MIN, DEFAULT_U_MAX);
    /// Default surface `v` range.
    pub const V: Self = Self::new(DEFAULT_V_MIN, DEFAULT_V_MAX);

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Signed width `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when both ends coincide, so every sample is the same value.
    pub fn is_degenerate(&self) -> bool {
        approx_zero(self.span())
    }

    /// The `k`-th of `count` evenly spaced samples.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use paramexpr_mesh::ParamRange;
    ///
    /// let range = ParamRange::new(0.0, 1.0);
    /// assert_eq!(range.sample(0, 5), 0.0);
    /// assert_eq!(range.sample(2, 5), 0.5);
    /// assert_eq!(range.sample(4, 5), 1.0);
    /// assert_eq!(range.sample(0, 1), 0.0);
    /// ```
    pub fn sample(&self, k: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.min;
        }
        self.min + k as f64 * self.span() / (count - 1) as f64
    }

    /// All `count` samples in order.
    pub fn samples(&self, count: usize) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..count).map(move |k| self.sample(k, count))
    }
}

impl Default for ParamRange {
    fn default() -> Self {
        Self::T
    }
}

impl From<(f64, f64)> for ParamRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

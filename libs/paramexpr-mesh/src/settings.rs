//! # Sweep Settings
//!
//! Runtime knobs for building a swept surface. Serializable so a host can
//! persist them with the rest of its UI state.

use crate::range::ParamRange;
use config::constants::DEFAULT_SWEEP_STEPS;
use serde::{Deserialize, Serialize};

/// How the matrix set is sampled and how the grid is evaluated.
///
/// ## Example
///
/// ```rust
/// use paramexpr_mesh::SweepSettings;
///
/// let settings = SweepSettings::default();
/// assert_eq!(settings.steps, 50);
/// assert!(settings.parallel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepSettings {
    /// Number of `s` samples (rows of the surface grid).
    pub steps: usize,
    /// Interval `s` is swept over.
    pub s_range: ParamRange,
    /// Evaluate grid rows on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            steps: DEFAULT_SWEEP_STEPS,
            s_range: ParamRange::S,
            parallel: true,
        }
    }
}

impl SweepSettings {
    /// Settings with a different step count.
    pub fn with_steps(self, steps: usize) -> Self {
        Self { steps, ..self }
    }

    /// Settings evaluated on the calling thread only.
    pub fn sequential(self) -> Self {
        Self {
            parallel: false,
            ..self
        }
    }
}

//! # Config Crate
//!
//! Centralized configuration constants for the parametric expression pipeline.
//! Default ranges, resolutions, sweep step counts and default expressions are
//! defined here so the parser, evaluator and mesh crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SWEEP_STEPS, DEFAULT_SURFACE_RESOLUTION, MIN_RESOLUTION};
//!
//! // Matrix sweep and curve sampling are configured independently
//! let steps = DEFAULT_SWEEP_STEPS;
//! let resolution = DEFAULT_SURFACE_RESOLUTION;
//! assert!(resolution >= MIN_RESOLUTION);
//! assert_eq!(steps * resolution, 1600);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host-Agnostic**: No host application values leak in here
//! - **Plugin Compatible**: Defaults match the geometry-nodes tools they replace

pub mod constants;

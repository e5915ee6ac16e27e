//! # Parametric Expression Mesh
//!
//! Curves, matrix sweeps and surfaces driven by parametric expressions.
//!
//! ## Architecture
//!
//! ```text
//! paramexpr-eval (Expression) → paramexpr-mesh (SurfaceGrid → Mesh)
//! ```
//!
//! ## Pipelines
//!
//! - **Curve Sampler**: `t ↦ (x, y, z)` at evenly spaced `t`
//! - **Matrix Builder**: sixteen entries of `s`, swept over `[s_min, s_max]`
//! - **Surface Composer**: curve × matrices, or `(u, v) ↦ (x, y, z)` directly
//! - **Geometry tools**: Bézier segments, pivot transforms, point/normal planes
//!
//! ## Usage
//!
//! ```rust
//! use paramexpr_mesh::{build_swept_mesh, CurveSpec, MatrixSpec, SweepSettings};
//!
//! let curve = CurveSpec::helix().unwrap().with_resolution(16).unwrap();
//! let matrices = MatrixSpec::translation_x().unwrap();
//! let mesh = build_swept_mesh(&curve, &matrices, &SweepSettings::default().with_steps(4)).unwrap();
//! assert_eq!(mesh.vertex_count(), 64);
//! assert_eq!(mesh.quad_count(), 45);
//! ```

pub mod bezier;
pub mod curve;
pub mod error;
pub mod grid;
pub mod matrix;
pub mod mesh;
pub mod pivot;
pub mod plane;
pub mod range;
pub mod settings;
pub mod surface;

pub use bezier::BezierSegment;
pub use curve::{sample_curve, CurveSpec};
pub use error::MeshError;
pub use grid::SurfaceGrid;
pub use matrix::{build_matrix, sweep_matrices, MatrixSpec};
pub use mesh::Mesh;
pub use pivot::{pivot_matrix, transform_about, transform_mesh_about, transform_points_about};
pub use plane::PlaneSpec;
pub use range::ParamRange;
pub use settings::SweepSettings;
pub use surface::{
    build_swept_surface, compose_surface, evaluate_uv_surface, evaluate_uv_surface_with,
    UvSurfaceSpec,
};

/// Build a swept surface and export it as a mesh with vertex normals.
///
/// # Arguments
///
/// * `curve` - Profile curve, sampled along the grid columns
/// * `matrices` - Sweep matrix, sampled along the grid rows
/// * `settings` - Step count, `s` range and evaluation mode
pub fn build_swept_mesh(
    curve: &CurveSpec,
    matrices: &MatrixSpec,
    settings: &SweepSettings,
) -> Result<Mesh, MeshError> {
    let mut mesh = build_swept_surface(curve, matrices, settings)?.to_mesh();
    mesh.compute_normals();
    Ok(mesh)
}

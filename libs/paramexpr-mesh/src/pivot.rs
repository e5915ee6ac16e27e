//! # Pivot Transforms
//!
//! Apply a matrix about a pivot point instead of the origin:
//! `T(pivot) · M · T(-pivot)`. A rotation spins geometry in place around
//! the pivot and a scale grows it away from the pivot.

use crate::matrix::apply_to_point;
use crate::mesh::Mesh;
use glam::{DMat4, DVec3};

/// `matrix` conjugated so that `pivot` is its fixed point.
///
/// ## Example
///
/// ```rust
/// use paramexpr_mesh::pivot_matrix;
/// use glam::{DMat4, DVec3};
///
/// let pivot = DVec3::new(1.0, 1.0, 0.0);
/// let m = pivot_matrix(&DMat4::from_scale(DVec3::splat(2.0)), pivot);
/// assert_eq!(m.transform_point3(pivot), pivot);
/// ```
pub fn pivot_matrix(matrix: &DMat4, pivot: DVec3) -> DMat4 {
    DMat4::from_translation(pivot) * *matrix * DMat4::from_translation(-pivot)
}

/// Transform one point about `pivot`.
pub fn transform_about(matrix: &DMat4, pivot: DVec3, point: DVec3) -> DVec3 {
    apply_to_point(&pivot_matrix(matrix, pivot), point)
}

/// Transform points in place about `pivot`.
pub fn transform_points_about(matrix: &DMat4, pivot: DVec3, points: &mut [DVec3]) {
    let m = pivot_matrix(matrix, pivot);
    for p in points {
        *p = apply_to_point(&m, *p);
    }
}

/// Transform a mesh in place about `pivot`.
pub fn transform_mesh_about(matrix: &DMat4, pivot: DVec3, mesh: &mut Mesh) {
    mesh.transform(&pivot_matrix(matrix, pivot));
}

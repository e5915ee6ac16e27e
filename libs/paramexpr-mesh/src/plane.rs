//! # Point/Normal Planes
//!
//! A square quad of edge `size` centred at `point` whose local +Z axis is
//! aligned to `normal`.

use crate::mesh::Mesh;
use config::constants::{DEFAULT_PLANE_SIZE, NORMAL_EPSILON};
use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Plane through a point, facing a normal.
///
/// ## Example
///
/// ```rust
/// use paramexpr_mesh::PlaneSpec;
/// use glam::DVec3;
///
/// let plane = PlaneSpec::new(DVec3::ZERO, DVec3::X, 4.0);
/// let mesh = plane.to_mesh();
/// assert_eq!(mesh.quad_count(), 1);
/// assert!(mesh.vertices().iter().all(|v| v.x.abs() < 1e-12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneSpec {
    pub point: DVec3,
    pub normal: DVec3,
    /// Edge length; negative values behave as zero
    pub size: f64,
}

impl Default for PlaneSpec {
    fn default() -> Self {
        Self {
            point: DVec3::ZERO,
            normal: DVec3::Z,
            size: DEFAULT_PLANE_SIZE,
        }
    }
}

impl PlaneSpec {
    pub fn new(point: DVec3, normal: DVec3, size: f64) -> Self {
        Self {
            point,
            normal,
            size,
        }
    }

    /// Unit normal, or +Z when the given normal is too short.
    pub fn unit_normal(&self) -> DVec3 {
        let length = self.normal.length();
        if length > NORMAL_EPSILON {
            self.normal / length
        } else {
            DVec3::Z
        }
    }

    /// Rotation taking +Z onto the unit normal.
    pub fn orientation(&self) -> DQuat {
        DQuat::from_rotation_arc(DVec3::Z, self.unit_normal())
    }

    /// Edge length clamped to zero.
    pub fn edge(&self) -> f64 {
        self.size.max(0.0)
    }

    /// The four corners, counter-clockwise seen from the normal side.
    pub fn corners(&self) -> [DVec3; 4] {
        let half = self.edge() / 2.0;
        let rotation = self.orientation();
        [
            DVec3::new(-half, -half, 0.0),
            DVec3::new(half, -half, 0.0),
            DVec3::new(half, half, 0.0),
            DVec3::new(-half, half, 0.0),
        ]
        .map(|corner| self.point + rotation * corner)
    }

    /// Single-quad mesh of the plane.
    pub fn to_mesh(&self) -> Mesh {
        Mesh::from_quads(self.corners().to_vec(), vec![[0, 1, 2, 3]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_plane() {
        let plane = PlaneSpec::default();
        let corners = plane.corners();
        assert_eq!(corners[0], DVec3::new(-1.0, -1.0, 0.0));
        assert_eq!(corners[2], DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_zero_normal_falls_back_to_z() {
        let plane = PlaneSpec::new(DVec3::ONE, DVec3::ZERO, 2.0);
        assert_eq!(plane.unit_normal(), DVec3::Z);
        assert_eq!(plane.corners()[0], DVec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_negative_size_clamps() {
        let plane = PlaneSpec::new(DVec3::new(1.0, 2.0, 3.0), DVec3::Z, -5.0);
        assert!(plane.corners().iter().all(|c| *c == plane.point));
    }

    #[test]
    fn test_mesh_normal_matches_plane_normal() {
        let normal = DVec3::new(1.0, -2.0, 0.5);
        let mut mesh = PlaneSpec::new(DVec3::new(3.0, 0.0, -1.0), normal, 1.5).to_mesh();
        mesh.compute_normals();
        let expected = normal.normalize();
        for n in mesh.normals().unwrap() {
            assert_relative_eq!(n.dot(expected), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_opposite_normal() {
        let plane = PlaneSpec::new(DVec3::ZERO, DVec3::NEG_Z, 2.0);
        for c in plane.corners() {
            assert!(c.z.abs() < 1e-12);
            assert_relative_eq!(c.truncate().length(), 2f64.sqrt(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_serde_defaults() {
        let plane: PlaneSpec = serde_json::from_str(r#"{"size": 3.0}"#).unwrap();
        assert_eq!(plane.normal, DVec3::Z);
        assert_eq!(plane.size, 3.0);
    }
}

//! # Quad Mesh
//!
//! Shared-vertex mesh with quad faces, the export form of a surface grid.
//! Renderers that want triangles call [`Mesh::triangulate`].

use crate::matrix::apply_to_point;
use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// A quad mesh with vertices and face indices.
///
/// Faces wind `[a, b, c, d]` around the quad; a quad whose corners coincide
/// (a pole or a closed seam) is kept as is.
///
/// # Example
///
/// ```rust
/// use paramexpr_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// let b = mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// let c = mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
/// let d = mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_quad([a, b, c, d]);
/// assert_eq!(mesh.triangulate(), vec![[0, 1, 2], [0, 2, 3]]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    quads: Vec<[u32; 4]>,
    /// Per-vertex normals, present after [`Mesh::compute_normals`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh from vertices and quad faces.
    pub fn from_quads(vertices: Vec<DVec3>, quads: Vec<[u32; 4]>) -> Self {
        Self {
            vertices,
            quads,
            normals: None,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    /// Two triangles per quad.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.quads.len() * 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    pub fn add_quad(&mut self, quad: [u32; 4]) {
        self.quads.push(quad);
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn quads(&self) -> &[[u32; 4]] {
        &self.quads
    }

    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Split every quad `[a, b, c, d]` into `[a, b, c]` and `[a, c, d]`.
    pub fn triangulate(&self) -> Vec<[u32; 3]> {
        self.quads
            .iter()
            .flat_map(|&[a, b, c, d]| [[a, b, c], [a, c, d]])
            .collect()
    }

    /// Accumulate face normals onto vertices and normalize.
    ///
    /// Each quad contributes the normals of both its triangles. Vertices
    /// whose sum has zero length (isolated, or only on degenerate faces)
    /// keep a zero normal.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in self.triangulate() {
            let [v0, v1, v2] = tri.map(|i| self.vertices[i as usize]);
            let normal = (v1 - v0).cross(v2 - v0);
            for i in tri {
                normals[i as usize] += normal;
            }
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Axis-aligned bounding box as `(min, max)`, ignoring non-finite points.
    ///
    /// None when no vertex is finite.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let mut finite = self.vertices.iter().copied().filter(|v| v.is_finite());
        let first = finite.next()?;
        Some(finite.fold((first, first), |(min, max), v| (min.min(v), max.max(v))))
    }

    /// Transform every vertex with `w = 1`, keeping xyz.
    ///
    /// Normals, if present, are recomputed from the moved vertices.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = apply_to_point(matrix, *v);
        }
        if self.normals.is_some() {
            self.compute_normals();
        }
    }

    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Append another mesh, offsetting its indices.
    ///
    /// Normals are dropped unless both meshes carry them.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.quads
            .extend(other.quads.iter().map(|q| q.map(|i| i + offset)));

        self.normals = match (self.normals.take(), &other.normals) {
            (Some(mut mine), Some(theirs)) => {
                mine.extend_from_slice(theirs);
                Some(mine)
            }
            _ => None,
        };
    }

    /// True when every face index refers to an existing vertex.
    pub fn validate(&self) -> bool {
        let count = self.vertices.len() as u32;
        self.quads.iter().flatten().all(|&i| i < count)
    }

    /// Flattened `[x, y, z, ...]` for GPU upload.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| v.as_vec3().to_array())
            .collect()
    }

    /// Flattened triangle indices for GPU upload.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangulate().into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Mesh {
        Mesh::from_quads(
            vec![
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(1.0, 1.0, 0.0),
                DVec3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2, 3]],
        )
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.quad_count(), 0);
        assert!(mesh.bounding_box().is_none());
    }

    #[test]
    fn test_triangulate() {
        let mesh = unit_square();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangulate(), vec![[0, 1, 2], [0, 2, 3]]);
        assert_eq!(mesh.indices_u32(), vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_normals_face_up() {
        let mut mesh = unit_square();
        mesh.compute_normals();
        for n in mesh.normals().unwrap() {
            assert_eq!(*n, DVec3::Z);
        }
    }

    #[test]
    fn test_degenerate_face_leaves_zero_normal() {
        let mut mesh = Mesh::from_quads(vec![DVec3::ZERO; 4], vec![[0, 1, 2, 3]]);
        mesh.add_vertex(DVec3::X);
        mesh.compute_normals();
        assert!(mesh.normals().unwrap().iter().all(|n| *n == DVec3::ZERO));
    }

    #[test]
    fn test_bounding_box_skips_non_finite() {
        let mesh = Mesh::from_quads(
            vec![
                DVec3::new(-1.0, -2.0, -3.0),
                DVec3::new(f64::NAN, 0.0, 0.0),
                DVec3::new(4.0, 5.0, 6.0),
            ],
            Vec::new(),
        );
        assert_eq!(
            mesh.bounding_box(),
            Some((DVec3::new(-1.0, -2.0, -3.0), DVec3::new(4.0, 5.0, 6.0)))
        );
    }

    #[test]
    fn test_transform_recomputes_normals() {
        let mut mesh = unit_square();
        mesh.compute_normals();
        mesh.transform(&DMat4::from_rotation_x(std::f64::consts::PI));
        for n in mesh.normals().unwrap() {
            assert!((*n - DVec3::NEG_Z).length() < 1e-12);
        }
    }

    #[test]
    fn test_merge_offsets_indices() {
        let mut mesh = unit_square();
        let mut other = unit_square();
        other.translate(DVec3::Z);
        mesh.merge(&other);
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.quads()[1], [4, 5, 6, 7]);
        assert!(mesh.validate());
    }

    #[test]
    fn test_validate_invalid_index() {
        let mesh = Mesh::from_quads(vec![DVec3::ZERO], vec![[0, 1, 2, 3]]);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_vertices_f32() {
        let mesh = Mesh::from_quads(vec![DVec3::new(1.0, 2.0, 3.0)], Vec::new());
        assert_eq!(mesh.vertices_f32(), vec![1.0f32, 2.0, 3.0]);
    }
}

use crate::math::{Point, Real, Vector};
use na::Unit;

/// A triangle surface mesh: vertex positions, triangle indices and one normal
/// per vertex.
///
/// Triangles are wound counter-clockwise when viewed from outside; the
/// geometric normal of a stored triangle `[a, b, c]` is `(b - a).cross(c - a)`
/// and points outward.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    vertices: Vec<Point>,
    indices: Vec<[u32; 3]>,
    normals: Vec<Vector>,
}

impl Mesh {
    /// Creates a mesh from raw buffers.
    ///
    /// `normals` must be parallel to `vertices` and every index must refer to
    /// an existing vertex.
    pub fn new(vertices: Vec<Point>, indices: Vec<[u32; 3]>, normals: Vec<Vector>) -> Self {
        debug_assert_eq!(vertices.len(), normals.len());
        debug_assert!(indices
            .iter()
            .all(|idx| idx.iter().all(|i| (*i as usize) < vertices.len())));
        Self {
            vertices,
            indices,
            normals,
        }
    }

    /// The vertex buffer of this mesh.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The triangle index buffer of this mesh.
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The per-vertex normals of this mesh, parallel to [`Self::vertices`].
    pub fn normals(&self) -> &[Vector] {
        &self.normals
    }

    /// The number of vertices of this mesh.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The number of triangles of this mesh.
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Read-only iteration over `(vertex, normal)` pairs, e.g. for a debug
    /// visualizer drawing each vertex and its normal ray.
    pub fn vertex_normals(&self) -> impl Iterator<Item = (Point, Vector)> + '_ {
        self.vertices
            .iter()
            .zip(self.normals.iter())
            .map(|(v, n)| (*v, *n))
    }

    /// Mutable access to the vertex positions.
    ///
    /// This cannot change the topology: the slice length is fixed. Callers
    /// moving vertices should follow up with [`Self::recompute_normals`].
    pub fn vertices_mut(&mut self) -> &mut [Point] {
        &mut self.vertices
    }

    /// Recomputes all vertex normals from the current vertex positions by
    /// area-weighted face-normal accumulation.
    ///
    /// Vertices whose accumulated normal is degenerate (zero-length) keep
    /// their previous normal, so no NaN can enter the normal buffer.
    pub fn recompute_normals(&mut self) {
        let mut accum = vec![Vector::zeros(); self.vertices.len()];

        for idx in &self.indices {
            let a = self.vertices[idx[0] as usize];
            let b = self.vertices[idx[1] as usize];
            let c = self.vertices[idx[2] as usize];
            let face = (b - a).cross(&(c - a));

            for i in idx {
                accum[*i as usize] += face;
            }
        }

        for (normal, acc) in self.normals.iter_mut().zip(accum.into_iter()) {
            if let Some(unit) = Unit::try_new(acc, Real::EPSILON) {
                *normal = unit.into_inner();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recompute_normals_single_triangle() {
        // One CCW triangle in the xz plane; its outward normal per the stored
        // winding is -y.
        let vertices = vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
        ];
        let normals = vec![Vector::zeros(); 3];
        let mut mesh = Mesh::new(vertices, vec![[0, 1, 2]], normals);

        mesh.recompute_normals();
        for n in mesh.normals() {
            assert_relative_eq!(*n, -Vector::y(), epsilon = 1.0e-6);
        }
    }

    #[test]
    fn recompute_normals_degenerate_keeps_previous() {
        // All three vertices coincide: the face normal is zero, so the
        // pre-existing normals must survive untouched.
        let vertices = vec![Point::origin(); 3];
        let normals = vec![Vector::x(); 3];
        let mut mesh = Mesh::new(vertices, vec![[0, 1, 2]], normals);

        mesh.recompute_normals();
        for n in mesh.normals() {
            assert_eq!(*n, Vector::x());
        }
    }
}

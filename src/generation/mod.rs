//! Procedural generation of watertight rounded-box triangle meshes.
//!
//! Vertices are laid out in concentric rings around the box cross-section,
//! one ring per vertical layer, followed by the interior grids of the top and
//! bottom caps. The triangle indices are pure index arithmetic over the box
//! dimensions and never touch the vertex positions. Optional rounding bends
//! the box into a rounded box by reprojecting each surface lattice point onto
//! the boundary of the inset box.

mod staged;
pub(crate) mod triangles;
pub(crate) mod vertices;

pub use staged::{BuildStage, MeshBuilder};

use crate::shape::RoundedBox;
use crate::Mesh;

impl RoundedBox {
    /// Builds the triangle mesh of this box: a watertight, outward-wound
    /// surface with one normal per vertex.
    ///
    /// This is a pure function of the shape: identical boxes always yield
    /// bit-identical meshes. Use [`MeshBuilder`] instead to spread the
    /// construction across several ticks.
    pub fn to_mesh(&self) -> Mesh {
        let mut lattice = Vec::with_capacity(self.num_surface_vertices());
        vertices::push_lattice_points(self, &mut lattice);

        let mut positions = Vec::with_capacity(lattice.len());
        let mut normals = Vec::with_capacity(lattice.len());
        for p in &lattice {
            let (vertex, normal) = vertices::place_vertex(self, *p);
            positions.push(vertex);
            normals.push(normal);
        }

        let indices = triangles::stitch(self);
        log::debug!(
            "built {}x{}x{} box mesh (roundness {}): {} vertices, {} triangles",
            self.x_size(),
            self.y_size(),
            self.z_size(),
            self.roundness(),
            positions.len(),
            indices.len(),
        );

        Mesh::new(positions, indices, normals)
    }
}

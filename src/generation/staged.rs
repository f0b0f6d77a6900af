use crate::generation::{triangles, vertices};
use crate::math::{Point, Vector};
use crate::shape::RoundedBox;
use crate::Mesh;

/// The construction stages of a [`MeshBuilder`], in order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum BuildStage {
    /// Vertex positions are being computed.
    Vertices,
    /// Triangle indices are being computed.
    Triangles,
    /// Vertex normals are being computed.
    Normals,
    /// Construction is complete.
    Done,
}

/// A resumable mesh builder that splits construction into three discrete
/// stages, so a caller can interleave other work between them.
///
/// Each call to [`MeshBuilder::advance`] runs exactly one stage to
/// completion. A stage's output only becomes readable once that stage has
/// completed; in particular the triangle indices never reference vertices
/// that are not yet assigned.
///
/// ```
/// use softbox::generation::{BuildStage, MeshBuilder};
/// use softbox::shape::RoundedBox;
///
/// let mut builder = MeshBuilder::new(RoundedBox::flat(2, 2, 2).unwrap());
/// while builder.advance() != BuildStage::Done {
///     // ... other per-tick work ...
/// }
/// let mesh = builder.finish().unwrap();
/// assert_eq!(mesh.num_vertices(), 26);
/// ```
pub struct MeshBuilder {
    shape: RoundedBox,
    stage: BuildStage,
    lattice: Vec<[u32; 3]>,
    vertices: Vec<Point>,
    indices: Vec<[u32; 3]>,
    normals: Vec<Vector>,
}

impl MeshBuilder {
    /// Starts building a mesh for `shape`. No work happens until the first
    /// call to [`Self::advance`].
    pub fn new(shape: RoundedBox) -> Self {
        Self {
            shape,
            stage: BuildStage::Vertices,
            lattice: Vec::new(),
            vertices: Vec::new(),
            indices: Vec::new(),
            normals: Vec::new(),
        }
    }

    /// The stage the next call to [`Self::advance`] will run, or
    /// [`BuildStage::Done`] if construction is complete.
    pub fn stage(&self) -> BuildStage {
        self.stage
    }

    /// Runs the pending stage to completion and returns the new pending
    /// stage. Calling this on a finished builder is a no-op.
    pub fn advance(&mut self) -> BuildStage {
        match self.stage {
            BuildStage::Vertices => {
                self.lattice.reserve(self.shape.num_surface_vertices());
                vertices::push_lattice_points(&self.shape, &mut self.lattice);
                self.vertices = self
                    .lattice
                    .iter()
                    .map(|p| vertices::place_vertex(&self.shape, *p).0)
                    .collect();
                self.stage = BuildStage::Triangles;
            }
            BuildStage::Triangles => {
                self.indices = triangles::stitch(&self.shape);
                self.stage = BuildStage::Normals;
            }
            BuildStage::Normals => {
                self.normals = self
                    .lattice
                    .iter()
                    .map(|p| vertices::surface_normal(&self.shape, *p))
                    .collect();
                self.stage = BuildStage::Done;
            }
            BuildStage::Done => {}
        }

        self.stage
    }

    /// The vertex positions, if the vertex stage has completed.
    pub fn vertices(&self) -> Option<&[Point]> {
        (self.stage > BuildStage::Vertices).then_some(&self.vertices[..])
    }

    /// The triangle indices, if the triangle stage has completed.
    pub fn indices(&self) -> Option<&[[u32; 3]]> {
        (self.stage > BuildStage::Triangles).then_some(&self.indices[..])
    }

    /// The vertex normals, if the normal stage has completed.
    pub fn normals(&self) -> Option<&[Vector]> {
        (self.stage == BuildStage::Done).then_some(&self.normals[..])
    }

    /// Consumes the builder and returns the mesh, or `None` if some stage has
    /// not completed yet.
    pub fn finish(self) -> Option<Mesh> {
        (self.stage == BuildStage::Done)
            .then(|| Mesh::new(self.vertices, self.indices, self.normals))
    }
}

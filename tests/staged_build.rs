use softbox::generation::{BuildStage, MeshBuilder};
use softbox::shape::RoundedBox;

#[test]
fn stages_run_in_order_and_gate_their_outputs() {
    let shape = RoundedBox::new(3, 3, 4, 1).unwrap();
    let mut builder = MeshBuilder::new(shape);

    assert_eq!(builder.stage(), BuildStage::Vertices);
    assert!(builder.vertices().is_none());
    assert!(builder.indices().is_none());
    assert!(builder.normals().is_none());

    assert_eq!(builder.advance(), BuildStage::Triangles);
    let vertices = builder.vertices().expect("vertices stage completed");
    assert_eq!(vertices.len(), shape.num_surface_vertices());
    assert!(builder.indices().is_none());
    assert!(builder.normals().is_none());

    assert_eq!(builder.advance(), BuildStage::Normals);
    let indices = builder.indices().expect("triangles stage completed");
    assert_eq!(indices.len(), shape.num_triangles());
    assert!(builder.normals().is_none());

    assert_eq!(builder.advance(), BuildStage::Done);
    let normals = builder.normals().expect("normals stage completed");
    assert_eq!(normals.len(), shape.num_surface_vertices());

    // Advancing a finished builder stays done.
    assert_eq!(builder.advance(), BuildStage::Done);
}

#[test]
fn staged_build_matches_the_one_shot_build() {
    let shape = RoundedBox::new(4, 3, 5, 1).unwrap();

    let mut builder = MeshBuilder::new(shape);
    while builder.advance() != BuildStage::Done {}
    let staged = builder.finish().expect("builder is done");

    assert_eq!(staged, shape.to_mesh());
}

#[test]
fn finish_refuses_partial_construction() {
    let shape = RoundedBox::flat(2, 2, 2).unwrap();

    let mut builder = MeshBuilder::new(shape);
    assert!(builder.advance() != BuildStage::Done);
    assert!(builder.finish().is_none());
}

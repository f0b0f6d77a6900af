/*!
softbox
========

**softbox** is a procedural-geometry library for box-shaped triangle meshes
with optional edge/corner rounding, together with a per-vertex spring-mass
deformer that perturbs a generated mesh under point impulses and relaxes it
back to its rest shape.

The two entry points are [`shape::RoundedBox::to_mesh`] for mesh generation
and [`deformation::SpringDeformer`] for runtime deformation. Construction can
also be spread across several ticks with [`generation::MeshBuilder`].

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(clippy::manual_range_contains)]

#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod deformation;
pub mod generation;
pub mod math;
mod mesh;
pub mod shape;

pub use mesh::Mesh;

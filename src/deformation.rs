//! Spring-mass vertex deformation of an existing mesh.
//!
//! Every vertex is an independent damped harmonic oscillator anchored at its
//! rest position. External point impulses push vertices away with
//! inverse-square attenuation; ticking the deformer integrates the springs
//! and relaxes the mesh back to its rest shape.

use crate::math::{Point, Real, Vector};
use crate::Mesh;
use na::Unit;

/// Parameters of the per-vertex spring-damper.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringParams {
    /// Restoring stiffness pulling each vertex back to its rest position.
    /// Must be positive for the mesh to relax back.
    pub spring_force: Real,
    /// Linear velocity decay coefficient, per unit time. Zero keeps
    /// oscillations undamped; values in `[0, 1/dt)` are stable.
    pub damping: Real,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            spring_force: 20.0,
            damping: 5.0,
        }
    }
}

/// A per-vertex spring-mass integrator deforming a mesh in place.
///
/// The deformer owns its own buffers (rest positions, live positions,
/// velocities), snapshotted from the mesh at creation; it never touches the
/// mesh topology. [`Self::apply_impulse`] may be called any number of times
/// between ticks and accumulates additively.
///
/// There is no internal synchronization: the `&mut self` receivers make the
/// required serialization of ticks and impulses explicit. Concurrent callers
/// must wrap the deformer in a lock of their choosing.
pub struct SpringDeformer {
    rest: Vec<Point>,
    live: Vec<Point>,
    velocities: Vec<Vector>,
    /// The spring parameters, adjustable at any time.
    pub params: SpringParams,
}

impl SpringDeformer {
    /// Creates a deformer anchored at the current vertex positions of `mesh`.
    pub fn new(mesh: &Mesh, params: SpringParams) -> Self {
        let rest = mesh.vertices().to_vec();
        Self {
            live: rest.clone(),
            velocities: vec![Vector::zeros(); rest.len()],
            rest,
            params,
        }
    }

    /// The number of simulated vertices.
    pub fn num_vertices(&self) -> usize {
        self.rest.len()
    }

    /// The immutable rest positions the vertices relax toward.
    pub fn rest_positions(&self) -> &[Point] {
        &self.rest
    }

    /// The current displaced vertex positions.
    pub fn displaced_positions(&self) -> &[Point] {
        &self.live
    }

    /// The current per-vertex velocities.
    pub fn velocities(&self) -> &[Vector] {
        &self.velocities
    }

    /// Adds an inverse-square-attenuated velocity contribution pushing every
    /// vertex away from `point` (given in the mesh's local space).
    ///
    /// `dt` is the time step of the tick this impulse belongs to. A vertex
    /// coinciding with `point` has no defined push direction and receives no
    /// contribution.
    pub fn apply_impulse(&mut self, point: Point, force: Real, dt: Real) {
        for (live, velocity) in self.live.iter().zip(self.velocities.iter_mut()) {
            let to_vertex = *live - point;
            let attenuated = force / (1.0 + to_vertex.norm_squared());
            if let Some(dir) = Unit::try_new(to_vertex, Real::EPSILON) {
                *velocity += dir.into_inner() * (attenuated * dt);
            }
        }
    }

    /// Advances the simulation by `dt` and writes the displaced positions and
    /// freshly recomputed normals back into `mesh`.
    ///
    /// The normal recompute is a full face-normal accumulation over the
    /// displaced surface, not an incremental update. A zero-vertex mesh is a
    /// no-op.
    pub fn tick(&mut self, mesh: &mut Mesh, dt: Real) {
        debug_assert_eq!(mesh.num_vertices(), self.rest.len());

        let SpringParams {
            spring_force,
            damping,
        } = self.params;

        for i in 0..self.live.len() {
            let displacement = self.live[i] - self.rest[i];
            let mut velocity = self.velocities[i];
            velocity -= displacement * (spring_force * dt);
            velocity *= 1.0 - damping * dt;
            self.velocities[i] = velocity;
            self.live[i] += velocity * dt;
        }

        mesh.vertices_mut().copy_from_slice(&self.live);
        mesh.recompute_normals();
    }

    /// Snaps every vertex back to its rest position and clears all
    /// velocities. The mesh is not touched until the next tick.
    pub fn reset(&mut self) {
        self.live.copy_from_slice(&self.rest);
        for velocity in &mut self.velocities {
            *velocity = Vector::zeros();
        }
    }
}

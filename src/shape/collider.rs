use crate::math::{Point, Real, Vector};
use crate::shape::RoundedBox;

/// A primitive collider approximating part of a rounded box.
///
/// These are plain descriptors for a physics host; this crate never
/// instantiates colliders itself.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ColliderShape {
    /// An axis-aligned box collider.
    Cuboid {
        /// The center of the box, in the mesh's local space.
        center: Point,
        /// The half-extents of the box.
        half_extents: Vector,
    },
    /// A capsule collider given as a segment and a radius.
    Capsule {
        /// The first endpoint of the capsule's inner segment.
        a: Point,
        /// The second endpoint of the capsule's inner segment.
        b: Point,
        /// The radius of the capsule.
        radius: Real,
    },
}

impl RoundedBox {
    /// Primitive collider shapes approximating this box for a physics host.
    ///
    /// A flat box yields a single exact cuboid. A rounded box yields three
    /// interpenetrating cuboids (each shrunk by `2 * roundness` on two axes)
    /// plus twelve capsules of radius `roundness`, one per edge, whose
    /// segments span the straight part of the edge so the capsule ends
    /// coincide with the spherical corners.
    pub fn colliders(&self) -> Vec<ColliderShape> {
        let extents = self.extents();
        let center = Point::from(extents * 0.5);

        if self.roundness() == 0 {
            return vec![ColliderShape::Cuboid {
                center,
                half_extents: extents * 0.5,
            }];
        }

        let r = self.roundness() as Real;
        let shrunk = extents - Vector::repeat(2.0 * r);

        let mut shapes = Vec::with_capacity(15);
        shapes.push(ColliderShape::Cuboid {
            center,
            half_extents: Vector::new(extents.x, shrunk.y, shrunk.z) * 0.5,
        });
        shapes.push(ColliderShape::Cuboid {
            center,
            half_extents: Vector::new(shrunk.x, extents.y, shrunk.z) * 0.5,
        });
        shapes.push(ColliderShape::Cuboid {
            center,
            half_extents: Vector::new(shrunk.x, shrunk.y, extents.z) * 0.5,
        });

        let min = Vector::repeat(r);
        let max = extents - min;

        // Four capsules per axis, one along each parallel edge.
        for &y in &[min.y, max.y] {
            for &z in &[min.z, max.z] {
                shapes.push(ColliderShape::Capsule {
                    a: Point::new(min.x, y, z),
                    b: Point::new(max.x, y, z),
                    radius: r,
                });
            }
        }
        for &x in &[min.x, max.x] {
            for &z in &[min.z, max.z] {
                shapes.push(ColliderShape::Capsule {
                    a: Point::new(x, min.y, z),
                    b: Point::new(x, max.y, z),
                    radius: r,
                });
            }
        }
        for &x in &[min.x, max.x] {
            for &y in &[min.y, max.y] {
                shapes.push(ColliderShape::Capsule {
                    a: Point::new(x, y, min.z),
                    b: Point::new(x, y, max.z),
                    radius: r,
                });
            }
        }

        shapes
    }
}

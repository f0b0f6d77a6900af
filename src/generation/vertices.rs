use crate::math::{Point, Real, Vector};
use crate::shape::RoundedBox;
use na::Unit;

/// Pushes every surface lattice point of the box, in builder order: one ring
/// per layer from y=0 to y=y_size, then the top cap interior grid, then the
/// bottom cap interior grid.
///
/// Each ring walks the front edge (x: 0..=x_size at z=0), the right edge
/// (z: 1..=z_size at x=x_size), the back edge (x: x_size-1..=0 at z=z_size)
/// and the left edge (z: z_size-1..=1 at x=0), so the loop closes without
/// duplicating corners.
pub(crate) fn push_lattice_points(shape: &RoundedBox, out: &mut Vec<[u32; 3]>) {
    let (x_size, y_size, z_size) = (shape.x_size(), shape.y_size(), shape.z_size());

    for y in 0..=y_size {
        for x in 0..=x_size {
            out.push([x, y, 0]);
        }
        for z in 1..=z_size {
            out.push([x_size, y, z]);
        }
        for x in (0..x_size).rev() {
            out.push([x, y, z_size]);
        }
        for z in (1..z_size).rev() {
            out.push([0, y, z]);
        }
    }

    for z in 1..z_size {
        for x in 1..x_size {
            out.push([x, y_size, z]);
        }
    }
    for z in 1..z_size {
        for x in 1..x_size {
            out.push([x, 0, z]);
        }
    }
}

fn raw_point(p: [u32; 3]) -> Point {
    Point::new(p[0] as Real, p[1] as Real, p[2] as Real)
}

/// The reference point obtained by pulling each coordinate of `p` back into
/// the box inset by the roundness radius. Coordinates already strictly inside
/// the inset interval are left unchanged.
fn inset_point(shape: &RoundedBox, p: [u32; 3]) -> Point {
    let r = shape.roundness() as Real;
    let extents = shape.extents();
    let raw = raw_point(p);
    let mut inset = raw;

    for i in 0..3 {
        if raw[i] < r {
            inset[i] = r;
        } else if raw[i] > extents[i] - r {
            inset[i] = extents[i] - r;
        }
    }

    inset
}

/// The outward normal of a flat (roundness = 0) box at the surface lattice
/// point `p`: the normalized sum of the outward directions of every face the
/// point lies on. Face points get the face normal; edge and corner points get
/// the diagonal average of two or three faces.
fn flat_normal(shape: &RoundedBox, p: [u32; 3]) -> Vector {
    let mut n = Vector::zeros();

    if p[0] == 0 {
        n.x -= 1.0;
    }
    if p[0] == shape.x_size() {
        n.x += 1.0;
    }
    if p[1] == 0 {
        n.y -= 1.0;
    }
    if p[1] == shape.y_size() {
        n.y += 1.0;
    }
    if p[2] == 0 {
        n.z -= 1.0;
    }
    if p[2] == shape.z_size() {
        n.z += 1.0;
    }

    // Only strictly interior lattice points lie on no face, and those are
    // never emitted.
    debug_assert!(n != Vector::zeros());
    n.normalize()
}

/// The outward surface normal at the lattice point `p`.
pub(crate) fn surface_normal(shape: &RoundedBox, p: [u32; 3]) -> Vector {
    if shape.roundness() == 0 {
        return flat_normal(shape, p);
    }

    match Unit::try_new(raw_point(p) - inset_point(shape, p), Real::EPSILON) {
        Some(unit) => unit.into_inner(),
        // A surface point always has at least one clamped coordinate when the
        // roundness is non-zero, so this is unreachable in practice.
        None => flat_normal(shape, p),
    }
}

/// Maps the raw lattice point `p` to its final vertex position and outward
/// normal: the rounded surface point `inset + normal * roundness`, or the
/// lattice point itself for a flat box.
pub(crate) fn place_vertex(shape: &RoundedBox, p: [u32; 3]) -> (Point, Vector) {
    let normal = surface_normal(shape, p);
    let vertex = if shape.roundness() == 0 {
        raw_point(p)
    } else {
        inset_point(shape, p) + normal * shape.roundness() as Real
    };

    (vertex, normal)
}

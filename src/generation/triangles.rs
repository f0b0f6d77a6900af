use crate::shape::RoundedBox;

/// Pushes one quad as two counter-clockwise triangles.
///
/// `v00` and `v10` are the lower edge of the quad, `v01` and `v11` the upper
/// edge, so the outward geometric normal of both triangles agrees with the
/// `(b - a).cross(c - a)` convention of [`crate::Mesh`].
fn push_quad(out: &mut Vec<[u32; 3]>, v00: u32, v10: u32, v01: u32, v11: u32) {
    out.push([v00, v01, v10]);
    out.push([v10, v01, v11]);
}

/// The position of the boundary lattice point `(x, z)` within a ring, i.e.
/// its offset from the first vertex of its layer. `(x, z)` must lie on the
/// ring: `x` on 0 or `x_size`, or `z` on 0 or `z_size`.
fn ring_offset(shape: &RoundedBox, x: u32, z: u32) -> u32 {
    let (x_size, z_size) = (shape.x_size(), shape.z_size());

    if z == 0 {
        x
    } else if x == x_size {
        x_size + z
    } else if z == z_size {
        2 * x_size + z_size - x
    } else {
        debug_assert_eq!(x, 0);
        2 * (x_size + z_size) - z
    }
}

/// The vertex index of the cap-grid coordinate `(x, z)` on the top or bottom
/// cap, simulating the emission order of the vertex builder: boundary
/// coordinates resolve into the cap's ring, interior coordinates into the cap
/// interior block.
fn cap_vertex(shape: &RoundedBox, top: bool, x: u32, z: u32) -> u32 {
    let (x_size, y_size, z_size) = (shape.x_size(), shape.y_size(), shape.z_size());
    let ring = shape.ring();

    if x == 0 || x == x_size || z == 0 || z == z_size {
        let layer_start = if top { ring * y_size } else { 0 };
        layer_start + ring_offset(shape, x, z)
    } else {
        let interiors_start = ring * (y_size + 1);
        let cap_start = if top {
            interiors_start
        } else {
            interiors_start + (x_size - 1) * (z_size - 1)
        };
        cap_start + (z - 1) * (x_size - 1) + (x - 1)
    }
}

/// Generates the full triangle index buffer of the box from its dimensions
/// alone: side quads between adjacent rings, then the two caps.
pub(crate) fn stitch(shape: &RoundedBox) -> Vec<[u32; 3]> {
    let mut out = Vec::with_capacity(shape.num_triangles());
    let ring = shape.ring();

    // Sides: connect each ring to the one above it. The last quad of each
    // layer wraps around to the layer's first vertex.
    for y in 0..shape.y_size() {
        let base = y * ring;
        for q in 0..ring {
            let i0 = base + q;
            let i1 = base + (q + 1) % ring;
            push_quad(&mut out, i0, i1, i0 + ring, i1 + ring);
        }
    }

    // Caps: one quad per grid cell, corners resolved through `cap_vertex` so
    // boundary cells stitch straight into the top/bottom ring. This covers
    // every cell exactly once for any dimensions, including width-1 caps
    // where a single quad touches the ring on all four sides.
    for z in 0..shape.z_size() {
        for x in 0..shape.x_size() {
            let a = cap_vertex(shape, true, x, z);
            let b = cap_vertex(shape, true, x + 1, z);
            let c = cap_vertex(shape, true, x, z + 1);
            let d = cap_vertex(shape, true, x + 1, z + 1);
            push_quad(&mut out, a, b, c, d);
        }
    }
    for z in 0..shape.z_size() {
        for x in 0..shape.x_size() {
            let a = cap_vertex(shape, false, x, z);
            let b = cap_vertex(shape, false, x + 1, z);
            let c = cap_vertex(shape, false, x, z + 1);
            let d = cap_vertex(shape, false, x + 1, z + 1);
            push_quad(&mut out, a, c, b, d);
        }
    }

    debug_assert_eq!(out.len(), shape.num_triangles());
    out
}

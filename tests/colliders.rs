use softbox::math::{Point, Vector};
use softbox::shape::{ColliderShape, RoundedBox};

#[test]
fn flat_box_is_a_single_cuboid() {
    let colliders = RoundedBox::flat(4, 2, 6).unwrap().colliders();
    assert_eq!(
        colliders,
        vec![ColliderShape::Cuboid {
            center: Point::new(2.0, 1.0, 3.0),
            half_extents: Vector::new(2.0, 1.0, 3.0),
        }]
    );
}

#[test]
fn rounded_box_yields_three_cuboids_and_twelve_capsules() {
    let colliders = RoundedBox::new(4, 4, 4, 1).unwrap().colliders();
    assert_eq!(colliders.len(), 15);

    let cuboids: Vec<_> = colliders
        .iter()
        .filter(|c| matches!(c, ColliderShape::Cuboid { .. }))
        .collect();
    let capsules: Vec<_> = colliders
        .iter()
        .filter(|c| matches!(c, ColliderShape::Capsule { .. }))
        .collect();
    assert_eq!(cuboids.len(), 3);
    assert_eq!(capsules.len(), 12);

    // Each cuboid spans the full box along exactly one axis and is shrunk by
    // twice the roundness along the other two.
    let center = Point::new(2.0, 2.0, 2.0);
    for expected in [
        Vector::new(2.0, 1.0, 1.0),
        Vector::new(1.0, 2.0, 1.0),
        Vector::new(1.0, 1.0, 2.0),
    ] {
        assert!(cuboids.contains(&&ColliderShape::Cuboid {
            center,
            half_extents: expected,
        }));
    }

    // Capsule segments span the straight part of each edge, so the round
    // capsule ends coincide with the spherical corners.
    assert!(capsules.contains(&&ColliderShape::Capsule {
        a: Point::new(1.0, 1.0, 1.0),
        b: Point::new(3.0, 1.0, 1.0),
        radius: 1.0,
    }));
    assert!(capsules.contains(&&ColliderShape::Capsule {
        a: Point::new(3.0, 1.0, 3.0),
        b: Point::new(3.0, 3.0, 3.0),
        radius: 1.0,
    }));
    for capsule in &capsules {
        if let ColliderShape::Capsule { a, b, radius } = capsule {
            assert_eq!(*radius, 1.0);
            assert_eq!((b - a).norm(), 2.0);
        }
    }
}

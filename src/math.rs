//! Linear algebra type aliases.

use na::{Point3, Vector3};

/// The scalar type used throughout this crate.
#[cfg(feature = "f64")]
pub type Real = f64;

/// The scalar type used throughout this crate.
#[cfg(not(feature = "f64"))]
pub type Real = f32;

/// The point type.
pub type Point = Point3<Real>;

/// The vector type.
pub type Vector = Vector3<Real>;

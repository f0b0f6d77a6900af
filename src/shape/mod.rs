//! Shape descriptions: the rounded box and its collider approximations.

mod collider;
mod rounded_box;

pub use collider::ColliderShape;
pub use rounded_box::{InvalidBoxError, RoundedBox};

/// Trait for types that can detect collisions between `Self` and `T`.
///
/// Collisions are strict: entities which only share (part of) an edge do not collide.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can fully contain `T`.
pub trait Contains<T> {
    fn contains(&self, other: &T) -> bool;
}

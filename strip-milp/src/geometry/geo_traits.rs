use crate::util::Tolerance;

/// Trait for types that can detect collisions between `Self` and `T` up to a tolerance.
///
/// Solver output is only accurate up to its own feasibility tolerance, so two rectangles which share an edge
/// may penetrate each other by a tiny amount. This trait ignores penetrations no deeper than `tol`.
pub trait AlmostCollidesWith<T> {
    fn almost_collides_with(&self, other: &T, tol: Tolerance) -> bool;
}

use crate::primitives::Point;

/// Trait for types that can detect intersections between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can compute the minimum distance between `Self` and `T`.
pub trait DistanceTo<T> {
    /// Minimum distance between two primitives. Will be 0 in case of an intersection.
    fn distance_to(&self, other: &T) -> f64;

    /// Squared version of [`DistanceTo::distance_to`]
    fn sq_distance_to(&self, other: &T) -> f64;
}

/// Trait for shared properties of geometric primitives.
pub trait Shape {
    /// Area of the interior of the shape. Zero for points and segments.
    fn area(&self) -> f64;

    /// Geometric center of the shape
    fn centroid(&self) -> Point;
}

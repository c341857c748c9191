use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::GeoError;
use crate::geo_traits::{DistanceTo, Shape};

/// Geometric primitive representing a point, doubling as a 2D vector where convenient.
///
/// Equality is exact structural equality on both coordinates. No tolerance is applied;
/// callers needing one must apply it themselves.
#[derive(Debug, Clone, PartialEq, Copy, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    /// Both coordinates at once.
    pub fn xy(&self) -> (f64, f64) {
        (self.0, self.1)
    }

    /// Distance to the origin.
    pub fn magnitude(&self) -> f64 {
        (self.0.powi(2) + self.1.powi(2)).sqrt()
    }

    pub fn dot(&self, other: &Point) -> f64 {
        self.0 * other.0 + self.1 * other.1
    }

    /// Cross product of the vectors `self -> p2` and `self -> p3`.
    ///
    /// Positive when `self -> p2 -> p3` turns counterclockwise, negative when it turns
    /// clockwise, zero when the three points are collinear.
    pub fn cross_product(&self, p2: &Point, p3: &Point) -> f64 {
        (p2.0 - self.0) * (p3.1 - self.1) - (p2.1 - self.1) * (p3.0 - self.0)
    }

    /// Angle between `self` and `other` interpreted as vectors, in radians.
    ///
    /// Fails with [`GeoError::UndefinedAngle`] when either vector has zero magnitude.
    pub fn angle_to(&self, other: &Point) -> Result<f64, GeoError> {
        let m1 = self.magnitude();
        let m2 = other.magnitude();
        if m1 == 0.0 || m2 == 0.0 {
            return Err(GeoError::UndefinedAngle);
        }
        //clamp to keep rounding noise out of acos' domain
        let cos = (self.dot(other) / (m1 * m2)).clamp(-1.0, 1.0);
        Ok(cos.acos())
    }

    /// Component-wise conversion from degrees to radians.
    pub fn to_radians(&self) -> Point {
        Point(self.0.to_radians(), self.1.to_radians())
    }

    /// Component-wise conversion from radians to degrees.
    pub fn to_degrees(&self) -> Point {
        Point(self.0.to_degrees(), self.1.to_degrees())
    }
}

impl DistanceTo<Point> for Point {
    fn distance_to(&self, other: &Point) -> f64 {
        self.sq_distance_to(other).sqrt()
    }

    fn sq_distance_to(&self, other: &Point) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }
}

impl Shape for Point {
    fn area(&self) -> f64 {
        0.0
    }

    fn centroid(&self) -> Point {
        *self
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
        self.1.to_bits().hash(state);
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}

use serde::{Deserialize, Serialize};

use crate::geo_traits::{CollidesWith, DistanceTo, Shape};
use crate::primitives::Point;

/// Maximum disagreement between the parametric positions recovered from the two axes
/// for a point to count as lying on a segment.
const PARAMETRIC_TOLERANCE: f64 = 1e-6;

/// Finite line segment between two [`Point`]s.
///
/// `start` and `end` may coincide; such a zero-length segment behaves as a single point.
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Segment { start, end }
    }

    pub fn dx(&self) -> f64 {
        self.end.0 - self.start.0
    }

    pub fn dy(&self) -> f64 {
        self.end.1 - self.start.1
    }

    /// Determinant of the 2x2 matrix formed by the endpoint coordinates.
    pub fn determinant(&self) -> f64 {
        self.start.0 * self.end.1 - self.start.1 * self.end.0
    }

    /// Slope of the segment. Vertical segments (including zero-length ones) report
    /// `f64::INFINITY`, a sentinel rather than an error.
    pub fn slope(&self) -> f64 {
        if self.dx() == 0.0 {
            f64::INFINITY
        } else {
            self.dy() / self.dx()
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Closest point on the segment to the given point.
    pub fn closest_point(&self, point: &Point) -> Point {
        //clamped projection, from https://stackoverflow.com/a/6853926
        let Point(x1, y1) = self.start;
        let Point(x2, y2) = self.end;
        let Point(x, y) = *point;

        let a = x - x1;
        let b = y - y1;
        let c = x2 - x1;
        let d = y2 - y1;

        let dot = a * c + b * d;
        let len_sq = c * c + d * d;
        let mut param = -1.0;
        if len_sq != 0.0 {
            param = dot / len_sq;
        }
        match param {
            p if p < 0.0 => self.start,
            p if p > 1.0 => self.end,
            p => Point(x1 + p * c, y1 + p * d),
        }
    }
}

impl Shape for Segment {
    fn area(&self) -> f64 {
        0.0
    }

    fn centroid(&self) -> Point {
        Point(
            (self.start.0 + self.end.0) / 2.0,
            (self.start.1 + self.end.1) / 2.0,
        )
    }
}

impl CollidesWith<Point> for Segment {
    fn collides_with(&self, point: &Point) -> bool {
        //parametrize the point as start + t * (dx, dy) and recover t from each axis,
        //0 standing in where the axis carries no displacement
        let (dx, dy) = (self.dx(), self.dy());
        let tx = if dx != 0.0 {
            (point.0 - self.start.0) / dx
        } else {
            0.0
        };
        let ty = if dy != 0.0 {
            (point.1 - self.start.1) / dy
        } else {
            0.0
        };

        match (tx != 0.0, ty != 0.0) {
            //no displacement on either axis
            (false, false) => *point == self.start,
            //horizontal segment
            (true, false) => point.1 == self.start.1 && (0.0..=1.0).contains(&tx),
            //vertical segment
            (false, true) => point.0 == self.start.0 && (0.0..=1.0).contains(&ty),
            //both axes must agree on the parametric position
            (true, true) => {
                (tx - ty).abs() <= PARAMETRIC_TOLERANCE && (0.0..=1.0).contains(&tx)
            }
        }
    }
}

impl CollidesWith<Segment> for Segment {
    fn collides_with(&self, other: &Segment) -> bool {
        //Cramer's rule on the 2x2 system formed by the two direction vectors:
        //https://en.wikipedia.org/wiki/Cramer%27s_rule
        let (a1, a2) = (self.dx(), self.dy());
        let (b1, b2) = (-other.dx(), -other.dy());
        let (c1, c2) = (
            other.start.0 - self.start.0,
            other.start.1 - self.start.1,
        );

        let d = a1 * b2 - a2 * b1;
        if d == 0.0 {
            //parallel or collinear, intersecting iff an endpoint lies on the other segment
            self.collides_with(&other.start)
                || self.collides_with(&other.end)
                || other.collides_with(&self.start)
                || other.collides_with(&self.end)
        } else {
            let s = (c1 * b2 - c2 * b1) / d;
            let t = (a1 * c2 - a2 * c1) / d;
            (0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&t)
        }
    }
}

impl DistanceTo<Point> for Segment {
    #[inline(always)]
    fn distance_to(&self, point: &Point) -> f64 {
        self.sq_distance_to(point).sqrt()
    }

    #[inline(always)]
    fn sq_distance_to(&self, point: &Point) -> f64 {
        let Point(xx, yy) = self.closest_point(point);
        (point.0 - xx).powi(2) + (point.1 - yy).powi(2)
    }
}

use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::GeoError;
use crate::geo_enums::GeoRelation;
use crate::geo_traits::{CollidesWith, DistanceTo, Shape};
use crate::primitives::{Point, Rect, Segment};
use crate::util::{FPA, assertions};

/// A polygon stored as its closed boundary ring: an ordered sequence of at least 3
/// vertices whose first and last entries coincide.
///
/// The ring invariants are validated once, in [`Polygon::new`]. Every query afterwards
/// assumes they hold and does not re-validate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Polygon {
    /// Closed vertex ring, first == last
    pub vertices: Vec<Point>,
    /// Bounding box
    pub bbox: Rect,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Result<Self, GeoError> {
        if vertices.len() < 3 {
            return Err(GeoError::NotEnoughPoints(vertices.len()));
        }
        if vertices.first() != vertices.last() {
            return Err(GeoError::RingNotClosed);
        }
        let bbox = Rect::from_points(&vertices);
        Ok(Polygon { vertices, bbox })
    }

    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i]
    }

    /// Boundary segment from vertex `i` to vertex `i + 1`. Valid for `i < n_vertices()`.
    pub fn edge(&self, i: usize) -> Segment {
        Segment::new(self.vertices[i], self.vertices[i + 1])
    }

    /// All boundary segments, in ring order.
    pub fn edge_iter(&self) -> impl Iterator<Item = Segment> + '_ {
        debug_assert!(assertions::ring_is_valid(&self.vertices));
        self.vertices
            .iter()
            .tuple_windows()
            .map(|(a, b)| Segment::new(*a, *b))
    }

    /// Number of distinct vertices (the closing duplicate is not counted).
    pub fn n_vertices(&self) -> usize {
        self.vertices.len() - 1
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise rings yield a positive sum, clockwise rings a negative one
    fn signed_area(&self) -> f64 {
        let mut sigma = 0.0;
        for (a, b) in self.vertices.iter().tuple_windows() {
            sigma += a.0 * b.1 - b.0 * a.1;
        }
        0.5 * sigma
    }

    /// Relation of `self` to another polygon, boundary included.
    ///
    /// Checked in order: boundary crossings first, then a single-vertex membership test,
    /// since without boundary contact containment is all-or-nothing.
    pub fn relation_to(&self, other: &Polygon) -> GeoRelation {
        let boundaries_cross = self
            .edge_iter()
            .any(|edge| other.edge_iter().any(|o| edge.collides_with(&o)));
        if boundaries_cross {
            return GeoRelation::Intersecting;
        }
        if other.collides_with(&self.vertex(0)) {
            return GeoRelation::Enclosed;
        }
        if self.collides_with(&other.vertex(0)) {
            return GeoRelation::Surrounding;
        }
        GeoRelation::Disjoint
    }
}

impl Shape for Polygon {
    fn area(&self) -> f64 {
        debug_assert!(assertions::ring_is_valid(&self.vertices));
        self.signed_area().abs()
    }

    /// Geometric center of the polygon. Zero-area rings yield NaN coordinates.
    fn centroid(&self) -> Point {
        //based on: https://en.wikipedia.org/wiki/Centroid#Of_a_polygon
        let area = self.signed_area();
        let mut c_x = 0.0;
        let mut c_y = 0.0;

        for (a, b) in self.vertices.iter().tuple_windows() {
            let w = a.0 * b.1 - b.0 * a.1;
            c_x += (a.0 + b.0) * w;
            c_y += (a.1 + b.1) * w;
        }

        (c_x / (6.0 * area), c_y / (6.0 * area)).into()
    }
}

impl CollidesWith<Point> for Polygon {
    fn collides_with(&self, point: &Point) -> bool {
        //ray casting: https://en.wikipedia.org/wiki/Point_in_polygon#Ray_casting_algorithm
        if !self.bbox.collides_with(point) {
            return false;
        }

        //the boundary belongs to the polygon
        if self.edge_iter().any(|edge| edge.collides_with(point)) {
            return true;
        }

        //horizontal ray from the point to beyond the bounding box
        let point_outside = Point(self.bbox.x_max + self.bbox.width(), point.1);
        let ray = Segment::new(*point, point_outside);

        let mut n_intersections = 0;
        for edge in self.edge_iter() {
            //When the ray passes through (or dangerously close to) a vertex the plain
            //segment test can count the same crossing twice. Count such an edge only
            //if it dips below the ray.
            let (s_x, s_y) = (FPA(edge.start.0), FPA(edge.start.1));
            let (e_x, e_y) = (FPA(edge.end.0), FPA(edge.end.1));
            let (p_x, p_y) = (FPA(point.0), FPA(point.1));

            if (s_y == p_y && s_x > p_x) || (e_y == p_y && e_x > p_x) {
                if s_y < p_y || e_y < p_y {
                    n_intersections += 1;
                }
            } else if ray.collides_with(&edge) {
                n_intersections += 1;
            }
        }
        n_intersections % 2 == 1
    }
}

impl CollidesWith<Segment> for Polygon {
    fn collides_with(&self, segment: &Segment) -> bool {
        //either the segment crosses the boundary, or it lies entirely inside;
        //an endpoint resting on the boundary is already caught by the edge tests
        self.edge_iter().any(|edge| edge.collides_with(segment))
            || self.collides_with(&segment.start)
            || self.collides_with(&segment.end)
    }
}

impl CollidesWith<Polygon> for Polygon {
    fn collides_with(&self, other: &Polygon) -> bool {
        self.relation_to(other) != GeoRelation::Disjoint
    }
}

impl DistanceTo<Point> for Polygon {
    fn distance_to(&self, point: &Point) -> f64 {
        self.sq_distance_to(point).sqrt()
    }

    /// Squared distance to the polygon, 0 when the point is inside or on the boundary.
    fn sq_distance_to(&self, point: &Point) -> f64 {
        match self.collides_with(point) {
            true => 0.0,
            false => self
                .edge_iter()
                .map(|edge| edge.sq_distance_to(point))
                .min_by_key(|&sq_d| OrderedFloat(sq_d))
                .expect("ring has no edges"),
        }
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = GeoError;

    fn try_from(vertices: Vec<Point>) -> Result<Self, Self::Error> {
        Polygon::new(vertices)
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

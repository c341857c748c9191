use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GeoError;
use crate::geo_traits::{CollidesWith, Shape};
use crate::primitives::{Point, Polygon, Segment};

/// Closed set of geometry variants, enabling uniform dispatch in mixed-type queries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "geometry", rename_all = "lowercase")]
pub enum Geometry {
    Point(Point),
    Segment(Segment),
    Polygon(Polygon),
}

impl Geometry {
    pub fn kind(&self) -> GeoKind {
        match self {
            Geometry::Point(_) => GeoKind::Point,
            Geometry::Segment(_) => GeoKind::Segment,
            Geometry::Polygon(_) => GeoKind::Polygon,
        }
    }

    /// Intersection test between two geometries, dispatched on both variants.
    ///
    /// Not every ordered pair is supported: point and segment queries do not decompose
    /// a polygon boundary and report [`GeoError::UnsupportedGeometry`] instead. The
    /// polygon-first direction covers all variants.
    pub fn intersects(&self, other: &Geometry) -> Result<bool, GeoError> {
        match (self, other) {
            (Geometry::Point(a), Geometry::Point(b)) => Ok(a == b),
            (Geometry::Point(p), Geometry::Segment(s)) => Ok(s.collides_with(p)),
            (Geometry::Segment(s), Geometry::Point(p)) => Ok(s.collides_with(p)),
            (Geometry::Segment(a), Geometry::Segment(b)) => Ok(a.collides_with(b)),
            (Geometry::Polygon(polygon), Geometry::Point(p)) => Ok(polygon.collides_with(p)),
            (Geometry::Polygon(polygon), Geometry::Segment(s)) => Ok(polygon.collides_with(s)),
            (Geometry::Polygon(a), Geometry::Polygon(b)) => Ok(a.collides_with(b)),
            (Geometry::Point(_) | Geometry::Segment(_), Geometry::Polygon(_)) => {
                Err(GeoError::UnsupportedGeometry(self.kind(), other.kind()))
            }
        }
    }
}

impl Shape for Geometry {
    fn area(&self) -> f64 {
        match self {
            Geometry::Point(p) => p.area(),
            Geometry::Segment(s) => s.area(),
            Geometry::Polygon(polygon) => polygon.area(),
        }
    }

    fn centroid(&self) -> Point {
        match self {
            Geometry::Point(p) => p.centroid(),
            Geometry::Segment(s) => s.centroid(),
            Geometry::Polygon(polygon) => polygon.centroid(),
        }
    }
}

impl From<Point> for Geometry {
    fn from(p: Point) -> Self {
        Geometry::Point(p)
    }
}

impl From<Segment> for Geometry {
    fn from(s: Segment) -> Self {
        Geometry::Segment(s)
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Geometry::Polygon(polygon)
    }
}

/// Names of the [`Geometry`] variants, used in error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeoKind {
    Point,
    Segment,
    Polygon,
}

impl fmt::Display for GeoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GeoKind::Point => "point",
            GeoKind::Segment => "segment",
            GeoKind::Polygon => "polygon",
        })
    }
}

/// Relation of a geometric entity A to another entity B.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeoRelation {
    /// A and B overlap without one containing the other
    Intersecting,
    /// A lies entirely within B
    Enclosed,
    /// B lies entirely within A
    Surrounding,
    /// A and B share no points
    Disjoint,
}

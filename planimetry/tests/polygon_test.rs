use test_case::test_case;

use planimetry::{
    CollidesWith, DistanceTo, GeoError, GeoKind, GeoRelation, Geometry, Point, Polygon, Segment,
    Shape,
};

fn ring(coords: &[(f64, f64)]) -> Polygon {
    Polygon::new(coords.iter().map(|&c| c.into()).collect()).unwrap()
}

fn unit_square() -> Polygon {
    ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)])
}

#[test]
fn too_few_vertices_is_rejected() {
    let err = Polygon::new(vec![Point(0.0, 0.0), Point(1.0, 0.0)]).unwrap_err();
    assert_eq!(err, GeoError::NotEnoughPoints(2));
}

#[test]
fn unclosed_ring_is_rejected() {
    let err =
        Polygon::new(vec![Point(0.0, 0.0), Point(1.0, 0.0), Point(1.0, 1.0)]).unwrap_err();
    assert_eq!(err, GeoError::RingNotClosed);
}

#[test_case(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)], 1.0; "unit square")]
#[test_case(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 0.0)], 6.0; "right triangle")]
#[test_case(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)], 1.0; "clockwise square")]
#[test_case(&[(0.0, 0.0), (2.0, 0.0), (0.0, 0.0)], 0.0; "degenerate sliver")]
fn shoelace_area(coords: &[(f64, f64)], expected: f64) {
    assert_eq!(ring(coords).area(), expected);
}

#[test]
fn centroid_of_unit_square() {
    assert_eq!(unit_square().centroid(), Point(0.5, 0.5));
}

#[test]
fn ring_accessors() {
    let square = unit_square();
    assert_eq!(square.n_vertices(), 4);
    assert_eq!(square.vertex(2), Point(1.0, 1.0));
    assert_eq!(square.edge_iter().count(), 4);
    //the bottom edge owns the points between its vertices
    assert!(square.edge(0).collides_with(&Point(0.5, 0.0)));
    assert_eq!(square.bbox.width(), 1.0);
    assert_eq!(square.bbox.height(), 1.0);
}

#[test_case(Point(0.5, 0.5), true; "interior")]
#[test_case(Point(0.0, 0.0), true; "vertex")]
#[test_case(Point(0.5, 0.0), true; "on edge")]
#[test_case(Point(1.5, 0.5), false; "outside right")]
#[test_case(Point(0.5, -0.1), false; "outside below")]
fn unit_square_point_membership(point: Point, expected: bool) {
    assert_eq!(unit_square().collides_with(&point), expected);
}

#[test]
fn ray_through_vertex_still_counts_correctly() {
    //the horizontal ray from (1, 1) passes through two vertices of the diamond
    let diamond = ring(&[
        (0.0, 1.0),
        (1.0, 0.0),
        (2.0, 1.0),
        (1.0, 2.0),
        (0.0, 1.0),
    ]);
    assert!(diamond.collides_with(&Point(1.0, 1.0)));
    assert!(!diamond.collides_with(&Point(1.9, 1.9)));
}

#[test]
fn concave_polygon_membership() {
    let l_shape = ring(&[
        (0.0, 0.0),
        (3.0, 0.0),
        (3.0, 1.0),
        (1.0, 1.0),
        (1.0, 3.0),
        (0.0, 3.0),
        (0.0, 0.0),
    ]);
    assert!(l_shape.collides_with(&Point(0.5, 2.5)));
    assert!(l_shape.collides_with(&Point(2.5, 0.5)));
    //inside the bounding box but in the notch
    assert!(!l_shape.collides_with(&Point(2.0, 2.0)));
    assert_eq!(l_shape.area(), 5.0);
}

#[test]
fn segment_polygon_intersection() {
    let square = unit_square();
    //chord crossing two edges
    assert!(square.collides_with(&Segment::new(Point(-1.0, 0.5), Point(2.0, 0.5))));
    //entirely inside
    assert!(square.collides_with(&Segment::new(Point(0.25, 0.25), Point(0.75, 0.75))));
    //entirely outside
    assert!(!square.collides_with(&Segment::new(Point(2.0, 2.0), Point(3.0, 2.0))));
    //touching a vertex from the outside
    assert!(square.collides_with(&Segment::new(Point(1.0, 1.0), Point(2.0, 2.0))));
}

#[test]
fn polygon_polygon_relations() {
    let outer = ring(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (0.0, 10.0),
        (0.0, 0.0),
    ]);
    let inner = ring(&[(2.0, 2.0), (4.0, 2.0), (4.0, 4.0), (2.0, 4.0), (2.0, 2.0)]);
    let overlapping = ring(&[
        (8.0, 8.0),
        (12.0, 8.0),
        (12.0, 12.0),
        (8.0, 12.0),
        (8.0, 8.0),
    ]);
    let far = ring(&[
        (20.0, 20.0),
        (21.0, 20.0),
        (21.0, 21.0),
        (20.0, 21.0),
        (20.0, 20.0),
    ]);

    assert_eq!(inner.relation_to(&outer), GeoRelation::Enclosed);
    assert_eq!(outer.relation_to(&inner), GeoRelation::Surrounding);
    assert_eq!(outer.relation_to(&overlapping), GeoRelation::Intersecting);
    assert_eq!(outer.relation_to(&far), GeoRelation::Disjoint);

    assert!(outer.collides_with(&inner));
    assert!(outer.collides_with(&overlapping));
    assert!(!outer.collides_with(&far));
}

#[test]
fn polygon_distance_to_point() {
    let square = unit_square();
    assert_eq!(square.distance_to(&Point(0.5, 0.5)), 0.0);
    assert_eq!(square.distance_to(&Point(0.5, 3.0)), 2.0);
    assert_eq!(square.distance_to(&Point(4.0, 1.0)), 3.0);
}

#[test]
fn geometry_dispatch_supported_pairs() {
    let p: Geometry = Point(0.5, 0.5).into();
    let q: Geometry = Point(0.5, 0.5).into();
    let s: Geometry = Segment::new(Point(0.0, 0.0), Point(1.0, 1.0)).into();
    let square: Geometry = unit_square().into();

    assert_eq!(p.intersects(&q), Ok(true));
    assert_eq!(p.intersects(&s), Ok(true));
    assert_eq!(s.intersects(&p), Ok(true));
    assert_eq!(s.intersects(&q), Ok(true));
    assert_eq!(square.intersects(&p), Ok(true));
    assert_eq!(square.intersects(&s), Ok(true));
    assert_eq!(square.intersects(&square.clone()), Ok(true));

    let elsewhere: Geometry = Point(7.0, 7.0).into();
    assert_eq!(p.intersects(&elsewhere), Ok(false));
    assert_eq!(square.intersects(&elsewhere), Ok(false));
}

#[test]
fn geometry_dispatch_unsupported_pairs() {
    let p: Geometry = Point(0.5, 0.5).into();
    let s: Geometry = Segment::new(Point(0.0, 0.0), Point(1.0, 1.0)).into();
    let square: Geometry = unit_square().into();

    assert_eq!(
        p.intersects(&square),
        Err(GeoError::UnsupportedGeometry(
            GeoKind::Point,
            GeoKind::Polygon
        ))
    );
    assert_eq!(
        s.intersects(&square),
        Err(GeoError::UnsupportedGeometry(
            GeoKind::Segment,
            GeoKind::Polygon
        ))
    );
}

#[test]
fn geometry_area_dispatch() {
    assert_eq!(Geometry::from(Point(3.0, 4.0)).area(), 0.0);
    assert_eq!(
        Geometry::from(Segment::new(Point(0.0, 0.0), Point(5.0, 0.0))).area(),
        0.0
    );
    assert_eq!(Geometry::from(unit_square()).area(), 1.0);
    assert_eq!(Geometry::from(unit_square()).centroid(), Point(0.5, 0.5));
}

#[test]
fn error_messages_name_the_variants() {
    let err = GeoError::UnsupportedGeometry(GeoKind::Segment, GeoKind::Polygon);
    assert_eq!(
        err.to_string(),
        "intersection of segment with polygon is not supported"
    );
}

#[test]
fn polygon_serde_round_trip_revalidates() {
    let square = unit_square();
    let json = serde_json::to_string(&square).unwrap();
    let back: Polygon = serde_json::from_str(&json).unwrap();
    assert_eq!(back, square);

    //deserialization funnels through the validating constructor
    let unclosed = "[[0.0,0.0],[1.0,0.0],[1.0,1.0]]";
    assert!(serde_json::from_str::<Polygon>(unclosed).is_err());
}

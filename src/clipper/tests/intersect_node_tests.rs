use crate::clipper::intersect_node::IntersectNode;
use crate::clipper::intersections::{get_closest_point_on_segment, get_segment_intersect_pt};
use crate::geometry::point::Point;

#[test]
fn test_sweep_order() {
    let mut nodes = vec![
        IntersectNode::new(0, 1, Point::new(5, 3)),
        IntersectNode::new(2, 3, Point::new(1, 9)),
        IntersectNode::new(4, 5, Point::new(-2, 3)),
        IntersectNode::new(6, 7, Point::new(0, 9)),
    ];
    nodes.sort_by(IntersectNode::sweep_order);

    let order: Vec<usize> = nodes.iter().map(|node| node.edge1).collect();
    assert_eq!(order, vec![6, 2, 4, 0]);
}

#[test]
fn test_segment_intersection() {
    let pt = get_segment_intersect_pt(
        Point::new(0, 0),
        Point::new(10, 10),
        Point::new(0, 10),
        Point::new(10, 0),
    );
    assert_eq!(pt, Some(Point::new(5, 5)));

    let parallel = get_segment_intersect_pt(
        Point::new(0, 0),
        Point::new(10, 0),
        Point::new(0, 5),
        Point::new(10, 5),
    );
    assert_eq!(parallel, None);

    // Lines meet beyond the first segment, so the result clamps to its end.
    let clamped = get_segment_intersect_pt(
        Point::new(0, 0),
        Point::new(2, 2),
        Point::new(0, 10),
        Point::new(10, 0),
    );
    assert_eq!(clamped, Some(Point::new(2, 2)));
}

#[test]
fn test_closest_point_on_segment() {
    let seg1 = Point::new(0, 0);
    let seg2 = Point::new(10, 0);
    assert_eq!(get_closest_point_on_segment(Point::new(4, 7), seg1, seg2), Point::new(4, 0));
    assert_eq!(get_closest_point_on_segment(Point::new(-5, 2), seg1, seg2), seg1);
    assert_eq!(get_closest_point_on_segment(Point::new(15, -2), seg1, seg2), seg2);
    assert_eq!(get_closest_point_on_segment(Point::new(3, 3), seg1, seg1), seg1);
}

use crate::clipper::constants::{HORIZONTAL_LEFT, HORIZONTAL_RIGHT};
use crate::clipper::enums::{ClipType, PolyFillType, PolyType};
use crate::clipper::t_edge::{get_dx, TEdge};
use crate::geometry::point::Point;

fn edge(poly_type: PolyType, wind_cnt: i32, wind_cnt2: i32) -> TEdge {
    let mut result = TEdge::new(Point::new(0, 10), Point::new(10, 0), 0, 1, 0, poly_type, false);
    result.wind_cnt = wind_cnt;
    result.wind_cnt2 = wind_cnt2;
    result
}

#[test]
fn test_dx_and_top_x() {
    let e = TEdge::new(Point::new(0, 10), Point::new(10, 0), 0, 1, 0, PolyType::Subject, false);
    assert_eq!(e.dx, -1.0);
    assert_eq!(e.curr_x, 0);
    assert_eq!(e.top_x(10), 0);
    assert_eq!(e.top_x(5), 5);
    assert_eq!(e.top_x(0), 10);
    assert!(!e.is_horizontal());
    assert!(!e.is_hot());

    let steep = TEdge::new(Point::new(0, 3), Point::new(1, 0), 0, 1, 0, PolyType::Subject, false);
    assert_eq!(steep.top_x(2), 0);
    assert_eq!(steep.top_x(1), 1);
}

#[test]
fn test_horizontal_sentinels() {
    assert_eq!(get_dx(Point::new(0, 0), Point::new(10, 0)), HORIZONTAL_RIGHT);
    assert_eq!(get_dx(Point::new(10, 0), Point::new(0, 0)), HORIZONTAL_LEFT);

    let mut e = TEdge::new(Point::new(0, 4), Point::new(8, 4), 0, -1, 0, PolyType::Clip, false);
    assert!(e.is_horizontal());
    assert!(e.is_heading_right_horz());

    e.top = Point::new(-8, 4);
    e.update_dx();
    assert!(e.is_heading_left_horz());
}

#[test]
fn test_contributing_closed() {
    let outside_clip = edge(PolyType::Subject, 1, 0);
    let inside_clip = edge(PolyType::Subject, 1, 1);

    assert!(outside_clip.is_contributing_closed(ClipType::Union, PolyFillType::NonZero));
    assert!(!outside_clip.is_contributing_closed(ClipType::Intersection, PolyFillType::NonZero));
    assert!(inside_clip.is_contributing_closed(ClipType::Intersection, PolyFillType::NonZero));
    assert!(!inside_clip.is_contributing_closed(ClipType::Union, PolyFillType::NonZero));
    assert!(outside_clip.is_contributing_closed(ClipType::Difference, PolyFillType::NonZero));
    assert!(inside_clip.is_contributing_closed(ClipType::Xor, PolyFillType::EvenOdd));

    let clip_in_subject = edge(PolyType::Clip, 1, 1);
    assert!(clip_in_subject.is_contributing_closed(ClipType::Difference, PolyFillType::NonZero));

    let nested = edge(PolyType::Subject, 2, 0);
    assert!(!nested.is_contributing_closed(ClipType::Union, PolyFillType::NonZero));
    assert!(nested.is_contributing_closed(ClipType::Union, PolyFillType::EvenOdd));

    let negative = edge(PolyType::Subject, -1, 0);
    assert!(!negative.is_contributing_closed(ClipType::Union, PolyFillType::Positive));
    assert!(negative.is_contributing_closed(ClipType::Union, PolyFillType::Negative));
}

#[test]
fn test_contributing_open() {
    let inside_clip = edge(PolyType::Subject, 0, 1);
    let outside = edge(PolyType::Subject, 0, 0);

    assert!(inside_clip.is_contributing_open(ClipType::Intersection, PolyFillType::NonZero));
    assert!(!outside.is_contributing_open(ClipType::Intersection, PolyFillType::NonZero));
    assert!(outside.is_contributing_open(ClipType::Difference, PolyFillType::NonZero));
    assert!(!inside_clip.is_contributing_open(ClipType::Difference, PolyFillType::NonZero));
    assert!(outside.is_contributing_open(ClipType::Union, PolyFillType::NonZero));
}

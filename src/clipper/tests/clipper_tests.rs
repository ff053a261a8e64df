use crate::clipper::clipper::{Clipper, ClipperOptions};
use crate::clipper::enums::{ClipType, PolyFillType, PolyType};
use crate::clipper::utils::area;
use crate::error::{ClipperError, ConfigurationError};
use crate::geometry::point::Point;
use crate::geometry::Paths64;

use super::{rect, total_area};

fn overlapping_squares() -> Clipper {
    let mut clipper = Clipper::new();
    clipper
        .add_path(&rect(0, 0, 10, 10), PolyType::Subject, false)
        .unwrap();
    clipper
        .add_path(&rect(5, 5, 15, 15), PolyType::Clip, false)
        .unwrap();
    clipper
}

fn closed(clipper: &mut Clipper, clip_type: ClipType, fill_type: PolyFillType) -> Paths64 {
    clipper.execute(clip_type, fill_type).unwrap().closed
}

#[test]
fn test_overlapping_squares() {
    let mut clipper = overlapping_squares();

    let intersection = closed(&mut clipper, ClipType::Intersection, PolyFillType::NonZero);
    assert_eq!(intersection.len(), 1);
    assert_eq!(intersection[0].len(), 4);
    assert_eq!(area(&intersection[0]), 25.0);

    let union = closed(&mut clipper, ClipType::Union, PolyFillType::NonZero);
    assert_eq!(union.len(), 1);
    assert_eq!(union[0].len(), 8);
    assert_eq!(area(&union[0]), 175.0);

    let difference = closed(&mut clipper, ClipType::Difference, PolyFillType::NonZero);
    assert_eq!(difference.len(), 1);
    assert_eq!(area(&difference[0]), 75.0);

    let xor = closed(&mut clipper, ClipType::Xor, PolyFillType::NonZero);
    assert_eq!(total_area(&xor), 150.0);
}

#[test]
fn test_outputs_stay_inside_input_bounds() {
    let mut clipper = overlapping_squares();
    let bounds = clipper.get_bounds().unwrap();

    for clip_type in [ClipType::Intersection, ClipType::Union, ClipType::Difference, ClipType::Xor] {
        for path in closed(&mut clipper, clip_type, PolyFillType::EvenOdd) {
            assert!(path.len() >= 3);
            for pt in path {
                assert!(pt.x >= bounds.left && pt.x <= bounds.right);
                assert!(pt.y >= bounds.top && pt.y <= bounds.bottom);
            }
        }
    }
}

#[test]
fn test_reverse_solution_flips_orientation() {
    let mut clipper = overlapping_squares();
    clipper.set_reverse_solution(true);
    assert!(clipper.options().reverse_solution);

    let union = closed(&mut clipper, ClipType::Union, PolyFillType::NonZero);
    assert_eq!(area(&union[0]), -175.0);
}

#[test]
fn test_difference_of_contained_square_makes_hole() {
    let mut clipper = Clipper::new();
    clipper
        .add_path(&rect(0, 0, 20, 20), PolyType::Subject, false)
        .unwrap();
    clipper
        .add_path(&rect(5, 5, 15, 15), PolyType::Clip, false)
        .unwrap();

    let flat = closed(&mut clipper, ClipType::Difference, PolyFillType::NonZero);
    assert_eq!(flat.len(), 2);
    assert_eq!(total_area(&flat), 300.0);

    let (tree, open) = clipper
        .execute_tree(ClipType::Difference, PolyFillType::NonZero)
        .unwrap();
    assert!(open.is_empty());
    assert_eq!(tree.count(), 1);

    let outer = &tree.children()[0];
    assert!(!outer.is_hole());
    assert_eq!(area(outer.polygon()), 400.0);
    assert_eq!(outer.count(), 1);
    assert!(outer.children()[0].is_hole());
    assert_eq!(area(outer.children()[0].polygon()), -100.0);
}

#[test]
fn test_union_of_disjoint_squares() {
    let mut clipper = Clipper::new();
    let added = clipper
        .add_paths(
            &[rect(0, 0, 10, 10), rect(20, 0, 30, 10), rect(0, 20, 10, 30)],
            PolyType::Subject,
            false,
        )
        .unwrap();
    assert_eq!(added, 3);

    let union = closed(&mut clipper, ClipType::Union, PolyFillType::NonZero);
    assert_eq!(union.len(), 3);
    assert!(union.iter().all(|path| area(path) == 100.0));

    let (tree, _) = clipper
        .execute_tree(ClipType::Union, PolyFillType::NonZero)
        .unwrap();
    assert_eq!(tree.count(), 3);
    assert_eq!(tree.total(), 3);
}

#[test]
fn test_fill_rule_decides_self_overlap() {
    let mut clipper = Clipper::new();
    clipper
        .add_paths(&[rect(0, 0, 10, 10), rect(5, 5, 15, 15)], PolyType::Subject, false)
        .unwrap();

    let non_zero = closed(&mut clipper, ClipType::Union, PolyFillType::NonZero);
    assert_eq!(total_area(&non_zero), 175.0);

    let even_odd = closed(&mut clipper, ClipType::Union, PolyFillType::EvenOdd);
    assert_eq!(total_area(&even_odd), 150.0);

    let positive = closed(&mut clipper, ClipType::Union, PolyFillType::Positive);
    assert_eq!(total_area(&positive), 175.0);

    let negative = closed(&mut clipper, ClipType::Union, PolyFillType::Negative);
    assert!(negative.is_empty());
}

#[test]
fn test_triangle_crossings() {
    let mut clipper = Clipper::new();
    let subject = vec![Point::new(0, 0), Point::new(20, 0), Point::new(10, 20)];
    let clip = vec![Point::new(0, 10), Point::new(20, 10), Point::new(10, -10)];
    clipper.add_path(&subject, PolyType::Subject, false).unwrap();
    clipper.add_path(&clip, PolyType::Clip, false).unwrap();

    let intersection = closed(&mut clipper, ClipType::Intersection, PolyFillType::NonZero);
    let union = closed(&mut clipper, ClipType::Union, PolyFillType::NonZero);
    let xor = closed(&mut clipper, ClipType::Xor, PolyFillType::NonZero);

    let a = area(&subject).abs();
    let b = area(&clip).abs();
    let inter = total_area(&intersection);
    assert!(inter > 0.0 && inter < a.min(b));
    assert!((total_area(&union) - (a + b - inter)).abs() < 5.0);
    assert!((total_area(&xor) - (a + b - 2.0 * inter)).abs() < 5.0);
}

#[test]
fn test_open_subject_is_clipped() {
    let mut clipper = Clipper::new();
    let line = vec![Point::new(-2, 1), Point::new(12, 8)];
    clipper.add_path(&line, PolyType::Subject, true).unwrap();
    clipper
        .add_path(&rect(0, 0, 10, 10), PolyType::Clip, false)
        .unwrap();

    let solution = clipper
        .execute(ClipType::Intersection, PolyFillType::NonZero)
        .unwrap();
    assert!(solution.closed.is_empty());
    assert_eq!(solution.open.len(), 1);
    for pt in &solution.open[0] {
        assert!(pt.x >= 0 && pt.x <= 10);
        assert!(pt.y >= 0 && pt.y <= 10);
    }

    let outside = clipper
        .execute(ClipType::Difference, PolyFillType::NonZero)
        .unwrap();
    assert_eq!(outside.open.len(), 2);
}

#[test]
fn test_degenerate_input_is_dropped() {
    let mut clipper = Clipper::new();
    let flat = vec![Point::new(0, 0), Point::new(5, 0), Point::new(10, 0)];
    assert_eq!(clipper.add_path(&flat, PolyType::Subject, false), Ok(false));
    assert_eq!(clipper.add_path(&[], PolyType::Clip, false), Ok(false));
    assert!(clipper.get_bounds().is_none());

    let solution = clipper
        .execute(ClipType::Union, PolyFillType::NonZero)
        .unwrap();
    assert!(solution.closed.is_empty());
    assert!(solution.open.is_empty());
}

#[test]
fn test_invalid_input_is_rejected() {
    let mut clipper = Clipper::new();
    let line = vec![Point::new(0, 0), Point::new(10, 10)];
    assert_eq!(
        clipper.add_path(&line, PolyType::Clip, true),
        Err(ClipperError::Configuration(ConfigurationError::OpenClipPath))
    );

    let huge = vec![Point::new(0, 0), Point::new(i64::MAX, 0), Point::new(0, 10)];
    let result = clipper.add_paths(&[rect(0, 0, 10, 10), huge], PolyType::Subject, false);
    assert!(matches!(
        result,
        Err(ClipperError::Configuration(ConfigurationError::CoordinateOutOfRange { .. }))
    ));
    assert!(clipper.get_bounds().is_none());
}

#[test]
fn test_clear_and_reuse() {
    let mut clipper = overlapping_squares();
    let first = closed(&mut clipper, ClipType::Union, PolyFillType::NonZero);
    let second = closed(&mut clipper, ClipType::Union, PolyFillType::NonZero);
    assert_eq!(first, second);

    clipper.clear();
    assert!(closed(&mut clipper, ClipType::Union, PolyFillType::NonZero).is_empty());
}

#[test]
fn test_preserve_collinear_keeps_touching_vertices() {
    let mut clipper = Clipper::with_options(ClipperOptions {
        preserve_collinear: true,
        ..ClipperOptions::default()
    });
    let with_midpoint = vec![
        Point::new(0, 0),
        Point::new(5, 0),
        Point::new(10, 0),
        Point::new(10, 10),
        Point::new(0, 10),
    ];
    clipper.add_path(&with_midpoint, PolyType::Subject, false).unwrap();
    let kept = closed(&mut clipper, ClipType::Union, PolyFillType::NonZero);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].len(), 5);

    let mut clipper = Clipper::new();
    clipper.add_path(&with_midpoint, PolyType::Subject, false).unwrap();
    let cleaned = closed(&mut clipper, ClipType::Union, PolyFillType::NonZero);
    assert_eq!(cleaned[0].len(), 4);
}

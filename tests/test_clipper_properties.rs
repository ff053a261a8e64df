use approx::assert_relative_eq;
use wasm_clipper::clipper::utils::{area, orientation, path1_inside_path2, reverse_paths};
use wasm_clipper::clipper::{
    Clipper, ClipperOffset, ClipType, EndType, JoinType, PolyFillType, PolyType,
};
use wasm_clipper::geometry::point::Point;
use wasm_clipper::geometry::{Path64, Paths64};

fn path(coords: &[(i64, i64)]) -> Path64 {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn total_area(paths: &[Path64]) -> f64 {
    paths.iter().map(|p| area(p)).sum()
}

/// Rectilinear shapes, so every crossing lands on the integer grid.
fn shapes() -> Vec<Path64> {
    vec![
        path(&[(0, 0), (40, 0), (40, 40), (0, 40)]),
        path(&[(20, 10), (60, 10), (60, 30), (20, 30)]),
        path(&[(0, 0), (30, 0), (30, 10), (10, 10), (10, 30), (0, 30)]),
        path(&[(5, 5), (35, 5), (35, 35), (25, 35), (25, 15), (15, 15), (15, 35), (5, 35)]),
        path(&[(100, 100), (110, 100), (110, 110), (100, 110)]),
    ]
}

fn run(subject: &Path64, clip: &Path64, clip_type: ClipType) -> Paths64 {
    let mut clipper = Clipper::new();
    clipper.add_path(subject, PolyType::Subject, false).unwrap();
    clipper.add_path(clip, PolyType::Clip, false).unwrap();
    clipper.execute(clip_type, PolyFillType::NonZero).unwrap().closed
}

#[test]
fn test_area_laws_hold_for_every_pair() {
    let shapes = shapes();
    for a in &shapes {
        for b in &shapes {
            let area_a = area(a);
            let area_b = area(b);
            let inter = total_area(&run(a, b, ClipType::Intersection));
            let union = total_area(&run(a, b, ClipType::Union));
            let diff = total_area(&run(a, b, ClipType::Difference));
            let xor = total_area(&run(a, b, ClipType::Xor));

            assert_eq!(union + inter, area_a + area_b);
            assert_eq!(diff, area_a - inter);
            assert_eq!(xor, union - inter);
            assert_eq!(inter, total_area(&run(b, a, ClipType::Intersection)));
            assert_eq!(union, total_area(&run(b, a, ClipType::Union)));
        }
    }
}

#[test]
fn test_intersection_lies_inside_both_operands() {
    let shapes = shapes();
    let result = run(&shapes[0], &shapes[3], ClipType::Intersection);
    assert!(!result.is_empty());
    for contour in &result {
        if area(contour) > 0.0 {
            assert!(path1_inside_path2(contour, &shapes[0]));
            assert!(path1_inside_path2(contour, &shapes[3]));
        }
    }
}

#[test]
fn test_union_with_itself_is_identity() {
    for shape in shapes() {
        let result = run(&shape, &shape, ClipType::Union);
        assert_eq!(result.len(), 1);
        assert_eq!(area(&result[0]), area(&shape));

        assert!(run(&shape, &shape, ClipType::Difference).is_empty());
        assert!(run(&shape, &shape, ClipType::Xor).is_empty());
    }
}

#[test]
fn test_reverse_solution_matches_reversed_paths() {
    let shapes = shapes();
    let mut forward = run(&shapes[0], &shapes[1], ClipType::Union);
    assert!(forward.iter().all(|contour| orientation(contour)));

    let mut clipper = Clipper::new();
    clipper.set_reverse_solution(true);
    clipper.add_path(&shapes[0], PolyType::Subject, false).unwrap();
    clipper.add_path(&shapes[1], PolyType::Clip, false).unwrap();
    let reversed = clipper
        .execute(ClipType::Union, PolyFillType::NonZero)
        .unwrap()
        .closed;

    reverse_paths(&mut forward);
    assert_eq!(total_area(&forward), total_area(&reversed));
    assert!(reversed.iter().all(|contour| !orientation(contour)));
}

#[test]
fn test_tree_nests_islands_in_holes() {
    let mut clipper = Clipper::new();
    clipper
        .add_paths(
            &[
                path(&[(0, 0), (100, 0), (100, 100), (0, 100)]),
                path(&[(40, 40), (60, 40), (60, 60), (40, 60)]),
            ],
            PolyType::Subject,
            false,
        )
        .unwrap();
    clipper
        .add_path(&path(&[(20, 20), (80, 20), (80, 80), (20, 80)]), PolyType::Clip, false)
        .unwrap();

    let (tree, _) = clipper
        .execute_tree(ClipType::Xor, PolyFillType::EvenOdd)
        .unwrap();
    assert_eq!(tree.count(), 1);

    let outer = &tree.children()[0];
    assert_eq!(area(outer.polygon()), 10000.0);
    assert_eq!(outer.count(), 1);

    let hole = &outer.children()[0];
    assert!(hole.is_hole());
    assert_eq!(area(hole.polygon()), -3600.0);
    assert_eq!(hole.count(), 1);
    assert!(!hole.children()[0].is_hole());
    assert_eq!(area(hole.children()[0].polygon()), 400.0);

    assert_eq!(total_area(&tree.to_paths()), 10000.0 - 3600.0 + 400.0);
}

#[test]
fn test_offset_round_trip() {
    let square = path(&[(0, 0), (200, 0), (200, 200), (0, 200)]);

    let mut offset = ClipperOffset::new();
    offset.add_path(&square, JoinType::Miter, EndType::Polygon);
    let grown = offset.execute(15.0).unwrap();

    let mut back = ClipperOffset::new();
    back.add_paths(&grown, JoinType::Miter, EndType::Polygon);
    let restored = back.execute(-15.0).unwrap();
    assert_eq!(restored.len(), 1);
    assert_eq!(area(&restored[0]), area(&square));

    let mut rounded = ClipperOffset::new();
    rounded.add_path(&square, JoinType::Round, EndType::Polygon);
    let shrunk = rounded.execute(-15.0).unwrap();
    let mut regrow = ClipperOffset::new();
    regrow.add_paths(&shrunk, JoinType::Round, EndType::Polygon);
    let regrown = regrow.execute(15.0).unwrap();
    assert_eq!(regrown.len(), 1);
    assert_relative_eq!(area(&regrown[0]), area(&square), max_relative = 0.01);
}

#[test]
fn test_offset_output_is_clean_union() {
    let mut offset = ClipperOffset::new();
    offset.add_paths(
        &[
            path(&[(0, 0), (50, 0), (50, 50), (0, 50)]),
            path(&[(60, 0), (110, 0), (110, 50), (60, 50)]),
        ],
        JoinType::Miter,
        EndType::Polygon,
    );

    // Gap of 10 closes once each side grows by more than 5.
    let merged = offset.execute(6.0).unwrap();
    assert_eq!(merged.len(), 1);
    assert_eq!(area(&merged[0]), 122.0 * 62.0);

    let apart = offset.execute(4.0).unwrap();
    assert_eq!(apart.len(), 2);
}

use crate::geometry::point::Point;
use crate::geometry::Path64;
use crate::utils::math::cycle_index;
use crate::utils::number::Number;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointInPolygonResult {
    Inside,
    Outside,
    On,
}

/// Signed shoelace area. Contours produced by the engine as outers are positive.
pub fn area<T: Number>(path: &[Point<T>]) -> f64 {
    let count = path.len();
    if count < 3 {
        return 0.0;
    }

    let mut result = 0.0;
    for i in 0..count {
        let curr = path[i].to_f64();
        let next = path[cycle_index(i, count, 1)].to_f64();
        result += curr.x * next.y - next.x * curr.y;
    }

    result * 0.5
}

pub fn orientation<T: Number>(path: &[Point<T>]) -> bool {
    area(path) >= 0.0
}

/// Turn of `p1 -> p2 -> p3`; zero when collinear.
#[inline(always)]
pub fn cross_product(p1: Point<i64>, p2: Point<i64>, p3: Point<i64>) -> f64 {
    (p2.x - p1.x) as f64 * (p3.y - p2.y) as f64 - (p2.y - p1.y) as f64 * (p3.x - p2.x) as f64
}

#[inline(always)]
pub fn dot_product(p1: Point<i64>, p2: Point<i64>, p3: Point<i64>) -> f64 {
    (p2.x - p1.x) as f64 * (p3.x - p2.x) as f64 + (p2.y - p1.y) as f64 * (p3.y - p2.y) as f64
}

fn exact_cross(a: Point<i64>, b: Point<i64>, pt: Point<i64>) -> i128 {
    (b.x as i128 - a.x as i128) * (pt.y as i128 - a.y as i128)
        - (b.y as i128 - a.y as i128) * (pt.x as i128 - a.x as i128)
}

pub fn point_in_polygon(pt: Point<i64>, polygon: &[Point<i64>]) -> PointInPolygonResult {
    let count = polygon.len();
    if count < 3 {
        return PointInPolygonResult::Outside;
    }

    let mut is_inside = false;
    for i in 0..count {
        let a = polygon[i];
        let b = polygon[cycle_index(i, count, 1)];
        let cross = exact_cross(a, b, pt);

        if cross == 0
            && pt.x >= a.x.min(b.x)
            && pt.x <= a.x.max(b.x)
            && pt.y >= a.y.min(b.y)
            && pt.y <= a.y.max(b.y)
        {
            return PointInPolygonResult::On;
        }

        if (a.y > pt.y) != (b.y > pt.y) && (cross > 0) == (b.y > a.y) {
            is_inside = !is_inside;
        }
    }

    if is_inside {
        PointInPolygonResult::Inside
    } else {
        PointInPolygonResult::Outside
    }
}

/// Containment test for contours that may touch but never cross. Any vertex
/// of `inner` strictly inside or outside `outer` decides. When every vertex
/// lies on `outer`, edge midpoints are tested in doubled coordinates so they
/// stay on the integer grid.
pub fn path1_inside_path2(inner: &[Point<i64>], outer: &[Point<i64>]) -> bool {
    let mut outside_count: i32 = 0;
    for &pt in inner {
        match point_in_polygon(pt, outer) {
            PointInPolygonResult::Outside => outside_count += 1,
            PointInPolygonResult::Inside => outside_count -= 1,
            PointInPolygonResult::On => {}
        }
        if outside_count.abs() > 1 {
            return outside_count < 0;
        }
    }
    if outside_count != 0 {
        return outside_count < 0;
    }

    let doubled: Path64 = outer.iter().map(|pt| pt.scale_up(2)).collect();
    let count = inner.len();
    for i in 0..count {
        let mid = inner[i] + inner[cycle_index(i, count, 1)];
        match point_in_polygon(mid, &doubled) {
            PointInPolygonResult::Inside => return true,
            PointInPolygonResult::Outside => return false,
            PointInPolygonResult::On => {}
        }
    }

    // Coincident boundaries.
    true
}

pub fn reverse_paths<T: Number>(paths: &mut [Vec<Point<T>>]) {
    for path in paths.iter_mut() {
        path.reverse();
    }
}

/// Removes consecutive duplicates (and the closing duplicate when `is_open`
/// is false), then collinear vertices of closed paths. With
/// `preserve_collinear` only 180 degree spikes are dropped. Returns `None`
/// when fewer than 3 points (2 for open paths) survive.
pub fn clean_path(path: &[Point<i64>], is_open: bool, preserve_collinear: bool) -> Option<Path64> {
    let mut result: Path64 = Vec::with_capacity(path.len());
    for &pt in path {
        if result.last() != Some(&pt) {
            result.push(pt);
        }
    }

    if is_open {
        return if result.len() < 2 { None } else { Some(result) };
    }

    while result.len() > 1 && result.first() == result.last() {
        result.pop();
    }

    let mut point_count = result.len();
    let mut marked: Vec<bool> = vec![false; point_count];
    let mut curr_index = 0;

    while point_count > 2 && !marked[curr_index] {
        let prev_index = cycle_index(curr_index, point_count, -1);
        let next_index = cycle_index(curr_index, point_count, 1);
        let prev = result[prev_index];
        let curr = result[curr_index];
        let next = result[next_index];

        let is_redundant = prev == curr
            || (cross_product(prev, curr, next) == 0.0
                && (!preserve_collinear || curr == next || dot_product(prev, curr, next) < 0.0));

        if is_redundant {
            result.remove(curr_index);
            marked.remove(curr_index);
            point_count -= 1;
            curr_index = if prev_index < curr_index {
                prev_index
            } else {
                prev_index - 1
            };
            marked[curr_index] = false;
        } else {
            marked[curr_index] = true;
            curr_index = cycle_index(curr_index, point_count, 1);
        }
    }

    if point_count < 3 {
        None
    } else {
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: i64) -> Path64 {
        vec![
            Point::new(0, 0),
            Point::new(size, 0),
            Point::new(size, size),
            Point::new(0, size),
        ]
    }

    #[test]
    fn test_area_sign_follows_winding() {
        let mut path = square(10);
        assert_eq!(area(&path), 100.0);
        assert!(orientation(&path));
        path.reverse();
        assert_eq!(area(&path), -100.0);
        assert!(!orientation(&path));
    }

    #[test]
    fn test_point_in_polygon() {
        let path = square(10);
        assert_eq!(point_in_polygon(Point::new(5, 5), &path), PointInPolygonResult::Inside);
        assert_eq!(point_in_polygon(Point::new(15, 5), &path), PointInPolygonResult::Outside);
        assert_eq!(point_in_polygon(Point::new(10, 5), &path), PointInPolygonResult::On);
        assert_eq!(point_in_polygon(Point::new(0, 0), &path), PointInPolygonResult::On);
        assert_eq!(point_in_polygon(Point::new(-1, 0), &path), PointInPolygonResult::Outside);
    }

    #[test]
    fn test_path1_inside_path2() {
        let outer = square(10);
        let inner = vec![Point::new(2, 2), Point::new(4, 2), Point::new(4, 4)];
        assert!(path1_inside_path2(&inner, &outer));
        assert!(!path1_inside_path2(&outer, &inner));
    }

    #[test]
    fn test_clean_path_drops_collinear_and_spikes() {
        let path = vec![
            Point::new(0, 0),
            Point::new(5, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(10, 10),
            Point::new(0, 10),
            Point::new(0, 0),
        ];
        assert_eq!(clean_path(&path, false, false), Some(square(10)));

        let kept = clean_path(&path, false, true).unwrap_or_default();
        assert_eq!(kept.len(), 5);

        let flat = vec![Point::new(0, 0), Point::new(5, 0), Point::new(10, 0)];
        assert_eq!(clean_path(&flat, false, false), None);
        assert_eq!(clean_path(&flat, true, false), Some(flat.clone()));
    }
}

mod clipper_tests;
mod intersect_node_tests;
mod scanbeam_tests;
mod t_edge_tests;

use crate::geometry::point::Point;
use crate::geometry::Path64;

pub(crate) fn rect(left: i64, top: i64, right: i64, bottom: i64) -> Path64 {
    vec![
        Point::new(left, top),
        Point::new(right, top),
        Point::new(right, bottom),
        Point::new(left, bottom),
    ]
}

pub(crate) fn total_area(paths: &[Path64]) -> f64 {
    paths.iter().map(|path| crate::clipper::utils::area(path)).sum()
}

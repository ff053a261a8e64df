use crate::geometry::point::Point;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectNode {
    pub edge1: usize,
    pub edge2: usize,
    pub pt: Point<i64>,
}

impl IntersectNode {
    pub fn new(edge1: usize, edge2: usize, pt: Point<i64>) -> Self {
        Self { edge1, edge2, pt }
    }

    /// Bottom-up processing order: larger Y first, then smaller X.
    pub fn sweep_order(&self, other: &Self) -> Ordering {
        other.pt.y.cmp(&self.pt.y).then(self.pt.x.cmp(&other.pt.x))
    }
}

use crate::geometry::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutPt {
    pub pt: Point<i64>,
    pub next: usize,
    pub prev: usize,
}

impl OutPt {
    /// A ring of one: links point back at `index` itself.
    pub fn single(pt: Point<i64>, index: usize) -> Self {
        Self {
            pt,
            next: index,
            prev: index,
        }
    }
}

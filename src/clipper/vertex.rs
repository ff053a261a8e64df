use crate::clipper::enums::PolyType;
use crate::clipper::local_minima::LocalMinimaList;
use crate::geometry::point::Point;
use std::ops::BitOr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VertexFlags(u8);

impl VertexFlags {
    pub const NONE: Self = Self(0);
    pub const OPEN_START: Self = Self(1);
    pub const OPEN_END: Self = Self(2);
    pub const LOCAL_MAX: Self = Self(4);
    pub const LOCAL_MIN: Self = Self(8);

    #[inline(always)]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[inline(always)]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl BitOr for VertexFlags {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

/// One input point. `next`/`prev` always form a ring, open paths included;
/// the closing link of an open path is never walked because its ends are
/// flagged as minima or maxima.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex {
    pub pt: Point<i64>,
    pub next: usize,
    pub prev: usize,
    pub flags: VertexFlags,
}

/// Appends `path` to the vertex arena and records its local minima.
///
/// Consecutive duplicates are stripped, as is a closing point equal to the
/// first one on closed paths. Returns `false` when the path degenerates
/// (fewer than two points, fewer than three on a closed path, or a closed
/// path with no height); nothing is kept in that case.
pub fn build_path(
    path: &[Point<i64>],
    poly_type: PolyType,
    is_open: bool,
    vertices: &mut Vec<Vertex>,
    minima: &mut LocalMinimaList,
) -> bool {
    let mut points: Vec<Point<i64>> = Vec::with_capacity(path.len());
    for &pt in path {
        if points.last() != Some(&pt) {
            points.push(pt);
        }
    }
    if !is_open {
        while points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
    }

    let count = points.len();
    if count < 2 || (!is_open && count < 3) {
        return false;
    }

    let first = vertices.len();
    if !is_open && points.iter().all(|pt| pt.y == points[0].y) {
        return false;
    }

    for (i, &pt) in points.iter().enumerate() {
        vertices.push(Vertex {
            pt,
            next: first + (i + 1) % count,
            prev: first + (i + count - 1) % count,
            flags: VertexFlags::NONE,
        });
    }

    // "up" means decreasing Y: the sweep starts at the largest Y.
    let mut going_up;
    if is_open {
        let mut curr = vertices[first].next;
        while curr != first && vertices[curr].pt.y == vertices[first].pt.y {
            curr = vertices[curr].next;
        }
        going_up = vertices[curr].pt.y <= vertices[first].pt.y;
        if going_up {
            vertices[first].flags = VertexFlags::OPEN_START;
            minima.insert(vertices, first, poly_type, true);
        } else {
            vertices[first].flags = VertexFlags::OPEN_START | VertexFlags::LOCAL_MAX;
        }
    } else {
        let mut prev = vertices[first].prev;
        while prev != first && vertices[prev].pt.y == vertices[first].pt.y {
            prev = vertices[prev].prev;
        }
        going_up = vertices[prev].pt.y > vertices[first].pt.y;
    }

    let going_up0 = going_up;
    let mut prev = first;
    let mut curr = vertices[first].next;
    while curr != first {
        if vertices[curr].pt.y > vertices[prev].pt.y && going_up {
            vertices[prev].flags.insert(VertexFlags::LOCAL_MAX);
            going_up = false;
        } else if vertices[curr].pt.y < vertices[prev].pt.y && !going_up {
            going_up = true;
            minima.insert(vertices, prev, poly_type, is_open);
        }
        prev = curr;
        curr = vertices[curr].next;
    }

    if is_open {
        vertices[prev].flags.insert(VertexFlags::OPEN_END);
        if going_up {
            vertices[prev].flags.insert(VertexFlags::LOCAL_MAX);
        } else {
            minima.insert(vertices, prev, poly_type, is_open);
        }
    } else if going_up != going_up0 {
        if going_up0 {
            minima.insert(vertices, prev, poly_type, false);
        } else {
            vertices[prev].flags.insert(VertexFlags::LOCAL_MAX);
        }
    }

    true
}

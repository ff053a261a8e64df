use crate::clipper::enums::PolyType;
use crate::clipper::vertex::{Vertex, VertexFlags};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalMinima {
    pub vertex: usize,
    pub poly_type: PolyType,
    pub is_open: bool,
}

#[derive(Debug, Default)]
pub struct LocalMinimaList {
    items: Vec<LocalMinima>,
    is_sorted: bool,
}

impl LocalMinimaList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        vertices: &mut [Vertex],
        vertex: usize,
        poly_type: PolyType,
        is_open: bool,
    ) {
        if vertices[vertex].flags.contains(VertexFlags::LOCAL_MIN) {
            return;
        }

        vertices[vertex].flags.insert(VertexFlags::LOCAL_MIN);
        self.items.push(LocalMinima {
            vertex,
            poly_type,
            is_open,
        });
        self.is_sorted = false;
    }

    /// Orders by descending Y, then ascending X. Stable for equal points.
    pub fn sort(&mut self, vertices: &[Vertex]) {
        if self.is_sorted {
            return;
        }

        self.items.sort_by(|a, b| {
            let pa = vertices[a.vertex].pt;
            let pb = vertices[b.vertex].pt;
            pb.y.cmp(&pa.y).then(pa.x.cmp(&pb.x))
        });
        self.is_sorted = true;
    }

    pub fn as_slice(&self) -> &[LocalMinima] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&LocalMinima> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_open_paths(&self) -> bool {
        self.items.iter().any(|lm| lm.is_open)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.is_sorted = true;
    }
}

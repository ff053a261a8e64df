use crate::geometry::{Path64, Paths64};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolyPath {
    polygon: Path64,
    is_hole: bool,
    children: Vec<PolyPath>,
}

impl PolyPath {
    pub fn new(polygon: Path64, is_hole: bool) -> Self {
        Self {
            polygon,
            is_hole,
            children: Vec::new(),
        }
    }

    pub fn polygon(&self) -> &Path64 {
        &self.polygon
    }

    pub fn is_hole(&self) -> bool {
        self.is_hole
    }

    pub fn children(&self) -> &[PolyPath] {
        &self.children
    }

    pub fn count(&self) -> usize {
        self.children.len()
    }

    pub fn add_child(&mut self, child: PolyPath) {
        self.children.push(child);
    }

    pub fn total(&self) -> usize {
        1 + self.children.iter().map(PolyPath::total).sum::<usize>()
    }

    fn collect(&self, paths: &mut Paths64) {
        paths.push(self.polygon.clone());
        for child in &self.children {
            child.collect(paths);
        }
    }

    fn toggle_holes(&mut self) {
        self.is_hole = !self.is_hole;
        for child in &mut self.children {
            child.toggle_holes();
        }
    }

    fn into_children(self) -> Vec<PolyPath> {
        self.children
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolyTree {
    children: Vec<PolyPath>,
}

impl PolyTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_children(children: Vec<PolyPath>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[PolyPath] {
        &self.children
    }

    pub fn count(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn total(&self) -> usize {
        self.children.iter().map(PolyPath::total).sum()
    }

    /// Flattens depth first: every outer is followed by its descendants.
    pub fn to_paths(&self) -> Paths64 {
        let mut result = Vec::with_capacity(self.total());
        for child in &self.children {
            child.collect(&mut result);
        }
        result
    }

    /// Replaces each top-level node by its children, which become outers.
    pub fn lift_children(self) -> Self {
        let mut children = Vec::new();
        for node in self.children {
            for mut child in node.into_children() {
                child.toggle_holes();
                children.push(child);
            }
        }
        Self { children }
    }
}

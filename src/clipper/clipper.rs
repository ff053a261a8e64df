use crate::clipper::constants::{MAX_COORD, MIN_COORD};
use crate::clipper::enums::{ClipType, PolyFillType, PolyType};
use crate::clipper::local_minima::LocalMinimaList;
use crate::clipper::out_rec::OutRecList;
use crate::clipper::poly_tree::{PolyPath, PolyTree};
use crate::clipper::sweep::SweepState;
use crate::clipper::utils::{clean_path, path1_inside_path2};
use crate::clipper::vertex::{build_path, Vertex};
use crate::error::{ConfigurationError, InvariantViolation, Result};
use crate::geometry::bound_rect::BoundRect;
use crate::geometry::point::Point;
use crate::geometry::{Path64, Paths64};
use log::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClipperOptions {
    pub reverse_solution: bool,
    pub preserve_collinear: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Solution {
    pub closed: Paths64,
    pub open: Paths64,
}

/// Boolean engine over integer polygons. Input survives `execute`.
#[derive(Debug, Default)]
pub struct Clipper {
    options: ClipperOptions,
    vertices: Vec<Vertex>,
    minima: LocalMinimaList,
    paths: Paths64,
}

impl Clipper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ClipperOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> ClipperOptions {
        self.options
    }

    pub fn set_reverse_solution(&mut self, value: bool) {
        self.options.reverse_solution = value;
    }

    pub fn add_path(&mut self, path: &[Point<i64>], poly_type: PolyType, is_open: bool) -> Result<bool> {
        validate_path(path, poly_type, is_open)?;
        Ok(self.push_path(path, poly_type, is_open))
    }

    /// Adds every path or none: all are validated before any is stored.
    /// Returns how many paths were kept.
    pub fn add_paths(&mut self, paths: &[Path64], poly_type: PolyType, is_open: bool) -> Result<usize> {
        for path in paths {
            validate_path(path, poly_type, is_open)?;
        }

        Ok(paths
            .iter()
            .filter(|path| self.push_path(path, poly_type, is_open))
            .count())
    }

    fn push_path(&mut self, path: &[Point<i64>], poly_type: PolyType, is_open: bool) -> bool {
        let added = build_path(path, poly_type, is_open, &mut self.vertices, &mut self.minima);
        if added {
            self.paths.push(path.to_vec());
        } else {
            debug!(
                "dropped degenerate {:?} path with {} points",
                poly_type,
                path.len()
            );
        }
        added
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.minima.clear();
        self.paths.clear();
    }

    pub fn get_bounds(&self) -> Option<BoundRect<i64>> {
        BoundRect::from_paths(&self.paths)
    }

    pub fn execute(&mut self, clip_type: ClipType, fill_type: PolyFillType) -> Result<Solution> {
        let out = self.run_sweep(clip_type, fill_type)?;
        let reverse = self.options.reverse_solution;
        let mut solution = Solution::default();

        for rec in 0..out.len() {
            let is_open = out.recs[rec].is_open;
            let path = match out.build_path(rec, reverse) {
                Some(path) => path,
                None => continue,
            };
            if let Some(path) = clean_path(&path, is_open, self.options.preserve_collinear) {
                if is_open {
                    solution.open.push(path);
                } else {
                    solution.closed.push(path);
                }
            }
        }

        debug!(
            "{:?}/{:?} produced {} closed and {} open paths",
            clip_type,
            fill_type,
            solution.closed.len(),
            solution.open.len()
        );

        Ok(solution)
    }

    pub fn execute_tree(&mut self, clip_type: ClipType, fill_type: PolyFillType) -> Result<(PolyTree, Paths64)> {
        let mut out = self.run_sweep(clip_type, fill_type)?;
        let reverse = self.options.reverse_solution;
        let preserve = self.options.preserve_collinear;

        let mut open_paths = Paths64::new();
        let mut builder = TreeBuilder::new(out.len());
        for rec in 0..out.len() {
            let is_open = out.recs[rec].is_open;
            let path = out
                .build_path(rec, reverse)
                .and_then(|path| clean_path(&path, is_open, preserve));
            match path {
                Some(path) if is_open => open_paths.push(path),
                Some(path) => builder.set_path(rec, path),
                None => {}
            }
        }

        for rec in 0..out.len() {
            if builder.paths[rec].is_some() {
                builder.check_owners(&mut out, rec)?;
            }
        }

        let tree = builder.into_tree();
        debug!(
            "{:?}/{:?} produced a tree of {} contours and {} open paths",
            clip_type,
            fill_type,
            tree.total(),
            open_paths.len()
        );

        Ok((tree, open_paths))
    }

    fn run_sweep(&mut self, clip_type: ClipType, fill_type: PolyFillType) -> Result<OutRecList> {
        self.minima.sort(&self.vertices);
        debug!(
            "executing {:?}/{:?} over {} paths",
            clip_type,
            fill_type,
            self.paths.len()
        );

        let mut sweep = SweepState::new(
            &self.vertices,
            self.minima.as_slice(),
            clip_type,
            fill_type,
            self.options.preserve_collinear,
        );
        if let Err(err) = sweep.run() {
            warn!("{:?} aborted: {}", clip_type, err);
            return Err(err.into());
        }

        Ok(sweep.into_output())
    }
}

fn validate_path(path: &[Point<i64>], poly_type: PolyType, is_open: bool) -> Result<()> {
    if is_open && poly_type == PolyType::Clip {
        return Err(ConfigurationError::OpenClipPath.into());
    }

    match path
        .iter()
        .find(|pt| pt.x < MIN_COORD || pt.x > MAX_COORD || pt.y < MIN_COORD || pt.y > MAX_COORD)
    {
        Some(pt) => Err(ConfigurationError::CoordinateOutOfRange { x: pt.x, y: pt.y }.into()),
        None => Ok(()),
    }
}

struct TreeBuilder {
    paths: Vec<Option<Path64>>,
    bounds: Vec<Option<BoundRect<i64>>>,
    parents: Vec<Option<Option<usize>>>,
}

impl TreeBuilder {
    fn new(count: usize) -> Self {
        Self {
            paths: vec![None; count],
            bounds: vec![None; count],
            parents: vec![None; count],
        }
    }

    fn set_path(&mut self, rec: usize, path: Path64) {
        self.bounds[rec] = BoundRect::from_paths(std::iter::once(&path));
        self.paths[rec] = Some(path);
    }

    fn contains(&self, owner: usize, rec: usize) -> bool {
        match (&self.paths[owner], &self.paths[rec], self.bounds[owner], self.bounds[rec]) {
            (Some(outer), Some(inner), Some(outer_bounds), Some(inner_bounds)) => {
                outer_bounds.contains(&inner_bounds) && path1_inside_path2(inner, outer)
            }
            _ => false,
        }
    }

    fn check_owners(&mut self, out: &mut OutRecList, rec: usize) -> Result<()> {
        if self.parents[rec].is_some() {
            return Ok(());
        }

        let mut steps = 0;
        while let Some(owner) = out.recs[rec].owner {
            if self.contains(owner, rec) {
                break;
            }
            out.recs[rec].owner = out.recs[owner].owner;
            steps += 1;
            if steps > out.len() {
                return Err(InvariantViolation::OwnerCycle.into());
            }
        }

        let parent = out.recs[rec].owner;
        if let Some(owner) = parent {
            self.check_owners(out, owner)?;
        }
        self.parents[rec] = Some(parent);
        Ok(())
    }

    fn into_tree(mut self) -> PolyTree {
        let count = self.paths.len();
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); count];
        let mut roots = Vec::new();
        for rec in 0..count {
            if self.paths[rec].is_none() {
                continue;
            }
            match self.parents[rec].flatten() {
                Some(parent) => children[parent].push(rec),
                None => roots.push(rec),
            }
        }

        let nodes = roots
            .into_iter()
            .filter_map(|rec| self.build_node(rec, false, &children))
            .collect();
        PolyTree::from_children(nodes)
    }

    fn build_node(&mut self, rec: usize, is_hole: bool, children: &[Vec<usize>]) -> Option<PolyPath> {
        let mut node = PolyPath::new(self.paths[rec].take()?, is_hole);
        for &child in &children[rec] {
            if let Some(child_node) = self.build_node(child, !is_hole, children) {
                node.add_child(child_node);
            }
        }
        Some(node)
    }
}

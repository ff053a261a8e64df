use crate::clipper::clipper::{Clipper, ClipperOptions};
use crate::clipper::constants::{DEFAULT_ARC_TOLERANCE, DEFAULT_MITER_LIMIT, FLOAT_TOLERANCE, OUTER_RECT_MARGIN};
use crate::clipper::enums::{ClipType, EndType, JoinType, PolyFillType, PolyType};
use crate::clipper::poly_tree::PolyTree;
use crate::clipper::utils::orientation;
use crate::error::{ClipperError, ConfigurationError, Result};
use crate::geometry::bound_rect::BoundRect;
use crate::geometry::point::Point;
use crate::geometry::{Path64, Paths64};
use crate::utils::almost_equal::AlmostEqual;
use log::{debug, warn};
use std::f64::consts::PI;

const TWO_PI: f64 = PI * 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetOptions {
    /// Longest miter, in multiples of `delta`, before a miter join is squared off.
    pub miter_limit: f64,
    /// Largest allowed deviation of a round join from the true arc. `0` picks
    /// a quarter unit.
    pub arc_tolerance: f64,
    pub preserve_collinear: bool,
    pub reverse_solution: bool,
}

impl OffsetOptions {
    pub fn new(
        miter_limit: f64,
        arc_tolerance: f64,
        preserve_collinear: bool,
        reverse_solution: bool,
    ) -> Result<Self> {
        if !miter_limit.is_finite() || miter_limit < 1.0 {
            return Err(ConfigurationError::InvalidMiterLimit(miter_limit).into());
        }
        if !arc_tolerance.is_finite() || arc_tolerance < 0.0 {
            return Err(ConfigurationError::InvalidArcTolerance(arc_tolerance).into());
        }

        Ok(Self {
            miter_limit,
            arc_tolerance,
            preserve_collinear,
            reverse_solution,
        })
    }
}

impl Default for OffsetOptions {
    fn default() -> Self {
        Self {
            miter_limit: DEFAULT_MITER_LIMIT,
            arc_tolerance: DEFAULT_ARC_TOLERANCE,
            preserve_collinear: false,
            reverse_solution: false,
        }
    }
}

#[derive(Debug, Clone)]
struct OffsetPath {
    path: Path64,
    join_type: JoinType,
    end_type: EndType,
}

#[derive(Debug, Default)]
pub struct ClipperOffset {
    options: OffsetOptions,
    paths: Vec<OffsetPath>,
    lowest: Option<(usize, usize)>,
}

impl ClipperOffset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: OffsetOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn add_path(&mut self, path: &[Point<i64>], join_type: JoinType, end_type: EndType) -> bool {
        let mut high = match path.len() {
            0 => return false,
            len => len - 1,
        };
        if end_type.is_closed() {
            while high > 0 && path[0] == path[high] {
                high -= 1;
            }
        }

        let mut contour: Path64 = Vec::with_capacity(high + 1);
        contour.push(path[0]);
        let mut lowest_index = 0;
        for &pt in &path[1..=high] {
            if contour.last() != Some(&pt) {
                contour.push(pt);
                let lowest = contour[lowest_index];
                if pt.y > lowest.y || (pt.y == lowest.y && pt.x < lowest.x) {
                    lowest_index = contour.len() - 1;
                }
            }
        }

        if end_type == EndType::Polygon && contour.len() < 3 {
            debug!("dropped offset polygon with {} distinct points", contour.len());
            return false;
        }

        if end_type == EndType::Polygon {
            let candidate = contour[lowest_index];
            let is_lower = match self.lowest {
                None => true,
                Some((path_index, vertex_index)) => {
                    let current = self.paths[path_index].path[vertex_index];
                    candidate.y > current.y || (candidate.y == current.y && candidate.x < current.x)
                }
            };
            if is_lower {
                self.lowest = Some((self.paths.len(), lowest_index));
            }
        }

        self.paths.push(OffsetPath {
            path: contour,
            join_type,
            end_type,
        });
        true
    }

    pub fn add_paths(&mut self, paths: &[Path64], join_type: JoinType, end_type: EndType) -> usize {
        paths
            .iter()
            .filter(|path| self.add_path(path, join_type, end_type))
            .count()
    }

    pub fn clear(&mut self) {
        self.paths.clear();
        self.lowest = None;
    }

    pub fn execute(&self, delta: f64) -> Result<Paths64> {
        validate_delta(delta)?;
        let sources = self.oriented_paths();

        if delta.almost_zero() {
            return Ok(sources
                .into_iter()
                .filter(|source| source.end_type == EndType::Polygon)
                .map(|source| source.path)
                .collect());
        }

        let raw = self.offset_all(&sources, delta);
        let mut clipper = self.cleanup_clipper(&raw)?;

        if delta > 0.0 {
            return Ok(clipper
                .execute(ClipType::Union, PolyFillType::Positive)
                .map_err(log_cleanup_failure)?
                .closed);
        }

        let rect = match self.add_outer_rect(&mut clipper)? {
            Some(rect) => rect,
            None => return Ok(Paths64::new()),
        };
        let mut closed = clipper
            .execute(ClipType::Union, PolyFillType::Negative)
            .map_err(log_cleanup_failure)?
            .closed;
        closed.retain(|path| BoundRect::from_paths(std::iter::once(path)) != Some(rect));
        Ok(closed)
    }

    pub fn execute_tree(&self, delta: f64) -> Result<PolyTree> {
        validate_delta(delta)?;
        let sources = self.oriented_paths();

        if delta.almost_zero() {
            let closed: Paths64 = sources
                .into_iter()
                .filter(|source| source.end_type == EndType::Polygon)
                .map(|source| source.path)
                .collect();
            let mut clipper = self.cleanup_clipper(&closed)?;
            return Ok(clipper
                .execute_tree(ClipType::Union, PolyFillType::Positive)
                .map_err(log_cleanup_failure)?
                .0);
        }

        let raw = self.offset_all(&sources, delta);
        let mut clipper = self.cleanup_clipper(&raw)?;

        if delta > 0.0 {
            return Ok(clipper
                .execute_tree(ClipType::Union, PolyFillType::Positive)
                .map_err(log_cleanup_failure)?
                .0);
        }

        if self.add_outer_rect(&mut clipper)?.is_none() {
            return Ok(PolyTree::new());
        }
        let (tree, _) = clipper
            .execute_tree(ClipType::Union, PolyFillType::Negative)
            .map_err(log_cleanup_failure)?;
        Ok(tree.lift_children())
    }

    fn cleanup_clipper(&self, paths: &[Path64]) -> Result<Clipper> {
        let mut clipper = Clipper::with_options(ClipperOptions {
            reverse_solution: self.options.reverse_solution,
            preserve_collinear: self.options.preserve_collinear,
        });
        clipper.add_paths(paths, PolyType::Subject, false)?;
        Ok(clipper)
    }

    fn add_outer_rect(&self, clipper: &mut Clipper) -> Result<Option<BoundRect<i64>>> {
        let rect = match clipper.get_bounds() {
            Some(bounds) => bounds.inflate(OUTER_RECT_MARGIN),
            None => return Ok(None),
        };
        clipper.add_path(&rect.to_negative_path(), PolyType::Subject, false)?;
        clipper.set_reverse_solution(!self.options.reverse_solution);
        Ok(Some(rect))
    }

    /// Copies of the stored paths with closed orientations normalised: if the
    /// polygon owning the lowest vertex is negative, every polygon flips, so
    /// holes keep running against outers. Joined paths always run positive.
    fn oriented_paths(&self) -> Vec<OffsetPath> {
        let flip_polygons = self
            .lowest
            .map_or(false, |(path_index, _)| !orientation(&self.paths[path_index].path));

        self.paths
            .iter()
            .cloned()
            .map(|mut source| {
                let reverse = match source.end_type {
                    EndType::Polygon => flip_polygons,
                    EndType::Joined => !orientation(&source.path),
                    _ => false,
                };
                if reverse {
                    source.path.reverse();
                }
                source
            })
            .collect()
    }

    fn offset_all(&self, sources: &[OffsetPath], delta: f64) -> Paths64 {
        let geometry = ArcGeometry::new(&self.options, delta);
        let mut result = Paths64::with_capacity(sources.len() * 2);

        for source in sources {
            let len = source.path.len();
            if len == 0 || (delta <= 0.0 && (len < 3 || source.end_type != EndType::Polygon)) {
                continue;
            }

            let mut offsetter = PathOffsetter::new(&source.path, delta, geometry);
            offsetter.offset(source.join_type, source.end_type, &mut result);
        }

        debug!("offset {} paths by {} into {} raw outlines", sources.len(), delta, result.len());
        result
    }
}

fn validate_delta(delta: f64) -> Result<()> {
    if delta.is_finite() {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidDelta(delta).into())
    }
}

fn log_cleanup_failure(err: ClipperError) -> ClipperError {
    warn!("offset cleanup union failed: {}", err);
    err
}

#[derive(Debug, Clone, Copy)]
struct ArcGeometry {
    miter_lim: f64,
    steps: f64,
    step_sin: f64,
    step_cos: f64,
    steps_per_rad: f64,
}

impl ArcGeometry {
    fn new(options: &OffsetOptions, delta: f64) -> Self {
        let abs_delta = delta.abs();
        let miter_lim = if options.miter_limit > 2.0 {
            2.0 / (options.miter_limit * options.miter_limit)
        } else {
            0.5
        };

        let y = if options.arc_tolerance <= 0.0 {
            DEFAULT_ARC_TOLERANCE
        } else if options.arc_tolerance > abs_delta * DEFAULT_ARC_TOLERANCE {
            abs_delta * DEFAULT_ARC_TOLERANCE
        } else {
            options.arc_tolerance
        };

        let cos_arg = (1.0 - y / abs_delta.max(FLOAT_TOLERANCE)).clamp(-1.0, 1.0);
        let mut steps = PI / cos_arg.acos();
        if !steps.is_finite() || steps > abs_delta * PI {
            steps = abs_delta * PI;
        }
        steps = steps.max(1.0);

        let step_sin = (TWO_PI / steps).sin();
        Self {
            miter_lim,
            steps,
            step_sin: if delta < 0.0 { -step_sin } else { step_sin },
            step_cos: (TWO_PI / steps).cos(),
            steps_per_rad: steps / TWO_PI,
        }
    }
}

struct PathOffsetter<'a> {
    src: &'a [Point<i64>],
    normals: Vec<Point<f64>>,
    dest: Path64,
    delta: f64,
    sin_a: f64,
    geometry: ArcGeometry,
}

impl<'a> PathOffsetter<'a> {
    fn new(src: &'a [Point<i64>], delta: f64, geometry: ArcGeometry) -> Self {
        Self {
            src,
            normals: Vec::with_capacity(src.len()),
            dest: Vec::new(),
            delta,
            sin_a: 0.0,
            geometry,
        }
    }

    #[inline(always)]
    fn push(&mut self, pt: Point<f64>) {
        self.dest.push(pt.clipper_round());
    }

    #[inline(always)]
    fn along(&self, j: usize, direction: Point<f64>) -> Point<f64> {
        self.src[j].to_f64() + direction.scale_up(self.delta)
    }

    fn offset(&mut self, join_type: JoinType, end_type: EndType, result: &mut Paths64) {
        let len = self.src.len();
        if len == 1 {
            self.offset_single_point(join_type);
            result.push(std::mem::take(&mut self.dest));
            return;
        }

        for j in 0..len - 1 {
            self.normals.push(unit_normal(self.src[j], self.src[j + 1]));
        }
        if end_type.is_closed() {
            self.normals.push(unit_normal(self.src[len - 1], self.src[0]));
        } else {
            let last = self.normals[len - 2];
            self.normals.push(last);
        }

        match end_type {
            EndType::Polygon => {
                self.offset_closed(join_type);
                result.push(std::mem::take(&mut self.dest));
            }
            EndType::Joined => {
                self.offset_closed(join_type);
                result.push(std::mem::take(&mut self.dest));

                let last = self.normals[len - 1];
                for j in (1..len).rev() {
                    self.normals[j] = -self.normals[j - 1];
                }
                self.normals[0] = -last;
                let mut k = 0;
                for j in (0..len).rev() {
                    self.offset_point(j, &mut k, join_type);
                }
                result.push(std::mem::take(&mut self.dest));
            }
            _ => {
                self.offset_open(join_type, end_type);
                result.push(std::mem::take(&mut self.dest));
            }
        }
    }

    fn offset_closed(&mut self, join_type: JoinType) {
        let mut k = self.src.len() - 1;
        for j in 0..self.src.len() {
            self.offset_point(j, &mut k, join_type);
        }
    }

    fn offset_single_point(&mut self, join_type: JoinType) {
        if join_type == JoinType::Round {
            let mut direction = Point::new(1.0, 0.0);
            let count = self.geometry.steps.floor() as usize;
            for _ in 0..count {
                self.push(self.along(0, direction));
                direction = self.rotate(direction);
            }
            return;
        }

        let mut direction = Point::new(-1.0, -1.0);
        for _ in 0..4 {
            self.push(self.along(0, direction));
            if direction.x < 0.0 {
                direction.x = 1.0;
            } else if direction.y < 0.0 {
                direction.y = 1.0;
            } else {
                direction.x = -1.0;
            }
        }
    }

    fn offset_open(&mut self, join_type: JoinType, end_type: EndType) {
        let len = self.src.len();
        let mut k = 0;
        for j in 1..len - 1 {
            self.offset_point(j, &mut k, join_type);
        }

        let last = len - 1;
        if end_type == EndType::Butt {
            let normal = self.normals[last];
            self.push(self.along(last, normal));
            self.push(self.along(last, -normal));
        } else {
            self.sin_a = 0.0;
            self.normals[last] = -self.normals[last];
            self.cap(last, len - 2, end_type);
        }

        for j in (1..len).rev() {
            self.normals[j] = -self.normals[j - 1];
        }
        self.normals[0] = -self.normals[1];

        let mut k = last;
        for j in (1..last).rev() {
            self.offset_point(j, &mut k, join_type);
        }

        if end_type == EndType::Butt {
            let normal = self.normals[0];
            self.push(self.along(0, -normal));
            self.push(self.along(0, normal));
        } else {
            self.sin_a = 0.0;
            self.cap(0, 1, end_type);
        }
    }

    fn cap(&mut self, j: usize, k: usize, end_type: EndType) {
        if end_type == EndType::Square {
            self.do_square(j, k);
        } else {
            self.do_round(j, k);
        }
    }

    /// Emits the outline around vertex `j`, where `k` is the vertex whose
    /// normal precedes it. `k` only advances when a join was emitted.
    fn offset_point(&mut self, j: usize, k: &mut usize, join_type: JoinType) {
        let nj = self.normals[j];
        let nk = self.normals[*k];
        self.sin_a = nj.cross(&nk);

        if (self.sin_a * self.delta).abs() < 1.0 {
            if nk.dot(&nj) > 0.0 {
                self.push(self.along(j, nk));
                return;
            }
        } else {
            self.sin_a = self.sin_a.clamp(-1.0, 1.0);
        }

        if self.sin_a * self.delta < 0.0 {
            self.push(self.along(j, nk));
            self.dest.push(self.src[j]);
            self.push(self.along(j, nj));
        } else {
            match join_type {
                JoinType::Miter => {
                    let r = 1.0 + nj.dot(&nk);
                    if r >= self.geometry.miter_lim {
                        self.do_miter(j, *k, r);
                    } else {
                        self.do_square(j, *k);
                    }
                }
                JoinType::Square => self.do_square(j, *k),
                JoinType::Round => self.do_round(j, *k),
            }
        }

        *k = j;
    }

    fn do_square(&mut self, j: usize, k: usize) {
        let nj = self.normals[j];
        let nk = self.normals[k];
        let dx = (self.sin_a.atan2(nk.dot(&nj)) / 4.0).tan();

        self.push(self.along(j, Point::new(nk.x - nk.y * dx, nk.y + nk.x * dx)));
        self.push(self.along(j, Point::new(nj.x + nj.y * dx, nj.y - nj.x * dx)));
    }

    fn do_miter(&mut self, j: usize, k: usize, r: f64) {
        let q = self.delta / r;
        let direction = self.normals[k] + self.normals[j];
        self.push(self.src[j].to_f64() + direction.scale_up(q));
    }

    fn do_round(&mut self, j: usize, k: usize) {
        let nj = self.normals[j];
        let nk = self.normals[k];
        let angle = self.sin_a.atan2(nk.dot(&nj));
        let steps = ((self.geometry.steps_per_rad * angle.abs()).ceil() as usize).max(1);

        let mut direction = nk;
        for _ in 0..steps {
            self.push(self.along(j, direction));
            direction = self.rotate(direction);
        }
        self.push(self.along(j, nj));
    }

    #[inline(always)]
    fn rotate(&self, direction: Point<f64>) -> Point<f64> {
        let (sin, cos) = (self.geometry.step_sin, self.geometry.step_cos);
        Point::new(
            direction.x * cos - sin * direction.y,
            direction.x * sin + direction.y * cos,
        )
    }
}

fn unit_normal(pt1: Point<i64>, pt2: Point<i64>) -> Point<f64> {
    (pt2 - pt1).to_f64().normal().normalize()
}

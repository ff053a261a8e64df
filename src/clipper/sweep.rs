use crate::clipper::enums::{ClipType, PolyFillType, PolyType};
use crate::clipper::intersect_node::IntersectNode;
use crate::clipper::local_minima::LocalMinima;
use crate::clipper::out_rec::OutRecList;
use crate::clipper::scanbeam::Scanbeam;
use crate::clipper::t_edge::TEdge;
use crate::clipper::utils::cross_product;
use crate::clipper::vertex::{Vertex, VertexFlags};
use crate::error::InvariantViolation;
use crate::geometry::point::Point;

pub type SweepResult<T> = Result<T, InvariantViolation>;

/// Mutable state of one Boolean operation: the active edge list (AEL),
/// pending scanlines and horizontals, and the output contours built so far.
///
/// Edges live in `edges` for the whole sweep; leaving the AEL only unlinks
/// them. A state is consumed by a single [`SweepState::run`].
pub struct SweepState<'a> {
    pub(crate) vertices: &'a [Vertex],
    pub(crate) minima: &'a [LocalMinima],
    pub(crate) clip_type: ClipType,
    pub(crate) fill_type: PolyFillType,
    pub(crate) preserve_collinear: bool,
    pub(crate) has_open_paths: bool,
    minima_cursor: usize,
    pub(crate) scanbeam: Scanbeam,
    pub(crate) edges: Vec<TEdge>,
    pub(crate) actives: Option<usize>,
    pub(crate) horizontals: Vec<usize>,
    pub(crate) intersections: Vec<IntersectNode>,
    pub(crate) out: OutRecList,
    pub(crate) bot_y: i64,
}

impl<'a> SweepState<'a> {
    pub fn new(
        vertices: &'a [Vertex],
        minima: &'a [LocalMinima],
        clip_type: ClipType,
        fill_type: PolyFillType,
        preserve_collinear: bool,
    ) -> Self {
        Self {
            vertices,
            minima,
            clip_type,
            fill_type,
            preserve_collinear,
            has_open_paths: minima.iter().any(|lm| lm.is_open),
            minima_cursor: 0,
            scanbeam: Scanbeam::new(),
            edges: Vec::new(),
            actives: None,
            horizontals: Vec::new(),
            intersections: Vec::new(),
            out: OutRecList::new(),
            bot_y: 0,
        }
    }

    pub fn run(&mut self) -> SweepResult<()> {
        for lm in self.minima {
            self.scanbeam.insert(self.vertices[lm.vertex].pt.y);
        }

        let mut y = match self.scanbeam.pop() {
            Some(y) => y,
            None => return Ok(()),
        };

        loop {
            self.insert_local_minima_into_ael(y)?;
            self.process_horizontals()?;
            self.bot_y = y;
            y = match self.scanbeam.pop() {
                Some(next_y) => next_y,
                None => break,
            };
            self.process_intersections(y)?;
            self.process_edges_at_top_of_scanbeam(y)?;
            self.process_horizontals()?;
        }

        Ok(())
    }

    pub fn into_output(self) -> OutRecList {
        self.out
    }

    fn process_horizontals(&mut self) -> SweepResult<()> {
        while let Some(horz) = self.horizontals.pop() {
            self.process_horizontal(horz)?;
        }
        Ok(())
    }

    fn pop_local_minima(&mut self, y: i64) -> Option<usize> {
        let lm = self.minima.get(self.minima_cursor)?;
        if self.vertices[lm.vertex].pt.y != y {
            return None;
        }
        self.minima_cursor += 1;
        Some(self.minima_cursor - 1)
    }

    // Vertex navigation along an edge's bound.

    pub(crate) fn next_vertex(&self, e: usize) -> usize {
        let vertex = &self.vertices[self.edges[e].vertex_top];
        if self.edges[e].wind_dx > 0 {
            vertex.next
        } else {
            vertex.prev
        }
    }

    fn prev_prev_vertex(&self, e: usize) -> usize {
        let vertex = &self.vertices[self.edges[e].vertex_top];
        if self.edges[e].wind_dx > 0 {
            self.vertices[vertex.prev].prev
        } else {
            self.vertices[vertex.next].next
        }
    }

    pub(crate) fn is_maxima(&self, e: usize) -> bool {
        self.vertices[self.edges[e].vertex_top]
            .flags
            .contains(VertexFlags::LOCAL_MAX)
    }

    pub(crate) fn is_open_end(&self, e: usize) -> bool {
        self.edges[e].is_open
            && self.vertices[self.edges[e].vertex_top]
                .flags
                .contains(VertexFlags::OPEN_START | VertexFlags::OPEN_END)
    }

    pub(crate) fn is_front(&self, e: usize) -> bool {
        self.edges[e]
            .out_rec
            .map_or(false, |rec| self.out.recs[rec].front_edge == Some(e))
    }

    pub(crate) fn hot_rec(&self, e: usize) -> SweepResult<usize> {
        self.edges[e].out_rec.ok_or(InvariantViolation::EdgeNotHot(e))
    }

    // Active edge list.

    fn insert_local_minima_into_ael(&mut self, bot_y: i64) -> SweepResult<()> {
        while let Some(lm_index) = self.pop_local_minima(bot_y) {
            let lm = self.minima[lm_index];
            let vertex = self.vertices[lm.vertex];

            let mut left = if vertex.flags.contains(VertexFlags::OPEN_START) {
                None
            } else {
                Some(self.new_edge(vertex.pt, vertex.prev, -1, lm_index))
            };
            let mut right = if vertex.flags.contains(VertexFlags::OPEN_END) {
                None
            } else {
                Some(self.new_edge(vertex.pt, vertex.next, 1, lm_index))
            };

            match (left, right) {
                (Some(l), Some(r)) => {
                    let swap = if self.edges[l].is_horizontal() {
                        self.edges[l].is_heading_right_horz()
                    } else if self.edges[r].is_horizontal() {
                        self.edges[r].is_heading_left_horz()
                    } else {
                        self.edges[l].dx < self.edges[r].dx
                    };
                    if swap {
                        left = Some(r);
                        right = Some(l);
                    }
                }
                (None, _) => {
                    left = right;
                    right = None;
                }
                _ => {}
            }

            let left = match left {
                Some(left) => left,
                None => continue,
            };

            self.edges[left].is_left_bound = true;
            self.insert_left_edge(left);

            let contributing = if self.edges[left].is_open {
                self.set_wind_count_for_open_path_edge(left);
                self.edges[left].is_contributing_open(self.clip_type, self.fill_type)
            } else {
                self.set_wind_count_for_closed_path_edge(left);
                self.edges[left].is_contributing_closed(self.clip_type, self.fill_type)
            };

            let bot = self.edges[left].bot;
            if let Some(right) = right {
                self.edges[right].is_left_bound = false;
                self.edges[right].wind_cnt = self.edges[left].wind_cnt;
                self.edges[right].wind_cnt2 = self.edges[left].wind_cnt2;
                self.insert_right_edge(left, right);

                if contributing {
                    self.add_local_min_poly(left, right, bot, true)?;
                }

                while let Some(next) = self.edges[right].next_in_ael {
                    if !self.is_valid_ael_order(next, right) {
                        break;
                    }
                    let pt = self.edges[right].bot;
                    self.intersect_edges(right, next, pt)?;
                    self.swap_positions_in_ael(right, next);
                }

                if self.edges[right].is_horizontal() {
                    self.horizontals.push(right);
                } else {
                    self.scanbeam.insert(self.edges[right].top.y);
                }
            } else if contributing {
                self.start_open_path(left, bot);
            }

            if self.edges[left].is_horizontal() {
                self.horizontals.push(left);
            } else {
                self.scanbeam.insert(self.edges[left].top.y);
            }
        }

        Ok(())
    }

    fn new_edge(&mut self, bot: Point<i64>, vertex_top: usize, wind_dx: i32, lm_index: usize) -> usize {
        let lm = self.minima[lm_index];
        self.edges.push(TEdge::new(
            bot,
            self.vertices[vertex_top].pt,
            vertex_top,
            wind_dx,
            lm_index,
            lm.poly_type,
            lm.is_open,
        ));
        self.edges.len() - 1
    }

    fn insert_left_edge(&mut self, e: usize) {
        let first = match self.actives {
            None => {
                self.edges[e].prev_in_ael = None;
                self.edges[e].next_in_ael = None;
                self.actives = Some(e);
                return;
            }
            Some(first) => first,
        };

        if !self.is_valid_ael_order(first, e) {
            self.edges[e].prev_in_ael = None;
            self.edges[e].next_in_ael = Some(first);
            self.edges[first].prev_in_ael = Some(e);
            self.actives = Some(e);
            return;
        }

        let mut e2 = first;
        while let Some(next) = self.edges[e2].next_in_ael {
            if !self.is_valid_ael_order(next, e) {
                break;
            }
            e2 = next;
        }

        let next = self.edges[e2].next_in_ael;
        self.edges[e].next_in_ael = next;
        if let Some(next) = next {
            self.edges[next].prev_in_ael = Some(e);
        }
        self.edges[e].prev_in_ael = Some(e2);
        self.edges[e2].next_in_ael = Some(e);
    }

    fn insert_right_edge(&mut self, e: usize, e2: usize) {
        let next = self.edges[e].next_in_ael;
        self.edges[e2].next_in_ael = next;
        if let Some(next) = next {
            self.edges[next].prev_in_ael = Some(e2);
        }
        self.edges[e2].prev_in_ael = Some(e);
        self.edges[e].next_in_ael = Some(e2);
    }

    /// True when `newcomer` belongs to the right of `resident` at the current scanline.
    fn is_valid_ael_order(&self, resident: usize, newcomer: usize) -> bool {
        let res = &self.edges[resident];
        let new = &self.edges[newcomer];
        if new.curr_x != res.curr_x {
            return new.curr_x > res.curr_x;
        }

        let d = cross_product(res.top, new.bot, new.top);
        if d != 0.0 {
            return d < 0.0;
        }

        // Collinear from here: decide by where the edges turn next.
        if !self.is_maxima(resident) && res.top.y > new.top.y {
            let next_pt = self.vertices[self.next_vertex(resident)].pt;
            return cross_product(new.bot, res.top, next_pt) <= 0.0;
        }
        if !self.is_maxima(newcomer) && new.top.y > res.top.y {
            let next_pt = self.vertices[self.next_vertex(newcomer)].pt;
            return cross_product(new.bot, new.top, next_pt) >= 0.0;
        }

        let y = new.bot.y;
        let newcomer_is_left = new.is_left_bound;
        let resident_min = self.vertices[self.minima[res.local_min].vertex].pt;
        if res.bot.y != y || resident_min.y != y {
            return newcomer_is_left;
        }
        if res.is_left_bound != newcomer_is_left {
            return newcomer_is_left;
        }

        let res_prev_prev = self.vertices[self.prev_prev_vertex(resident)].pt;
        if cross_product(res_prev_prev, res.bot, res.top) == 0.0 {
            return true;
        }

        let new_prev_prev = self.vertices[self.prev_prev_vertex(newcomer)].pt;
        (cross_product(res_prev_prev, new.bot, new_prev_prev) > 0.0) == newcomer_is_left
    }

    // Winding counts.

    fn set_wind_count_for_closed_path_edge(&mut self, e: usize) {
        let poly_type = self.edges[e].poly_type;
        let wind_dx = self.edges[e].wind_dx;

        let mut e2 = self.edges[e].prev_in_ael;
        while let Some(index) = e2 {
            if self.edges[index].poly_type == poly_type && !self.edges[index].is_open {
                break;
            }
            e2 = self.edges[index].prev_in_ael;
        }

        let mut cursor = match e2 {
            None => {
                self.edges[e].wind_cnt = wind_dx;
                self.actives
            }
            Some(index) if self.fill_type == PolyFillType::EvenOdd => {
                self.edges[e].wind_cnt = wind_dx;
                self.edges[e].wind_cnt2 = self.edges[index].wind_cnt2;
                self.edges[index].next_in_ael
            }
            Some(index) => {
                let other = &self.edges[index];
                let wind_cnt = if other.wind_cnt * other.wind_dx < 0 {
                    // `e` sits outside `other`.
                    if other.wind_cnt.abs() > 1 {
                        if other.wind_dx * wind_dx < 0 {
                            other.wind_cnt
                        } else {
                            other.wind_cnt + wind_dx
                        }
                    } else if self.edges[e].is_open {
                        1
                    } else {
                        wind_dx
                    }
                } else if other.wind_dx * wind_dx < 0 {
                    other.wind_cnt
                } else {
                    other.wind_cnt + wind_dx
                };
                let wind_cnt2 = other.wind_cnt2;
                let next = other.next_in_ael;
                self.edges[e].wind_cnt = wind_cnt;
                self.edges[e].wind_cnt2 = wind_cnt2;
                next
            }
        };

        while let Some(index) = cursor {
            if index == e {
                break;
            }
            let other = &self.edges[index];
            if other.poly_type != poly_type && !other.is_open {
                let other_dx = other.wind_dx;
                let edge = &mut self.edges[e];
                if self.fill_type == PolyFillType::EvenOdd {
                    edge.wind_cnt2 = if edge.wind_cnt2 == 0 { 1 } else { 0 };
                } else {
                    edge.wind_cnt2 += other_dx;
                }
            }
            cursor = self.edges[index].next_in_ael;
        }
    }

    fn set_wind_count_for_open_path_edge(&mut self, e: usize) {
        let mut cnt1 = 0;
        let mut cnt2 = 0;
        let mut cursor = self.actives;
        while let Some(index) = cursor {
            if index == e {
                break;
            }
            let other = &self.edges[index];
            if other.poly_type == PolyType::Clip {
                cnt2 += if self.fill_type == PolyFillType::EvenOdd {
                    1
                } else {
                    other.wind_dx
                };
            } else if !other.is_open {
                cnt1 += if self.fill_type == PolyFillType::EvenOdd {
                    1
                } else {
                    other.wind_dx
                };
            }
            cursor = other.next_in_ael;
        }

        let edge = &mut self.edges[e];
        if self.fill_type == PolyFillType::EvenOdd {
            edge.wind_cnt = cnt1 & 1;
            edge.wind_cnt2 = cnt2 & 1;
        } else {
            edge.wind_cnt = cnt1;
            edge.wind_cnt2 = cnt2;
        }
    }

    // Output contours.

    pub(crate) fn get_prev_hot_edge(&self, e: usize) -> Option<usize> {
        let mut prev = self.edges[e].prev_in_ael;
        while let Some(index) = prev {
            if !self.edges[index].is_open && self.edges[index].is_hot() {
                break;
            }
            prev = self.edges[index].prev_in_ael;
        }
        prev
    }

    fn set_sides(&mut self, rec: usize, start_edge: usize, end_edge: usize) {
        self.out.recs[rec].front_edge = Some(start_edge);
        self.out.recs[rec].back_edge = Some(end_edge);
    }

    pub(crate) fn add_out_pt(&mut self, e: usize, pt: Point<i64>) -> SweepResult<usize> {
        let rec = self.hot_rec(e)?;
        let to_front = self.is_front(e);
        self.out.insert_point(rec, pt, to_front)
    }

    /// Opens a contour between `e1` and `e2`. The ascending (front) side is
    /// chosen so that outers and holes come out with opposite orientation.
    pub(crate) fn add_local_min_poly(
        &mut self,
        e1: usize,
        e2: usize,
        pt: Point<i64>,
        is_new: bool,
    ) -> SweepResult<usize> {
        let rec = self.out.new_out_rec();
        self.edges[e1].out_rec = Some(rec);
        self.edges[e2].out_rec = Some(rec);

        if self.edges[e1].is_open {
            self.out.recs[rec].is_open = true;
            if self.edges[e1].wind_dx > 0 {
                self.set_sides(rec, e1, e2);
            } else {
                self.set_sides(rec, e2, e1);
            }
        } else if let Some(prev_hot) = self.get_prev_hot_edge(e1) {
            let owner = self.hot_rec(prev_hot)?;
            if owner != rec {
                self.out.set_owner(rec, owner)?;
            }
            if self.is_front(prev_hot) == is_new {
                self.set_sides(rec, e2, e1);
            } else {
                self.set_sides(rec, e1, e2);
            }
        } else if is_new {
            self.set_sides(rec, e1, e2);
        } else {
            self.set_sides(rec, e2, e1);
        }

        let op = self.out.new_out_pt(pt);
        self.out.recs[rec].pts = Some(op);
        Ok(op)
    }

    pub(crate) fn add_local_max_poly(
        &mut self,
        e1: usize,
        e2: usize,
        pt: Point<i64>,
    ) -> SweepResult<usize> {
        if self.is_front(e1) == self.is_front(e2) {
            if self.is_open_end(e1) {
                let rec = self.hot_rec(e1)?;
                self.out.swap_front_back_sides(rec)?;
            } else if self.is_open_end(e2) {
                let rec = self.hot_rec(e2)?;
                self.out.swap_front_back_sides(rec)?;
            } else {
                return Err(InvariantViolation::MismatchedSides);
            }
        }

        let result = self.add_out_pt(e1, pt)?;
        let rec1 = self.hot_rec(e1)?;
        let rec2 = self.hot_rec(e2)?;

        if rec1 == rec2 {
            self.out.recs[rec1].pts = Some(result);
            match self.get_prev_hot_edge(e1) {
                None => self.out.recs[rec1].owner = None,
                Some(prev_hot) => {
                    let owner = self.hot_rec(prev_hot)?;
                    if owner != rec1 {
                        self.out.set_owner(rec1, owner)?;
                    }
                }
            }
            self.uncouple_out_rec(e1);
            if let Some(owner) = self.out.recs[rec1].owner {
                if self.out.recs[owner].front_edge.is_none() {
                    self.out.recs[rec1].owner = self.out.real_owner(Some(owner));
                }
            }
        } else if self.edges[e1].is_open {
            if self.edges[e1].wind_dx < 0 {
                self.join_outrec_paths(e1, e2)?;
            } else {
                self.join_outrec_paths(e2, e1)?;
            }
        } else if rec1 < rec2 {
            self.join_outrec_paths(e1, e2)?;
        } else {
            self.join_outrec_paths(e2, e1)?;
        }

        Ok(result)
    }

    /// Splices `e2`'s ring onto `e1`'s; `e2`'s record is left empty.
    fn join_outrec_paths(&mut self, e1: usize, e2: usize) -> SweepResult<()> {
        let rec1 = self.hot_rec(e1)?;
        let rec2 = self.hot_rec(e2)?;
        let p1_st = self.out.pts(rec1)?;
        let p2_st = self.out.pts(rec2)?;
        let p1_end = self.out.points[p1_st].next;
        let p2_end = self.out.points[p2_st].next;

        if self.is_front(e1) {
            self.out.points[p2_end].prev = p1_st;
            self.out.points[p1_st].next = p2_end;
            self.out.points[p2_st].next = p1_end;
            self.out.points[p1_end].prev = p2_st;
            self.out.recs[rec1].pts = Some(p2_st);
            self.out.recs[rec1].front_edge = self.out.recs[rec2].front_edge;
            if let Some(front) = self.out.recs[rec1].front_edge {
                self.edges[front].out_rec = Some(rec1);
            }
        } else {
            self.out.points[p1_end].prev = p2_st;
            self.out.points[p2_st].next = p1_end;
            self.out.points[p1_st].next = p2_end;
            self.out.points[p2_end].prev = p1_st;
            self.out.recs[rec1].back_edge = self.out.recs[rec2].back_edge;
            if let Some(back) = self.out.recs[rec1].back_edge {
                self.edges[back].out_rec = Some(rec1);
            }
        }

        let absorbed = &mut self.out.recs[rec2];
        absorbed.front_edge = None;
        absorbed.back_edge = None;
        absorbed.pts = None;

        if self.is_open_end(e1) {
            self.out.recs[rec2].pts = self.out.recs[rec1].pts;
            self.out.recs[rec1].pts = None;
        } else {
            self.out.set_owner(rec2, rec1)?;
        }

        self.edges[e1].out_rec = None;
        self.edges[e2].out_rec = None;
        Ok(())
    }

    fn uncouple_out_rec(&mut self, e: usize) {
        let rec = match self.edges[e].out_rec {
            Some(rec) => rec,
            None => return,
        };
        if let Some(front) = self.out.recs[rec].front_edge.take() {
            self.edges[front].out_rec = None;
        }
        if let Some(back) = self.out.recs[rec].back_edge.take() {
            self.edges[back].out_rec = None;
        }
    }

    pub(crate) fn start_open_path(&mut self, e: usize, pt: Point<i64>) -> usize {
        let rec = self.out.new_out_rec();
        let out_rec = &mut self.out.recs[rec];
        out_rec.is_open = true;
        if self.edges[e].wind_dx > 0 {
            out_rec.front_edge = Some(e);
            out_rec.back_edge = None;
        } else {
            out_rec.front_edge = None;
            out_rec.back_edge = Some(e);
        }
        self.edges[e].out_rec = Some(rec);

        let op = self.out.new_out_pt(pt);
        self.out.recs[rec].pts = Some(op);
        op
    }

    pub(crate) fn release_open_edge(&mut self, e: usize) {
        if let Some(rec) = self.edges[e].out_rec {
            if self.is_front(e) {
                self.out.recs[rec].front_edge = None;
            } else {
                self.out.recs[rec].back_edge = None;
            }
            self.edges[e].out_rec = None;
        }
    }

    pub(crate) fn swap_outrecs(&mut self, e1: usize, e2: usize) {
        let or1 = self.edges[e1].out_rec;
        let or2 = self.edges[e2].out_rec;
        if or1 == or2 {
            if let Some(rec) = or1 {
                let out_rec = &mut self.out.recs[rec];
                std::mem::swap(&mut out_rec.front_edge, &mut out_rec.back_edge);
            }
            return;
        }

        if let Some(rec) = or1 {
            let out_rec = &mut self.out.recs[rec];
            if out_rec.front_edge == Some(e1) {
                out_rec.front_edge = Some(e2);
            } else {
                out_rec.back_edge = Some(e2);
            }
        }
        if let Some(rec) = or2 {
            let out_rec = &mut self.out.recs[rec];
            if out_rec.front_edge == Some(e2) {
                out_rec.front_edge = Some(e1);
            } else {
                out_rec.back_edge = Some(e1);
            }
        }
        self.edges[e1].out_rec = or2;
        self.edges[e2].out_rec = or1;
    }

    pub(crate) fn delete_from_ael(&mut self, e: usize) {
        let prev = self.edges[e].prev_in_ael;
        let next = self.edges[e].next_in_ael;
        if prev.is_none() && next.is_none() && self.actives != Some(e) {
            return;
        }

        match prev {
            Some(prev) => self.edges[prev].next_in_ael = next,
            None => self.actives = next,
        }
        if let Some(next) = next {
            self.edges[next].prev_in_ael = prev;
        }
        self.edges[e].prev_in_ael = None;
        self.edges[e].next_in_ael = None;
    }

    /// Swaps two AEL neighbours, in whichever order they are given.
    pub(crate) fn swap_positions_in_ael(&mut self, e1: usize, e2: usize) {
        let (left, right) = if self.edges[e1].next_in_ael == Some(e2) {
            (e1, e2)
        } else if self.edges[e2].next_in_ael == Some(e1) {
            (e2, e1)
        } else {
            return;
        };

        let next = self.edges[right].next_in_ael;
        if let Some(next) = next {
            self.edges[next].prev_in_ael = Some(left);
        }
        let prev = self.edges[left].prev_in_ael;
        match prev {
            Some(prev) => self.edges[prev].next_in_ael = Some(right),
            None => self.actives = Some(right),
        }
        self.edges[right].prev_in_ael = prev;
        self.edges[right].next_in_ael = Some(left);
        self.edges[left].prev_in_ael = Some(right);
        self.edges[left].next_in_ael = next;
    }

    pub(crate) fn update_edge_into_ael(&mut self, e: usize) {
        let vertex_top = self.next_vertex(e);
        let edge = &mut self.edges[e];
        edge.bot = edge.top;
        edge.vertex_top = vertex_top;
        edge.top = self.vertices[vertex_top].pt;
        edge.curr_x = edge.bot.x;
        edge.update_dx();

        if edge.is_horizontal() {
            if !edge.is_open {
                self.trim_horz(e);
            }
            return;
        }

        let top_y = edge.top.y;
        self.scanbeam.insert(top_y);
    }

    /// Skips collinear horizontal vertices. With `preserve_collinear` only
    /// 180 degree spikes are skipped.
    pub(crate) fn trim_horz(&mut self, e: usize) {
        let mut was_trimmed = false;
        let mut pt = self.vertices[self.next_vertex(e)].pt;

        while pt.y == self.edges[e].top.y {
            let edge = &self.edges[e];
            if self.preserve_collinear && (pt.x < edge.top.x) != (edge.bot.x < edge.top.x) {
                break;
            }

            let vertex_top = self.next_vertex(e);
            self.edges[e].vertex_top = vertex_top;
            self.edges[e].top = pt;
            was_trimmed = true;
            if self.is_maxima(e) {
                break;
            }
            pt = self.vertices[self.next_vertex(e)].pt;
        }

        if was_trimmed {
            self.edges[e].update_dx();
        }
    }

    fn process_edges_at_top_of_scanbeam(&mut self, y: i64) -> SweepResult<()> {
        let mut current = self.actives;
        while let Some(e) = current {
            if self.edges[e].top.y == y {
                self.edges[e].curr_x = self.edges[e].top.x;
                if self.is_maxima(e) {
                    current = self.do_maxima(e)?;
                    continue;
                }

                if self.edges[e].is_hot() {
                    let top = self.edges[e].top;
                    self.add_out_pt(e, top)?;
                }
                self.update_edge_into_ael(e);
                if self.edges[e].is_horizontal() {
                    self.horizontals.push(e);
                }
            } else {
                self.edges[e].curr_x = self.edges[e].top_x(y);
            }

            current = self.edges[e].next_in_ael;
        }

        Ok(())
    }

    fn do_maxima(&mut self, e: usize) -> SweepResult<Option<usize>> {
        let prev_e = self.edges[e].prev_in_ael;
        let mut next_e = self.edges[e].next_in_ael;
        let top = self.edges[e].top;

        if self.is_open_end(e) {
            if self.edges[e].is_hot() {
                self.add_out_pt(e, top)?;
            }
            if !self.edges[e].is_horizontal() {
                self.release_open_edge(e);
                self.delete_from_ael(e);
            }
            return Ok(next_e);
        }

        let max_pair = match self.get_maxima_pair(e) {
            Some(pair) => pair,
            None => return Ok(next_e),
        };

        while let Some(next) = next_e {
            if next == max_pair {
                break;
            }
            self.intersect_edges(e, next, top)?;
            self.swap_positions_in_ael(e, next);
            next_e = self.edges[e].next_in_ael;
        }

        if self.edges[e].is_hot() {
            self.add_local_max_poly(e, max_pair, top)?;
        }
        self.delete_from_ael(e);
        self.delete_from_ael(max_pair);

        Ok(match prev_e {
            Some(prev) => self.edges[prev].next_in_ael,
            None => self.actives,
        })
    }

    fn get_maxima_pair(&self, e: usize) -> Option<usize> {
        let vertex_top = self.edges[e].vertex_top;
        let mut cursor = self.edges[e].next_in_ael;
        while let Some(index) = cursor {
            if self.edges[index].vertex_top == vertex_top {
                return Some(index);
            }
            cursor = self.edges[index].next_in_ael;
        }
        None
    }
}

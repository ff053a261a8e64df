use crate::clipper::enums::{ClipType, PolyFillType, PolyType};
use crate::clipper::intersect_node::IntersectNode;
use crate::clipper::sweep::{SweepResult, SweepState};
use crate::clipper::vertex::VertexFlags;
use crate::error::InvariantViolation;
use crate::geometry::point::Point;
use crate::utils::round::ClipperRound;

const STEEP_DX: f64 = 100.0;

impl<'a> SweepState<'a> {
    pub(crate) fn intersect_edges(&mut self, e1: usize, e2: usize, pt: Point<i64>) -> SweepResult<()> {
        if self.has_open_paths && (self.edges[e1].is_open || self.edges[e2].is_open) {
            return self.intersect_open_edge(e1, e2, pt);
        }

        let fill_type = self.fill_type;
        let e1_dx = self.edges[e1].wind_dx;
        let e2_dx = self.edges[e2].wind_dx;

        if self.edges[e1].poly_type == self.edges[e2].poly_type {
            if fill_type == PolyFillType::EvenOdd {
                let old = self.edges[e1].wind_cnt;
                self.edges[e1].wind_cnt = self.edges[e2].wind_cnt;
                self.edges[e2].wind_cnt = old;
            } else {
                let edge1 = &mut self.edges[e1];
                if edge1.wind_cnt + e2_dx == 0 {
                    edge1.wind_cnt = -edge1.wind_cnt;
                } else {
                    edge1.wind_cnt += e2_dx;
                }
                let edge2 = &mut self.edges[e2];
                if edge2.wind_cnt - e1_dx == 0 {
                    edge2.wind_cnt = -edge2.wind_cnt;
                } else {
                    edge2.wind_cnt -= e1_dx;
                }
            }
        } else if fill_type != PolyFillType::EvenOdd {
            self.edges[e1].wind_cnt2 += e2_dx;
            self.edges[e2].wind_cnt2 -= e1_dx;
        } else {
            for e in [e1, e2] {
                let edge = &mut self.edges[e];
                edge.wind_cnt2 = if edge.wind_cnt2 == 0 { 1 } else { 0 };
            }
        }

        let (e1_wc, e2_wc) = self.oriented_counts(self.edges[e1].wind_cnt, self.edges[e2].wind_cnt);
        let e1_in_01 = e1_wc == 0 || e1_wc == 1;
        let e2_in_01 = e2_wc == 0 || e2_wc == 1;
        let e1_hot = self.edges[e1].is_hot();
        let e2_hot = self.edges[e2].is_hot();

        if (!e1_hot && !e1_in_01) || (!e2_hot && !e2_in_01) {
            return Ok(());
        }

        if e1_hot && e2_hot {
            let same_type = self.edges[e1].poly_type == self.edges[e2].poly_type;
            if !e1_in_01 || !e2_in_01 || (!same_type && self.clip_type != ClipType::Xor) {
                self.add_local_max_poly(e1, e2, pt)?;
            } else if self.is_front(e1) || self.edges[e1].out_rec == self.edges[e2].out_rec {
                // Touching at a vertex: close here and reopen as a new contour.
                self.add_local_max_poly(e1, e2, pt)?;
                self.add_local_min_poly(e1, e2, pt, false)?;
            } else {
                self.add_out_pt(e1, pt)?;
                self.add_out_pt(e2, pt)?;
                self.swap_outrecs(e1, e2);
            }
            return Ok(());
        }

        if e1_hot {
            self.add_out_pt(e1, pt)?;
            self.swap_outrecs(e1, e2);
            return Ok(());
        }

        if e2_hot {
            self.add_out_pt(e2, pt)?;
            self.swap_outrecs(e1, e2);
            return Ok(());
        }

        // Neither edge is hot.
        let (e1_wc2, e2_wc2) =
            self.oriented_counts(self.edges[e1].wind_cnt2, self.edges[e2].wind_cnt2);

        if self.edges[e1].poly_type != self.edges[e2].poly_type {
            self.add_local_min_poly(e1, e2, pt, false)?;
        } else if e1_wc == 1 && e2_wc == 1 {
            let starts = match self.clip_type {
                ClipType::Union => e1_wc2 <= 0 && e2_wc2 <= 0,
                ClipType::Difference => match self.edges[e1].poly_type {
                    PolyType::Clip => e1_wc2 > 0 && e2_wc2 > 0,
                    PolyType::Subject => e1_wc2 <= 0 && e2_wc2 <= 0,
                },
                ClipType::Xor => true,
                ClipType::Intersection => e1_wc2 > 0 && e2_wc2 > 0,
            };
            if starts {
                self.add_local_min_poly(e1, e2, pt, false)?;
            }
        }

        Ok(())
    }

    /// Winding counts as seen by the fill rule: absolute for EvenOdd and
    /// NonZero, negated for Negative.
    fn oriented_counts(&self, c1: i32, c2: i32) -> (i32, i32) {
        match self.fill_type {
            PolyFillType::EvenOdd | PolyFillType::NonZero => (c1.abs(), c2.abs()),
            PolyFillType::Positive => (c1, c2),
            PolyFillType::Negative => (-c1, -c2),
        }
    }

    fn intersect_open_edge(&mut self, e1: usize, e2: usize, pt: Point<i64>) -> SweepResult<()> {
        if self.edges[e1].is_open && self.edges[e2].is_open {
            return Ok(());
        }

        let (edge_o, edge_c) = if self.edges[e1].is_open {
            (e1, e2)
        } else {
            (e2, e1)
        };

        let closed = &self.edges[edge_c];
        match self.clip_type {
            ClipType::Union => {
                if !closed.is_hot() {
                    return Ok(());
                }
            }
            _ => {
                if closed.poly_type == PolyType::Subject {
                    return Ok(());
                }
            }
        }

        let wind_cnt = closed.wind_cnt;
        let inside = match self.fill_type {
            PolyFillType::Positive => wind_cnt == 1,
            PolyFillType::Negative => wind_cnt == -1,
            _ => wind_cnt.abs() == 1,
        };
        if !inside {
            return Ok(());
        }

        if self.edges[edge_o].is_hot() {
            self.add_out_pt(edge_o, pt)?;
            self.release_open_edge(edge_o);
            return Ok(());
        }

        let local_min = self.minima[self.edges[edge_o].local_min].vertex;
        let min_vertex = &self.vertices[local_min];
        let at_open_end = min_vertex
            .flags
            .contains(VertexFlags::OPEN_START | VertexFlags::OPEN_END);

        if pt == min_vertex.pt && !at_open_end {
            // A horizontal passed under the open path's minimum: join the other side.
            if let Some(e3) = self.find_edge_with_matching_loc_min(edge_o) {
                if let Some(rec) = self.edges[e3].out_rec {
                    self.edges[edge_o].out_rec = Some(rec);
                    let out_rec = &mut self.out.recs[rec];
                    if self.edges[edge_o].wind_dx > 0 {
                        out_rec.front_edge = Some(edge_o);
                        out_rec.back_edge = Some(e3);
                    } else {
                        out_rec.front_edge = Some(e3);
                        out_rec.back_edge = Some(edge_o);
                    }
                    return Ok(());
                }
            }
        }

        self.start_open_path(edge_o, pt);
        Ok(())
    }

    fn find_edge_with_matching_loc_min(&self, e: usize) -> Option<usize> {
        let local_min = self.edges[e].local_min;
        let bot = self.edges[e].bot;

        let mut cursor = self.edges[e].next_in_ael;
        while let Some(index) = cursor {
            let other = &self.edges[index];
            if other.local_min == local_min {
                return Some(index);
            }
            if !other.is_horizontal() && other.bot != bot {
                break;
            }
            cursor = other.next_in_ael;
        }

        cursor = self.edges[e].prev_in_ael;
        while let Some(index) = cursor {
            let other = &self.edges[index];
            if other.local_min == local_min {
                return Some(index);
            }
            if !other.is_horizontal() && other.bot != bot {
                return None;
            }
            cursor = other.prev_in_ael;
        }

        None
    }

    pub(crate) fn process_intersections(&mut self, top_y: i64) -> SweepResult<()> {
        if self.build_intersect_list(top_y) {
            let result = self.process_intersect_list();
            self.intersections.clear();
            result?;
        }
        Ok(())
    }

    /// Stable bottom-up merge sort of the AEL by X at `top_y`; every
    /// inversion it removes is an intersection between adjacent edges.
    fn build_intersect_list(&mut self, top_y: i64) -> bool {
        let first = match self.actives {
            Some(first) if self.edges[first].next_in_ael.is_some() => first,
            _ => return false,
        };

        let mut sorted: Vec<usize> = Vec::new();
        let mut cursor = Some(first);
        while let Some(e) = cursor {
            let x = self.edges[e].top_x(top_y);
            self.edges[e].curr_x = x;
            sorted.push(e);
            cursor = self.edges[e].next_in_ael;
        }

        let count = sorted.len();
        let mut buffer: Vec<usize> = Vec::with_capacity(count);
        let mut width = 1;
        while width < count {
            let mut lo = 0;
            while lo + width < count {
                let mid = lo + width;
                let hi = (mid + width).min(count);
                buffer.clear();
                let (mut l, mut r) = (lo, mid);
                while l < mid && r < hi {
                    if self.edges[sorted[r]].curr_x < self.edges[sorted[l]].curr_x {
                        for k in (l..mid).rev() {
                            self.add_new_intersect_node(sorted[k], sorted[r], top_y);
                        }
                        buffer.push(sorted[r]);
                        r += 1;
                    } else {
                        buffer.push(sorted[l]);
                        l += 1;
                    }
                }
                buffer.extend_from_slice(&sorted[l..mid]);
                buffer.extend_from_slice(&sorted[r..hi]);
                sorted[lo..hi].copy_from_slice(&buffer);
                lo = hi;
            }
            width *= 2;
        }

        !self.intersections.is_empty()
    }

    fn add_new_intersect_node(&mut self, e1: usize, e2: usize, top_y: i64) {
        let edge1 = &self.edges[e1];
        let edge2 = &self.edges[e2];
        let mut ip = get_segment_intersect_pt(edge1.bot, edge1.top, edge2.bot, edge2.top)
            .unwrap_or_else(|| Point::new(edge1.curr_x, top_y));

        if ip.y > self.bot_y || ip.y < top_y {
            let abs_dx1 = edge1.dx.abs();
            let abs_dx2 = edge2.dx.abs();
            if abs_dx1 > STEEP_DX && abs_dx2 > STEEP_DX {
                ip = if abs_dx1 > abs_dx2 {
                    get_closest_point_on_segment(ip, edge1.bot, edge1.top)
                } else {
                    get_closest_point_on_segment(ip, edge2.bot, edge2.top)
                };
            } else if abs_dx1 > STEEP_DX {
                ip = get_closest_point_on_segment(ip, edge1.bot, edge1.top);
            } else if abs_dx2 > STEEP_DX {
                ip = get_closest_point_on_segment(ip, edge2.bot, edge2.top);
            } else {
                ip.y = if ip.y < top_y { top_y } else { self.bot_y };
                ip.x = if abs_dx1 < abs_dx2 {
                    edge1.top_x(ip.y)
                } else {
                    edge2.top_x(ip.y)
                };
            }
        }

        self.intersections.push(IntersectNode::new(e1, e2, ip));
    }

    fn edges_adjacent_in_ael(&self, node: &IntersectNode) -> bool {
        self.edges[node.edge1].next_in_ael == Some(node.edge2)
            || self.edges[node.edge1].prev_in_ael == Some(node.edge2)
    }

    fn process_intersect_list(&mut self) -> SweepResult<()> {
        self.intersections.sort_by(|a, b| a.sweep_order(b));

        for i in 0..self.intersections.len() {
            if !self.edges_adjacent_in_ael(&self.intersections[i]) {
                let j = (i + 1..self.intersections.len())
                    .find(|&j| self.edges_adjacent_in_ael(&self.intersections[j]))
                    .ok_or(InvariantViolation::EdgesNotAdjacent)?;
                self.intersections.swap(i, j);
            }

            let node = self.intersections[i];
            self.intersect_edges(node.edge1, node.edge2, node.pt)?;
            self.swap_positions_in_ael(node.edge1, node.edge2);
            self.edges[node.edge1].curr_x = node.pt.x;
            self.edges[node.edge2].curr_x = node.pt.x;
        }

        Ok(())
    }
}

/// Intersection of the lines through both segments, clamped to the first
/// segment. `None` for parallel segments.
pub fn get_segment_intersect_pt(
    ln1a: Point<i64>,
    ln1b: Point<i64>,
    ln2a: Point<i64>,
    ln2b: Point<i64>,
) -> Option<Point<i64>> {
    let dx1 = (ln1b.x - ln1a.x) as f64;
    let dy1 = (ln1b.y - ln1a.y) as f64;
    let dx2 = (ln2b.x - ln2a.x) as f64;
    let dy2 = (ln2b.y - ln2a.y) as f64;

    let det = dy1 * dx2 - dy2 * dx1;
    if det == 0.0 {
        return None;
    }

    let t = ((ln1a.x - ln2a.x) as f64 * dy2 - (ln1a.y - ln2a.y) as f64 * dx2) / det;
    if t <= 0.0 {
        Some(ln1a)
    } else if t >= 1.0 {
        Some(ln1b)
    } else {
        Some(Point::new(
            ln1a.x + (t * dx1).clipper_rounded() as i64,
            ln1a.y + (t * dy1).clipper_rounded() as i64,
        ))
    }
}

pub fn get_closest_point_on_segment(
    off_pt: Point<i64>,
    seg1: Point<i64>,
    seg2: Point<i64>,
) -> Point<i64> {
    if seg1 == seg2 {
        return seg1;
    }

    let dx = (seg2.x - seg1.x) as f64;
    let dy = (seg2.y - seg1.y) as f64;
    let q = ((off_pt.x - seg1.x) as f64 * dx + (off_pt.y - seg1.y) as f64 * dy) / (dx * dx + dy * dy);
    let q = q.clamp(0.0, 1.0);

    Point::new(
        seg1.x + (q * dx).clipper_rounded() as i64,
        seg1.y + (q * dy).clipper_rounded() as i64,
    )
}

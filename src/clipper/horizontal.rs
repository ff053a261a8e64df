use crate::clipper::enums::Direction;
use crate::clipper::sweep::{SweepResult, SweepState};
use crate::clipper::vertex::VertexFlags;
use crate::geometry::point::Point;

impl<'a> SweepState<'a> {
    /// Sweeps a horizontal edge, and the horizontals chained to it in its
    /// bound, across the edges it passes at its Y.
    pub(crate) fn process_horizontal(&mut self, horz: usize) -> SweepResult<()> {
        let horz_is_open = self.edges[horz].is_open;
        let y = self.edges[horz].bot.y;
        let vertex_max = if horz_is_open {
            self.curr_y_maxima_vertex_open(horz)
        } else {
            self.curr_y_maxima_vertex(horz)
        };

        if let Some(max) = vertex_max {
            if !horz_is_open && max != self.edges[horz].vertex_top {
                self.trim_horz(horz);
            }
        }

        let (mut direction, mut horz_left, mut horz_right) =
            self.reset_horz_direction(horz, vertex_max);

        if self.edges[horz].is_hot() {
            let pt = Point::new(self.edges[horz].curr_x, y);
            self.add_out_pt(horz, pt)?;
        }

        loop {
            let mut cursor = match direction {
                Direction::Right => self.edges[horz].next_in_ael,
                Direction::Left => self.edges[horz].prev_in_ael,
            };

            while let Some(e) = cursor {
                if Some(self.edges[e].vertex_top) == vertex_max {
                    if self.edges[horz].is_hot() {
                        while Some(self.edges[horz].vertex_top) != vertex_max {
                            let top = self.edges[horz].top;
                            self.add_out_pt(horz, top)?;
                            self.update_edge_into_ael(horz);
                        }
                        let top = self.edges[horz].top;
                        match direction {
                            Direction::Right => self.add_local_max_poly(horz, e, top)?,
                            Direction::Left => self.add_local_max_poly(e, horz, top)?,
                        };
                    }
                    self.delete_from_ael(e);
                    self.delete_from_ael(horz);
                    return Ok(());
                }

                // A maximal horizontal runs until its pair; otherwise stop at the end.
                if vertex_max != Some(self.edges[horz].vertex_top) || self.is_open_end(horz) {
                    let curr_x = self.edges[e].curr_x;
                    if (direction == Direction::Right && curr_x > horz_right)
                        || (direction == Direction::Left && curr_x < horz_left)
                    {
                        break;
                    }

                    if curr_x == self.edges[horz].top.x && !self.edges[e].is_horizontal() {
                        let pt = self.vertices[self.next_vertex(horz)].pt;
                        let e_x = self.edges[e].top_x(pt.y);
                        let passes_open = self.edges[e].is_open
                            && self.edges[e].poly_type != self.edges[horz].poly_type
                            && !self.edges[e].is_hot();

                        let stop = match (direction, passes_open) {
                            (Direction::Right, true) => e_x > pt.x,
                            (Direction::Right, false) => e_x >= pt.x,
                            (Direction::Left, true) => e_x < pt.x,
                            (Direction::Left, false) => e_x <= pt.x,
                        };
                        if stop {
                            break;
                        }
                    }
                }

                let pt = Point::new(self.edges[e].curr_x, y);
                match direction {
                    Direction::Right => {
                        self.intersect_edges(horz, e, pt)?;
                        self.swap_positions_in_ael(horz, e);
                        self.edges[horz].curr_x = self.edges[e].curr_x;
                        cursor = self.edges[horz].next_in_ael;
                    }
                    Direction::Left => {
                        self.intersect_edges(e, horz, pt)?;
                        self.swap_positions_in_ael(e, horz);
                        self.edges[horz].curr_x = self.edges[e].curr_x;
                        cursor = self.edges[horz].prev_in_ael;
                    }
                }
            }

            if horz_is_open && self.is_open_end(horz) {
                if self.edges[horz].is_hot() {
                    let top = self.edges[horz].top;
                    self.add_out_pt(horz, top)?;
                    self.release_open_edge(horz);
                }
                self.delete_from_ael(horz);
                return Ok(());
            }

            if self.vertices[self.next_vertex(horz)].pt.y != self.edges[horz].top.y {
                break;
            }

            // More horizontals follow in this bound.
            if self.edges[horz].is_hot() {
                let top = self.edges[horz].top;
                self.add_out_pt(horz, top)?;
            }
            self.update_edge_into_ael(horz);

            (direction, horz_left, horz_right) = self.reset_horz_direction(horz, vertex_max);
        }

        if self.edges[horz].is_hot() {
            let top = self.edges[horz].top;
            self.add_out_pt(horz, top)?;
        }
        self.update_edge_into_ael(horz);

        Ok(())
    }

    fn curr_y_maxima_vertex(&self, e: usize) -> Option<usize> {
        let mut result = self.edges[e].vertex_top;
        let y = self.vertices[result].pt.y;
        let forward = self.edges[e].wind_dx > 0;
        let mut steps = 0;

        loop {
            let vertex = &self.vertices[result];
            let next = if forward { vertex.next } else { vertex.prev };
            if self.vertices[next].pt.y != y || steps > self.vertices.len() {
                break;
            }
            result = next;
            steps += 1;
        }

        self.vertices[result]
            .flags
            .contains(VertexFlags::LOCAL_MAX)
            .then_some(result)
    }

    fn curr_y_maxima_vertex_open(&self, e: usize) -> Option<usize> {
        let mut result = self.edges[e].vertex_top;
        let y = self.vertices[result].pt.y;
        let forward = self.edges[e].wind_dx > 0;
        let stop_flags = VertexFlags::OPEN_END | VertexFlags::LOCAL_MAX;
        let mut steps = 0;

        loop {
            let vertex = &self.vertices[result];
            let next = if forward { vertex.next } else { vertex.prev };
            if self.vertices[next].pt.y != y
                || vertex.flags.contains(stop_flags)
                || steps > self.vertices.len()
            {
                break;
            }
            result = next;
            steps += 1;
        }

        self.vertices[result]
            .flags
            .contains(VertexFlags::LOCAL_MAX)
            .then_some(result)
    }

    fn reset_horz_direction(&self, horz: usize, vertex_max: Option<usize>) -> (Direction, i64, i64) {
        let edge = &self.edges[horz];
        if edge.bot.x == edge.top.x {
            let mut cursor = edge.next_in_ael;
            while let Some(e) = cursor {
                if Some(self.edges[e].vertex_top) == vertex_max {
                    break;
                }
                cursor = self.edges[e].next_in_ael;
            }
            let direction = if cursor.is_some() {
                Direction::Right
            } else {
                Direction::Left
            };
            return (direction, edge.curr_x, edge.curr_x);
        }

        if edge.curr_x < edge.top.x {
            (Direction::Right, edge.curr_x, edge.top.x)
        } else {
            (Direction::Left, edge.top.x, edge.curr_x)
        }
    }
}

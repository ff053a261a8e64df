use crate::clipper::out_pt::OutPt;
use crate::error::InvariantViolation;
use crate::geometry::point::Point;
use crate::geometry::Path64;

/// An output contour under construction.
///
/// `pts` points at the front of the ring; `pts.next` is the back. A record
/// whose `pts` is `None` has been merged into another one and only survives
/// as a link in owner chains.
#[derive(Debug, Clone, Default)]
pub struct OutRec {
    pub owner: Option<usize>,
    pub front_edge: Option<usize>,
    pub back_edge: Option<usize>,
    pub pts: Option<usize>,
    pub is_open: bool,
}

#[derive(Debug, Default)]
pub struct OutRecList {
    pub recs: Vec<OutRec>,
    pub points: Vec<OutPt>,
}

impl OutRecList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_out_rec(&mut self) -> usize {
        self.recs.push(OutRec::default());
        self.recs.len() - 1
    }

    pub fn new_out_pt(&mut self, pt: Point<i64>) -> usize {
        let index = self.points.len();
        self.points.push(OutPt::single(pt, index));
        index
    }

    pub fn len(&self) -> usize {
        self.recs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recs.is_empty()
    }

    pub fn pts(&self, rec: usize) -> Result<usize, InvariantViolation> {
        self.recs[rec]
            .pts
            .ok_or(InvariantViolation::DanglingIndex(rec))
    }

    /// Adds `pt` to the front or back of `rec`'s ring, skipping a point equal
    /// to the one already at that end. Returns the point now at that end.
    pub fn insert_point(
        &mut self,
        rec: usize,
        pt: Point<i64>,
        to_front: bool,
    ) -> Result<usize, InvariantViolation> {
        let op_front = self.pts(rec)?;
        let op_back = self.points[op_front].next;

        if to_front && self.points[op_front].pt == pt {
            return Ok(op_front);
        }
        if !to_front && self.points[op_back].pt == pt {
            return Ok(op_back);
        }

        let new_op = self.points.len();
        self.points.push(OutPt {
            pt,
            next: op_back,
            prev: op_front,
        });
        self.points[op_back].prev = new_op;
        self.points[op_front].next = new_op;
        if to_front {
            self.recs[rec].pts = Some(new_op);
        }

        Ok(new_op)
    }

    pub fn swap_front_back_sides(&mut self, rec: usize) -> Result<(), InvariantViolation> {
        let op = self.pts(rec)?;
        let out_rec = &mut self.recs[rec];
        std::mem::swap(&mut out_rec.front_edge, &mut out_rec.back_edge);
        out_rec.pts = Some(self.points[op].next);
        Ok(())
    }

    pub fn real_owner(&self, rec: Option<usize>) -> Option<usize> {
        let mut current = rec;
        let mut steps = 0;
        while let Some(index) = current {
            if self.recs[index].pts.is_some() || steps > self.recs.len() {
                break;
            }
            current = self.recs[index].owner;
            steps += 1;
        }
        current
    }

    /// Makes `new_owner` the owner of `rec`, detaching `new_owner` from
    /// `rec`'s subtree first so the chain stays acyclic.
    pub fn set_owner(&mut self, rec: usize, new_owner: usize) -> Result<(), InvariantViolation> {
        if rec == new_owner {
            return Err(InvariantViolation::OwnerCycle);
        }

        let mut steps = 0;
        while let Some(owner) = self.recs[new_owner].owner {
            if self.recs[owner].pts.is_some() {
                break;
            }
            self.recs[new_owner].owner = self.recs[owner].owner;
            steps += 1;
            if steps > self.recs.len() {
                return Err(InvariantViolation::OwnerCycle);
            }
        }

        let mut tmp = Some(new_owner);
        steps = 0;
        while let Some(index) = tmp {
            if index == rec {
                break;
            }
            tmp = self.recs[index].owner;
            steps += 1;
            if steps > self.recs.len() {
                return Err(InvariantViolation::OwnerCycle);
            }
        }
        if tmp.is_some() {
            self.recs[new_owner].owner = self.recs[rec].owner;
        }
        self.recs[rec].owner = Some(new_owner);

        self.check_owner_chain(rec)
    }

    fn check_owner_chain(&self, rec: usize) -> Result<(), InvariantViolation> {
        let mut current = self.recs[rec].owner;
        let mut steps = 0;
        while let Some(index) = current {
            if index == rec || steps > self.recs.len() {
                return Err(InvariantViolation::OwnerCycle);
            }
            current = self.recs[index].owner;
            steps += 1;
        }
        Ok(())
    }

    pub fn build_path(&self, rec: usize, reverse: bool) -> Option<Path64> {
        let out_rec = &self.recs[rec];
        let op = out_rec.pts?;
        let first = &self.points[op];
        if first.next == op || (!out_rec.is_open && first.next == first.prev) {
            return None;
        }

        let start = if reverse { op } else { first.next };
        let mut result: Path64 = vec![self.points[start].pt];
        let mut current = if reverse {
            self.points[start].prev
        } else {
            self.points[start].next
        };

        let mut steps = 0;
        while current != start && steps < self.points.len() {
            steps += 1;
            let pt = self.points[current].pt;
            if result.last() != Some(&pt) {
                result.push(pt);
            }
            current = if reverse {
                self.points[current].prev
            } else {
                self.points[current].next
            };
        }

        Some(result)
    }
}

use crate::clipper::constants::{HORIZONTAL_LEFT, HORIZONTAL_RIGHT};
use crate::clipper::enums::{ClipType, PolyFillType, PolyType};
use crate::geometry::point::Point;
use crate::utils::round::ClipperRound;

/// An edge currently crossing the scanline.
///
/// `wind_dx` is +1 for the ascending bound of a local minimum and -1 for the
/// descending one; it is the direction of the *input* path, not of output.
#[derive(Debug, Clone)]
pub struct TEdge {
    pub bot: Point<i64>,
    pub top: Point<i64>,
    pub curr_x: i64,
    pub dx: f64,
    pub wind_dx: i32,
    pub wind_cnt: i32,
    pub wind_cnt2: i32,
    pub out_rec: Option<usize>,
    pub prev_in_ael: Option<usize>,
    pub next_in_ael: Option<usize>,
    pub vertex_top: usize,
    pub local_min: usize,
    pub poly_type: PolyType,
    pub is_open: bool,
    pub is_left_bound: bool,
}

impl TEdge {
    pub fn new(
        bot: Point<i64>,
        top: Point<i64>,
        vertex_top: usize,
        wind_dx: i32,
        local_min: usize,
        poly_type: PolyType,
        is_open: bool,
    ) -> Self {
        Self {
            bot,
            top,
            curr_x: bot.x,
            dx: get_dx(bot, top),
            wind_dx,
            wind_cnt: 0,
            wind_cnt2: 0,
            out_rec: None,
            prev_in_ael: None,
            next_in_ael: None,
            vertex_top,
            local_min,
            poly_type,
            is_open,
            is_left_bound: false,
        }
    }

    #[inline(always)]
    pub fn update_dx(&mut self) {
        self.dx = get_dx(self.bot, self.top);
    }

    #[inline(always)]
    pub fn is_hot(&self) -> bool {
        self.out_rec.is_some()
    }

    #[inline(always)]
    pub fn is_horizontal(&self) -> bool {
        self.top.y == self.bot.y
    }

    #[inline(always)]
    pub fn is_heading_right_horz(&self) -> bool {
        self.dx == HORIZONTAL_RIGHT
    }

    #[inline(always)]
    pub fn is_heading_left_horz(&self) -> bool {
        self.dx == HORIZONTAL_LEFT
    }

    pub fn top_x(&self, y: i64) -> i64 {
        if y == self.top.y || self.top.x == self.bot.x {
            return self.top.x;
        }
        if y == self.bot.y {
            return self.bot.x;
        }

        self.bot.x + (self.dx * (y - self.bot.y) as f64).clipper_rounded() as i64
    }

    pub fn is_contributing_closed(&self, clip_type: ClipType, fill_type: PolyFillType) -> bool {
        match fill_type {
            PolyFillType::EvenOdd => {}
            PolyFillType::NonZero => {
                if self.wind_cnt.abs() != 1 {
                    return false;
                }
            }
            PolyFillType::Positive => {
                if self.wind_cnt != 1 {
                    return false;
                }
            }
            PolyFillType::Negative => {
                if self.wind_cnt != -1 {
                    return false;
                }
            }
        }

        let outside_other = match fill_type {
            PolyFillType::Positive => self.wind_cnt2 <= 0,
            PolyFillType::Negative => self.wind_cnt2 >= 0,
            _ => self.wind_cnt2 == 0,
        };

        match clip_type {
            ClipType::Intersection => match fill_type {
                PolyFillType::Positive => self.wind_cnt2 > 0,
                PolyFillType::Negative => self.wind_cnt2 < 0,
                _ => self.wind_cnt2 != 0,
            },
            ClipType::Union => outside_other,
            ClipType::Difference => {
                if self.poly_type == PolyType::Subject {
                    outside_other
                } else {
                    !outside_other
                }
            }
            ClipType::Xor => true,
        }
    }

    pub fn is_contributing_open(&self, clip_type: ClipType, fill_type: PolyFillType) -> bool {
        let (in_clip, in_subj) = match fill_type {
            PolyFillType::Positive => (self.wind_cnt2 > 0, self.wind_cnt > 0),
            PolyFillType::Negative => (self.wind_cnt2 < 0, self.wind_cnt < 0),
            _ => (self.wind_cnt2 != 0, self.wind_cnt != 0),
        };

        match clip_type {
            ClipType::Intersection => in_clip,
            ClipType::Union => !in_subj && !in_clip,
            _ => !in_clip,
        }
    }
}

/// Inverse slope (dx/dy). Horizontal edges get a sentinel encoding their heading.
pub fn get_dx(bot: Point<i64>, top: Point<i64>) -> f64 {
    let dy = top.y - bot.y;
    if dy != 0 {
        (top.x - bot.x) as f64 / dy as f64
    } else if top.x > bot.x {
        HORIZONTAL_RIGHT
    } else {
        HORIZONTAL_LEFT
    }
}

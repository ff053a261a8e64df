use crate::utils::{almost_equal::AlmostEqual, round::ClipperRound};
use num_traits::{FromPrimitive, Num, Signed, ToPrimitive};
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar shared by integer sweep coordinates and float offset math.
pub trait Number:
    Num
    + Copy
    + Debug
    + PartialOrd
    + FromPrimitive
    + ToPrimitive
    + AlmostEqual
    + ClipperRound
    + Signed
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    fn min_num(self, other: Self) -> Self;
    fn max_num(self, other: Self) -> Self;
    fn as_f64(self) -> f64;
}

impl Number for f64 {
    #[inline(always)]
    fn min_num(self, other: Self) -> Self {
        self.min(other)
    }
    #[inline(always)]
    fn max_num(self, other: Self) -> Self {
        self.max(other)
    }
    #[inline(always)]
    fn as_f64(self) -> f64 {
        self
    }
}

impl Number for i64 {
    #[inline(always)]
    fn min_num(self, other: Self) -> Self {
        self.min(other)
    }
    #[inline(always)]
    fn max_num(self, other: Self) -> Self {
        self.max(other)
    }
    #[inline(always)]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

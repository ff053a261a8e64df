use crate::utils::number::Number;
use crate::utils::round::ClipperRound;
use std::ops::{Add, Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point<T: Number> {
    pub x: T,
    pub y: T,
}

impl<T: Number> Point<T> {
    #[inline(always)]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn scale_up(self, value: T) -> Self {
        Self::new(self.x * value, self.y * value)
    }

    #[inline(always)]
    pub fn scale_down(self, value: T) -> Self {
        Self::new(self.x / value, self.y / value)
    }

    /// Rotates a quarter turn: `(x, y) -> (y, -x)`.
    #[inline(always)]
    pub fn normal(self) -> Self {
        Self::new(self.y, -self.x)
    }

    #[inline(always)]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    #[inline(always)]
    pub fn cross(&self, other: &Self) -> T {
        self.y * other.x - self.x * other.y
    }

    #[inline(always)]
    pub fn length(&self) -> f64 {
        self.x.as_f64().hypot(self.y.as_f64())
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.x == T::zero() && self.y == T::zero()
    }

    #[inline(always)]
    pub fn to_f64(self) -> Point<f64> {
        Point::new(self.x.as_f64(), self.y.as_f64())
    }
}

impl Point<f64> {
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            self
        } else {
            self.scale_down(len)
        }
    }

    /// Snaps to the integer grid, rounding half away from zero.
    #[inline(always)]
    pub fn clipper_round(self) -> Point<i64> {
        Point::new(
            self.x.clipper_rounded() as i64,
            self.y.clipper_rounded() as i64,
        )
    }
}

impl<T: Number> Add for Point<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: Number> Sub for Point<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: Number> Neg for Point<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

use crate::constants::TOL_F64;

pub trait AlmostEqual<Rhs = Self> {
    fn almost_equal(self, other: Rhs, tolerance: Option<Rhs>) -> bool;

    fn almost_zero(self) -> bool;
}

impl AlmostEqual for f64 {
    fn almost_equal(self, other: f64, tolerance: Option<f64>) -> bool {
        let tol = tolerance.unwrap_or(TOL_F64);
        (self - other).abs() < tol
    }

    fn almost_zero(self) -> bool {
        self.abs() < TOL_F64
    }
}

impl AlmostEqual for i64 {
    fn almost_equal(self, other: i64, _tolerance: Option<i64>) -> bool {
        self == other
    }

    fn almost_zero(self) -> bool {
        self == 0
    }
}

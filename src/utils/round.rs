pub trait ClipperRound {
    /// Rounds half away from zero, the convention every output point follows.
    fn clipper_rounded(self) -> Self;
}

impl ClipperRound for f64 {
    fn clipper_rounded(self) -> Self {
        if self < 0.0 {
            (self - 0.5).ceil()
        } else {
            (self + 0.5).floor()
        }
    }
}

impl ClipperRound for i64 {
    fn clipper_rounded(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_away_from_zero() {
        assert_eq!(2.5f64.clipper_rounded(), 3.0);
        assert_eq!((-2.5f64).clipper_rounded(), -3.0);
        assert_eq!(2.49f64.clipper_rounded(), 2.0);
        assert_eq!((-2.49f64).clipper_rounded(), -2.0);
        assert_eq!(7i64.clipper_rounded(), 7);
    }
}

/// Largest accepted coordinate magnitude. Leaves headroom for cross products in `f64`/`i128`.
pub const MAX_COORD: i64 = i64::MAX >> 2;

pub const MIN_COORD: i64 = -MAX_COORD;

/// Slope sentinel of a horizontal edge heading towards +x.
pub const HORIZONTAL_RIGHT: f64 = -f64::MAX;

/// Slope sentinel of a horizontal edge heading towards -x.
pub const HORIZONTAL_LEFT: f64 = f64::MAX;

pub const DEFAULT_MITER_LIMIT: f64 = 2.0;

pub const DEFAULT_ARC_TOLERANCE: f64 = 0.25;

pub const OUTER_RECT_MARGIN: i64 = 10;

pub const FLOAT_TOLERANCE: f64 = 1e-12;

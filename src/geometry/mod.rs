pub mod bound_rect;
pub mod point;

use point::Point;

pub type Path64 = Vec<Point<i64>>;
pub type Paths64 = Vec<Path64>;

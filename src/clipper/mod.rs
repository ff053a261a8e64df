// Polygon Boolean operations (Vatti sweep) and path offsetting.

pub mod clipper;
pub mod clipper_offset;
pub mod constants;
pub mod enums;
pub mod horizontal;
pub mod intersect_node;
pub mod intersections;
pub mod local_minima;
pub mod out_pt;
pub mod out_rec;
pub mod poly_tree;
pub mod scanbeam;
pub mod sweep;
pub mod t_edge;
pub mod utils;
pub mod vertex;

#[cfg(test)]
mod tests;

pub use clipper::{Clipper, ClipperOptions, Solution};
pub use clipper_offset::{ClipperOffset, OffsetOptions};
pub use enums::*;
pub use poly_tree::{PolyPath, PolyTree};

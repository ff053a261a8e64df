pub mod almost_equal;
pub mod math;
pub mod number;
pub mod round;
pub mod wasm_logger;

pub mod errors;
pub mod math;

pub use primitive_types::{U256, U512};

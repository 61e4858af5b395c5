pub mod common;
pub mod ratio;
pub mod sizing;
pub mod validate;

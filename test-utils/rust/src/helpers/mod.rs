//! Testing helpers and utilities

pub mod assertions;

pub use assertions::{assert_approx_eq, ExpectRevertResultExt, RevertInfo};

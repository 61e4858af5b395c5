pub mod keeper_payout;
pub mod ratio_config;
pub mod reserve;
pub mod saviour;
pub mod structs;

pub use keeper_payout::*;
pub use ratio_config::*;
pub use reserve::*;
pub use saviour::*;
pub use structs::*;

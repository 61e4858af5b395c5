pub mod admin;
pub mod liquidation;
pub mod user;
pub mod view;

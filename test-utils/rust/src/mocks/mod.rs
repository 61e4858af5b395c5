//! In-memory stand-ins for the systems a saviour talks to.

pub mod collateral_join;
pub mod liquidation_engine;
pub mod operator;
pub mod oracle;
pub mod safe;
pub mod token;

pub use collateral_join::MockCollateralJoin;
pub use liquidation_engine::MockLiquidationEngine;
pub use operator::MockReserveOperator;
pub use oracle::{MockOracleRelayer, MockPriceFeed};
pub use safe::{MockSafeEngine, MockSafeManager};
pub use token::MockTokenLedger;

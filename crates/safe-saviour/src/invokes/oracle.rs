use std::sync::Arc;

use anchor_lang::prelude::*;

use super::Collaborator;
use crate::state::CollateralType;

/// Oracle reading for the collateral price, 18 decimals.
pub trait PriceFeed: Send + Sync {
    /// Returns `(price, is_valid)`. Never fails for a stale or missing price,
    /// callers inspect the flag instead.
    fn get_result_with_validity(&self) -> (u128, bool);
}

/// Per collateral type parameters published by the oracle relayer.
#[derive(Clone)]
pub struct CollateralTypeParams {
    pub price_feed: Arc<dyn PriceFeed>,
    pub safety_price: u128,
    /// Liquidation c-ratio as a RAY, 1.45e27 for 145%
    pub liquidation_c_ratio: u128,
}

pub trait OracleRelayer: Collaborator {
    fn collateral_type(&self, collateral_type: &CollateralType) -> Result<CollateralTypeParams>;

    /// Redemption price of system coins, 27 decimals
    fn redemption_price(&self) -> Result<u128>;
}

/// A price that can be used in sizing math.
///
/// `None` for an invalid or zero reading.
pub fn usable_price(feed: &dyn PriceFeed) -> Option<u128> {
    match feed.get_result_with_validity() {
        (price, true) if price > 0 => Some(price),
        _ => None,
    }
}

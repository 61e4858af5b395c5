use std::sync::{Arc, RwLock};

use anchor_lang::prelude::*;
use tracing::debug;

use safe_saviour::{
    invokes::{Collaborator, CollateralTypeParams, OracleRelayer, PriceFeed},
    CollateralType,
};

#[derive(Debug)]
pub struct MockPriceFeed {
    reading: RwLock<(u128, bool)>,
}

impl MockPriceFeed {
    pub fn new(price: u128) -> Self {
        Self {
            reading: RwLock::new((price, true)),
        }
    }

    pub fn set_price(&self, price: u128) {
        if let Ok(mut reading) = self.reading.write() {
            *reading = (price, true);
        }
        debug!(price, "price feed updated");
    }

    pub fn set_valid(&self, is_valid: bool) {
        if let Ok(mut reading) = self.reading.write() {
            reading.1 = is_valid;
        }
    }
}

impl PriceFeed for MockPriceFeed {
    fn get_result_with_validity(&self) -> (u128, bool) {
        self.reading.read().map(|reading| *reading).unwrap_or((0, false))
    }
}

/// Relayer serving a single price feed for every collateral type.
pub struct MockOracleRelayer {
    key: Pubkey,
    price_feed: Arc<MockPriceFeed>,
    liquidation_c_ratio: RwLock<u128>,
    redemption_price: RwLock<u128>,
}

impl MockOracleRelayer {
    pub fn new(
        key: Pubkey,
        price_feed: Arc<MockPriceFeed>,
        liquidation_c_ratio: u128,
        redemption_price: u128,
    ) -> Self {
        Self {
            key,
            price_feed,
            liquidation_c_ratio: RwLock::new(liquidation_c_ratio),
            redemption_price: RwLock::new(redemption_price),
        }
    }

    pub fn set_liquidation_c_ratio(&self, liquidation_c_ratio: u128) {
        if let Ok(mut ratio) = self.liquidation_c_ratio.write() {
            *ratio = liquidation_c_ratio;
        }
    }

    pub fn set_redemption_price(&self, redemption_price: u128) {
        if let Ok(mut price) = self.redemption_price.write() {
            *price = redemption_price;
        }
    }
}

impl Collaborator for MockOracleRelayer {
    fn key(&self) -> Pubkey {
        self.key
    }
}

impl OracleRelayer for MockOracleRelayer {
    fn collateral_type(&self, _collateral_type: &CollateralType) -> Result<CollateralTypeParams> {
        let (price, _) = self.price_feed.get_result_with_validity();
        let liquidation_c_ratio = self
            .liquidation_c_ratio
            .read()
            .map(|ratio| *ratio)
            .unwrap_or_default();

        Ok(CollateralTypeParams {
            price_feed: self.price_feed.clone(),
            safety_price: price,
            liquidation_c_ratio,
        })
    }

    fn redemption_price(&self) -> Result<u128> {
        Ok(self
            .redemption_price
            .read()
            .map(|price| *price)
            .unwrap_or_default())
    }
}

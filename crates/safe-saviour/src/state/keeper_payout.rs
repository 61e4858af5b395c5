use anchor_lang::prelude::*;

use crate::errors::ErrorCodes;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeeperPayoutConfig {
    pub keeper_payout: u128,           // Collateral token units
    pub min_keeper_payout_value: u128, // USD, 1e18
    pub payout_to_safe_size: u128,
}

impl KeeperPayoutConfig {
    pub fn new(
        keeper_payout: u128,
        min_keeper_payout_value: u128,
        payout_to_safe_size: u128,
    ) -> Result<Self> {
        if keeper_payout == 0 {
            return Err(error!(ErrorCodes::SaviourInvalidKeeperPayout));
        }

        if min_keeper_payout_value == 0 {
            return Err(error!(ErrorCodes::SaviourInvalidMinPayoutValue));
        }

        if payout_to_safe_size == 0 {
            return Err(error!(ErrorCodes::SaviourInvalidPayoutToSafeSize));
        }

        Ok(Self {
            keeper_payout,
            min_keeper_payout_value,
            payout_to_safe_size,
        })
    }
}

//! Collateralization ratio math.
//!
//! Ratios are integer percentages. The liquidation ratio is carried as
//! percent ×10 so that a relayer c-ratio of 1.45e27 becomes 1450.

use std::cmp::Ordering;

use anchor_lang::prelude::*;

use library::math::u256::{compare_products, wide_ratio_floor};

use crate::{
    constants::{CRATIO_SCALE_DOWN, HUNDRED, MIN_LIQUIDATION_RATIO_SCALED, RAY, WAD},
    errors::ErrorCodes,
};

/// RAY c-ratio from the oracle relayer to percent ×10.
pub fn scaled_liquidation_ratio(liquidation_c_ratio: u128) -> u128 {
    liquidation_c_ratio / CRATIO_SCALE_DOWN
}

pub fn validate_ratio_config(liquidation_ratio_scaled: u128) -> Result<()> {
    if liquidation_ratio_scaled == 0
        || liquidation_ratio_scaled < MIN_LIQUIDATION_RATIO_SCALED
        || liquidation_ratio_scaled % 10 != 0
    {
        return Err(error!(ErrorCodes::SaviourInvalidLiquidationRatio));
    }
    Ok(())
}

/// A desired ratio must sit strictly above the liquidation ratio and at or
/// below `max_ratio`.
pub fn validate_desired_ratio(
    candidate: u128,
    liquidation_ratio_scaled: u128,
    max_ratio: u128,
) -> Result<()> {
    if candidate <= liquidation_ratio_scaled / 10 {
        return Err(error!(ErrorCodes::SaviourInvalidDesiredRatio));
    }

    if candidate > max_ratio {
        return Err(error!(ErrorCodes::SaviourRatioExceedsMax));
    }

    Ok(())
}

/// Collateral value over debt value in percent, rounded down. `None` for a
/// SAFE without debt.
///
/// `collateral` and `debt` are 18 decimal internal amounts, `price` is 18
/// decimals and `redemption_price` 27.
pub fn collateralization_ratio(
    collateral: u128,
    debt: u128,
    price: u128,
    redemption_price: u128,
) -> Result<Option<u128>> {
    if debt == 0 {
        return Ok(None);
    }

    Ok(Some(wide_ratio_floor(
        &[collateral, price, HUNDRED, RAY],
        &[debt, redemption_price, WAD],
    )?))
}

/// Exact check that a SAFE sits at or above `target_ratio` percent.
pub fn is_at_or_above_ratio(
    collateral: u128,
    debt: u128,
    price: u128,
    redemption_price: u128,
    target_ratio: u128,
) -> Result<bool> {
    let ordering = compare_products(
        &[collateral, price, HUNDRED, RAY],
        &[target_ratio, debt, redemption_price, WAD],
    )?;
    Ok(ordering != Ordering::Less)
}

//! Rescue sizing: the collateral top-up that restores a SAFE's desired
//! ratio and the keeper payout eligibility rules.

use std::cmp::Ordering;

use anchor_lang::prelude::*;

use library::math::u256::{
    compare_products, product_ratio_ceil, safe_multiply_divide, safe_multiply_divide_ceil,
};

use crate::constants::{HUNDRED, RAY, WAD};

/// Collateral a SAFE must lock to sit at `target_ratio` percent, rounded up.
///
/// All amounts are 18 decimal internal units, `redemption_price` is 27
/// decimals. `price` must be non-zero.
pub fn required_collateral(
    debt: u128,
    redemption_price: u128,
    price: u128,
    target_ratio: u128,
) -> Result<u128> {
    let debt_value = safe_multiply_divide_ceil(debt, redemption_price, RAY)?;
    Ok(product_ratio_ceil(
        &[debt_value, target_ratio, WAD],
        &[HUNDRED, price],
    )?)
}

/// Top-up bringing `locked_collateral` to `required`, zero if already there.
pub fn collateral_shortfall(locked_collateral: u128, required: u128) -> u128 {
    required.saturating_sub(locked_collateral)
}

/// USD value of `payout` (18 decimals) at `price`.
pub fn keeper_payout_value(payout: u128, price: u128) -> Result<u128> {
    Ok(safe_multiply_divide(payout, price, WAD)?)
}

/// Whether the payout is worth at least `min_value`. An unusable price is
/// never enough.
pub fn payout_exceeds_min_value(payout: u128, min_value: u128, price: Option<u128>) -> Result<bool> {
    match price {
        Some(price) => Ok(keeper_payout_value(payout, price)? >= min_value),
        None => Ok(false),
    }
}

/// SAFEs locking less than `payout * payout_to_safe_size` are too small to rescue.
pub fn is_tiny_safe(locked_collateral: u128, payout: u128, payout_to_safe_size: u128) -> Result<bool> {
    let ordering = compare_products(&[locked_collateral], &[payout, payout_to_safe_size])?;
    Ok(ordering == Ordering::Less)
}

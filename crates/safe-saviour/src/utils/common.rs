use anchor_lang::prelude::*;

use crate::constants::MAX_TOKEN_DECIMALS;
use crate::errors::ErrorCodes;

use library::math::casting::*;
use library::math::safe_math::*;

fn get_scale(decimals: u8) -> Result<u128> {
    if decimals > 0 && decimals <= MAX_TOKEN_DECIMALS {
        Ok(10u128.pow((MAX_TOKEN_DECIMALS - decimals).cast()?))
    } else {
        Err(error!(ErrorCodes::SaviourInvalidJoinDecimals))
    }
}

/// Token units to the 18 decimal internal unit.
pub fn scale_amounts(amount: u128, decimals: u8) -> Result<u128> {
    let scale: u128 = get_scale(decimals)?;
    Ok(amount.safe_mul(scale)?)
}

/// Internal units back to token units, rounded up.
pub fn unscale_amounts_up(amount: u128, decimals: u8) -> Result<u128> {
    let scale: u128 = get_scale(decimals)?;
    Ok(amount.safe_div_ceil(scale)?)
}

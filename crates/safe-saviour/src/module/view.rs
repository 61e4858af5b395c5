use anchor_lang::prelude::*;

use library::math::safe_math::*;

use crate::{
    invokes::{usable_price, SafeData},
    state::{SafeSaviour, TokenAmount},
    utils::{common::*, ratio::scaled_liquidation_ratio, sizing::*},
};

/// Current collateral price, `None` when the feed is invalid or reports zero.
pub fn read_price(saviour: &SafeSaviour) -> Result<Option<u128>> {
    let params = saviour
        .collaborators
        .oracle_relayer
        .collateral_type(&saviour.collateral_type)?;
    Ok(usable_price(params.price_feed.as_ref()))
}

pub fn liquidation_ratio_scaled(saviour: &SafeSaviour) -> Result<u128> {
    let params = saviour
        .collaborators
        .oracle_relayer
        .collateral_type(&saviour.collateral_type)?;
    Ok(scaled_liquidation_ratio(params.liquidation_c_ratio))
}

pub fn read_safe(saviour: &SafeSaviour, handler: &Pubkey) -> Result<SafeData> {
    saviour
        .collaborators
        .safe_engine
        .safe(&saviour.collateral_type, handler)
}

/// Keeper payout in the 18 decimal internal unit.
pub fn scaled_keeper_payout(saviour: &SafeSaviour) -> Result<u128> {
    scale_amounts(saviour.payout.keeper_payout, saviour.collateral_decimals)
}

pub fn token_amount_required(saviour: &SafeSaviour, handler: &Pubkey) -> Result<TokenAmount> {
    let safe = read_safe(saviour, handler)?;
    if safe.generated_debt == 0 {
        return Ok(TokenAmount::Unbounded);
    }

    let Some(price) = read_price(saviour)? else {
        return Ok(TokenAmount::Unbounded);
    };
    let redemption_price = saviour.collaborators.oracle_relayer.redemption_price()?;

    let required = required_collateral(
        safe.generated_debt,
        redemption_price,
        price,
        saviour.ratios.target_ratio_of(handler),
    )?;
    let shortfall = collateral_shortfall(safe.locked_collateral, required);

    Ok(TokenAmount::Exact(unscale_amounts_up(
        shortfall,
        saviour.collateral_decimals,
    )?))
}

pub fn get_keeper_payout_value(saviour: &SafeSaviour) -> Result<u128> {
    match read_price(saviour)? {
        Some(price) => keeper_payout_value(scaled_keeper_payout(saviour)?, price),
        None => Ok(0),
    }
}

pub fn keeper_payout_exceeds_min_value(saviour: &SafeSaviour) -> Result<bool> {
    payout_exceeds_min_value(
        scaled_keeper_payout(saviour)?,
        saviour.payout.min_keeper_payout_value,
        read_price(saviour)?,
    )
}

pub fn is_safe_too_small(saviour: &SafeSaviour, safe: &SafeData) -> Result<bool> {
    is_tiny_safe(
        safe.locked_collateral,
        scaled_keeper_payout(saviour)?,
        saviour.payout.payout_to_safe_size,
    )
}

pub fn can_save(saviour: &SafeSaviour, handler: &Pubkey) -> Result<bool> {
    let Some(tokens_used) = token_amount_required(saviour, handler)?.actionable() else {
        return Ok(false);
    };

    let Some(deposit) = saviour.reserves.get(handler).filter(|d| d.balance > 0) else {
        return Ok(false);
    };

    if !keeper_payout_exceeds_min_value(saviour)? {
        return Ok(false);
    }

    if is_safe_too_small(saviour, &read_safe(saviour, handler)?)? {
        return Ok(false);
    }

    let reserve_needed = saviour.collaborators.operator.quote_reserve_in(
        &deposit.token,
        tokens_used.safe_add(saviour.payout.keeper_payout)?,
        &saviour.collateral_token,
    )?;

    Ok(deposit.balance >= reserve_needed)
}

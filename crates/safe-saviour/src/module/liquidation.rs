use anchor_lang::prelude::*;

use library::math::safe_math::*;

use crate::{
    constants::{ADDRESS_ZERO, EMPTY_COLLATERAL_TYPE},
    errors::ErrorCodes,
    events::{LogCollateralHeld, LogRescue},
    module::view::{is_safe_too_small, keeper_payout_exceeds_min_value, read_safe, token_amount_required},
    state::{CollateralType, RescueOutcome, SafeSaviour},
    utils::validate::verify_liquidation_engine,
};

/// Called by the liquidation engine when the saviour is attached. Never fails.
pub fn on_saviour_registered(_saviour: &SafeSaviour) -> RescueOutcome {
    RescueOutcome::registration()
}

pub fn rescue(
    saviour: &mut SafeSaviour,
    caller: &Pubkey,
    keeper: Pubkey,
    collateral_type: CollateralType,
    handler: Pubkey,
) -> Result<RescueOutcome> {
    verify_liquidation_engine(saviour.collaborators.liquidation_engine.as_ref(), caller)?;

    if keeper == ADDRESS_ZERO {
        return Err(error!(ErrorCodes::SaviourZeroKeeperAddress));
    }

    if keeper == *caller && collateral_type == EMPTY_COLLATERAL_TYPE && handler == ADDRESS_ZERO {
        return Ok(on_saviour_registered(saviour));
    }

    if collateral_type != saviour.collateral_type {
        return Err(error!(ErrorCodes::SaviourInvalidCollateralType));
    }

    let Some(deposit) = saviour.reserves.get(&handler) else {
        return Err(error!(ErrorCodes::SaviourNoReserveTokenSelected));
    };

    if !keeper_payout_exceeds_min_value(saviour)? {
        return Err(error!(ErrorCodes::SaviourPayoutTooSmall));
    }

    if is_safe_too_small(saviour, &read_safe(saviour, &handler)?)? {
        return Err(error!(ErrorCodes::SaviourTinySafe));
    }

    let Some(tokens_used) = token_amount_required(saviour, &handler)?.actionable() else {
        return Err(error!(ErrorCodes::SaviourInvalidComputedAmount));
    };

    let keeper_payout = saviour.payout.keeper_payout;
    let collateral_out = tokens_used.safe_add(keeper_payout)?;
    let reserve_used = saviour.collaborators.operator.quote_reserve_in(
        &deposit.token,
        collateral_out,
        &saviour.collateral_token,
    )?;

    if deposit.balance < reserve_used {
        return Err(error!(ErrorCodes::SaviourInsufficientReserveBalance));
    }

    // reserve leaves the ledger before any tokens move
    saviour.reserves.debit(&handler, reserve_used)?;

    let received = match saviour.collaborators.operator.redeem_and_convert(
        &deposit.token,
        reserve_used,
        collateral_out,
        &saviour.collateral_token,
        &saviour.key,
    ) {
        Ok(received) => received,
        Err(error) => {
            saviour.reserves.restore(handler, Some(deposit));
            return Err(error);
        }
    };

    // the reserve is spent from here on, undelivered collateral is held for the SAFE
    if received < collateral_out {
        msg!("Conversion returned {} of {} collateral", received, collateral_out);
        hold_collateral(saviour, handler, received)?;
        return Err(error!(ErrorCodes::SaviourConversionShortfall));
    }

    let collateral_added = received.safe_sub(keeper_payout)?;
    let collaborators = saviour.collaborators.clone();

    if let Err(error) = collaborators
        .collateral_join
        .join(&saviour.key, &handler, collateral_added)
    {
        hold_collateral(saviour, handler, received)?;
        return Err(error);
    }

    if let Err(error) = collaborators.token_ledger.transfer(
        &saviour.collateral_token,
        &saviour.key,
        &keeper,
        keeper_payout,
    ) {
        hold_collateral(saviour, handler, keeper_payout)?;
        return Err(error);
    }

    emit!(LogRescue {
        keeper,
        collateral_type,
        safe_handler: handler,
        reserve_token: deposit.token,
        reserve_used,
        collateral_added,
        keeper_payout,
    });

    Ok(RescueOutcome {
        saved: true,
        collateral_added,
        keeper_payout,
        reserve_used,
    })
}

fn hold_collateral(saviour: &mut SafeSaviour, handler: Pubkey, amount: u128) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let total_held = saviour.reserves.hold_collateral(handler, amount)?;

    emit!(LogCollateralHeld {
        safe_handler: handler,
        amount,
        total_held,
    });

    Ok(())
}

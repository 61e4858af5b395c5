use anchor_lang::prelude::*;

use crate::{
    constants::MAX_CRATIO,
    errors::ErrorCodes,
    events::*,
    module::view::{liquidation_ratio_scaled, read_safe},
    state::SafeSaviour,
    utils::{
        ratio::{validate_desired_ratio, validate_ratio_config},
        validate::verify_safe_owner,
    },
};

pub fn deposit(
    saviour: &mut SafeSaviour,
    caller: &Pubkey,
    safe_id: u64,
    amount: u128,
    reserve_token: Pubkey,
) -> Result<u128> {
    let collaborators = saviour.collaborators.clone();
    let safe = verify_safe_owner(collaborators.safe_manager.as_ref(), safe_id, caller)?;

    if !collaborators
        .liquidation_engine
        .is_saviour_registered(&saviour.key, &saviour.collateral_type)
    {
        return Err(error!(ErrorCodes::SaviourNotRegistered));
    }

    if amount == 0 {
        return Err(error!(ErrorCodes::SaviourZeroAmount));
    }

    if !collaborators.operator.is_whitelisted(&reserve_token) {
        return Err(error!(ErrorCodes::SaviourForbiddenToken));
    }

    saviour.reserves.ensure_accepts(&safe.handler, &reserve_token)?;

    if read_safe(saviour, &safe.handler)?.generated_debt == 0 {
        return Err(error!(ErrorCodes::SaviourNoDebt));
    }

    let snapshot = saviour.reserves.get(&safe.handler);
    let balance = saviour.reserves.credit(safe.handler, reserve_token, amount)?;

    if let Err(error) =
        collaborators
            .token_ledger
            .transfer(&reserve_token, caller, &saviour.key, amount)
    {
        saviour.reserves.restore(safe.handler, snapshot);
        return Err(error);
    }

    emit!(LogDeposit {
        caller: *caller,
        safe_id,
        safe_handler: safe.handler,
        reserve_token,
        amount,
    });

    Ok(balance)
}

pub fn withdraw(
    saviour: &mut SafeSaviour,
    caller: &Pubkey,
    safe_id: u64,
    amount: u128,
) -> Result<u128> {
    let collaborators = saviour.collaborators.clone();
    let safe = verify_safe_owner(collaborators.safe_manager.as_ref(), safe_id, caller)?;

    if amount == 0 {
        return Err(error!(ErrorCodes::SaviourZeroAmount));
    }

    let Some(deposit) = saviour
        .reserves
        .get(&safe.handler)
        .filter(|deposit| deposit.balance >= amount)
    else {
        return Err(error!(ErrorCodes::SaviourInsufficientBalance));
    };

    let remaining = saviour.reserves.debit(&safe.handler, amount)?;

    if let Err(error) =
        collaborators
            .token_ledger
            .transfer(&deposit.token, &saviour.key, caller, amount)
    {
        saviour.reserves.restore(safe.handler, Some(deposit));
        return Err(error);
    }

    emit!(LogWithdraw {
        caller: *caller,
        safe_id,
        safe_handler: safe.handler,
        reserve_token: deposit.token,
        amount,
    });

    Ok(remaining.balance)
}

/// Pays out collateral a failed rescue left in custody for the SAFE.
pub fn claim_collateral(saviour: &mut SafeSaviour, caller: &Pubkey, safe_id: u64) -> Result<u128> {
    let collaborators = saviour.collaborators.clone();
    let safe = verify_safe_owner(collaborators.safe_manager.as_ref(), safe_id, caller)?;

    let amount = saviour.reserves.take_held_collateral(&safe.handler);
    if amount == 0 {
        return Err(error!(ErrorCodes::SaviourNoHeldCollateral));
    }

    if let Err(error) =
        collaborators
            .token_ledger
            .transfer(&saviour.collateral_token, &saviour.key, caller, amount)
    {
        saviour.reserves.hold_collateral(safe.handler, amount)?;
        return Err(error);
    }

    emit!(LogClaimCollateral {
        caller: *caller,
        safe_id,
        safe_handler: safe.handler,
        amount,
    });

    Ok(amount)
}

pub fn set_desired_ratio(
    saviour: &mut SafeSaviour,
    caller: &Pubkey,
    safe_id: u64,
    desired_ratio: u128,
) -> Result<()> {
    let safe = verify_safe_owner(
        saviour.collaborators.safe_manager.as_ref(),
        safe_id,
        caller,
    )?;

    // the relayer may have moved the liquidation ratio since construction
    let liquidation_ratio_scaled = liquidation_ratio_scaled(saviour)?;
    validate_ratio_config(liquidation_ratio_scaled)?;
    validate_desired_ratio(desired_ratio, liquidation_ratio_scaled, MAX_CRATIO)?;

    saviour.ratios.set_custom_ratio(safe.handler, desired_ratio);

    emit!(LogSetDesiredRatio {
        caller: *caller,
        safe_id,
        safe_handler: safe.handler,
        desired_ratio,
    });

    Ok(())
}

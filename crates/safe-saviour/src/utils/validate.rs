use anchor_lang::prelude::*;

use crate::{
    constants::{ADDRESS_ZERO, MAX_TOKEN_DECIMALS},
    errors::ErrorCodes,
    invokes::{CollateralJoin, LiquidationEngine, PositionRegistry, SafeRef},
    state::SaviourCollaborators,
};

pub fn verify_collaborators(saviour: &Pubkey, collaborators: &SaviourCollaborators) -> Result<()> {
    if *saviour == ADDRESS_ZERO {
        return Err(error!(ErrorCodes::SaviourNullSaviourKey));
    }

    let checks = [
        (collaborators.collateral_join.key(), ErrorCodes::SaviourNullCollateralJoin),
        (collaborators.liquidation_engine.key(), ErrorCodes::SaviourNullLiquidationEngine),
        (collaborators.oracle_relayer.key(), ErrorCodes::SaviourNullOracleRelayer),
        (collaborators.safe_manager.key(), ErrorCodes::SaviourNullSafeManager),
        (collaborators.safe_engine.key(), ErrorCodes::SaviourNullSafeEngine),
        (collaborators.operator.key(), ErrorCodes::SaviourNullOperator),
        (collaborators.token_ledger.key(), ErrorCodes::SaviourNullTokenLedger),
    ];

    for (key, error) in checks {
        if key == ADDRESS_ZERO {
            return Err(error.into());
        }
    }

    Ok(())
}

pub fn verify_collateral_join(collateral_join: &dyn CollateralJoin) -> Result<()> {
    let decimals = collateral_join.decimals();
    if decimals == 0 || decimals > MAX_TOKEN_DECIMALS {
        return Err(error!(ErrorCodes::SaviourInvalidJoinDecimals));
    }

    if collateral_join.disabled() {
        return Err(error!(ErrorCodes::SaviourJoinDisabled));
    }

    Ok(())
}

/// Resolves `safe_id` and checks that `caller` owns it or is authorized by its owner.
pub fn verify_safe_owner(
    safe_manager: &dyn PositionRegistry,
    safe_id: u64,
    caller: &Pubkey,
) -> Result<SafeRef> {
    let safe = safe_manager.resolve(safe_id)?;

    if safe.owner != *caller && !safe_manager.is_authorized(&safe.owner, safe_id, caller) {
        return Err(error!(ErrorCodes::SaviourNotOwner));
    }

    Ok(safe)
}

pub fn verify_liquidation_engine(
    liquidation_engine: &dyn LiquidationEngine,
    caller: &Pubkey,
) -> Result<()> {
    if liquidation_engine.key() != *caller {
        return Err(error!(ErrorCodes::SaviourCallerNotLiquidationEngine));
    }
    Ok(())
}

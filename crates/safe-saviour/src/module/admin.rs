use anchor_lang::prelude::*;

use crate::{
    errors::ErrorCodes,
    events::LogSaviourInit,
    state::*,
    utils::{
        ratio::{scaled_liquidation_ratio, validate_ratio_config},
        validate::{verify_collaborators, verify_collateral_join},
    },
};

pub fn init_saviour(
    params: InitSaviourParams,
    collaborators: SaviourCollaborators,
) -> Result<SafeSaviour> {
    verify_collaborators(&params.saviour, &collaborators)?;

    let payout = KeeperPayoutConfig::new(
        params.keeper_payout,
        params.min_keeper_payout_value,
        params.payout_to_safe_size,
    )?;

    if params.default_desired_ratio == 0 {
        return Err(error!(ErrorCodes::SaviourNullDefaultRatio));
    }

    let collateral_join = collaborators.collateral_join.as_ref();
    verify_collateral_join(collateral_join)?;

    let collateral_type = collateral_join.collateral_type();
    let liquidation_ratio_scaled = scaled_liquidation_ratio(
        collaborators
            .oracle_relayer
            .collateral_type(&collateral_type)?
            .liquidation_c_ratio,
    );
    validate_ratio_config(liquidation_ratio_scaled)?;

    let ratios = RatioConfig::new(params.default_desired_ratio, liquidation_ratio_scaled)?;

    emit!(LogSaviourInit {
        saviour: params.saviour,
        collateral_type,
        keeper_payout: payout.keeper_payout,
        min_keeper_payout_value: payout.min_keeper_payout_value,
        payout_to_safe_size: payout.payout_to_safe_size,
        default_desired_ratio: ratios.default_desired_ratio,
    });

    Ok(SafeSaviour {
        key: params.saviour,
        collateral_type,
        collateral_token: collateral_join.collateral(),
        collateral_decimals: collateral_join.decimals(),
        payout,
        ratios,
        reserves: ReserveLedger::default(),
        collaborators,
    })
}

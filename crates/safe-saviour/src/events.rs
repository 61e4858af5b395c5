use anchor_lang::prelude::*;

#[event]
pub struct LogSaviourInit {
    pub saviour: Pubkey,
    pub collateral_type: [u8; 32],
    pub keeper_payout: u128,
    pub min_keeper_payout_value: u128,
    pub payout_to_safe_size: u128,
    pub default_desired_ratio: u128,
}

#[event]
pub struct LogDeposit {
    pub caller: Pubkey,
    pub safe_id: u64,
    pub safe_handler: Pubkey,
    pub reserve_token: Pubkey,
    pub amount: u128,
}

#[event]
pub struct LogWithdraw {
    pub caller: Pubkey,
    pub safe_id: u64,
    pub safe_handler: Pubkey,
    pub reserve_token: Pubkey,
    pub amount: u128,
}

#[event]
pub struct LogSetDesiredRatio {
    pub caller: Pubkey,
    pub safe_id: u64,
    pub safe_handler: Pubkey,
    pub desired_ratio: u128,
}

#[event]
pub struct LogRescue {
    pub keeper: Pubkey,
    pub collateral_type: [u8; 32],
    pub safe_handler: Pubkey,
    pub reserve_token: Pubkey,
    pub reserve_used: u128,
    pub collateral_added: u128,
    pub keeper_payout: u128,
}

#[event]
pub struct LogCollateralHeld {
    pub safe_handler: Pubkey,
    pub amount: u128,
    pub total_held: u128,
}

#[event]
pub struct LogClaimCollateral {
    pub caller: Pubkey,
    pub safe_id: u64,
    pub safe_handler: Pubkey,
    pub amount: u128,
}

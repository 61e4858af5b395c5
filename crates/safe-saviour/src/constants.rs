use anchor_lang::prelude::*;

/// Fixed-point unit for amounts, oracle prices and USD values
pub const WAD: u128 = 10u128.pow(18); // 1e18

/// Fixed-point unit for the redemption price and relayer c-ratios
pub const RAY: u128 = 10u128.pow(27); // 1e27

pub const HUNDRED: u128 = 100;

/// Largest desired collateralization ratio, in percent
pub const MAX_CRATIO: u128 = 1000;

/// Divides a RAY liquidation c-ratio down to percent ×10 (1.45e27 -> 1450)
pub const CRATIO_SCALE_DOWN: u128 = 10u128.pow(24); // 1e24

/// Lowest accepted scaled liquidation ratio (100%)
pub const MIN_LIQUIDATION_RATIO_SCALED: u128 = 1000;

/// Internal collateral accounting is 18 decimals; tokens may use fewer
pub const MAX_TOKEN_DECIMALS: u8 = 18;

/// Address treated as a missing collaborator or keeper
pub const ADDRESS_ZERO: Pubkey = Pubkey::new_from_array([0; 32]);

/// Collateral type passed by the liquidation engine when it registers a saviour
pub const EMPTY_COLLATERAL_TYPE: [u8; 32] = [0; 32];

// Test network deployment presets
pub const PRESET_KEEPER_PAYOUT: u128 = 5 * 10u128.pow(17); // 0.5 collateral
pub const PRESET_MIN_KEEPER_PAYOUT_VALUE: u128 = 500 * WAD; // $500
pub const PRESET_PAYOUT_TO_SAFE_SIZE: u128 = 10;
pub const PRESET_DEFAULT_DESIRED_RATIO: u128 = 170; // 170%

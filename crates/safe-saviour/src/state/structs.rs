use anchor_lang::prelude::*;

/// 32 byte collateral type tag, `"ETH-A"` right padded with zeroes.
pub type CollateralType = [u8; 32];

pub fn collateral_type_from_str(name: &str) -> CollateralType {
    let mut collateral_type = [0u8; 32];
    let len = name.len().min(32);
    collateral_type[..len].copy_from_slice(&name.as_bytes()[..len]);
    collateral_type
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct InitSaviourParams {
    pub saviour: Pubkey,                // Address holding reserve and collateral tokens in custody
    pub keeper_payout: u128,            // Collateral paid to the keeper, collateral token units
    pub min_keeper_payout_value: u128,  // Minimum USD value of the payout, 1e18
    pub payout_to_safe_size: u128,      // SAFE must lock at least keeper_payout * this
    pub default_desired_ratio: u128,    // Target ratio in percent, 170 = 170%
}

/// Collateral top-up needed to reach a SAFE's desired ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenAmount {
    /// The SAFE has no debt (or no usable price), no finite top-up exists
    Unbounded,
    /// Collateral token units to add, zero when already at or above target
    Exact(u128),
}

impl TokenAmount {
    /// Numeric form for callers expecting a plain amount.
    pub fn to_external(self) -> u128 {
        match self {
            TokenAmount::Unbounded => u128::MAX,
            TokenAmount::Exact(amount) => amount,
        }
    }

    /// Non-zero finite amount, the only kind a rescue can act on.
    pub fn actionable(self) -> Option<u128> {
        match self {
            TokenAmount::Exact(amount) if amount > 0 => Some(amount),
            _ => None,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RescueOutcome {
    pub saved: bool,
    pub collateral_added: u128,
    pub keeper_payout: u128,
    pub reserve_used: u128,
}

impl RescueOutcome {
    /// Returned to the liquidation engine when it registers the saviour.
    pub fn registration() -> Self {
        Self {
            saved: true,
            collateral_added: u128::MAX,
            keeper_payout: u128::MAX,
            reserve_used: 0,
        }
    }
}

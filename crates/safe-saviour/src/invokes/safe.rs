use anchor_lang::prelude::*;

use super::Collaborator;
use crate::state::CollateralType;

/// Collateral and debt of one SAFE, both in 18 decimal internal units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SafeData {
    pub locked_collateral: u128,
    pub generated_debt: u128,
}

/// Owner and handler of a SAFE registered with the position registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SafeRef {
    pub owner: Pubkey,
    pub handler: Pubkey,
}

pub trait SafeEngine: Collaborator {
    fn safe(&self, collateral_type: &CollateralType, handler: &Pubkey) -> Result<SafeData>;
}

/// Maps numeric SAFE ids to owners and handlers.
pub trait PositionRegistry: Collaborator {
    fn resolve(&self, safe_id: u64) -> Result<SafeRef>;

    /// Whether `caller` may act for `owner` on `safe_id`.
    fn is_authorized(&self, owner: &Pubkey, safe_id: u64, caller: &Pubkey) -> bool;
}

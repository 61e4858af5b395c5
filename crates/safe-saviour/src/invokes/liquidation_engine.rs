use anchor_lang::prelude::*;

use super::Collaborator;
use crate::state::CollateralType;

pub trait LiquidationEngine: Collaborator {
    /// Whether `saviour` may be attached to SAFEs of `collateral_type`.
    fn is_saviour_registered(&self, saviour: &Pubkey, collateral_type: &CollateralType) -> bool;
}

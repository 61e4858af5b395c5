use anchor_lang::prelude::*;

use super::Collaborator;
use crate::state::CollateralType;

/// Adapter moving collateral tokens into the safe engine.
pub trait CollateralJoin: Collaborator {
    fn decimals(&self) -> u8;

    fn disabled(&self) -> bool;

    fn collateral_type(&self) -> CollateralType;

    /// Collateral token mint
    fn collateral(&self) -> Pubkey;

    /// Pulls `amount` collateral tokens from `source` and credits them to
    /// `handler` in the safe engine.
    fn join(&self, source: &Pubkey, handler: &Pubkey, amount: u128) -> Result<()>;
}

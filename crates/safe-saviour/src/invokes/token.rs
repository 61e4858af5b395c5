use anchor_lang::prelude::*;

use super::Collaborator;

/// Token balances for reserve and collateral tokens.
pub trait TokenLedger: Collaborator {
    fn transfer(&self, token: &Pubkey, from: &Pubkey, to: &Pubkey, amount: u128) -> Result<()>;

    fn balance_of(&self, token: &Pubkey, owner: &Pubkey) -> u128;
}

use anchor_lang::prelude::*;
use dashmap::DashMap;
use tracing::debug;

use safe_saviour::invokes::{Collaborator, TokenLedger};

/// Balances keyed by `(token, owner)`.
#[derive(Debug, Default)]
pub struct MockTokenLedger {
    key: Pubkey,
    balances: DashMap<(Pubkey, Pubkey), u128>,
}

impl MockTokenLedger {
    pub fn new(key: Pubkey) -> Self {
        Self {
            key,
            balances: DashMap::new(),
        }
    }

    pub fn mint(&self, token: &Pubkey, owner: &Pubkey, amount: u128) {
        *self.balances.entry((*token, *owner)).or_default() += amount;
        debug!(%token, %owner, amount, "mint");
    }

    pub fn burn(&self, token: &Pubkey, owner: &Pubkey, amount: u128) -> Result<()> {
        let mut balance = self.balances.entry((*token, *owner)).or_default();
        if *balance < amount {
            return Err(ProgramError::InsufficientFunds.into());
        }
        *balance -= amount;
        debug!(%token, %owner, amount, "burn");
        Ok(())
    }
}

impl Collaborator for MockTokenLedger {
    fn key(&self) -> Pubkey {
        self.key
    }
}

impl TokenLedger for MockTokenLedger {
    fn transfer(&self, token: &Pubkey, from: &Pubkey, to: &Pubkey, amount: u128) -> Result<()> {
        self.burn(token, from, amount)?;
        self.mint(token, to, amount);
        Ok(())
    }

    fn balance_of(&self, token: &Pubkey, owner: &Pubkey) -> u128 {
        self.balances
            .get(&(*token, *owner))
            .map(|balance| *balance)
            .unwrap_or_default()
    }
}

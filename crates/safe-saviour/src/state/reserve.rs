use std::collections::HashMap;

use anchor_lang::prelude::*;

use library::math::safe_math::*;

use crate::errors::ErrorCodes;

/// Reserve tokens held for one SAFE. A SAFE is bound to a single reserve
/// token while its balance is non-zero.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReserveDeposit {
    pub token: Pubkey,
    pub balance: u128,
}

/// Reserve deposits keyed by SAFE handler, plus collateral a failed rescue
/// converted but could not deliver.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReserveLedger {
    deposits: HashMap<Pubkey, ReserveDeposit>,
    held_collateral: HashMap<Pubkey, u128>, // collateral token units
}

impl ReserveLedger {
    pub fn get(&self, handler: &Pubkey) -> Option<ReserveDeposit> {
        self.deposits.get(handler).copied()
    }

    pub fn token_of(&self, handler: &Pubkey) -> Option<Pubkey> {
        self.deposits.get(handler).map(|deposit| deposit.token)
    }

    pub fn balance_of(&self, handler: &Pubkey) -> u128 {
        self.deposits
            .get(handler)
            .map(|deposit| deposit.balance)
            .unwrap_or_default()
    }

    /// Fails with `SaviourTokenMismatch` when `handler` already holds another token.
    pub fn ensure_accepts(&self, handler: &Pubkey, token: &Pubkey) -> Result<()> {
        match self.deposits.get(handler) {
            Some(deposit) if deposit.token != *token && deposit.balance > 0 => {
                Err(error!(ErrorCodes::SaviourTokenMismatch))
            }
            _ => Ok(()),
        }
    }

    pub fn credit(&mut self, handler: Pubkey, token: Pubkey, amount: u128) -> Result<u128> {
        self.ensure_accepts(&handler, &token)?;

        let balance = self.balance_of(&handler).safe_add(amount)?;
        self.deposits.insert(handler, ReserveDeposit { token, balance });
        Ok(balance)
    }

    /// Decrements the balance of `handler`, unbinding its token at zero.
    pub fn debit(&mut self, handler: &Pubkey, amount: u128) -> Result<ReserveDeposit> {
        let Some(deposit) = self.deposits.get_mut(handler) else {
            return Err(error!(ErrorCodes::SaviourNoReserveTokenSelected));
        };

        if deposit.balance < amount {
            return Err(error!(ErrorCodes::SaviourInsufficientBalance));
        }
        deposit.balance = deposit.balance.safe_sub(amount)?;

        let remaining = *deposit;
        if remaining.balance == 0 {
            self.deposits.remove(handler);
        }
        Ok(remaining)
    }

    /// Puts back a deposit taken out by a failed operation.
    pub fn restore(&mut self, handler: Pubkey, snapshot: Option<ReserveDeposit>) {
        match snapshot {
            Some(deposit) => self.deposits.insert(handler, deposit),
            None => self.deposits.remove(&handler),
        };
    }

    pub fn held_collateral_of(&self, handler: &Pubkey) -> u128 {
        self.held_collateral
            .get(handler)
            .copied()
            .unwrap_or_default()
    }

    /// Books collateral in custody on behalf of `handler`. Returns the new total.
    pub fn hold_collateral(&mut self, handler: Pubkey, amount: u128) -> Result<u128> {
        let held = self.held_collateral_of(&handler).safe_add(amount)?;
        self.held_collateral.insert(handler, held);
        Ok(held)
    }

    /// Removes and returns everything held for `handler`.
    pub fn take_held_collateral(&mut self, handler: &Pubkey) -> u128 {
        self.held_collateral.remove(handler).unwrap_or_default()
    }
}

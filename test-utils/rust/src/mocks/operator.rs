use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, RwLock,
};

use anchor_lang::prelude::*;
use dashmap::DashSet;
use tracing::{debug, warn};

use library::math::u256::{safe_multiply_divide, safe_multiply_divide_ceil};
use safe_saviour::{
    constants::WAD,
    invokes::{Collaborator, ReserveOperator},
};

use super::MockTokenLedger;

/// Redeems reserve tokens at a fixed rate of collateral per whole reserve
/// token (`collateral_per_reserve`, 18 decimals) with the swap leg folded in.
pub struct MockReserveOperator {
    key: Pubkey,
    whitelist: DashSet<Pubkey>,
    collateral_per_reserve: RwLock<u128>,
    token_ledger: Arc<MockTokenLedger>,
    fail_redemptions: AtomicBool,
    short_pay: RwLock<u128>,
}

impl MockReserveOperator {
    pub fn new(key: Pubkey, collateral_per_reserve: u128, token_ledger: Arc<MockTokenLedger>) -> Self {
        Self {
            key,
            whitelist: DashSet::new(),
            collateral_per_reserve: RwLock::new(collateral_per_reserve),
            token_ledger,
            fail_redemptions: AtomicBool::new(false),
            short_pay: RwLock::new(0),
        }
    }

    pub fn whitelist(&self, reserve_token: Pubkey) {
        self.whitelist.insert(reserve_token);
    }

    pub fn set_collateral_per_reserve(&self, rate: u128) {
        if let Ok(mut current) = self.collateral_per_reserve.write() {
            *current = rate;
        }
    }

    /// Makes every later redemption fail, like an expired but unsettled option.
    pub fn set_fail_redemptions(&self, fail: bool) {
        self.fail_redemptions.store(fail, Ordering::SeqCst);
    }

    /// Withholds `amount` collateral from every later redemption and stops
    /// enforcing `min_out`, like a faulty operator would.
    pub fn set_short_pay(&self, amount: u128) {
        if let Ok(mut current) = self.short_pay.write() {
            *current = amount;
        }
    }

    fn short_pay(&self) -> u128 {
        self.short_pay.read().map(|amount| *amount).unwrap_or_default()
    }

    fn rate(&self) -> u128 {
        self.collateral_per_reserve
            .read()
            .map(|rate| *rate)
            .unwrap_or_default()
    }
}

impl Collaborator for MockReserveOperator {
    fn key(&self) -> Pubkey {
        self.key
    }
}

impl ReserveOperator for MockReserveOperator {
    fn is_whitelisted(&self, reserve_token: &Pubkey) -> bool {
        self.whitelist.contains(reserve_token)
    }

    fn quote_reserve_in(
        &self,
        _reserve_token: &Pubkey,
        collateral_out: u128,
        _out_token: &Pubkey,
    ) -> Result<u128> {
        Ok(safe_multiply_divide_ceil(collateral_out, WAD, self.rate())?)
    }

    fn redeem_and_convert(
        &self,
        reserve_token: &Pubkey,
        amount_in: u128,
        min_out: u128,
        out_token: &Pubkey,
        recipient: &Pubkey,
    ) -> Result<u128> {
        if self.fail_redemptions.load(Ordering::SeqCst) {
            warn!(%reserve_token, amount_in, "redemption refused");
            return Err(ProgramError::Custom(1).into());
        }

        if !self.is_whitelisted(reserve_token) {
            return Err(ProgramError::InvalidArgument.into());
        }

        let short_pay = self.short_pay();
        let amount_out = safe_multiply_divide(amount_in, self.rate(), WAD)?.saturating_sub(short_pay);
        if short_pay == 0 && amount_out < min_out {
            return Err(ProgramError::InsufficientFunds.into());
        }

        self.token_ledger.burn(reserve_token, recipient, amount_in)?;
        self.token_ledger.mint(out_token, recipient, amount_out);
        debug!(%reserve_token, amount_in, amount_out, "reserve redeemed");

        Ok(amount_out)
    }
}

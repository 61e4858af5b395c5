use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anchor_lang::prelude::*;
use tracing::debug;

use safe_saviour::{
    invokes::{Collaborator, CollateralJoin, TokenLedger},
    utils::common::scale_amounts,
    CollateralType,
};

use super::{MockSafeEngine, MockTokenLedger};

/// Moves collateral tokens into its own custody and credits the safe engine
/// in 18 decimal units.
pub struct MockCollateralJoin {
    key: Pubkey,
    collateral: Pubkey,
    collateral_type: CollateralType,
    decimals: u8,
    disabled: AtomicBool,
    token_ledger: Arc<MockTokenLedger>,
    safe_engine: Arc<MockSafeEngine>,
}

impl MockCollateralJoin {
    pub fn new(
        key: Pubkey,
        collateral: Pubkey,
        collateral_type: CollateralType,
        decimals: u8,
        token_ledger: Arc<MockTokenLedger>,
        safe_engine: Arc<MockSafeEngine>,
    ) -> Self {
        Self {
            key,
            collateral,
            collateral_type,
            decimals,
            disabled: AtomicBool::new(false),
            token_ledger,
            safe_engine,
        }
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.store(disabled, Ordering::SeqCst);
    }
}

impl Collaborator for MockCollateralJoin {
    fn key(&self) -> Pubkey {
        self.key
    }
}

impl CollateralJoin for MockCollateralJoin {
    fn decimals(&self) -> u8 {
        self.decimals
    }

    fn disabled(&self) -> bool {
        self.disabled.load(Ordering::SeqCst)
    }

    fn collateral_type(&self) -> CollateralType {
        self.collateral_type
    }

    fn collateral(&self) -> Pubkey {
        self.collateral
    }

    fn join(&self, source: &Pubkey, handler: &Pubkey, amount: u128) -> Result<()> {
        if self.disabled() {
            return Err(ProgramError::InvalidArgument.into());
        }

        self.token_ledger
            .transfer(&self.collateral, source, &self.key, amount)?;
        self.safe_engine
            .add_collateral(handler, scale_amounts(amount, self.decimals)?);
        debug!(%handler, amount, "collateral joined");
        Ok(())
    }
}

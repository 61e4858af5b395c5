use anchor_lang::prelude::*;
use dashmap::DashSet;

use safe_saviour::{
    invokes::{Collaborator, LiquidationEngine},
    CollateralType,
};

#[derive(Debug, Default)]
pub struct MockLiquidationEngine {
    key: Pubkey,
    saviours: DashSet<Pubkey>,
}

impl MockLiquidationEngine {
    pub fn new(key: Pubkey) -> Self {
        Self {
            key,
            saviours: DashSet::new(),
        }
    }

    pub fn connect_saviour(&self, saviour: Pubkey) {
        self.saviours.insert(saviour);
    }

    pub fn disconnect_saviour(&self, saviour: &Pubkey) {
        self.saviours.remove(saviour);
    }
}

impl Collaborator for MockLiquidationEngine {
    fn key(&self) -> Pubkey {
        self.key
    }
}

impl LiquidationEngine for MockLiquidationEngine {
    fn is_saviour_registered(&self, saviour: &Pubkey, _collateral_type: &CollateralType) -> bool {
        self.saviours.contains(saviour)
    }
}

use anchor_lang::prelude::*;
use dashmap::{DashMap, DashSet};
use tracing::debug;

use safe_saviour::{
    invokes::{Collaborator, PositionRegistry, SafeData, SafeEngine, SafeRef},
    CollateralType,
};

/// Collateral and debt per handler. The collateral type is ignored, a
/// harness only ever runs one.
#[derive(Debug, Default)]
pub struct MockSafeEngine {
    key: Pubkey,
    safes: DashMap<Pubkey, SafeData>,
}

impl MockSafeEngine {
    pub fn new(key: Pubkey) -> Self {
        Self {
            key,
            safes: DashMap::new(),
        }
    }

    pub fn set_safe(&self, handler: &Pubkey, locked_collateral: u128, generated_debt: u128) {
        self.safes.insert(
            *handler,
            SafeData {
                locked_collateral,
                generated_debt,
            },
        );
        debug!(%handler, locked_collateral, generated_debt, "safe updated");
    }

    pub fn add_collateral(&self, handler: &Pubkey, amount: u128) {
        self.safes.entry(*handler).or_default().locked_collateral += amount;
    }

    pub fn get(&self, handler: &Pubkey) -> SafeData {
        self.safes
            .get(handler)
            .map(|safe| *safe)
            .unwrap_or_default()
    }
}

impl Collaborator for MockSafeEngine {
    fn key(&self) -> Pubkey {
        self.key
    }
}

impl SafeEngine for MockSafeEngine {
    fn safe(&self, _collateral_type: &CollateralType, handler: &Pubkey) -> Result<SafeData> {
        Ok(self.get(handler))
    }
}

/// Position registry with per owner allowances.
#[derive(Debug, Default)]
pub struct MockSafeManager {
    key: Pubkey,
    safes: DashMap<u64, SafeRef>,
    allowed: DashSet<(Pubkey, u64, Pubkey)>,
}

impl MockSafeManager {
    pub fn new(key: Pubkey) -> Self {
        Self {
            key,
            ..Self::default()
        }
    }

    pub fn open_safe(&self, safe_id: u64, owner: Pubkey, handler: Pubkey) {
        self.safes.insert(safe_id, SafeRef { owner, handler });
    }

    pub fn allow(&self, owner: Pubkey, safe_id: u64, operator: Pubkey) {
        self.allowed.insert((owner, safe_id, operator));
    }
}

impl Collaborator for MockSafeManager {
    fn key(&self) -> Pubkey {
        self.key
    }
}

impl PositionRegistry for MockSafeManager {
    fn resolve(&self, safe_id: u64) -> Result<SafeRef> {
        match self.safes.get(&safe_id) {
            Some(safe) => Ok(*safe),
            None => Err(ProgramError::InvalidArgument.into()),
        }
    }

    fn is_authorized(&self, owner: &Pubkey, safe_id: u64, caller: &Pubkey) -> bool {
        self.allowed.contains(&(*owner, safe_id, *caller))
    }
}

use std::sync::Arc;

use anchor_lang::prelude::*;
use tracing::info;

use safe_saviour::{
    constants::{RAY, WAD},
    invokes::{Collaborator, TokenLedger},
    state::collateral_type_from_str,
    CollateralType, InitSaviourParams, RescueOutcome, SafeSaviour, SaviourCollaborators,
};

use crate::{config::DeployPreset, errors::Result, mocks::*};

pub const DEFAULT_KEEPER_PAYOUT: u128 = WAD / 10; // 0.1 collateral
pub const DEFAULT_MIN_KEEPER_PAYOUT_VALUE: u128 = 25 * WAD / 10; // $2.5
pub const DEFAULT_PAYOUT_TO_SAFE_SIZE: u128 = 20;
pub const DEFAULT_DESIRED_RATIO: u128 = 170;
pub const DEFAULT_LIQUIDATION_C_RATIO: u128 = 145 * RAY / 100; // 145%
pub const DEFAULT_COLLATERAL_PRICE: u128 = 30 * WAD;
pub const DEFAULT_REDEMPTION_PRICE: u128 = 3 * RAY;
pub const DEFAULT_COLLATERAL_PER_RESERVE: u128 = 4 * WAD;
pub const DEFAULT_COLLATERAL_DECIMALS: u8 = 18;

/// Collaborator to wire up with the zero key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullCollaborator {
    Saviour,
    CollateralJoin,
    LiquidationEngine,
    OracleRelayer,
    SafeManager,
    SafeEngine,
    Operator,
    TokenLedger,
}

/// Builder for a saviour wired to fresh mocks
#[derive(Debug, Clone)]
pub struct SaviourBuilder {
    keeper_payout: u128,
    min_keeper_payout_value: u128,
    payout_to_safe_size: u128,
    default_desired_ratio: u128,
    liquidation_c_ratio: u128,
    collateral_price: u128,
    redemption_price: u128,
    collateral_per_reserve: u128,
    collateral_decimals: u8,
    collateral_type: CollateralType,
    join_disabled: bool,
    registered: bool,
    null_collaborator: Option<NullCollaborator>,
}

impl Default for SaviourBuilder {
    fn default() -> Self {
        Self {
            keeper_payout: DEFAULT_KEEPER_PAYOUT,
            min_keeper_payout_value: DEFAULT_MIN_KEEPER_PAYOUT_VALUE,
            payout_to_safe_size: DEFAULT_PAYOUT_TO_SAFE_SIZE,
            default_desired_ratio: DEFAULT_DESIRED_RATIO,
            liquidation_c_ratio: DEFAULT_LIQUIDATION_C_RATIO,
            collateral_price: DEFAULT_COLLATERAL_PRICE,
            redemption_price: DEFAULT_REDEMPTION_PRICE,
            collateral_per_reserve: DEFAULT_COLLATERAL_PER_RESERVE,
            collateral_decimals: DEFAULT_COLLATERAL_DECIMALS,
            collateral_type: collateral_type_from_str("ETH-A"),
            join_disabled: false,
            registered: true,
            null_collaborator: None,
        }
    }
}

impl SaviourBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a deployment preset instead of the unit test defaults.
    pub fn from_preset(preset: DeployPreset) -> Self {
        Self {
            keeper_payout: preset.keeper_payout,
            min_keeper_payout_value: preset.min_keeper_payout_value,
            payout_to_safe_size: preset.payout_to_safe_size,
            default_desired_ratio: preset.default_desired_ratio,
            ..Self::default()
        }
    }

    pub fn keeper_payout(mut self, keeper_payout: u128) -> Self {
        self.keeper_payout = keeper_payout;
        self
    }

    pub fn min_keeper_payout_value(mut self, min_keeper_payout_value: u128) -> Self {
        self.min_keeper_payout_value = min_keeper_payout_value;
        self
    }

    pub fn payout_to_safe_size(mut self, payout_to_safe_size: u128) -> Self {
        self.payout_to_safe_size = payout_to_safe_size;
        self
    }

    pub fn default_desired_ratio(mut self, ratio: u128) -> Self {
        self.default_desired_ratio = ratio;
        self
    }

    /// Relayer c-ratio as a RAY, 1.45e27 for 145%.
    pub fn liquidation_c_ratio(mut self, liquidation_c_ratio: u128) -> Self {
        self.liquidation_c_ratio = liquidation_c_ratio;
        self
    }

    pub fn collateral_price(mut self, price: u128) -> Self {
        self.collateral_price = price;
        self
    }

    pub fn redemption_price(mut self, redemption_price: u128) -> Self {
        self.redemption_price = redemption_price;
        self
    }

    pub fn collateral_per_reserve(mut self, rate: u128) -> Self {
        self.collateral_per_reserve = rate;
        self
    }

    pub fn collateral_decimals(mut self, decimals: u8) -> Self {
        self.collateral_decimals = decimals;
        self
    }

    pub fn join_disabled(mut self, disabled: bool) -> Self {
        self.join_disabled = disabled;
        self
    }

    /// Leave the saviour disconnected from the liquidation engine.
    pub fn unregistered(mut self) -> Self {
        self.registered = false;
        self
    }

    pub fn null_collaborator(mut self, collaborator: NullCollaborator) -> Self {
        self.null_collaborator = Some(collaborator);
        self
    }

    fn key_for(&self, collaborator: NullCollaborator) -> Pubkey {
        if self.null_collaborator == Some(collaborator) {
            Pubkey::default()
        } else {
            Pubkey::new_unique()
        }
    }

    pub fn build_mocks(&self) -> Mocks {
        let token_ledger = Arc::new(MockTokenLedger::new(self.key_for(NullCollaborator::TokenLedger)));
        let safe_engine = Arc::new(MockSafeEngine::new(self.key_for(NullCollaborator::SafeEngine)));
        let price_feed = Arc::new(MockPriceFeed::new(self.collateral_price));
        let collateral_token = Pubkey::new_unique();
        let reserve_token = Pubkey::new_unique();

        let collateral_join = Arc::new(MockCollateralJoin::new(
            self.key_for(NullCollaborator::CollateralJoin),
            collateral_token,
            self.collateral_type,
            self.collateral_decimals,
            token_ledger.clone(),
            safe_engine.clone(),
        ));
        collateral_join.set_disabled(self.join_disabled);

        let operator = Arc::new(MockReserveOperator::new(
            self.key_for(NullCollaborator::Operator),
            self.collateral_per_reserve,
            token_ledger.clone(),
        ));
        operator.whitelist(reserve_token);

        Mocks {
            saviour_key: self.key_for(NullCollaborator::Saviour),
            collateral_token,
            reserve_token,
            collateral_type: self.collateral_type,
            oracle_relayer: Arc::new(MockOracleRelayer::new(
                self.key_for(NullCollaborator::OracleRelayer),
                price_feed.clone(),
                self.liquidation_c_ratio,
                self.redemption_price,
            )),
            price_feed,
            liquidation_engine: Arc::new(MockLiquidationEngine::new(
                self.key_for(NullCollaborator::LiquidationEngine),
            )),
            safe_manager: Arc::new(MockSafeManager::new(self.key_for(NullCollaborator::SafeManager))),
            safe_engine,
            collateral_join,
            operator,
            token_ledger,
        }
    }

    pub fn params(&self, saviour: Pubkey) -> InitSaviourParams {
        InitSaviourParams {
            saviour,
            keeper_payout: self.keeper_payout,
            min_keeper_payout_value: self.min_keeper_payout_value,
            payout_to_safe_size: self.payout_to_safe_size,
            default_desired_ratio: self.default_desired_ratio,
        }
    }

    /// Build, surfacing the saviour constructor error as is.
    pub fn try_build(self) -> anchor_lang::Result<SaviourHarness> {
        let mocks = self.build_mocks();
        let saviour = SafeSaviour::new(self.params(mocks.saviour_key), mocks.collaborators())?;

        if self.registered {
            mocks.liquidation_engine.connect_saviour(saviour.key);
        }
        info!(saviour = %saviour.key, "saviour harness ready");

        Ok(SaviourHarness {
            mocks,
            saviour,
            next_safe_id: 1,
        })
    }

    pub fn build(self) -> Result<SaviourHarness> {
        Ok(self.try_build()?)
    }
}

/// Mocks shared between a saviour and the test driving it.
pub struct Mocks {
    pub saviour_key: Pubkey,
    pub collateral_token: Pubkey,
    pub reserve_token: Pubkey,
    pub collateral_type: CollateralType,
    pub price_feed: Arc<MockPriceFeed>,
    pub oracle_relayer: Arc<MockOracleRelayer>,
    pub liquidation_engine: Arc<MockLiquidationEngine>,
    pub safe_manager: Arc<MockSafeManager>,
    pub safe_engine: Arc<MockSafeEngine>,
    pub collateral_join: Arc<MockCollateralJoin>,
    pub operator: Arc<MockReserveOperator>,
    pub token_ledger: Arc<MockTokenLedger>,
}

impl Mocks {
    pub fn collaborators(&self) -> SaviourCollaborators {
        SaviourCollaborators {
            collateral_join: self.collateral_join.clone(),
            liquidation_engine: self.liquidation_engine.clone(),
            oracle_relayer: self.oracle_relayer.clone(),
            safe_manager: self.safe_manager.clone(),
            safe_engine: self.safe_engine.clone(),
            operator: self.operator.clone(),
            token_ledger: self.token_ledger.clone(),
        }
    }
}

/// A SAFE opened through the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeHandle {
    pub id: u64,
    pub owner: Pubkey,
    pub handler: Pubkey,
}

pub struct SaviourHarness {
    pub mocks: Mocks,
    pub saviour: SafeSaviour,
    next_safe_id: u64,
}

impl SaviourHarness {
    /// Opens a SAFE locking `collateral` against `debt`, both 18 decimals.
    pub fn open_safe(&mut self, owner: Pubkey, collateral: u128, debt: u128) -> SafeHandle {
        let safe = SafeHandle {
            id: self.next_safe_id,
            owner,
            handler: Pubkey::new_unique(),
        };
        self.next_safe_id += 1;

        self.mocks.safe_manager.open_safe(safe.id, owner, safe.handler);
        self.mocks.safe_engine.set_safe(&safe.handler, collateral, debt);
        safe
    }

    pub fn liquidation_engine(&self) -> Pubkey {
        self.mocks.liquidation_engine.key()
    }

    /// Mints reserve tokens to the SAFE owner and deposits them.
    pub fn deposit_reserve(&mut self, safe: &SafeHandle, amount: u128) -> anchor_lang::Result<u128> {
        let reserve_token = self.mocks.reserve_token;
        self.mocks.token_ledger.mint(&reserve_token, &safe.owner, amount);
        self.saviour.deposit(&safe.owner, safe.id, amount, reserve_token)
    }

    /// Rescue as the liquidation engine would on liquidation.
    pub fn rescue(&mut self, keeper: Pubkey, safe: &SafeHandle) -> anchor_lang::Result<RescueOutcome> {
        let engine = self.liquidation_engine();
        let collateral_type = self.saviour.collateral_type;
        self.saviour.rescue(&engine, keeper, collateral_type, safe.handler)
    }

    pub fn token_balance(&self, token: &Pubkey, owner: &Pubkey) -> u128 {
        self.mocks.token_ledger.balance_of(token, owner)
    }

    pub fn collateral_balance(&self, owner: &Pubkey) -> u128 {
        self.token_balance(&self.mocks.collateral_token, owner)
    }

    pub fn reserve_token_balance(&self, owner: &Pubkey) -> u128 {
        self.token_balance(&self.mocks.reserve_token, owner)
    }
}
